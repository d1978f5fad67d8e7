//! Element classification
//!
//!     Recognizes one trimmed line (or one grid cell) as an element. Two grammars are tried in
//!     order:
//!
//!         1. bound:  kind: [ (PROPLIST), SUFFIX ]
//!         2. plain:  kind: (PROPLIST)
//!
//!     In the bound form a SUFFIX of `prompt: <text>` becomes the action trigger; any other
//!     SUFFIX is taken whole as the input binding. The kind is lower-cased and a `highlight`
//!     property is moved to the rationale.
//!
//!     Anything else is not an element; callers treat it as prose.

use super::grammar::{ELEMENT_HEAD_REGEX, PROMPT_SUFFIX_REGEX};
use super::properties::parse_property_list;
use crate::nuggt::ast::{Element, Payload};
use crate::nuggt::lexing::{split_once_top_level, Delimiter};

/// Classify `line` as an element, or `None` if it matches neither grammar.
pub fn classify_element(line: &str) -> Option<Element> {
    let captures = ELEMENT_HEAD_REGEX.captures(line.trim())?;
    let kind = captures.name("kind")?.as_str();
    let rest = captures.name("rest")?.as_str().trim();

    let mut element = if let Some(inner) = enclosed(rest, '[', ']') {
        parse_bound(kind, inner)?
    } else {
        let properties = enclosed(rest, '(', ')')?;
        Element::new(kind).with_properties(parse_property_list(properties))
    };

    element.extract_rationale();
    Some(element)
}

/// `(PROPLIST), SUFFIX` from inside the square brackets of a bound element.
fn parse_bound(kind: &str, inner: &str) -> Option<Element> {
    let (properties, suffix) = split_once_top_level(inner, Delimiter::Comma)?;
    let properties = enclosed(properties.trim(), '(', ')')?;
    let suffix = suffix.trim();

    let payload = match PROMPT_SUFFIX_REGEX.captures(suffix) {
        Some(captures) => Payload::Action(captures["trigger"].trim().to_string()),
        None => Payload::Input(suffix.to_string()),
    };

    Some(
        Element::new(kind)
            .with_properties(parse_property_list(properties))
            .with_payload(payload),
    )
}

/// The text between `open` and `close` if `source` starts and ends with them.
fn enclosed(source: &str, open: char, close: char) -> Option<&str> {
    source.strip_prefix(open)?.strip_suffix(close)
}
