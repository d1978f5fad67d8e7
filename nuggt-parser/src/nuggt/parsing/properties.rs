//! Property list parsing
//!
//!     Turns the inside of a parenthesized property list into a key/value map:
//!
//!         title: "Hi, there", content: "<Line one\nLine two>", size: 3
//!
//!     Fragments are split on top-level commas, then each fragment once on its first colon.
//!     Keys are trimmed. Values are trimmed, unquoted, and finally have every literal `\n`
//!     expanded to a newline. Unquoting happens first so that an escaped newline inside a
//!     composite quote survives the quote removal.
//!
//!     A fragment without a colon carries no key and is ignored.

use super::grammar::{COMPOSITE_QUOTED_REGEX, PLAIN_QUOTED_REGEX};
use crate::nuggt::ast::Properties;
use crate::nuggt::lexing::{split_top_level, Delimiter};

/// Parse a property list interior into a map. Later duplicates win.
pub fn parse_property_list(source: &str) -> Properties {
    let mut properties = Properties::new();

    for fragment in split_top_level(source, Delimiter::Comma) {
        let Some((key, value)) = fragment.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        properties.insert(key.to_string(), parse_value(value));
    }

    properties
}

/// Unquote a raw value and expand escaped newlines.
pub fn parse_value(raw: &str) -> String {
    expand_newlines(&unquote(raw.trim()))
}

/// Strip one level of quoting.
///
/// `"<X>"` becomes `X`; failing that, `"X"` becomes `X`; anything else is returned unchanged.
pub fn unquote(value: &str) -> String {
    if let Some(captures) = COMPOSITE_QUOTED_REGEX.captures(value) {
        return captures["inner"].to_string();
    }
    if let Some(captures) = PLAIN_QUOTED_REGEX.captures(value) {
        return captures["inner"].to_string();
    }
    value.to_string()
}

fn expand_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}
