//! Grammar Pattern Definitions
//!
//! Line-level grammar of the DSL as lazily compiled regexes. Structural punctuation inside the
//! captured bodies is never matched here: bodies are handed to the delimiter-safe splitter.
//!
//! # Forms
//!
//! | Form                 | Syntax                                        |
//! |----------------------|-----------------------------------------------|
//! | Grid row             | `[<N>]: { <cell>, <cell>, ... }`              |
//! | Cell (explicit span) | `[<S>]: <element-or-text>`                    |
//! | Element head         | `kind: <rest>`                                |
//! | Action suffix        | `prompt: <text>`                              |

use once_cell::sync::Lazy;
use regex::Regex;

/// `[N]: { ... }` with the column count and the row interior captured.
pub(crate) static GRID_ROW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\[(?P<columns>\d+)\]\s*:\s*\{(?P<cells>.*)\}$").unwrap());

/// `[S]: rest` prefix on a single grid cell.
pub(crate) static SPAN_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\[(?P<span>\d+)\]\s*:\s*(?P<rest>.*)$").unwrap());

/// `kind: rest`, the common head of both element forms.
pub(crate) static ELEMENT_HEAD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<kind>[A-Za-z_][A-Za-z0-9_-]*)\s*:\s*(?P<rest>.*)$").unwrap()
});

/// `prompt: text` suffix of a bound element.
pub(crate) static PROMPT_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^prompt\s*:\s*(?P<trigger>.*)$").unwrap());

/// Composite quoted value: `"<X>"`.
pub(crate) static COMPOSITE_QUOTED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^"<(?P<inner>.*)>"$"#).unwrap());

/// Plain quoted value: `"X"`.
pub(crate) static PLAIN_QUOTED_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^"(?P<inner>.*)"$"#).unwrap());

/// Literal cell keywords.
pub(crate) const SPACE_KEYWORD: &str = "space";
pub(crate) const CONTINUE_KEYWORD: &str = "continue";
pub(crate) const PROMPT_KEYWORD: &str = "prompt";

/// Match a grid row line, returning its declared column count and interior.
///
/// A column count of zero, or one too large to represent, is not a grid row.
pub fn match_grid_row(line: &str) -> Option<(usize, &str)> {
    let captures = GRID_ROW_REGEX.captures(line)?;
    let columns = captures.name("columns")?.as_str().parse::<usize>().ok()?;
    if columns == 0 {
        return None;
    }
    Some((columns, captures.name("cells")?.as_str()))
}

/// Match an explicit `[S]:` span prefix, returning the span and the remaining content.
///
/// A span of zero is clamped to one; a span too large to represent saturates.
pub fn match_span_prefix(fragment: &str) -> Option<(usize, &str)> {
    let captures = SPAN_PREFIX_REGEX.captures(fragment)?;
    // The pattern only admits digits, so a failed parse is an overflow.
    let span = captures
        .name("span")?
        .as_str()
        .parse::<usize>()
        .unwrap_or(usize::MAX);
    Some((span.max(1), captures.name("rest")?.as_str().trim()))
}
