//! Delimiter-safe splitting
//!
//!     Splits a string on a delimiter, but only where the delimiter sits at the top level:
//!     outside any `()`, `[]` or `{}` nesting and outside quoting. This is what lets a property
//!     value or a grid cell carry arbitrary punctuation.
//!
//! Quoting
//!
//!     Two quoting states suppress both delimiter and bracket tracking while active:
//!
//!         - plain quotes: an unescaped `"` toggles the state.
//!         - composite quotes: `"<` opens, `>"` closes. Inside, commas, colons, brackets, plain
//!           quotes and backslashes are all inert, so `"<C:\dir\>"` ends at the `>"`.
//!
//!     A backslash outside composite quotes escapes the next character. Only quotes care: an
//!     escaped `"` (or the `"` of an escaped `"<`) is literal text. Delimiters and brackets are
//!     not escapable.
//!
//!     A `"<` seen inside plain quotes is the closing quote followed by a literal `<`; a `>"`
//!     seen outside composite quotes is a literal `>` followed by a quote toggle. An unterminated
//!     quote is closed implicitly by the end of the input, so splitting is total.

use super::tokens::{tokenize, Token};
use std::ops::Range;

/// The delimiters the grammar splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Colon,
}

impl Delimiter {
    fn matches(self, token: Token) -> bool {
        matches!(
            (self, token),
            (Delimiter::Comma, Token::Comma) | (Delimiter::Colon, Token::Colon)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    None,
    Plain,
    Composite,
}

/// Running quote/depth state while walking the token stream.
#[derive(Debug)]
struct SplitState {
    depth: usize,
    quoting: Quoting,
    escaped: bool,
}

impl SplitState {
    fn new() -> Self {
        Self {
            depth: 0,
            quoting: Quoting::None,
            escaped: false,
        }
    }

    fn is_top_level(&self) -> bool {
        self.depth == 0 && self.quoting == Quoting::None
    }

    fn advance(&mut self, token: Token) {
        let escaped = std::mem::take(&mut self.escaped);
        if token == Token::Backslash && self.quoting != Quoting::Composite && !escaped {
            self.escaped = true;
            return;
        }
        if escaped && matches!(token, Token::Quote | Token::CompositeOpen) {
            return;
        }

        self.quoting = match (token, self.quoting) {
            (Token::CompositeOpen, Quoting::None) => Quoting::Composite,
            (Token::CompositeOpen, Quoting::Plain) => Quoting::None,
            (Token::CompositeClose, Quoting::Composite) => Quoting::None,
            (Token::CompositeClose, Quoting::None) => Quoting::Plain,
            (Token::CompositeClose, Quoting::Plain) => Quoting::None,
            (Token::Quote, Quoting::None) => Quoting::Plain,
            (Token::Quote, Quoting::Plain) => Quoting::None,
            (_, quoting) => quoting,
        };

        if self.quoting == Quoting::None {
            match token {
                Token::Open => self.depth += 1,
                Token::Close => self.depth = self.depth.saturating_sub(1),
                _ => {}
            }
        }
    }
}

/// Byte ranges of every top-level occurrence of `delimiter` in `source`.
fn delimiter_ranges(source: &str, delimiter: Delimiter) -> Vec<Range<usize>> {
    let mut state = SplitState::new();
    let mut ranges = Vec::new();

    for (token, span) in tokenize(source) {
        if delimiter.matches(token) && state.is_top_level() {
            ranges.push(span);
        }
        state.advance(token);
    }

    ranges
}

/// Split `source` on every top-level `delimiter`.
///
/// Fragments are trimmed. Empty fragments at the end are dropped; empty fragments in between
/// are kept so positions stay meaningful.
pub fn split_top_level(source: &str, delimiter: Delimiter) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for range in delimiter_ranges(source, delimiter) {
        fragments.push(source[start..range.start].trim());
        start = range.end;
    }
    fragments.push(source[start..].trim());

    while fragments.last().is_some_and(|fragment| fragment.is_empty()) {
        fragments.pop();
    }

    fragments
}

/// Split `source` at its first top-level `delimiter`.
///
/// Neither side is trimmed. Returns `None` when the delimiter never appears at the top level.
pub fn split_once_top_level(source: &str, delimiter: Delimiter) -> Option<(&str, &str)> {
    delimiter_ranges(source, delimiter)
        .into_iter()
        .next()
        .map(|range| (&source[..range.start], &source[range.end..]))
}
