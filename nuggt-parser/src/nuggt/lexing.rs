//! Lexing
//!
//! Tokenization of DSL fragments through the logos lexer, and the delimiter-safe splitter built
//! on top of the token stream. Every other stage of the compiler slices its input with
//! [`split_top_level`] or [`split_once_top_level`].

pub mod splitter;
pub mod tokens;

pub use splitter::{split_once_top_level, split_top_level, Delimiter};
pub use tokens::{tokenize, Token};
