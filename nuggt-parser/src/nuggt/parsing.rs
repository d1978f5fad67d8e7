//! Parsing
//!
//! From DSL text to a [`Document`]. The stages, leaves first:
//!
//!     - [properties]: `key: value, ...` lists with unquoting
//!     - [classifier]: one line as a typed element, or nothing
//!     - [assembler]: line routing and run accumulation into blocks
//!
//! Grid rows are handed from the assembler to [`crate::nuggt::layout`].
//!
//! Parsing never fails: a line matching no grammar is prose, and a malformed grid row still
//! yields a layout.

pub mod assembler;
pub mod classifier;
pub mod grammar;
pub mod properties;

pub use assembler::Assembler;
pub use classifier::classify_element;
pub use properties::{parse_property_list, unquote};

use crate::nuggt::ast::Document;

/// Options controlling how lines are grouped into blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Kinds whose consecutive siblings merge into a single container element.
    pub groupable_kinds: Vec<String>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groupable_kinds<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.groupable_kinds = kinds
            .into_iter()
            .map(|kind| kind.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn is_groupable(&self, kind: &str) -> bool {
        self.groupable_kinds.iter().any(|groupable| groupable == kind)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            groupable_kinds: vec!["accordion".to_string()],
        }
    }
}

/// Parse DSL text with the default options.
pub fn parse_document(source: &str) -> Document {
    parse_document_with(source, &ParseOptions::default())
}

/// Parse DSL text.
pub fn parse_document_with(source: &str, options: &ParseOptions) -> Document {
    let mut assembler = Assembler::new(options);
    assembler.process_source(source);
    assembler.finish()
}
