//! The nuggt DSL as a format
//!
//! Delegates both directions to nuggt-parser. Parsing never fails: malformed lines come back as
//! prose blocks, so `parse` always returns `Ok`.

use crate::error::FormatError;
use crate::format::Format;
use nuggt_parser::{
    parse_document_with, serialize_document, Document, ParseOptions, SerializeOptions,
};

#[derive(Debug, Clone, Default)]
pub struct NuggtFormat {
    parse_options: ParseOptions,
    serialize_options: SerializeOptions,
}

impl NuggtFormat {
    pub fn new(parse_options: ParseOptions, serialize_options: SerializeOptions) -> Self {
        Self {
            parse_options,
            serialize_options,
        }
    }
}

impl Format for NuggtFormat {
    fn name(&self) -> &str {
        "nuggt"
    }

    fn description(&self) -> &str {
        "nuggt layout DSL"
    }

    fn file_extensions(&self) -> &[&str] {
        &["nuggt", "ngt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_document_with(source, &self.parse_options))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc, &self.serialize_options))
    }
}
