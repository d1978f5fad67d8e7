//! JSON view of the document model
//!
//! A direct serde mapping of [`Document`]. The output is pretty-printed; any JSON that
//! deserializes into the model is accepted.

use crate::error::FormatError;
use crate::format::Format;
use nuggt_parser::Document;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document model as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(serde_json::from_str(source)?)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let mut output = serde_json::to_string_pretty(doc)?;
        output.push('\n');
        Ok(output)
    }
}
