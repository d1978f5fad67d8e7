//! Treeviz inspection view
//!
//! Output only. See `nuggt_parser::to_treeviz_str` for the layout of the view.

use crate::error::FormatError;
use crate::format::Format;
use nuggt_parser::{to_treeviz_str, Document};

pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Indented one-line-per-node tree for inspection"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treeviz_is_write_only() {
        assert!(!TreevizFormat.supports_parsing());
        assert!(matches!(
            TreevizFormat.parse("anything"),
            Err(FormatError::NotSupported(_))
        ));
    }
}
