//! Output formats
//!
//!     - [serializer]: Document back to DSL text
//!     - [treeviz]: one-line-per-node inspection view

pub mod serializer;
pub mod treeviz;

pub use serializer::{
    quote_value, serialize_document, serialize_element, serialize_layout, NuggtSerializer,
    SerializeOptions,
};
pub use treeviz::to_treeviz_str;
