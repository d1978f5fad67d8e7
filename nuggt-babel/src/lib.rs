//! Format interop for nuggt documents
//!
//!     A uniform interface for moving a nuggt [`Document`](nuggt_parser::Document) in and out of
//!     text representations. The DSL itself is one format among others, so converting DSL to
//!     JSON and JSON back to DSL goes through the same two calls.
//!
//! Architecture
//!
//!     - Format trait: parse and/or serialize, plus a name and file extensions
//!     - FormatRegistry: discovery and selection by name or file name
//!     - formats/<name>: one implementation per format
//!
//!     This is a pure lib: it powers nuggt-cli but never touches stdio, env vars or files.
//!
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── nuggt               # the DSL, via nuggt-parser
//!     │   ├── json                # serde_json view of the document model
//!     │   ├── yaml                # serde_yaml view of the document model
//!     │   └── treeviz             # inspection only, no parsing
//!     └── lib.rs
//!
//! Lossiness
//!
//!     JSON and YAML carry the document model exactly and round-trip in both directions. The DSL
//!     round-trips every document whose grid rows are full; see the serializer in nuggt-parser
//!     for the shapes it cannot express.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
