//! # nuggt-parser
//!
//! The compiler for the nuggt layout DSL: a line-oriented markup a generator emits and a
//! rendering layer paints as widgets.
//!
//! File Layout
//!
//!     src/nuggt
//!       ├── lexing      Token stream and the delimiter-safe splitter
//!       ├── parsing     Property lists, element classification, document assembly
//!       ├── layout      Grid rows: span resolution, slot matrix, vertical merges
//!       ├── formats     DSL serializer and treeviz rendering
//!       └── ast         Document, Layout, Cell, Element and the Visitor trait
//!
//! Data flows one way: splitter, property parser, classifier, layout engine, document. The
//! serializer walks a document back to DSL text. Every entry point is pure and total: any input
//! string parses to some document, so callers driving a live editor or a generation stream never
//! have to handle parse failures.

pub mod nuggt;

pub use nuggt::ast::{Cell, CellKind, Document, Element, GroupItem, Layout, Payload, Properties};
pub use nuggt::formats::{serialize_document, to_treeviz_str, SerializeOptions};
pub use nuggt::parsing::{parse_document, parse_document_with, ParseOptions};
