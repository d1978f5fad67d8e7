//! Abstract syntax tree for nuggt documents
//!
//! A document is a flat, ordered list of layout blocks. There is no nesting beyond the single
//! grid each block carries.

pub mod elements;
pub mod traits;

pub use elements::{
    Cell, CellKind, Document, Element, GroupItem, Layout, Payload, Properties, HIGHLIGHT_KEY,
    MARKDOWN_KIND,
};
pub use traits::{AstNode, Visitor};
