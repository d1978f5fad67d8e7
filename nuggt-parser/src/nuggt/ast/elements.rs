//! Document model nodes
//!
//!     Document -> Layout (block) -> Cell -> Element

pub mod cell;
pub mod document;
pub mod element;
pub mod layout;

pub use cell::{Cell, CellKind};
pub use document::Document;
pub use element::{Element, GroupItem, Payload, Properties, HIGHLIGHT_KEY, MARKDOWN_KIND};
pub use layout::Layout;
