//! Cell
//!
//!     One slot of a layout grid. A cell spans `column_span` columns of its row and, after
//!     vertical merges, `row_span` rows downwards.
//!
//!     Continuation cells only exist while a grid is being resolved: they are either absorbed
//!     into the cell above them or discarded, and never reach a finished [`Layout`](super::Layout).

use super::element::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    Content(Element),
    Empty,
    Continuation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub column_span: usize,
    pub row_span: usize,
}

impl Cell {
    pub fn content(element: Element, column_span: usize) -> Self {
        Self {
            kind: CellKind::Content(element),
            column_span,
            row_span: 1,
        }
    }

    pub fn empty(column_span: usize) -> Self {
        Self {
            kind: CellKind::Empty,
            column_span,
            row_span: 1,
        }
    }

    pub fn continuation(column_span: usize) -> Self {
        Self {
            kind: CellKind::Continuation,
            column_span,
            row_span: 1,
        }
    }

    pub fn element(&self) -> Option<&Element> {
        match &self.kind {
            CellKind::Content(element) => Some(element),
            _ => None,
        }
    }

    pub fn is_content(&self) -> bool {
        matches!(self.kind, CellKind::Content(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, CellKind::Empty)
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self.kind, CellKind::Continuation)
    }
}
