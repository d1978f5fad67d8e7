//! Layout
//!
//!     A block of the document: one grid of cells sharing a declared column count. Cells are
//!     stored row-major after vertical merges have been resolved, so a cell with `row_span > 1`
//!     appears once, at the position of its top row.
//!
//!     A freestanding element is a layout too: one column, one content cell. Consumers walk
//!     every block the same way and never special-case bare elements.

use super::cell::Cell;
use super::element::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub column_count: usize,
    pub cells: Vec<Cell>,
}

impl Layout {
    pub fn new(column_count: usize, cells: Vec<Cell>) -> Self {
        Self {
            column_count,
            cells,
        }
    }

    /// Wrap a single element as a one-column, one-cell layout.
    pub fn single(element: Element) -> Self {
        Self::new(1, vec![Cell::content(element, 1)])
    }

    /// The wrapped element if this layout is a single freestanding element.
    pub fn as_single(&self) -> Option<&Element> {
        match self.cells.as_slice() {
            [cell] if self.column_count == 1 && cell.row_span == 1 => cell.element(),
            _ => None,
        }
    }

    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.cells.iter().filter_map(Cell::element)
    }
}
