//! Document element
//!
//! An ordered sequence of layout blocks. Each parse call builds a fresh document; blocks share
//! no state with each other or with any earlier document.

use super::element::Element;
use super::layout::Layout;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Layout>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(blocks: Vec<Layout>) -> Self {
        Self { blocks }
    }

    pub fn push(&mut self, block: Layout) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter_blocks(&self) -> impl Iterator<Item = &Layout> {
        self.blocks.iter()
    }

    /// Every element of every block, in block order then cell order.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.blocks.iter().flat_map(Layout::iter_elements)
    }
}
