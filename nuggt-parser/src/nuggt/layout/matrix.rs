//! Slot matrix
//!
//!     Places resolved row cells into a rows x N matrix and merges continuations vertically.
//!
//!     Cells live in an arena; matrix slots hold arena handles. Merging a continuation into the
//!     cell above it rewrites the continuation's slots to the handle of that cell, so several
//!     slots can name the same cell without any shared mutable references.
//!
//! Placement
//!
//!     Rows stack top to bottom; within a row each cell takes `column_span` consecutive slots
//!     from the left. A cell running past column N is cut at the edge (its span shrinks to what
//!     was placed); a cell starting at or beyond N is dropped. There is no wraparound.
//!
//! Continuations
//!
//!     A continuation looks at the slot directly above its first column. If that slot holds a
//!     content cell with the same column span, the cell grows by one row and takes over the
//!     continuation's slots. Otherwise the continuation is silently discarded. Either way no
//!     continuation survives into the finished layout.

use crate::nuggt::ast::{Cell, Layout};
use tracing::{debug, trace};

type Handle = usize;

/// The half-open column range `[start, end)` a cell occupies in one row.
#[derive(Debug, Clone, Copy)]
struct Slot {
    start: usize,
    end: usize,
    handle: Handle,
}

#[derive(Debug)]
pub struct SlotMatrix {
    column_count: usize,
    arena: Vec<Cell>,
    // Rows only record occupied ranges, left to right; N may be arbitrarily large.
    rows: Vec<Vec<Slot>>,
    // (row, start column, handle) of every placed continuation
    continuations: Vec<(usize, usize, Handle)>,
}

impl SlotMatrix {
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            arena: Vec::new(),
            rows: Vec::new(),
            continuations: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append one row of span-resolved cells below the existing rows.
    pub fn place_row(&mut self, cells: Vec<Cell>) {
        let row_index = self.rows.len();
        let mut slots = Vec::new();
        let mut cursor: usize = 0;

        for mut cell in cells {
            let start = cursor;
            cursor = cursor.saturating_add(cell.column_span);

            if start >= self.column_count {
                trace!(row = row_index, column = start, "dropping cell past the last column");
                continue;
            }
            let end = cursor.min(self.column_count);
            if end - start < cell.column_span {
                trace!(
                    row = row_index,
                    span = cell.column_span,
                    placed = end - start,
                    "truncating cell at the last column"
                );
                cell.column_span = end - start;
            }

            let handle = self.arena.len();
            if cell.is_continuation() {
                self.continuations.push((row_index, start, handle));
            }
            self.arena.push(cell);
            slots.push(Slot { start, end, handle });
        }

        self.rows.push(slots);
    }

    fn handle_at(&self, row: usize, column: usize) -> Option<Handle> {
        self.rows[row]
            .iter()
            .find(|slot| slot.start <= column && column < slot.end)
            .map(|slot| slot.handle)
    }

    /// Merge every continuation into the cell above it, top row first.
    pub fn resolve_continuations(&mut self) {
        let continuations = std::mem::take(&mut self.continuations);

        for (row, column, handle) in continuations {
            let above = row
                .checked_sub(1)
                .and_then(|previous| self.handle_at(previous, column));

            let Some(target) = above.filter(|&target| self.can_absorb(target, handle)) else {
                debug!(row, column, "discarding continuation without a matching cell above");
                continue;
            };

            self.arena[target].row_span += 1;
            for slot in self.rows[row].iter_mut() {
                if slot.handle == handle {
                    slot.handle = target;
                }
            }
            trace!(
                row,
                column,
                row_span = self.arena[target].row_span,
                "merged continuation"
            );
        }
    }

    fn can_absorb(&self, target: Handle, continuation: Handle) -> bool {
        let target = &self.arena[target];
        target.is_content() && target.column_span == self.arena[continuation].column_span
    }

    /// Collect the distinct placed cells in row-major order, dropping continuations.
    pub fn into_layout(self) -> Layout {
        let mut arena: Vec<Option<Cell>> = self.arena.into_iter().map(Some).collect();
        let mut cells = Vec::new();

        for slot in self.rows.iter().flatten() {
            if let Some(cell) = arena[slot.handle].take() {
                if !cell.is_continuation() {
                    cells.push(cell);
                }
            }
        }

        Layout::new(self.column_count, cells)
    }
}
