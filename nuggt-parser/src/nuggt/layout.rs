//! Grid layout resolution
//!
//! Turns the rows of one grid block (consecutive `[N]: { ... }` lines sharing N) into a
//! finished [`Layout`]: spans per row ([row]), then placement and vertical merges in a slot
//! matrix ([matrix]). The matrix is local to one call and discarded with it.

pub mod matrix;
pub mod row;

pub use matrix::SlotMatrix;
pub use row::{parse_row_cells, resolve_spans, RowCell};

use crate::nuggt::ast::Layout;
use tracing::trace;

/// Resolve the interiors of one or more grid rows declared with `column_count` columns.
pub fn resolve_grid<S: AsRef<str>>(column_count: usize, rows: &[S]) -> Layout {
    let mut matrix = SlotMatrix::new(column_count);

    for row in rows {
        let cells = resolve_spans(parse_row_cells(row.as_ref()), column_count);
        matrix.place_row(cells);
    }
    matrix.resolve_continuations();

    trace!(
        columns = column_count,
        rows = matrix.row_count(),
        "resolved grid block"
    );
    matrix.into_layout()
}
