//! Grid row cells
//!
//!     Parses the interior of one `[N]: { ... }` line into cells and resolves their column
//!     spans. Each top-level fragment is one of:
//!
//!         space           empty cell, span 1 unless prefixed
//!         continue        continuation of the cell above
//!         [S]: rest       explicit span S
//!         rest            span resolved from what is left of the row
//!
//!     Content that is not a keyword is classified as an element, or kept as prose.
//!
//! Span Resolution
//!
//!     With `remaining = N - sum(explicit spans)` shared by the K cells without a span: a lone
//!     span-less cell at either end of the row takes all of `remaining`; otherwise each gets
//!     `remaining / K`, rounded down. The remainder of an inexact division is dropped, not
//!     redistributed, so such rows stay narrower than N. Computed spans never go below 1, and a
//!     sum of explicit spans too large to represent saturates instead of wrapping.

use crate::nuggt::ast::{Cell, CellKind, Element};
use crate::nuggt::lexing::{split_top_level, Delimiter};
use crate::nuggt::parsing::classify_element;
use crate::nuggt::parsing::grammar::{match_span_prefix, CONTINUE_KEYWORD, SPACE_KEYWORD};

/// A cell as written, before its span is known.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCell {
    pub kind: CellKind,
    pub explicit_span: Option<usize>,
}

impl RowCell {
    /// Parse one fragment of a row.
    pub fn parse(fragment: &str) -> Self {
        let (explicit_span, body) = match match_span_prefix(fragment) {
            Some((span, rest)) => (Some(span), rest),
            None => (None, fragment),
        };

        match body {
            SPACE_KEYWORD => RowCell {
                kind: CellKind::Empty,
                explicit_span: explicit_span.or(Some(1)),
            },
            CONTINUE_KEYWORD => RowCell {
                kind: CellKind::Continuation,
                explicit_span,
            },
            _ => RowCell {
                kind: CellKind::Content(
                    classify_element(body).unwrap_or_else(|| Element::markdown(body)),
                ),
                explicit_span,
            },
        }
    }
}

/// Split a row interior into its written cells.
pub fn parse_row_cells(row: &str) -> Vec<RowCell> {
    split_top_level(row, Delimiter::Comma)
        .into_iter()
        .map(RowCell::parse)
        .collect()
}

/// Give every cell of a row its column span.
pub fn resolve_spans(cells: Vec<RowCell>, column_count: usize) -> Vec<Cell> {
    let used = cells
        .iter()
        .filter_map(|cell| cell.explicit_span)
        .fold(0usize, usize::saturating_add);
    let remaining = column_count.saturating_sub(used);
    let unspanned = cells
        .iter()
        .filter(|cell| cell.explicit_span.is_none())
        .count();
    let last = cells.len().saturating_sub(1);

    cells
        .into_iter()
        .enumerate()
        .map(|(index, cell)| {
            let span = cell.explicit_span.unwrap_or_else(|| {
                if unspanned == 1 && (index == 0 || index == last) {
                    remaining
                } else {
                    remaining / unspanned
                }
            });
            Cell {
                kind: cell.kind,
                column_span: span.max(1),
                row_span: 1,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(row: &str, columns: usize) -> Vec<usize> {
        resolve_spans(parse_row_cells(row), columns)
            .iter()
            .map(|cell| cell.column_span)
            .collect()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(RowCell::parse("space").kind, CellKind::Empty);
        assert_eq!(RowCell::parse("space").explicit_span, Some(1));
        assert_eq!(RowCell::parse("[2]: space").explicit_span, Some(2));
        assert_eq!(RowCell::parse("continue").kind, CellKind::Continuation);
        assert_eq!(RowCell::parse("continue").explicit_span, None);
        assert_eq!(RowCell::parse("[3]: continue").explicit_span, Some(3));
    }

    #[test]
    fn test_content_cells() {
        let cell = RowCell::parse("[2]: card: (a: 1)");
        assert_eq!(cell.explicit_span, Some(2));
        match cell.kind {
            CellKind::Content(element) => {
                assert_eq!(element.kind, "card");
                assert_eq!(element.property("a"), Some("1"));
            }
            other => panic!("expected content, got {:?}", other),
        }

        match RowCell::parse("just words").kind {
            CellKind::Content(element) => assert_eq!(element.markdown_body(), Some("just words")),
            other => panic!("expected content, got {:?}", other),
        }
    }

    #[test]
    fn test_even_split() {
        assert_eq!(spans("card: (a: 1), card: (a: 2)", 2), vec![1, 1]);
        assert_eq!(spans("a, b, c, d", 4), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_lone_edge_cell_takes_remaining() {
        assert_eq!(spans("[1]: a, b", 4), vec![1, 3]);
        assert_eq!(spans("a, [1]: b", 4), vec![3, 1]);
        assert_eq!(spans("[1]: a, b, [1]: c", 4), vec![1, 2, 1]);
    }

    #[test]
    fn test_remainder_is_dropped() {
        assert_eq!(spans("a, b", 3), vec![1, 1]);
        assert_eq!(spans("[1]: x, a, b", 6), vec![1, 2, 2]);
    }

    #[test]
    fn test_space_counts_as_explicit() {
        assert_eq!(spans("space, a", 3), vec![1, 2]);
    }

    #[test]
    fn test_overcommitted_row_clamps_to_one() {
        assert_eq!(spans("[3]: a, b", 2), vec![3, 1]);
    }

    #[test]
    fn test_huge_explicit_spans_saturate() {
        assert_eq!(
            spans("[18446744073709551615]: a, [1]: b", 2),
            vec![usize::MAX, 1]
        );
        assert_eq!(spans("[99999999999999999999999]: a, b", 2), vec![usize::MAX, 1]);
    }

    #[test]
    fn test_empty_row() {
        assert!(parse_row_cells("  ").is_empty());
    }
}
