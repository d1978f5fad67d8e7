//! Document assembly
//!
//!     Scans trimmed, non-empty lines top to bottom and routes each one to the grid layout
//!     engine or the element classifier. At most one run is pending at a time:
//!
//!         - a prose run: consecutive lines that are not elements,
//!         - a grid run: consecutive `[N]: { ... }` lines sharing the same N,
//!         - a group run: consecutive elements of the same groupable kind.
//!
//!     Starting a different kind of run flushes the pending one into the document. Any other
//!     element flushes everything and becomes a block of its own.
//!
//!     Blank lines are skipped entirely, so they never break a run.

use super::classifier::classify_element;
use super::grammar::match_grid_row;
use super::ParseOptions;
use crate::nuggt::ast::{Document, Element, GroupItem, Layout};
use crate::nuggt::layout::resolve_grid;
use tracing::debug;

const TRIGGER_KEY: &str = "trigger";
const CONTENT_KEY: &str = "content";

#[derive(Debug)]
enum Pending {
    Nothing,
    Prose(Vec<String>),
    Grid { columns: usize, rows: Vec<String> },
    Group { kind: String, items: Vec<GroupItem> },
}

pub struct Assembler<'a> {
    options: &'a ParseOptions,
    pending: Pending,
    document: Document,
}

impl<'a> Assembler<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            pending: Pending::Nothing,
            document: Document::new(),
        }
    }

    /// Feed every line of `source`.
    pub fn process_source(&mut self, source: &str) {
        for line in source.lines().map(str::trim).filter(|line| !line.is_empty()) {
            self.process_line(line);
        }
    }

    /// Route one trimmed, non-empty line.
    pub fn process_line(&mut self, line: &str) {
        if let Some((columns, cells)) = match_grid_row(line) {
            self.push_grid_row(columns, cells);
            return;
        }

        if matches!(self.pending, Pending::Grid { .. }) {
            self.flush();
        }

        match classify_element(line) {
            Some(element) if self.options.is_groupable(&element.kind) => {
                self.push_group_item(element)
            }
            Some(element) => {
                self.flush();
                self.document.push(Layout::single(element));
            }
            None => self.push_prose(line),
        }
    }

    fn push_grid_row(&mut self, columns: usize, cells: &str) {
        match &mut self.pending {
            Pending::Grid {
                columns: open,
                rows,
            } if *open == columns => rows.push(cells.to_string()),
            _ => {
                self.flush();
                self.pending = Pending::Grid {
                    columns,
                    rows: vec![cells.to_string()],
                };
            }
        }
    }

    fn push_group_item(&mut self, element: Element) {
        let item = GroupItem::new(
            element.property(TRIGGER_KEY).unwrap_or_default(),
            element.property(CONTENT_KEY).unwrap_or_default(),
        );

        match &mut self.pending {
            Pending::Group { kind, items } if *kind == element.kind => items.push(item),
            _ => {
                self.flush();
                self.pending = Pending::Group {
                    kind: element.kind,
                    items: vec![item],
                };
            }
        }
    }

    fn push_prose(&mut self, line: &str) {
        match &mut self.pending {
            Pending::Prose(lines) => lines.push(line.to_string()),
            _ => {
                self.flush();
                self.pending = Pending::Prose(vec![line.to_string()]);
            }
        }
    }

    /// Emit the pending run, if any, as a block.
    pub fn flush(&mut self) {
        let block = match std::mem::replace(&mut self.pending, Pending::Nothing) {
            Pending::Nothing => return,
            Pending::Prose(lines) => {
                debug!(lines = lines.len(), "flushing prose run");
                Layout::single(Element::markdown(lines.join("\n")))
            }
            Pending::Grid { columns, rows } => {
                debug!(columns, rows = rows.len(), "flushing grid run");
                resolve_grid(columns, &rows)
            }
            Pending::Group { kind, items } => {
                debug!(kind = %kind, items = items.len(), "flushing group run");
                Layout::single(Element::group(kind, items))
            }
        };
        self.document.push(block);
    }

    pub fn finish(mut self) -> Document {
        self.flush();
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assemble(source: &str) -> Document {
        let options = ParseOptions::default();
        let mut assembler = Assembler::new(&options);
        assembler.process_source(source);
        assembler.finish()
    }

    #[test]
    fn test_prose_lines_join() {
        let document = assemble("Some plain text\nMore text");
        assert_eq!(document.len(), 1);
        let element = document.blocks[0].as_single().unwrap();
        assert_eq!(element.markdown_body(), Some("Some plain text\nMore text"));
    }

    #[test]
    fn test_blank_lines_do_not_break_runs() {
        let document = assemble("one\n\n   \ntwo");
        assert_eq!(document.len(), 1);
        assert_eq!(
            document.blocks[0].as_single().unwrap().markdown_body(),
            Some("one\ntwo")
        );
    }

    #[test]
    fn test_element_splits_prose() {
        let document = assemble("intro\ncard: (a: 1)\noutro");
        assert_eq!(document.len(), 3);
        assert!(document.blocks[0].as_single().unwrap().is_markdown());
        assert_eq!(document.blocks[1].as_single().unwrap().kind, "card");
        assert!(document.blocks[2].as_single().unwrap().is_markdown());
    }

    #[test]
    fn test_grid_rows_with_same_columns_merge() {
        let document = assemble("[2]: { a, b }\n[2]: { c, d }");
        assert_eq!(document.len(), 1);
        assert_eq!(document.blocks[0].cells.len(), 4);
    }

    #[test]
    fn test_grid_rows_with_different_columns_split() {
        let document = assemble("[2]: { a, b }\n[3]: { c, d, e }");
        assert_eq!(document.len(), 2);
        assert_eq!(document.blocks[0].column_count, 2);
        assert_eq!(document.blocks[1].column_count, 3);
    }

    #[test]
    fn test_groupable_elements_merge() {
        let document = assemble(
            "accordion: (trigger: Q1, content: A1)\naccordion: (trigger: Q2, content: A2)\ncard: (a: 1)",
        );
        assert_eq!(document.len(), 2);
        let group = document.blocks[0].as_single().unwrap();
        assert_eq!(group.kind, "accordion");
        assert_eq!(
            group.group_items(),
            &[GroupItem::new("Q1", "A1"), GroupItem::new("Q2", "A2")]
        );
    }

    #[test]
    fn test_prose_breaks_group() {
        let document = assemble(
            "accordion: (trigger: Q1, content: A1)\nbetween\naccordion: (trigger: Q2, content: A2)",
        );
        assert_eq!(document.len(), 3);
        assert_eq!(document.blocks[0].as_single().unwrap().group_items().len(), 1);
        assert_eq!(document.blocks[2].as_single().unwrap().group_items().len(), 1);
    }

    #[test]
    fn test_empty_source() {
        assert!(assemble("").is_empty());
        assert!(assemble("\n \n").is_empty());
    }
}
