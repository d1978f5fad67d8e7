//! Treeviz formatter for nuggt documents
//!
//! One line per node, nesting shown as two spaces per level:
//!
//!     <indentation><icon><space><label>
//!
//! Labels are truncated to 30 characters.
//!
//! Example:
//!
//!     ⧉ Document (2 blocks)
//!       ▦ Layout 3 cols, 3 cells
//!         ▢ card a=1 [2x2]
//!         ▢ button label=Go [1x1]
//!         ▢ alert title=Hi [1x1]
//!       ▦ Layout 1 cols, 1 cells
//!         ¶ Some plain text [1x1]
//!
//! Icons
//!     Document: ⧉
//!     Layout: ▦
//!     Element: ▢
//!     Prose: ¶
//!     Group: ☰
//!     GroupItem: •
//!     Empty: □
//!     Continuation: ↧

use crate::nuggt::ast::{AstNode, Cell, CellKind, Document, Layout, Payload, Visitor};

const MAX_LABEL_CHARS: usize = 30;

/// Render a document as a treeviz string.
pub fn to_treeviz_str(document: &Document) -> String {
    let mut writer = TreevizWriter::default();
    document.accept(&mut writer);
    writer.output
}

fn truncate(label: &str) -> String {
    let label = label.lines().next().unwrap_or_default();
    if label.chars().count() > MAX_LABEL_CHARS {
        let truncated: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", truncated)
    } else {
        label.to_string()
    }
}

#[derive(Default)]
struct TreevizWriter {
    output: String,
    depth: usize,
}

impl TreevizWriter {
    fn line(&mut self, icon: &str, label: &str) {
        self.output.push_str(&"  ".repeat(self.depth));
        self.output.push_str(icon);
        self.output.push(' ');
        self.output.push_str(label);
        self.output.push('\n');
    }
}

impl Visitor for TreevizWriter {
    fn visit_document(&mut self, document: &Document) {
        self.line("⧉", &format!("Document ({} blocks)", document.len()));
        self.depth += 1;
    }

    fn leave_document(&mut self, _document: &Document) {
        self.depth -= 1;
    }

    fn visit_layout(&mut self, layout: &Layout) {
        self.line(
            "▦",
            &format!(
                "Layout {} cols, {} cells",
                layout.column_count,
                layout.cells.len()
            ),
        );
        self.depth += 1;
    }

    fn leave_layout(&mut self, _layout: &Layout) {
        self.depth -= 1;
    }

    fn visit_cell(&mut self, cell: &Cell) {
        let size = format!("[{}x{}]", cell.column_span, cell.row_span);
        match &cell.kind {
            CellKind::Empty => self.line("□", &format!("space {}", size)),
            CellKind::Continuation => self.line("↧", &format!("continue {}", size)),
            CellKind::Content(element) => {
                let icon = match &element.payload {
                    Payload::Markdown(_) => "¶",
                    Payload::Group(_) => "☰",
                    _ => "▢",
                };
                self.line(icon, &format!("{} {}", truncate(&element.to_string()), size));

                self.depth += 1;
                for item in element.group_items() {
                    self.line("•", &truncate(&item.trigger));
                }
                self.depth -= 1;
            }
        }
    }
}
