//! DSL serializer
//!
//!     The inverse of parsing: walks a [`Document`] and writes DSL text, so a (possibly edited)
//!     document can be handed back to a generation channel as a textual snapshot.
//!
//! Elements
//!
//!     - prose is written as its raw body.
//!     - a group container is written as one `kind: (trigger: ..., content: ...)` line per item.
//!       Parsing the text again regroups them.
//!     - anything else is written in the plain or bound form. A rationale goes back out as a
//!       trailing `highlight` property.
//!
//!     Values holding structural punctuation, quotes, newlines or surrounding whitespace are
//!     wrapped in the composite `"<...>"` quote, with newlines written as `\n`.
//!
//! Layouts
//!
//!     A one-column layout holding a single element is written as the bare element, except for
//!     prose next to other bare prose, which would read back merged into one block and goes out
//!     as a `[1]: { ... }` row instead. Other layouts are written row by row: cells are laid out
//!     left to right with a running column cursor, and a new `[N]: { ... }` line starts whenever
//!     the next cell would not fit. Cells that span several rows re-emit `continue` markers at
//!     their column in the rows below; columns left of such a marker with nothing to write are
//!     filled with continuations that cannot merge.

use crate::nuggt::ast::{
    AstNode, Cell, CellKind, Document, Element, Layout, Payload, Visitor, HIGHLIGHT_KEY,
};
use crate::nuggt::layout::RowCell;
use crate::nuggt::lexing::{split_top_level, Delimiter};
use crate::nuggt::parsing::grammar::{CONTINUE_KEYWORD, PROMPT_KEYWORD, SPACE_KEYWORD};

/// Characters that force a value into composite quotes.
const STRUCTURAL_CHARS: &[char] = &[',', ':', '(', ')', '[', ']', '{', '}', '"', '\n'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    /// End the output with a newline.
    pub trailing_newline: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            trailing_newline: true,
        }
    }
}

/// Serialize a whole document.
pub fn serialize_document(document: &Document, options: &SerializeOptions) -> String {
    let mut serializer = NuggtSerializer::new();
    document.accept(&mut serializer);
    serializer.finish(options)
}

/// Serialize one layout block, without a trailing newline.
pub fn serialize_layout(layout: &Layout) -> String {
    let mut serializer = NuggtSerializer::new();
    layout.accept(&mut serializer);
    serializer.lines.join("\n")
}

/// Serialize one element as it would appear on its own line(s).
pub fn serialize_element(element: &Element) -> String {
    match &element.payload {
        Payload::Markdown(body) => body.clone(),
        Payload::Group(items) if !items.is_empty() => items
            .iter()
            .map(|item| {
                format!(
                    "{}: ({})",
                    element.kind,
                    property_list([
                        ("trigger", item.trigger.as_str()),
                        ("content", item.content.as_str()),
                    ])
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        payload => {
            let properties = property_list(
                element
                    .properties
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .chain(element.rationale.as_deref().map(|why| (HIGHLIGHT_KEY, why))),
            );
            match payload {
                Payload::Action(trigger) => format!(
                    "{}: [({}), {}: {}]",
                    element.kind, properties, PROMPT_KEYWORD, trigger
                ),
                Payload::Input(binding) => {
                    format!("{}: [({}), {}]", element.kind, properties, binding)
                }
                _ => format!("{}: ({})", element.kind, properties),
            }
        }
    }
}

/// Quote a property value so that parsing it yields `value` again.
pub fn quote_value(value: &str) -> String {
    let needs_quotes = value.contains(STRUCTURAL_CHARS) || value.trim() != value;
    if needs_quotes {
        format!("\"<{}>\"", value.replace('\n', "\\n"))
    } else {
        value.to_string()
    }
}

fn property_list<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}: {}", key, quote_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A cell merged downwards whose `continue` markers are still owed.
#[derive(Debug, Clone, Copy)]
struct Merge {
    column: usize,
    span: usize,
    rows_left: usize,
    written: bool,
}

/// Columns covered by one written cell, and whether a continuation below could merge into it.
#[derive(Debug, Clone, Copy)]
struct Covered {
    start: usize,
    span: usize,
    absorbs: bool,
}

/// Row-by-row writer for one multi-cell layout.
#[derive(Debug)]
struct GridWriter {
    columns: usize,
    cursor: usize,
    // (span, text) of the cells written to the current row
    row: Vec<(usize, String)>,
    covered: Vec<Covered>,
    above: Vec<Covered>,
    merges: Vec<Merge>,
    started: Vec<Merge>,
    lines: Vec<String>,
}

impl GridWriter {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            cursor: 0,
            row: Vec::new(),
            covered: Vec::new(),
            above: Vec::new(),
            merges: Vec::new(),
            started: Vec::new(),
            lines: Vec::new(),
        }
    }

    fn push_cell(&mut self, cell: &Cell) {
        let span = cell.column_span.max(1);
        loop {
            self.write_due_continuations();
            if self.cursor > 0 && self.cursor.saturating_add(span) > self.columns {
                self.close_row();
                continue;
            }
            break;
        }

        if cell.row_span > 1 {
            self.started.push(Merge {
                column: self.cursor,
                span,
                rows_left: cell.row_span - 1,
                written: false,
            });
        }
        self.write(span, cell_text(cell), cell.is_content());
    }

    fn write(&mut self, span: usize, text: String, absorbs: bool) {
        self.row.push((span, text));
        self.covered.push(Covered {
            start: self.cursor,
            span,
            absorbs,
        });
        self.cursor = self.cursor.saturating_add(span);
    }

    /// Write `continue` for every merge starting at the cursor.
    fn write_due_continuations(&mut self) {
        while let Some(index) = self
            .merges
            .iter()
            .position(|merge| !merge.written && merge.column == self.cursor)
        {
            self.merges[index].written = true;
            let span = self.merges[index].span;
            self.write(span, CONTINUE_KEYWORD.to_string(), true);
        }
    }

    /// Fill the row up to `column` with cells that parse back to nothing: a `continue` whose
    /// span differs from the cell above it, or `space` when no such span exists.
    fn pad_to(&mut self, column: usize) {
        while self.cursor < column {
            let gap = column - self.cursor;
            let above = self
                .above
                .iter()
                .find(|cell| cell.start <= self.cursor && self.cursor - cell.start < cell.span)
                .filter(|cell| cell.absorbs)
                .map(|cell| cell.span);
            match above {
                Some(span) if span == gap && gap == 1 => {
                    self.write(1, SPACE_KEYWORD.to_string(), false)
                }
                Some(span) if span == gap => {
                    self.write(gap - 1, CONTINUE_KEYWORD.to_string(), false)
                }
                _ => self.write(gap, CONTINUE_KEYWORD.to_string(), false),
            }
        }
    }

    fn close_row(&mut self) {
        self.merges.sort_by_key(|merge| merge.column);
        for index in 0..self.merges.len() {
            let merge = self.merges[index];
            if merge.written {
                continue;
            }
            self.pad_to(merge.column);
            self.merges[index].written = true;
            self.write(merge.span, CONTINUE_KEYWORD.to_string(), true);
        }

        if !self.row.is_empty() {
            // A row narrower than the grid only parses back to the same spans when every
            // span is written out.
            let filled = self
                .row
                .iter()
                .map(|(span, _)| *span)
                .fold(0usize, usize::saturating_add);
            let explicit = filled < self.columns;
            let cells = self
                .row
                .drain(..)
                .map(|(span, text)| {
                    if explicit || span > 1 {
                        format!("[{}]: {}", span, text)
                    } else {
                        text
                    }
                })
                .collect::<Vec<_>>();
            self.lines
                .push(format!("[{}]: {{ {} }}", self.columns, cells.join(", ")));
        }
        self.cursor = 0;
        self.above = std::mem::take(&mut self.covered);

        self.merges.retain_mut(|merge| {
            merge.rows_left -= 1;
            merge.written = false;
            merge.rows_left > 0
        });
        self.merges.append(&mut self.started);
    }

    fn finish(mut self) -> Vec<String> {
        self.close_row();
        while !self.merges.is_empty() {
            self.close_row();
        }
        self.lines
    }
}

/// Text of one grid cell. A grid row is a single line, so multi-line element text is folded.
fn cell_text(cell: &Cell) -> String {
    match &cell.kind {
        CellKind::Content(element) => serialize_element(element)
            .lines()
            .collect::<Vec<_>>()
            .join(" "),
        CellKind::Empty => SPACE_KEYWORD.to_string(),
        CellKind::Continuation => CONTINUE_KEYWORD.to_string(),
    }
}

/// Whether `text` reads back from a one-cell grid row as the same prose.
fn fits_in_cell(text: &str) -> bool {
    !text.contains('\n')
        && split_top_level(text, Delimiter::Comma) == [text]
        && RowCell::parse(text)
            == RowCell {
                kind: CellKind::Content(Element::markdown(text)),
                explicit_span: None,
            }
}

/// Decide which prose blocks go out as `[1]: { ... }` rows.
///
/// Two adjacent bare prose blocks would read back as one, so of every such pair one is wrapped
/// in a one-column row. Prose that cannot live in a cell stays bare and its neighbour is wrapped
/// instead.
fn wrapped_prose(blocks: &[Layout]) -> Vec<bool> {
    let prose = |index: usize| {
        blocks
            .get(index)
            .and_then(Layout::as_single)
            .and_then(Element::markdown_body)
    };

    let mut wrapped = vec![false; blocks.len()];
    let mut previous_bare = false;
    for (index, wrap) in wrapped.iter_mut().enumerate() {
        let Some(body) = prose(index) else {
            previous_bare = false;
            continue;
        };
        let next_stays_bare = prose(index + 1).is_some_and(|next| !fits_in_cell(next));
        *wrap = (previous_bare || next_stays_bare) && fits_in_cell(body);
        previous_bare = !*wrap;
    }
    wrapped
}

pub struct NuggtSerializer {
    lines: Vec<String>,
    grid: Option<GridWriter>,
    wrapped: Vec<bool>,
    block: usize,
}

impl NuggtSerializer {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            grid: None,
            wrapped: Vec::new(),
            block: 0,
        }
    }

    pub fn finish(self, options: &SerializeOptions) -> String {
        let mut output = self.lines.join("\n");
        if options.trailing_newline && !output.is_empty() {
            output.push('\n');
        }
        output
    }
}

impl Default for NuggtSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for NuggtSerializer {
    fn visit_document(&mut self, document: &Document) {
        self.wrapped = wrapped_prose(&document.blocks);
        self.block = 0;
    }

    fn visit_layout(&mut self, layout: &Layout) {
        let wrap = self.wrapped.get(self.block).copied().unwrap_or(false);
        self.block += 1;
        match layout.as_single() {
            Some(element) if !wrap => self.lines.push(serialize_element(element)),
            _ => self.grid = Some(GridWriter::new(layout.column_count.max(1))),
        }
    }

    fn visit_cell(&mut self, cell: &Cell) {
        if let Some(grid) = self.grid.as_mut() {
            grid.push_cell(cell);
        }
    }

    fn leave_layout(&mut self, _layout: &Layout) {
        if let Some(grid) = self.grid.take() {
            self.lines.extend(grid.finish());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nuggt::ast::GroupItem;
    use crate::nuggt::parsing::parse_document;

    #[test]
    fn test_plain_element() {
        let element = Element::new("card")
            .with_property("title", "Hi, there")
            .with_property("content", "X");
        assert_eq!(
            serialize_element(&element),
            r#"card: (content: X, title: "<Hi, there>")"#
        );
    }

    #[test]
    fn test_bound_elements() {
        let action = Element::new("button")
            .with_property("label", "Go")
            .with_payload(Payload::Action("Submit <emailId>".into()));
        assert_eq!(
            serialize_element(&action),
            "button: [(label: Go), prompt: Submit <emailId>]"
        );

        let input = Element::new("input").with_payload(Payload::Input("emailId".into()));
        assert_eq!(serialize_element(&input), "input: [(), emailId]");
    }

    #[test]
    fn test_rationale_is_written_as_highlight() {
        let element = Element::new("card")
            .with_property("a", "1")
            .with_rationale("Why: I did this");
        assert_eq!(
            serialize_element(&element),
            r#"card: (a: 1, highlight: "<Why: I did this>")"#
        );
    }

    #[test]
    fn test_group_writes_one_line_per_item() {
        let group = Element::group(
            "accordion",
            vec![GroupItem::new("Q1", "A1"), GroupItem::new("Q2", "A, 2")],
        );
        assert_eq!(
            serialize_element(&group),
            "accordion: (trigger: Q1, content: A1)\naccordion: (trigger: Q2, content: \"<A, 2>\")"
        );
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("plain words"), "plain words");
        assert_eq!(quote_value("a: b"), r#""<a: b>""#);
        assert_eq!(quote_value("line\nbreak"), r#""<line\nbreak>""#);
        assert_eq!(quote_value(" padded"), r#""< padded>""#);
        assert_eq!(quote_value(r#""quoted""#), r#""<"quoted">""#);
        assert_eq!(quote_value(""), "");
    }

    #[test]
    fn test_single_layout_is_bare() {
        let layout = Layout::single(Element::new("card").with_property("a", "1"));
        assert_eq!(serialize_layout(&layout), "card: (a: 1)");
    }

    #[test]
    fn test_rows_break_on_overflow() {
        let layout = Layout::new(
            3,
            vec![
                Cell::content(Element::new("card"), 2),
                Cell::empty(1),
                Cell::content(Element::markdown("text"), 3),
            ],
        );
        assert_eq!(
            serialize_layout(&layout),
            "[3]: { [2]: card: (), space }\n[3]: { [3]: text }"
        );
    }

    #[test]
    fn test_row_span_writes_continuations() {
        let mut merged = Cell::content(Element::new("card").with_property("a", "1"), 2);
        merged.row_span = 2;
        let layout = Layout::new(
            3,
            vec![
                merged,
                Cell::content(Element::new("button").with_property("label", "Go"), 1),
                Cell::content(Element::new("alert").with_property("title", "Hi"), 1),
            ],
        );
        assert_eq!(
            serialize_layout(&layout),
            "[3]: { [2]: card: (a: 1), button: (label: Go) }\n[3]: { [2]: continue, alert: (title: Hi) }"
        );
    }

    #[test]
    fn test_trailing_row_span_pads_up_to_its_column() {
        let mut merged = Cell::content(Element::new("b").with_property("x", "1"), 1);
        merged.row_span = 2;
        let layout = Layout::new(2, vec![Cell::empty(1), merged]);

        let text = serialize_layout(&layout);
        assert_eq!(text, "[2]: { space, b: (x: 1) }\n[2]: { continue, continue }");
        assert_eq!(parse_document(&text).blocks, vec![layout]);
    }

    #[test]
    fn test_padding_never_merges_into_the_cell_above() {
        let mut merged = Cell::content(Element::new("card"), 1);
        merged.row_span = 2;
        let layout = Layout::new(3, vec![Cell::content(Element::new("a"), 2), merged]);

        let text = serialize_layout(&layout);
        assert_eq!(
            text,
            "[3]: { [2]: a: (), card: () }\n[3]: { continue, continue, continue }"
        );
        assert_eq!(parse_document(&text).blocks, vec![layout]);
    }

    #[test]
    fn test_unmergeable_gap_falls_back_to_space() {
        let mut merged = Cell::content(Element::new("card"), 1);
        merged.row_span = 3;
        let layout = Layout::new(2, vec![Cell::content(Element::new("a"), 1), merged]);
        assert_eq!(
            serialize_layout(&layout),
            "[2]: { a: (), card: () }\n[2]: { space, continue }\n[2]: { continue, continue }"
        );
    }

    #[test]
    fn test_huge_column_count() {
        let layout = Layout::new(usize::MAX, vec![Cell::content(Element::new("a"), usize::MAX)]);
        assert_eq!(
            serialize_layout(&layout),
            "[18446744073709551615]: { [18446744073709551615]: a: () }"
        );
    }

    #[test]
    fn test_adjacent_prose_blocks_stay_apart() {
        let document = parse_document("[1]: { hello }\nworld");
        assert_eq!(document.len(), 2);

        let text = serialize_document(&document, &SerializeOptions::default());
        assert_eq!(text, "hello\n[1]: { world }\n");
        assert_eq!(parse_document(&text), document);
    }

    #[test]
    fn test_multi_line_prose_keeps_its_lines() {
        let document = parse_document("[1]: { hello }\nworld\nagain");

        let text = serialize_document(&document, &SerializeOptions::default());
        assert_eq!(text, "[1]: { hello }\nworld\nagain\n");
        assert_eq!(parse_document(&text), document);
    }

    #[test]
    fn test_document_joins_blocks() {
        let document = Document::with_blocks(vec![
            Layout::single(Element::markdown("Intro\nMore")),
            Layout::single(Element::new("card")),
        ]);
        assert_eq!(
            serialize_document(&document, &SerializeOptions::default()),
            "Intro\nMore\ncard: ()\n"
        );
        assert_eq!(
            serialize_document(
                &document,
                &SerializeOptions {
                    trailing_newline: false
                }
            ),
            "Intro\nMore\ncard: ()"
        );
    }
}
