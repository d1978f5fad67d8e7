//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the visitor used to walk a document and the [`AstNode`] trait every node
//! implements to dispatch into it.

use super::elements::{Cell, Document, Element, Layout};

/// Visitor trait for traversing the AST
///
/// Default implementations are empty, so you only need to override the methods you care about.
/// Container nodes get a `visit_*` call before their children and a `leave_*` call after.
///
/// # Example
///
/// ```ignore
/// struct CountButtons(usize);
///
/// impl Visitor for CountButtons {
///     fn visit_element(&mut self, element: &Element) {
///         if element.kind == "button" {
///             self.0 += 1;
///         }
///     }
/// }
///
/// let mut visitor = CountButtons(0);
/// document.accept(&mut visitor);
/// ```
pub trait Visitor {
    fn visit_document(&mut self, _document: &Document) {}
    fn leave_document(&mut self, _document: &Document) {}

    fn visit_layout(&mut self, _layout: &Layout) {}
    fn leave_layout(&mut self, _layout: &Layout) {}

    fn visit_cell(&mut self, _cell: &Cell) {}
    fn leave_cell(&mut self, _cell: &Cell) {}

    fn visit_element(&mut self, _element: &Element) {}
}

pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn accept(&self, visitor: &mut dyn Visitor);
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        for block in &self.blocks {
            block.accept(visitor);
        }
        visitor.leave_document(self);
    }
}

impl AstNode for Layout {
    fn node_type(&self) -> &'static str {
        "Layout"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_layout(self);
        for cell in &self.cells {
            cell.accept(visitor);
        }
        visitor.leave_layout(self);
    }
}

impl AstNode for Cell {
    fn node_type(&self) -> &'static str {
        "Cell"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_cell(self);
        if let Some(element) = self.element() {
            element.accept(visitor);
        }
        visitor.leave_cell(self);
    }
}

impl AstNode for Element {
    fn node_type(&self) -> &'static str {
        "Element"
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_element(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit_layout(&mut self, layout: &Layout) {
            self.events.push(format!("layout:{}", layout.column_count));
        }
        fn leave_layout(&mut self, _layout: &Layout) {
            self.events.push("/layout".to_string());
        }
        fn visit_cell(&mut self, cell: &Cell) {
            self.events.push(format!("cell:{}", cell.column_span));
        }
        fn visit_element(&mut self, element: &Element) {
            self.events.push(format!("element:{}", element.kind));
        }
    }

    #[test]
    fn test_walks_blocks_cells_and_elements_in_order() {
        let document = Document::with_blocks(vec![
            Layout::new(
                3,
                vec![Cell::content(Element::new("card"), 2), Cell::empty(1)],
            ),
            Layout::single(Element::new("button")),
        ]);

        let mut recorder = Recorder::default();
        document.accept(&mut recorder);

        assert_eq!(
            recorder.events,
            vec![
                "layout:3",
                "cell:2",
                "element:card",
                "cell:1",
                "/layout",
                "layout:1",
                "cell:1",
                "element:button",
                "/layout",
            ]
        );
    }
}
