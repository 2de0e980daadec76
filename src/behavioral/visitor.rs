// Visitor
//
// Adds operations to an object hierarchy without changing the element types.
// Each element accepts a visitor, which is applied to the element and then
// carried down to its children. New operations are new visitors.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Visitor Pattern - Walking an Element Tree
// ============================================================================

pub trait Visitor {
    fn visit(&mut self, element: &Element);
}

pub trait Visitable {
    fn accept(&self, visitor: &mut dyn Visitor);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub value: i64,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn add(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

impl Visitable for Element {
    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit(self);
        for child in &self.children {
            child.accept(visitor);
        }
    }
}

#[derive(Debug, Default)]
pub struct PrintElementNamesVisitor {
    pub names: Vec<String>,
}

impl Visitor for PrintElementNamesVisitor {
    fn visit(&mut self, element: &Element) {
        self.names.push(element.name.clone());
    }
}

#[derive(Debug, Default)]
pub struct CalculateElementsTotalsVisitor {
    pub total_value: i64,
}

impl Visitor for CalculateElementsTotalsVisitor {
    fn visit(&mut self, element: &Element) {
        self.total_value += element.value;
    }
}

/// A(100) -> [B(200), C(300) -> [D(400)]]
pub fn sample_hierarchy() -> Element {
    Element::new("A", 100)
        .with_child(Element::new("B", 200))
        .with_child(Element::new("C", 300).with_child(Element::new("D", 400)))
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct VisitorExample;

impl PatternExample for VisitorExample {
    fn name(&self) -> &'static str {
        "visitor"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "run new operations over a hierarchy without changing its types"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let root = sample_hierarchy();

        let mut names = PrintElementNamesVisitor::default();
        root.accept(&mut names);
        let mut totals = CalculateElementsTotalsVisitor::default();
        root.accept(&mut totals);

        let mut transcript = Transcript::new();
        transcript.extend(names.names);
        transcript.push(totals.total_value.to_string());
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
