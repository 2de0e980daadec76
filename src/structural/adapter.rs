// Adapter
//
// Lets a type with an incompatible interface be used where another interface
// is expected. The adapter implements the expected `method_a` by delegating
// to the adaptee's differently named `method_b`.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Adapter Pattern - Wrapping a Foreign Interface
// ============================================================================

pub trait InterfaceA {
    fn method_a(&self) -> String;
}

pub trait InterfaceB {
    fn method_b(&self) -> String;
}

pub struct ClassA;

impl InterfaceA for ClassA {
    fn method_a(&self) -> String {
        "method_a()".to_string()
    }
}

pub struct ClassB;

impl InterfaceB for ClassB {
    fn method_b(&self) -> String {
        "method_b()".to_string()
    }
}

/// Makes any `InterfaceB` usable as an `InterfaceA`.
pub struct AdapterToClassB<B = ClassB> {
    adaptee: B,
}

impl AdapterToClassB<ClassB> {
    pub fn new() -> Self {
        Self { adaptee: ClassB }
    }
}

impl Default for AdapterToClassB<ClassB> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: InterfaceB> AdapterToClassB<B> {
    pub fn wrap(adaptee: B) -> Self {
        Self { adaptee }
    }
}

impl<B: InterfaceB> InterfaceA for AdapterToClassB<B> {
    fn method_a(&self) -> String {
        self.adaptee.method_b()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct AdapterExample;

impl PatternExample for AdapterExample {
    fn name(&self) -> &'static str {
        "adapter"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "expose an incompatible type through the interface a client expects"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let items: Vec<Box<dyn InterfaceA>> =
            vec![Box::new(ClassA), Box::new(AdapterToClassB::new())];

        let mut transcript = Transcript::new();
        transcript.extend(items.iter().map(|item| item.method_a()));
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
