// Decorator
//
// Adds behaviour to an object at runtime by wrapping it in another object
// with the same interface. Decorators can wrap other decorators, and the
// result shows the nesting.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Decorator Pattern - Nested Wrappers
// ============================================================================

pub trait Component {
    fn decorated_method(&self) -> String;
}

pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn decorated_method(&self) -> String {
        "Component Intrinsic Method".to_string()
    }
}

pub struct Decorator {
    object: Box<dyn Component>,
}

impl Decorator {
    pub fn new(object: Box<dyn Component>) -> Self {
        Self { object }
    }
}

impl Component for Decorator {
    fn decorated_method(&self) -> String {
        format!("Decorator method({})", self.object.decorated_method())
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct DecoratorExample;

impl PatternExample for DecoratorExample {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "wrap an object to extend it without changing its interface"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut component: Box<dyn Component> = Box::new(ConcreteComponent);
        let mut transcript = Transcript::new();
        transcript.push(component.decorated_method());

        for _ in 0..2 {
            component = Box::new(Decorator::new(component));
            transcript.push(component.decorated_method());
        }
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
