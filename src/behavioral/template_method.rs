// Template Method
//
// A base defines the skeleton of an algorithm as a fixed sequence of steps.
// Implementers override some steps; hooks have defaults (possibly doing
// nothing) and may be left alone, while required steps must be provided.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Template Method - Default Trait Hooks
// ============================================================================

pub trait TemplateSteps {
    /// Hook, empty by default.
    fn operation_01(&self) -> Option<String> {
        None
    }

    fn operation_02(&self) -> Option<String> {
        Some("Step Two is a hook that prints this line by default.".to_string())
    }

    fn operation_03(&self) -> Option<String>;

    fn template_method(&self) -> Vec<String> {
        [self.operation_01(), self.operation_02(), self.operation_03()]
            .into_iter()
            .flatten()
            .collect()
    }
}

pub struct ConcreteClassA;

impl TemplateSteps for ConcreteClassA {
    fn operation_03(&self) -> Option<String> {
        Some("Class A : Step Three (overridden)".to_string())
    }
}

pub struct ConcreteClassB;

impl TemplateSteps for ConcreteClassB {
    fn operation_01(&self) -> Option<String> {
        Some("Class B : Step One (overridden)".to_string())
    }

    fn operation_02(&self) -> Option<String> {
        Some("Class B : Step Two (overridden)".to_string())
    }

    fn operation_03(&self) -> Option<String> {
        Some("Class B : Step Three (overridden)".to_string())
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct TemplateMethodExample;

impl PatternExample for TemplateMethodExample {
    fn name(&self) -> &'static str {
        "template-method"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "fix an algorithm's skeleton and let subclasses fill in steps"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut transcript = Transcript::new();
        transcript.extend(ConcreteClassA.template_method());
        transcript.extend(ConcreteClassB.template_method());
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
