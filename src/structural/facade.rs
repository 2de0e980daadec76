// Facade
//
// A single simplified entry point in front of several subsystems. The facade
// adds no behaviour of its own; every call passes straight through to the
// subsystem it names.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Facade Pattern - One Entry Point to Subsystems
// ============================================================================

pub struct SubSystemClassA;

impl SubSystemClassA {
    pub fn method() -> &'static str {
        "subsystem_A"
    }
}

pub struct SubSystemClassB;

impl SubSystemClassB {
    /// A hypothetically complicated method.
    pub fn method<T>(value: T) -> T {
        value
    }
}

pub struct SubSystemClassC;

impl SubSystemClassC {
    pub fn method<T>(value: T) -> T {
        value
    }
}

pub struct Facade;

impl Facade {
    pub fn sub_system_class_a(&self) -> &'static str {
        SubSystemClassA::method()
    }

    pub fn sub_system_class_b<T>(&self, value: T) -> T {
        SubSystemClassB::method(value)
    }

    pub fn sub_system_class_c<T>(&self, value: T) -> T {
        SubSystemClassC::method(value)
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct FacadeExample;

impl PatternExample for FacadeExample {
    fn name(&self) -> &'static str {
        "facade"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "offer one simple entry point in front of several subsystems"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let facade = Facade;
        let mut transcript = Transcript::new();
        transcript.push(facade.sub_system_class_a());
        transcript.push(facade.sub_system_class_b(124).to_string());
        transcript.push(format!("{:?}", facade.sub_system_class_c(vec![1, 2, 3])));
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
