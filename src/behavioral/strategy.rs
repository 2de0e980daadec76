// Strategy
//
// The client picks an algorithm at runtime and hands it to a context that
// runs it through a common interface. The context's own state never changes,
// which is what separates this from the State pattern.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Strategy Pattern with Trait Objects
// ============================================================================

pub trait Strategy {
    fn execute(&self) -> &'static str;
}

#[derive(Default)]
pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn execute(&self) -> &'static str {
        "Algorithm A"
    }
}

#[derive(Default)]
pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn execute(&self) -> &'static str {
        "Algorithm B"
    }
}

#[derive(Default)]
pub struct ConcreteStrategyC;

impl Strategy for ConcreteStrategyC {
    fn execute(&self) -> &'static str {
        "Algorithm C"
    }
}

pub struct Context;

impl Context {
    pub fn request(&self, strategy: &dyn Strategy) -> String {
        strategy.execute().to_string()
    }

    /// Instantiates `S` and runs it, mirroring "pass the algorithm's type".
    pub fn request_with<S: Strategy + Default>(&self) -> String {
        S::default().execute().to_string()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct StrategyExample;

impl PatternExample for StrategyExample {
    fn name(&self) -> &'static str {
        "strategy"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "select an interchangeable algorithm at runtime"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let context = Context;
        let strategies: [&dyn Strategy; 3] =
            [&ConcreteStrategyA, &ConcreteStrategyB, &ConcreteStrategyC];

        let mut transcript = Transcript::new();
        transcript.extend(strategies.iter().map(|s| context.request(*s)));
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
