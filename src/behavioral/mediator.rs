// Mediator
//
// Colleagues talk to each other through a mediator instead of directly,
// turning many-to-many relationships into one-to-many. Unlike a facade the
// traffic is two-way. Each colleague implements the shared interface but only
// answers for its own role; asking it to play the other one is a misuse and
// stops with an error.

use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Mediator Pattern - Colleagues Behind a Mediator
// ============================================================================

pub trait Colleague {
    /// Called when colleague 01 needs to communicate with colleague 02.
    fn colleague_01_method(&self) -> Result<String>;
    /// Called when colleague 02 needs to communicate with colleague 01.
    fn colleague_02_method(&self) -> Result<String>;
}

pub struct Colleague1;

impl Colleague for Colleague1 {
    fn colleague_01_method(&self) -> Result<String> {
        Ok("Response from the Colleague 01".to_string())
    }

    fn colleague_02_method(&self) -> Result<String> {
        Err(PatternError::not_implemented("Colleague1", "colleague_02_method"))
    }
}

pub struct Colleague2;

impl Colleague for Colleague2 {
    fn colleague_01_method(&self) -> Result<String> {
        Err(PatternError::not_implemented("Colleague2", "colleague_01_method"))
    }

    fn colleague_02_method(&self) -> Result<String> {
        Ok("Response from the Colleague 02".to_string())
    }
}

pub struct Mediator {
    colleague_01: Colleague1,
    colleague_02: Colleague2,
}

impl Mediator {
    pub fn new() -> Self {
        Self {
            colleague_01: Colleague1,
            colleague_02: Colleague2,
        }
    }
}

impl Default for Mediator {
    fn default() -> Self {
        Self::new()
    }
}

impl Colleague for Mediator {
    fn colleague_01_method(&self) -> Result<String> {
        tracing::debug!("routing colleague_01_method to Colleague1");
        self.colleague_01.colleague_01_method()
    }

    fn colleague_02_method(&self) -> Result<String> {
        tracing::debug!("routing colleague_02_method to Colleague2");
        self.colleague_02.colleague_02_method()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct MediatorExample;

impl PatternExample for MediatorExample {
    fn name(&self) -> &'static str {
        "mediator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "route communication between colleagues through one coordinator"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mediator = Mediator::new();

        let mut transcript = Transcript::new();
        transcript.push(mediator.colleague_01_method()?);
        transcript.push(mediator.colleague_02_method()?);
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mediator_routes_both_roles() {
        let mediator = Mediator::new();
        assert_eq!(
            mediator.colleague_01_method().unwrap(),
            "Response from the Colleague 01"
        );
        assert_eq!(
            mediator.colleague_02_method().unwrap(),
            "Response from the Colleague 02"
        );
    }

    #[test]
    fn test_cross_role_calls_fail() {
        assert!(matches!(
            Colleague1.colleague_02_method(),
            Err(PatternError::NotImplemented { role: "Colleague1", .. })
        ));
        assert!(matches!(
            Colleague2.colleague_01_method(),
            Err(PatternError::NotImplemented { method: "colleague_01_method", .. })
        ));
    }

    #[test]
    fn test_colleagues_usable_as_trait_objects() {
        let colleagues: Vec<Box<dyn Colleague>> = vec![Box::new(Colleague1), Box::new(Colleague2)];
        let answered = colleagues
            .iter()
            .filter(|c| c.colleague_01_method().is_ok())
            .count();
        assert_eq!(answered, 1);
    }
}
