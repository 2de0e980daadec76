// Bridge
//
// Decouples an abstraction from its implementation so the two can vary
// independently. The abstraction holds an implementer behind a trait object
// and forwards to it; the implementer can be swapped at runtime.

use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Bridge Pattern - Swappable Implementer
// ============================================================================

pub trait Implementer {
    fn method(&self, args: &[i64]) -> Result<Vec<i64>>;
}

/// Returns its arguments unchanged.
pub struct ConcreteImplementerA;

impl Implementer for ConcreteImplementerA {
    fn method(&self, args: &[i64]) -> Result<Vec<i64>> {
        Ok(args.to_vec())
    }
}

/// Adds one to every argument. `i64::MAX` has no successor and is rejected.
pub struct ConcreteImplementerB;

impl Implementer for ConcreteImplementerB {
    fn method(&self, args: &[i64]) -> Result<Vec<i64>> {
        args.iter()
            .map(|&arg| arg.checked_add(1).ok_or(PatternError::Overflow(arg)))
            .collect()
    }
}

pub trait Abstraction {
    fn method(&self, args: &[i64]) -> Result<Vec<i64>>;
}

pub struct RefinedAbstraction {
    implementer: Box<dyn Implementer>,
}

impl RefinedAbstraction {
    pub fn new(implementer: Box<dyn Implementer>) -> Self {
        Self { implementer }
    }

    /// Replaces the implementer, returning the previous one.
    pub fn swap_implementer(&mut self, implementer: Box<dyn Implementer>) -> Box<dyn Implementer> {
        std::mem::replace(&mut self.implementer, implementer)
    }
}

impl Abstraction for RefinedAbstraction {
    fn method(&self, args: &[i64]) -> Result<Vec<i64>> {
        self.implementer.method(args)
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct BridgeExample;

impl PatternExample for BridgeExample {
    fn name(&self) -> &'static str {
        "bridge"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "let an abstraction and its implementation vary independently"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut abstraction = RefinedAbstraction::new(Box::new(ConcreteImplementerA));
        let mut transcript = Transcript::new();
        transcript.push(format!("{:?}", abstraction.method(&[1, 2, 3])?));

        abstraction.swap_implementer(Box::new(ConcreteImplementerB));
        transcript.push(format!("{:?}", abstraction.method(&[1, 2, 3])?));
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
    fn test_forwards_to_implementer() {
        let a = RefinedAbstraction::new(Box::new(ConcreteImplementerA));
        assert_eq!(a.method(&[1, 2, 3]).unwrap(), vec![1, 2, 3]);

        let b = RefinedAbstraction::new(Box::new(ConcreteImplementerB));
        assert_eq!(b.method(&[1, 2, 3]).unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn test_swap_changes_behaviour() {
        let mut abstraction = RefinedAbstraction::new(Box::new(ConcreteImplementerA));
        let previous = abstraction.swap_implementer(Box::new(ConcreteImplementerB));

        assert_eq!(abstraction.method(&[0]).unwrap(), vec![1]);
        assert_eq!(previous.method(&[0]).unwrap(), vec![0]);
    }

    #[test]
    fn test_empty_args() {
        let abstraction = RefinedAbstraction::new(Box::new(ConcreteImplementerB));
        assert!(abstraction.method(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_increment_rejects_max() {
        let abstraction = RefinedAbstraction::new(Box::new(ConcreteImplementerB));
        assert!(matches!(
            abstraction.method(&[1, i64::MAX]),
            Err(PatternError::Overflow(i64::MAX))
        ));
        assert_eq!(abstraction.method(&[i64::MAX - 1]).unwrap(), vec![i64::MAX]);

        let identity = RefinedAbstraction::new(Box::new(ConcreteImplementerA));
        assert_eq!(identity.method(&[i64::MAX]).unwrap(), vec![i64::MAX]);
    }
}
