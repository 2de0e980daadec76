// Flyweight
//
// Shares fine-grained objects instead of creating one per use. The intrinsic
// value (here a character code) is stored once in a pool; the extrinsic part
// (where it appears) is supplied by the caller each time.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::collections::HashMap;
use std::rc::Rc;

// ============================================================================
// Example: Flyweight Pattern - Shared Character Pool
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
pub struct Flyweight {
    pub code: char,
}

#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: HashMap<char, Rc<Flyweight>>,
}

impl FlyweightFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_flyweight(&mut self, code: char) -> Rc<Flyweight> {
        let flyweight = self.flyweights.entry(code).or_insert_with(|| {
            tracing::trace!(%code, "new flyweight");
            Rc::new(Flyweight { code })
        });
        Rc::clone(flyweight)
    }

    pub fn count(&self) -> usize {
        self.flyweights.len()
    }
}

/// Extrinsic state: the sequence in which shared codes appear.
pub struct Context {
    codes: Vec<char>,
}

impl Context {
    pub fn new(codes: &str) -> Self {
        Self {
            codes: codes.chars().collect(),
        }
    }

    pub fn output(&self, factory: &mut FlyweightFactory) -> String {
        self.codes
            .iter()
            .map(|&code| factory.get_flyweight(code).code)
            .collect()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct FlyweightExample;

impl PatternExample for FlyweightExample {
    fn name(&self) -> &'static str {
        "flyweight"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "share one instance per unique intrinsic value"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut factory = FlyweightFactory::new();
        let output = Context::new("abracadabra").output(&mut factory);

        let mut transcript = Transcript::new();
        transcript.push(output);
        transcript.push(format!("Flyweights in pool: {}", factory.count()));
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use proptest::prelude::*;

    #[test]
    fn test_abracadabra_shares_five_flyweights() {
        let mut factory = FlyweightFactory::new();
        let output = Context::new("abracadabra").output(&mut factory);

        assert_eq!(output, "abracadabra");
        assert_eq!(factory.count(), 5);
    }

    #[test]
    fn test_same_code_same_instance() {
        let mut factory = FlyweightFactory::new();
        let first = factory.get_flyweight('a');
        let second = factory.get_flyweight('a');
        let other = factory.get_flyweight('b');

        assert!(Rc::ptr_eq(&first, &second));
        assert!(!Rc::ptr_eq(&first, &other));
    }

    #[test]
    fn test_pool_persists_across_contexts() {
        let mut factory = FlyweightFactory::new();
        Context::new("abc").output(&mut factory);
        Context::new("cab").output(&mut factory);
        assert_eq!(factory.count(), 3);
    }

    proptest! {
        #[test]
        fn test_pool_size_is_unique_count(text in "\\PC{0,64}") {
            let mut factory = FlyweightFactory::new();
            let output = Context::new(&text).output(&mut factory);

            prop_assert_eq!(&output, &text);
            prop_assert_eq!(factory.count(), text.chars().unique().count());
        }
    }
}
