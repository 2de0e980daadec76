// State
//
// An object delegates its state-dependent behaviour to a state object, so it
// appears to change class as the state changes. In this demonstration the
// context simply picks one of a fixed set of states at random on each
// request; the states are labels, not a finite-state machine driven by input.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use rand::Rng;
use std::fmt;

// ============================================================================
// Example: State Pattern - Randomly Chosen States
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateLabel {
    A,
    B,
    C,
}

impl StateLabel {
    pub const ALL: [StateLabel; 3] = [StateLabel::A, StateLabel::B, StateLabel::C];
}

impl fmt::Display for StateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StateLabel::A => "State A",
            StateLabel::B => "State B",
            StateLabel::C => "State C",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default)]
pub struct Context {
    handle: Option<StateLabel>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StateLabel {
        let next = StateLabel::ALL[rng.gen_range(0..StateLabel::ALL.len())];
        tracing::debug!(state = %next, "context switched state");
        self.handle = Some(next);
        next
    }

    pub fn current(&self) -> Option<StateLabel> {
        self.handle
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct StateExample;

impl PatternExample for StateExample {
    fn name(&self) -> &'static str {
        "state"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "swap the object that implements state-dependent behaviour"
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut context = Context::new();
        let mut transcript = Transcript::new();
        for _ in 0..4 {
            transcript.push(context.request(&mut ctx.rng).to_string());
        }
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_starts_without_state() {
        assert_eq!(Context::new().current(), None);
    }

    #[test]
    fn test_request_updates_current() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut context = Context::new();
        let picked = context.request(&mut rng);
        assert_eq!(context.current(), Some(picked));
    }

    #[test]
    fn test_every_label_is_reachable() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut context = Context::new();
        let seen: HashSet<StateLabel> = (0..100).map(|_| context.request(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_labels_display() {
        let labels: Vec<String> = StateLabel::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["State A", "State B", "State C"]);
    }
}
