// Memento
//
// Saves and restores an object's state at chosen points of its life, as in
// an editor's auto-save or a game checkpoint. Where Command re-executes
// operations to undo them, a memento replaces the whole state from a stored
// snapshot. The caretaker keeps the snapshots and offers a narrow interface
// to them.

use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Memento Pattern - Originator and Caretaker
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: String,
}

impl Memento {
    pub fn state(&self) -> &str {
        &self.state
    }
}

/// The object whose state changes.
#[derive(Debug, Default)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
        tracing::debug!(state = %self.state, "originator: setting state");
    }

    pub fn memento(&self) -> Memento {
        tracing::debug!("originator: providing memento of state to caretaker");
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.state = memento.state.clone();
        tracing::debug!(state = %self.state, "originator: state restored from memento");
    }
}

#[derive(Debug, Default)]
pub struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, originator: &Originator) {
        self.mementos.push(originator.memento());
    }

    pub fn restore(&self, index: usize, originator: &mut Originator) -> Result<()> {
        let memento = self
            .mementos
            .get(index)
            .ok_or(PatternError::SnapshotOutOfRange {
                index,
                len: self.mementos.len(),
            })?;
        originator.restore(memento);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct MementoExample;

impl PatternExample for MementoExample {
    fn name(&self) -> &'static str {
        "memento"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "snapshot an object's state and roll back to it later"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut originator = Originator::new();
        let mut caretaker = Caretaker::new();
        let mut transcript = Transcript::new();

        originator.set_state("State #1");
        for state in ["State #2", "State #3", "State #4"] {
            originator.set_state(state);
            caretaker.create(&originator);
            transcript.push(format!("Saved snapshot of `{state}`"));
        }

        for index in [0, 1] {
            caretaker.restore(index, &mut originator)?;
            transcript.push(format!(
                "Restored snapshot {index}: `{}`",
                originator.state()
            ));
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

    #[test]
    fn test_restore_reverts_to_snapshot() {
        let mut originator = Originator::new();
        let mut caretaker = Caretaker::new();

        originator.set_state("State #1");
        originator.set_state("State #2");
        caretaker.create(&originator);
        originator.set_state("State #3");
        caretaker.create(&originator);
        originator.set_state("State #4");
        caretaker.create(&originator);

        caretaker.restore(0, &mut originator).unwrap();
        assert_eq!(originator.state(), "State #2");

        caretaker.restore(1, &mut originator).unwrap();
        assert_eq!(originator.state(), "State #3");
        assert_eq!(caretaker.len(), 3);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_changes() {
        let mut originator = Originator::new();
        originator.set_state("before");
        let memento = originator.memento();

        originator.set_state("after");
        assert_eq!(memento.state(), "before");
    }

    #[test]
    fn test_out_of_range_restore_leaves_state_alone() {
        let mut originator = Originator::new();
        let caretaker = Caretaker::new();
        originator.set_state("current");

        let err = caretaker.restore(0, &mut originator).unwrap_err();
        assert!(matches!(
            err,
            PatternError::SnapshotOutOfRange { index: 0, len: 0 }
        ));
        assert_eq!(originator.state(), "current");
        assert!(caretaker.is_empty());
    }
}
