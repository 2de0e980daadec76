// Prototype
//
// New objects are made by copying an existing one instead of building from
// scratch. How deep the copy goes matters: a shallow clone shares the whole
// field with its prototype, a referential clone gets its own outer list but
// shares the rows inside it, and a deep clone shares nothing.

use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

// ============================================================================
// Example: Prototype Pattern - Shallow, Referential and Deep Clones
// ============================================================================

pub type Shared<T> = Rc<RefCell<T>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneMode {
    #[default]
    Shallow,
    Referential,
    Deep,
}

impl FromStr for CloneMode {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shallow" => Ok(CloneMode::Shallow),
            "referential" => Ok(CloneMode::Referential),
            "deep" => Ok(CloneMode::Deep),
            other => Err(PatternError::UnknownCloneMode(other.to_string())),
        }
    }
}

pub trait Prototype {
    fn clone_with(&self, mode: CloneMode) -> Self;
}

#[derive(Debug)]
pub struct ConcretePrototype {
    field: Shared<Vec<Shared<Vec<i64>>>>,
}

impl ConcretePrototype {
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        let rows = rows.into_iter().map(|row| Rc::new(RefCell::new(row))).collect();
        Self {
            field: Rc::new(RefCell::new(rows)),
        }
    }

    /// Plain values of the field, for comparisons.
    pub fn snapshot(&self) -> Vec<Vec<i64>> {
        self.field
            .borrow()
            .iter()
            .map(|row| row.borrow().clone())
            .collect()
    }

    pub fn push_row(&self, row: Vec<i64>) {
        self.field.borrow_mut().push(Rc::new(RefCell::new(row)));
    }

    /// Overwrites one cell. Returns `false` if it does not exist.
    pub fn set(&self, row: usize, column: usize, value: i64) -> bool {
        let field = self.field.borrow();
        let Some(row) = field.get(row) else {
            return false;
        };
        let mut row = row.borrow_mut();
        match row.get_mut(column) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    pub fn shares_field_with(&self, other: &ConcretePrototype) -> bool {
        Rc::ptr_eq(&self.field, &other.field)
    }
}

impl Prototype for ConcretePrototype {
    fn clone_with(&self, mode: CloneMode) -> Self {
        let field = match mode {
            CloneMode::Shallow => Rc::clone(&self.field),
            CloneMode::Referential => Rc::new(RefCell::new(self.field.borrow().clone())),
            CloneMode::Deep => {
                let rows = self
                    .field
                    .borrow()
                    .iter()
                    .map(|row| Rc::new(RefCell::new(row.borrow().clone())))
                    .collect();
                Rc::new(RefCell::new(rows))
            }
        };
        tracing::debug!(?mode, "cloned prototype");
        Self { field }
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct PrototypeExample;

impl PatternExample for PrototypeExample {
    fn name(&self) -> &'static str {
        "prototype"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "create objects by copying a prototype, shallow or deep"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut transcript = Transcript::new();
        for mode in ["shallow", "referential", "deep"] {
            let proto = ConcretePrototype::new(vec![vec![1, 2], vec![3, 4]]);
            let copy = proto.clone_with(mode.parse()?);
            copy.set(0, 1, 5);
            copy.push_row(vec![9]);
            transcript.push(format!(
                "{mode}: prototype={:?} clone={:?}",
                proto.snapshot(),
                copy.snapshot()
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

    fn prototype() -> ConcretePrototype {
        ConcretePrototype::new(vec![vec![1, 2], vec![3, 4]])
    }

    #[test]
    fn test_shallow_clone_shares_everything() {
        let proto = prototype();
        let copy = proto.clone_with(CloneMode::Shallow);
        assert!(copy.shares_field_with(&proto));

        copy.set(0, 1, 5);
        copy.push_row(vec![9]);
        assert_eq!(proto.snapshot(), vec![vec![1, 5], vec![3, 4], vec![9]]);
    }

    #[test]
    fn test_referential_clone_shares_rows_only() {
        let proto = prototype();
        let copy = proto.clone_with(CloneMode::Referential);
        assert!(!copy.shares_field_with(&proto));

        copy.set(0, 1, 5);
        copy.push_row(vec![9]);
        assert_eq!(proto.snapshot(), vec![vec![1, 5], vec![3, 4]]);
        assert_eq!(copy.snapshot().len(), 3);
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let proto = prototype();
        let copy = proto.clone_with(CloneMode::Deep);
        assert_eq!(copy.snapshot(), proto.snapshot());

        copy.set(0, 1, 5);
        copy.push_row(vec![9]);
        assert_eq!(proto.snapshot(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let proto = prototype();
        assert!(!proto.set(5, 0, 1));
        assert!(!proto.set(0, 5, 1));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("deep".parse::<CloneMode>().unwrap(), CloneMode::Deep);
        assert_eq!(CloneMode::default(), CloneMode::Shallow);
        assert!(matches!(
            "sideways".parse::<CloneMode>(),
            Err(PatternError::UnknownCloneMode(mode)) if mode == "sideways"
        ));
    }
}
