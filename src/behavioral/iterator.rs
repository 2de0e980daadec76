// Iterator
//
// Lets a client walk a collection without knowing how it is stored. The
// minimum is a `next` that yields the following element; `has_next` is an
// optional helper that makes the end of the walk explicit.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Iterator Pattern - Custom Aggregate Iterator
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub name: String,
}

impl Aggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn method(&self) -> &'static str {
        "Method has been invoked"
    }
}

/// Cursor over a borrowed slice of aggregates.
pub struct AggregateIter<'a, T> {
    aggregates: &'a [T],
    index: usize,
}

impl<'a, T> AggregateIter<'a, T> {
    pub fn new(aggregates: &'a [T]) -> Self {
        Self {
            aggregates,
            index: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.index < self.aggregates.len()
    }
}

impl<'a, T> Iterator for AggregateIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.aggregates.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.aggregates.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for AggregateIter<'_, T> {}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct IteratorExample;

impl PatternExample for IteratorExample {
    fn name(&self) -> &'static str {
        "iterator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "traverse a collection without exposing its representation"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let collection: Vec<Aggregate> = (1..=3)
            .map(|n| Aggregate::new(format!("Aggregate {n}")))
            .collect();

        let mut transcript = Transcript::new();
        let mut iterator = AggregateIter::new(&collection);
        while iterator.has_next() {
            if let Some(aggregate) = iterator.next() {
                transcript.push(format!("{}: {}", aggregate.name, aggregate.method()));
            }
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

    fn collection() -> Vec<Aggregate> {
        vec![
            Aggregate::new("Aggregate 1"),
            Aggregate::new("Aggregate 2"),
            Aggregate::new("Aggregate 3"),
        ]
    }

    #[test]
    fn test_walks_in_insertion_order() {
        let items = collection();
        let mut iterator = AggregateIter::new(&items);

        assert!(iterator.has_next());
        assert_eq!(iterator.next().unwrap().name, "Aggregate 1");
        assert!(iterator.has_next());
        assert_eq!(iterator.next().unwrap().name, "Aggregate 2");
        assert!(iterator.has_next());
        assert_eq!(iterator.next().unwrap().name, "Aggregate 3");
    }

    #[test]
    fn test_has_next_true_exactly_len_times() {
        let items = collection();
        let mut iterator = AggregateIter::new(&items);

        let mut trues = 0;
        while iterator.has_next() {
            trues += 1;
            iterator.next();
        }
        assert_eq!(trues, 3);
    }

    #[test]
    fn test_exhausted_iterator_yields_none() {
        let items = collection();
        let mut iterator = AggregateIter::new(&items);
        assert_eq!(iterator.by_ref().count(), 3);

        assert!(!iterator.has_next());
        assert!(iterator.next().is_none());
        assert!(iterator.next().is_none());
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<Aggregate> = Vec::new();
        let iterator = AggregateIter::new(&items);
        assert!(!iterator.has_next());
        assert_eq!(iterator.len(), 0);
    }

    #[test]
    fn test_works_with_std_adapters() {
        let items = collection();
        let names: Vec<&str> = AggregateIter::new(&items)
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Aggregate 1", "Aggregate 2", "Aggregate 3"]);
    }
}
