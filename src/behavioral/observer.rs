// Observer
//
// A subject keeps a list of observers and pushes every change to them, in the
// publish/subscribe style. Subjects and observers vary independently: the
// subject only knows the `Observer` interface. Notification arguments are
// arbitrary JSON values so observers can receive whatever the subject sends.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

// ============================================================================
// Example: Observer Pattern with Trait Objects
// ============================================================================

pub trait Observer {
    fn name(&self) -> &str;
    fn update(&self, args: &[Value]);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(usize);

#[derive(Default)]
pub struct Subject {
    // Keyed by subscription order, so notification order is stable.
    observers: BTreeMap<ObserverId, Rc<dyn Observer>>,
    next_id: usize,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Rc<dyn Observer>) -> ObserverId {
        tracing::debug!(observer = observer.name(), "adding observer");
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        match self.observers.remove(&id) {
            Some(observer) => {
                tracing::debug!(observer = observer.name(), "removing observer");
                true
            }
            None => false,
        }
    }

    pub fn notify(&self, args: &[Value]) {
        for observer in self.observers.values() {
            observer.update(args);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

/// Remembers every notification it receives.
#[derive(Debug)]
pub struct NamedObserver {
    name: String,
    received: RefCell<Vec<Vec<Value>>>,
}

impl NamedObserver {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            received: RefCell::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<Vec<Value>> {
        self.received.borrow().clone()
    }
}

impl Observer for NamedObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, args: &[Value]) {
        tracing::info!(observer = %self.name, ?args, "observer received notification");
        self.received.borrow_mut().push(args.to_vec());
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct ObserverExample;

impl PatternExample for ObserverExample {
    fn name(&self) -> &'static str {
        "observer"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "notify every subscribed observer when the subject changes"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut subject = Subject::new();
        let observer_a = NamedObserver::new("A");
        let observer_b = NamedObserver::new("B");
        subject.subscribe(observer_a.clone());
        let id_b = subject.subscribe(observer_b.clone());

        subject.notify(&[json!("First notification"), json!([1, 2, 3])]);
        subject.unsubscribe(id_b);
        subject.notify(&[json!("Second notification"), json!({"A": 1, "B": 2, "C": 3})]);

        let mut transcript = Transcript::new();
        for observer in [&observer_a, &observer_b] {
            for args in observer.received() {
                transcript.push(format!(
                    "Observer '{}' received {}",
                    observer.name(),
                    Value::Array(args)
                ));
            }
        }
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
