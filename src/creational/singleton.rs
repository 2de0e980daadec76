// Singleton
//
// Exactly one instance exists for the whole process and every caller gets a
// handle to it. The instance lives in a static `OnceLock`, initialised on
// first access; later calls return the same reference.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::sync::{Mutex, OnceLock};

// ============================================================================
// Example: Singleton Pattern with OnceLock
// ============================================================================

#[derive(Debug)]
pub struct Singleton {
    values: Mutex<Vec<String>>,
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            tracing::debug!("initialising singleton");
            Singleton {
                values: Mutex::new(Vec::new()),
            }
        })
    }

    pub fn record(&self, value: impl Into<String>) {
        let mut values = self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        values.push(value.into());
    }

    pub fn values(&self) -> Vec<String> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct SingletonExample;

impl PatternExample for SingletonExample {
    fn name(&self) -> &'static str {
        "singleton"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "share one process-wide instance with every caller"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let a = Singleton::instance();
        let b = Singleton::instance();
        let c = Singleton::instance();

        let mut transcript = Transcript::new();
        transcript.push(format!(
            "Same instance: {}",
            std::ptr::eq(a, b) && std::ptr::eq(b, c)
        ));
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
