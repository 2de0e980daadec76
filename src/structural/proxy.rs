// Proxy
//
// A stand-in with the same interface as the real subject that controls
// access to it. This one is a caching proxy: the first request is pulled
// from the real subject, later ones are served from the proxy's copy.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::cell::{Cell, OnceCell};

// ============================================================================
// Example: Proxy Pattern - Caching Stand-in
// ============================================================================

pub trait Subject {
    fn request(&self) -> &[i64];
}

#[derive(Debug)]
pub struct RealSubject {
    enormous_data: Vec<i64>,
    requests: Cell<usize>,
}

impl RealSubject {
    pub fn new() -> Self {
        Self {
            enormous_data: vec![1, 2, 3],
            requests: Cell::new(0),
        }
    }

    /// How many times the real data was pulled.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl Default for RealSubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Subject for RealSubject {
    fn request(&self) -> &[i64] {
        self.requests.set(self.requests.get() + 1);
        &self.enormous_data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Real,
    Cache,
}

#[derive(Debug, Default)]
pub struct Proxy {
    real_subject: RealSubject,
    cache: OnceCell<Vec<i64>>,
    last_source: Cell<Option<DataSource>>,
}

impl Proxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_source(&self) -> Option<DataSource> {
        self.last_source.get()
    }

    pub fn real_subject(&self) -> &RealSubject {
        &self.real_subject
    }
}

impl Subject for Proxy {
    fn request(&self) -> &[i64] {
        let mut source = DataSource::Cache;
        let data = self.cache.get_or_init(|| {
            source = DataSource::Real;
            self.real_subject.request().to_vec()
        });

        match source {
            DataSource::Real => tracing::info!("pulling data from RealSubject"),
            DataSource::Cache => tracing::info!("pulling data from Proxy cache"),
        }
        self.last_source.set(Some(source));
        data
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct ProxyExample;

impl PatternExample for ProxyExample {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "stand in for a costly subject and cache what it returns"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let proxy = Proxy::new();
        let mut transcript = Transcript::new();
        for _ in 0..2 {
            let data = proxy.request();
            let source = match proxy.last_source() {
                Some(DataSource::Real) => "RealSubject",
                _ => "Proxy cache",
            };
            transcript.push(format!("Pulled {data:?} from {source}"));
        }
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
