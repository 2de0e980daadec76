// The shape every pattern example shares: a named, categorised demo that
// wires a small object graph together and reports what it printed.

use crate::config::CatalogConfig;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        };
        f.write_str(label)
    }
}

/// Console lines produced by one example run, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(%line, "transcript");
        self.lines.push(line);
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Everything an example may draw on while running.
pub struct RunContext<'a> {
    pub rng: StdRng,
    pub config: &'a CatalogConfig,
}

impl<'a> RunContext<'a> {
    pub fn new(config: &'a CatalogConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    pub fn seeded(config: &'a CatalogConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }
}

pub trait PatternExample {
    /// Unique kebab-case name, used for lookup and config selection.
    fn name(&self) -> &'static str;
    fn category(&self) -> Category;
    fn summary(&self) -> &'static str;
    fn run(&self, ctx: &mut RunContext<'_>) -> Result<Transcript>;
}
