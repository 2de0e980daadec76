// Chain of Responsibility
//
// A payload is handed to a successor which, depending on some logic, either
// processes it and passes it on or stops the chain. The payload knows nothing
// about which successor will handle it; successors only agree on a common
// interface for receiving it and naming the next link. Here the route is
// chosen at random, so only the shape of a run is predictable: it starts at
// Successor1, it ends, and the payload stays a number.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use rand::Rng;

// ============================================================================
// Example: Chain of Responsibility - Successors Passing a Payload
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Successor1,
    Successor2,
}

/// What a handler decided to do with the payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Forward(Link, f64),
    Stop(f64),
}

pub trait Handler {
    fn name(&self) -> &'static str;
    fn handle<R: Rng + ?Sized>(&self, payload: f64, rng: &mut R) -> Step;
}

pub struct Successor1;

impl Handler for Successor1 {
    fn name(&self) -> &'static str {
        "Successor1"
    }

    fn handle<R: Rng + ?Sized>(&self, payload: f64, rng: &mut R) -> Step {
        match rng.gen_range(1..=2) {
            1 => Step::Forward(Link::Successor1, payload + 1.0),
            _ => Step::Forward(Link::Successor2, payload - 1.0),
        }
    }
}

pub struct Successor2;

impl Handler for Successor2 {
    fn name(&self) -> &'static str {
        "Successor2"
    }

    fn handle<R: Rng + ?Sized>(&self, payload: f64, rng: &mut R) -> Step {
        match rng.gen_range(1..=3) {
            1 => Step::Forward(Link::Successor1, payload * 2.0),
            2 => Step::Forward(Link::Successor2, payload / 2.0),
            _ => Step::Stop(payload),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    pub payload: f64,
    /// Every link that received the payload, in order.
    pub path: Vec<Link>,
    /// True when the hop limit cut the chain short.
    pub exhausted: bool,
}

pub struct Chain {
    max_hops: usize,
}

impl Chain {
    pub fn new(max_hops: usize) -> Self {
        Self {
            max_hops: max_hops.max(1),
        }
    }

    pub fn start<R: Rng + ?Sized>(&self, payload: f64, rng: &mut R) -> ChainOutcome {
        let mut payload = payload;
        let mut link = Link::Successor1;
        let mut path = Vec::new();

        loop {
            path.push(link);
            tracing::debug!(?link, payload, "handling payload");

            let step = match link {
                Link::Successor1 => Successor1.handle(payload, rng),
                Link::Successor2 => Successor2.handle(payload, rng),
            };

            match step {
                Step::Stop(value) => {
                    return ChainOutcome {
                        payload: value,
                        path,
                        exhausted: false,
                    };
                }
                Step::Forward(next, value) => {
                    payload = value;
                    link = next;
                }
            }

            if path.len() >= self.max_hops {
                tracing::warn!(max_hops = self.max_hops, "chain hit its hop limit");
                return ChainOutcome {
                    payload,
                    path,
                    exhausted: true,
                };
            }
        }
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct ChainOfResponsibilityExample;

impl PatternExample for ChainOfResponsibilityExample {
    fn name(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "pass a payload along a chain of successors until one stops it"
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let chain = Chain::new(ctx.config.chain.max_hops);
        let outcome = chain.start(1.0, &mut ctx.rng);

        let mut transcript = Transcript::new();
        transcript.push("Chain started with payload = 1");
        for link in &outcome.path {
            let name = match link {
                Link::Successor1 => Successor1.name(),
                Link::Successor2 => Successor2.name(),
            };
            transcript.push(format!("{name} received the payload"));
        }
        if outcome.exhausted {
            transcript.push(format!("Hop limit of {} reached", ctx.config.chain.max_hops));
        }
        transcript.push(format!("Finished result = {}", outcome.payload));
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
