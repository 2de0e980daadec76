// Builder
//
// Separates the construction of a complex object from its representation.
// The director knows the order of the steps; the builder knows how to make
// each part. Running the same director always yields the same product.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Builder Pattern - Director and Builder
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub parts: Vec<String>,
}

pub trait Builder {
    fn build_part_a(&mut self) -> &mut Self;
    fn build_part_b(&mut self) -> &mut Self;
    fn build_part_c(&mut self) -> &mut Self;
    fn get_result(self) -> Product;
}

#[derive(Default)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, part: &str) -> &mut Self {
        tracing::trace!(part, "builder added part");
        self.product.parts.push(part.to_string());
        self
    }
}

impl Builder for ConcreteBuilder {
    fn build_part_a(&mut self) -> &mut Self {
        self.push("Part A")
    }

    fn build_part_b(&mut self) -> &mut Self {
        self.push("Part B")
    }

    fn build_part_c(&mut self) -> &mut Self {
        self.push("Part C")
    }

    fn get_result(self) -> Product {
        self.product
    }
}

pub struct Director;

impl Director {
    pub fn construct() -> Product {
        let mut builder = ConcreteBuilder::new();
        builder.build_part_a().build_part_b().build_part_c();
        builder.get_result()
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct BuilderExample;

impl PatternExample for BuilderExample {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "assemble a product step by step under a director"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let product = Director::construct();
        let mut transcript = Transcript::new();
        transcript.push(format!("{:?}", product.parts));
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
    fn test_director_builds_parts_in_order() {
        assert_eq!(Director::construct().parts, ["Part A", "Part B", "Part C"]);
    }

    #[test]
    fn test_construct_is_repeatable() {
        let first = Director::construct();
        for _ in 0..3 {
            assert_eq!(Director::construct(), first);
        }
    }

    #[test]
    fn test_builder_used_directly() {
        let mut builder = ConcreteBuilder::new();
        builder.build_part_c().build_part_a();
        assert_eq!(builder.get_result().parts, ["Part C", "Part A"]);
    }
}
