// Factory
//
// Hides which concrete type gets built. The client passes a property (here a
// one-letter key) and receives something implementing `Product`, without
// naming the concrete type itself. Unknown keys produce nothing.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Factory Pattern - Products Behind a Trait
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    A,
    B,
    C,
}

pub trait Product {
    fn name(&self) -> &str;
    fn kind(&self) -> ProductKind;
}

#[derive(Debug, Default)]
pub struct ConcreteProductA;

impl Product for ConcreteProductA {
    fn name(&self) -> &str {
        "ConcreteProductA"
    }

    fn kind(&self) -> ProductKind {
        ProductKind::A
    }
}

#[derive(Debug, Default)]
pub struct ConcreteProductB;

impl Product for ConcreteProductB {
    fn name(&self) -> &str {
        "ConcreteProductB"
    }

    fn kind(&self) -> ProductKind {
        ProductKind::B
    }
}

#[derive(Debug, Default)]
pub struct ConcreteProductC;

impl Product for ConcreteProductC {
    fn name(&self) -> &str {
        "ConcreteProductC"
    }

    fn kind(&self) -> ProductKind {
        ProductKind::C
    }
}

pub struct Factory;

impl Factory {
    pub fn create_object(&self, product_property: &str) -> Option<Box<dyn Product>> {
        match product_property {
            "a" => Some(Box::new(ConcreteProductA)),
            "b" => Some(Box::new(ConcreteProductB)),
            "c" => Some(Box::new(ConcreteProductC)),
            _ => None,
        }
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct FactoryExample;

impl PatternExample for FactoryExample {
    fn name(&self) -> &'static str {
        "factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "create objects without naming their concrete type"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let factory = Factory;
        let mut transcript = Transcript::new();
        for key in ["a", "b", "c", "z"] {
            let line = match factory.create_object(key) {
                Some(product) => format!("'{key}' -> {}", product.name()),
                None => format!("'{key}' -> no product"),
            };
            transcript.push(line);
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
    fn test_known_keys() {
        let factory = Factory;
        assert_eq!(factory.create_object("a").unwrap().kind(), ProductKind::A);
        assert_eq!(factory.create_object("b").unwrap().kind(), ProductKind::B);
        assert_eq!(factory.create_object("c").unwrap().kind(), ProductKind::C);
        assert_eq!(factory.create_object("c").unwrap().name(), "ConcreteProductC");
    }

    #[test]
    fn test_unknown_key_yields_none() {
        let factory = Factory;
        assert!(factory.create_object("d").is_none());
        assert!(factory.create_object("").is_none());
        assert!(factory.create_object("A").is_none());
    }
}
