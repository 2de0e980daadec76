// Abstract Factory
//
// A factory of factories. The first letter of the key picks a family
// factory, the second picks the product within it; the client only ever
// talks to `AbstractFactory` and gets back a `Product`.

use super::factory::{ConcreteProductA, ConcreteProductB, ConcreteProductC, Product};
use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};

// ============================================================================
// Example: Abstract Factory - Product Families
// ============================================================================

pub trait ProductFactory {
    fn family(&self) -> &'static str;

    fn create_object(&self, product_property: char) -> Option<Box<dyn Product>> {
        let product: Box<dyn Product> = match product_property {
            'a' => Box::new(ConcreteProductA),
            'b' => Box::new(ConcreteProductB),
            'c' => Box::new(ConcreteProductC),
            _ => return None,
        };
        tracing::debug!(family = self.family(), product = product.name(), "created product");
        Some(product)
    }
}

pub struct FactoryA;

impl ProductFactory for FactoryA {
    fn family(&self) -> &'static str {
        "FactoryA"
    }
}

pub struct FactoryB;

impl ProductFactory for FactoryB {
    fn family(&self) -> &'static str {
        "FactoryB"
    }
}

pub struct FactoryC;

impl ProductFactory for FactoryC {
    fn family(&self) -> &'static str {
        "FactoryC"
    }
}

pub struct AbstractFactory;

impl AbstractFactory {
    /// Picks the family factory for a key like `"ab"`.
    pub fn factory_for(key: &str) -> Option<&'static dyn ProductFactory> {
        let mut chars = key.chars();
        let family = chars.next()?;
        chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match family {
            'a' => Some(&FactoryA),
            'b' => Some(&FactoryB),
            'c' => Some(&FactoryC),
            _ => None,
        }
    }

    pub fn create_object(key: &str) -> Option<Box<dyn Product>> {
        let factory = Self::factory_for(key)?;
        let product_property = key.chars().nth(1)?;
        factory.create_object(product_property)
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct AbstractFactoryExample;

impl PatternExample for AbstractFactoryExample {
    fn name(&self) -> &'static str {
        "abstract-factory"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "pick a family factory, then let it create the product"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let mut transcript = Transcript::new();
        for key in ["aa", "bb", "cc", "ax"] {
            let routed = AbstractFactory::factory_for(key);
            let line = match (routed, AbstractFactory::create_object(key)) {
                (Some(factory), Some(product)) => {
                    format!("'{key}' -> {} built {}", factory.family(), product.name())
                }
                _ => format!("'{key}' -> no product"),
            };
            transcript.push(line);
        }
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================
