// Registry of every pattern example, in presentation order.

use crate::behavioral::{
    chain_of_responsibility::ChainOfResponsibilityExample, command::CommandExample,
    interpreter::InterpreterExample, iterator::IteratorExample, mediator::MediatorExample,
    memento::MementoExample, observer::ObserverExample, state::StateExample,
    strategy::StrategyExample, template_method::TemplateMethodExample, visitor::VisitorExample,
};
use crate::config::CatalogConfig;
use crate::creational::{
    abstract_factory::AbstractFactoryExample, builder::BuilderExample, factory::FactoryExample,
    prototype::PrototypeExample, singleton::SingletonExample,
};
use crate::error::{PatternError, Result};
use crate::example::{Category, PatternExample, RunContext, Transcript};
use crate::structural::{
    adapter::AdapterExample, bridge::BridgeExample, composite::CompositeExample,
    decorator::DecoratorExample, facade::FacadeExample, flyweight::FlyweightExample,
    proxy::ProxyExample,
};

/// Result of running one example.
pub struct Report {
    pub name: &'static str,
    pub category: Category,
    pub outcome: Result<Transcript>,
}

pub struct Catalog {
    examples: Vec<Box<dyn PatternExample>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        let mut catalog = Self::new();

        catalog.register(Box::new(ChainOfResponsibilityExample));
        catalog.register(Box::new(CommandExample));
        catalog.register(Box::new(IteratorExample));
        catalog.register(Box::new(InterpreterExample));
        catalog.register(Box::new(MediatorExample));
        catalog.register(Box::new(MementoExample));
        catalog.register(Box::new(ObserverExample));
        catalog.register(Box::new(StateExample));
        catalog.register(Box::new(StrategyExample));
        catalog.register(Box::new(TemplateMethodExample));
        catalog.register(Box::new(VisitorExample));

        catalog.register(Box::new(FactoryExample));
        catalog.register(Box::new(AbstractFactoryExample));
        catalog.register(Box::new(BuilderExample));
        catalog.register(Box::new(PrototypeExample));
        catalog.register(Box::new(SingletonExample));

        catalog.register(Box::new(AdapterExample));
        catalog.register(Box::new(BridgeExample));
        catalog.register(Box::new(CompositeExample));
        catalog.register(Box::new(DecoratorExample));
        catalog.register(Box::new(FacadeExample));
        catalog.register(Box::new(FlyweightExample));
        catalog.register(Box::new(ProxyExample));

        catalog
    }

    /// Adds an example, replacing any existing one with the same name.
    pub fn register(&mut self, example: Box<dyn PatternExample>) {
        match self.position(example.name()) {
            Some(index) => self.examples[index] = example,
            None => self.examples.push(example),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.examples.iter().position(|e| e.name() == name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn PatternExample> {
        self.position(name).map(|index| self.examples[index].as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.examples.iter().map(|e| e.name()).collect()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn PatternExample> {
        self.examples
            .iter()
            .map(|e| e.as_ref())
            .filter(move |e| e.category() == category)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn run(&self, name: &str, config: &CatalogConfig) -> Result<Transcript> {
        let example = self
            .get(name)
            .ok_or_else(|| PatternError::UnknownExample(name.to_string()))?;
        let mut ctx = RunContext::new(config);
        run_one(example, &mut ctx)
    }

    /// Runs every example the config selects, sharing one random source.
    pub fn run_selected(&self, config: &CatalogConfig) -> Result<Vec<Report>> {
        for wanted in &config.only {
            if self.position(wanted).is_none() {
                return Err(PatternError::UnknownExample(wanted.clone()));
            }
        }

        let mut ctx = RunContext::new(config);
        let reports = self
            .examples
            .iter()
            .filter(|e| config.selects(e.name()))
            .map(|e| Report {
                name: e.name(),
                category: e.category(),
                outcome: run_one(e.as_ref(), &mut ctx),
            })
            .collect();
        Ok(reports)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn run_one(example: &dyn PatternExample, ctx: &mut RunContext<'_>) -> Result<Transcript> {
    tracing::info!(example = example.name(), category = %example.category(), "running example");
    let outcome = example.run(ctx);
    match &outcome {
        Ok(transcript) => {
            tracing::debug!(example = example.name(), lines = transcript.len(), "example finished")
        }
        Err(err) => tracing::warn!(example = example.name(), error = %err, "example failed"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> CatalogConfig {
        CatalogConfig {
            seed: Some(seed),
            ..CatalogConfig::default()
        }
    }

    #[test]
    fn test_standard_catalog_has_every_pattern() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 23);

        let names: HashSet<&str> = catalog.names().into_iter().collect();
        assert_eq!(names.len(), 23);
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.by_category(Category::Behavioral).count(), 11);
        assert_eq!(catalog.by_category(Category::Creational).count(), 5);
        assert_eq!(catalog.by_category(Category::Structural).count(), 7);
    }

    #[test]
    fn test_every_example_runs_with_fixed_seed() {
        let catalog = Catalog::standard();
        let reports = catalog.run_selected(&seeded(42)).unwrap();

        assert_eq!(reports.len(), 23);
        for report in &reports {
            let transcript = report.outcome.as_ref().unwrap();
            assert!(!transcript.is_empty(), "{} printed nothing", report.name);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let catalog = Catalog::standard();
        let config = seeded(7);
        let first = catalog.run("chain-of-responsibility", &config).unwrap();
        let second = catalog.run("chain-of-responsibility", &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_selection_filters_in_catalog_order() {
        let catalog = Catalog::standard();
        let config = CatalogConfig {
            only: vec!["proxy".into(), "memento".into()],
            ..seeded(1)
        };
        let names: Vec<&str> = catalog
            .run_selected(&config)
            .unwrap()
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["memento", "proxy"]);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let catalog = Catalog::standard();
        let config = CatalogConfig::default();
        assert!(matches!(
            catalog.run("nope", &config),
            Err(PatternError::UnknownExample(name)) if name == "nope"
        ));

        let config = CatalogConfig {
            only: vec!["nope".into()],
            ..CatalogConfig::default()
        };
        assert!(catalog.run_selected(&config).is_err());
    }

    #[test]
    fn test_interpreter_output_through_catalog() {
        let transcript = Catalog::standard()
            .run("interpreter", &CatalogConfig::default())
            .unwrap();
        assert_eq!(transcript.lines()[1], "11");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut catalog = Catalog::new();
        catalog.register(Box::new(ProxyExample));
        catalog.register(Box::new(ProxyExample));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("proxy").is_some());
    }
}
