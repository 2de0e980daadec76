// Design Patterns Catalog
// Classic behavioral, creational and structural patterns, one module each.
//
// Every module follows the same shape: a capability trait, a few concrete
// implementations, a `PatternExample` that wires them together, and tests
// asserting the observable behaviour.
//
// Run the whole catalog with:
// ```bash
// cargo run --bin catalog
// cargo run --bin catalog -- path/to/catalog.toml
// ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod creational;
pub mod error;
pub mod example;
pub mod logging;
pub mod structural;

pub use catalog::{Catalog, Report};
pub use config::CatalogConfig;
pub use error::{PatternError, Result};
pub use example::{Category, PatternExample, RunContext, Transcript};
