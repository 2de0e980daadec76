// Runner configuration, loaded from TOML.
//
// ```toml
// seed = 42
// only = ["memento", "flyweight"]
//
// [chain]
// max_hops = 64
//
// [output]
// color = true
// log_filter = "info"
// ```

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Seed for the random source handed to examples. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Example names to run. Empty runs the whole catalog.
    pub only: Vec<String>,
    pub chain: ChainConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub max_hops: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self { max_hops: 64 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub log_filter: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`CatalogConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn selects(&self, name: &str) -> bool {
        self.only.is_empty() || self.only.iter().any(|wanted| wanted == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatternError;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.chain.max_hops, 64);
        assert!(config.output.color);
        assert_eq!(config.output.log_filter, "info");
    }

    #[test]
    fn test_bundled_config_only_overrides_seed_and_filter() {
        let bundled = CatalogConfig::from_toml_str(include_str!("../catalog.toml")).unwrap();
        assert_eq!(bundled.seed, Some(42));
        assert_eq!(bundled.output.log_filter, "warn");

        let defaults = CatalogConfig::default();
        assert_eq!(defaults.seed, None);
        assert_eq!(
            CatalogConfig {
                seed: None,
                output: OutputConfig {
                    log_filter: defaults.output.log_filter.clone(),
                    ..bundled.output.clone()
                },
                ..bundled
            },
            defaults
        );
    }

    #[test]
    fn test_partial_sections() {
        let config = CatalogConfig::from_toml_str(
            r#"
            seed = 7
            only = ["memento"]

            [chain]
            max_hops = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.only, vec!["memento".to_string()]);
        assert_eq!(config.chain.max_hops, 10);
        assert!(config.output.color);
    }

    #[test]
    fn test_selects() {
        let mut config = CatalogConfig::default();
        assert!(config.selects("proxy"));

        config.only = vec!["proxy".into()];
        assert!(config.selects("proxy"));
        assert!(!config.selects("facade"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = CatalogConfig::from_toml_str("seed = \"not a number\"").unwrap_err();
        assert!(matches!(err, PatternError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3\n[output]\ncolor = false").unwrap();

        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.seed, Some(3));
        assert!(!config.output.color);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PatternError::Io(_)));
    }
}
