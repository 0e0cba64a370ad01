use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};

use crate::conformance::{ArgumentSampler, ConformanceTester};
use crate::solver::Strategy;

/// Default configuration file, looked up in the current directory
pub const CONFIG_FILE: &str = "multisum.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub conformance: ConformanceConfig,
}

/// Where log output is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub output: LogOutput,
}

/// Conformance run configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConformanceConfig {
    /// Solver under test
    #[serde(default)]
    pub strategy: Strategy,

    #[serde(default = "default_test_count")]
    pub test_count: usize,

    /// Fixed RNG seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub sampler: ArgumentSampler,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            output: LogOutput::default(),
        }
    }
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            test_count: default_test_count(),
            seed: None,
            sampler: ArgumentSampler::default(),
        }
    }
}

// Default functions for serde
fn default_log_level() -> String { "info".to_string() }
fn default_test_count() -> usize { ConformanceTester::DEFAULT_TEST_COUNT }

impl Config {
    /// Load configuration from file, or use defaults if not found
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);

        if config_path.exists() {
            Self::load_from(config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.conformance.sampler.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.conformance.test_count, 10);
    }

    #[test]
    fn test_partial_document() {
        let yaml = "
logging:
  output: stderr
conformance:
  strategy: inclusion_exclusion
  seed: 42
  sampler:
    upper_bound_max: 1000
";
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.output, LogOutput::Stderr);
        assert_eq!(config.conformance.strategy, Strategy::InclusionExclusion);
        assert_eq!(config.conformance.seed, Some(42));
        assert_eq!(config.conformance.sampler.upper_bound_max, 1000);
        assert_eq!(config.conformance.sampler.factor_max, 256);
    }

    #[test]
    fn test_invalid_sampler_rejected() {
        let yaml = "
conformance:
  sampler:
    factor_min: 0
";
        let err = Config::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("factor range must start above zero"));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let yaml = "
conformance:
  strategy: closed_form
";
        assert!(Config::from_yaml_str(yaml).is_err());
    }
}
