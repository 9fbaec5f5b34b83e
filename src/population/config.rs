//! PopulationConfig — knobs for a generation run
//!
//! Defaults reproduce the classic run: 30 survivors of 15 bases each.

use crate::dna::{ComparisonMode, SURVIVAL_THRESHOLD};
use crate::error::{DnaError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STRAND_LENGTH: usize = 15;
pub const DEFAULT_TARGET_POPULATION: usize = 30;

/// Configuration for building a surviving population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Bases per strand
    pub strand_length: usize,
    /// Survivors to collect before stopping
    pub target_population: usize,
    /// Minimum C/G share for a specimen to be kept
    pub survival_threshold: f64,
    /// Denominator used when reporting pairwise matches
    pub comparison: ComparisonMode,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            strand_length: DEFAULT_STRAND_LENGTH,
            target_population: DEFAULT_TARGET_POPULATION,
            survival_threshold: SURVIVAL_THRESHOLD,
            comparison: ComparisonMode::Reference,
            seed: None,
        }
    }
}

impl PopulationConfig {
    pub fn new(target_population: usize, strand_length: usize) -> Self {
        Self {
            strand_length,
            target_population,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.strand_length == 0 {
            return Err(DnaError::InvalidArgument(
                "strand length must be positive".into(),
            ));
        }
        if self.target_population == 0 {
            return Err(DnaError::InvalidArgument(
                "target population must be positive".into(),
            ));
        }
        if !(self.survival_threshold > 0.0 && self.survival_threshold <= 1.0) {
            return Err(DnaError::InvalidArgument(format!(
                "survival threshold must be in (0, 1], got {}",
                self.survival_threshold
            )));
        }
        Ok(())
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DnaError::Config(format!("serialize: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| DnaError::Config(format!("write {}: {}", path.display(), e)))?;
        info!("Saved population config to {}", path.display());
        Ok(())
    }

    /// Load and validate config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| DnaError::Config(format!("read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| DnaError::Config(format!("parse {}: {}", path.display(), e)))?;
        config.validate()?;
        info!("Loaded population config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PopulationConfig::default();
        assert_eq!(config.strand_length, 15);
        assert_eq!(config.target_population, 30);
        assert!((config.survival_threshold - 0.6).abs() < 1e-12);
        assert_eq!(config.comparison, ComparisonMode::Reference);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PopulationConfig::new(0, 15).validate().is_err());
        assert!(PopulationConfig::new(30, 0).validate().is_err());
        let config = PopulationConfig {
            survival_threshold: 1.5,
            ..PopulationConfig::default()
        };
        assert!(matches!(config.validate(), Err(DnaError::InvalidArgument(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PopulationConfig = serde_json::from_str(r#"{"strand_length": 20}"#).unwrap();
        assert_eq!(config.strand_length, 20);
        assert_eq!(config.target_population, 30);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "aequor-config-test-{}.json",
            std::process::id()
        ));
        let config = PopulationConfig {
            seed: Some(1234),
            comparison: ComparisonMode::Symmetric,
            ..PopulationConfig::new(5, 12)
        };
        config.save(&path).unwrap();
        let loaded = PopulationConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = PopulationConfig::load("/nonexistent/aequor.json");
        assert!(matches!(result, Err(DnaError::Config(_))));
    }
}
