//! Configuration management

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default probability of following a link rather than jumping at random
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-surfer samples
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Default convergence threshold for the iterative ranker
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Default iteration cap for the iterative ranker
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

/// Default file pattern for corpus documents
pub const DEFAULT_PATTERN: &str = "*.html";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Ranking parameters
    #[serde(default)]
    pub rank: RankConfig,

    /// Corpus scanning parameters
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Parameters shared by both rankers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    /// Damping factor, must lie strictly between 0 and 1
    #[serde(default = "default_damping")]
    pub damping_factor: f64,

    /// Number of pages visited by the sampling ranker
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Max per-node change at which iteration stops
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Iterations allowed before reporting non-convergence
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Seed for the sampling ranker (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

impl RankConfig {
    /// Check every parameter against its valid range
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping_factor)?;
        validate_samples(self.samples)?;
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(LinkRankError::InvalidParameter(format!(
                "tolerance must be a positive number, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations < 1 {
            return Err(LinkRankError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Damping factor must lie in the open interval (0, 1)
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidParameter(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}

/// Sample count must be at least one
pub fn validate_samples(samples: usize) -> Result<()> {
    if samples >= 1 {
        Ok(())
    } else {
        Err(LinkRankError::InvalidParameter(
            "sample count must be at least 1".to_string(),
        ))
    }
}

/// Corpus scanning configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Glob pattern matched against file names
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
        }
    }
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Config {
    /// Load config from `LINKRANK_CONFIG` or the default path, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let path = std::env::var("LINKRANK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());
        Self::load_from(&path)?.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load config from a YAML file, falling back to defaults when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Override ranking parameters from `LINKRANK_DAMPING`, `LINKRANK_SAMPLES`
    /// and `LINKRANK_SEED`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("LINKRANK_DAMPING") {
            self.rank.damping_factor = parse_env("LINKRANK_DAMPING", &value)?;
        }
        if let Some(value) = lookup("LINKRANK_SAMPLES") {
            self.rank.samples = parse_env("LINKRANK_SAMPLES", &value)?;
        }
        if let Some(value) = lookup("LINKRANK_SEED") {
            self.rank.seed = Some(parse_env("LINKRANK_SEED", &value)?);
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LinkRankError::Config(format!("{} has invalid value '{}'", key, value)))
}
