//! Error types for linkrank

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const EMPTY_CORPUS: i32 = 4;
    pub const NOT_CONVERGED: i32 = 5;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("PageRank did not converge after {iterations} iterations (last max delta {delta:.6})")]
    Convergence { iterations: usize, delta: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl LinkRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => exit_codes::NOT_FOUND,
            Self::InvalidParameter(_) | Self::Config(_) => exit_codes::INVALID_INPUT,
            Self::EmptyCorpus(_) => exit_codes::EMPTY_CORPUS,
            Self::Convergence { .. } => exit_codes::NOT_CONVERGED,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
