//! Linkrank Core Library
//!
//! Ranks a set of interlinked HTML pages with PageRank.
//!
//! # Features
//! - Anchor-tag link extraction and a closed, in-corpus link graph
//! - Random-surfer sampling with an injectable random source
//! - Fixed-point iteration with dangling-page redistribution and an iteration cap
//! - YAML configuration with environment overrides

pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod rank;

pub use config::{Config, RankConfig, ScanConfig};
pub use error::{LinkRankError, Error, Result};
pub use graph::{extract_links, Corpus};
pub use index::{scan_documents, ScanOptions, ScanResult};
pub use rank::{
    iterate_pagerank, rank_corpus, sample_pagerank, transition_model, IterationOptions,
    IterationOutcome, RankDistribution, RankReport,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
