//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    version,
    about = "Rank a directory of HTML pages with sampled and iterative PageRank"
)]
pub struct Cli {
    /// Directory containing the HTML pages
    pub corpus: PathBuf,

    /// Damping factor, strictly between 0 and 1 [default: 0.85]
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-surfer samples [default: 10000]
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Seed for the random surfer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Convergence threshold for iteration [default: 0.001]
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Iteration cap [default: 1000]
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Config file
    #[arg(long, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
