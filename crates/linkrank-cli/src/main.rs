//! Linkrank CLI
//!
//! Rank a directory of HTML pages by sampled and iterative PageRank.

use clap::Parser;
use linkrank_core::error::{exit_codes, LinkRankError};

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = commands::rank::run(&cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
