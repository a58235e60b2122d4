//! Corpus ranking command

use crate::app::Cli;
use crate::output::format_report;
use anyhow::Result;
use linkrank_core::{rank_corpus, Config, Corpus, RankConfig, ScanOptions};

/// Crawl the corpus directory, run both rankers and print the report
pub fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let rank_config = apply_overrides(config.rank, cli);
    rank_config.validate()?;

    let corpus = Corpus::crawl_with(&cli.corpus, &ScanOptions::from(&config.scan))?;
    let report = rank_corpus(&corpus, &rank_config)?;

    print!("{}", format_report(&corpus, &report, cli.format));
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?.with_env_overrides(|key| std::env::var(key).ok())?,
        None => Config::load()?,
    };
    Ok(config)
}

fn apply_overrides(mut config: RankConfig, cli: &Cli) -> RankConfig {
    if let Some(damping) = cli.damping {
        config.damping_factor = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(tolerance) = cli.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    config
}
