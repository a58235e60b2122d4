//! PageRank over a corpus by sampling and by iteration
//!
//! Both rankers are pure functions of an immutable [`Corpus`], so they can
//! run side by side. [`rank_corpus`] does exactly that.

mod distribution;
mod iterative;
mod sampling;
mod transition;

pub use distribution::RankDistribution;
pub use iterative::{iterate_pagerank, IterationOptions, IterationOutcome};
pub use sampling::sample_pagerank;
pub use transition::transition_model;

use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// Output of both rankers over the same corpus
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    /// Number of samples the walk took
    pub samples: usize,
    pub sampling: RankDistribution,
    pub iteration: RankDistribution,
    /// Iterations needed to converge
    pub iterations: usize,
    /// Largest per-page disagreement between the two rankings
    pub max_deviation: f64,
}

/// Run both rankers concurrently over `corpus`.
///
/// Sampling is seeded from `config.seed` when set.
pub fn rank_corpus(corpus: &Corpus, config: &RankConfig) -> Result<RankReport> {
    config.validate()?;
    if corpus.is_empty() {
        return Err(LinkRankError::EmptyCorpus(
            "cannot rank an empty corpus".to_string(),
        ));
    }

    let options = IterationOptions::from(config);
    let (sampled, iterated) = std::thread::scope(|scope| {
        let sampler = scope.spawn(|| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            sample_pagerank(corpus, config.damping_factor, config.samples, &mut rng)
        });
        let iterated = iterate_pagerank(corpus, config.damping_factor, &options);
        let sampled = sampler.join().unwrap_or_else(|_| {
            Err(LinkRankError::Other(anyhow::anyhow!("sampling thread panicked")))
        });
        (sampled, iterated)
    });

    let sampling = sampled?;
    let outcome = iterated?;
    let max_deviation = sampling.max_deviation(&outcome.ranks);

    tracing::info!(
        "Ranked {} pages: {} samples, {} iterations, max deviation {:.4}",
        corpus.len(),
        config.samples,
        outcome.iterations,
        max_deviation
    );

    Ok(RankReport {
        samples: config.samples,
        sampling,
        iteration: outcome.ranks,
        iterations: outcome.iterations,
        max_deviation,
    })
}
