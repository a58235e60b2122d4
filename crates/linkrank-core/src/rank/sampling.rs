//! PageRank estimated from a random-surfer walk

use super::{transition_model, RankDistribution};
use crate::config::{validate_damping, validate_samples};
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::BTreeMap;

/// Estimate PageRank by walking `samples` pages through the transition model.
///
/// The first page is drawn uniformly; each following page is drawn from the
/// transition distribution of the current one. Ranks are visit counts
/// divided by `samples`.
pub fn sample_pagerank<R>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankDistribution>
where
    R: Rng + ?Sized,
{
    validate_damping(damping)?;
    validate_samples(samples)?;
    if corpus.is_empty() {
        return Err(LinkRankError::EmptyCorpus(
            "cannot sample an empty corpus".to_string(),
        ));
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let mut visits = vec![0usize; pages.len()];
    // Transition distributions depend only on the current page
    let mut steps: Vec<Option<WeightedIndex<f64>>> = vec![None; pages.len()];

    let mut current = rng.gen_range(0..pages.len());
    visits[current] += 1;

    for _ in 1..samples {
        let step = match steps[current].take() {
            Some(step) => step,
            None => step_distribution(corpus, pages[current], damping)?,
        };
        let next = step.sample(rng);
        steps[current] = Some(step);

        visits[next] += 1;
        current = next;
    }

    tracing::debug!("Sampled {} pages over {} nodes", samples, pages.len());

    let ranks: BTreeMap<String, f64> = pages
        .iter()
        .zip(visits)
        .map(|(page, count)| (page.to_string(), count as f64 / samples as f64))
        .collect();
    Ok(RankDistribution::from_map(ranks))
}

fn step_distribution(corpus: &Corpus, page: &str, damping: f64) -> Result<WeightedIndex<f64>> {
    let model = transition_model(corpus, page, damping)?;
    WeightedIndex::new(model.iter().map(|(_, p)| p)).map_err(|e| {
        LinkRankError::InvalidParameter(format!("bad transition weights for {}: {}", page, e))
    })
}
