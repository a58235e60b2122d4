//! One random-surfer step

use super::RankDistribution;
use crate::config::validate_damping;
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use std::collections::BTreeMap;

/// Probability distribution over the next page to visit from `page`.
///
/// With probability `damping` the surfer follows one of the page's links
/// chosen uniformly; otherwise it jumps to any corpus page. A page without
/// links jumps uniformly to every page, itself included.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<RankDistribution> {
    validate_damping(damping)?;
    let links = corpus
        .links(page)
        .ok_or_else(|| LinkRankError::InvalidParameter(format!("page not in corpus: {}", page)))?;

    let n = corpus.len() as f64;

    let probabilities: BTreeMap<String, f64> = if links.is_empty() {
        corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect()
    } else {
        let jump = (1.0 - damping) / n;
        let follow = damping / links.len() as f64;
        corpus
            .pages()
            .map(|p| {
                let prob = if links.contains(p) { follow + jump } else { jump };
                (p.to_string(), prob)
            })
            .collect()
    };

    Ok(RankDistribution::from_map(probabilities))
}
