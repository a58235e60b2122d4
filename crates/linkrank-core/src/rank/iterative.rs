//! PageRank by fixed-point iteration

use super::RankDistribution;
use crate::config::{validate_damping, RankConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::error::{LinkRankError, Result};
use crate::graph::Corpus;
use std::collections::{BTreeMap, HashMap};

/// Stopping rule for [`iterate_pagerank`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOptions {
    /// Stop once no page changes by this much or more in one iteration
    pub tolerance: f64,
    /// Give up with [`LinkRankError::Convergence`] after this many iterations
    pub max_iterations: usize,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl From<&RankConfig> for IterationOptions {
    fn from(config: &RankConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }
}

/// Converged ranks and how they were reached
#[derive(Debug, Clone, PartialEq)]
pub struct IterationOutcome {
    pub ranks: RankDistribution,
    pub iterations: usize,
    /// Max per-page change in the final iteration
    pub delta: f64,
}

/// Solve the PageRank equation by repeated substitution.
///
/// Every page starts at `1/N`. Each iteration sets
/// `rank(p) = (1-d)/N + d * sum(contribution(q, p))`, where a page `q`
/// without links contributes `rank(q)/N` to every page and any other page
/// contributes `rank(q)/outdegree(q)` to each page it links to. The result
/// is renormalized to sum to 1.
pub fn iterate_pagerank(
    corpus: &Corpus,
    damping: f64,
    options: &IterationOptions,
) -> Result<IterationOutcome> {
    validate_damping(damping)?;
    if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
        return Err(LinkRankError::InvalidParameter(format!(
            "tolerance must be a positive number, got {}",
            options.tolerance
        )));
    }
    if options.max_iterations < 1 {
        return Err(LinkRankError::InvalidParameter(
            "max_iterations must be at least 1".to_string(),
        ));
    }
    if corpus.is_empty() {
        return Err(LinkRankError::EmptyCorpus(
            "cannot rank an empty corpus".to_string(),
        ));
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let index: HashMap<&str, usize> = pages.iter().enumerate().map(|(i, p)| (*p, i)).collect();
    let outgoing: Vec<Vec<usize>> = corpus
        .iter()
        .map(|(_, links)| links.iter().map(|t| index[t.as_str()]).collect())
        .collect();

    let n = pages.len() as f64;
    let teleport = (1.0 - damping) / n;
    let mut old = vec![1.0 / n; pages.len()];
    let mut new = vec![0.0; pages.len()];
    let mut delta = f64::INFINITY;

    for iteration in 1..=options.max_iterations {
        let dangling_share: f64 = outgoing
            .iter()
            .zip(&old)
            .filter(|(links, _)| links.is_empty())
            .map(|(_, rank)| rank / n)
            .sum();

        new.fill(dangling_share);
        for (links, rank) in outgoing.iter().zip(&old) {
            if links.is_empty() {
                continue;
            }
            let share = rank / links.len() as f64;
            for &target in links {
                new[target] += share;
            }
        }
        for rank in new.iter_mut() {
            *rank = teleport + damping * *rank;
        }

        delta = old
            .iter()
            .zip(&new)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        tracing::debug!("Iteration {}: max delta {:.6}", iteration, delta);

        if delta < options.tolerance {
            let total: f64 = new.iter().sum();
            let ranks: BTreeMap<String, f64> = pages
                .iter()
                .zip(&new)
                .map(|(page, rank)| (page.to_string(), rank / total))
                .collect();
            return Ok(IterationOutcome {
                ranks: RankDistribution::from_map(ranks),
                iterations: iteration,
                delta,
            });
        }

        std::mem::swap(&mut old, &mut new);
    }

    tracing::warn!(
        "PageRank stopped after {} iterations with max delta {:.6}",
        options.max_iterations,
        delta
    );
    Err(LinkRankError::Convergence {
        iterations: options.max_iterations,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(corpus: &Corpus) -> RankDistribution {
        iterate_pagerank(corpus, 0.85, &IterationOptions::default())
            .unwrap()
            .ranks
    }

    #[test]
    fn test_two_cycle_is_even() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
        let ranks = rank(&corpus);
        assert!((ranks.get("A").unwrap() - 0.5).abs() < 1e-9);
        assert!((ranks.get("B").unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_dangling_page_gathers_mass() {
        let corpus = Corpus::from_links([("A", vec![]), ("B", vec!["A"])]).unwrap();
        let ranks = rank(&corpus);

        let a = ranks.get("A").unwrap();
        let b = ranks.get("B").unwrap();
        assert!(a > 0.5, "A={a}");
        assert!((a - 0.925 / 1.425).abs() < 0.005, "A={a}");
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_page() {
        let corpus = Corpus::from_links([("A", Vec::<&str>::new())]).unwrap();
        for damping in [0.1, 0.5, 0.85, 0.99] {
            let outcome = iterate_pagerank(&corpus, damping, &IterationOptions::default()).unwrap();
            assert_eq!(outcome.ranks.get("A"), Some(1.0));
        }
    }

    #[test]
    fn test_matches_textbook_example() {
        let corpus = Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
        .unwrap();
        let ranks = rank(&corpus);

        assert!((ranks.get("1.html").unwrap() - 0.2202).abs() < 0.005);
        assert!((ranks.get("2.html").unwrap() - 0.4289).abs() < 0.005);
        assert!((ranks.get("3.html").unwrap() - 0.2202).abs() < 0.005);
        assert!((ranks.get("4.html").unwrap() - 0.1307).abs() < 0.005);
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let corpus = Corpus::from_links([("A", vec![]), ("B", vec!["A"])]).unwrap();
        let options = IterationOptions {
            tolerance: 0.001,
            max_iterations: 1,
        };
        let err = iterate_pagerank(&corpus, 0.85, &options).unwrap_err();
        assert!(matches!(err, LinkRankError::Convergence { iterations: 1, .. }));
    }

    #[test]
    fn test_deterministic() {
        let corpus = Corpus::from_links([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
            ("d", vec!["c"]),
        ])
        .unwrap();
        assert_eq!(rank(&corpus), rank(&corpus));
    }

    #[test]
    fn test_zero_iteration_cap_rejected() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
        let options = IterationOptions {
            tolerance: 0.001,
            max_iterations: 0,
        };
        assert!(matches!(
            iterate_pagerank(&corpus, 0.85, &options),
            Err(LinkRankError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_bad_tolerance_rejected() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["A"])]).unwrap();
        let options = IterationOptions {
            tolerance: 0.0,
            ..IterationOptions::default()
        };
        assert!(matches!(
            iterate_pagerank(&corpus, 0.85, &options),
            Err(LinkRankError::InvalidParameter(_))
        ));
    }
}
