//! Probability mass over corpus pages

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Mapping of page name to probability, ordered by name.
///
/// Produced by the rankers and the transition model; values are
/// non-negative and sum to 1.0 within floating-point tolerance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankDistribution {
    ranks: BTreeMap<String, f64>,
}

impl RankDistribution {
    pub(crate) fn from_map(ranks: BTreeMap<String, f64>) -> Self {
        Self { ranks }
    }

    /// Probability of `page`, or `None` for an unknown page
    pub fn get(&self, page: &str) -> Option<f64> {
        self.ranks.get(page).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Entries in page-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(page, rank)| (page.as_str(), *rank))
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Largest absolute per-page difference against `other`.
    ///
    /// Pages missing from one side count as zero there.
    pub fn max_deviation(&self, other: &RankDistribution) -> f64 {
        let mine = self
            .ranks
            .iter()
            .map(|(page, rank)| (rank - other.get(page).unwrap_or(0.0)).abs());
        let theirs = other
            .ranks
            .iter()
            .filter(|(page, _)| !self.ranks.contains_key(*page))
            .map(|(_, rank)| rank.abs());
        mine.chain(theirs).fold(0.0, f64::max)
    }

    /// Entries by descending rank, ties broken by name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}
