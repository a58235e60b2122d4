//! Closed link graph over a set of documents

use super::link_extractor::{extract_links, is_html_document};
use crate::error::{LinkRankError, Result};
use crate::index::{scan_documents, ScanOptions};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Directed graph of documents and the in-corpus pages each one links to.
///
/// Every link target is itself a page of the corpus and never the linking
/// page. A corpus is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Crawl the HTML documents directly inside `directory`
    pub fn crawl(directory: &Path) -> Result<Self> {
        Self::crawl_with(directory, &ScanOptions::default())
    }

    /// Crawl `directory` using custom scan options
    pub fn crawl_with(directory: &Path, options: &ScanOptions) -> Result<Self> {
        let documents = scan_documents(directory, options)?;
        tracing::debug!(
            "Found {} candidate documents in {}",
            documents.len(),
            directory.display()
        );

        let mut raw = BTreeMap::new();
        for doc in documents {
            if !is_html_document(&doc.name) {
                tracing::debug!("Skipping non-HTML document {}", doc.name);
                continue;
            }
            let content = std::fs::read_to_string(&doc.path)?;
            let links = extract_links(&content, &doc.name);
            raw.insert(doc.name, links);
        }

        let corpus = Self::restrict(raw);
        if corpus.is_empty() {
            return Err(LinkRankError::EmptyCorpus(format!(
                "no documents matching '{}' in {}",
                options.pattern,
                directory.display()
            )));
        }

        tracing::info!(
            "Built corpus of {} pages and {} links from {}",
            corpus.len(),
            corpus.link_count(),
            directory.display()
        );
        Ok(corpus)
    }

    /// Build from an in-memory set of `(name, content)` documents.
    ///
    /// Names without the `.html` suffix are ignored.
    pub fn from_documents<I, N, C>(documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: AsRef<str>,
    {
        let mut raw = BTreeMap::new();
        for (name, content) in documents {
            let name = name.into();
            if !is_html_document(&name) {
                continue;
            }
            let links = extract_links(content.as_ref(), &name);
            raw.insert(name, links);
        }

        let corpus = Self::restrict(raw);
        if corpus.is_empty() {
            return Err(LinkRankError::EmptyCorpus(
                "no HTML documents supplied".to_string(),
            ));
        }
        Ok(corpus)
    }

    /// Build from an adjacency description of page → link targets.
    ///
    /// Self links and targets that are not pages are dropped.
    pub fn from_links<I, N, L, T>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let raw: BTreeMap<String, BTreeSet<String>> = adjacency
            .into_iter()
            .map(|(name, links)| (name.into(), links.into_iter().map(Into::into).collect()))
            .collect();

        let corpus = Self::restrict(raw);
        if corpus.is_empty() {
            return Err(LinkRankError::EmptyCorpus("no pages supplied".to_string()));
        }
        Ok(corpus)
    }

    /// Second pass: keep only links to other pages of the corpus
    fn restrict(mut raw: BTreeMap<String, BTreeSet<String>>) -> Self {
        let names: BTreeSet<String> = raw.keys().cloned().collect();
        for (name, links) in raw.iter_mut() {
            links.retain(|target| target != name && names.contains(target));
        }
        Self { pages: raw }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Page names in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.pages.keys().map(String::as_str)
    }

    /// Pages linked to by `page`, or `None` if it is not in the corpus
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.pages.get(page).map(BTreeSet::len)
    }

    /// A page with no outgoing links
    pub fn is_dangling(&self, page: &str) -> bool {
        self.out_degree(page) == Some(0)
    }

    /// Iterate pages together with their link sets
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> + '_ {
        self.pages.iter().map(|(name, links)| (name.as_str(), links))
    }

    /// All `(source, target)` link pairs
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pages.iter().flat_map(|(source, links)| {
            links
                .iter()
                .map(move |target| (source.as_str(), target.as_str()))
        })
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }
}
