//! Link extraction from HTML documents

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    /// Anchor tag with any attributes before a double-quoted href
    static ref ANCHOR_HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// File suffix of documents that take part in a corpus
pub const HTML_SUFFIX: &str = ".html";

/// Whether a document name qualifies for the corpus
pub fn is_html_document(name: &str) -> bool {
    name.ends_with(HTML_SUFFIX)
}

/// Extract the href targets of all anchor tags in `content`.
///
/// Targets are returned verbatim; a link back to `source_name` is dropped.
pub fn extract_links(content: &str, source_name: &str) -> BTreeSet<String> {
    ANCHOR_HREF
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str())
        .filter(|target| *target != source_name)
        .map(str::to_string)
        .collect()
}
