//! Document link graph

mod corpus;
mod link_extractor;

pub use corpus::Corpus;
pub use link_extractor::{extract_links, is_html_document, HTML_SUFFIX};
