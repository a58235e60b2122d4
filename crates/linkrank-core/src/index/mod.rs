//! Corpus document discovery

mod scanner;

pub use scanner::{scan_documents, ScanOptions, ScanResult};
