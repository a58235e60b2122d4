//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{Corpus, RankReport};

/// Format a ranking report
pub fn format_report(corpus: &Corpus, report: &RankReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_report(corpus, report),
        OutputFormat::Csv => csv::format_report(report),
        OutputFormat::Md => markdown::format_report(report),
        OutputFormat::Cli => terminal::format_report(report),
    }
}
