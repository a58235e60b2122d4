//! JSON output formatter

use linkrank_core::{Corpus, RankReport};

/// Both rankings plus the link graph as nodes and links
pub fn format_report(corpus: &Corpus, report: &RankReport) -> String {
    let nodes: Vec<serde_json::Value> = corpus
        .pages()
        .map(|page| {
            serde_json::json!({
                "id": page,
                "sampling": report.sampling.get(page),
                "iteration": report.iteration.get(page),
            })
        })
        .collect();

    let links: Vec<serde_json::Value> = corpus
        .edges()
        .map(|(source, target)| serde_json::json!({ "source": source, "target": target }))
        .collect();

    let output = serde_json::json!({
        "samples": report.samples,
        "sampling": report.sampling,
        "iteration": report.iteration,
        "iterations": report.iterations,
        "max_deviation": report.max_deviation,
        "nodes": nodes,
        "links": links,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
