//! Terminal output formatter

use linkrank_core::{RankDistribution, RankReport};

pub fn format_report(report: &RankReport) -> String {
    let mut output = format!(
        "PageRank Results from Sampling (n = {})\n",
        report.samples
    );
    push_ranks(&mut output, &report.sampling);
    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &report.iteration);
    output
}

fn push_ranks(output: &mut String, ranks: &RankDistribution) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkrank_core::{rank_corpus, Corpus, RankConfig};

    #[test]
    fn test_report_layout() {
        let corpus = Corpus::from_links([("b.html", vec!["a.html"]), ("a.html", vec!["b.html"])])
            .unwrap();
        let config = RankConfig {
            samples: 10,
            seed: Some(1),
            ..RankConfig::default()
        };
        let report = rank_corpus(&corpus, &config).unwrap();
        let text = format_report(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "PageRank Results from Sampling (n = 10)");
        assert!(lines[1].starts_with("  a.html: "));
        assert!(lines[2].starts_with("  b.html: "));
        assert_eq!(lines[3], "PageRank Results from Iteration");
        assert_eq!(lines[4], "  a.html: 0.5000");
        assert_eq!(lines[5], "  b.html: 0.5000");
    }
}
