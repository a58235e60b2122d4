//! Markdown output formatter

use linkrank_core::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("| Page | Sampling | Iteration |\n|------|----------|-----------|\n");

    for (page, iteration) in report.iteration.ranked() {
        let sampling = report.sampling.get(page).unwrap_or(0.0);
        output.push_str(&format!(
            "| {} | {:.4} | {:.4} |\n",
            page.replace('|', "\\|"),
            sampling,
            iteration
        ));
    }

    output.push_str(&format!(
        "\n{} samples, {} iterations, max deviation {:.4}\n",
        report.samples, report.iterations, report.max_deviation
    ));
    output
}
