//! CSV output formatter

use linkrank_core::RankReport;

pub fn format_report(report: &RankReport) -> String {
    let mut output = String::from("page,sampling,iteration\n");

    for (page, iteration) in report.iteration.iter() {
        let sampling = report.sampling.get(page).unwrap_or(0.0);
        output.push_str(&format!(
            "{},{},{}\n",
            escape_csv(page),
            sampling,
            iteration
        ));
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
