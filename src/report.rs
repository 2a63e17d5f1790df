// src/report.rs
//! Rendering of the two rank results for a terminal or a machine.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::distribution::Distribution;

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct SamplingResult {
    pub samples: usize,
    pub ranks: Distribution,
}

#[derive(Debug, Clone, Serialize)]
pub struct IterationResult {
    pub iterations: usize,
    pub ranks: Distribution,
}

/// Both estimates for one corpus.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sampling: SamplingResult,
    pub iteration: IterationResult,
}

impl Report {
    /// Largest per-page disagreement between the two estimators.
    #[must_use]
    pub fn max_divergence(&self) -> f64 {
        self.sampling.ranks.max_abs_diff(&self.iteration.ranks)
    }

    #[must_use]
    pub fn render(&self, format: OutputFormat, compare: bool) -> String {
        match format {
            OutputFormat::Text => format_text(self, compare),
            OutputFormat::Json => format_json(self),
        }
    }
}

/// Sampling block then iteration block, pages in ascending name order, four decimals.
#[must_use]
pub fn format_text(report: &Report, compare: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "PageRank Results from Sampling (n = {})",
        report.sampling.samples
    );
    write_ranks(&mut out, &report.sampling.ranks);

    let _ = writeln!(out, "PageRank Results from Iteration");
    write_ranks(&mut out, &report.iteration.ranks);

    if compare {
        let _ = writeln!(
            out,
            "Largest difference between methods: {:.4}",
            report.max_divergence()
        );
    }
    out
}

fn write_ranks(out: &mut String, ranks: &Distribution) {
    for (page, rank) in ranks.iter() {
        let _ = writeln!(out, "  {page}: {rank:.4}");
    }
}

/// Formats the report as pretty JSON for machine consumption.
#[must_use]
pub fn format_json(report: &Report) -> String {
    // Serializing plain maps of f64 and usize cannot fail.
    let mut out = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn report() -> Report {
        let corpus = Corpus::from_links([("b.html", vec!["a.html"]), ("a.html", vec!["b.html"])]);
        let even = Distribution::uniform(&corpus);
        Report {
            sampling: SamplingResult {
                samples: 10,
                ranks: even.clone(),
            },
            iteration: IterationResult {
                iterations: 1,
                ranks: even,
            },
        }
    }

    #[test]
    fn text_lists_pages_in_name_order() {
        let text = format_text(&report(), false);
        let expected = "PageRank Results from Sampling (n = 10)\n  a.html: 0.5000\n  b.html: 0.5000\n\
                        PageRank Results from Iteration\n  a.html: 0.5000\n  b.html: 0.5000\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn compare_appends_divergence() {
        let text = format_text(&report(), true);
        assert!(text.ends_with("Largest difference between methods: 0.0000\n"));
    }

    #[test]
    fn json_has_both_sections() {
        let json: serde_json::Value = serde_json::from_str(&format_json(&report())).unwrap();
        assert_eq!(json["sampling"]["samples"], 10);
        assert_eq!(json["iteration"]["iterations"], 1);
        assert_eq!(json["iteration"]["ranks"]["a.html"], 0.5);
    }
}
