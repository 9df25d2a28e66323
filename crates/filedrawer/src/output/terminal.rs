//! Terminal output formatting with colors.
//!
//! The report layout lives in `filedrawer-core`; with its `ansi` feature
//! (enabled by this crate) the output includes ANSI color codes.

use colored::Colorize;

use crate::{AggregateReport, IntervalRow};

/// Format a report for human-readable terminal output.
pub fn format_report(report: &AggregateReport) -> String {
    filedrawer_core::formatting::format_report(report)
}

/// Format the first `limit` rows as a text table.
///
/// Detected trials are marked with `*`; intervals that exclude `mu` are
/// highlighted.
pub fn format_row_table(rows: &[IntervalRow], mu: f64, limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:>6}  {:>10}  {:>10}  {:>10}\n",
        "trial", "lower", "effect", "upper"
    ));

    for row in rows.iter().take(limit) {
        let marker = if row.detected { "*" } else { " " };
        let line = format!(
            "  {:>6}  {:>10.4}  {:>10.4}  {:>10.4} {}",
            row.index, row.lower_bound, row.effect, row.upper_bound, marker
        );
        if row.lower_bound > mu || row.upper_bound < mu {
            out.push_str(&line.red().to_string());
        } else {
            out.push_str(&line);
        }
        out.push('\n');
    }

    if rows.len() > limit {
        out.push_str(&format!(
            "  {}\n",
            format!("... {} more rows", rows.len() - limit).dimmed()
        ));
    }
    out
}

/// Check if an environment variable is set to a truthy value.
///
/// Returns true if the variable is set to "1", "true", or "yes" (case-insensitive).
fn env_is_truthy(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Check if verbose output is enabled via environment variable.
pub fn is_verbose() -> bool {
    env_is_truthy("FILEDRAWER_VERBOSE")
}
