//! Human-readable rendering of aggregate reports.
//!
//! With the `ansi` feature, output includes ANSI color codes (via the
//! `colored` crate). Without it, output is plain text.

use crate::aggregate::{AggregateReport, RunMode};
use crate::analysis::conditional_miscoverage_under_null;
use crate::colors::{bold, bold_cyan, bold_green, bold_yellow, dim, red, yellow};
use crate::statistics::wilson_interval;

/// Separator line used in output.
pub const SEPARATOR: &str = "──────────────────────────────────────────────────────────────";

/// Format a report for terminal output.
pub fn format_report(report: &AggregateReport) -> String {
    let mut out = String::new();

    out.push_str("filedrawer\n");
    out.push_str(SEPARATOR);
    out.push_str("\n\n");

    format_design(&mut out, report);
    format_headline(&mut out, report);
    format_detection(&mut out, report);
    format_effects(&mut out, report);
    format_coverage(&mut out, report);
    format_warnings(&mut out, report);

    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&dim(
        "Note: power and MDE use the known-variance normal approximation.",
    ));
    out
}

fn format_design(out: &mut String, report: &AggregateReport) {
    let p = &report.params;
    out.push_str(&format!(
        "  Design:   n = {}, \u{03BC} = {:.3}, \u{03C3} = {:.3}, \u{03B1} = {:.3}, CI = {:.1}%\n",
        p.n(),
        p.mu(),
        p.sigma(),
        p.alpha(),
        p.ci() * 100.0
    ));
    out.push_str(&format!("  Rule:     {}\n", p.tail().description()));

    let mode = match report.mode {
        RunMode::Sequential => "sequential".to_string(),
        RunMode::Parallel { chunk_size } => format!("parallel, {} trials/chunk", chunk_size),
    };
    match report.seed {
        Some(seed) => out.push_str(&format!(
            "  Trials:   {} (seed {}, {})\n\n",
            report.trial_count, seed, mode
        )),
        None => out.push_str(&format!(
            "  Trials:   {} ({})\n\n",
            report.trial_count, mode
        )),
    }
}

fn format_headline(out: &mut String, report: &AggregateReport) {
    let rate = report.detection_rate();
    let line = format!(
        "{} of {} experiments detected the effect ({:.1}%)",
        report.detection_count,
        report.completed_trials(),
        rate * 100.0
    );
    let styled = if report.detection_count == 0 {
        bold_yellow(&format!("\u{26A0} {}", line))
    } else if report.params.mu() == 0.0 {
        bold_cyan(&format!("\u{2022} {}", line))
    } else {
        bold_green(&format!("\u{2713} {}", line))
    };
    out.push_str(&format!("  {}\n\n", styled));
}

fn format_detection(out: &mut String, report: &AggregateReport) {
    let (lo, hi) = wilson_interval(report.detection_count, report.completed_trials(), 0.95);
    out.push_str(&format!("  {}\n", bold("Detection")));
    out.push_str(&format!(
        "    Empirical rate:   {:.1}%  (95% Wilson: {:.1}% \u{2013} {:.1}%)\n",
        report.detection_rate() * 100.0,
        lo * 100.0,
        hi * 100.0
    ));
    out.push_str(&format!(
        "    Approx. power:    {:.1}%  (\u{03B8} = {:.3}, MDE = {:.3})\n",
        report.approximate_power * 100.0,
        report.params.theta(),
        report.minimum_detectable_effect
    ));
    out.push_str(&format!(
        "    Critical t:       {:.4} (detect), {:.4} (interval)\n\n",
        report.critical_values.t_alpha, report.critical_values.t_ci
    ));
}

fn format_effects(out: &mut String, report: &AggregateReport) {
    out.push_str(&format!("  {}\n", bold("Effect")));
    match report.mean_effect_all {
        Some(m) => out.push_str(&format!("    Mean (all):       {:.4}\n", m)),
        None => out.push_str("    Mean (all):       undefined (no completed trials)\n"),
    }
    match report.mean_effect_detected {
        Some(m) => {
            out.push_str(&format!("    Mean (detected):  {:.4}", m));
            if let Some(inflation) = report.effect_inflation() {
                let note = format!("  ({:.2}\u{00D7} the true effect)", inflation);
                if inflation > 1.25 {
                    out.push_str(&yellow(&note));
                } else {
                    out.push_str(&note);
                }
            }
            out.push('\n');
        }
        None => out.push_str("    Mean (detected):  undefined (no detections)\n"),
    }
    out.push('\n');
}

fn format_coverage(out: &mut String, report: &AggregateReport) {
    let nominal = 1.0 - report.params.ci();
    out.push_str(&format!("  {}\n", bold("Coverage")));
    match report.coverage_violation_rate() {
        Some(rate) => {
            out.push_str(&format!(
                "    Detected, missing \u{03BC}:  {} / {} ({:.1}%)",
                report.coverage_violation_count,
                report.detection_count,
                rate * 100.0
            ));
            if report.params.mu() == 0.0 {
                out.push_str(&format!(
                    "  expected {:.1}% under the null",
                    conditional_miscoverage_under_null(&report.params) * 100.0
                ));
            }
            out.push('\n');
        }
        None => out.push_str("    Detected, missing \u{03BC}:  undefined (no detections)\n"),
    }
    out.push_str(&format!(
        "    All, missing \u{03BC}:       {} / {} ({:.1}%, nominal {:.1}%)\n",
        report.lower_above_mu_count + report.upper_below_mu_count,
        report.completed_trials(),
        report.overall_miscoverage_rate() * 100.0,
        nominal * 100.0
    ));
    out.push_str(&format!(
        "      above \u{03BC}: {}, below \u{03BC}: {}\n\n",
        report.lower_above_mu_count, report.upper_below_mu_count
    ));
}

fn format_warnings(out: &mut String, report: &AggregateReport) {
    let mut warnings = Vec::new();
    if report.failed_trial_count > 0 {
        warnings.push(format!(
            "{} trial(s) produced non-finite results and were excluded",
            report.failed_trial_count
        ));
    }
    if report.params.mu() < 0.0 && report.params.tail() == crate::params::Tail::Right {
        warnings.push(
            "right-tailed rule with a negative true mean: any detection has the wrong sign"
                .to_string(),
        );
    }
    if warnings.is_empty() {
        return;
    }

    out.push_str(&format!("  {} Warnings\n", yellow("\u{26A0}")));
    for warning in warnings {
        out.push_str(&format!("    \u{2022} {}\n", red(&warning)));
    }
    out.push('\n');
}
