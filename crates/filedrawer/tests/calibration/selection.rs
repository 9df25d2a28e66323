//! The file-drawer effect under a real effect.
//!
//! n = 10, μ = 0.3, σ = 1: the one-sided t-test at alpha = 0.05 has power
//! of about 0.22. Detected experiments report roughly 2.3x the true mean,
//! and about 11% of their 95% intervals lie entirely above it.

use crate::calibration_utils::{assert_rate, run};
use filedrawer::Tail;

/// Exact power of the design (noncentral t, df = 9, δ = 0.3·√10).
const POWER: f64 = 0.221;

/// Miscoverage among detected experiments of the design.
const CONDITIONAL_MISCOVERAGE: f64 = 0.114;

#[test]
fn detection_rate_matches_power() {
    let report = run(10, 0.3, Tail::Right, 1000, 42);
    assert!(
        (160..=290).contains(&report.detection_count),
        "detections {}",
        report.detection_count
    );
    assert_rate("power", report.detection_count, report.trial_count, POWER);

    // The known-variance approximation overstates the t-test's power
    assert!(report.approximate_power > POWER);
    assert!(report.approximate_power < POWER + 0.06);
}

#[test]
fn detected_intervals_undercover() {
    let report = run(10, 0.3, Tail::Right, 1000, 43);
    let ratio = report
        .coverage_violation_rate()
        .expect("design detects at ~22%");
    assert!((0.02..=0.22).contains(&ratio), "ratio {}", ratio);

    // Every violation is an interval above μ: detection needs a positive mean
    assert!(report.coverage_violation_count <= report.lower_above_mu_count);
}

#[test]
fn detected_effect_is_inflated() {
    let report = run(10, 0.3, Tail::Right, 5000, 44);
    let inflation = report.effect_inflation().expect("design detects at ~22%");
    assert!(
        (2.0..=2.7).contains(&inflation),
        "inflation {}",
        inflation
    );

    let all = report.mean_effect_all.unwrap();
    assert!((all - 0.3).abs() < 0.02, "mean over all trials {}", all);
}

#[test]
fn large_effect_removes_bias() {
    // At power ~1 every experiment is reported, so selection changes nothing
    let report = run(50, 1.0, Tail::Right, 2000, 45);
    assert!(report.detection_rate() > 0.999);
    let inflation = report.effect_inflation().unwrap();
    assert!((inflation - 1.0).abs() < 0.02, "inflation {}", inflation);
    assert_rate(
        "miscoverage at full power",
        report.coverage_violation_count,
        report.detection_count,
        0.05,
    );
}

#[test]
#[ignore = "slow: 50k trials"]
fn selection_bias_thorough() {
    let report = run(10, 0.3, Tail::Right, 50_000, 46);
    assert_rate(
        "power thorough",
        report.detection_count,
        report.trial_count,
        POWER,
    );
    assert_rate(
        "conditional miscoverage thorough",
        report.coverage_violation_count,
        report.detection_count,
        CONDITIONAL_MISCOVERAGE,
    );
}
