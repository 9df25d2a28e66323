//! Behavior under the null (μ = 0).
//!
//! With no effect, the detection rate is the false positive rate and must
//! match alpha for every tail. Each side of a 95% interval misses zero in
//! 2.5% of all experiments.

use crate::calibration_utils::{assert_rate, run};
use filedrawer::Tail;

// =============================================================================
// FALSE POSITIVE RATE
// =============================================================================

#[test]
fn null_detection_rate_right_tail() {
    let report = run(16, 0.0, Tail::Right, 10_000, 0xA11CE);
    assert_eq!(report.failed_trial_count, 0);
    assert_rate("null/right", report.detection_count, report.trial_count, 0.05);

    let rate = report.detection_rate();
    assert!((0.04..=0.06).contains(&rate), "rate {}", rate);
}

#[test]
fn null_detection_rate_left_tail() {
    let report = run(16, 0.0, Tail::Left, 10_000, 0xB0B);
    assert_rate("null/left", report.detection_count, report.trial_count, 0.05);
}

#[test]
fn null_detection_rate_two_sided() {
    let report = run(16, 0.0, Tail::TwoSided, 10_000, 0xC0FFEE);
    assert_rate(
        "null/two-sided",
        report.detection_count,
        report.trial_count,
        0.05,
    );
}

#[test]
fn null_detection_rate_smallest_sample() {
    // dof = 1: heavy tails, but the t critical values still hold the level
    let report = run(2, 0.0, Tail::Right, 10_000, 0xD1CE);
    assert_rate("null/n=2", report.detection_count, report.trial_count, 0.05);
}

// =============================================================================
// INTERVAL SYMMETRY
// =============================================================================

#[test]
fn interval_misses_are_symmetric() {
    let report = run(16, 0.0, Tail::Right, 10_000, 0x5EED);
    assert_rate(
        "lower > 0",
        report.lower_above_mu_count,
        report.trial_count,
        0.025,
    );
    assert_rate(
        "upper < 0",
        report.upper_below_mu_count,
        report.trial_count,
        0.025,
    );
}

#[test]
fn interval_misses_are_symmetric_under_effect() {
    // Coverage over all trials does not depend on μ
    let report = run(10, 0.3, Tail::Right, 10_000, 0x5EED + 1);
    assert_rate(
        "lower > mu",
        report.lower_above_mu_count,
        report.trial_count,
        0.025,
    );
    assert_rate(
        "upper < mu",
        report.upper_below_mu_count,
        report.trial_count,
        0.025,
    );
}

// =============================================================================
// SELECTION UNDER THE NULL
// =============================================================================

#[test]
fn detected_null_intervals_miss_half_the_time() {
    // Right tail at alpha = 0.05 with 95% intervals: a detected interval
    // misses zero iff t > t_{0.975}, i.e. 0.025 / 0.05 of detections
    let report = run(10, 0.0, Tail::Right, 20_000, 0xF11E);
    let expected = filedrawer::analysis::conditional_miscoverage_under_null(&report.params);
    assert!((expected - 0.5).abs() < 1e-12);

    assert_rate(
        "null conditional miscoverage",
        report.coverage_violation_count,
        report.detection_count,
        expected,
    );
}

#[test]
#[ignore = "slow: 200k trials"]
fn null_detection_rate_thorough() {
    for (tail, seed) in [(Tail::Right, 1), (Tail::Left, 2), (Tail::TwoSided, 3)] {
        let report = run(16, 0.0, tail, 200_000, seed);
        assert_rate(
            &format!("null/{} thorough", tail),
            report.detection_count,
            report.trial_count,
            0.05,
        );
        assert_rate(
            "lower > 0 thorough",
            report.lower_above_mu_count,
            report.trial_count,
            0.025,
        );
    }
}
