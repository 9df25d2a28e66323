//! Shared utilities for calibration tests.

#![allow(dead_code)]

use filedrawer::{simulate, AggregateReport, SimulationConfig, Tail};
use filedrawer_core::statistics::{binomial_std_error, rate_within_tolerance, wilson_interval};

/// Standard errors allowed between an empirical and a nominal rate.
pub const TOLERANCE_SE: f64 = 4.0;

/// Run a seeded design across rayon workers (when available).
pub fn run(n: usize, mu: f64, tail: Tail, trials: usize, seed: u64) -> AggregateReport {
    let config = SimulationConfig::new()
        .with_sample_size(n)
        .with_mu(mu)
        .with_sigma(1.0)
        .with_alpha(0.05)
        .with_ci(0.95)
        .with_tail(tail)
        .with_trials(trials)
        .with_seed(seed)
        .with_parallel(true);
    simulate(&config)
        .expect("calibration design must be valid")
        .report
}

/// Assert `successes / trials` lies within [`TOLERANCE_SE`] standard errors of `expected`.
pub fn assert_rate(label: &str, successes: usize, trials: usize, expected: f64) {
    let (lo, hi) = wilson_interval(successes, trials, 0.95);
    eprintln!(
        "[{}] {}/{} = {:.4} (95% CI [{:.4}, {:.4}], expected {:.4} ± {:.4})",
        label,
        successes,
        trials,
        successes as f64 / trials as f64,
        lo,
        hi,
        expected,
        TOLERANCE_SE * binomial_std_error(expected, trials),
    );
    assert!(
        rate_within_tolerance(successes, trials, expected, TOLERANCE_SE),
        "{}: observed {}/{} is not within {} SE of {}",
        label,
        successes,
        trials,
        TOLERANCE_SE,
        expected
    );
}
