//! Helpers for judging empirical rates against nominal ones.

use crate::math::probit;

/// Standard error of a binomial proportion with true rate `p`.
pub fn binomial_std_error(p: f64, trials: usize) -> f64 {
    if trials == 0 {
        return f64::INFINITY;
    }
    (p * (1.0 - p) / trials as f64).sqrt()
}

/// Whether `successes / trials` lies within `k` standard errors of `p`.
pub fn rate_within_tolerance(successes: usize, trials: usize, p: f64, k: f64) -> bool {
    if trials == 0 {
        return false;
    }
    let observed = successes as f64 / trials as f64;
    (observed - p).abs() <= k * binomial_std_error(p, trials)
}

/// Wilson score interval for a binomial proportion.
///
/// Better behaved than the normal interval near 0 and 1, which matters
/// for miscoverage rates computed over a handful of detections.
pub fn wilson_interval(successes: usize, trials: usize, confidence: f64) -> (f64, f64) {
    if trials == 0 {
        return (0.0, 1.0);
    }

    let n = trials as f64;
    let p_hat = successes as f64 / n;
    let z = probit(1.0 - (1.0 - confidence) / 2.0);
    let z2 = z * z;

    let denom = 1.0 + z2 / n;
    let center = (p_hat + z2 / (2.0 * n)) / denom;
    let half = z * (p_hat * (1.0 - p_hat) / n + z2 / (4.0 * n * n)).sqrt() / denom;

    ((center - half).max(0.0), (center + half).min(1.0))
}
