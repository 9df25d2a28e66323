//! Standard normal helpers for the closed-form analyses.

use statrs::distribution::{ContinuousCDF, Normal};

/// Standard normal CDF Φ(x).
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

/// Standard normal quantile Φ⁻¹(p).
///
/// Saturates to ±∞ outside (0, 1).
pub fn probit(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    Normal::standard().inverse_cdf(p)
}
