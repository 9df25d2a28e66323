//! Approximate detection power.
//!
//! Treats σ as known, so the t-statistic is replaced by a normal with
//! mean θ = μ√n/σ. This slightly overstates power for small `n`, where
//! the t-test pays for estimating σ; it is reported next to the empirical
//! rate, never substituted for it.

use crate::math::{normal_cdf, probit};
use crate::params::{ExperimentParameters, Tail};

/// Probability that the detection rule fires, under the normal approximation.
///
/// ```text
/// right:      Φ(θ − z_α)
/// left:       Φ(−θ − z_α)
/// two-sided:  Φ(θ − z_{α/2}) + Φ(−θ − z_{α/2})
/// ```
pub fn approximate_power(params: &ExperimentParameters) -> f64 {
    let theta = params.theta();
    let alpha = params.alpha();

    match params.tail() {
        Tail::Right => normal_cdf(theta - probit(1.0 - alpha)),
        Tail::Left => normal_cdf(-theta - probit(1.0 - alpha)),
        Tail::TwoSided => {
            let z = probit(1.0 - alpha / 2.0);
            normal_cdf(theta - z) + normal_cdf(-theta - z)
        }
    }
}

/// Exact miscoverage rate among detected trials when the true mean is zero.
///
/// With μ = 0 a detected interval misses zero exactly when |t| also
/// exceeds the interval multiplier, so the rate is a ratio of tail
/// probabilities: `min(1, ((1 - ci)/2) / alpha)` for a one-sided rule
/// and `min(1, (1 - ci) / alpha)` for the two-sided one. The interval's
/// nominal miscoverage is `1 - ci`; detected trials miss far more often.
pub fn conditional_miscoverage_under_null(params: &ExperimentParameters) -> f64 {
    let tail_mass = match params.tail() {
        Tail::Right | Tail::Left => (1.0 - params.ci()) / 2.0,
        Tail::TwoSided => 1.0 - params.ci(),
    };
    (tail_mass / params.alpha()).min(1.0)
}
