//! Minimum Detectable Effect (MDE) of an experiment design.
//!
//! The MDE answers: "with this sample size and noise level, what's the
//! smallest true mean the test would catch half the time?"
//!
//! ```text
//! MDE = z_{1-α'} × σ / √n
//! ```
//! where α' is α for one-sided rules and α/2 for the two-sided rule.
//! A design whose MDE exceeds the effect of interest is underpowered, and
//! the detected subset of its trials will overstate the effect.

use crate::math::probit;
use crate::params::ExperimentParameters;

/// Smallest |μ| detected with 50% probability (normal approximation).
pub fn minimum_detectable_effect(params: &ExperimentParameters) -> f64 {
    let p = params.tail().critical_probability(params.alpha());
    probit(1.0 - p) * params.sigma() / (params.n() as f64).sqrt()
}
