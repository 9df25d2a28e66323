//! Per-trial results and the critical values that judge them.

use crate::distribution::StudentT;
use crate::error::Result;
use crate::params::{ExperimentParameters, Tail};

/// Outcome of one simulated experiment.
///
/// For finite results `lower_bound <= effect <= upper_bound` always holds:
/// the interval is symmetric around the effect with a non-negative
/// half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// Sample mean.
    pub effect: f64,
    /// Lower confidence bound.
    pub lower_bound: f64,
    /// Upper confidence bound.
    pub upper_bound: f64,
    /// `effect / std_error`.
    pub t_statistic: f64,
    /// Bessel-corrected sample standard deviation.
    pub std_dev: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Probability under the null of a t-statistic at least this extreme,
    /// in the direction(s) of the configured tail.
    pub p_value: f64,
    /// Standardized effect size, `effect / std_dev`.
    pub cohens_d: f64,
}

impl TrialResult {
    /// Whether every quantity the aggregate consumes is finite.
    pub fn is_finite(&self) -> bool {
        self.effect.is_finite()
            && self.lower_bound.is_finite()
            && self.upper_bound.is_finite()
            && self.t_statistic.is_finite()
    }

    /// Interval lies entirely above `mu`.
    pub fn excludes_above(&self, mu: f64) -> bool {
        self.lower_bound > mu
    }

    /// Interval lies entirely below `mu`.
    pub fn excludes_below(&self, mu: f64) -> bool {
        self.upper_bound < mu
    }

    /// Interval does not contain `mu`.
    pub fn excludes(&self, mu: f64) -> bool {
        self.excludes_above(mu) || self.excludes_below(mu)
    }

    /// Half the interval width.
    pub fn half_width(&self) -> f64 {
        (self.upper_bound - self.lower_bound) / 2.0
    }
}

/// Critical values of one experiment design.
///
/// Both depend only on the parameters, so they are computed once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalValues {
    /// Two-sided interval multiplier, `isf(dof, (1 - ci) / 2)`.
    pub t_ci: f64,
    /// Detection threshold, `isf(dof, alpha)` for one-sided rules and
    /// `isf(dof, alpha / 2)` for the two-sided rule.
    pub t_alpha: f64,
    /// Rule the threshold applies to.
    pub tail: Tail,
}

impl CriticalValues {
    /// Compute critical values for `params`.
    pub fn new(params: &ExperimentParameters) -> Result<Self> {
        let dist = StudentT::new(params.dof())?;
        Ok(Self::from_distribution(params, &dist))
    }

    pub(crate) fn from_distribution(params: &ExperimentParameters, dist: &StudentT) -> Self {
        let tail = params.tail();
        Self {
            t_ci: dist.isf((1.0 - params.ci()) / 2.0),
            t_alpha: dist.isf(tail.critical_probability(params.alpha())),
            tail,
        }
    }

    /// Apply the detection rule to a t-statistic.
    ///
    /// NaN never detects.
    pub fn detects(&self, t_statistic: f64) -> bool {
        match self.tail {
            Tail::Right => t_statistic > self.t_alpha,
            Tail::Left => t_statistic < -self.t_alpha,
            Tail::TwoSided => t_statistic.abs() > self.t_alpha,
        }
    }
}
