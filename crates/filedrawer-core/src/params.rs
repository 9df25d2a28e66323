//! Experiment parameters and the sidedness of the detection rule.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_ALPHA, DEFAULT_CONFIDENCE, DEFAULT_MU, DEFAULT_SAMPLE_SIZE, DEFAULT_SIGMA,
    MIN_SAMPLE_SIZE,
};
use crate::error::{Result, SimulationError};

/// Which tail of the t-distribution counts as a detection.
///
/// `Right` matches the usual teaching convention where `mu > 0` is the
/// effect of interest. It never detects a negative effect: with `mu < 0`
/// the detection rate falls below `alpha`, not above it. Use `Left` or
/// `TwoSided` when the sign of the effect is not known in advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Tail {
    /// Detect iff `t > t_alpha`.
    #[default]
    Right,
    /// Detect iff `t < -t_alpha`.
    Left,
    /// Detect iff `|t| > t_{alpha/2}`.
    TwoSided,
}

impl Tail {
    /// Upper-tail probability at which the detection critical value is taken.
    pub fn critical_probability(&self, alpha: f64) -> f64 {
        match self {
            Tail::Right | Tail::Left => alpha,
            Tail::TwoSided => alpha / 2.0,
        }
    }

    /// Names accepted by [`FromStr`], matching the serde names.
    pub const NAMES: [&'static str; 3] = ["right", "left", "two-sided"];

    /// Get a human-readable description of this rule.
    pub fn description(&self) -> &'static str {
        match self {
            Tail::Right => "one-sided (right tail)",
            Tail::Left => "one-sided (left tail)",
            Tail::TwoSided => "two-sided",
        }
    }
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tail::Right => write!(f, "right"),
            Tail::Left => write!(f, "left"),
            Tail::TwoSided => write!(f, "two-sided"),
        }
    }
}

impl FromStr for Tail {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "right" => Ok(Tail::Right),
            "left" => Ok(Tail::Left),
            "two-sided" => Ok(Tail::TwoSided),
            other => Err(format!(
                "unknown tail '{}': expected right, left or two-sided",
                other
            )),
        }
    }
}

/// Plain, unvalidated form of [`ExperimentParameters`].
///
/// This is what configuration files and JSON reports carry; converting it
/// with `TryFrom` runs the same validation as [`ExperimentParameters::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterSpec {
    pub n: usize,
    pub mu: f64,
    pub sigma: f64,
    pub alpha: f64,
    pub ci: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tail: Tail,
}

impl Default for ParameterSpec {
    fn default() -> Self {
        Self {
            n: DEFAULT_SAMPLE_SIZE,
            mu: DEFAULT_MU,
            sigma: DEFAULT_SIGMA,
            alpha: DEFAULT_ALPHA,
            ci: DEFAULT_CONFIDENCE,
            tail: Tail::Right,
        }
    }
}

/// Validated, immutable design of one simulated experiment.
///
/// Fields are private so that every instance has passed validation:
/// `n >= 2`, `sigma` finite and positive, `mu` finite, and both `alpha`
/// and `ci` strictly inside (0, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ParameterSpec", into = "ParameterSpec")
)]
pub struct ExperimentParameters {
    n: usize,
    mu: f64,
    sigma: f64,
    alpha: f64,
    ci: f64,
    tail: Tail,
}

impl ExperimentParameters {
    /// Create validated parameters with the default right-tailed rule.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameter`] naming the first field
    /// that is out of range.
    pub fn new(n: usize, mu: f64, sigma: f64, alpha: f64, ci: f64) -> Result<Self> {
        Self::try_from(ParameterSpec {
            n,
            mu,
            sigma,
            alpha,
            ci,
            tail: Tail::Right,
        })
    }

    /// Replace the sidedness of the detection rule.
    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    /// Sample size per experiment.
    pub fn n(&self) -> usize {
        self.n
    }

    /// True effect mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Population standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Significance level of the detection rule.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Confidence level of the reported interval.
    pub fn ci(&self) -> f64 {
        self.ci
    }

    /// Sidedness of the detection rule.
    pub fn tail(&self) -> Tail {
        self.tail
    }

    /// Degrees of freedom of the one-sample t-test.
    pub fn dof(&self) -> usize {
        self.n - 1
    }

    /// Standardized effect `mu * sqrt(n) / sigma`.
    pub fn theta(&self) -> f64 {
        self.mu * (self.n as f64).sqrt() / self.sigma
    }

    /// Convert back into the plain form.
    pub fn to_spec(&self) -> ParameterSpec {
        ParameterSpec::from(*self)
    }
}

impl Default for ExperimentParameters {
    fn default() -> Self {
        let spec = ParameterSpec::default();
        Self {
            n: spec.n,
            mu: spec.mu,
            sigma: spec.sigma,
            alpha: spec.alpha,
            ci: spec.ci,
            tail: spec.tail,
        }
    }
}

fn in_open_unit_interval(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

impl TryFrom<ParameterSpec> for ExperimentParameters {
    type Error = SimulationError;

    fn try_from(spec: ParameterSpec) -> Result<Self> {
        if spec.n < MIN_SAMPLE_SIZE {
            return Err(SimulationError::invalid(
                "n",
                spec.n as f64,
                "sample size must be at least 2",
            ));
        }
        if !spec.mu.is_finite() {
            return Err(SimulationError::invalid("mu", spec.mu, "must be finite"));
        }
        if !(spec.sigma.is_finite() && spec.sigma > 0.0) {
            return Err(SimulationError::invalid(
                "sigma",
                spec.sigma,
                "must be finite and > 0",
            ));
        }
        if !in_open_unit_interval(spec.alpha) {
            return Err(SimulationError::invalid(
                "alpha",
                spec.alpha,
                "must be in (0, 1)",
            ));
        }
        if !in_open_unit_interval(spec.ci) {
            return Err(SimulationError::invalid("ci", spec.ci, "must be in (0, 1)"));
        }

        Ok(Self {
            n: spec.n,
            mu: spec.mu,
            sigma: spec.sigma,
            alpha: spec.alpha,
            ci: spec.ci,
            tail: spec.tail,
        })
    }
}

impl From<ExperimentParameters> for ParameterSpec {
    fn from(params: ExperimentParameters) -> Self {
        Self {
            n: params.n,
            mu: params.mu,
            sigma: params.sigma,
            alpha: params.alpha,
            ci: params.ci,
            tail: params.tail,
        }
    }
}
