//! Error types for experiment simulation.

use std::fmt;

/// Error returned by parameter construction and report accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A parameter is outside its valid domain.
    ///
    /// Raised before any sampling takes place. Retrying with the same
    /// input cannot succeed.
    InvalidParameter {
        /// Parameter name as it appears in the configuration.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: &'static str,
    },

    /// A statistic was requested that is undefined for this run.
    ///
    /// Currently only the mean effect over detected trials, which has no
    /// value when nothing was detected.
    DegenerateAggregate {
        /// Which statistic was requested.
        statistic: &'static str,
    },

    /// The statistics backend rejected a distribution parameter.
    Distribution(String),
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid parameter {} = {}: {}", name, value, reason),
            Self::DegenerateAggregate { statistic } => write!(
                f,
                "{} is undefined for this run: no trial was detected",
                statistic
            ),
            Self::Distribution(msg) => write!(f, "distribution error: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
