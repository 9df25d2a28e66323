//! Streaming aggregation of trial outcomes.
//!
//! [`Accumulator`] folds trials one at a time and never stores them.
//! Partial accumulators from independent workers combine with
//! [`Accumulator::merge`]; [`Accumulator::finish`] turns the totals into
//! an [`AggregateReport`].

use crate::analysis::{approximate_power, minimum_detectable_effect};
use crate::error::{Result, SimulationError};
use crate::params::ExperimentParameters;
use crate::trial::{CriticalValues, TrialResult};

/// Running totals over a sequence of trials.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    trial_count: usize,
    failed_trial_count: usize,
    detection_count: usize,
    effect_sum_all: f64,
    effect_sum_detected: f64,
    coverage_violation_count: usize,
    lower_above_mu_count: usize,
    upper_below_mu_count: usize,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one trial.
    ///
    /// Non-finite trials are counted as failed and contribute nothing else.
    pub fn record(&mut self, trial: &TrialResult, detected: bool, mu: f64) {
        self.trial_count += 1;
        if !trial.is_finite() {
            self.failed_trial_count += 1;
            return;
        }

        self.effect_sum_all += trial.effect;
        let above = trial.excludes_above(mu);
        let below = trial.excludes_below(mu);
        if above {
            self.lower_above_mu_count += 1;
        }
        if below {
            self.upper_below_mu_count += 1;
        }

        if detected {
            self.detection_count += 1;
            self.effect_sum_detected += trial.effect;
            if above || below {
                self.coverage_violation_count += 1;
            }
        }
    }

    /// Add another accumulator's totals to this one.
    pub fn merge(&mut self, other: &Accumulator) {
        self.trial_count += other.trial_count;
        self.failed_trial_count += other.failed_trial_count;
        self.detection_count += other.detection_count;
        self.effect_sum_all += other.effect_sum_all;
        self.effect_sum_detected += other.effect_sum_detected;
        self.coverage_violation_count += other.coverage_violation_count;
        self.lower_above_mu_count += other.lower_above_mu_count;
        self.upper_below_mu_count += other.upper_below_mu_count;
    }

    /// Trials recorded so far, failed ones included.
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Trials that produced finite results.
    pub fn completed_trials(&self) -> usize {
        self.trial_count - self.failed_trial_count
    }

    /// Detections so far. Never decreases.
    pub fn detection_count(&self) -> usize {
        self.detection_count
    }

    /// Trials discarded for non-finite results.
    pub fn failed_trial_count(&self) -> usize {
        self.failed_trial_count
    }

    /// Build the final report.
    pub fn finish(
        &self,
        params: &ExperimentParameters,
        critical_values: CriticalValues,
        seed: Option<u64>,
        mode: RunMode,
    ) -> AggregateReport {
        let completed = self.completed_trials();
        AggregateReport {
            params: *params,
            seed,
            mode,
            critical_values,
            trial_count: self.trial_count,
            failed_trial_count: self.failed_trial_count,
            detection_count: self.detection_count,
            mean_effect_all: (completed > 0).then(|| self.effect_sum_all / completed as f64),
            mean_effect_detected: (self.detection_count > 0)
                .then(|| self.effect_sum_detected / self.detection_count as f64),
            coverage_violation_count: self.coverage_violation_count,
            lower_above_mu_count: self.lower_above_mu_count,
            upper_below_mu_count: self.upper_below_mu_count,
            approximate_power: approximate_power(params),
            minimum_detectable_effect: minimum_detectable_effect(params),
        }
    }
}

/// How a run was executed.
///
/// Parallel runs draw from one generator per chunk, so they are
/// reproducible among themselves but differ from sequential runs with the
/// same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RunMode {
    /// One generator, trials in order.
    #[default]
    Sequential,
    /// Fixed-size chunks with independently seeded generators.
    Parallel {
        /// Trials per chunk.
        chunk_size: usize,
    },
}

/// Summary of a set of simulated experiments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateReport {
    /// Design that produced this report.
    pub params: ExperimentParameters,
    /// Seed of the run, if it was driven by a seeded generator.
    pub seed: Option<u64>,
    /// Execution layout.
    pub mode: RunMode,
    /// Critical values used for every trial.
    pub critical_values: CriticalValues,
    /// Trials attempted.
    pub trial_count: usize,
    /// Trials discarded for non-finite results.
    pub failed_trial_count: usize,
    /// Trials where the detection rule fired.
    pub detection_count: usize,
    /// Mean effect over completed trials; `None` if none completed.
    pub mean_effect_all: Option<f64>,
    /// Mean effect over detected trials; `None` if nothing was detected.
    pub mean_effect_detected: Option<f64>,
    /// Detected trials whose interval excludes the true mean.
    pub coverage_violation_count: usize,
    /// Trials (detected or not) whose interval lies above the true mean.
    pub lower_above_mu_count: usize,
    /// Trials (detected or not) whose interval lies below the true mean.
    pub upper_below_mu_count: usize,
    /// Known-variance approximation of the detection rate.
    pub approximate_power: f64,
    /// Smallest true mean detected half of the time.
    pub minimum_detectable_effect: f64,
}

impl AggregateReport {
    /// Trials that produced finite results.
    pub fn completed_trials(&self) -> usize {
        self.trial_count - self.failed_trial_count
    }

    /// Empirical detection rate over completed trials.
    pub fn detection_rate(&self) -> f64 {
        ratio(self.detection_count, self.completed_trials()).unwrap_or(0.0)
    }

    /// Fraction of detected trials whose interval misses the true mean.
    ///
    /// `None` when nothing was detected.
    pub fn coverage_violation_rate(&self) -> Option<f64> {
        ratio(self.coverage_violation_count, self.detection_count)
    }

    /// Fraction of all completed trials whose interval misses the true mean.
    pub fn overall_miscoverage_rate(&self) -> f64 {
        ratio(
            self.lower_above_mu_count + self.upper_below_mu_count,
            self.completed_trials(),
        )
        .unwrap_or(0.0)
    }

    /// Mean effect over detected trials, or an error naming why it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::DegenerateAggregate`] when nothing was
    /// detected.
    pub fn require_mean_effect_detected(&self) -> Result<f64> {
        self.mean_effect_detected
            .ok_or(SimulationError::DegenerateAggregate {
                statistic: "mean_effect_detected",
            })
    }

    /// How much the detected subset overstates the true mean
    /// (`mean_effect_detected / mu`).
    ///
    /// `None` when nothing was detected or the true mean is zero.
    pub fn effect_inflation(&self) -> Option<f64> {
        let mu = self.params.mu();
        if mu == 0.0 {
            return None;
        }
        self.mean_effect_detected.map(|m| m / mu)
    }
}

fn ratio(num: usize, den: usize) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

/// One row of the interval plot: a trial's bounds and whether it was detected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalRow {
    /// Trial index, starting at 0.
    pub index: usize,
    pub lower_bound: f64,
    pub effect: f64,
    pub upper_bound: f64,
    pub detected: bool,
}

impl IntervalRow {
    pub(crate) fn new(index: usize, trial: &TrialResult, detected: bool) -> Self {
        Self {
            index,
            lower_bound: trial.lower_bound,
            effect: trial.effect,
            upper_bound: trial.upper_bound,
            detected,
        }
    }
}
