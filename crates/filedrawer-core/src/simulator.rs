//! Monte Carlo simulation of one-sample t-test experiments.
//!
//! Each trial draws `n` observations from N(μ, σ²), computes the
//! t-statistic and a two-sided confidence interval, and the detection rule
//! decides whether the trial "found" the effect. A run folds many trials
//! into an [`AggregateReport`] without storing them.
//!
//! ```
//! use filedrawer_core::{ExperimentParameters, ExperimentSimulator};
//!
//! let params = ExperimentParameters::new(10, 0.3, 1.0, 0.05, 0.95).unwrap();
//! let mut sim = ExperimentSimulator::new(params, 42).unwrap();
//! let report = sim.run_experiment_set(1000).unwrap();
//! assert!(report.detection_count <= report.trial_count);
//! ```

use tracing::{debug, warn};

use crate::aggregate::{Accumulator, AggregateReport, IntervalRow, RunMode};
use crate::distribution::{NormalSource, SeededNormal, StudentT};
use crate::error::{Result, SimulationError};
use crate::params::{ExperimentParameters, Tail};
use crate::statistics::SampleSummary;
use crate::trial::{CriticalValues, TrialResult};

/// Runs trials for one experiment design.
///
/// Owns its normal source, so two simulators never share generator state.
#[derive(Debug, Clone)]
pub struct ExperimentSimulator<S = SeededNormal> {
    params: ExperimentParameters,
    dist: StudentT,
    critical: CriticalValues,
    source: S,
    seed: Option<u64>,
    buffer: Vec<f64>,
}

impl ExperimentSimulator<SeededNormal> {
    /// Create a simulator driven by a generator seeded with `seed`.
    pub fn new(params: ExperimentParameters, seed: u64) -> Result<Self> {
        let mut sim = Self::with_source(params, SeededNormal::new(seed))?;
        sim.seed = Some(seed);
        Ok(sim)
    }
}

impl<S: NormalSource> ExperimentSimulator<S> {
    /// Create a simulator drawing from a caller-supplied source.
    pub fn with_source(params: ExperimentParameters, source: S) -> Result<Self> {
        let dist = StudentT::new(params.dof())?;
        let critical = CriticalValues::from_distribution(&params, &dist);
        Ok(Self {
            params,
            dist,
            critical,
            source,
            seed: None,
            buffer: vec![0.0; params.n()],
        })
    }

    /// Experiment design.
    pub fn params(&self) -> &ExperimentParameters {
        &self.params
    }

    /// Critical values shared by every trial.
    pub fn critical_values(&self) -> CriticalValues {
        self.critical
    }

    /// Simulate one experiment.
    pub fn run_trial(&mut self) -> TrialResult {
        let params = self.params;
        self.source
            .fill_normal(params.mu(), params.sigma(), &mut self.buffer);
        evaluate_sample(&self.buffer, &self.dist, &self.critical)
    }

    /// Apply the detection rule to a trial.
    pub fn detect(&self, trial: &TrialResult) -> bool {
        self.critical.detects(trial.t_statistic)
    }

    /// Run `trial_count` trials and summarize them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `trial_count == 0`.
    pub fn run_experiment_set(&mut self, trial_count: usize) -> Result<AggregateReport> {
        validate_trial_count(trial_count)?;
        let mut acc = Accumulator::new();
        self.accumulate(trial_count, &mut acc, None);
        Ok(self.finish(&acc, RunMode::Sequential))
    }

    /// Like [`run_experiment_set`](Self::run_experiment_set), but also
    /// keeps one [`IntervalRow`] per trial for plotting.
    pub fn run_experiment_set_with_rows(
        &mut self,
        trial_count: usize,
    ) -> Result<(AggregateReport, Vec<IntervalRow>)> {
        validate_trial_count(trial_count)?;
        let mut acc = Accumulator::new();
        let mut rows = Vec::with_capacity(trial_count);
        self.accumulate(trial_count, &mut acc, Some(&mut rows));
        Ok((self.finish(&acc, RunMode::Sequential), rows))
    }

    /// Fold `trial_count` more trials into `acc`, optionally keeping rows.
    ///
    /// Row indices continue from the trials `acc` has already seen.
    pub fn accumulate(
        &mut self,
        trial_count: usize,
        acc: &mut Accumulator,
        mut rows: Option<&mut Vec<IntervalRow>>,
    ) {
        let mu = self.params.mu();
        for _ in 0..trial_count {
            let index = acc.trial_count();
            let trial = self.run_trial();
            let detected = self.detect(&trial);
            if !trial.is_finite() {
                debug!(index, ?trial, "discarding non-finite trial");
            }
            acc.record(&trial, detected, mu);
            if let Some(rows) = rows.as_deref_mut() {
                rows.push(IntervalRow::new(index, &trial, detected));
            }
        }
    }

    fn finish(&self, acc: &Accumulator, mode: RunMode) -> AggregateReport {
        let report = acc.finish(&self.params, self.critical, self.seed, mode);
        log_report(&report);
        report
    }
}

/// Turn one sample into a trial result.
fn evaluate_sample(samples: &[f64], dist: &StudentT, critical: &CriticalValues) -> TrialResult {
    let summary = SampleSummary::compute(samples);
    let effect = summary.mean;
    let t_statistic = effect / summary.std_error;
    let half_width = critical.t_ci * summary.std_error;

    TrialResult {
        effect,
        lower_bound: effect - half_width,
        upper_bound: effect + half_width,
        t_statistic,
        std_dev: summary.std_dev,
        std_error: summary.std_error,
        p_value: p_value(dist, critical.tail, t_statistic),
        cohens_d: effect / summary.std_dev,
    }
}

fn p_value(dist: &StudentT, tail: Tail, t: f64) -> f64 {
    match tail {
        Tail::Right => dist.sf(t),
        Tail::Left => dist.cdf(t),
        Tail::TwoSided => (2.0 * dist.sf(t.abs())).min(1.0),
    }
}

fn validate_trial_count(trial_count: usize) -> Result<()> {
    if trial_count == 0 {
        return Err(SimulationError::invalid(
            "trial_count",
            0.0,
            "must run at least one trial",
        ));
    }
    Ok(())
}

fn log_report(report: &AggregateReport) {
    debug!(
        trials = report.trial_count,
        detections = report.detection_count,
        coverage_violations = report.coverage_violation_count,
        mode = ?report.mode,
        "experiment set finished"
    );
    if report.failed_trial_count > 0 {
        warn!(
            failed = report.failed_trial_count,
            trials = report.trial_count,
            "some trials produced non-finite results and were excluded"
        );
    }
}

// =============================================================================
// Free-function interface
// =============================================================================

/// Simulate one experiment with `params`, drawing from `source`.
pub fn run_trial<S: NormalSource>(
    params: &ExperimentParameters,
    source: &mut S,
) -> Result<TrialResult> {
    let dist = StudentT::new(params.dof())?;
    let critical = CriticalValues::from_distribution(params, &dist);
    let mut samples = vec![0.0; params.n()];
    source.fill_normal(params.mu(), params.sigma(), &mut samples);
    Ok(evaluate_sample(&samples, &dist, &critical))
}

/// Whether `trial` counts as a detection under `params`.
pub fn detect(trial: &TrialResult, params: &ExperimentParameters) -> Result<bool> {
    Ok(CriticalValues::new(params)?.detects(trial.t_statistic))
}

/// Run `trial_count` trials sequentially from `seed`.
pub fn run_experiment_set(
    params: &ExperimentParameters,
    trial_count: usize,
    seed: u64,
) -> Result<AggregateReport> {
    ExperimentSimulator::new(*params, seed)?.run_experiment_set(trial_count)
}

// =============================================================================
// Parallel execution
// =============================================================================

/// Run one chunk of a parallel run.
///
/// Chunk `i` draws from its own generator seeded with
/// `derive_seed(seed, i)`, so the chunks of a run can be executed in any
/// order, on any thread, and merged into the same totals.
pub fn run_chunk(
    params: &ExperimentParameters,
    seed: u64,
    chunk_index: usize,
    trial_count: usize,
) -> Result<Accumulator> {
    let chunk_seed = crate::distribution::derive_seed(seed, chunk_index as u64);
    let mut sim = ExperimentSimulator::new(*params, chunk_seed)?;
    let mut acc = Accumulator::new();
    sim.accumulate(trial_count, &mut acc, None);
    Ok(acc)
}

/// Chunk sizes covering `trial_count` trials.
pub fn chunk_layout(trial_count: usize, chunk_size: usize) -> Vec<usize> {
    let chunk_size = chunk_size.max(1);
    (0..trial_count.div_ceil(chunk_size))
        .map(|i| chunk_size.min(trial_count - i * chunk_size))
        .collect()
}

/// Run `trial_count` trials across rayon workers.
///
/// The result depends only on `params`, `trial_count` and `seed`, never on
/// the thread count: chunks are fixed-size and partial totals are merged
/// in chunk order.
#[cfg(feature = "parallel")]
pub fn run_experiment_set_parallel(
    params: &ExperimentParameters,
    trial_count: usize,
    seed: u64,
) -> Result<AggregateReport> {
    use rayon::prelude::*;

    use crate::constants::PARALLEL_CHUNK_SIZE;

    validate_trial_count(trial_count)?;
    let critical = CriticalValues::new(params)?;
    let layout = chunk_layout(trial_count, PARALLEL_CHUNK_SIZE);

    let partials: Vec<Accumulator> = layout
        .par_iter()
        .enumerate()
        .map(|(i, &len)| run_chunk(params, seed, i, len))
        .collect::<Result<Vec<_>>>()?;

    let mut acc = Accumulator::new();
    for partial in &partials {
        acc.merge(partial);
    }

    let report = acc.finish(
        params,
        critical,
        Some(seed),
        RunMode::Parallel {
            chunk_size: PARALLEL_CHUNK_SIZE,
        },
    );
    log_report(&report);
    Ok(report)
}
