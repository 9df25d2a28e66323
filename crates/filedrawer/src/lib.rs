//! # filedrawer
//!
//! Monte Carlo simulation of one-sample t-test experiments: how often a
//! design detects its effect, and how badly the detected experiments
//! misreport it.
//!
//! ## Quick Start
//!
//! ```
//! use filedrawer::{simulate, SimulationConfig};
//!
//! let config = SimulationConfig::new()
//!     .with_sample_size(10)
//!     .with_mu(0.3)
//!     .with_trials(1000)
//!     .with_seed(42);
//!
//! let run = simulate(&config).unwrap();
//! println!("{}", filedrawer::output::format_report(&run.report));
//! ```
//!
//! ## What is measured
//!
//! Each trial draws `n` values from N(μ, σ²), computes the t-statistic and
//! a `ci`-level confidence interval, and applies a one- or two-sided
//! detection rule at level `alpha`. The report carries the detection rate,
//! the mean effect over all and over detected trials, and how many
//! detected intervals exclude the true mean.
//!
//! ## Reproducibility
//!
//! Runs are deterministic given the config. Sequential and parallel runs
//! use different generator layouts, so they differ from each other for
//! the same seed.

pub mod config;
pub mod output;

pub use config::{ConfigError, SimulationConfig};
pub use filedrawer_core::{
    analysis, constants, detect, run_experiment_set, run_trial, AggregateReport,
    CriticalValues, ExperimentParameters, ExperimentSimulator, IntervalRow, NormalSource,
    RunMode, SeededNormal, SimulationError, StudentT, Tail, TrialResult,
};

use tracing::{debug, info};

/// Outcome of [`simulate`].
#[derive(Debug, Clone)]
pub struct Simulation {
    /// The configuration that produced this run.
    pub config: SimulationConfig,
    /// Aggregate statistics.
    pub report: AggregateReport,
    /// Per-trial rows, present iff `config.keep_rows`.
    pub rows: Option<Vec<IntervalRow>>,
}

/// Run the simulation described by `config`.
///
/// # Errors
///
/// Returns [`ConfigError::Simulation`] if the parameters or the trial
/// count are invalid. Nothing is sampled in that case.
pub fn simulate(config: &SimulationConfig) -> Result<Simulation, ConfigError> {
    let params = config.parameters()?;
    info!(
        n = params.n(),
        mu = params.mu(),
        sigma = params.sigma(),
        alpha = params.alpha(),
        ci = params.ci(),
        tail = %params.tail(),
        trials = config.trials,
        seed = config.seed,
        "starting simulation"
    );

    if config.keep_rows {
        if config.parallel {
            debug!("row collection requested, running sequentially");
        }
        let mut sim = ExperimentSimulator::new(params, config.seed)?;
        let (report, rows) = sim.run_experiment_set_with_rows(config.trials)?;
        return Ok(Simulation {
            config: config.clone(),
            report,
            rows: Some(rows),
        });
    }

    let report = if config.parallel {
        run_parallel(&params, config)?
    } else {
        run_experiment_set(&params, config.trials, config.seed)?
    };

    Ok(Simulation {
        config: config.clone(),
        report,
        rows: None,
    })
}

#[cfg(feature = "parallel")]
fn run_parallel(
    params: &ExperimentParameters,
    config: &SimulationConfig,
) -> Result<AggregateReport, SimulationError> {
    filedrawer_core::run_experiment_set_parallel(params, config.trials, config.seed)
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(
    params: &ExperimentParameters,
    config: &SimulationConfig,
) -> Result<AggregateReport, SimulationError> {
    debug!("built without the parallel feature, running sequentially");
    run_experiment_set(params, config.trials, config.seed)
}
