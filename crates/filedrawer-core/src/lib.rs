//! Statistical core for simulating one-sample t-test experiments.
//!
//! The simulator draws repeated samples from a known normal distribution,
//! tests each against a zero null with a t-test, and records how often the
//! effect is detected and how often the confidence intervals of detected
//! experiments miss the true mean. Selecting only detected experiments
//! (the file-drawer effect) inflates the reported effect and breaks the
//! nominal coverage of their intervals; this crate quantifies both.
//!
//! # Features
//!
//! - `ansi` (default): ANSI colors in formatted reports
//! - `parallel`: run trials across rayon workers
//! - `serde`: `Serialize`/`Deserialize` for parameters, trials and reports
//!
//! # Usage
//!
//! This crate is typically used through the `filedrawer` crate, which adds
//! configuration loading, output sinks and a CLI.
//!
//! ```
//! use filedrawer_core::{run_experiment_set, ExperimentParameters};
//!
//! let params = ExperimentParameters::new(16, 0.0, 1.0, 0.05, 0.95).unwrap();
//! let report = run_experiment_set(&params, 2000, 7).unwrap();
//! println!("false positive rate: {:.3}", report.detection_rate());
//! ```

pub mod aggregate;
pub mod analysis;
pub mod colors;
pub mod constants;
pub mod distribution;
pub mod error;
pub mod formatting;
pub mod math;
pub mod params;
pub mod simulator;
pub mod statistics;
pub mod trial;

// Re-export commonly used items at crate root
pub use aggregate::{Accumulator, AggregateReport, IntervalRow, RunMode};
pub use distribution::{derive_seed, NormalSource, SeededNormal, StudentT};
pub use error::{Result, SimulationError};
pub use params::{ExperimentParameters, ParameterSpec, Tail};
pub use simulator::{
    chunk_layout, detect, run_chunk, run_experiment_set, run_trial, ExperimentSimulator,
};
#[cfg(feature = "parallel")]
pub use simulator::run_experiment_set_parallel;
pub use trial::{CriticalValues, TrialResult};
