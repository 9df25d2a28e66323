//! Descriptive statistics for samples and binomial rates.
//!
//! - **Sample summary** (`summary`): mean, Bessel-corrected standard
//!   deviation, and standard error of the mean
//! - **Binomial rates** (`binomial`): standard errors and Wilson intervals
//!   for empirical detection and coverage rates

mod binomial;
mod summary;

pub use binomial::{binomial_std_error, rate_within_tolerance, wilson_interval};
pub use summary::SampleSummary;
