//! Constants used throughout the crate.

/// Default deterministic seed for RNG operations.
///
/// Same seed + same parameters = same report, bit for bit.
/// The value `0x64726177` is "draw" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x64726177;

// =============================================================================
// Default experiment design
// =============================================================================

/// Default sample size per simulated experiment.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Default true effect mean.
pub const DEFAULT_MU: f64 = 0.30;

/// Default population standard deviation.
pub const DEFAULT_SIGMA: f64 = 1.0;

/// Default significance level for the detection rule.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Default confidence level for the reported interval.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default number of simulated experiments per run.
pub const DEFAULT_TRIAL_COUNT: usize = 1000;

/// Smallest sample size for which the t-distribution has a valid
/// degrees-of-freedom parameter (`n - 1 >= 1`).
pub const MIN_SAMPLE_SIZE: usize = 2;

/// Number of trials each parallel worker runs with its own generator.
///
/// Fixed so that the chunk layout, and therefore the result, does not
/// depend on the number of threads.
pub const PARALLEL_CHUNK_SIZE: usize = 256;
