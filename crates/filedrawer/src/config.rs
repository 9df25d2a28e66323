//! Simulation configuration.
//!
//! A [`SimulationConfig`] is assembled in layers: defaults, then an
//! optional JSON file, then environment overrides, then CLI flags. Only
//! [`SimulationConfig::parameters`] validates; everything before it is
//! plain data.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use filedrawer_core::constants::{
    DEFAULT_ALPHA, DEFAULT_CONFIDENCE, DEFAULT_MU, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
    DEFAULT_SIGMA, DEFAULT_TRIAL_COUNT,
};
use filedrawer_core::{ExperimentParameters, ParameterSpec, SimulationError, Tail};

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "FILEDRAWER_SEED";

/// Environment variable overriding the trial count.
pub const ENV_TRIALS: &str = "FILEDRAWER_TRIALS";

/// Errors that can occur while assembling a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading a config file.
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema.
    Parse(serde_json::Error),

    /// An override could not be parsed.
    InvalidValue {
        /// Where the value came from (e.g. an environment variable name).
        key: String,
        /// The raw value.
        value: String,
    },

    /// The assembled parameters failed validation.
    Simulation(SimulationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid config: {}", e),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {}: '{}'", key, value)
            }
            ConfigError::Simulation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Simulation(e) => Some(e),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<SimulationError> for ConfigError {
    fn from(e: SimulationError) -> Self {
        ConfigError::Simulation(e)
    }
}

/// Everything needed to reproduce a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Sample size per experiment.
    ///
    /// Default: 10
    pub n: usize,

    /// True effect mean.
    ///
    /// Default: 0.30
    pub mu: f64,

    /// Population standard deviation.
    ///
    /// Default: 1.0
    pub sigma: f64,

    /// Significance level of the detection rule.
    ///
    /// Default: 0.05
    pub alpha: f64,

    /// Confidence level of the interval.
    ///
    /// Default: 0.95
    pub ci: f64,

    /// Sidedness of the detection rule.
    ///
    /// Default: right
    pub tail: Tail,

    /// Number of simulated experiments.
    ///
    /// Default: 1000
    pub trials: usize,

    /// Random seed for reproducibility.
    pub seed: u64,

    /// Run trials across worker threads.
    ///
    /// Default: false. Parallel and sequential runs with the same seed
    /// draw different samples; each is reproducible on its own.
    pub parallel: bool,

    /// Keep one row per trial for plotting.
    ///
    /// Default: false. Forces a sequential run so that row indices follow
    /// generation order.
    pub keep_rows: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_SAMPLE_SIZE,
            mu: DEFAULT_MU,
            sigma: DEFAULT_SIGMA,
            alpha: DEFAULT_ALPHA,
            ci: DEFAULT_CONFIDENCE,
            tail: Tail::Right,
            trials: DEFAULT_TRIAL_COUNT,
            seed: DEFAULT_SEED,
            parallel: false,
            keep_rows: false,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SEED) {
            self.seed = parse_override(ENV_SEED, &raw)?;
        }
        if let Some(raw) = lookup(ENV_TRIALS) {
            self.trials = parse_override(ENV_TRIALS, &raw)?;
        }
        Ok(self)
    }

    /// Set the sample size.
    pub fn with_sample_size(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Set the true effect mean.
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Set the population standard deviation.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the significance level.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the confidence level.
    pub fn with_ci(mut self, ci: f64) -> Self {
        self.ci = ci;
        self
    }

    /// Set the detection rule.
    pub fn with_tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    /// Set the number of simulated experiments.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Keep per-trial rows for plotting.
    pub fn with_rows(mut self, keep_rows: bool) -> Self {
        self.keep_rows = keep_rows;
        self
    }

    /// Validate and build the experiment parameters.
    pub fn parameters(&self) -> Result<ExperimentParameters, ConfigError> {
        Ok(ExperimentParameters::try_from(ParameterSpec {
            n: self.n,
            mu: self.mu,
            sigma: self.sigma,
            alpha: self.alpha,
            ci: self.ci,
            tail: self.tail,
        })?)
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
