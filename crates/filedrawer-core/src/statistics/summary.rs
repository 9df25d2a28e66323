//! Sample mean, standard deviation and standard error.

/// Summary statistics of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    /// Number of observations.
    pub n: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation with Bessel's correction (divides by `n - 1`).
    pub std_dev: f64,
    /// Standard error of the mean, `std_dev / sqrt(n)`.
    pub std_error: f64,
}

impl SampleSummary {
    /// Summarize a sample.
    ///
    /// Returns `None` for fewer than two observations, where the sample
    /// variance is undefined.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.len() < 2 {
            return None;
        }
        Some(Self::compute(samples))
    }

    /// Two-pass computation. Caller guarantees `samples.len() >= 2`.
    pub(crate) fn compute(samples: &[f64]) -> Self {
        let n = samples.len();
        let nf = n as f64;
        let mean = samples.iter().sum::<f64>() / nf;
        let ss: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
        let std_dev = (ss / (nf - 1.0)).sqrt();

        Self {
            n,
            mean,
            std_dev,
            std_error: std_dev / nf.sqrt(),
        }
    }
}
