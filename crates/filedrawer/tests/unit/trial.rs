//! Tests for single trials and the detection rule.

use filedrawer::{
    detect, run_trial, CriticalValues, ExperimentParameters, ExperimentSimulator,
    NormalSource, Tail,
};
use proptest::prelude::*;

/// Source that replays a fixed sample, ignoring `mu` and `sigma`.
struct FixedSample(Vec<f64>);

impl NormalSource for FixedSample {
    fn fill_normal(&mut self, _mu: f64, _sigma: f64, out: &mut [f64]) {
        out.copy_from_slice(&self.0[..out.len()]);
    }
}

#[test]
fn trial_statistics_known_sample() {
    let params = ExperimentParameters::new(5, 0.0, 1.0, 0.05, 0.95).unwrap();
    let mut source = FixedSample(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let trial = run_trial(&params, &mut source).unwrap();

    // mean 3, sd sqrt(2.5), SE sqrt(0.5)
    let se = 0.5f64.sqrt();
    assert!((trial.effect - 3.0).abs() < 1e-12);
    assert!((trial.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
    assert!((trial.std_error - se).abs() < 1e-12);
    assert!((trial.t_statistic - 3.0 / se).abs() < 1e-9);

    // t_{0.975, 4} = 2.7764
    let half = 2.776_445 * se;
    assert!((trial.lower_bound - (3.0 - half)).abs() < 1e-4);
    assert!((trial.upper_bound - (3.0 + half)).abs() < 1e-4);
    assert!(trial.p_value > 0.0 && trial.p_value < 0.01);
}

#[test]
fn detection_threshold_is_strict() {
    let params = ExperimentParameters::new(10, 0.3, 1.0, 0.05, 0.95).unwrap();
    let critical = CriticalValues::new(&params).unwrap();

    // t_{0.95, 9} = 1.8331
    assert!((critical.t_alpha - 1.833_113).abs() < 1e-4);
    assert!(!critical.detects(critical.t_alpha));
    assert!(critical.detects(critical.t_alpha + 1e-9));
    assert!(!critical.detects(f64::NAN));
}

#[test]
fn detect_follows_tail() {
    let mut source = FixedSample(vec![-3.0, -2.5, -3.5, -2.0, -4.0]);
    let base = ExperimentParameters::new(5, 0.0, 1.0, 0.05, 0.95).unwrap();
    let trial = run_trial(&base, &mut source).unwrap();
    assert!(trial.t_statistic < -5.0);

    assert!(!detect(&trial, &base).unwrap());
    assert!(detect(&trial, &base.with_tail(Tail::Left)).unwrap());
    assert!(detect(&trial, &base.with_tail(Tail::TwoSided)).unwrap());
}

#[test]
fn constant_sample_never_detects() {
    // Zero mean over zero variance: t is NaN
    let params = ExperimentParameters::new(4, 0.0, 1.0, 0.05, 0.95).unwrap();
    let mut sim = ExperimentSimulator::with_source(params, FixedSample(vec![0.0; 4])).unwrap();
    let trial = sim.run_trial();
    assert!(!trial.is_finite());
    assert!(!sim.detect(&trial));

    let report = sim.run_experiment_set(10).unwrap();
    assert_eq!(report.failed_trial_count, 10);
    assert_eq!(report.detection_count, 0);
    assert_eq!(report.mean_effect_all, None);
}

#[test]
fn overflowing_samples_are_excluded_not_fatal() {
    // Sums of draws at this scale overflow to ±inf and the deviations to NaN
    let config = filedrawer::SimulationConfig::new()
        .with_mu(0.0)
        .with_sigma(1e308)
        .with_trials(600)
        .with_parallel(true);
    let report = filedrawer::simulate(&config).unwrap().report;

    assert_eq!(report.trial_count, 600);
    assert!(report.failed_trial_count > 0);
    assert!(report.detection_count <= report.completed_trials());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn interval_contains_effect(
        n in 2usize..40,
        mu in -5.0f64..5.0,
        sigma in 0.01f64..20.0,
        ci in 0.5f64..0.999,
        seed in any::<u64>(),
    ) {
        let params = ExperimentParameters::new(n, mu, sigma, 0.05, ci).unwrap();
        let mut sim = ExperimentSimulator::new(params, seed).unwrap();
        for _ in 0..8 {
            let trial = sim.run_trial();
            prop_assert!(trial.lower_bound <= trial.effect);
            prop_assert!(trial.effect <= trial.upper_bound);
            prop_assert!(trial.std_error > 0.0);
        }
    }
}
