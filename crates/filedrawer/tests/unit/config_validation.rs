//! Tests for parameter and configuration validation.
//!
//! Invalid designs must be rejected before anything is sampled, naming the
//! offending parameter.

use filedrawer::{
    simulate, ConfigError, ExperimentParameters, SimulationConfig, SimulationError, Tail,
};

fn rejected_name(result: Result<ExperimentParameters, SimulationError>) -> &'static str {
    match result {
        Err(SimulationError::InvalidParameter { name, .. }) => name,
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

// =============================================================================
// SAMPLE SIZE
// =============================================================================

#[test]
fn sample_size_one_rejected() {
    assert_eq!(
        rejected_name(ExperimentParameters::new(1, 0.3, 1.0, 0.05, 0.95)),
        "n"
    );
}

#[test]
fn sample_size_zero_rejected() {
    assert_eq!(
        rejected_name(ExperimentParameters::new(0, 0.3, 1.0, 0.05, 0.95)),
        "n"
    );
}

#[test]
fn sample_size_two_valid() {
    // Smallest design with a defined sample variance (dof = 1)
    let params = ExperimentParameters::new(2, 0.3, 1.0, 0.05, 0.95).unwrap();
    assert_eq!(params.dof(), 1);

    let report = filedrawer::run_experiment_set(&params, 500, 1).unwrap();
    assert_eq!(report.trial_count, 500);
    assert!(report.detection_count <= 500);
}

// =============================================================================
// DISTRIBUTION PARAMETERS
// =============================================================================

#[test]
fn sigma_must_be_positive() {
    assert_eq!(
        rejected_name(ExperimentParameters::new(10, 0.3, 0.0, 0.05, 0.95)),
        "sigma"
    );
    assert_eq!(
        rejected_name(ExperimentParameters::new(10, 0.3, -1.0, 0.05, 0.95)),
        "sigma"
    );
}

#[test]
fn non_finite_values_rejected() {
    assert_eq!(
        rejected_name(ExperimentParameters::new(10, f64::NAN, 1.0, 0.05, 0.95)),
        "mu"
    );
    assert_eq!(
        rejected_name(ExperimentParameters::new(10, 0.3, f64::INFINITY, 0.05, 0.95)),
        "sigma"
    );
}

#[test]
fn negative_mu_valid() {
    let params = ExperimentParameters::new(10, -0.3, 1.0, 0.05, 0.95).unwrap();
    assert_eq!(params.mu(), -0.3);
}

// =============================================================================
// LEVELS
// =============================================================================

#[test]
fn alpha_bounds_rejected() {
    for alpha in [0.0, 1.0, -0.01, 1.5] {
        assert_eq!(
            rejected_name(ExperimentParameters::new(10, 0.3, 1.0, alpha, 0.95)),
            "alpha",
            "alpha = {}",
            alpha
        );
    }
}

#[test]
fn ci_bounds_rejected() {
    for ci in [0.0, 1.0, 2.0] {
        assert_eq!(
            rejected_name(ExperimentParameters::new(10, 0.3, 1.0, 0.05, ci)),
            "ci",
            "ci = {}",
            ci
        );
    }
}

#[test]
fn tail_parses_from_cli_names() {
    assert_eq!("right".parse::<Tail>().unwrap(), Tail::Right);
    assert_eq!("left".parse::<Tail>().unwrap(), Tail::Left);
    assert_eq!("two-sided".parse::<Tail>().unwrap(), Tail::TwoSided);
    assert!("both".parse::<Tail>().is_err());
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn config_rejects_invalid_design_before_running() {
    let config = SimulationConfig::new().with_sample_size(1);
    match simulate(&config) {
        Err(ConfigError::Simulation(SimulationError::InvalidParameter { name, .. })) => {
            assert_eq!(name, "n");
        }
        other => panic!("expected invalid n, got {:?}", other.map(|s| s.report)),
    }
}

#[test]
fn config_rejects_zero_trials() {
    let config = SimulationConfig::new().with_trials(0);
    assert!(matches!(
        simulate(&config),
        Err(ConfigError::Simulation(SimulationError::InvalidParameter {
            name: "trial_count",
            ..
        }))
    ));
}

#[test]
fn config_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");
    std::fs::write(
        &path,
        r#"{ "n": 16, "mu": 0.0, "tail": "two-sided", "trials": 200, "seed": 5 }"#,
    )
    .unwrap();

    let config = SimulationConfig::from_file(&path).unwrap();
    assert_eq!(config.n, 16);
    assert_eq!(config.tail, Tail::TwoSided);
    assert_eq!(config.trials, 200);
    assert_eq!(config.seed, 5);
    // Unspecified fields keep their defaults
    assert_eq!(config.alpha, 0.05);
    assert_eq!(config.ci, 0.95);

    let params = config.parameters().unwrap();
    assert_eq!(params.n(), 16);
}
