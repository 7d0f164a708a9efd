use pimc_study::{log_spaced_sizes, run_convergence_study, SweepConfig};

#[test]
fn error_slope_sits_in_the_inverse_sqrt_band() {
    let config = SweepConfig::default();
    let report = run_convergence_study(&config, 42).expect("sweep");
    assert_eq!(report.rows.len(), 50);
    let slope = report.error_slope.slope;
    assert!(
        slope > -0.8 && slope < -0.2,
        "slope {slope} outside the 1/sqrt(n) band"
    );
}

#[test]
fn sweeps_are_reproducible_per_seed() {
    let config = SweepConfig::default();
    let a = run_convergence_study(&config, 42).expect("sweep");
    let b = run_convergence_study(&config, 42).expect("sweep");
    assert_eq!(a, b);
    let c = run_convergence_study(&config, 43).expect("sweep");
    assert_ne!(a.rows, c.rows);
}

#[test]
fn default_grid_meets_only_the_endpoint_milestones() {
    let config = SweepConfig::default();
    let sizes = log_spaced_sizes(&config).expect("grid");
    let echoed: Vec<u64> = sizes
        .iter()
        .copied()
        .filter(|n| config.milestones.contains(n))
        .collect();
    assert_eq!(echoed, vec![100, 1_000_000]);
}
