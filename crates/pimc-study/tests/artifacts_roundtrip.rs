use std::fs;

use pimc_study::{
    run_basic_study, run_clt_study, run_convergence_study, write_convergence_csv, CltConfig,
    RunSummary, StudyConfig,
};
use tempfile::tempdir;

fn small_study() -> StudyConfig {
    let mut config = StudyConfig::default();
    config.basic_sizes = vec![100, 1_000];
    config.sweep.points = 8;
    config.clt = CltConfig {
        sizes: vec![500],
        replications: 50,
        bins: 10,
        overlay_points: 20,
    };
    config
}

fn build_summary(seed: u64) -> RunSummary {
    let config = small_study();
    let basic = run_basic_study(&config, seed).expect("basic");
    let convergence = run_convergence_study(&config.sweep, seed).expect("sweep");
    let panels = run_clt_study(&config.clt, seed).expect("clt");
    let distributions = panels.into_iter().map(|panel| panel.summary).collect();
    RunSummary::new(seed, config, basic, convergence, distributions).expect("summary")
}

#[test]
fn summary_roundtrips_through_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("run_summary.json");
    let summary = build_summary(42);
    summary.write(&path).expect("write");
    let loaded = RunSummary::load(&path).expect("load");
    assert_eq!(summary, loaded);
}

#[test]
fn results_hash_is_stable_and_sensitive() {
    let a = build_summary(42);
    let b = build_summary(42);
    assert_eq!(a.results_hash, b.results_hash);
    let c = build_summary(7);
    assert_ne!(a.results_hash, c.results_hash);
}

#[test]
fn missing_summary_reports_a_read_error() {
    let dir = tempdir().expect("tempdir");
    let err = RunSummary::load(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.info().code, "summary-read");
}

#[test]
fn csv_lists_the_header_and_every_row() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("convergence.csv");
    let config = small_study();
    let report = run_convergence_study(&config.sweep, 42).expect("sweep");
    write_convergence_csv(&path, &report.rows).expect("csv");

    let contents = fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "n,estimate,error");
    assert_eq!(lines.len(), report.rows.len() + 1);
    let first = &report.rows[0];
    assert_eq!(
        lines[1],
        format!("{},{:.6},{:.6}", first.n, first.estimate, first.error)
    );
    assert!(lines[1..].iter().all(|line| line.split(',').count() == 3));
}
