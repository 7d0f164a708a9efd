//! The three analytical studies over the pi estimator: the basic estimation
//! block, the convergence sweep, and the sampling-distribution (CLT) study,
//! together with their console report blocks and file artifacts.

pub mod artifacts;
pub mod basic;
pub mod clt;
pub mod config;
pub mod convergence;
pub mod hash;
pub mod report;

pub use artifacts::{write_convergence_csv, RunSummary};
pub use basic::run_basic_study;
pub use clt::{run_clt_study, sigma_theory, DistributionPanel, DistributionSummary};
pub use config::{CltConfig, StudyConfig, SweepConfig};
pub use convergence::{log_spaced_sizes, run_convergence_study, ConvergenceReport};
pub use hash::stable_hash_string;
