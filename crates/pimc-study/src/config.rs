//! Study parameters and their fixed defaults.
//!
//! The experiment sizes are not exposed on the command line; this type
//! exists so tests can shrink the workload and so the effective parameters
//! land in the run summary.

use serde::{Deserialize, Serialize};

/// Parameters governing the three studies of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Sample sizes for the basic estimation block.
    #[serde(default = "default_basic_sizes")]
    pub basic_sizes: Vec<u64>,
    /// Convergence sweep shape.
    #[serde(default)]
    pub sweep: SweepConfig,
    /// Sampling-distribution study shape.
    #[serde(default)]
    pub clt: CltConfig,
}

fn default_basic_sizes() -> Vec<u64> {
    vec![100, 1_000, 10_000, 100_000]
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            basic_sizes: default_basic_sizes(),
            sweep: SweepConfig::default(),
            clt: CltConfig::default(),
        }
    }
}

/// Convergence sweep parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Smallest sample size in the sweep.
    #[serde(default = "default_sweep_min")]
    pub min_n: u64,
    /// Largest sample size in the sweep.
    #[serde(default = "default_sweep_max")]
    pub max_n: u64,
    /// Number of log-spaced grid points before duplicate collapse.
    #[serde(default = "default_sweep_points")]
    pub points: usize,
    /// Swept sizes whose results are echoed to the console.
    #[serde(default = "default_milestones")]
    pub milestones: Vec<u64>,
}

fn default_sweep_min() -> u64 {
    100
}

fn default_sweep_max() -> u64 {
    1_000_000
}

fn default_sweep_points() -> usize {
    50
}

fn default_milestones() -> Vec<u64> {
    vec![100, 1_000, 10_000, 100_000, 1_000_000]
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_n: default_sweep_min(),
            max_n: default_sweep_max(),
            points: default_sweep_points(),
            milestones: default_milestones(),
        }
    }
}

/// Sampling-distribution study parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CltConfig {
    /// Sample sizes whose sampling distributions are validated.
    #[serde(default = "default_clt_sizes")]
    pub sizes: Vec<u64>,
    /// Independent replications per sample size.
    #[serde(default = "default_replications")]
    pub replications: usize,
    /// Histogram bins for the distribution panels.
    #[serde(default = "default_bins")]
    pub bins: usize,
    /// Points in the normal-density overlay curve.
    #[serde(default = "default_overlay_points")]
    pub overlay_points: usize,
}

fn default_clt_sizes() -> Vec<u64> {
    vec![1_000, 10_000, 100_000]
}

fn default_replications() -> usize {
    500
}

fn default_bins() -> usize {
    30
}

fn default_overlay_points() -> usize {
    100
}

impl Default for CltConfig {
    fn default() -> Self {
        Self {
            sizes: default_clt_sizes(),
            replications: default_replications(),
            bins: default_bins(),
            overlay_points: default_overlay_points(),
        }
    }
}
