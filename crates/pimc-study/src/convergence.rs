//! Convergence sweep over log-spaced sample sizes.

use pimc_core::{ErrorInfo, PimcError, RngHandle};
use pimc_mc::{run_experiment, sweep_stream_seed, ExperimentResult};
use pimc_stats::{log_log_slope, LineFit};
use serde::{Deserialize, Serialize};

use crate::config::SweepConfig;

/// Ordered sweep rows plus the fitted log-log error slope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// One row per swept sample size, in sweep order.
    pub rows: Vec<ExperimentResult>,
    /// Least-squares slope of log10(error) against log10(n); the estimator
    /// converges like 1/sqrt(n), so this sits near -1/2.
    pub error_slope: LineFit,
}

/// Builds the log-spaced sample-size grid for the sweep.
///
/// Grid endpoints are exact; interior points are truncated to integers and
/// consecutive duplicates collapsed, so the result is strictly increasing.
pub fn log_spaced_sizes(config: &SweepConfig) -> Result<Vec<u64>, PimcError> {
    if config.points < 2 {
        return Err(PimcError::Study(
            ErrorInfo::new("sweep-points", "sweep needs at least two grid points")
                .with_context("points", config.points.to_string()),
        ));
    }
    if config.min_n == 0 || config.max_n <= config.min_n {
        return Err(PimcError::Study(
            ErrorInfo::new("sweep-range", "sweep range must satisfy 1 <= min < max")
                .with_context("min_n", config.min_n.to_string())
                .with_context("max_n", config.max_n.to_string()),
        ));
    }

    let lo = (config.min_n as f64).log10();
    let hi = (config.max_n as f64).log10();
    let step = (hi - lo) / (config.points - 1) as f64;

    let mut sizes = Vec::with_capacity(config.points);
    for i in 0..config.points {
        let n = if i == 0 {
            config.min_n
        } else if i == config.points - 1 {
            config.max_n
        } else {
            10.0_f64.powf(lo + i as f64 * step) as u64
        };
        if sizes.last() != Some(&n) {
            sizes.push(n);
        }
    }
    Ok(sizes)
}

/// Sweeps the estimator across the grid, one substream per grid index.
pub fn run_convergence_study(
    config: &SweepConfig,
    master_seed: u64,
) -> Result<ConvergenceReport, PimcError> {
    let sizes = log_spaced_sizes(config)?;
    let mut rows = Vec::with_capacity(sizes.len());
    for (index, &n) in sizes.iter().enumerate() {
        let mut rng = RngHandle::from_seed(sweep_stream_seed(master_seed, index));
        rows.push(run_experiment(&mut rng, n)?);
    }

    let pairs: Vec<(f64, f64)> = rows.iter().map(|r| (r.n as f64, r.error)).collect();
    let error_slope = log_log_slope(&pairs)?;
    Ok(ConvergenceReport { rows, error_slope })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_strictly_increasing_with_exact_endpoints() {
        let config = SweepConfig::default();
        let sizes = log_spaced_sizes(&config).unwrap();
        assert_eq!(sizes.first(), Some(&100));
        assert_eq!(sizes.last(), Some(&1_000_000));
        assert_eq!(sizes.len(), 50);
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn tight_grids_collapse_duplicates() {
        let config = SweepConfig {
            min_n: 10,
            max_n: 20,
            points: 40,
            milestones: Vec::new(),
        };
        let sizes = log_spaced_sizes(&config).unwrap();
        assert!(sizes.len() < 40);
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let mut config = SweepConfig::default();
        config.points = 1;
        assert_eq!(
            log_spaced_sizes(&config).unwrap_err().info().code,
            "sweep-points"
        );
        let mut config = SweepConfig::default();
        config.min_n = 0;
        assert_eq!(
            log_spaced_sizes(&config).unwrap_err().info().code,
            "sweep-range"
        );
        let mut config = SweepConfig::default();
        config.max_n = config.min_n;
        assert_eq!(
            log_spaced_sizes(&config).unwrap_err().info().code,
            "sweep-range"
        );
    }
}
