//! Sampling-distribution study: replicate the estimator at fixed sample
//! sizes and compare the empirical distribution against the normal the CLT
//! predicts.

use std::f64::consts::PI;

use pimc_core::{PimcError, RngHandle};
use pimc_mc::{clt_replication_seed, run_experiment};
use pimc_stats::{
    histogram_density, mean, normal_overlay, qq_normal, sample_std, shapiro_wilk, HistogramData,
    Normal, QqData, ShapiroWilk,
};
use serde::{Deserialize, Serialize};

use crate::config::CltConfig;

/// Printed/serialized summary of one sampling distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    /// Sample size each replication used.
    pub n: u64,
    /// Number of independent replications.
    pub replications: usize,
    /// Mean of the replicated estimates.
    pub empirical_mean: f64,
    /// Standard deviation (ddof = 1) of the replicated estimates.
    pub empirical_std: f64,
    /// CLT-predicted mean, the constant itself.
    pub theoretical_mean: f64,
    /// CLT-predicted standard deviation sqrt(pi (4 - pi) / n).
    pub theoretical_std: f64,
    /// Shapiro-Wilk test over the replicated estimates.
    pub shapiro: ShapiroWilk,
}

/// Everything one sample size contributes to the figure: the summary plus
/// the histogram, overlay, and Q-Q reductions.
#[derive(Debug, Clone)]
pub struct DistributionPanel {
    /// Printed/serialized summary.
    pub summary: DistributionSummary,
    /// The replicated estimates themselves, in replication order.
    pub estimates: Vec<f64>,
    /// Density histogram of the estimates.
    pub histogram: HistogramData,
    /// Theoretical normal density sampled over the estimate range.
    pub overlay: Vec<(f64, f64)>,
    /// Q-Q reduction of the estimates against the standard normal.
    pub qq: QqData,
}

/// CLT-predicted standard deviation of the estimator at sample size `n`.
///
/// The hit count is Binomial(n, pi/4); scaling by 4/n gives variance
/// pi (4 - pi) / n.
pub fn sigma_theory(n: u64) -> f64 {
    (PI * (4.0 - PI) / n as f64).sqrt()
}

/// Replicates the estimator at every configured size and reduces each
/// sampling distribution to its panel data.
pub fn run_clt_study(
    config: &CltConfig,
    master_seed: u64,
) -> Result<Vec<DistributionPanel>, PimcError> {
    config
        .sizes
        .iter()
        .enumerate()
        .map(|(size_index, &n)| build_panel(config, master_seed, size_index, n))
        .collect()
}

fn build_panel(
    config: &CltConfig,
    master_seed: u64,
    size_index: usize,
    n: u64,
) -> Result<DistributionPanel, PimcError> {
    let mut estimates = Vec::with_capacity(config.replications);
    for replication in 0..config.replications {
        let seed = clt_replication_seed(master_seed, size_index, replication);
        let mut rng = RngHandle::from_seed(seed);
        estimates.push(run_experiment(&mut rng, n)?.estimate);
    }

    let empirical_mean = mean(&estimates)?;
    let empirical_std = sample_std(&estimates)?;
    let theoretical_std = sigma_theory(n);
    let shapiro = shapiro_wilk(&estimates)?;

    let histogram = histogram_density(&estimates, config.bins)?;
    let theory = Normal::new(PI, theoretical_std)?;
    let lo = histogram.edges[0];
    let hi = histogram.edges[histogram.edges.len() - 1];
    let overlay = normal_overlay(&theory, lo, hi, config.overlay_points);
    let qq = qq_normal(&estimates)?;

    Ok(DistributionPanel {
        summary: DistributionSummary {
            n,
            replications: config.replications,
            empirical_mean,
            empirical_std,
            theoretical_mean: PI,
            theoretical_std,
            shapiro,
        },
        estimates,
        histogram,
        overlay,
        qq,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> CltConfig {
        CltConfig {
            sizes: vec![1_000],
            replications: 200,
            bins: 30,
            overlay_points: 100,
        }
    }

    #[test]
    fn sigma_theory_shrinks_like_inverse_sqrt() {
        let a = sigma_theory(1_000);
        let b = sigma_theory(100_000);
        assert!((a / b - 10.0).abs() < 1e-9);
        assert!((sigma_theory(1_000) - 0.051_930).abs() < 1e-5);
    }

    #[test]
    fn panel_carries_consistent_reductions() {
        let config = small_config();
        let panels = run_clt_study(&config, 42).unwrap();
        assert_eq!(panels.len(), 1);
        let panel = &panels[0];
        assert_eq!(panel.estimates.len(), 200);
        assert_eq!(panel.histogram.densities.len(), 30);
        assert_eq!(panel.overlay.len(), 100);
        assert_eq!(panel.qq.ordered.len(), 200);
        assert_eq!(panel.summary.n, 1_000);
        assert_eq!(panel.summary.replications, 200);
    }

    #[test]
    fn replications_are_reproducible_and_independent() {
        let config = small_config();
        let a = run_clt_study(&config, 42).unwrap();
        let b = run_clt_study(&config, 42).unwrap();
        assert_eq!(a[0].estimates, b[0].estimates);
        // Distinct replications inside one panel must not repeat wholesale.
        let first = a[0].estimates[0];
        assert!(a[0].estimates.iter().any(|&e| e != first));
    }
}
