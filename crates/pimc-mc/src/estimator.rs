//! Pi estimation from quarter-circle hit counts.

use std::f64::consts::PI;

use pimc_core::{ErrorInfo, PimcError, RngHandle};
use serde::{Deserialize, Serialize};

use crate::sampler::sample_quarter_circle;

/// A sample size together with the quarter-circle hits observed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Number of points drawn.
    pub n: u64,
    /// Points that satisfied x^2 + y^2 <= 1.
    pub n_inside: u64,
}

/// One pi estimate and its absolute error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Sample size behind the estimate.
    pub n: u64,
    /// Monte Carlo estimate 4 * n_inside / n, always in [0, 4].
    pub estimate: f64,
    /// Absolute deviation from the mathematical constant.
    pub error: f64,
}

/// Converts a hit count into a pi estimate and its error.
///
/// Rejects an empty sample and impossible counts (n_inside > n) rather than
/// returning a nonsensical estimate.
pub fn estimate(sample: SampleSet) -> Result<ExperimentResult, PimcError> {
    if sample.n == 0 {
        return Err(PimcError::Estimation(
            ErrorInfo::new("sample-size-zero", "cannot estimate from an empty sample")
                .with_context("n", "0"),
        ));
    }
    if sample.n_inside > sample.n {
        return Err(PimcError::Estimation(
            ErrorInfo::new("count-exceeds-size", "inside count exceeds sample size")
                .with_context("n", sample.n.to_string())
                .with_context("n_inside", sample.n_inside.to_string()),
        ));
    }
    let estimate = 4.0 * sample.n_inside as f64 / sample.n as f64;
    Ok(ExperimentResult {
        n: sample.n,
        estimate,
        error: (estimate - PI).abs(),
    })
}

/// Draws `n` points from `rng` and estimates pi from the hit count.
pub fn run_experiment(rng: &mut RngHandle, n: u64) -> Result<ExperimentResult, PimcError> {
    let n_inside = sample_quarter_circle(rng, n)?;
    estimate(SampleSet { n, n_inside })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_counts_are_valid_not_errors() {
        let all_out = estimate(SampleSet { n: 10, n_inside: 0 }).unwrap();
        assert_eq!(all_out.estimate, 0.0);
        let all_in = estimate(SampleSet { n: 10, n_inside: 10 }).unwrap();
        assert_eq!(all_in.estimate, 4.0);
        assert!((all_in.error - (4.0 - PI)).abs() < 1e-15);
    }

    #[test]
    fn impossible_count_is_rejected() {
        let err = estimate(SampleSet { n: 5, n_inside: 6 }).unwrap_err();
        assert_eq!(err.info().code, "count-exceeds-size");
    }

    #[test]
    fn empty_sample_is_rejected() {
        let err = estimate(SampleSet { n: 0, n_inside: 0 }).unwrap_err();
        assert_eq!(err.info().code, "sample-size-zero");
    }
}
