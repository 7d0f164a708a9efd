//! Normal Q-Q reduction: ordered sample against normal order-statistic
//! medians, plus the least-squares line through the pairs.

use pimc_core::{ErrorInfo, PimcError};
use serde::{Deserialize, Serialize};

use crate::fit::{least_squares_line, LineFit};
use crate::normal::Normal;

/// Data behind one Q-Q panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QqData {
    /// Standard-normal order-statistic medians (Filliben estimate).
    pub theoretical: Vec<f64>,
    /// The sample, sorted ascending.
    pub ordered: Vec<f64>,
    /// Least-squares line through the (theoretical, ordered) pairs.
    pub fit: LineFit,
}

/// Builds Q-Q data for the sample against the standard normal.
pub fn qq_normal(sample: &[f64]) -> Result<QqData, PimcError> {
    let n = sample.len();
    if n < 3 {
        return Err(PimcError::Stats(
            ErrorInfo::new("sample-too-small", "Q-Q reduction needs at least three points")
                .with_context("n", n.to_string()),
        ));
    }
    if sample.iter().any(|v| !v.is_finite()) {
        return Err(PimcError::Stats(
            ErrorInfo::new("non-finite-sample", "Q-Q reduction given a non-finite value")
                .with_context("n", n.to_string()),
        ));
    }

    let mut ordered = sample.to_vec();
    ordered.sort_unstable_by(f64::total_cmp);

    // Filliben's uniform order-statistic medians, mapped through the normal
    // quantile.
    let nf = n as f64;
    let tail = 0.5_f64.powf(1.0 / nf);
    let std_normal = Normal::standard();
    let mut theoretical = Vec::with_capacity(n);
    for i in 1..=n {
        let u = if i == n {
            tail
        } else if i == 1 {
            1.0 - tail
        } else {
            (i as f64 - 0.3175) / (nf + 0.365)
        };
        theoretical.push(std_normal.quantile(u)?);
    }

    let fit = least_squares_line(&theoretical, &ordered)?;
    Ok(QqData {
        theoretical,
        ordered,
        fit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normal_grid(n: usize, mu: f64, sigma: f64) -> Vec<f64> {
        let std_normal = Normal::standard();
        (1..=n)
            .map(|i| {
                let p = (i as f64 - 0.5) / n as f64;
                mu + sigma * std_normal.quantile(p).unwrap()
            })
            .collect()
    }

    #[test]
    fn fit_recovers_location_and_scale_on_normal_grid() {
        let sample = normal_grid(100, 3.0, 2.0);
        let qq = qq_normal(&sample).unwrap();
        assert!((qq.fit.slope - 2.0).abs() < 0.05);
        assert!((qq.fit.intercept - 3.0).abs() < 0.05);
    }

    #[test]
    fn theoretical_quantiles_are_antisymmetric() {
        let sample = normal_grid(25, 0.0, 1.0);
        let qq = qq_normal(&sample).unwrap();
        let n = qq.theoretical.len();
        assert!((qq.theoretical[0] + qq.theoretical[n - 1]).abs() < 1e-9);
        assert!(qq.theoretical.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ordered_series_is_sorted() {
        let qq = qq_normal(&[0.5, -1.0, 2.0, 0.0, 1.0]).unwrap();
        assert!(qq.ordered.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn tiny_samples_are_rejected() {
        let err = qq_normal(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err.info().code, "sample-too-small");
    }
}
