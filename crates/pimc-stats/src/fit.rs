//! Least-squares line fits for the Q-Q panels and the convergence slope.

use pimc_core::{ErrorInfo, PimcError};
use serde::{Deserialize, Serialize};

/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

impl LineFit {
    /// Evaluates the line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least-squares line through `(xs[i], ys[i])`.
pub fn least_squares_line(xs: &[f64], ys: &[f64]) -> Result<LineFit, PimcError> {
    if xs.len() != ys.len() {
        return Err(PimcError::Stats(
            ErrorInfo::new("length-mismatch", "x and y series differ in length")
                .with_context("xs", xs.len().to_string())
                .with_context("ys", ys.len().to_string()),
        ));
    }
    if xs.len() < 2 {
        return Err(PimcError::Stats(
            ErrorInfo::new("sample-too-small", "line fit needs at least two points")
                .with_context("len", xs.len().to_string()),
        ));
    }
    if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
        return Err(PimcError::Stats(ErrorInfo::new(
            "non-finite-sample",
            "line fit given a non-finite value",
        )));
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;
    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        sxx += (x - x_mean) * (x - x_mean);
        sxy += (x - x_mean) * (y - y_mean);
    }
    if sxx <= 0.0 {
        return Err(PimcError::Stats(
            ErrorInfo::new("degenerate-abscissa", "all x values coincide")
                .with_context("x", x_mean.to_string()),
        ));
    }
    let slope = sxy / sxx;
    Ok(LineFit {
        slope,
        intercept: y_mean - slope * x_mean,
    })
}

/// Fits `log10(y)` against `log10(x)`, skipping non-positive pairs.
///
/// Used for the convergence check: on the error-vs-n sweep the slope is
/// expected near -1/2.
pub fn log_log_slope(pairs: &[(f64, f64)]) -> Result<LineFit, PimcError> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs
        .iter()
        .filter(|(x, y)| *x > 0.0 && *y > 0.0)
        .map(|(x, y)| (x.log10(), y.log10()))
        .unzip();
    if xs.len() < 2 {
        return Err(PimcError::Stats(
            ErrorInfo::new(
                "sample-too-small",
                "log-log fit needs at least two positive pairs",
            )
            .with_context("usable", xs.len().to_string())
            .with_context("total", pairs.len().to_string()),
        ));
    }
    least_squares_line(&xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovers_an_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let fit = least_squares_line(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.at(10.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn log_log_slope_of_inverse_sqrt() {
        let pairs: Vec<(f64, f64)> = (1..=6)
            .map(|k| {
                let x = 10.0_f64.powi(k);
                (x, 2.0 / x.sqrt())
            })
            .collect();
        let fit = log_log_slope(&pairs).unwrap();
        assert!((fit.slope - (-0.5)).abs() < 1e-9);
    }

    #[test]
    fn log_log_slope_skips_zero_errors() {
        let pairs = [(100.0, 0.01), (1000.0, 0.0), (10000.0, 0.001)];
        let fit = log_log_slope(&pairs).unwrap();
        assert!(fit.slope < 0.0);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert_eq!(
            least_squares_line(&[1.0], &[2.0]).unwrap_err().info().code,
            "sample-too-small"
        );
        assert_eq!(
            least_squares_line(&[1.0, 1.0], &[2.0, 3.0])
                .unwrap_err()
                .info()
                .code,
            "degenerate-abscissa"
        );
        assert_eq!(
            least_squares_line(&[1.0, 2.0], &[2.0])
                .unwrap_err()
                .info()
                .code,
            "length-mismatch"
        );
    }
}
