//! Normal distribution N(mu, sigma^2): density, CDF, and quantile.

use std::f64::consts::{PI, SQRT_2};

use pimc_core::{ErrorInfo, PimcError};
use serde::{Deserialize, Serialize};
use special::Error as _;

/// Normal distribution parameterized by mean and standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// Creates a normal distribution, rejecting non-finite parameters and
    /// non-positive standard deviations.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, PimcError> {
        if !mu.is_finite() || !sigma.is_finite() || sigma <= 0.0 {
            return Err(PimcError::Stats(
                ErrorInfo::new("normal-params", "invalid normal distribution parameters")
                    .with_context("mu", mu.to_string())
                    .with_context("sigma", sigma.to_string()),
            ));
        }
        Ok(Self { mu, sigma })
    }

    /// Standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Mean of the distribution.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation of the distribution.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / (self.sigma * (2.0 * PI).sqrt())
    }

    /// Cumulative probability at `x`, via the error function.
    pub fn cdf(&self, x: f64) -> f64 {
        let errf = ((x - self.mu) / (self.sigma * SQRT_2)).error();
        0.5 * (1.0 + errf)
    }

    /// Quantile (inverse CDF) at probability `p`, rejecting p outside (0, 1).
    pub fn quantile(&self, p: f64) -> Result<f64, PimcError> {
        if !(p > 0.0 && p < 1.0) {
            return Err(PimcError::Stats(
                ErrorInfo::new("quantile-domain", "quantile probability outside (0, 1)")
                    .with_context("p", p.to_string()),
            ));
        }
        let x = (self.sigma * SQRT_2).mul_add(2.0_f64.mul_add(p, -1.0).inv_error(), self.mu);
        Ok(x)
    }
}
