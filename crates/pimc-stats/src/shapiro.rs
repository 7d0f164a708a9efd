//! Shapiro-Wilk test for departure from normality.
//!
//! Port of Applied Statistics algorithm AS R94 (Royston, P. (1995), "Remark
//! AS R94: A Remark on Algorithm AS 181: The W-test for Normality", Applied
//! Statistics 44(4)), the same routine SciPy exposes as
//! `scipy.stats.shapiro`. Valid for 3 to 5000 observations.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use pimc_core::{ErrorInfo, PimcError};
use serde::{Deserialize, Serialize};

use crate::normal::Normal;

/// Outcome of a Shapiro-Wilk test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapiroWilk {
    /// W statistic in (0, 1]; values near one look normal.
    pub statistic: f64,
    /// Probability of a W at least this extreme under normality.
    pub p_value: f64,
}

// Polynomial coefficients from AS R94, lowest order first.
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.544, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -2.0322e-3];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 3.8915e-3];
const C6: [f64; 3] = [-0.4803, -0.082676, 3.0302e-3];
const GAMMA: [f64; 2] = [-2.273, 0.459];

fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Runs the W-test on the sample, returning the statistic and its p-value.
///
/// The sample does not need to be sorted. Samples outside the 3..=5000
/// range supported by the approximation, samples containing non-finite
/// values, and zero-range samples are rejected as [`PimcError::Stats`].
pub fn shapiro_wilk(sample: &[f64]) -> Result<ShapiroWilk, PimcError> {
    let n = sample.len();
    if !(3..=5000).contains(&n) {
        return Err(PimcError::Stats(
            ErrorInfo::new(
                "shapiro-sample-size",
                "Shapiro-Wilk supports 3 to 5000 observations",
            )
            .with_context("n", n.to_string()),
        ));
    }
    if sample.iter().any(|v| !v.is_finite()) {
        return Err(PimcError::Stats(
            ErrorInfo::new("non-finite-sample", "Shapiro-Wilk given a non-finite value")
                .with_context("n", n.to_string()),
        ));
    }

    let mut x = sample.to_vec();
    x.sort_unstable_by(f64::total_cmp);
    if x[n - 1] - x[0] <= 0.0 {
        return Err(PimcError::Stats(
            ErrorInfo::new("zero-range", "all observations are equal")
                .with_context("n", n.to_string())
                .with_context("value", x[0].to_string()),
        ));
    }

    let nf = n as f64;
    let std_normal = Normal::standard();

    // Expected normal order statistics via Blom scores.
    let mut m = vec![0.0_f64; n];
    for (i, slot) in m.iter_mut().enumerate() {
        let p = (i as f64 + 1.0 - 0.375) / (nf + 0.25);
        *slot = std_normal.quantile(p)?;
    }
    let summ2: f64 = m.iter().map(|v| v * v).sum();

    // Test coefficients: polynomial-corrected tail weights, rescaled Blom
    // scores in the interior, antisymmetric by construction.
    let mut coef = vec![0.0_f64; n];
    if n == 3 {
        coef[0] = -FRAC_1_SQRT_2;
        coef[2] = FRAC_1_SQRT_2;
    } else {
        let rsn = 1.0 / nf.sqrt();
        let a_n = m[n - 1] / summ2.sqrt() + poly(&C1, rsn);
        let (interior, fac) = if n > 5 {
            let a_n1 = m[n - 2] / summ2.sqrt() + poly(&C2, rsn);
            let fac = ((summ2 - 2.0 * m[n - 1] * m[n - 1] - 2.0 * m[n - 2] * m[n - 2])
                / (1.0 - 2.0 * a_n * a_n - 2.0 * a_n1 * a_n1))
                .sqrt();
            coef[n - 2] = a_n1;
            coef[1] = -a_n1;
            (2, fac)
        } else {
            let fac = ((summ2 - 2.0 * m[n - 1] * m[n - 1]) / (1.0 - 2.0 * a_n * a_n)).sqrt();
            (1, fac)
        };
        coef[n - 1] = a_n;
        coef[0] = -a_n;
        for i in interior..(n - interior) {
            coef[i] = m[i] / fac;
        }
    }

    // W is the squared correlation between the ordered sample and the
    // coefficients.
    let coef_mean = coef.iter().sum::<f64>() / nf;
    let x_mean = x.iter().sum::<f64>() / nf;
    let mut ssa = 0.0;
    let mut ssx = 0.0;
    let mut sax = 0.0;
    for (c, v) in coef.iter().zip(x.iter()) {
        let dc = c - coef_mean;
        let dv = v - x_mean;
        ssa += dc * dc;
        ssx += dv * dv;
        sax += dc * dv;
    }
    let w = ((sax * sax) / (ssa * ssx)).min(1.0);

    let p_value = if n == 3 {
        // Exact distribution for three observations.
        let stqr = 0.75_f64.sqrt().asin();
        ((6.0 / PI) * (w.sqrt().asin() - stqr)).clamp(0.0, 1.0)
    } else if w >= 1.0 {
        1.0
    } else if n <= 11 {
        let gamma = poly(&GAMMA, nf);
        let arg = gamma - (1.0 - w).ln();
        if arg <= 0.0 {
            // Beyond the fitted range of the small-sample map; W this low is
            // an unambiguous rejection.
            0.0
        } else {
            let y = -arg.ln();
            let mu = poly(&C3, nf);
            let sigma = poly(&C4, nf).exp();
            1.0 - std_normal.cdf((y - mu) / sigma)
        }
    } else {
        let ln_n = nf.ln();
        let y = (1.0 - w).ln();
        let mu = poly(&C5, ln_n);
        let sigma = poly(&C6, ln_n).exp();
        1.0 - std_normal.cdf((y - mu) / sigma)
    };

    Ok(ShapiroWilk {
        statistic: w,
        p_value,
    })
}
