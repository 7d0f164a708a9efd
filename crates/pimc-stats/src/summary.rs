//! Summary moments over replicated estimates.

use pimc_core::{ErrorInfo, PimcError};

fn reject_invalid(values: &[f64], min_len: usize, what: &str) -> Result<(), PimcError> {
    if values.len() < min_len {
        return Err(PimcError::Stats(
            ErrorInfo::new("sample-too-small", format!("{what} needs more observations"))
                .with_context("len", values.len().to_string())
                .with_context("min_len", min_len.to_string()),
        ));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(PimcError::Stats(
            ErrorInfo::new("non-finite-sample", format!("{what} given a non-finite value"))
                .with_context("len", values.len().to_string()),
        ));
    }
    Ok(())
}

/// Arithmetic mean of the sample.
pub fn mean(values: &[f64]) -> Result<f64, PimcError> {
    reject_invalid(values, 1, "mean")?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with one delta degree of freedom.
pub fn sample_std(values: &[f64]) -> Result<f64, PimcError> {
    reject_invalid(values, 2, "sample_std")?;
    let center = values.iter().sum::<f64>() / values.len() as f64;
    let ss = values
        .iter()
        .map(|v| (v - center) * (v - center))
        .sum::<f64>();
    Ok((ss / (values.len() - 1) as f64).max(0.0).sqrt())
}

/// Smallest and largest observation in one pass.
pub fn min_max(values: &[f64]) -> Result<(f64, f64), PimcError> {
    reject_invalid(values, 1, "min_max")?;
    let min = values
        .iter()
        .cloned()
        .fold(f64::INFINITY, |acc, val| acc.min(val));
    let max = values
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, |acc, val| acc.max(val));
    Ok((min, max))
}
