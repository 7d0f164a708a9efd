//! Density histogram reduction for the sampling-distribution panels.

use pimc_core::{ErrorInfo, PimcError};
use serde::{Deserialize, Serialize};

use crate::normal::Normal;
use crate::summary::min_max;

/// Equal-width density histogram over the sample range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramData {
    /// Bin edges, `bins + 1` entries from the sample minimum to maximum.
    pub edges: Vec<f64>,
    /// Per-bin densities; integrating over the bins yields one.
    pub densities: Vec<f64>,
}

impl HistogramData {
    /// Width of one bin.
    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// Largest bin density, for scaling a plot axis.
    pub fn max_density(&self) -> f64 {
        self.densities
            .iter()
            .cloned()
            .fold(0.0_f64, |acc, val| acc.max(val))
    }
}

/// Bins the sample into `bins` equal-width density bins over its range.
pub fn histogram_density(values: &[f64], bins: usize) -> Result<HistogramData, PimcError> {
    if bins == 0 {
        return Err(PimcError::Stats(
            ErrorInfo::new("histogram-bins", "histogram needs at least one bin")
                .with_context("bins", "0"),
        ));
    }
    let (min, max) = min_max(values)?;
    let span = (max - min).max(1e-9);
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in values {
        let mut idx = ((value - min) / span * bins as f64).floor() as usize;
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    let norm = values.len() as f64 * width;
    let densities = counts.iter().map(|&c| c as f64 / norm).collect();
    let edges = (0..=bins).map(|i| min + i as f64 * width).collect();
    Ok(HistogramData { edges, densities })
}

/// Samples the normal density on an even grid, for overlaying on a histogram.
pub fn normal_overlay(dist: &Normal, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
    if points < 2 || !(hi > lo) {
        return Vec::new();
    }
    let step = (hi - lo) / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = lo + i as f64 * step;
            (x, dist.pdf(x))
        })
        .collect()
}
