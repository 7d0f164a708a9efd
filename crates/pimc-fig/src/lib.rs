//! Deterministic SVG renderings of the study outputs: the log-log
//! convergence figure and the sampling-distribution panel grid.

pub mod figures;
pub mod svg;

pub use figures::{render_convergence_svg, render_distributions_svg};
