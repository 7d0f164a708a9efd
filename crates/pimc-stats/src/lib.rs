//! Statistical routines for the pi Monte Carlo studies: summary moments,
//! the normal distribution, the Shapiro-Wilk normality test, and the data
//! reductions behind the histogram and Q-Q panels.

pub mod fit;
pub mod histogram;
pub mod normal;
pub mod qq;
pub mod shapiro;
pub mod summary;

pub use fit::{least_squares_line, log_log_slope, LineFit};
pub use histogram::{histogram_density, normal_overlay, HistogramData};
pub use normal::Normal;
pub use qq::{qq_normal, QqData};
pub use shapiro::{shapiro_wilk, ShapiroWilk};
pub use summary::{mean, min_max, sample_std};
