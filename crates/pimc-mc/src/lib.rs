#![deny(missing_docs)]

//! Monte Carlo engine for the pi estimator: uniform point sampling against
//! the unit quarter-circle, the estimate itself, and the deterministic seed
//! streams the studies draw from.

/// Pi estimation from quarter-circle hit counts.
pub mod estimator;
/// Uniform point sampling and classification.
pub mod sampler;
/// Deterministic seed derivation for the study substreams.
pub mod streams;

pub use estimator::{estimate, run_experiment, ExperimentResult, SampleSet};
pub use sampler::sample_quarter_circle;
pub use streams::{basic_stream_seed, clt_replication_seed, sweep_stream_seed};
