#![deny(missing_docs)]
#![doc = "Error and determinism primitives shared by the pi Monte Carlo crates."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, PimcError};
pub use rng::{derive_substream_seed, RngHandle};
