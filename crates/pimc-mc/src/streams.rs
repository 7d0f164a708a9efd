//! Deterministic seed streams for the three studies.
//!
//! Every random draw in a run descends from one master seed through SipHash
//! substreams, so each study (and each single replication inside the CLT
//! study) can be replayed in isolation without replaying what came before
//! it.

use pimc_core::derive_substream_seed;

const BASIC_STREAM: u64 = 1;
const SWEEP_STREAM: u64 = 2;
const CLT_STREAM: u64 = 3;

/// Seed for one entry of the basic estimation grid.
pub fn basic_stream_seed(master_seed: u64, index: usize) -> u64 {
    let stream = derive_substream_seed(master_seed, BASIC_STREAM);
    derive_substream_seed(stream, index as u64)
}

/// Seed for one entry of the convergence sweep.
pub fn sweep_stream_seed(master_seed: u64, index: usize) -> u64 {
    let stream = derive_substream_seed(master_seed, SWEEP_STREAM);
    derive_substream_seed(stream, index as u64)
}

/// Seed for one replication of the CLT study at one sample size.
pub fn clt_replication_seed(master_seed: u64, size_index: usize, replication: usize) -> u64 {
    let stream = derive_substream_seed(master_seed, CLT_STREAM);
    derive_substream_seed(stream, (size_index as u64) << 32 | replication as u64)
}
