use mpt_core::derive_substream_seed;

/// Derives the deterministic seed for the Møller sweep substream.
pub fn moller_stream_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, 0)
}

/// Derives the deterministic seed for the Mott background substream.
///
/// Keeping the background on its own substream means changing the particle
/// count of the sweep never shifts the Mott draws.
pub fn mott_stream_seed(master_seed: u64) -> u64 {
    derive_substream_seed(master_seed, 1)
}
