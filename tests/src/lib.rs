//! Shared fixtures for the dstu4145 integration tests
pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG so failures can be replayed
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Decode a hex vector, panicking on malformed fixtures
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad fixture {:?}: {}", s, e))
}
