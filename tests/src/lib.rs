//! Shared helpers for the ecprobe integration suites

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic RNG for reproducible integration runs
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Left-pad a minimal big-endian magnitude to a P-256 field element
pub fn p256_field_bytes(magnitude: &[u8]) -> p256::FieldBytes {
    assert!(magnitude.len() <= 32, "magnitude wider than the field");
    let mut out = p256::FieldBytes::default();
    out[32 - magnitude.len()..].copy_from_slice(magnitude);
    out
}
