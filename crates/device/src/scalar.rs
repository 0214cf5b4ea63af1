//! Biased private-scalar construction
//!
//! Builds fixed-width big-endian scalars with exactly one set bit. These
//! sit far outside the distribution a correct key generator produces and
//! exist to probe how implementations handle boundary keys. No check
//! against the curve order is performed: for widths where `2^b` can reach
//! or exceed the order, that is precisely the case under test.

use ecprobe_params::SCALAR_SIZE;

/// Construct a `W`-byte big-endian scalar equal to `2^bit`
///
/// `bit` counts from the least-significant bit of the integer, so `bit = 0`
/// yields the value 1 and `bit = W*8 - 1` sets the top bit of the most
/// significant byte. The construction is purely arithmetic: the target byte
/// index is `W - ceil((bit+1)/8)` and the mask within it `1 << (bit % 8)`,
/// with no branching on the bit position.
///
/// Returns `None` when `bit` is outside `[0, W*8 - 1]`.
pub fn single_bit<const W: usize>(bit: usize) -> Option<[u8; W]> {
    if bit >= W * 8 {
        return None;
    }
    let mut out = [0u8; W];
    let bytes = (bit + 8) / 8;
    out[W - bytes] = 1 << (bit % 8);
    Some(out)
}

/// Construct a 256-bit scalar equal to `2^bit`
///
/// The width matches the device's 32-byte key slot, so every `u8` bit
/// position is valid and the construction cannot fail.
pub fn single_bit_scalar(bit: u8) -> [u8; SCALAR_SIZE] {
    let mut out = [0u8; SCALAR_SIZE];
    let bytes = (bit as usize + 8) / 8;
    out[SCALAR_SIZE - bytes] = 1 << (bit % 8);
    out
}
