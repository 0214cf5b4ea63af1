//! Domain parameter record for a short Weierstrass curve over a prime field

use subtle::ConstantTimeEq;

use crate::{FIELD_ELEMENT_SIZE, UNCOMPRESSED_POINT_SIZE};

/// Explicit domain parameters for a 256-bit curve y² = x³ + ax + b over F_p
///
/// All field elements are fixed-width big-endian byte arrays so the record
/// can be handed to an implementation byte-for-byte, without any named-curve
/// lookup on the receiving side. The generator is carried in uncompressed
/// form (`0x04 ‖ X ‖ Y`) and is assumed valid by construction; the harness
/// does not re-validate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameterSet {
    /// Prime field modulus p
    pub p: [u8; FIELD_ELEMENT_SIZE],
    /// Curve coefficient a
    pub a: [u8; FIELD_ELEMENT_SIZE],
    /// Curve coefficient b
    pub b: [u8; FIELD_ELEMENT_SIZE],
    /// Generator point G in uncompressed encoding
    pub g: [u8; UNCOMPRESSED_POINT_SIZE],
    /// Order n of the base point
    pub n: [u8; FIELD_ELEMENT_SIZE],
    /// Cofactor h
    pub h: u8,
}

impl DomainParameterSet {
    /// Width of one field element in bytes
    pub const fn field_width(&self) -> usize {
        FIELD_ELEMENT_SIZE
    }

    /// X coordinate of the generator
    pub fn generator_x(&self) -> &[u8] {
        &self.g[1..1 + FIELD_ELEMENT_SIZE]
    }

    /// Y coordinate of the generator
    pub fn generator_y(&self) -> &[u8] {
        &self.g[1 + FIELD_ELEMENT_SIZE..]
    }

    /// Constant-time comparison of two parameter sets
    ///
    /// Used by curve engines to check injected parameters against the curve
    /// they actually execute without leaking which field differed.
    pub fn ct_matches(&self, other: &DomainParameterSet) -> bool {
        (self.p.ct_eq(&other.p)
            & self.a.ct_eq(&other.a)
            & self.b.ct_eq(&other.b)
            & self.g[..].ct_eq(&other.g[..])
            & self.n.ct_eq(&other.n)
            & self.h.ct_eq(&other.h))
        .into()
    }
}
