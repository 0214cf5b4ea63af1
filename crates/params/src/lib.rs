//! Explicit elliptic-curve domain parameters for the ecprobe harness
//!
//! Implementations under test usually special-case their built-in named
//! curves. The harness deliberately avoids that fast path: every curve is
//! described by an explicit [`DomainParameterSet`] whose raw big-endian
//! byte fields are injected into the implementation, forcing it onto its
//! generic parameter-handling code. The [`registry`] maps curve
//! identifiers to validated parameter sets populated at compile time, so
//! no free-form descriptor strings are ever re-parsed at run time.

mod domain;
mod error;
pub mod registry;
mod secp256r1;

pub use domain::DomainParameterSet;
pub use error::{Error, Result};
pub use secp256r1::SECP256R1;

/// Size of a field element for a 256-bit curve in bytes
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a private scalar for a 256-bit curve in bytes
pub const SCALAR_SIZE: usize = 32;

/// Size of an uncompressed point encoding for a 256-bit curve in bytes
/// (prefix byte + X + Y)
pub const UNCOMPRESSED_POINT_SIZE: usize = 1 + 2 * FIELD_ELEMENT_SIZE;

/// SEC 1 prefix byte of an uncompressed point encoding
pub const UNCOMPRESSED_POINT_TAG: u8 = 0x04;

/// Size of a raw EC Diffie-Hellman shared secret for a 256-bit curve
pub const SHARED_SECRET_SIZE: usize = 32;
