//! Device-under-test model for the ecprobe harness
//!
//! The device is a single mutable session slot behind a three-byte command
//! protocol: PREPARE injects explicit domain parameters and regenerates the
//! key material, SIGN and KEX operate on it. The session is strictly
//! synchronous and single-owner; a PREPARE destructively overwrites the
//! previous session, zeroing any transient secret first.
//!
//! Curve arithmetic is not implemented here. It enters through the
//! [`CurveEngine`] seam, with [`P256Engine`] delegating to the RustCrypto
//! `p256` backend. What this crate owns is the protocol: state ordering,
//! bit-precise biased scalar construction, and the exact response layout.

mod engine;
mod error;
mod handler;
pub mod scalar;
mod secret;
mod session;

pub use engine::{CurveEngine, P256Engine, RawSignature};
pub use error::{Error, Result};
pub use scalar::single_bit_scalar;
pub use secret::SecretSlot;
pub use session::{PrepareOutput, Session, SessionOptions, SessionState, MESSAGE_SIZE};
