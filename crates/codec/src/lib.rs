//! Byte-level codecs for the ecprobe harness
//!
//! Two independent layers live here:
//!
//! - [`der`]: exact round-trip between an `(r, s)` ECDSA signature pair and
//!   its `SEQUENCE { INTEGER r, INTEGER s }` DER encoding. A signature that
//!   fails to decode is itself a finding, so every malformation is reported
//!   rather than repaired.
//! - [`wire`]: the fixed-offset command/response framing used to drive the
//!   device under test. The codec knows byte layout only; command semantics
//!   live in the device crate.

pub mod der;
mod error;
pub mod wire;

pub use der::DerSignature;
pub use error::{Error, Result};
pub use wire::{Command, Response, Status};
