//! Host-side reference harness
//!
//! Drives a native reference provider through the same logical protocol as
//! the device under test: pick a curve from the provider's catalog,
//! generate one key pair and one fixed message, then sign the message a
//! fixed number of times, timing each signing call in isolation. Every
//! signature is decomposed through the project's own DER codec, so a
//! malformed provider signature surfaces as a finding instead of being
//! repaired by a lenient parser.
//!
//! Records go to any [`std::io::Write`]; the timing loop is strictly
//! sequential because the per-operation timing signal is the entire point.

mod error;
pub mod provider;
mod runner;

pub use error::{Error, Result};
pub use provider::{Curve, HashAlg, ProviderKeyPair};
pub use runner::{run, HarnessConfig};
