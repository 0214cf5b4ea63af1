//! # ecprobe
//!
//! A differential test harness for elliptic-curve implementations. It
//! pairs a scriptable device-under-test with a reference signing provider
//! so that responses, signatures, and timings can be compared offline.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecprobe = "0.1"
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ecprobe-params`]: Curve domain parameters and the named-curve registry
//! - [`ecprobe-codec`]: DER signature codec and the device wire protocol
//! - [`ecprobe-device`]: Device-under-test session state machine
//! - [`ecprobe-harness`]: Reference provider and the timing run driver

pub use ecprobe_codec as codec;
pub use ecprobe_device as device;
pub use ecprobe_harness as harness;
pub use ecprobe_params as params;

/// Common imports for ecprobe users
pub mod prelude {
    // Wire protocol and signature codec
    pub use crate::codec::{Command, DerSignature, Response, Status};

    // Device session surface
    pub use crate::device::{
        CurveEngine, P256Engine, Session, SessionOptions, SessionState,
    };

    // Curve parameter lookup
    pub use crate::params::registry::load;
    pub use crate::params::{DomainParameterSet, SECP256R1};

    // Host-side timing harness
    pub use crate::harness::{run, Curve, HarnessConfig, HashAlg, ProviderKeyPair};
}
