//! Error type for harness runs

use thiserror::Error as ThisError;

/// Errors terminating a harness run
///
/// All of these are fatal for the run producing them: the harness exists
/// to detect anomalies, so nothing is retried or masked.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The curve identifier is absent from the provider catalog;
    /// no cryptographic operation was attempted
    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    /// The hash identifier is not supported by the provider
    #[error("Unknown hash algorithm: {0}")]
    UnknownHash(String),

    /// A provider signature failed to decode; this is the finding itself
    #[error("signature decode failed: {0}")]
    Codec(#[from] ecprobe_codec::Error),

    /// The provider's signing primitive failed
    #[error("provider signing failed: {0}")]
    Signing(#[from] p256::ecdsa::Error),

    /// Writing a record failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for harness runs
pub type Result<T> = std::result::Result<T, Error>;
