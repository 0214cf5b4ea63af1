//! Error types for device session operations

/// Primary error type for device session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Protocol-ordering violation: operate before prepare, or key
    /// material not initialized
    NotReady {
        context: &'static str,
    },

    /// The injected domain parameters do not describe the curve this
    /// engine executes
    ParameterMismatch {
        context: &'static str,
    },

    /// Key pair generation or reconstruction failed
    KeyGeneration {
        context: &'static str,
    },

    /// The signing primitive failed
    Signing {
        context: &'static str,
    },

    /// The key-agreement primitive failed
    Agreement {
        context: &'static str,
    },
}

/// Result type for device session operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotReady { context } => {
                write!(f, "Session not ready: {}", context)
            }
            Self::ParameterMismatch { context } => {
                write!(f, "Domain parameter mismatch: {}", context)
            }
            Self::KeyGeneration { context } => {
                write!(f, "Key generation failed: {}", context)
            }
            Self::Signing { context } => {
                write!(f, "Signing failed: {}", context)
            }
            Self::Agreement { context } => {
                write!(f, "Key agreement failed: {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}
