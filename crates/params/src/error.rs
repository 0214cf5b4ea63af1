//! Error type for curve parameter lookup

/// Error raised by the curve registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested identifier is not present in the registry
    UnknownCurve {
        /// Identifier as supplied by the caller
        name: String,
    },
}

/// Result type for parameter operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownCurve { name } => {
                write!(f, "Unknown curve: {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}
