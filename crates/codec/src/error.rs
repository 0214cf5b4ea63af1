//! Error types for the codec layer

/// Primary error type for codec operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The DER signature structure is corrupt
    MalformedSignature {
        /// Which structural check failed
        context: &'static str,
    },

    /// A command or response frame is shorter than its fixed layout
    TruncatedFrame {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The response status word is not one of the recognized codes
    UnknownStatus {
        /// Raw status word as received
        word: u16,
    },
}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedSignature { context } => {
                write!(f, "Malformed signature: {}", context)
            }
            Self::TruncatedFrame {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: truncated frame (need at least {} bytes, got {})",
                    context, expected, actual
                )
            }
            Self::UnknownStatus { word } => {
                write!(f, "Unknown status word: {:#06x}", word)
            }
        }
    }
}

impl std::error::Error for Error {}
