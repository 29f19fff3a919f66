//! Error types for the signature crate

use thiserror::Error;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The random source failed or could not produce a usable value
    #[error("RNG error: {0}")]
    Rng(String),

    /// A computation left the valid domain (e.g. reached the point at infinity)
    #[error("Domain error in {context}: {details}")]
    Domain {
        context: &'static str,
        details: String,
    },

    /// Key material outside its valid range or not on the curve
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Malformed signature encoding
    #[error("Invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input of the wrong size
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

// Convert from algorithms::error::Error
impl From<gostsig_algorithms::error::Error> for Error {
    fn from(err: gostsig_algorithms::error::Error) -> Self {
        use gostsig_algorithms::error::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::Length {
                context,
                expected,
                actual,
            },
        }
    }
}

// Convert to api::Error
impl From<Error> for gostsig_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Rng(message) => gostsig_api::Error::RandomGenerationError {
                context: "sign",
                message,
            },
            // Key generation is the only place a domain error escapes
            Error::Domain { context, details } => gostsig_api::Error::InvalidKey {
                context,
                message: details,
            },
            Error::InvalidKey(message) => gostsig_api::Error::InvalidKey {
                context: "sign",
                message,
            },
            Error::InvalidSignatureEncoding(message) => gostsig_api::Error::InvalidSignature {
                context: "sign",
                message,
            },
            Error::InvalidParameter(message) => gostsig_api::Error::InvalidParameter {
                context: "sign",
                message,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => gostsig_api::Error::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}
