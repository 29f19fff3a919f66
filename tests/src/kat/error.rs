//! Structured error types for the KAT engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("vector file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("crypto operation failed: {0}")]
    Crypto(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unsupported test group: {algorithm} / {test_type}")]
    Unsupported { algorithm: String, test_type: String },

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("signature rejected")]
    Rejected,

    #[error("{failed} of {total} cases failed")]
    Failures { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<gostsig_api::Error> for EngineError {
    fn from(e: gostsig_api::Error) -> Self {
        EngineError::Crypto(e.to_string())
    }
}

impl From<gostsig_sign::Error> for EngineError {
    fn from(e: gostsig_sign::Error) -> Self {
        EngineError::Crypto(e.to_string())
    }
}
