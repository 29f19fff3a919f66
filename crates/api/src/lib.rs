//! Public API traits and types for the gostsig library
//!
//! This crate provides the public API surface shared by the gostsig crates:
//! the common error type and the signature scheme trait.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{signature::SignatureBytes, Signature};

// Re-export trait modules for direct access
pub use traits::signature;
