//! Digital Signature Schemes
//!
//! This crate implements the GOST R 34.10-2018 elliptic-curve signature
//! scheme with Streebog-512 as its domain hash.

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::gost3410;
pub use traditional::gost3410::Gost3410;
