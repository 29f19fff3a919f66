//! Arithmetic and hashing primitives for GOST R 34.10-2018 signatures
//!
//! This crate provides:
//!
//! - prime-field arithmetic over arbitrary-precision integers ([`ec::field`])
//! - curve domain parameters and Jacobian point arithmetic ([`ec`])
//! - the Streebog hash function, 256- and 512-bit variants ([`hash`])
//!
//! None of the arithmetic here is constant time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "hash")]
pub use hash::{HashFunction, Streebog256, Streebog512};

// Elliptic curve arithmetic
#[cfg(feature = "ec")]
pub mod ec;
#[cfg(feature = "ec")]
pub use ec::{AffinePoint, CurveParams, JacobianPoint};
