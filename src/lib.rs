//! # gostsig
//!
//! GOST R 34.10-2018 elliptic-curve signatures with the Streebog hash.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gostsig = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms`: field arithmetic, point arithmetic and Streebog
//! - `sign`: the GOST R 34.10-2018 signature scheme
//! - `full` (default): everything above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gostsig-api`]: error type and the `Signature` trait
//! - [`gostsig-params`]: constant domain parameters
//! - [`gostsig-algorithms`]: field/point arithmetic and Streebog
//! - [`gostsig-sign`]: key management, signing and verification

// Core re-exports (always available)
pub use gostsig_api as api;
pub use gostsig_internal as internal;
pub use gostsig_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use gostsig_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use gostsig_sign as sign;

/// Common imports for gostsig users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, Signature};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::ec::{AffinePoint, CurveParams, JacobianPoint};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::hash::{hash256, hash512, HashFunction, Streebog256, Streebog512};

    #[cfg(feature = "sign")]
    pub use crate::sign::gost3410::{
        generate_keypair, sign, verify, verify_signature, Gost3410, Gost3410KeyPair,
        Gost3410PublicKey, Gost3410SecretKey, Gost3410Signature, NonceSource, RandomNonces,
        SignOptions,
    };

    pub use num_bigint::BigUint;
}
