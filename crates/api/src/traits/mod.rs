//! Trait definitions for the cryptographic schemes exposed by gostsig

pub mod signature;

pub use signature::Signature;
