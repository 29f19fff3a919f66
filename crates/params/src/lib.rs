//! Constant values for gostsig cryptographic operations
//!
//! This crate holds the fixed domain parameters and size constants used
//! across the gostsig workspace. It has no dependencies.

pub mod traditional;
pub mod utils;
