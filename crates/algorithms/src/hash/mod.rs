//! Hash function implementations
//!
//! This module contains the Streebog family (GOST R 34.11-2012) used as the
//! domain hash of GOST R 34.10 signatures.

pub mod streebog;

// Re-exports
pub use streebog::{hash256, hash512, Streebog256, Streebog512};

/// Trait for cryptographic hash functions
pub trait HashFunction {
    /// Digest type returned by [`finalize`](Self::finalize)
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Finalizes the hash computation and returns the digest.
    ///
    /// The instance is reset and can be reused.
    fn finalize(&mut self) -> Self::Output;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str;
}
