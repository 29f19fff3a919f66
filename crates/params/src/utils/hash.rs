//! Constants for hash functions

/// Output size of Streebog-256 in bytes
pub const STREEBOG256_OUTPUT_SIZE: usize = 32;

/// Output size of Streebog-512 in bytes
pub const STREEBOG512_OUTPUT_SIZE: usize = 64;

/// Internal block size of Streebog in bytes
pub const STREEBOG_BLOCK_SIZE: usize = 64;

/// Number of rounds of the Streebog block cipher E
pub const STREEBOG_ROUNDS: usize = 12;
