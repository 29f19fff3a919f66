//! Constants shared by primitive implementations

pub mod hash;
