//! Constants for traditional (elliptic-curve) signature schemes

pub mod gost3410;
