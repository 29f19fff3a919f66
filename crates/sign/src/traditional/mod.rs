//! Traditional (elliptic-curve) signature schemes

pub mod gost3410;
