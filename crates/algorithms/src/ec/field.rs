//! Prime-field arithmetic over arbitrary-precision integers
//!
//! Every operation takes the modulus explicitly and returns a value in
//! `[0, modulus)`. Inputs need not be reduced.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{validate, Result};

/// (a + b) mod m
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// (a - b) mod m, always non-negative
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

/// (a · b) mod m
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// a² mod m
#[inline]
pub fn sq_mod(a: &BigUint, m: &BigUint) -> BigUint {
    (a * a) % m
}

/// a⁻¹ mod m, or `None` when `a` shares a factor with `m` (including a ≡ 0)
pub fn inv_mod(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let a = a % m;
    if a.is_zero() {
        return None;
    }
    a.modinv(m)
}

/// Big-endian encoding left-padded with zeros to exactly `len` bytes
pub fn to_be_bytes_padded(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    let bytes = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };
    validate::max_length("big-endian integer", bytes.len(), len)?;

    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}
