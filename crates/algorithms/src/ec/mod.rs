//! Elliptic curve arithmetic over prime fields
//!
//! Curves are given by runtime [`CurveParams`]; arithmetic runs on
//! arbitrary-precision integers in Jacobian coordinates.
//!
//! Scalar multiplication is a plain left-to-right double-and-add and its
//! running time depends on the scalar.

pub mod curve;
pub mod field;
pub mod point;

pub use curve::CurveParams;
pub use point::{AffinePoint, JacobianPoint};

use num_bigint::BigUint;

/// Compute `k·base` with MSB-first double-and-add.
///
/// `k = 0` yields the identity.
pub fn scalar_mult(k: &BigUint, base: &AffinePoint, curve: &CurveParams) -> JacobianPoint {
    let mut acc = JacobianPoint::identity();
    for i in (0..k.bits()).rev() {
        acc = acc.double(curve);
        if k.bit(i) {
            acc = acc.mixed_add(base, curve);
        }
    }
    acc
}

/// Compute `k·G` for the base point of `curve`
pub fn scalar_mult_base_g(k: &BigUint, curve: &CurveParams) -> JacobianPoint {
    scalar_mult(k, curve.generator(), curve)
}
