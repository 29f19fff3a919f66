//! Affine and Jacobian point arithmetic
//!
//! A Jacobian point `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`.
//! All formulas are generic in the curve coefficient `a`; coordinates are
//! kept reduced modulo `p`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::curve::CurveParams;
use super::field::{add_mod, inv_mod, mul_mod, sq_mod, sub_mod};

/// A finite point in affine coordinates
///
/// The point at infinity has no affine form; APIs that may produce it
/// return `Option<AffinePoint>` or a [`JacobianPoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    /// Create a point from its coordinates without curve validation
    pub fn new(x: BigUint, y: BigUint) -> Self {
        AffinePoint { x, y }
    }

    /// x coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Whether this point satisfies the equation of `curve`
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        curve.contains(self)
    }

    /// The additive inverse (x, -y)
    pub fn negate(&self, curve: &CurveParams) -> AffinePoint {
        AffinePoint {
            x: self.x.clone(),
            y: sub_mod(&BigUint::zero(), &self.y, curve.p()),
        }
    }

    /// Lift to Jacobian coordinates as (x, y, 1)
    pub fn to_jacobian(&self) -> JacobianPoint {
        JacobianPoint {
            x: self.x.clone(),
            y: self.y.clone(),
            z: BigUint::one(),
            infinity: false,
        }
    }
}

/// A point in Jacobian coordinates, including the point at infinity
#[derive(Debug, Clone)]
pub struct JacobianPoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
    pub(crate) infinity: bool,
}

impl JacobianPoint {
    /// The point at infinity
    pub fn identity() -> Self {
        JacobianPoint {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
            infinity: true,
        }
    }

    /// Whether this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.infinity || self.z.is_zero()
    }

    /// Point doubling
    ///
    /// Returns the identity for the identity and for points of order two
    /// (Y ≡ 0).
    pub fn double(&self, curve: &CurveParams) -> Self {
        let p = curve.p();
        if self.is_identity() || (&self.y % p).is_zero() {
            return Self::identity();
        }

        let a = sq_mod(&self.x, p);
        let b = sq_mod(&self.y, p);
        let c = sq_mod(&b, p);

        // D = 2·((X + B)² − A − C)
        let t = sq_mod(&add_mod(&self.x, &b, p), p);
        let t = sub_mod(&sub_mod(&t, &a, p), &c, p);
        let d = add_mod(&t, &t, p);

        // E = 3·A + a·Z⁴
        let z2 = sq_mod(&self.z, p);
        let z4 = sq_mod(&z2, p);
        let three_a = add_mod(&add_mod(&a, &a, p), &a, p);
        let e = add_mod(&three_a, &mul_mod(curve.a(), &z4, p), p);

        let f = sq_mod(&e, p);

        // X₃ = F − 2·D
        let x3 = sub_mod(&f, &add_mod(&d, &d, p), p);

        // Y₃ = E·(D − X₃) − 8·C
        let eight_c = mul_mod(&BigUint::from(8u8), &c, p);
        let y3 = sub_mod(&mul_mod(&e, &sub_mod(&d, &x3, p), p), &eight_c, p);

        // Z₃ = 2·Y·Z
        let yz = mul_mod(&self.y, &self.z, p);
        let z3 = add_mod(&yz, &yz, p);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            infinity: false,
        }
    }

    /// Mixed addition of a Jacobian point and an affine point
    ///
    /// Dispatches to [`double`](Self::double) when both operands are the same
    /// point and returns the identity when they are inverses.
    pub fn mixed_add(&self, other: &AffinePoint, curve: &CurveParams) -> Self {
        if self.is_identity() {
            return other.to_jacobian();
        }
        let p = curve.p();

        // U₂ = x₂·Z₁², S₂ = y₂·Z₁³
        let z1z1 = sq_mod(&self.z, p);
        let u2 = mul_mod(other.x(), &z1z1, p);
        let s2 = mul_mod(other.y(), &mul_mod(&self.z, &z1z1, p), p);

        let h = sub_mod(&u2, &self.x, p);
        let r = sub_mod(&s2, &self.y, p);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(curve);
            }
            return Self::identity();
        }

        let hh = sq_mod(&h, p);
        let hhh = mul_mod(&h, &hh, p);
        let v = mul_mod(&self.x, &hh, p);

        // X₃ = R² − H³ − 2·X₁·H²
        let x3 = sub_mod(&sub_mod(&sq_mod(&r, p), &hhh, p), &add_mod(&v, &v, p), p);

        // Y₃ = R·(X₁·H² − X₃) − Y₁·H³
        let y3 = sub_mod(
            &mul_mod(&r, &sub_mod(&v, &x3, p), p),
            &mul_mod(&self.y, &hhh, p),
            p,
        );

        // Z₃ = H·Z₁
        let z3 = mul_mod(&h, &self.z, p);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            infinity: false,
        }
    }

    /// General addition of two Jacobian points
    pub fn add(&self, other: &JacobianPoint, curve: &CurveParams) -> Self {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }
        let p = curve.p();

        let z1z1 = sq_mod(&self.z, p);
        let z2z2 = sq_mod(&other.z, p);

        // U₁ = X₁·Z₂², U₂ = X₂·Z₁²
        let u1 = mul_mod(&self.x, &z2z2, p);
        let u2 = mul_mod(&other.x, &z1z1, p);

        // S₁ = Y₁·Z₂³, S₂ = Y₂·Z₁³
        let s1 = mul_mod(&self.y, &mul_mod(&other.z, &z2z2, p), p);
        let s2 = mul_mod(&other.y, &mul_mod(&self.z, &z1z1, p), p);

        let h = sub_mod(&u2, &u1, p);
        let r = sub_mod(&s2, &s1, p);

        if h.is_zero() {
            if r.is_zero() {
                return self.double(curve);
            }
            return Self::identity();
        }

        let hh = sq_mod(&h, p);
        let hhh = mul_mod(&h, &hh, p);
        let v = mul_mod(&u1, &hh, p);

        // X₃ = R² − H³ − 2·U₁·H²
        let x3 = sub_mod(&sub_mod(&sq_mod(&r, p), &hhh, p), &add_mod(&v, &v, p), p);

        // Y₃ = R·(U₁·H² − X₃) − S₁·H³
        let y3 = sub_mod(
            &mul_mod(&r, &sub_mod(&v, &x3, p), p),
            &mul_mod(&s1, &hhh, p),
            p,
        );

        // Z₃ = H·Z₁·Z₂
        let z3 = mul_mod(&mul_mod(&h, &self.z, p), &other.z, p);

        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
            infinity: false,
        }
    }

    /// Convert to affine coordinates (X/Z², Y/Z³)
    ///
    /// Returns `None` for the point at infinity, which has no affine form.
    pub fn to_affine(&self, curve: &CurveParams) -> Option<AffinePoint> {
        if self.is_identity() {
            return None;
        }
        let p = curve.p();
        let z_inv = inv_mod(&self.z, p)?;
        let z_inv2 = sq_mod(&z_inv, p);
        let z_inv3 = mul_mod(&z_inv2, &z_inv, p);

        Some(AffinePoint {
            x: mul_mod(&self.x, &z_inv2, p),
            y: mul_mod(&self.y, &z_inv3, p),
        })
    }
}

impl From<&AffinePoint> for JacobianPoint {
    fn from(point: &AffinePoint) -> Self {
        point.to_jacobian()
    }
}
