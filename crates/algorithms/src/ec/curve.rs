//! Short Weierstrass curve domain parameters

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

use gostsig_params::traditional::gost3410::{GostCurveParams, TC26_TEST_512};

use super::field::{add_mod, mul_mod, sq_mod};
use super::point::AffinePoint;
use crate::error::{validate, Result};

/// Immutable domain parameters `{p, a, b, q, G}` of a curve
/// `y² = x³ + a·x + b` over GF(p) whose base point `G` has prime order `q`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    q: BigUint,
    g: AffinePoint,
    field_bytes: usize,
}

static TC26_TEST_512_CURVE: Lazy<CurveParams> =
    Lazy::new(|| CurveParams::from_bytes_unchecked(&TC26_TEST_512));

impl CurveParams {
    /// Build and validate a parameter set.
    ///
    /// Checks that `p` is odd and larger than 3, that `a`, `b` and the base
    /// point coordinates are reduced, that the curve is non-singular, that
    /// `G` lies on it and that `q` is at least 2. Primality of `p` and `q`
    /// is not checked.
    pub fn new(
        name: &'static str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        q: BigUint,
        gx: BigUint,
        gy: BigUint,
    ) -> Result<Self> {
        validate::parameter(
            p > BigUint::from(3u8) && p.bit(0),
            "curve.p",
            "field modulus must be an odd integer greater than 3",
        )?;
        validate::parameter(a < p, "curve.a", "coefficient must be reduced modulo p")?;
        validate::parameter(b < p, "curve.b", "coefficient must be reduced modulo p")?;
        validate::parameter(q > BigUint::one(), "curve.q", "group order must be at least 2")?;

        // 4a³ + 27b² ≠ 0 (mod p)
        let four_a3 = mul_mod(&BigUint::from(4u8), &mul_mod(&a, &sq_mod(&a, &p), &p), &p);
        let twenty_seven_b2 = mul_mod(&BigUint::from(27u8), &sq_mod(&b, &p), &p);
        validate::parameter(
            !add_mod(&four_a3, &twenty_seven_b2, &p).is_zero(),
            "curve",
            "curve is singular",
        )?;

        let field_bytes = ((p.bits() + 7) / 8) as usize;
        let curve = CurveParams {
            name,
            p,
            a,
            b,
            q,
            g: AffinePoint::new(gx, gy),
            field_bytes,
        };
        validate::parameter(
            curve.contains(&curve.g),
            "curve.g",
            "base point is not on the curve",
        )?;
        Ok(curve)
    }

    /// Build and validate a parameter set stored as big-endian byte arrays
    pub fn from_bytes<const N: usize>(params: &GostCurveParams<N>) -> Result<Self> {
        let curve = Self::new(
            params.name,
            BigUint::from_bytes_be(&params.p),
            BigUint::from_bytes_be(&params.a),
            BigUint::from_bytes_be(&params.b),
            BigUint::from_bytes_be(&params.q),
            BigUint::from_bytes_be(&params.g_x),
            BigUint::from_bytes_be(&params.g_y),
        )?;
        Ok(CurveParams {
            field_bytes: N,
            ..curve
        })
    }

    fn from_bytes_unchecked<const N: usize>(params: &GostCurveParams<N>) -> Self {
        CurveParams {
            name: params.name,
            p: BigUint::from_bytes_be(&params.p),
            a: BigUint::from_bytes_be(&params.a),
            b: BigUint::from_bytes_be(&params.b),
            q: BigUint::from_bytes_be(&params.q),
            g: AffinePoint::new(
                BigUint::from_bytes_be(&params.g_x),
                BigUint::from_bytes_be(&params.g_y),
            ),
            field_bytes: N,
        }
    }

    /// The 512-bit test curve of GOST R 34.10-2012 (Appendix A.2).
    ///
    /// Built once on first use and shared for the life of the process.
    pub fn tc26_test_512() -> &'static CurveParams {
        &TC26_TEST_512_CURVE
    }

    /// Name of the parameter set
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient a
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime order q of the base point
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Base point G
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// Width in bytes of a field element or scalar encoding
    pub fn field_bytes(&self) -> usize {
        self.field_bytes
    }

    /// Whether `point` is a reduced affine solution of the curve equation
    pub fn contains(&self, point: &AffinePoint) -> bool {
        let p = &self.p;
        if point.x() >= p || point.y() >= p {
            return false;
        }
        let lhs = sq_mod(point.y(), p);
        let x2 = sq_mod(point.x(), p);
        let x3 = mul_mod(&x2, point.x(), p);
        let ax = mul_mod(&self.a, point.x(), p);
        let rhs = add_mod(&add_mod(&x3, &ax, p), &self.b, p);
        lhs == rhs
    }
}
