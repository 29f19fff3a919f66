//! Key and signature types for GOST R 34.10-2018

use core::fmt;

use gostsig_algorithms::ec::field::to_be_bytes_padded;
use gostsig_algorithms::ec::{scalar_mult_base_g, AffinePoint, CurveParams};
use gostsig_algorithms::error::validate;
use gostsig_api::signature::SignatureBytes;
use gostsig_params::traditional::gost3410::{GOST3410_512_SCALAR_SIZE, GOST3410_512_SIGNATURE_SIZE};
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// GOST R 34.10 secret key
///
/// Holds the scalar `d ∈ [1, q-1]` together with its fixed-width big-endian
/// encoding and the curve it belongs to.
#[derive(Clone)]
pub struct Gost3410SecretKey {
    d: BigUint,
    bytes: Vec<u8>,
    curve: &'static CurveParams,
}

impl Zeroize for Gost3410SecretKey {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        // BigUint has no Zeroize impl; clearing it releases the limbs unwiped
        self.d.set_zero();
    }
}

impl Drop for Gost3410SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Gost3410SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gost3410SecretKey")
            .field("curve", &self.curve.name())
            .finish_non_exhaustive()
    }
}

impl Gost3410SecretKey {
    /// Create a secret key from its scalar, which must lie in `[1, q-1]`
    pub fn from_scalar(d: BigUint, curve: &'static CurveParams) -> Result<Self> {
        if d.is_zero() || &d >= curve.q() {
            return Err(Error::InvalidKey(
                "secret scalar must lie in [1, q-1]".into(),
            ));
        }
        let bytes = to_be_bytes_padded(&d, curve.field_bytes())?;
        Ok(Gost3410SecretKey { d, bytes, curve })
    }

    /// Decode a big-endian scalar of exactly `curve.field_bytes()` bytes
    pub fn from_bytes(bytes: &[u8], curve: &'static CurveParams) -> Result<Self> {
        validate::length("secret key", bytes.len(), curve.field_bytes())?;
        Self::from_scalar(BigUint::from_bytes_be(bytes), curve)
    }

    /// Fixed-width big-endian encoding of `d`
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.clone())
    }

    /// Curve this key belongs to
    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    pub(crate) fn scalar(&self) -> &BigUint {
        &self.d
    }

    /// Derive the public key `Q = d·G`
    pub fn public_key(&self) -> Result<Gost3410PublicKey> {
        let point = scalar_mult_base_g(&self.d, self.curve)
            .to_affine(self.curve)
            .ok_or_else(|| Error::Domain {
                context: "public key derivation",
                details: "d·G is the point at infinity".into(),
            })?;
        Ok(Gost3410PublicKey {
            point,
            curve: self.curve,
        })
    }
}

/// GOST R 34.10 public key: the affine point `Q = d·G`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gost3410PublicKey {
    point: AffinePoint,
    curve: &'static CurveParams,
}

impl Gost3410PublicKey {
    /// Create a public key from affine coordinates, checking the point is on `curve`
    pub fn from_affine(x: BigUint, y: BigUint, curve: &'static CurveParams) -> Result<Self> {
        let point = AffinePoint::new(x, y);
        if !curve.contains(&point) {
            return Err(Error::InvalidKey("public point is not on the curve".into()));
        }
        Ok(Gost3410PublicKey { point, curve })
    }

    /// Decode `x || y`, each coordinate big-endian and `curve.field_bytes()` wide
    pub fn from_bytes(bytes: &[u8], curve: &'static CurveParams) -> Result<Self> {
        let n = curve.field_bytes();
        validate::length("public key", bytes.len(), 2 * n)?;
        let (x, y) = bytes.split_at(n);
        Self::from_affine(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y), curve)
    }

    /// Encode as `x || y`
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let n = self.curve.field_bytes();
        let mut out = to_be_bytes_padded(self.point.x(), n)?;
        out.extend(to_be_bytes_padded(self.point.y(), n)?);
        Ok(out)
    }

    /// The public point
    pub fn point(&self) -> &AffinePoint {
        &self.point
    }

    /// Curve this key belongs to
    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }
}

/// A secret key and its public key, generated together
#[derive(Clone, Debug)]
pub struct Gost3410KeyPair {
    secret: Gost3410SecretKey,
    public: Gost3410PublicKey,
}

impl Gost3410KeyPair {
    /// Bind a secret key to the public key it derives
    pub fn from_secret(secret: Gost3410SecretKey) -> Result<Self> {
        let public = secret.public_key()?;
        Ok(Gost3410KeyPair { secret, public })
    }

    /// The secret half
    pub fn secret_key(&self) -> &Gost3410SecretKey {
        &self.secret
    }

    /// The public half
    pub fn public_key(&self) -> &Gost3410PublicKey {
        &self.public
    }
}

/// Signature `(r, s)`
///
/// Both components are below 2⁵¹²; their range against a particular curve
/// order is checked by verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gost3410Signature {
    r: BigUint,
    s: BigUint,
}

impl Gost3410Signature {
    /// Build a signature from its components
    pub fn from_components(r: BigUint, s: BigUint) -> Result<Self> {
        let max_bits = 8 * GOST3410_512_SCALAR_SIZE as u64;
        if r.bits() > max_bits || s.bits() > max_bits {
            return Err(Error::InvalidSignatureEncoding(
                "signature component wider than 512 bits".into(),
            ));
        }
        Ok(Gost3410Signature { r, s })
    }

    /// r = x(k·G) mod q
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// s = (r·d + k·e) mod q
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

fn write_component(out: &mut [u8], value: &BigUint) {
    if value.is_zero() {
        return;
    }
    let bytes = value.to_bytes_be();
    let start = out.len() - bytes.len();
    out[start..].copy_from_slice(&bytes);
}

impl SignatureBytes for Gost3410Signature {
    /// Decode `r || s`, each component 64 bytes big-endian
    fn from_bytes(bytes: &[u8]) -> gostsig_api::Result<Self> {
        if bytes.len() != GOST3410_512_SIGNATURE_SIZE {
            return Err(gostsig_api::Error::InvalidLength {
                context: "GOST3410 signature",
                expected: GOST3410_512_SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let (r, s) = bytes.split_at(GOST3410_512_SCALAR_SIZE);
        Ok(Gost3410Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        })
    }

    /// Encode as `r || s`, each component 64 bytes big-endian
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![0u8; GOST3410_512_SIGNATURE_SIZE];
        let (r, s) = out.split_at_mut(GOST3410_512_SCALAR_SIZE);
        write_component(r, &self.r);
        write_component(s, &self.s);
        out
    }
}
