//! GOST R 34.10-2018 digital signatures
//!
//! Signatures over a prime-order subgroup of a short Weierstrass curve,
//! with Streebog-512 (GOST R 34.11-2012) as the message digest. The shipped
//! parameter set is the 512-bit test curve of GOST R 34.10-2012,
//! Appendix A.2.
//!
//! Signing draws its nonces from an injected [`NonceSource`] and runs a
//! bounded retry loop; verification returns a plain `bool`, with
//! [`verify_with_report`] available for inspecting intermediate values.

mod keys;
mod nonce;

pub use keys::{Gost3410KeyPair, Gost3410PublicKey, Gost3410SecretKey, Gost3410Signature};
pub use nonce::{random_scalar, NonceSource, RandomNonces};

use gostsig_algorithms::ec::field::{add_mod, inv_mod, mul_mod, to_be_bytes_padded};
use gostsig_algorithms::ec::{scalar_mult, scalar_mult_base_g, CurveParams};
use gostsig_algorithms::hash::hash512;
use gostsig_api::{Error as ApiError, Result as ApiResult, ResultExt, Signature as SignatureTrait};
use gostsig_internal::constant_time::ct_eq;
use gostsig_params::traditional::gost3410::DEFAULT_MAX_SIGN_ATTEMPTS;
use gostsig_params::utils::hash::STREEBOG512_OUTPUT_SIZE;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};

/// GOST R 34.10-2018 over the 512-bit test curve
pub struct Gost3410;

/// Runtime knobs for signing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignOptions {
    /// Maximum number of nonces drawn before giving up
    pub max_attempts: u32,
}

impl Default for SignOptions {
    fn default() -> Self {
        SignOptions {
            max_attempts: DEFAULT_MAX_SIGN_ATTEMPTS,
        }
    }
}

/// Why a signature was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyFailure {
    /// r or s outside [1, q-1]
    OutOfRange,
    /// e has no inverse modulo q
    NotInvertible,
    /// z1·G + z2·Q is the point at infinity
    PointAtInfinity,
    /// x(C) mod q differs from r
    Mismatch,
}

/// Intermediate values of one verification, for diagnostics
#[derive(Debug, Clone)]
pub struct VerificationReport {
    /// Streebog-512 digest of the message, big-endian
    pub digest: [u8; STREEBOG512_OUTPUT_SIZE],
    /// e = H mod q, with 0 replaced by 1
    pub e: BigUint,
    /// v = e⁻¹ mod q
    pub v: Option<BigUint>,
    /// z1 = s·v mod q
    pub z1: Option<BigUint>,
    /// z2 = q − (r·v mod q)
    pub z2: Option<BigUint>,
    /// x(C) mod q, when C is finite
    pub r_computed: Option<BigUint>,
    /// `None` when the signature is valid
    pub failure: Option<VerifyFailure>,
}

impl VerificationReport {
    /// Whether the signature verified
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// Reduce a Streebog-512 digest to the scalar e.
///
/// e = H mod q, where H is the digest read as a big-endian integer. A zero
/// remainder is replaced by 1 so that e is always invertible.
pub fn digest_to_scalar(digest: &[u8], q: &BigUint) -> BigUint {
    reduce_scalar(&BigUint::from_bytes_be(digest), q)
}

fn reduce_scalar(e: &BigUint, q: &BigUint) -> BigUint {
    let e = e % q;
    if e.is_zero() {
        BigUint::one()
    } else {
        e
    }
}

/// Generate a key pair on `curve`
///
/// Algorithm:
/// 1. Draw d uniformly from [1, q-1]
/// 2. Compute Q = d·G and convert it to affine form
///
/// A failing RNG is reported as [`Error::Rng`]; a public point without an
/// affine form as [`Error::Domain`].
#[instrument(level = "debug", skip_all, fields(curve = curve.name()))]
pub fn generate_keypair<R: CryptoRng + RngCore>(
    curve: &'static CurveParams,
    rng: &mut R,
) -> Result<Gost3410KeyPair> {
    let d = random_scalar(rng, curve.q())?;
    let secret = Gost3410SecretKey::from_scalar(d, curve)?;
    let keypair = Gost3410KeyPair::from_secret(secret)?;
    debug!("generated key pair");
    Ok(keypair)
}

/// Sign `message` with nonces drawn from `rng` and default options
pub fn sign<R: CryptoRng + RngCore>(
    message: &[u8],
    secret_key: &Gost3410SecretKey,
    rng: &mut R,
) -> Result<Gost3410Signature> {
    sign_with(
        message,
        secret_key,
        &mut RandomNonces::new(rng),
        SignOptions::default(),
    )
}

/// Sign `message` with an explicit nonce source and options
#[instrument(
    level = "debug",
    skip_all,
    fields(curve = secret_key.curve().name(), message_len = message.len())
)]
pub fn sign_with<N: NonceSource>(
    message: &[u8],
    secret_key: &Gost3410SecretKey,
    nonces: &mut N,
    options: SignOptions,
) -> Result<Gost3410Signature> {
    let digest = hash512(message);
    let e = digest_to_scalar(&digest, secret_key.curve().q());
    sign_digest(&e, secret_key, nonces, options)
}

/// Sign a precomputed digest scalar `e`
///
/// Algorithm:
/// 1. Reduce e modulo q, replacing 0 by 1
/// 2. Draw k and compute C = k·G
/// 3. r = x(C) mod q; draw again if C is infinite or r = 0
/// 4. s = (r·d + k·e) mod q; draw again if s = 0
///
/// Every draw, including rejected out-of-range nonces, counts against
/// `options.max_attempts`. Running out is reported as [`Error::Rng`].
pub fn sign_digest<N: NonceSource>(
    e: &BigUint,
    secret_key: &Gost3410SecretKey,
    nonces: &mut N,
    options: SignOptions,
) -> Result<Gost3410Signature> {
    let curve = secret_key.curve();
    let q = curve.q();
    let d = secret_key.scalar();
    let e = reduce_scalar(e, q);

    for attempt in 1..=options.max_attempts {
        let k = nonces.next_nonce(q)?;
        if k.is_zero() || &k >= q {
            debug!(attempt, "nonce outside [1, q-1], drawing again");
            continue;
        }

        let c = match scalar_mult_base_g(&k, curve).to_affine(curve) {
            Some(c) => c,
            None => {
                debug!(attempt, "k·G is the point at infinity, drawing again");
                continue;
            }
        };

        let r = c.x() % q;
        if r.is_zero() {
            debug!(attempt, "r = 0, drawing again");
            continue;
        }

        let s = add_mod(&mul_mod(&r, d, q), &mul_mod(&k, &e, q), q);
        if s.is_zero() {
            debug!(attempt, "s = 0, drawing again");
            continue;
        }

        debug!(attempt, "signature produced");
        return Gost3410Signature::from_components(r, s);
    }

    Err(Error::Rng(format!(
        "no usable nonce after {} attempts",
        options.max_attempts
    )))
}

/// Verify `(r, s)` over `message`
///
/// Algorithm:
/// 1. Reject unless 1 ≤ r, s ≤ q-1
/// 2. e = Streebog-512(message) mod q, replacing 0 by 1
/// 3. v = e⁻¹ mod q
/// 4. z1 = s·v mod q, z2 = q − (r·v mod q)
/// 5. C = z1·G + z2·Q
/// 6. Accept iff C is finite and x(C) mod q = r
///
/// Every invalid input, including out-of-range components, yields `false`.
#[instrument(level = "debug", skip_all, fields(message_len = message.len()))]
pub fn verify(message: &[u8], r: &BigUint, s: &BigUint, public_key: &Gost3410PublicKey) -> bool {
    let e = digest_to_scalar(&hash512(message), public_key.curve().q());
    let outcome = evaluate(&e, r, s, public_key);
    trace!(failure = ?outcome.failure, "verification finished");
    outcome.failure.is_none()
}

/// Verify a [`Gost3410Signature`] over `message`
pub fn verify_signature(
    message: &[u8],
    signature: &Gost3410Signature,
    public_key: &Gost3410PublicKey,
) -> bool {
    verify(message, signature.r(), signature.s(), public_key)
}

/// Verify `(r, s)` against a precomputed digest scalar `e`
pub fn verify_digest(e: &BigUint, r: &BigUint, s: &BigUint, public_key: &Gost3410PublicKey) -> bool {
    let e = reduce_scalar(e, public_key.curve().q());
    evaluate(&e, r, s, public_key).failure.is_none()
}

/// Verify and return every intermediate value
#[instrument(level = "debug", skip_all, fields(message_len = message.len()))]
pub fn verify_with_report(
    message: &[u8],
    r: &BigUint,
    s: &BigUint,
    public_key: &Gost3410PublicKey,
) -> VerificationReport {
    let digest = hash512(message);
    let e = digest_to_scalar(&digest, public_key.curve().q());
    let outcome = evaluate(&e, r, s, public_key);
    trace!(failure = ?outcome.failure, "verification finished");

    VerificationReport {
        digest,
        e,
        v: outcome.v,
        z1: outcome.z1,
        z2: outcome.z2,
        r_computed: outcome.r_computed,
        failure: outcome.failure,
    }
}

#[derive(Default)]
struct Evaluation {
    v: Option<BigUint>,
    z1: Option<BigUint>,
    z2: Option<BigUint>,
    r_computed: Option<BigUint>,
    failure: Option<VerifyFailure>,
}

impl Evaluation {
    fn rejected(mut self, failure: VerifyFailure) -> Self {
        self.failure = Some(failure);
        self
    }
}

/// Verification steps 1 and 3–6 for an already reduced e
fn evaluate(e: &BigUint, r: &BigUint, s: &BigUint, public_key: &Gost3410PublicKey) -> Evaluation {
    let curve = public_key.curve();
    let q = curve.q();
    let mut outcome = Evaluation::default();

    let in_range = |x: &BigUint| !x.is_zero() && x < q;
    if !in_range(r) || !in_range(s) {
        return outcome.rejected(VerifyFailure::OutOfRange);
    }

    let v = match inv_mod(e, q) {
        Some(v) => v,
        None => return outcome.rejected(VerifyFailure::NotInvertible),
    };

    let z1 = mul_mod(s, &v, q);
    let z2 = q - mul_mod(r, &v, q);

    // C = z1·G + z2·Q
    let c = scalar_mult_base_g(&z1, curve).add(&scalar_mult(&z2, public_key.point(), curve), curve);
    outcome.v = Some(v);
    outcome.z1 = Some(z1);
    outcome.z2 = Some(z2);

    let c = match c.to_affine(curve) {
        Some(c) => c,
        None => return outcome.rejected(VerifyFailure::PointAtInfinity),
    };

    let r_computed = c.x() % q;
    let n = curve.field_bytes();
    let matches = match (to_be_bytes_padded(&r_computed, n), to_be_bytes_padded(r, n)) {
        (Ok(lhs), Ok(rhs)) => ct_eq(lhs, rhs),
        _ => false,
    };
    outcome.r_computed = Some(r_computed);
    if !matches {
        return outcome.rejected(VerifyFailure::Mismatch);
    }
    outcome
}

impl SignatureTrait for Gost3410 {
    type PublicKey = Gost3410PublicKey;
    type SecretKey = Gost3410SecretKey;
    type SignatureData = Gost3410Signature;
    type KeyPair = Gost3410KeyPair;

    fn name() -> &'static str {
        "GOST R 34.10-2018 (512-bit test curve)"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        generate_keypair(CurveParams::tc26_test_512(), rng).with_context("GOST3410 keypair")
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key().clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key().clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        sign(message, secret_key, rng).map_err(ApiError::from)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        if verify_signature(message, signature, public_key) {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "GOST3410 verify",
                message: "signature does not match message and key".into(),
            })
        }
    }
}
