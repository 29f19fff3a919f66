//! Sources of per-signature nonces

use gostsig_params::traditional::gost3410::MAX_SAMPLING_ATTEMPTS;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Supplier of the per-signature secret `k`.
///
/// Implementations should return values in `[1, order - 1]`. The signing
/// loop discards anything outside that range and asks again, counting the
/// draw against its attempt budget.
pub trait NonceSource {
    /// Draw the next candidate nonce for a group of the given order
    fn next_nonce(&mut self, order: &BigUint) -> Result<BigUint>;
}

/// Nonces drawn uniformly from a cryptographically secure RNG
pub struct RandomNonces<'a, R: CryptoRng + RngCore> {
    rng: &'a mut R,
}

impl<'a, R: CryptoRng + RngCore> RandomNonces<'a, R> {
    /// Wrap a caller-owned RNG
    pub fn new(rng: &'a mut R) -> Self {
        RandomNonces { rng }
    }
}

impl<R: CryptoRng + RngCore> NonceSource for RandomNonces<'_, R> {
    fn next_nonce(&mut self, order: &BigUint) -> Result<BigUint> {
        random_scalar(self.rng, order)
    }
}

/// Uniform scalar in `[1, order - 1]` by rejection sampling.
///
/// Draws `⌈bits(order)/8⌉` bytes, clears the bits above the bit length of
/// `order` and accepts the candidate if it is in range. RNG failures and an
/// exhausted sampling budget are reported as [`Error::Rng`].
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, order: &BigUint) -> Result<BigUint> {
    let bits = order.bits();
    if bits < 2 {
        return Err(Error::InvalidParameter(
            "group order must be at least 2".into(),
        ));
    }
    let len = ((bits + 7) / 8) as usize;
    let mask = 0xffu8 >> (len as u64 * 8 - bits);

    let mut buf = Zeroizing::new(vec![0u8; len]);
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| Error::Rng(e.to_string()))?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(&buf);
        if !candidate.is_zero() && &candidate < order {
            return Ok(candidate);
        }
    }

    Err(Error::Rng(format!(
        "no scalar in [1, q-1] after {} draws",
        MAX_SAMPLING_ATTEMPTS
    )))
}
