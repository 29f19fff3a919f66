//! Drives gostsig against individual known-answer cases

use gostsig_algorithms::ec::CurveParams;
use gostsig_algorithms::hash::{hash256, hash512};
use gostsig_sign::gost3410::{
    sign_digest, verify_digest, Gost3410PublicKey, Gost3410SecretKey, NonceSource, SignOptions,
};
use num_bigint::BigUint;

use super::error::{EngineError, Result};
use super::model::{TestCase, TestGroup};

/// Trait every back-end must implement
pub trait KatEngine {
    /// Execute one case; `Ok(())` means the operation succeeded and matched
    fn run(&self, group: &TestGroup, case: &TestCase) -> Result<()>;
}

/// Engine backed by the gostsig crates
pub struct GostEngine {
    curve: &'static CurveParams,
}

impl Default for GostEngine {
    fn default() -> Self {
        GostEngine {
            curve: CurveParams::tc26_test_512(),
        }
    }
}

/// Hands out the vector's `k` exactly once
struct KnownNonce(Option<BigUint>);

impl NonceSource for KnownNonce {
    fn next_nonce(&mut self, _order: &BigUint) -> gostsig_sign::Result<BigUint> {
        self.0
            .take()
            .ok_or_else(|| gostsig_sign::Error::Rng("known nonce already used".into()))
    }
}

fn scalar(case: &TestCase, name: &'static str) -> Result<BigUint> {
    Ok(BigUint::from_bytes_be(&case.bytes(name)?))
}

fn expect_eq(expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::Mismatch {
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        })
    }
}

fn expect_scalar(expected: BigUint, actual: &BigUint) -> Result<()> {
    expect_eq(&expected.to_bytes_be(), &actual.to_bytes_be())
}

impl GostEngine {
    fn public_key(&self, case: &TestCase) -> Result<Gost3410PublicKey> {
        Ok(Gost3410PublicKey::from_affine(
            scalar(case, "qx")?,
            scalar(case, "qy")?,
            self.curve,
        )?)
    }

    fn sig_gen(&self, case: &TestCase) -> Result<()> {
        let secret = Gost3410SecretKey::from_scalar(scalar(case, "d")?, self.curve)?;
        if secret.public_key()? != self.public_key(case)? {
            return Err(EngineError::Mismatch {
                expected: case.field("qx")?.to_string(),
                actual: "different public key".to_string(),
            });
        }

        let mut nonce = KnownNonce(Some(scalar(case, "k")?));
        let sig = sign_digest(&scalar(case, "e")?, &secret, &mut nonce, SignOptions::default())?;
        expect_scalar(scalar(case, "r")?, sig.r())?;
        expect_scalar(scalar(case, "s")?, sig.s())
    }

    fn sig_ver(&self, case: &TestCase) -> Result<()> {
        let public = self.public_key(case)?;
        let ok = verify_digest(
            &scalar(case, "e")?,
            &scalar(case, "r")?,
            &scalar(case, "s")?,
            &public,
        );
        if ok {
            Ok(())
        } else {
            Err(EngineError::Rejected)
        }
    }
}

impl KatEngine for GostEngine {
    fn run(&self, group: &TestGroup, case: &TestCase) -> Result<()> {
        match (group.algorithm.as_str(), group.test_type.as_str()) {
            ("Streebog-512", _) => expect_eq(&case.bytes("md")?, &hash512(&case.bytes("msg")?)),
            ("Streebog-256", _) => expect_eq(&case.bytes("md")?, &hash256(&case.bytes("msg")?)),
            ("GOST3410-2018", "sigGen") => self.sig_gen(case),
            ("GOST3410-2018", "sigVer") => self.sig_ver(case),
            (algorithm, test_type) => Err(EngineError::Unsupported {
                algorithm: algorithm.to_string(),
                test_type: test_type.to_string(),
            }),
        }
    }
}
