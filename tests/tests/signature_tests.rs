//! Integration tests for GOST R 34.10-2018 signatures

use gostsig::prelude::*;
use gostsig::sign::gost3410::{sign_with, verify_with_report, VerifyFailure};
use gostsig_api::signature::SignatureBytes;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_gost3410_signature() {
    let mut rng = OsRng;

    // Generate keypair
    let keypair = Gost3410::keypair(&mut rng).unwrap();
    let public_key = Gost3410::public_key(&keypair);
    let secret_key = Gost3410::secret_key(&keypair);

    // Message to sign
    let message = b"Test message for GOST R 34.10-2018 signature";

    // Sign the message
    let signature = Gost3410::sign(message, &secret_key, &mut rng).unwrap();

    // Verify the signature
    let result = Gost3410::verify(message, &signature, &public_key);
    assert!(result.is_ok());

    // Try with a modified message
    let modified_message = b"Modified message that should not verify";
    let result = Gost3410::verify(modified_message, &signature, &public_key);
    assert!(matches!(result, Err(Error::InvalidSignature { .. })));
}

#[test]
fn test_signatures_are_randomized() {
    let mut rng = OsRng;
    let keypair = generate_keypair(CurveParams::tc26_test_512(), &mut rng).unwrap();

    let sig1 = sign(b"same message", keypair.secret_key(), &mut rng).unwrap();
    let sig2 = sign(b"same message", keypair.secret_key(), &mut rng).unwrap();
    assert_ne!(sig1, sig2);
    assert!(verify_signature(b"same message", &sig1, keypair.public_key()));
    assert!(verify_signature(b"same message", &sig2, keypair.public_key()));
}

#[test]
fn test_serialized_keys_and_signature() {
    let curve = CurveParams::tc26_test_512();
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let keypair = generate_keypair(curve, &mut rng).unwrap();
    let signature = sign(b"wire format", keypair.secret_key(), &mut rng).unwrap();

    let pk_bytes = keypair.public_key().to_bytes().unwrap();
    let sk_bytes = keypair.secret_key().to_bytes();
    let sig_bytes = signature.to_bytes();
    assert_eq!(pk_bytes.len(), 128);
    assert_eq!(sk_bytes.len(), 64);
    assert_eq!(sig_bytes.len(), 128);

    let pk = Gost3410PublicKey::from_bytes(&pk_bytes, curve).unwrap();
    let sk = Gost3410SecretKey::from_bytes(&sk_bytes, curve).unwrap();
    let sig = Gost3410Signature::from_bytes(&sig_bytes).unwrap();

    assert!(verify_signature(b"wire format", &sig, &pk));
    assert_eq!(sk.public_key().unwrap(), pk);

    let mut corrupted = sig_bytes.clone();
    corrupted[127] ^= 0x80;
    let bad = Gost3410Signature::from_bytes(&corrupted).unwrap();
    assert!(!verify_signature(b"wire format", &bad, &pk));
}

#[test]
fn test_many_messages() {
    let curve = CurveParams::tc26_test_512();
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let keypair = generate_keypair(curve, &mut rng).unwrap();

    for len in [0usize, 1, 63, 64, 65, 127, 128, 200] {
        let message: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let signature = sign(&message, keypair.secret_key(), &mut rng).unwrap();
        assert!(verify(&message, signature.r(), signature.s(), keypair.public_key()), "len {}", len);
    }
}

#[test]
fn test_custom_options_and_nonce_source() {
    let curve = CurveParams::tc26_test_512();
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let keypair = generate_keypair(curve, &mut rng).unwrap();

    let mut nonces = RandomNonces::new(&mut rng);
    let options = SignOptions { max_attempts: 4 };
    let signature = sign_with(b"options", keypair.secret_key(), &mut nonces, options).unwrap();
    assert!(verify_signature(b"options", &signature, keypair.public_key()));
}

#[test]
fn test_report_on_valid_and_invalid() {
    let curve = CurveParams::tc26_test_512();
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let keypair = generate_keypair(curve, &mut rng).unwrap();
    let signature = sign(b"report", keypair.secret_key(), &mut rng).unwrap();

    let report = verify_with_report(b"report", signature.r(), signature.s(), keypair.public_key());
    assert!(report.is_valid());
    assert_eq!(report.r_computed.as_ref(), Some(signature.r()));

    let other = generate_keypair(curve, &mut rng).unwrap();
    let report = verify_with_report(b"report", signature.r(), signature.s(), other.public_key());
    assert_eq!(report.failure, Some(VerifyFailure::Mismatch));
    assert_ne!(report.r_computed.as_ref(), Some(signature.r()));
}
