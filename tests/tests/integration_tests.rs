//! Cross-crate checks of the building blocks

use gostsig_algorithms::ec::field::{add_mod, inv_mod, mul_mod, sub_mod, to_be_bytes_padded};
use gostsig_algorithms::ec::{scalar_mult, scalar_mult_base_g, AffinePoint, CurveParams, JacobianPoint};
use gostsig_algorithms::hash::{HashFunction, Streebog256, Streebog512};
use gostsig_internal::constant_time::ct_eq;
use gostsig_params::traditional::gost3410::{GOST3410_512_SIGNATURE_SIZE, TC26_TEST_512};
use gostsig_params::utils::hash::{STREEBOG256_OUTPUT_SIZE, STREEBOG512_OUTPUT_SIZE};
use num_bigint::BigUint;
use num_traits::{One, Zero};

#[test]
fn test_constant_time_compare() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 4];
    let c = [1u8, 2, 3, 5];

    assert!(ct_eq(a, b));
    assert!(!ct_eq(a, c));
    assert!(!ct_eq(&a[..], &a[..3]));
}

#[test]
fn test_field_helpers() {
    let p = BigUint::from(97u32);
    let a = BigUint::from(90u32);
    let b = BigUint::from(10u32);

    assert_eq!(add_mod(&a, &b, &p), BigUint::from(3u32));
    assert_eq!(sub_mod(&b, &a, &p), BigUint::from(17u32));
    assert_eq!(mul_mod(&a, &b, &p), BigUint::from(27u32));

    let inv = inv_mod(&b, &p).unwrap();
    assert_eq!(mul_mod(&inv, &b, &p), BigUint::one());
    assert!(inv_mod(&BigUint::zero(), &p).is_none());

    assert_eq!(to_be_bytes_padded(&b, 4).unwrap(), vec![0, 0, 0, 10]);
    assert!(to_be_bytes_padded(&BigUint::from(0x1_0000u32), 2).is_err());
}

#[test]
fn test_curve_from_parameter_bytes() {
    let curve = CurveParams::from_bytes(&TC26_TEST_512).unwrap();
    let shared = CurveParams::tc26_test_512();
    assert_eq!(curve.p(), shared.p());
    assert_eq!(curve.q(), shared.q());
    assert_eq!(curve.generator(), shared.generator());
    assert_eq!(curve.field_bytes() * 2, GOST3410_512_SIGNATURE_SIZE);
    assert!(curve.contains(curve.generator()));
}

#[test]
fn test_group_law_on_gost_curve() {
    let curve = CurveParams::tc26_test_512();
    let g = curve.generator();
    let a = BigUint::from(0xdead_beefu32);
    let b = BigUint::from(0x1234_5678u32);

    let lhs = scalar_mult(&a, g, curve).add(&scalar_mult_base_g(&b, curve), curve);
    let rhs = scalar_mult_base_g(&(&a + &b), curve);
    assert_eq!(lhs.to_affine(curve), rhs.to_affine(curve));

    let p: AffinePoint = rhs.to_affine(curve).unwrap();
    assert!(curve.contains(&p));
    let sum = JacobianPoint::from(&p).mixed_add(&p.negate(curve), curve);
    assert!(sum.is_identity());
    assert!(scalar_mult_base_g(curve.q(), curve).is_identity());
}

#[test]
fn test_streebog_through_trait() {
    let mut h512 = Streebog512::new();
    h512.update(b"hello ").update(b"world");
    assert_eq!(h512.finalize(), Streebog512::digest(b"hello world"));

    let out = Streebog256::digest(b"hello world");
    assert_eq!(out.len(), STREEBOG256_OUTPUT_SIZE);
    assert_eq!(Streebog512::output_size(), STREEBOG512_OUTPUT_SIZE);
    assert_ne!(&Streebog512::digest(b"hello world")[..32], &out[..]);
}

#[test]
fn test_error_conversion_into_api() {
    let err: gostsig_api::Error = gostsig_sign::Error::Rng("exhausted".into()).into();
    assert!(matches!(err, gostsig_api::Error::RandomGenerationError { .. }));

    let err: gostsig_api::Error =
        gostsig_algorithms::Error::param("curve.p", "modulus must be odd").into();
    assert!(matches!(err, gostsig_api::Error::InvalidParameter { .. }));
}
