#![allow(unused_imports)]
use algebra_core::{
    curves::models::TEModelParameters, fields::Field, AlgebraError, CanonicalDeserialize,
    CanonicalSerialize, One, PrimeField, Zero,
};

use crate::ed_on_bls12_381::*;
edwards_curve_tests!();

#[test]
fn test_identity_is_zero_one() {
    let zero = EdwardsAffine::zero();
    assert_eq!(zero.x, Fq::zero());
    assert_eq!(zero.y, Fq::one());
    assert!(zero.is_on_curve());

    let bytes = zero.to_bytes().unwrap();
    // Three flag bits over a 255-bit field spill into a 33rd byte.
    assert_eq!(bytes.len(), 33);
    assert_eq!(bytes[0], 0x80);
    assert!(bytes[1..].iter().all(|b| *b == 0));
}

#[test]
fn test_low_order_point_is_rejected() {
    // (0, -1) has order two.
    let p = EdwardsAffine::new(Fq::zero(), -Fq::one());
    assert!(p.is_on_curve());
    assert!(!p.is_in_correct_subgroup_assuming_on_curve());
    assert!(p.scale_by_cofactor().is_zero());

    let bytes = p.to_bytes().unwrap();
    assert!(matches!(
        EdwardsAffine::from_bytes(&bytes),
        Err(AlgebraError::PointNotInSubgroup)
    ));
    let bytes = p.to_bytes_uncompressed().unwrap();
    assert!(matches!(
        EdwardsAffine::from_bytes_uncompressed(&bytes),
        Err(AlgebraError::PointNotInSubgroup)
    ));
}

#[test]
fn test_generator_order() {
    let generator = EdwardsAffine::prime_subgroup_generator();
    assert!(!generator.is_zero());
    assert!(generator.mul(Fr::MODULUS).is_zero());

    let inv = generator.mul_by_cofactor_inv();
    assert_eq!(inv.mul_by_cofactor(), generator);
}

#[test]
fn test_coefficients() {
    assert_eq!(EdwardsParameters::COEFF_A, -Fq::one());
    let d = -(Fq::from(10240u64) * &Fq::from(10241u64).inverse().unwrap());
    assert_eq!(EdwardsParameters::COEFF_D, d);
}
