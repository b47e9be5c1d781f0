#![allow(unused_imports)]
use algebra_core::{
    curves::{models::SWModelParameters, AffineCurve, ProjectiveCurve},
    fields::{Field, PrimeField},
    CanonicalDeserialize, CanonicalSerialize, One, Zero,
};

use crate::{
    secp256k1::*,
    tests::{curves::*, msm::*},
};

#[test]
fn test_curve() {
    curve_tests::<G1Projective>();
    sw_identity_misuse_test::<G1Projective>();
}

#[test]
fn test_serialization() {
    curve_serialization_test::<G1Affine>();
    sw_flags_test::<G1Affine>();
}

#[test]
fn test_sw_models_agree() {
    sw_model_agreement_test::<Parameters>();
}

#[test]
fn test_g1_msm() {
    test_msm::<G1Affine>();
}

#[test]
fn test_generator() {
    let generator = G1Affine::prime_subgroup_generator();
    assert!(generator.is_on_curve());
    assert!(generator.is_in_correct_subgroup_assuming_on_curve());
    assert!(generator.mul(Fr::MODULUS).is_zero());
}

#[test]
fn test_generator_doubling() {
    let x = hex::decode("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5")
        .unwrap();
    let y = hex::decode("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a")
        .unwrap();
    let x = Fq::from_bytes_be(&x).unwrap();
    let y = Fq::from_bytes_be(&y).unwrap();
    let expected = G1Affine::new(x, y, false);

    let generator = G1Affine::prime_subgroup_generator();
    assert_eq!(generator.into_projective().double().into_affine(), expected);
    assert_eq!(generator.mul(Fr::from(2u64)).into_affine(), expected);
}

#[test]
fn test_generator_encoding() {
    let generator = G1Affine::prime_subgroup_generator();
    let bytes = generator.to_bytes().unwrap();
    assert_eq!(
        hex::encode(&bytes),
        "80\
         79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
    );
    assert_eq!(G1Affine::from_bytes(&bytes).unwrap(), generator);
}
