#![allow(unused_imports)]
use algebra_core::{
    curves::models::SWModelParameters, fields::Field, prepare_g1, prepare_g2, CanonicalSerialize,
    One, ProjectiveCurve, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::bn254::*;
std_curve_tests!(Bn254, Fq12);

#[test]
fn test_g1_generator_is_one_two() {
    let generator = G1Affine::prime_subgroup_generator();
    assert_eq!(generator.x, Fq::one());
    assert_eq!(generator.y, Fq::from(2u64));

    // Three flag bits do not fit above a 254-bit modulus, so x takes 33
    // bytes and y takes 32.
    let bytes = generator.to_bytes_uncompressed().unwrap();
    assert_eq!(bytes.len(), 65);
    assert_eq!(bytes[32], 1);
    assert_eq!(bytes[64], 2);
    assert_eq!(
        bytes.iter().filter(|b| **b != 0).count(),
        2,
        "unexpected bytes in {:?}",
        bytes
    );
}

#[test]
fn test_g2_cofactor_clearing() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..5 {
        let p = G2Projective::rand(&mut rng).into_affine();
        assert!(p.is_on_curve());
        assert!(p.is_in_correct_subgroup_assuming_on_curve());
    }
}

#[test]
fn test_pairing_of_generators() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    let gt = Bn254::pairing(g1, g2).unwrap();
    assert_ne!(gt, Fq12::one());
    assert_eq!(Bn254::pairing(G1Affine::zero(), g2).unwrap(), Fq12::one());

    // e(g1, -g2) e(g1, g2) = 1
    let product = Bn254::product_of_pairings(&[(g1.into(), g2.into()), (g1.into(), (-g2).into())])
        .unwrap();
    assert_eq!(product, Fq12::one());
}

#[test]
fn test_prepared_line_count() {
    use algebra_core::curves::bn::BnParameters;

    let naf = Parameters::SIX_U_PLUS_2_NAF;
    let additions = naf[..naf.len() - 1].iter().filter(|d| **d != 0).count();
    let prepared = <Bn254 as PairingEngine>::G2Prepared::from(G2Affine::prime_subgroup_generator());
    assert_eq!(prepared.ell_coeffs.len(), naf.len() - 1 + additions + 2);

    let identity = <Bn254 as PairingEngine>::G2Prepared::from(G2Affine::zero());
    assert!(identity.is_zero());
    assert!(identity.ell_coeffs.is_empty());
}

#[test]
fn test_miller_loop_respects_negation() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let p = G1Projective::rand(&mut rng).into_affine();
    let q = G2Projective::rand(&mut rng).into_affine();

    let pairs = [
        (prepare_g1::<Bn254>(p), prepare_g2::<Bn254>(q)),
        (prepare_g1::<Bn254>(-p), prepare_g2::<Bn254>(q)),
    ];
    let raw = Bn254::miller_loop(&pairs);
    assert_eq!(Bn254::final_exponentiation(&raw).unwrap(), Fq12::one());
}
