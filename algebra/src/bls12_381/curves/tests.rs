#![allow(unused_imports)]
use algebra_core::{
    curves::models::SWModelParameters,
    fields::{Field, SquareRootField},
    AlgebraError, CanonicalDeserialize, CanonicalSerialize, One, ProjectiveCurve, Zero,
};
use core::ops::{AddAssign, MulAssign};

use crate::bls12_381::*;
std_curve_tests!(Bls12_381, Fq12);

#[test]
fn test_g1_generator_raw() {
    let mut x = Fq::zero();
    let mut i = 0;
    loop {
        // y^2 = x^3 + b
        let mut rhs = x;
        rhs.square_in_place();
        rhs.mul_assign(&x);
        rhs.add_assign(&g1::Parameters::COEFF_B);

        if let Some(y) = rhs.sqrt() {
            let p = G1Affine::new(x, if y < -y { y } else { -y }, false);
            assert!(p.is_on_curve());
            assert!(!p.is_in_correct_subgroup_assuming_on_curve());

            // Points outside the prime order subgroup never decode.
            let bytes = p.to_bytes().unwrap();
            assert!(matches!(
                G1Affine::from_bytes(&bytes),
                Err(AlgebraError::PointNotInSubgroup)
            ));
            let bytes = p.to_bytes_uncompressed().unwrap();
            assert!(matches!(
                G1Affine::from_bytes_uncompressed(&bytes),
                Err(AlgebraError::PointNotInSubgroup)
            ));

            let g1 = p.scale_by_cofactor();
            if !g1.is_zero() {
                assert_eq!(i, 4);
                let g1 = g1.into_affine();

                assert!(g1.is_in_correct_subgroup_assuming_on_curve());

                assert_eq!(g1, G1Affine::prime_subgroup_generator());
                break;
            }
        }

        i += 1;
        x.add_assign(&Fq::one());
    }
}

#[test]
fn test_g2_generator_satisfies_curve_equation() {
    let generator = G2Affine::prime_subgroup_generator();
    let rhs = generator.x.square() * &generator.x + &g2::Parameters::COEFF_B;
    assert_eq!(generator.y.square(), rhs);
    assert!(generator.is_on_curve());
}

#[test]
fn test_pairing_of_generators() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    assert_ne!(Bls12_381::pairing(g1, g2).unwrap(), Fq12::one());
    assert_eq!(
        Bls12_381::pairing(G1Affine::zero(), g2).unwrap(),
        Fq12::one()
    );
}

#[test]
fn test_g1_generator_encoding() {
    let generator = G1Affine::prime_subgroup_generator();

    let compressed = generator.to_bytes().unwrap();
    assert_eq!(
        hex::encode(&compressed),
        "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac58\
         6c55e83ff97a1aeffb3af00adb22c6bb"
    );

    let uncompressed = generator.to_bytes_uncompressed().unwrap();
    assert_eq!(
        hex::encode(&uncompressed),
        "17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac58\
         6c55e83ff97a1aeffb3af00adb22c6bb08b3f481e3aaa0f1a09e30ed741d8ae4\
         fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1"
    );

    assert_eq!(G1Affine::from_bytes(&compressed).unwrap(), generator);
    assert_eq!(
        G1Affine::from_bytes_uncompressed(&uncompressed).unwrap(),
        generator
    );
}

#[test]
fn test_encoded_sizes() {
    assert_eq!(G1Affine::zero().serialized_size(), 48);
    assert_eq!(G1Affine::zero().uncompressed_size(), 96);
    assert_eq!(G2Affine::zero().serialized_size(), 96);
    assert_eq!(G2Affine::zero().uncompressed_size(), 192);
}

#[test]
fn test_prepared_line_count() {
    use algebra_core::{curves::bls12::Bls12Parameters, fields::BitIteratorBE};

    let bits: Vec<bool> = BitIteratorBE::without_leading_zeros(Parameters::X)
        .skip(1)
        .collect();
    let additions = bits.iter().filter(|b| **b).count();
    let prepared = <Bls12_381 as PairingEngine>::G2Prepared::from(G2Affine::prime_subgroup_generator());
    assert_eq!(prepared.ell_coeffs.len(), bits.len() + additions);
}
