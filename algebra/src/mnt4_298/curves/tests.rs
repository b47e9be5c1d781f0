#![allow(unused_imports)]
use algebra_core::{fields::Field, AlgebraError, One, PrimeField, ProjectiveCurve, Zero};

use crate::mnt4_298::*;
std_curve_tests!(MNT4_298, Fq4);

#[test]
fn test_prepared_identity() {
    let prepared = G2Prepared::from(G2Affine::zero());
    let p = G1Prepared::from(G1Affine::prime_subgroup_generator());
    assert_eq!(MNT4_298::miller_loop(&[(p, prepared)]), Fq4::one());
}

#[test]
#[cfg(feature = "mnt6_298")]
fn test_cycle_with_mnt6() {
    assert_eq!(Fr::MODULUS, crate::mnt6_298::Fq::MODULUS);
    assert_eq!(Fq::MODULUS, crate::mnt6_298::Fr::MODULUS);
}

#[test]
fn test_invalid_g2_is_rejected() {
    let g1 = G1Affine::prime_subgroup_generator();
    let g2 = G2Affine::prime_subgroup_generator();
    let off_curve = G2Affine::new(g2.x, Fq2::zero(), false);

    assert!(matches!(
        MNT4_298::pairing(g1, off_curve),
        Err(AlgebraError::PointNotOnCurve)
    ));
    // y = 0 leaves the tangent at the first doubling undefined.
    assert!(matches!(
        G2Prepared::try_from_affine(off_curve),
        Err(AlgebraError::PointNotInSubgroup)
    ));
}

#[test]
fn test_g2_outside_subgroup_is_rejected() {
    let g1 = G1Affine::prime_subgroup_generator();
    let mut x = 1u64;
    let point = loop {
        if let Some(p) = G2Affine::get_point_from_x(Fq2::new(Fq::from(x), Fq::zero()), false) {
            if !p.is_in_correct_subgroup_assuming_on_curve() {
                break p;
            }
        }
        x += 1;
    };

    assert!(point.is_on_curve());
    assert!(matches!(
        MNT4_298::pairing(g1, point),
        Err(AlgebraError::PointNotInSubgroup)
    ));
    assert!(G2Prepared::try_from_affine(point.mul_by_cofactor()).is_ok());
}

#[test]
fn test_try_from_affine_matches_from() {
    let g2 = G2Affine::prime_subgroup_generator();
    assert_eq!(G2Prepared::try_from_affine(g2).unwrap(), G2Prepared::from(g2));
    assert!(G2Prepared::try_from_affine(G2Affine::zero()).unwrap().is_zero());
}

#[test]
fn test_wnaf_is_naf_of_ate_loop_count() {
    use algebra_core::{
        biginteger::arithmetic::find_wnaf, curves::models::mnt4::MNT4Parameters,
    };

    let mut naf = find_wnaf(Parameters::ATE_LOOP_COUNT, 2);
    // the leading 1 is the starting point of the Miller loop
    assert_eq!(naf.pop(), Some(1));
    let table: Vec<i64> = Parameters::WNAF.iter().map(|&d| i64::from(d)).collect();
    assert_eq!(naf, table);
}
