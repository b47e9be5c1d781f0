#![allow(unused_imports)]
use algebra_core::{
    fields::{fp6_2over3::Fp6Parameters, Field, Fp3, Fp3Parameters, PrimeField, SquareRootField},
    AlgebraError, One, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::{
    mnt6_298::*,
    tests::fields::{
        field_serialization_test, field_test, frobenius_test, prime_field_encoding_test,
        primefield_test, sqrt_field_test,
    },
};

#[test]
fn test_fr() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fr::rand(&mut rng);
    let b = Fr::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fr>();
    prime_field_encoding_test::<Fr>();
    field_serialization_test::<Fr>(38);
}

#[test]
fn test_fq() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fq::rand(&mut rng);
    let b = Fq::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fq>();
    prime_field_encoding_test::<Fq>();
    field_serialization_test::<Fq>(38);
}

#[test]
fn test_fq3() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fq3::rand(&mut rng);
    let b = Fq3::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    frobenius_test::<Fq3, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq3>(114);

    // (c0, c1, c2) * X = (alpha * c2, c0, c1)
    let x = Fq3::new(Fq::zero(), Fq::one(), Fq::zero());
    assert_eq!(Fq6Parameters::mul_fp3_by_nonresidue(&a), a * &x);
}

#[test]
fn test_fq3_sqrt_of_squares() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..5 {
        let a = Fq3::rand(&mut rng);
        let square = a.square();
        let root = square.checked_sqrt().unwrap();
        assert_eq!(root.square(), square);
        assert!(root == a || root == -a);
    }
    assert!(matches!(
        Fq3::qnr_to_t().checked_sqrt(),
        Err(AlgebraError::NotQuadraticResidue)
    ));
}

#[test]
fn test_fq6() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fq6::rand(&mut rng);
    let b = Fq6::rand(&mut rng);
    field_test(a, b);
    frobenius_test::<Fq6, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq6>(228);
}
