#![allow(unused_imports)]
use algebra_core::{
    fields::{Field, Fp2Parameters, Fp4Parameters, PrimeField, SquareRootField},
    One, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::{
    mnt4_298::*,
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
fn test_fq2() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fq2::rand(&mut rng);
    let b = Fq2::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    frobenius_test::<Fq2, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq2>(76);
    assert_eq!(
        Fq2Parameters::mul_fp_by_nonresidue(&a.c0),
        a.c0 * &Fq2Parameters::NONRESIDUE
    );
}

#[test]
fn test_fq4() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fq4::rand(&mut rng);
    let b = Fq4::rand(&mut rng);
    field_test(a, b);
    frobenius_test::<Fq4, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq4>(152);
}
