#![allow(unused_imports)]
use algebra_core::{
    fields::{Field, PrimeField, SquareRootField},
    One, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::{
    ed_on_bls12_381::{Fq, Fr},
    tests::fields::{
        field_serialization_test, field_test, prime_field_encoding_test, primefield_test,
        sqrt_field_test,
    },
};

#[test]
fn test_fr() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..5 {
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        field_test(a, b);
        sqrt_field_test(a);
    }
    primefield_test::<Fr>();
    prime_field_encoding_test::<Fr>();
    field_serialization_test::<Fr>(32);
}

#[test]
fn test_fq() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = Fq::rand(&mut rng);
    let b = Fq::rand(&mut rng);
    field_test(a, b);
    sqrt_field_test(a);
    primefield_test::<Fq>();
    field_serialization_test::<Fq>(32);
}
