#![allow(unused_imports)]
use algebra_core::{
    fields::{fp6_3over2::Fp6Parameters, Field, Fp2Parameters, PrimeField, SquareRootField},
    AlgebraError, CanonicalSerialize, One, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use crate::{
    bls12_381::{Fq, Fq12, Fq2, Fq2Parameters, Fq6, Fq6Parameters, Fr},
    tests::fields::{
        field_serialization_test, field_test, frobenius_test, prime_field_encoding_test,
        primefield_test, sqrt_field_test,
    },
};

pub(crate) const ITERATIONS: usize = 5;

#[test]
fn test_fr() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        field_test(a, b);
        sqrt_field_test(b);
    }
    primefield_test::<Fr>();
    prime_field_encoding_test::<Fr>();
    assert_eq!(Fr::encoded_size(), 32);
    field_serialization_test::<Fr>(32);
}

#[test]
fn test_fq() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a = Fq::rand(&mut rng);
        let b = Fq::rand(&mut rng);
        field_test(a, b);
        sqrt_field_test(a);
    }
    primefield_test::<Fq>();
    prime_field_encoding_test::<Fq>();
    assert_eq!(Fq::encoded_size(), 48);
    field_serialization_test::<Fq>(48);
}

#[test]
fn test_fq2() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a = Fq2::rand(&mut rng);
        let b = Fq2::rand(&mut rng);
        field_test(a, b);
        sqrt_field_test(a);
    }
    frobenius_test::<Fq2, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq2>(96);
}

#[test]
fn test_fq6() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let g = Fq6::rand(&mut rng);
        let h = Fq6::rand(&mut rng);
        field_test(g, h);
    }
    frobenius_test::<Fq6, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq6>(288);
}

#[test]
fn test_fq12() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let g = Fq12::rand(&mut rng);
        let h = Fq12::rand(&mut rng);
        field_test(g, h);
    }
    frobenius_test::<Fq12, _>(Fq::MODULUS, 13);
    field_serialization_test::<Fq12>(576);
}

#[test]
fn test_nonresidue_shortcuts() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a = Fq::rand(&mut rng);
        assert_eq!(
            Fq2Parameters::mul_fp_by_nonresidue(&a),
            a * &Fq2Parameters::NONRESIDUE
        );

        let b = Fq2::rand(&mut rng);
        assert_eq!(
            Fq6Parameters::mul_fp2_by_nonresidue(&b),
            b * &Fq6Parameters::NONRESIDUE
        );
    }
}

#[test]
fn test_fq_sqrt_is_canonical() {
    let four = Fq::from(4u64);
    assert_eq!(four.sqrt(), Some(Fq::from(2u64)));
    assert_eq!(four.checked_sqrt().unwrap(), Fq::from(2u64));
    assert!(!Fq::from(2u64).is_lexicographically_largest());
    assert!((-Fq::from(2u64)).is_lexicographically_largest());

    // q = 3 mod 4, so -1 has no square root.
    assert!(matches!(
        (-Fq::one()).checked_sqrt(),
        Err(AlgebraError::NotQuadraticResidue)
    ));
    assert_eq!(Fq::zero().sqrt(), Some(Fq::zero()));
}

#[test]
fn test_inverse_of_zero() {
    assert!(matches!(
        Fq::zero().checked_inverse(),
        Err(AlgebraError::DivisionByZero)
    ));
    assert!(matches!(
        Fq12::zero().checked_inverse(),
        Err(AlgebraError::DivisionByZero)
    ));
    assert!(matches!(
        Fr::one().checked_div(&Fr::zero()),
        Err(AlgebraError::DivisionByZero)
    ));
}

#[test]
fn test_fq2_writes_c1_first() {
    let a = Fq2::new(Fq::one(), Fq::zero());
    let mut bytes = vec![];
    a.serialize(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 96);
    assert!(bytes[..95].iter().all(|b| *b == 0));
    assert_eq!(bytes[95], 1);

    let b = Fq2::new(Fq::zero(), Fq::one());
    let mut bytes = vec![];
    b.serialize(&mut bytes).unwrap();
    assert_eq!(bytes[47], 1);
    assert!(bytes[48..].iter().all(|b| *b == 0));
}

#[test]
fn test_fq_byte_orders() {
    let a = Fq::from(0x0102u64);
    let be = a.to_bytes_be();
    let le = a.to_bytes_le();
    assert_eq!(be.len(), 48);
    assert_eq!(&be[46..], &[1, 2]);
    assert_eq!(&le[..2], &[2, 1]);
    assert_eq!(Fq::from_bytes_be(&be).unwrap(), a);
    assert_eq!(Fq::from_bytes_le(&le).unwrap(), a);

    assert!(matches!(
        Fq::from_bytes_be(&be[1..]),
        Err(AlgebraError::InvalidEncoding)
    ));
    assert!(matches!(
        Fq::from_bytes_be(&[0xff; 48]),
        Err(AlgebraError::InvalidEncoding)
    ));
}
