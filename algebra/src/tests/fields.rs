#![allow(unused)]
use algebra_core::{
    fields::{Field, LegendreSymbol, PrimeField, SquareRootField},
    AlgebraError, BigInteger, CanonicalDeserialize, CanonicalDeserializeWithFlags,
    CanonicalSerialize, CanonicalSerializeWithFlags, PointFlags,
};
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

pub const ITERATIONS: u32 = 40;

fn random_negation_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let mut b = -a;
        b += &a;

        assert!(b.is_zero());
    }
}

fn random_addition_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a + &b) + &c; // (a + b) + c

        let t1 = (a + &c) + &b; // (a + c) + b

        let t2 = (b + &c) + &a; // (b + c) + a

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_subtraction_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);

        let t0 = a - &b; // (a - b)

        let mut t1 = b; // (b - a)
        t1 -= &a;

        let mut t2 = t0; // (a - b) + (b - a) = 0
        t2 += &t1;

        assert!(t2.is_zero());
    }
}

fn random_multiplication_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let mut t0 = a; // (a * b) * c
        t0 *= &b;
        t0 *= &c;

        let mut t1 = a; // (a * c) * b
        t1 *= &c;
        t1 *= &b;

        let mut t2 = b; // (b * c) * a
        t2 *= &c;
        t2 *= &a;

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_inversion_tests<F: Field, R: Rng>(rng: &mut R) {
    assert!(F::zero().inverse().is_none());
    assert!(matches!(
        F::zero().checked_inverse(),
        Err(AlgebraError::DivisionByZero)
    ));

    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let b = a.checked_inverse().unwrap(); // probablistically nonzero
        a *= &b;

        assert_eq!(a, F::one());
    }
}

fn random_doubling_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let mut b = a;
        a += &b;
        b.double_in_place();

        assert_eq!(a, b);
    }
}

fn random_squaring_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let mut b = a;
        a *= &b;
        b.square_in_place();

        assert_eq!(a, b);
    }
}

fn random_expansion_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        // Compare (a + b)(c + d) and (a*c + b*c + a*d + b*d)

        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);
        let d = F::rand(rng);

        let mut t0 = a;
        t0 += &b;
        let mut t1 = c;
        t1 += &d;
        t0 *= &t1;

        let mut t2 = a;
        t2 *= &c;
        let mut t3 = b;
        t3 *= &c;
        let mut t4 = a;
        t4 *= &d;
        let mut t5 = b;
        t5 *= &d;

        t2 += &t3;
        t2 += &t4;
        t2 += &t5;

        assert_eq!(t0, t2);
    }

    for _ in 0..ITERATIONS {
        // Compare (a + b)c and (a*c + b*c)

        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a + &b) * &c;
        let t2 = a * &c + &(b * &c);

        assert_eq!(t0, t2);
    }
}

fn random_pow_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let e: u64 = rng.gen::<u64>() >> 56;

        let mut naive = F::one();
        for _ in 0..e {
            naive *= &a;
        }
        assert_eq!(a.pow([e]), naive);
    }

    let a = F::rand(rng);
    assert_eq!(a.pow([0u64]), F::one());
    assert_eq!(F::zero().pow([1u64]), F::zero());
}

fn random_field_tests<F: Field>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    random_negation_tests::<F, _>(&mut rng);
    random_addition_tests::<F, _>(&mut rng);
    random_subtraction_tests::<F, _>(&mut rng);
    random_multiplication_tests::<F, _>(&mut rng);
    random_inversion_tests::<F, _>(&mut rng);
    random_doubling_tests::<F, _>(&mut rng);
    random_squaring_tests::<F, _>(&mut rng);
    random_expansion_tests::<F, _>(&mut rng);
    random_pow_tests::<F, _>(&mut rng);

    assert!(F::zero().is_zero());
    {
        let z = -F::zero();
        assert!(z.is_zero());
    }

    assert!(F::zero().inverse().is_none());

    // Multiplication by zero
    {
        let a = F::rand(&mut rng) * &F::zero();
        assert!(a.is_zero());
    }

    // Addition by zero
    {
        let mut a = F::rand(&mut rng);
        let copy = a;
        a += &F::zero();
        assert_eq!(a, copy);
    }

    // Division by zero is reported, never replaced by a default value.
    {
        let a = F::rand(&mut rng);
        assert!(matches!(
            a.checked_div(&F::zero()),
            Err(AlgebraError::DivisionByZero)
        ));
        let b = F::rand(&mut rng);
        assert_eq!(a.checked_div(&b).unwrap() * &b, a);
    }
}

fn random_sqrt_tests<F: SquareRootField>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let b = a.square();
        assert_eq!(b.legendre(), LegendreSymbol::QuadraticResidue);

        let b = b.sqrt().unwrap();
        assert!(a == b || a == -b);
        // The two roots of a^2 always decode to the same one.
        assert_eq!((-a).square().sqrt().unwrap(), b);
    }

    let mut c = F::one();
    for _ in 0..ITERATIONS {
        let mut b = c.square();
        assert_eq!(b.legendre(), LegendreSymbol::QuadraticResidue);

        b = b.sqrt().unwrap();

        if b != c {
            b = -b;
        }

        assert_eq!(b, c);

        c += &F::one();
    }

    assert_eq!(F::zero().sqrt(), Some(F::zero()));
    assert_eq!(F::zero().legendre(), LegendreSymbol::Zero);

    let mut found_non_residue = false;
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        if a.legendre().is_qnr() {
            found_non_residue = true;
            assert!(a.sqrt().is_none());
            assert!(matches!(
                a.checked_sqrt(),
                Err(AlgebraError::NotQuadraticResidue)
            ));
        }
    }
    assert!(found_non_residue);
}

pub fn field_test<F: Field>(a: F, b: F) {
    let zero = F::zero();
    assert_eq!(zero, zero);
    assert_eq!(zero.is_zero(), true);
    assert_eq!(zero.is_one(), false);

    let one = F::one();
    assert_eq!(one, one);
    assert_eq!(one.is_zero(), false);
    assert_eq!(one.is_one(), true);
    assert_eq!(zero + &one, one);

    let two = one + &one;
    assert_eq!(two, two);
    assert_ne!(zero, two);
    assert_ne!(one, two);

    // a == a
    assert_eq!(a, a);
    // a + 0 = a
    assert_eq!(a + &zero, a);
    // a - 0 = a
    assert_eq!(a - &zero, a);
    // a - a = 0
    assert_eq!(a - &a, zero);
    // 0 - a = -a
    assert_eq!(zero - &a, -a);
    // a.double() = a + a
    assert_eq!(a.double(), a + &a);
    // b.double() = b + b
    assert_eq!(b.double(), b + &b);
    // a + b = b + a
    assert_eq!(a + &b, b + &a);
    // a - b = -(b - a)
    assert_eq!(a - &b, -(b - &a));
    // (a + b) + a = a + (b + a)
    assert_eq!((a + &b) + &a, a + &(b + &a));
    // (a + b).double() = (a + b) + (b + a)
    assert_eq!((a + &b).double(), (a + &b) + &(b + &a));

    // a * 0 = 0
    assert_eq!(a * &zero, zero);
    // a * 1 = a
    assert_eq!(a * &one, a);
    // a * 2 = a.double()
    assert_eq!(a * &two, a.double());
    // a * a^-1 = 1
    assert_eq!(a * &a.inverse().unwrap(), one);
    // a * a = a^2
    assert_eq!(a * &a, a.square());
    // a * a * a = a^3
    assert_eq!(a * &(a * &a), a.pow([0x3, 0x0, 0x0, 0x0]));
    // a * b = b * a
    assert_eq!(a * &b, b * &a);
    // (a * b) * a = a * (b * a)
    assert_eq!((a * &b) * &a, a * &(b * &a));
    // (a + b)^2 = a^2 + 2ab + b^2
    assert_eq!(
        (a + &b).square(),
        a.square() + &((a * &b) + &(a * &b)) + &b.square()
    );
    // (a - b)^2 = (-(b - a))^2
    assert_eq!((a - &b).square(), (-(b - &a)).square());
    random_field_tests::<F>();
}

pub fn primefield_test<F: PrimeField>() {
    let one = F::one();
    assert_eq!(F::from_repr(one.into_repr()), Some(one));
    assert!(F::from_repr(F::MODULUS).is_none());

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        assert_eq!(F::from_repr(a.into_repr()), Some(a));
        assert_eq!(
            a.is_lexicographically_largest(),
            a.into_repr() > F::MODULUS_MINUS_ONE_DIV_TWO
        );
    }

    let n: u64 = rng.gen();
    assert_eq!(F::from(n).into_repr(), n.into());

    // The generator is a quadratic non-residue, so the 2-adic root of unity
    // has order exactly 2^s.
    assert!(F::multiplicative_generator().legendre().is_qnr());
    let root = F::two_adic_root_of_unity();
    let two_adicity = (F::MODULUS.as_ref()[0] - 1).trailing_zeros();
    let mut power = root;
    for _ in 0..two_adicity - 1 {
        power.square_in_place();
    }
    assert_eq!(power, -F::one());
    assert_eq!(power.square(), F::one());

    // -1 is the largest canonical integer.
    let mut modulus_minus_one = F::MODULUS;
    modulus_minus_one.sub_noborrow(&1u64.into());
    assert_eq!(F::from_repr(modulus_minus_one), Some(-F::one()));
}

pub fn sqrt_field_test<F: SquareRootField>(elem: F) {
    let square = elem.square();
    let sqrt = square.sqrt().unwrap();
    assert!(sqrt == elem || sqrt == -elem);
    assert_eq!(sqrt.square(), square);
    if let Some(sqrt) = elem.sqrt() {
        assert_eq!(sqrt.square(), elem);
    }
    random_sqrt_tests::<F>();
}

pub fn frobenius_test<F: Field, C: AsRef<[u64]>>(characteristic: C, maxpower: usize) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);

        let mut a_0 = a;
        a_0.frobenius_map(0);
        assert_eq!(a, a_0);

        let mut a_q = a.pow(&characteristic);
        for power in 1..maxpower {
            let mut a_qi = a;
            a_qi.frobenius_map(power);
            assert_eq!(a_qi, a_q);

            a_q = a_q.pow(&characteristic);
        }
    }
}

pub fn field_serialization_test<F: Field>(buf_size: usize) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        assert_eq!(a.serialized_size(), buf_size);
        {
            let serialized = a.to_bytes().unwrap();
            assert_eq!(serialized.len(), buf_size);
            let b = F::from_bytes(&serialized).unwrap();
            assert_eq!(a, b);
        }

        {
            let serialized = a.to_bytes_uncompressed().unwrap();
            assert_eq!(serialized.len(), a.uncompressed_size());
            let b = F::from_bytes_uncompressed(&serialized).unwrap();
            assert_eq!(a, b);
        }

        {
            let mut serialized = Vec::new();
            a.serialize_with_flags(&mut serialized, PointFlags::compressed(true))
                .unwrap();
            assert_eq!(serialized.len(), a.serialized_size_with_flags::<PointFlags>());
            let (b, flags) = F::deserialize_with_flags::<_, PointFlags>(&serialized[..]).unwrap();
            assert_eq!(flags, PointFlags::compressed(true));
            assert_eq!(a, b);
        }

        {
            let serialized = a.to_bytes().unwrap();
            assert!(matches!(
                F::from_bytes(&serialized[..buf_size - 1]),
                Err(AlgebraError::InvalidEncoding)
            ));

            let mut padded = serialized.clone();
            padded.push(0);
            assert!(matches!(
                F::from_bytes(&padded),
                Err(AlgebraError::InvalidEncoding)
            ));
        }

        {
            let mut serialized = vec![0u8; buf_size - 1];
            a.serialize(&mut &mut serialized[..]).unwrap_err();
        }
    }
}

pub fn prime_field_encoding_test<F: PrimeField>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let size = (F::MODULUS_BITS as usize + 7) / 8;
    assert_eq!(F::encoded_size(), size);

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let be = a.to_bytes_be();
        let le = a.to_bytes_le();
        assert_eq!(be.len(), size);
        assert_eq!(le.len(), size);
        assert_eq!(be.iter().rev().copied().collect::<Vec<_>>(), le);
        assert_eq!(F::from_bytes_be(&be).unwrap(), a);
        assert_eq!(F::from_bytes_le(&le).unwrap(), a);
        // The canonical serialization is the big-endian encoding.
        assert_eq!(a.to_bytes().unwrap(), be);
    }

    let one = F::one().to_bytes_be();
    assert_eq!(one[size - 1], 1);
    assert!(one[..size - 1].iter().all(|b| *b == 0));

    // Wrong lengths are rejected.
    assert!(matches!(
        F::from_bytes_be(&vec![0u8; size - 1]),
        Err(AlgebraError::InvalidEncoding)
    ));
    assert!(matches!(
        F::from_bytes_le(&vec![0u8; size + 1]),
        Err(AlgebraError::InvalidEncoding)
    ));

    // Values at or above the modulus are rejected.
    let modulus = F::MODULUS.to_bytes_be();
    let modulus = &modulus[modulus.len() - size..];
    assert!(matches!(
        F::from_bytes_be(modulus),
        Err(AlgebraError::InvalidEncoding)
    ));
    assert!(matches!(
        F::from_bytes(modulus),
        Err(AlgebraError::InvalidEncoding)
    ));
    assert!(matches!(
        F::from_bytes_be(&vec![0xffu8; size]),
        Err(AlgebraError::InvalidEncoding)
    ));
}
