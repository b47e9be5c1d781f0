#![allow(unused)]
use algebra_core::{
    curves::{
        models::{short_weierstrass_jacobian, short_weierstrass_projective, SWModelParameters},
        AffineCurve, ProjectiveCurve, WnafContext,
    },
    AlgebraError, CanonicalDeserialize, CanonicalSerialize, Field, One, PrimeField,
    UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use std::ops::{AddAssign, MulAssign, Neg, SubAssign};

pub const ITERATIONS: usize = 10;

fn random_addition_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = G::rand(&mut rng);
        let b = G::rand(&mut rng);
        let c = G::rand(&mut rng);
        let a_affine = a.into_affine();
        let b_affine = b.into_affine();
        let c_affine = c.into_affine();

        // a + a should equal the doubling
        {
            let mut aplusa = a;
            aplusa.add_assign(&a);

            let mut aplusamixed = a;
            aplusamixed.add_assign_mixed(&a.into_affine());

            let mut adouble = a;
            adouble.double_in_place();

            assert_eq!(aplusa, adouble);
            assert_eq!(aplusa, aplusamixed);
        }

        let mut tmp = vec![G::zero(); 6];

        // (a + b) + c
        tmp[0] = (a + &b) + &c;

        // a + (b + c)
        tmp[1] = a + &(b + &c);

        // (a + c) + b
        tmp[2] = (a + &c) + &b;

        // Mixed addition

        // (a + b) + c
        tmp[3] = a_affine.into_projective();
        tmp[3].add_assign_mixed(&b_affine);
        tmp[3].add_assign_mixed(&c_affine);

        // a + (b + c)
        tmp[4] = b_affine.into_projective();
        tmp[4].add_assign_mixed(&c_affine);
        tmp[4].add_assign_mixed(&a_affine);

        // (a + c) + b
        tmp[5] = a_affine.into_projective();
        tmp[5].add_assign_mixed(&c_affine);
        tmp[5].add_assign_mixed(&b_affine);

        // Comparisons
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(tmp[i], tmp[j], "Associativity failed {} {}", i, j);
                assert_eq!(tmp[i].into_affine(), tmp[j].into_affine());
            }

            assert!(tmp[i] != a);
            assert!(tmp[i] != b);
            assert!(tmp[i] != c);

            assert!(a != tmp[i]);
            assert!(b != tmp[i]);
            assert!(c != tmp[i]);
        }

        // The direct formulas agree with the guarded operators on finite points.
        assert_eq!(a.checked_add(&b).unwrap(), a + &b);
        assert_eq!(a.checked_double().unwrap(), a.double());
    }
}

fn random_multiplication_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let mut a = G::rand(&mut rng);
        let mut b = G::rand(&mut rng);
        let a_affine = a.into_affine();
        let b_affine = b.into_affine();

        let s = G::ScalarField::rand(&mut rng);

        // s ( a + b )
        let mut tmp1 = a;
        tmp1.add_assign(&b);
        tmp1.mul_assign(s);

        // sa + sb
        a.mul_assign(s);
        b.mul_assign(s);

        let mut tmp2 = a;
        tmp2.add_assign(&b);

        // Affine multiplication
        let mut tmp3 = a_affine.mul(s.into_repr());
        tmp3.add_assign(&b_affine.mul(s.into_repr()));

        assert_eq!(tmp1, tmp2);
        assert_eq!(tmp1, tmp3);
    }

    // (s + t) P = sP + tP and (s t) P = s (t P)
    for _ in 0..ITERATIONS {
        let p = G::rand(&mut rng);
        let s = G::ScalarField::rand(&mut rng);
        let t = G::ScalarField::rand(&mut rng);

        let lhs = p.mul((s + &t).into_repr());
        let rhs = p.mul(s.into_repr()) + &p.mul(t.into_repr());
        assert_eq!(lhs, rhs);

        let lhs = p.mul((s * &t).into_repr());
        let rhs = p.mul(t.into_repr()).mul(s.into_repr());
        assert_eq!(lhs, rhs);
    }

    // Multiplying by the group order lands on the identity.
    {
        let p = G::rand(&mut rng);
        assert!(p.mul(G::ScalarField::MODULUS).is_zero());
        assert!(p.mul(G::ScalarField::zero().into_repr()).is_zero());
        assert_eq!(p.mul(G::ScalarField::one().into_repr()), p);
    }
}

fn random_wnaf_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for w in 2..=6 {
        let context = WnafContext::new(w);
        for _ in 0..ITERATIONS {
            let g = G::rand(&mut rng);
            let s = G::ScalarField::rand(&mut rng);

            let naive = g.mul(s.into_repr());
            assert_eq!(context.mul(g, &s), naive);

            let table = context.table(g);
            assert_eq!(context.mul_with_table(&table, &s), Some(naive));
        }
    }

    // A table built for a smaller window is rejected.
    let g = G::rand(&mut rng);
    let s = G::ScalarField::rand(&mut rng);
    let table = WnafContext::new(3).table(g);
    assert!(WnafContext::new(5).mul_with_table(&table, &s).is_none());

    assert!(WnafContext::new(4).mul(g, &G::ScalarField::zero()).is_zero());
    assert!(WnafContext::new(4).mul(G::zero(), &s).is_zero());
}

fn random_doubling_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let mut a = G::rand(&mut rng);
        let mut b = G::rand(&mut rng);

        // 2(a + b)
        let mut tmp1 = a;
        tmp1.add_assign(&b);
        tmp1.double_in_place();

        // 2a + 2b
        a.double_in_place();
        b.double_in_place();

        let mut tmp2 = a;
        tmp2.add_assign(&b);

        let mut tmp3 = a;
        tmp3.add_assign_mixed(&b.into_affine());

        assert_eq!(tmp1, tmp2);
        assert_eq!(tmp1, tmp3);
    }
}

fn random_negation_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let r = G::rand(&mut rng);

        let s = G::ScalarField::rand(&mut rng);
        let sneg = -s;
        assert!((s + &sneg).is_zero());

        let mut t1 = r;
        t1.mul_assign(s);

        let mut t2 = r;
        t2.mul_assign(sneg);

        let mut t3 = t1;
        t3.add_assign(&t2);
        assert!(t3.is_zero());

        let mut t4 = t1;
        t4.add_assign_mixed(&t2.into_affine());
        assert!(t4.is_zero());

        t1 = -t1;
        assert_eq!(t1, t2);

        let mut t5 = r;
        t5.sub_assign(&r);
        assert!(t5.is_zero());

        assert_eq!(-r.into_affine(), (-r).into_affine());
    }
}

fn random_transformation_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let g = G::rand(&mut rng);
        let g_affine = g.into_affine();
        let g_projective = g_affine.into_projective();
        assert_eq!(g, g_projective);
    }

    // Batch normalization
    for _ in 0..10 {
        let mut v = (0..ITERATIONS)
            .map(|_| G::rand(&mut rng).double())
            .collect::<Vec<_>>();

        for i in &v {
            assert!(!i.is_normalized());
        }

        use rand::distributions::{Distribution, Uniform};
        let between = Uniform::from(0..ITERATIONS);
        // Sprinkle in some normalized points
        for _ in 0..5 {
            v[between.sample(&mut rng)] = G::zero();
        }
        for _ in 0..5 {
            let s = between.sample(&mut rng);
            v[s] = v[s].into_affine().into_projective();
        }

        let expected_v = v
            .iter()
            .map(|v| v.into_affine().into_projective())
            .collect::<Vec<_>>();
        G::batch_normalization(&mut v);

        for i in &v {
            assert!(i.is_normalized());
        }

        assert_eq!(v, expected_v);

        let affine = G::batch_normalization_into_affine(&expected_v);
        for (a, p) in affine.iter().zip(&expected_v) {
            assert_eq!(*a, p.into_affine());
        }
    }
}

pub fn curve_tests<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    // Negation edge case with zero.
    {
        let z = -G::zero();
        assert!(z.is_zero());
    }

    // Doubling edge case with zero.
    {
        let mut z = -G::zero();
        z.double_in_place();
        assert!(z.is_zero());
    }

    // Addition edge cases with zero
    {
        let mut r = G::rand(&mut rng);
        let rcopy = r;
        r.add_assign(&G::zero());
        assert_eq!(r, rcopy);
        r.add_assign_mixed(&G::Affine::zero());
        assert_eq!(r, rcopy);

        let mut z = G::zero();
        z.add_assign(&G::zero());
        assert!(z.is_zero());
        z.add_assign_mixed(&G::Affine::zero());
        assert!(z.is_zero());

        let mut z2 = z;
        z2.add_assign(&r);

        z.add_assign_mixed(&r.into_affine());

        assert_eq!(z, z2);
        assert_eq!(z, r);
    }

    // The identity converts to the affine identity and back.
    {
        assert!(G::zero().into_affine().is_zero());
        assert!(G::Affine::zero().into_projective().is_zero());
        assert_eq!(G::zero(), G::Affine::zero().into_projective());
    }

    // Transformations
    {
        let a = G::rand(&mut rng);
        let b = a.into_affine().into_projective();
        let c = a
            .into_affine()
            .into_projective()
            .into_affine()
            .into_projective();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    // Test COFACTOR and COFACTOR_INV
    {
        let a = G::rand(&mut rng);
        let b = a.into_affine();
        let c = b.mul_by_cofactor_inv().mul_by_cofactor();
        assert_eq!(b, c);
    }

    // Random points are in the prime order subgroup.
    {
        let a = G::rand(&mut rng).into_affine();
        assert!(a.is_on_curve());
        assert!(a.is_in_correct_subgroup_assuming_on_curve());
    }

    random_addition_test::<G>();
    random_multiplication_test::<G>();
    random_wnaf_test::<G>();
    random_doubling_test::<G>();
    random_negation_test::<G>();
    random_transformation_test::<G>();
}

/// The general short Weierstrass formulas are undefined at the identity,
/// so invoking them directly there is reported.
pub fn sw_identity_misuse_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = G::rand(&mut rng);

    assert!(matches!(
        G::zero().checked_double(),
        Err(AlgebraError::IdentityElementMisuse)
    ));
    assert!(matches!(
        G::zero().checked_add(&a),
        Err(AlgebraError::IdentityElementMisuse)
    ));
    assert!(matches!(
        a.checked_add(&G::zero()),
        Err(AlgebraError::IdentityElementMisuse)
    ));

    // The guarded operators handle the identity.
    assert_eq!(G::zero() + &a, a);
    assert!(G::zero().double().is_zero());
}

/// The twisted Edwards law is complete, so the direct formulas accept the
/// identity.
pub fn edwards_complete_addition_test<G: ProjectiveCurve>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let a = G::rand(&mut rng);

    assert!(G::zero().checked_double().unwrap().is_zero());
    assert_eq!(G::zero().checked_add(&a).unwrap(), a);
    assert_eq!(a.checked_add(&G::zero()).unwrap(), a);
    assert!(a.checked_add(&-a).unwrap().is_zero());
}

type Jacobian<P> = short_weierstrass_jacobian::GroupProjective<P>;
type Homogeneous<P> = short_weierstrass_projective::GroupProjective<P>;

/// Jacobian and homogeneous projective coordinates describe the same group:
/// identical operations land on identical affine points.
pub fn sw_model_agreement_test<P: SWModelParameters>() {
    fn same<P: SWModelParameters>(j: Jacobian<P>, h: Homogeneous<P>) {
        let j = j.into_affine();
        let h = h.into_affine();
        assert_eq!(j.infinity, h.infinity);
        if !j.infinity {
            assert_eq!(j.x, h.x);
            assert_eq!(j.y, h.y);
        }
    }

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..ITERATIONS {
        let a = Jacobian::<P>::rand(&mut rng).into_affine();
        let b = Jacobian::<P>::rand(&mut rng).into_affine();
        let s = P::ScalarField::rand(&mut rng);

        let ha = short_weierstrass_projective::GroupAffine::<P>::new(a.x, a.y, false);
        let hb = short_weierstrass_projective::GroupAffine::<P>::new(b.x, b.y, false);

        let (ja, jb) = (a.into_projective(), b.into_projective());
        let (hpa, hpb) = (ha.into_projective(), hb.into_projective());

        same::<P>(ja + &jb, hpa + &hpb);
        same::<P>(ja.double(), hpa.double());
        same::<P>(ja.double() + &jb, hpa.double() + &hpb);
        same::<P>(ja.add_mixed(&b), hpa.add_mixed(&hb));
        same::<P>(ja - &ja, hpa - &hpa);
        same::<P>(ja.mul(s.into_repr()), hpa.mul(s.into_repr()));
        same::<P>(-ja, -hpa);
    }
}

/// Round-trips through the compressed and uncompressed encodings and checks
/// that malformed inputs are rejected with the right error.
pub fn curve_serialization_test<G: AffineCurve>() {
    let buf_size = G::zero().serialized_size();
    let uncompressed_size = G::zero().uncompressed_size();

    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    let mut points = vec![G::zero(), G::prime_subgroup_generator()];
    for _ in 0..ITERATIONS {
        let a = G::Projective::rand(&mut rng).into_affine();
        points.push(a);
        points.push(-a);
    }

    for a in points {
        {
            let serialized = a.to_bytes().unwrap();
            assert_eq!(serialized.len(), buf_size);
            assert_eq!(G::from_bytes(&serialized).unwrap(), a);

            // A compressed encoding is not an uncompressed one.
            assert!(G::from_bytes_uncompressed(&serialized).is_err());

            assert!(matches!(
                G::from_bytes(&serialized[..buf_size - 1]),
                Err(AlgebraError::InvalidEncoding)
            ));
        }

        {
            let serialized = a.to_bytes_uncompressed().unwrap();
            assert_eq!(serialized.len(), uncompressed_size);
            assert_eq!(G::from_bytes_uncompressed(&serialized).unwrap(), a);

            assert!(matches!(
                G::from_bytes_uncompressed(&serialized[..uncompressed_size - 1]),
                Err(AlgebraError::InvalidEncoding)
            ));
            let mut padded = serialized.clone();
            padded.push(0);
            assert!(matches!(
                G::from_bytes_uncompressed(&padded),
                Err(AlgebraError::InvalidEncoding)
            ));
        }

        {
            let mut serialized = vec![0; buf_size - 1];
            a.serialize(&mut &mut serialized[..]).unwrap_err();
        }
    }

    // Perturbing y moves an uncompressed point off the curve.
    for _ in 0..ITERATIONS {
        let a = G::Projective::rand(&mut rng).into_affine();
        let mut serialized = a.to_bytes_uncompressed().unwrap();
        let last = serialized.len() - 1;
        serialized[last] ^= 1;
        assert!(matches!(
            G::from_bytes_uncompressed(&serialized),
            Err(AlgebraError::PointNotOnCurve)
        ));
    }

    // Perturbing x never decodes to the original point; about half of the
    // candidates have no point at all.
    let mut off_curve = 0;
    for _ in 0..4 * ITERATIONS {
        let a = G::Projective::rand(&mut rng).into_affine();
        let mut serialized = a.to_bytes().unwrap();
        let last = serialized.len() - 1;
        serialized[last] ^= 1;
        match G::from_bytes(&serialized) {
            Ok(b) => assert_ne!(a, b),
            Err(AlgebraError::PointNotOnCurve) => off_curve += 1,
            Err(AlgebraError::PointNotInSubgroup) | Err(AlgebraError::InvalidEncoding) => {},
            Err(e) => panic!("unexpected error {}", e),
        }
    }
    assert!(off_curve > 0);
}

/// Checks the position of the `C`, `I` and `S` bits in short Weierstrass
/// encodings.
pub fn sw_flags_test<G: AffineCurve>() {
    const COMPRESSION: u8 = 1 << 7;
    const INFINITY: u8 = 1 << 6;
    const SIGN: u8 = 1 << 5;

    let zero = G::zero().to_bytes().unwrap();
    assert_eq!(zero[0], COMPRESSION | INFINITY);
    assert!(zero[1..].iter().all(|b| *b == 0));

    let zero = G::zero().to_bytes_uncompressed().unwrap();
    assert_eq!(zero[0], INFINITY);
    assert!(zero[1..].iter().all(|b| *b == 0));

    let g = G::prime_subgroup_generator();
    let compressed = g.to_bytes().unwrap();
    let negated = (-g).to_bytes().unwrap();
    assert_eq!(compressed[0] & (COMPRESSION | INFINITY), COMPRESSION);
    assert_eq!((compressed[0] ^ negated[0]), SIGN);
    assert_eq!(compressed[1..], negated[1..]);

    let uncompressed = g.to_bytes_uncompressed().unwrap();
    assert_eq!(uncompressed[0] & (COMPRESSION | INFINITY | SIGN), 0);

    // An infinity flag over a non-zero x is malformed.
    let mut bad = compressed.clone();
    bad[0] |= INFINITY;
    bad[0] &= !SIGN;
    assert!(matches!(
        G::from_bytes(&bad),
        Err(AlgebraError::InvalidEncoding)
    ));

    // The sign bit is meaningless on the identity.
    let mut bad = G::zero().to_bytes().unwrap();
    bad[0] |= SIGN;
    assert!(matches!(
        G::from_bytes(&bad),
        Err(AlgebraError::InvalidEncoding)
    ));
}
