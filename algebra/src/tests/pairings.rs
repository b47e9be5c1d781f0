use algebra_core::{
    AffineCurve, Field, One, PairingEngine, PrimeField, ProjectiveCurve, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Routes the `pairing` spans to the test output when `RUST_LOG` asks for
/// them, e.g. `RUST_LOG=pairing=trace`.
pub fn init_tracing() {
    let _ = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

pub fn bilinearity_test<E: PairingEngine>() {
    init_tracing();
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    let a = E::G1Projective::rand(&mut rng);
    let b = E::G2Projective::rand(&mut rng);
    let s = E::Fr::rand(&mut rng);

    let mut sa = a;
    sa *= s;
    let mut sb = b;
    sb *= s;

    let ans1 = E::pairing(sa, b).unwrap();
    let ans2 = E::pairing(a, sb).unwrap();
    let ans3 = E::pairing(a, b).unwrap().pow(s.into_repr());

    assert_eq!(ans1, ans2);
    assert_eq!(ans2, ans3);

    assert_ne!(ans1, E::Fqk::one());
    assert_ne!(ans2, E::Fqk::one());
    assert_ne!(ans3, E::Fqk::one());

    assert_eq!(ans1.pow(E::Fr::MODULUS), E::Fqk::one());
    assert_eq!(ans2.pow(E::Fr::MODULUS), E::Fqk::one());
    assert_eq!(ans3.pow(E::Fr::MODULUS), E::Fqk::one());

    // e(a, b) e(-a, b) = 1
    let neg = E::pairing(-a, b).unwrap();
    assert_eq!(ans3 * &neg.pow(s.into_repr()), E::Fqk::one());
}

pub fn generator_pairing_test<E: PairingEngine>() {
    let g1 = E::G1Affine::prime_subgroup_generator();
    let g2 = E::G2Affine::prime_subgroup_generator();

    let gt = E::pairing(g1, g2).unwrap();
    assert_ne!(gt, E::Fqk::one());
    assert_eq!(gt.pow(E::Fr::MODULUS), E::Fqk::one());

    // e(2 g1, g2) = e(g1, g2)^2 = e(g1, 2 g2)
    let two_g1 = g1.into_projective().double();
    let two_g2 = g2.into_projective().double();
    assert_eq!(E::pairing(two_g1, g2).unwrap(), gt.square());
    assert_eq!(E::pairing(g1, two_g2).unwrap(), gt.square());
}

pub fn identity_pairing_test<E: PairingEngine>() {
    let g1 = E::G1Affine::prime_subgroup_generator();
    let g2 = E::G2Affine::prime_subgroup_generator();

    assert_eq!(E::pairing(E::G1Affine::zero(), g2).unwrap(), E::Fqk::one());
    assert_eq!(E::pairing(g1, E::G2Affine::zero()).unwrap(), E::Fqk::one());
    assert_eq!(
        E::pairing(E::G1Projective::zero(), E::G2Projective::zero()).unwrap(),
        E::Fqk::one()
    );

    // Identity pairs contribute nothing to the Miller loop.
    let zero_pair = (E::G1Prepared::from(E::G1Affine::zero()), E::G2Prepared::from(g2));
    assert_eq!(E::miller_loop(&[zero_pair.clone()]), E::Fqk::one());
    let pair = (E::G1Prepared::from(g1), E::G2Prepared::from(g2));
    assert_eq!(
        E::miller_loop(&[pair.clone(), zero_pair]),
        E::miller_loop(&[pair])
    );

    let empty: [(E::G1Prepared, E::G2Prepared); 0] = [];
    assert_eq!(E::miller_loop(&empty), E::Fqk::one());
    assert_eq!(E::product_of_pairings(&empty).unwrap(), E::Fqk::one());

    assert_eq!(E::final_exponentiation(&E::Fqk::one()), Some(E::Fqk::one()));
    assert_eq!(E::final_exponentiation(&E::Fqk::zero()), None);
}

pub fn double_miller_loop_test<E: PairingEngine>() {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);

    for _ in 0..3 {
        let p1 = E::G1Prepared::from(E::G1Projective::rand(&mut rng).into_affine());
        let q1 = E::G2Prepared::from(E::G2Projective::rand(&mut rng).into_affine());
        let p2 = E::G1Prepared::from(E::G1Projective::rand(&mut rng).into_affine());
        let q2 = E::G2Prepared::from(E::G2Projective::rand(&mut rng).into_affine());

        let first = (p1, q1);
        let second = (p2, q2);

        // The raw Miller values agree before the final exponentiation.
        let combined = E::double_miller_loop(&first, &second);
        let separate =
            E::miller_loop(&[first.clone()]) * &E::miller_loop(&[second.clone()]);
        assert_eq!(combined, separate);
        assert_eq!(combined, E::miller_loop(&[first, second]));
    }
}

pub fn product_of_pairings_test<E: PairingEngine>() {
    let rng = &mut XorShiftRng::seed_from_u64(1231275789u64);

    let a = E::G1Projective::rand(rng).into_affine();
    let b = E::G2Projective::rand(rng).into_affine();
    let c = E::G1Projective::rand(rng).into_affine();
    let d = E::G2Projective::rand(rng).into_affine();
    let ans1 = E::pairing(a, b).unwrap() * &E::pairing(c, d).unwrap();
    let ans2 = E::product_of_pairings(&[(a.into(), b.into()), (c.into(), d.into())]).unwrap();
    assert_eq!(ans1, ans2);

    // e(a, b) e(-a, b) = 1
    let ans3 = E::product_of_pairings(&[(a.into(), b.into()), ((-a).into(), b.into())]).unwrap();
    assert_eq!(ans3, E::Fqk::one());
}
