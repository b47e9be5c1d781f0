use algebra_core::{
    msm::VariableBaseMSM, AffineCurve, PrimeField, ProjectiveCurve, UniformRand, Zero,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn naive_var_base_msm<G: AffineCurve>(
    bases: &[G],
    scalars: &[<G::ScalarField as PrimeField>::BigInt],
) -> G::Projective {
    let mut acc = G::Projective::zero();

    for (base, scalar) in bases.iter().zip(scalars.iter()) {
        acc += &base.mul(*scalar);
    }
    acc
}

pub fn test_msm<G: AffineCurve>() {
    const SAMPLES: usize = 1 << 7;

    let mut rng = XorShiftRng::seed_from_u64(234872845u64);

    let v = (0..SAMPLES)
        .map(|_| G::ScalarField::rand(&mut rng).into_repr())
        .collect::<Vec<_>>();
    let g = (0..SAMPLES)
        .map(|_| G::Projective::rand(&mut rng).into_affine())
        .collect::<Vec<_>>();

    let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
    let fast = VariableBaseMSM::multi_scalar_mul(g.as_slice(), v.as_slice());

    assert_eq!(naive.into_affine(), fast.into_affine());

    // Extra bases beyond the scalars are ignored.
    let fast = VariableBaseMSM::multi_scalar_mul(g.as_slice(), &v[..SAMPLES - 1]);
    let naive = naive_var_base_msm(&g[..SAMPLES - 1], &v[..SAMPLES - 1]);
    assert_eq!(naive, fast);

    // Identity bases and zero scalars contribute nothing.
    let mut g = g;
    let mut v = v;
    g[0] = G::zero();
    v[1] = G::ScalarField::zero().into_repr();
    let naive = naive_var_base_msm(g.as_slice(), v.as_slice());
    let fast = VariableBaseMSM::multi_scalar_mul(g.as_slice(), v.as_slice());
    assert_eq!(naive, fast);

    assert!(VariableBaseMSM::multi_scalar_mul::<G>(&[], &[]).is_zero());
}
