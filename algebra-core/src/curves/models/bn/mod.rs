use crate::{
    curves::{
        models::{
            sextic_twist::LineEvaluator,
            ModelParameters, SWModelParameters,
        },
        PairingEngine,
    },
    fields::{
        fp12_2over3over2::{Fp12, Fp12Parameters},
        fp2::Fp2Parameters,
        fp6_3over2::Fp6Parameters,
        Field, Fp2, PrimeField, SquareRootField,
    },
};
use core::{marker::PhantomData, ops::MulAssign};
use num_traits::One;

pub mod g1;
pub mod g2;

/// Parameters of a BN curve with seed `u > 0`. `SIX_U_PLUS_2_NAF` is the
/// signed binary expansion of `6u + 2`, least significant digit first.
pub trait BnParameters: 'static {
    const SIX_U_PLUS_2_NAF: &'static [i8];
    const U: &'static [u64];
    const TWIST_TYPE: TwistType;

    type Fp: PrimeField + SquareRootField + Into<<Self::Fp as PrimeField>::BigInt>;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp2Params = Self::Fp2Params>;
    type Fp12Params: Fp12Parameters<Fp6Params = Self::Fp6Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;

    /// `xi^((q - 1) / 2)`, used to apply the Frobenius to the y-coordinate of
    /// a twisted point.
    const CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2: Fp2<Self::Fp2Params>;
}

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Bn<P: BnParameters>(PhantomData<fn() -> P>);

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};
pub use crate::curves::models::sextic_twist::TwistType;

impl<P: BnParameters> Bn<P> {
    /// `f^(-u)`, valid on the cyclotomic subgroup.
    fn exp_by_neg_x(f: &Fp12<P::Fp12Params>) -> Fp12<P::Fp12Params> {
        f.cyclotomic_exp(P::U).unitary_inverse()
    }
}

impl<P: BnParameters> PairingEngine for Bn<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp12<P::Fp12Params>;

    #[tracing::instrument(target = "pairing", skip(i))]
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        let mut lines = LineEvaluator::<P::Fp12Params>::new(P::TWIST_TYPE);
        for (p, q) in i {
            if !p.is_zero() && !q.is_zero() {
                lines.push(p.0.x, p.0.y, &q.ell_coeffs);
            }
        }
        trace!(pairs = lines.len(), "bn miller loop");

        let mut f = Self::Fqk::one();
        for &digit in P::SIX_U_PLUS_2_NAF.iter().rev().skip(1) {
            f.square_in_place();
            lines.step(&mut f);
            if digit != 0 {
                lines.step(&mut f);
            }
        }

        // lines through pi(q) and -pi^2(q)
        lines.step(&mut f);
        lines.step(&mut f);

        f
    }

    #[tracing::instrument(target = "pairing", skip(r))]
    fn final_exponentiation(r: &Self::Fqk) -> Option<Self::Fqk> {
        let mut f1 = *r;
        f1.conjugate();

        // f1 = r.conjugate() = f^(p^6)
        let mut f2 = r.inverse()?;

        // f2 = f^(p^6 - 1)
        let mut r = f1;
        r.mul_assign(&f2);
        f2 = r;

        // r = f^((p^6 - 1)(p^2 + 1))
        r.frobenius_map(2);
        r.mul_assign(&f2);

        // Hard part of the final exponentiation, using the addition chain of
        // Fuentes-Castaneda, Knapp and Rodriguez-Henriquez
        // (https://eprint.iacr.org/2011/465.pdf) with exponent -u.
        let a = Self::exp_by_neg_x(&r);
        let b = a.cyclotomic_square();
        let c = b.cyclotomic_square();
        let d = c * &b;

        let e = Self::exp_by_neg_x(&d);
        let f = e.cyclotomic_square();
        let g = Self::exp_by_neg_x(&f);

        let h = d.unitary_inverse();
        let i = g.unitary_inverse();

        let j = i * &e;
        let k = j * &h;
        let l = k * &b;
        let m = k * &e;
        let n = m * &r;

        let mut o = l;
        o.frobenius_map(1);
        let p = o * &n;

        let mut q = k;
        q.frobenius_map(2);
        let r2 = q * &p;

        let s = r.unitary_inverse();
        let mut t = s * &l;
        t.frobenius_map(3);

        Some(t * &r2)
    }
}
