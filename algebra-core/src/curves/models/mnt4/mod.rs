use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        PairingEngine,
    },
    fields::{Field, Fp2, Fp2Parameters, Fp4, Fp4Parameters, PrimeField, SquareRootField},
};
use core::marker::PhantomData;
use num_traits::{One, Zero};

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2PreparedCoefficients, G2Projective},
};

// Ate pairing e: G_1 x G_2 -> G_T for MNT4 curves over prime fields
//
//     E: y^2 = x^3 + a*x + b mod p.
//
// Its embedding field F4 is regarded as towered extension
//
//     F4 = F2[Y]/(Y^2-X),
//     F2 = Fp[X]/(X^2-alpha),
//
// using a "non-residue" alpha mod p such that (X^4-alpha) is irreducible over Fp.
// G_2 is represented by a subgroup of prime order r=ord(G_1) of the quadratic twist
//
//     E': y^2 = x^3 + (a*twist^2) x + b*twist^3
//
// over F2, with twist=X. The Frobenius operator reduces the cost of the
// final exponentiation, and the line coefficients of the Miller loop are
// precomputed from Q alone.
pub trait MNT4Parameters: 'static {
    /// The Miller loop count, `|t - 1|` for the Frobenius trace `t`.
    const ATE_LOOP_COUNT: &'static [u64];
    /// Signed binary expansion of `ATE_LOOP_COUNT`, least significant digit
    /// first, with the leading digit removed.
    const WNAF: &'static [i32];
    const ATE_IS_LOOP_COUNT_NEG: bool;
    /// The twist factor `X`, used to evaluate lines at points of G1.
    const TWIST: Fp2<Self::Fp2Params>;
    /// `a * X^2`, the `a` coefficient of the twist.
    const TWIST_COEFF_A: Fp2<Self::Fp2Params>;
    // the final pairing exponent is decomposed as
    //      (p^4-1)/r = (p^2-1) (p^2 + 1)/r,
    // wheras
    //      (p^2 +1)/r = m_1*p + m_0,
    const FINAL_EXPONENT_LAST_CHUNK_1: <Self::Fp as PrimeField>::BigInt;
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: <Self::Fp as PrimeField>::BigInt;
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool;

    type Fp: PrimeField + SquareRootField + Into<<Self::Fp as PrimeField>::BigInt>;
    type Fr: PrimeField + SquareRootField + Into<<Self::Fr as PrimeField>::BigInt>;
    type Fp2Params: Fp2Parameters<Fp = Self::Fp>;
    type Fp4Params: Fp4Parameters<Fp2Params = Self::Fp2Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp, ScalarField = Self::Fr>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp2<Self::Fp2Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct MNT4<P: MNT4Parameters>(PhantomData<fn() -> P>);

impl<P: MNT4Parameters> MNT4<P> {
    // Evaluates the line with precomputed coefficients `c` at `p`, scaled
    // by twist^2:
    //     g(P) = y_p*twist^2 + (gamma*x' - gamma*twist*x_p - y') * Y,
    // with (x', y') the twist coordinates of the running point. The scale
    // factor lies in F2 and is cancelled out by the final exponentiation.
    fn ell(
        f: &mut Fp4<P::Fp4Params>,
        p: &G1Prepared<P>,
        c: &G2PreparedCoefficients<P>,
        y_term: &Fp2<P::Fp2Params>,
    ) {
        let mut gamma_twist_times_x = c.gamma * &P::TWIST;
        gamma_twist_times_x.mul_assign_by_fp(&p.p.x);

        let g_at_p = Fp4::<P::Fp4Params>::new(
            p.py_twist_squared,
            c.gamma_x - &gamma_twist_times_x - y_term,
        );
        *f *= &g_at_p;
    }

    fn final_exponentiation_first_chunk(
        elt: &Fp4<P::Fp4Params>,
        elt_inv: &Fp4<P::Fp4Params>,
    ) -> Fp4<P::Fp4Params> {
        // use the Frobenius map and elt^{-1} to compute
        // elt^(q^2-1)
        let mut elt_q2 = *elt;
        // elt^(q^2)
        elt_q2.conjugate();
        // elt^(q^2-1)
        elt_q2 * elt_inv
    }

    fn final_exponentiation_last_chunk(
        elt: &Fp4<P::Fp4Params>,
        elt_inv: &Fp4<P::Fp4Params>,
    ) -> Fp4<P::Fp4Params> {
        // remaining exponentiaton by m_1*q + m_0, m_0 can be signed.
        let mut elt_q = *elt;
        //elt^{q}
        elt_q.frobenius_map(1);

        // exponentiation by m_1 and m_0 using optimized exponentiation for r-th roots of unity
        //elt^{q*m_1}
        let w1_part = elt_q.cyclotomic_exp(&P::FINAL_EXPONENT_LAST_CHUNK_1);
        //elt^{m_0}
        let w0_part = if P::FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG {
            elt_inv.cyclotomic_exp(&P::FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0)
        } else {
            elt.cyclotomic_exp(&P::FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0)
        };
        //elt^{q*m_1+m_0}
        w1_part * &w0_part
    }
}

impl<P: MNT4Parameters> PairingEngine for MNT4<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp2<P::Fp2Params>;
    type Fqk = Fp4<P::Fp4Params>;

    #[tracing::instrument(target = "pairing", skip(i))]
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        let pairs = i
            .into_iter()
            .filter(|(p, q)| !p.is_zero() && !q.is_zero())
            .map(|(p, q)| (p, q))
            .collect::<Vec<_>>();
        trace!(pairs = pairs.len(), "mnt4 miller loop");

        let mut f = Self::Fqk::one();
        let mut idx = 0;

        // signed bits of the loop count below the MSB, most significant first
        for &n in P::WNAF.iter().rev() {
            f.square_in_place();

            // tangent line at the running point
            for (p, q) in &pairs {
                let c = &q.coeffs[idx];
                Self::ell(&mut f, p, c, &c.r_y);
            }
            idx += 1;

            // chord through the running point and +-Q
            if n != 0 {
                for (p, q) in &pairs {
                    let c = &q.coeffs[idx];
                    let y_term = if n > 0 { q.q.y } else { -q.q.y };
                    Self::ell(&mut f, p, c, &y_term);
                }
                idx += 1;
            }
        }

        if P::ATE_IS_LOOP_COUNT_NEG {
            f.conjugate();
        }

        f
    }

    #[tracing::instrument(target = "pairing", skip(value))]
    fn final_exponentiation(value: &Self::Fqk) -> Option<Self::Fqk> {
        if value.is_zero() {
            return None;
        }
        let value_inv = value.inverse()?;
        // the "easy part"
        let value_to_first_chunk = Self::final_exponentiation_first_chunk(value, &value_inv);
        let value_inv_to_first_chunk = Self::final_exponentiation_first_chunk(&value_inv, value);
        // the "hard part"
        Some(Self::final_exponentiation_last_chunk(
            &value_to_first_chunk,
            &value_inv_to_first_chunk,
        ))
    }
}
