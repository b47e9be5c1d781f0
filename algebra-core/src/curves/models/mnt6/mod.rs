use crate::{
    curves::{
        models::{ModelParameters, SWModelParameters},
        PairingEngine,
    },
    fields::{
        fp6_2over3::{Fp6, Fp6Parameters},
        Field, Fp3, Fp3Parameters, PrimeField, SquareRootField,
    },
};
use core::marker::PhantomData;
use num_traits::{One, Zero};

pub mod g1;
pub mod g2;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2PreparedCoefficients, G2Projective},
};

// Ate pairing e: G_1 x G_2 -> G_T for MNT6 curves over prime fields
//
//     E: y^2 = x^3 + a*x + b mod p.
//
// Its embedding field F6 is regarded as towered extension
//
//     F6 = F3[Y]/(Y^2-X),
//     F3 = Fp[X]/(X^3-alpha),
//
// using a "non-residue" alpha mod p such that (X^6-alpha) is irreducible over Fp.
// G_2 is represented by a subgroup of prime order r=ord(G_1) of the quadratic twist
//
//     E': y^2 = x^3 + (a*twist^2) x + b*twist^3
//
// over F3, with twist = X = Y^2. The Frobenius operator reduces the cost of the
// final exponentiation, and the line coefficients of the Miller loop are
// precomputed from Q alone.
pub trait MNT6Parameters: 'static {
    /// The Miller loop count, `|t - 1|` for the Frobenius trace `t`.
    const ATE_LOOP_COUNT: &'static [u64];
    /// Signed binary expansion of `ATE_LOOP_COUNT`, least significant digit
    /// first, with the leading digit removed.
    const WNAF: &'static [i32];
    const ATE_IS_LOOP_COUNT_NEG: bool;
    /// The twist factor `X`, used to evaluate lines at points of G1.
    const TWIST: Fp3<Self::Fp3Params>;
    /// `a * X^2`, the `a` coefficient of the twist.
    const TWIST_COEFF_A: Fp3<Self::Fp3Params>;
    // the final pairing exponent is decomposed as
    //      (p^6-1)/r = (p^3-1)(p+1) (p^2 - p + 1)/r,
    // wheras
    //      (p^2 - p + 1)/r = m_1*p + m_0,
    const FINAL_EXPONENT_LAST_CHUNK_1: <Self::Fp as PrimeField>::BigInt;
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: <Self::Fp as PrimeField>::BigInt;
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool;

    type Fp: PrimeField + SquareRootField + Into<<Self::Fp as PrimeField>::BigInt>;
    type Fr: PrimeField + SquareRootField + Into<<Self::Fr as PrimeField>::BigInt>;
    type Fp3Params: Fp3Parameters<Fp = Self::Fp>;
    type Fp6Params: Fp6Parameters<Fp3Params = Self::Fp3Params>;
    type G1Parameters: SWModelParameters<BaseField = Self::Fp, ScalarField = Self::Fr>;
    type G2Parameters: SWModelParameters<
        BaseField = Fp3<Self::Fp3Params>,
        ScalarField = <Self::G1Parameters as ModelParameters>::ScalarField,
    >;
}

#[derive(Derivative)]
#[derivative(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct MNT6<P: MNT6Parameters>(PhantomData<fn() -> P>);

impl<P: MNT6Parameters> MNT6<P> {
    // Evaluates the line with precomputed coefficients `c` at `p`, scaled
    // by twist^2:
    //     g(P) = y_p*twist^2 + (gamma*x' - gamma*twist*x_p - y') * Y,
    // with (x', y') the twist coordinates of the running point. The scale
    // factor lies in F3 and is cancelled out by the final exponentiation.
    fn ell(
        f: &mut Fp6<P::Fp6Params>,
        p: &G1Prepared<P>,
        c: &G2PreparedCoefficients<P>,
        y_term: &Fp3<P::Fp3Params>,
    ) {
        let mut gamma_twist_times_x = c.gamma * &P::TWIST;
        gamma_twist_times_x.mul_assign_by_fp(&p.p.x);

        let g_at_p = Fp6::<P::Fp6Params>::new(
            p.py_twist_squared,
            c.gamma_x - &gamma_twist_times_x - y_term,
        );
        *f *= &g_at_p;
    }

    fn final_exponentiation_first_chunk(
        elt: &Fp6<P::Fp6Params>,
        elt_inv: &Fp6<P::Fp6Params>,
    ) -> Fp6<P::Fp6Params> {
        // use the Frobenius map and elt^{-1} to compute the "easy part"
        // elt^{(q^3-1)*(q+1)}
        let mut elt_q3 = *elt;
        // elt^{q^3}
        elt_q3.conjugate();
        // elt^{q^3-1}
        let mut elt_q3_over_elt = elt_q3 * elt_inv;
        let elt_q3_over_elt_clone = elt_q3_over_elt;
        // elt^{(q^3-1)q}
        elt_q3_over_elt.frobenius_map(1);
        // elt^{(q^3-1)*(q+1)}
        elt_q3_over_elt *= &elt_q3_over_elt_clone;

        elt_q3_over_elt
    }

    fn final_exponentiation_last_chunk(
        elt: &Fp6<P::Fp6Params>,
        elt_inv: &Fp6<P::Fp6Params>,
    ) -> Fp6<P::Fp6Params> {
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

impl<P: MNT6Parameters> PairingEngine for MNT6<P> {
    type Fr = <P::G1Parameters as ModelParameters>::ScalarField;
    type G1Projective = G1Projective<P>;
    type G1Affine = G1Affine<P>;
    type G1Prepared = G1Prepared<P>;
    type G2Projective = G2Projective<P>;
    type G2Affine = G2Affine<P>;
    type G2Prepared = G2Prepared<P>;
    type Fq = P::Fp;
    type Fqe = Fp3<P::Fp3Params>;
    type Fqk = Fp6<P::Fp6Params>;

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
        trace!(pairs = pairs.len(), "mnt6 miller loop");

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
