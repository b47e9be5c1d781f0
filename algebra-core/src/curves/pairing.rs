use crate::{
    curves::{AffineCurve, ProjectiveCurve},
    fields::{Field, PrimeField, SquareRootField},
    AlgebraError,
};
use core::{fmt::Debug, iter, ops::MulAssign};

/// A bilinear map `e: G1 x G2 -> GT` split into a Miller loop over prepared
/// inputs and a final exponentiation into the order `r` subgroup of `Fqk`.
pub trait PairingEngine: Sized + 'static + Copy + Debug + Sync + Send {
    /// Order `r` field shared by G1 and G2.
    type Fr: PrimeField + SquareRootField;

    type G1Projective: ProjectiveCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Affine = Self::G1Affine>
        + From<Self::G1Affine>
        + Into<Self::G1Affine>
        + MulAssign<Self::Fr>;

    type G1Affine: AffineCurve<BaseField = Self::Fq, ScalarField = Self::Fr, Projective = Self::G1Projective>
        + From<Self::G1Projective>
        + Into<Self::G1Projective>
        + Into<Self::G1Prepared>;

    /// G1 data precomputed for the Miller loop.
    type G1Prepared: Default + Clone + Send + Sync + Debug + From<Self::G1Affine>;

    type G2Projective: ProjectiveCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Affine = Self::G2Affine>
        + From<Self::G2Affine>
        + Into<Self::G2Affine>
        + MulAssign<Self::Fr>;

    type G2Affine: AffineCurve<BaseField = Self::Fqe, ScalarField = Self::Fr, Projective = Self::G2Projective>
        + From<Self::G2Projective>
        + Into<Self::G2Projective>
        + Into<Self::G2Prepared>;

    /// G2 data precomputed for the Miller loop, typically its line
    /// coefficients.
    type G2Prepared: Default + Clone + Send + Sync + Debug + From<Self::G2Affine>;

    /// Field of definition of G1.
    type Fq: PrimeField + SquareRootField;

    /// Field of definition of G2.
    type Fqe: SquareRootField;

    /// Field containing the target group.
    type Fqk: Field;

    /// Runs one Miller loop over all `(G1, G2)` pairs, sharing the squarings
    /// of the accumulator. Pairs with an identity component contribute
    /// nothing, so an empty or all-identity input yields `Fqk::one()`.
    #[must_use]
    fn miller_loop<'a, I>(i: I) -> Self::Fqk
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>;

    /// The raw Miller loop value of `e(a) * e(b)`, computed in one pass.
    #[must_use]
    fn double_miller_loop(
        a: &(Self::G1Prepared, Self::G2Prepared),
        b: &(Self::G1Prepared, Self::G2Prepared),
    ) -> Self::Fqk {
        Self::miller_loop([a, b])
    }

    /// Raises the output of a Miller loop to `(q^k - 1) / r`. Returns `None`
    /// only for the zero element, which no Miller loop produces.
    #[must_use]
    fn final_exponentiation(f: &Self::Fqk) -> Option<Self::Fqk>;

    /// `prod_i e(p_i, q_i)` with a single final exponentiation.
    fn product_of_pairings<'a, I>(i: I) -> Result<Self::Fqk, AlgebraError>
    where
        I: IntoIterator<Item = &'a (Self::G1Prepared, Self::G2Prepared)>,
    {
        let f = Self::miller_loop(i);
        Self::final_exponentiation(&f).ok_or(AlgebraError::DivisionByZero)
    }

    /// The reduced pairing `e(p, q)`. Fails when either input is off its
    /// curve or outside the prime order subgroup.
    fn pairing<G1, G2>(p: G1, q: G2) -> Result<Self::Fqk, AlgebraError>
    where
        G1: Into<Self::G1Affine>,
        G2: Into<Self::G2Affine>,
    {
        let p: Self::G1Affine = checked_pairing_input(p.into())?;
        let q: Self::G2Affine = checked_pairing_input(q.into())?;
        let pair = (p.into(), q.into());
        Self::product_of_pairings(iter::once(&pair))
    }
}

fn checked_pairing_input<G: AffineCurve>(g: G) -> Result<G, AlgebraError> {
    if !g.is_on_curve() {
        trace!("pairing input is not on the curve");
        return Err(AlgebraError::PointNotOnCurve);
    }
    if !g.is_in_correct_subgroup_assuming_on_curve() {
        trace!("pairing input is not in the prime order subgroup");
        return Err(AlgebraError::PointNotInSubgroup);
    }
    Ok(g)
}

pub fn prepare_g1<E: PairingEngine>(g: impl Into<E::G1Affine>) -> E::G1Prepared {
    let g: E::G1Affine = g.into();
    g.into()
}

pub fn prepare_g2<E: PairingEngine>(g: impl Into<E::G2Affine>) -> E::G2Prepared {
    let g: E::G2Affine = g.into();
    g.into()
}
