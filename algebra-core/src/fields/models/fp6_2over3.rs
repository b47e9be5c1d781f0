use super::quadratic_extension::*;
use crate::fields::{Fp3, Fp3Parameters};
use core::marker::PhantomData;

/// Model for the quadratic extension `Fp6 = Fp3[Y]/(Y^2 - X)` of
/// `Fp3 = Fp[X]/(X^3 - alpha)`.
pub trait Fp6Parameters: 'static + Send + Sync {
    type Fp3Params: Fp3Parameters;

    /// The Fp3 non-residue `alpha`.
    const NONRESIDUE: <Self::Fp3Params as Fp3Parameters>::Fp;

    /// Coefficients for the Frobenius automorphism:
    /// `alpha^((p^i - 1) / 6)` for `i = 0, ..., 5`.
    const FROBENIUS_COEFF_FP6_C1: &'static [<Self::Fp3Params as Fp3Parameters>::Fp];

    /// Multiply by quadratic nonresidue `X`: `(c0, c1, c2) -> (alpha * c2, c0, c1)`.
    #[inline(always)]
    fn mul_fp3_by_nonresidue(fe: &Fp3<Self::Fp3Params>) -> Fp3<Self::Fp3Params> {
        Fp3::new(Self::NONRESIDUE * &fe.c2, fe.c0, fe.c1)
    }
}

pub struct Fp6ParamsWrapper<P: Fp6Parameters>(PhantomData<P>);

impl<P: Fp6Parameters> QuadExtParameters for Fp6ParamsWrapper<P> {
    type BasePrimeField = <P::Fp3Params as Fp3Parameters>::Fp;
    type BaseField = Fp3<P::Fp3Params>;
    type FrobCoeff = Self::BasePrimeField;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 6;

    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP6_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        P::mul_fp3_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        fe.mul_assign_by_fp(&Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD]);
    }
}

pub type Fp6<P> = QuadExtField<Fp6ParamsWrapper<P>>;

impl<P: Fp6Parameters> Fp6<P> {
    pub fn mul_by_fp(&mut self, element: &<P::Fp3Params as Fp3Parameters>::Fp) {
        self.c0.mul_assign_by_fp(element);
        self.c1.mul_assign_by_fp(element);
    }

    pub fn mul_by_fp3(&mut self, element: &Fp3<P::Fp3Params>) {
        self.c0 *= element;
        self.c1 *= element;
    }
}
