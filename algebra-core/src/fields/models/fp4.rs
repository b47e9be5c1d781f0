use super::quadratic_extension::*;
use crate::fields::{Fp2, Fp2Parameters};
use core::marker::PhantomData;

/// `Fp4 = Fp2[Y]/(Y^2 - u)` where `Fp2 = Fp[u]/(u^2 - alpha)`.
pub trait Fp4Parameters: 'static + Send + Sync {
    type Fp2Params: Fp2Parameters;

    /// The Fp2 non-residue `alpha`, so that multiplying by `u` is the linear
    /// map `(c0, c1) -> (alpha * c1, c0)`.
    const NONRESIDUE: <Self::Fp2Params as Fp2Parameters>::Fp;

    /// Coefficients for the Frobenius automorphism.
    /// non_residue^((modulus^i-1)/4) for i=0,1,2,3
    const FROBENIUS_COEFF_FP4_C1: &'static [<Self::Fp2Params as Fp2Parameters>::Fp];

    #[inline(always)]
    fn mul_fp2_by_nonresidue(fe: &Fp2<Self::Fp2Params>) -> Fp2<Self::Fp2Params> {
        Fp2::new(Self::NONRESIDUE * &fe.c1, fe.c0)
    }
}

pub struct Fp4ParamsWrapper<P: Fp4Parameters>(PhantomData<P>);

impl<P: Fp4Parameters> QuadExtParameters for Fp4ParamsWrapper<P> {
    type BasePrimeField = <P::Fp2Params as Fp2Parameters>::Fp;
    type BaseField = Fp2<P::Fp2Params>;
    type FrobCoeff = Self::BasePrimeField;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 4;

    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP4_C1;

    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        P::mul_fp2_by_nonresidue(fe)
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        fe.mul_assign_by_fp(&Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD]);
    }
}

pub type Fp4<P> = QuadExtField<Fp4ParamsWrapper<P>>;

impl<P: Fp4Parameters> Fp4<P> {
    pub fn mul_by_fp(&mut self, element: &<P::Fp2Params as Fp2Parameters>::Fp) {
        self.c0.mul_assign_by_fp(element);
        self.c1.mul_assign_by_fp(element);
    }

    pub fn mul_by_fp2(&mut self, element: &Fp2<P::Fp2Params>) {
        self.c0 *= element;
        self.c1 *= element;
    }
}
