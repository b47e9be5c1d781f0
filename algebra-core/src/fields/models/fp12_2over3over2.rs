use super::quadratic_extension::*;
use crate::fields::{fp6_3over2::*, Field, Fp2, Fp2Parameters};
use core::marker::PhantomData;

type Fp2Params<P> = <<P as Fp12Parameters>::Fp6Params as Fp6Parameters>::Fp2Params;

/// `Fp12 = Fp6[w]/(w^2 - v)`.
pub trait Fp12Parameters: 'static + Send + Sync {
    type Fp6Params: Fp6Parameters;

    /// Coefficients for the Frobenius automorphism:
    /// `xi^((p^i - 1) / 6)` for `i = 0, ..., 11`.
    const FROBENIUS_COEFF_FP12_C1: &'static [Fp2<Fp2Params<Self>>];
}

pub struct Fp12ParamsWrapper<P: Fp12Parameters>(PhantomData<P>);

impl<P: Fp12Parameters> QuadExtParameters for Fp12ParamsWrapper<P> {
    type BasePrimeField = <Fp2Params<P> as Fp2Parameters>::Fp;
    type BaseField = Fp6<P::Fp6Params>;
    type FrobCoeff = Fp2<Fp2Params<P>>;

    const DEGREE_OVER_BASE_PRIME_FIELD: usize = 12;

    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff] = P::FROBENIUS_COEFF_FP12_C1;

    /// Multiplication by `w^2 = v`.
    #[inline(always)]
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField {
        fe.mul_by_nonresidue()
    }

    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize) {
        fe.mul_by_fp2(&Self::FROBENIUS_COEFF_C1[power % Self::DEGREE_OVER_BASE_PRIME_FIELD]);
    }

    fn cyclotomic_square(fe: &Fp12<P>) -> Fp12<P> {
        // Granger and Scott, "Faster Squaring in the Cyclotomic Subgroup of
        // Sixth Degree Extensions", Section 3.2
        let fp2_nr = <P::Fp6Params as Fp6Parameters>::mul_fp2_by_nonresidue;

        let r0 = &fe.c0.c0;
        let r4 = &fe.c0.c1;
        let r3 = &fe.c0.c2;
        let r2 = &fe.c1.c0;
        let r1 = &fe.c1.c1;
        let r5 = &fe.c1.c2;

        // (z0 + z1 * w^3)^2 over Fp4
        let fp4_square = |a: &Fp2<Fp2Params<P>>, b: &Fp2<Fp2Params<P>>| {
            let tmp = *a * b;
            let c0 = (*a + b) * &(fp2_nr(b) + a) - &tmp - &fp2_nr(&tmp);
            (c0, tmp.double())
        };
        let (t0, t1) = fp4_square(r0, r1);
        let (t2, t3) = fp4_square(r2, r3);
        let (t4, t5) = fp4_square(r4, r5);

        // 3 * t - 2 * z
        let sub_twice = |t: &Fp2<Fp2Params<P>>, z: &Fp2<Fp2Params<P>>| (*t - z).double() + t;
        // 3 * t + 2 * z
        let add_twice = |t: &Fp2<Fp2Params<P>>, z: &Fp2<Fp2Params<P>>| (*t + z).double() + t;

        let z0 = sub_twice(&t0, r0);
        let z1 = add_twice(&t1, r1);
        let z2 = add_twice(&fp2_nr(&t5), r2);
        let z3 = sub_twice(&t4, r3);
        let z4 = sub_twice(&t2, r4);
        let z5 = add_twice(&t3, r5);

        Fp12::new(Fp6::new(z0, z4, z3), Fp6::new(z2, z1, z5))
    }
}

pub type Fp12<P> = QuadExtField<Fp12ParamsWrapper<P>>;

impl<P: Fp12Parameters> Fp12<P> {
    /// Multiplies by the sparse line value `c0 + c1 * v + c4 * v * w`
    /// produced by M-type twists.
    pub fn mul_by_014(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c1: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let mut aa = self.c0;
        aa.mul_by_01(c0, c1);
        let mut bb = self.c1;
        bb.mul_by_1(c4);
        let o = *c1 + c4;
        self.c1 += &self.c0;
        self.c1.mul_by_01(c0, &o);
        self.c1 -= &aa;
        self.c1 -= &bb;
        self.c0 = bb.mul_by_nonresidue();
        self.c0 += &aa;
    }

    /// Multiplies by the sparse line value `c0 + c3 * w + c4 * v * w`
    /// produced by D-type twists.
    pub fn mul_by_034(
        &mut self,
        c0: &Fp2<Fp2Params<P>>,
        c3: &Fp2<Fp2Params<P>>,
        c4: &Fp2<Fp2Params<P>>,
    ) {
        let mut a = self.c0;
        a.mul_by_fp2(c0);
        let mut b = self.c1;
        b.mul_by_01(c3, c4);

        let c0 = *c0 + c3;
        let mut e = self.c0 + &self.c1;
        e.mul_by_01(&c0, c4);
        self.c1 = e - &(a + &b);
        self.c0 = a + &b.mul_by_nonresidue();
    }
}
