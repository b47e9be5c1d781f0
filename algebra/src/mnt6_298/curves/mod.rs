use algebra_core::{
    biginteger::{BigInt, BigInteger320 as BigInteger},
    curves::models::mnt6::{MNT6Parameters, MNT6},
    field_new,
    fields::Fp3,
};

use crate::mnt6_298::{Fq, Fq3, Fq3Parameters, Fq6Parameters, Fr, FQ_ONE, FQ_ZERO};

pub mod g1;
pub mod g2;

#[cfg(test)]
mod tests;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

pub type MNT6_298 = MNT6<Parameters>;

pub struct Parameters;

impl MNT6Parameters for Parameters {
    const TWIST: Fp3<Self::Fp3Params> = field_new!(Fq3, FQ_ZERO, FQ_ONE, FQ_ZERO);
    // A coefficient of MNT6-298 G2 =
    // ```
    // mnt6_twist_coeff_a = mnt6_Fq3(mnt6_Fq::zero(), mnt6_Fq::zero(),
    //                                  mnt6_G1::coeff_a);
    //  = (ZERO, ZERO, A_COEFF);
    // ```
    #[rustfmt::skip]
    const TWIST_COEFF_A: Fp3<Self::Fp3Params> = field_new!(Fq3,
        FQ_ZERO,
        FQ_ZERO,
        G1_COEFF_A,
    );

    /// ATE_LOOP_COUNT = |-689871209842287392837045615510547309923794944|
    const ATE_LOOP_COUNT: &'static [u64] = &[0xdc9a1b671660000, 0x46609756bec2a33f, 0x1eef55];
    #[rustfmt::skip]
    const WNAF: &'static [i32] = &[
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1, 0, 1, 0, -1, 0, -1,
        0, 1, 0, 0, -1, 0, 0, 1, 0, -1, 0, -1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 1, 0, -1,
        0, 1, 0, 1, 0, 0, -1, 0, 0, -1, 0, 0, 1, 0, 0, 0, -1, 0, 0, 0, 0, 0, 1, 0,
        -1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, -1, 0, -1, 0, 0, 0, 0, 0, -1, 0,
        -1, 0, 0, -1, 0, -1, 0, -1, 0, 0, 0, -1, 0, 1, 0, 1, 0, 0, 0, 0, 0, -1, 0, 1,
        0, -1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, -1, 0, 0, 0, -1, 0, 0, 0,
        -1, 0, 0, 0, 0,
    ];
    const ATE_IS_LOOP_COUNT_NEG: bool = true;
    const FINAL_EXPONENT_LAST_CHUNK_1: BigInteger = BigInt([
        0x1,
        0x0,
        0x0,
        0x0,
        0x0,
    ]);
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool = true;
    /// |W0| = 689871209842287392837045615510547309923794944
    #[rustfmt::skip]
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: BigInteger = BigInt([
        0xdc9a1b671660000,
        0x46609756bec2a33f,
        0x1eef55,
        0x0,
        0x0,
    ]);
    type Fp = Fq;
    type Fr = Fr;
    type Fp3Params = Fq3Parameters;
    type Fp6Params = Fq6Parameters;
    type G1Parameters = g1::Parameters;
    type G2Parameters = g2::Parameters;
}

// 11
#[rustfmt::skip]
pub const G1_COEFF_A: Fq = field_new!(Fq, BigInt([
    0xb9b2411bfd0eafef,
    0xc61a10fadd9fecbd,
    0x89f128e59811f3fb,
    0x980c0f780adadabb,
    0x9ba1f11320,
]));
