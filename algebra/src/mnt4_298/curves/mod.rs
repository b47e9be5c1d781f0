use algebra_core::{
    biginteger::{BigInt, BigInteger320 as BigInteger},
    curves::models::mnt4::{MNT4Parameters, MNT4},
    field_new,
    fields::Fp2,
};

use crate::mnt4_298::{Fq, Fq2, Fq2Parameters, Fq4Parameters, Fr, FQ_ONE, FQ_ZERO};

pub mod g1;
pub mod g2;

#[cfg(test)]
mod tests;

pub use self::{
    g1::{G1Affine, G1Prepared, G1Projective},
    g2::{G2Affine, G2Prepared, G2Projective},
};

pub type MNT4_298 = MNT4<Parameters>;

pub struct Parameters;

impl MNT4Parameters for Parameters {
    const TWIST: Fp2<Self::Fp2Params> = field_new!(Fq2, FQ_ZERO, FQ_ONE);
    // a of the twist: (G1 a * NONRESIDUE, 0) = (34, 0)
    #[rustfmt::skip]
    const TWIST_COEFF_A: Fp2<Self::Fp2Params> = field_new!(Fq2,
        G1_COEFF_A_NON_RESIDUE,
        FQ_ZERO,
    );

    /// ATE_LOOP_COUNT = 689871209842287392837045615510547309923794944
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
    const ATE_IS_LOOP_COUNT_NEG: bool = false;
    const FINAL_EXPONENT_LAST_CHUNK_1: BigInteger = BigInt([
        0x1,
        0x0,
        0x0,
        0x0,
        0x0,
    ]);
    const FINAL_EXPONENT_LAST_CHUNK_W0_IS_NEG: bool = false;
    /// |W0| = 689871209842287392837045615510547309923794945
    #[rustfmt::skip]
    const FINAL_EXPONENT_LAST_CHUNK_ABS_OF_W0: BigInteger = BigInt([
        0xdc9a1b671660001,
        0x46609756bec2a33f,
        0x1eef55,
        0x0,
        0x0,
    ]);
    type Fp = Fq;
    type Fr = Fr;
    type Fp2Params = Fq2Parameters;
    type Fp4Params = Fq4Parameters;
    type G1Parameters = g1::Parameters;
    type G2Parameters = g2::Parameters;
}

// 34
#[rustfmt::skip]
pub const G1_COEFF_A_NON_RESIDUE: Fq = field_new!(Fq, BigInt([
    0x8228f515183d9429,
    0x3697e4617d5e0773,
    0x63b1ef20fd2ae0e5,
    0xf13c6f00850be1ca,
    0x39408106d24,
]));
