use crate::mnt4_298::{Fq, FQ_ONE};
use algebra_core::{
    biginteger::BigInt,
    field_new,
    fields::{Fp2, Fp2Parameters},
};

pub type Fq2 = Fp2<Fq2Parameters>;

pub struct Fq2Parameters;

impl Fp2Parameters for Fq2Parameters {
    type Fp = Fq;

    /// NONRESIDUE = 17
    #[rustfmt::skip]
    const NONRESIDUE: Fq = field_new!(Fq, BigInt([
        0x259ae5b7c4d1ca15,
        0xbc20e3dfe73f0ac3,
        0x97505c422d1f08e7,
        0x49d149cf165e1b2c,
        0x3a87fe6a0cc,
    ]));

    /// Coefficients for the Frobenius automorphism.
    /// c1[0] = 1,
    /// c1[1] = 475922286169261325753349249653048451545124879242694725395555128576210262817955800483758080
    #[rustfmt::skip]
    const FROBENIUS_COEFF_FP2_C1: &'static [Fq] = &[
        FQ_ONE,
        field_new!(Fq, BigInt([
            0xb049bbdf19027ba5,
            0x57cb69486d69801d,
            0x50f43dc341885a9,
            0x794de405433502f7,
            0x1fbd57fa0b0,
        ])),
    ];
}
