use crate::mnt4_298::{Fq, Fq2Parameters, FQ_ONE};
use algebra_core::{
    biginteger::BigInt,
    field_new,
    fields::fp4::{Fp4, Fp4Parameters},
};

pub type Fq4 = Fp4<Fq4Parameters>;

pub struct Fq4Parameters;

impl Fp4Parameters for Fq4Parameters {
    type Fp2Params = Fq2Parameters;

    /// NONRESIDUE = 17, so that `Y^2 = X` with `X^2 = 17`.
    #[rustfmt::skip]
    const NONRESIDUE: Fq = field_new!(Fq, BigInt([
        0x259ae5b7c4d1ca15,
        0xbc20e3dfe73f0ac3,
        0x97505c422d1f08e7,
        0x49d149cf165e1b2c,
        0x3a87fe6a0cc,
    ]));

    // Coefficients for the Frobenius automorphism.
    // c1[0] = 1
    // c1[1] = 7684163245453501615621351552473337069301082060976805004625011694147890954040864167002308
    // c1[2] = 475922286169261325753349249653048451545124879242694725395555128576210262817955800483758080
    // c1[3] = 468238122923807824137727898100575114475823797181717920390930116882062371863914936316755773
    #[rustfmt::skip]
    const FROBENIUS_COEFF_FP4_C1: &'static [Fq] = &[
        FQ_ONE,
        field_new!(Fq, BigInt([
            0xe426145080bf2ee7,
            0xcd02cc9816da8a8d,
            0xe07b85760f50a074,
            0x3fb62479f705d41e,
            0x3772430e00d,
        ])),
        field_new!(Fq, BigInt([
            0xb049bbdf19027ba5,
            0x57cb69486d69801d,
            0x50f43dc341885a9,
            0x794de405433502f7,
            0x1fbd57fa0b0,
        ])),
        field_new!(Fq, BigInt([
            0xe4e6c209f0a6d11a,
            0x74a716c63a458384,
            0xea7343ed4dc29075,
            0x62b00023b0aa806f,
            0x45d38bf466,
        ])),
    ];
}
