use crate::mnt6_298::{self, Fq, Fq3, Fr, FQ_ZERO, G1_COEFF_A};
use algebra_core::{
    biginteger::BigInt,
    curves::{
        mnt6,
        models::{ModelParameters, SWModelParameters},
    },
    field_new,
};

pub type G2Affine = mnt6::G2Affine<mnt6_298::Parameters>;
pub type G2Projective = mnt6::G2Projective<mnt6_298::Parameters>;
pub type G2Prepared = mnt6::G2Prepared<mnt6_298::Parameters>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq3;
    type ScalarField = Fr;
}

impl SWModelParameters for Parameters {
    /// COEFF_A = a * X^2 = (0, 0, 11)
    const COEFF_A: Fq3 = field_new!(Fq3, FQ_ZERO, FQ_ZERO, G1_COEFF_A);

    /// COEFF_B = b * X^3
    /// = (57578116384997352636487348509878309737146377454014423897662211075515354005624851787652233, 0, 0)
    #[rustfmt::skip]
    const COEFF_B: Fq3 = field_new!(Fq3,
        field_new!(Fq, BigInt([
            0x79a4c2cea3c84026,
            0x4b50cad0f3233baa,
            0x9ded82770e7a4410,
            0x5ade8b105838b95d,
            0xe4036e0a3a,
        ])),
        FQ_ZERO,
        FQ_ZERO,
    );

    /// COFACTOR =
    /// 226502022472576270196498690498308461791828762732602586162207535351960270082712694977333372361549082214519252261735048131889018501404377856786623430385820659037970876666767495659520
    #[rustfmt::skip]
    const COFACTOR: &'static [u64] = &[
        0xd4719dec00000000,
        0x94104081d31771ef,
        0x3f4d65a5b22e7f61,
        0x33124e28403e0b41,
        0xf096e99fb6a637b9,
        0x95209870c0f7ffbb,
        0xf292d23620350240,
        0xe98b8b1cd454f1a1,
        0x3a10ace4c868d35e,
        0xdf94b,
    ];

    /// COFACTOR^(-1) mod r =
    /// 79320381028210220958891541608841408590854146655427655872973753568875979721417185067925504
    #[rustfmt::skip]
    const COFACTOR_INV: Fr = field_new!(Fr, BigInt([
        0x5103509eae622820,
        0x6ce21f8dbacd0a54,
        0xa8e5b5022896a9fc,
        0x607588801de0989f,
        0x17d05fac39,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G2_GENERATOR_X, G2_GENERATOR_Y);
}

#[rustfmt::skip]
const G2_GENERATOR_X: Fq3 = field_new!(Fq3,
    field_new!(Fq, BigInt([
        0x15ca12fc5d551ea7,
        0x9e0b2b2b2bb8b979,
        0xe6e66283ad5a786a,
        0x46ba0aedcc383c07,
        0x243853463ed,
    ])),
    field_new!(Fq, BigInt([
        0x2c0e3dd7be176130,
        0x27a15d879495904b,
        0x6f1f0d2dd1502a82,
        0x9782ee3c70834da,
        0x2c28bb71862,
    ])),
    field_new!(Fq, BigInt([
        0xf3e5f4eb9631e1f1,
        0x657801e80c50778,
        0x2d2abb128fee90f3,
        0x72e58e4c3aa3598c,
        0x100b8026b9d,
    ])),
);

#[rustfmt::skip]
const G2_GENERATOR_Y: Fq3 = field_new!(Fq3,
    field_new!(Fq, BigInt([
        0xb1cddd6c64a67c5f,
        0xa01e90d89aa5d2ba,
        0x39e9a733be49ed1,
        0x9438f46f63d3264f,
        0x12cc928ef10,
    ])),
    field_new!(Fq, BigInt([
        0xa1529b7265ad4be7,
        0x21c5e827cf309306,
        0x9b3d647bd8c70b22,
        0x42835bf373e4b213,
        0xd3c77c9ff9,
    ])),
    field_new!(Fq, BigInt([
        0x610557ec4b58b8df,
        0x51a23865b52045f1,
        0x9dcfd915a09da608,
        0x6d65c95f69adb700,
        0x2d3c3d195a1,
    ])),
);
