use crate::mnt4_298::{self, Fq, Fq2, Fr, G1_COEFF_A_NON_RESIDUE, FQ_ZERO};
use algebra_core::{
    biginteger::BigInt,
    curves::{
        mnt4,
        models::{ModelParameters, SWModelParameters},
    },
    field_new,
};

pub type G2Affine = mnt4::G2Affine<mnt4_298::Parameters>;
pub type G2Projective = mnt4::G2Projective<mnt4_298::Parameters>;
pub type G2Prepared = mnt4::G2Prepared<mnt4_298::Parameters>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq2;
    type ScalarField = Fr;
}

impl SWModelParameters for Parameters {
    /// COEFF_A = a * X^2 = (34, 0)
    const COEFF_A: Fq2 = field_new!(Fq2, G1_COEFF_A_NON_RESIDUE, FQ_ZERO);

    /// COEFF_B = b * X^3
    /// = (0, 67372828414711144619833451280373307321534573815811166723479321465776723059456513877937430)
    #[rustfmt::skip]
    const COEFF_B: Fq2 = field_new!(Fq2,
        FQ_ZERO,
        field_new!(Fq, BigInt([
            0x83fe40c4d1567e3b,
            0xba02dace3054677d,
            0x1453aa2f8110c177,
            0x407cb271ddb823fa,
            0x196f5debb6c,
        ])),
    );

    /// COFACTOR =
    /// 475922286169261325753349249653048451545124879932565935237842521413255878328503110407553025
    #[rustfmt::skip]
    const COFACTOR: &'static [u64] = &[
        0xd6d67810e2cc0001,
        0x880a7ab50fe2b151,
        0xcaeec9635d32203f,
        0xa266249da7b0548e,
        0x3bcf7bcd473,
    ];

    /// COFACTOR^(-1) mod r =
    /// 475922286169261325753349249653048451545124878207887910632124039320641839552134835598065665
    #[rustfmt::skip]
    const COFACTOR_INV: Fr = field_new!(Fr, BigInt([
        0x6fef8b0e4b5e0345,
        0x689ba5b3b1ea7f10,
        0xa5e24d5ba466c5d,
        0x57ed4a84e9933918,
        0x1b464609c04,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (G2_GENERATOR_X, G2_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G2_GENERATOR_X, G2_GENERATOR_Y);
}

const G2_GENERATOR_X: Fq2 = field_new!(Fq2, G2_GENERATOR_X_C0, G2_GENERATOR_X_C1);
const G2_GENERATOR_Y: Fq2 = field_new!(Fq2, G2_GENERATOR_Y_C0, G2_GENERATOR_Y_C1);

// Generator of G2
// These are two Fq elements each because X and Y (and Z) are elements of Fq^2
// X = 438374926219350099854919100077809681842783509163790991847867546339851681564223481322252708,
// 37620953615500480110935514360923278605464476459712393277679280819942849043649216370485641,
// Y = 37437409008528968268352521034936931842973546441370663118543015118291998305624025037512482,
// 424621479598893882672393190337420680597584695892317197646113820787463109735345923009077489,
#[rustfmt::skip]
pub const G2_GENERATOR_X_C0: Fq = field_new!(Fq, BigInt([
    0x4a56b87bf6e3bbf2,
    0x2540055a02dbe484,
    0x40fdc053176b14fe,
    0x909fe4b201a779ae,
    0x178e1c4e680,
]));
#[rustfmt::skip]
pub const G2_GENERATOR_X_C1: Fq = field_new!(Fq, BigInt([
    0x1d9e9b91f772f70,
    0xd5a6dac8c5ab51c2,
    0xfd90c8649f6452a5,
    0x7e38904fbe0dfae2,
    0x2186470a169,
]));
#[rustfmt::skip]
pub const G2_GENERATOR_Y_C0: Fq = field_new!(Fq, BigInt([
    0xead181e1ccdfa094,
    0xd837d925c1014f34,
    0x3728254a46d08bd6,
    0x7206e4a3c7ca1455,
    0x26768c82920,
]));
#[rustfmt::skip]
pub const G2_GENERATOR_Y_C1: Fq = field_new!(Fq, BigInt([
    0x1063f70c6460c54,
    0x783caeb87ed305ec,
    0xa0a5df3e419c22c6,
    0xf927cfd064735d73,
    0x1f8a707e350,
]));
