use crate::mnt4_298::{self, Fq, Fr, FR_ONE};
use algebra_core::{
    biginteger::BigInt,
    curves::{
        mnt4,
        models::{ModelParameters, SWModelParameters},
    },
    field_new,
};

pub type G1Affine = mnt4::G1Affine<mnt4_298::Parameters>;
pub type G1Projective = mnt4::G1Projective<mnt4_298::Parameters>;
pub type G1Prepared = mnt4::G1Prepared<mnt4_298::Parameters>;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Parameters;

impl ModelParameters for Parameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl SWModelParameters for Parameters {
    /// COEFF_A = 2
    #[rustfmt::skip]
    const COEFF_A: Fq = field_new!(Fq, BigInt([
        0x318634f6b0c708b8,
        0xd3bcf42bc76d1bea,
        0x8bbf0b0e51f55681,
        0x52308130c8f6a32f,
        0x382447a6786,
    ]));

    /// COEFF_B = 423894536526684178289416011533888240029318103673896002803341544124054745019340795360841685
    #[rustfmt::skip]
    const COEFF_B: Fq = field_new!(Fq, BigInt([
        0x6cd74067bbddcb31,
        0x3ffe4a5e33d7477,
        0x39c29c6219621ca5,
        0x4c2b62b6cfc1895f,
        0x169b131a14d,
    ]));

    /// COFACTOR = 1
    const COFACTOR: &'static [u64] = &[1];

    /// COFACTOR^(-1) mod r = 1
    const COFACTOR_INV: Fr = FR_ONE;

    /// AFFINE_GENERATOR_COEFFS = (G1_GENERATOR_X, G1_GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) =
        (G1_GENERATOR_X, G1_GENERATOR_Y);
}

// Generator of G1
// X = 60760244141852568949126569781626075788424196370144486719385562369396875346601926534016838,
// Y = 363732850702582978263902770815145784459747722357071843971107674179038674942891694705904306,
/// G1_GENERATOR_X
#[rustfmt::skip]
pub const G1_GENERATOR_X: Fq = field_new!(Fq, BigInt([
    0x53e8c71197d9f8b4,
    0xd1a0ccc72d575667,
    0xdaaf7bad5bfe5f43,
    0x54d91c797e47fb02,
    0x2c92de78361,
]));

/// G1_GENERATOR_Y
#[rustfmt::skip]
pub const G1_GENERATOR_Y: Fq = field_new!(Fq, BigInt([
    0x7a1a14f4dec3207d,
    0x87975c3ee01d86d3,
    0xf599a22085a378e8,
    0xd3ac75497936f0f8,
    0x37f5ae096e4,
]));
