use crate::ed_on_bls12_381::{Fq, Fr};
use algebra_core::{
    biginteger::BigInt,
    curves::{
        models::{ModelParameters, TEModelParameters},
        twisted_edwards_extended::{GroupAffine, GroupProjective},
    },
    field_new,
};

#[cfg(test)]
mod tests;

pub type EdwardsAffine = GroupAffine<EdwardsParameters>;
pub type EdwardsProjective = GroupProjective<EdwardsParameters>;

#[rustfmt::skip]
const GENERATOR_X: Fq = field_new!(Fq, BigInt([
    0xc36773a20b8cd18b,
    0x38f761d466279485,
    0x73176c042474bb50,
    0x66b35f6130ad449e,
]));
#[rustfmt::skip]
const GENERATOR_Y: Fq = field_new!(Fq, BigInt([
    0xb9ccd5e5ad78c3e5,
    0x6a39c13d7a1a45dd,
    0x6f8c61fa9a789920,
    0x4802cfbd99d05a1d,
]));

/// `JubJub` is a twisted Edwards curve. These curves have equations of the
/// form: ax² + y² = 1 + dx²y².
/// over some base finite field Fq.
///
/// JubJub's curve equation: -x² + y² = 1 - (10240/10241)x²y²
///
/// q = 52435875175126190479447740508185965837690552500527637822603658699938581184513.
///
/// a = -1.
/// d = -(10240/10241) mod q
///   = 19257038036680949359750312669786877991949435402254120286184196891950884077233.
///
/// Sage script to calculate these:
///
/// ```text
/// q = 52435875175126190479447740508185965837690552500527637822603658699938581184513
/// Fq = GF(q)
/// d = -(Fq(10240)/Fq(10241))
/// ```
/// These parameters and the sage script obtained from:
/// <https://github.com/zcash/zcash/issues/2230#issuecomment-317182190>
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EdwardsParameters;

impl ModelParameters for EdwardsParameters {
    type BaseField = Fq;
    type ScalarField = Fr;
}

impl TEModelParameters for EdwardsParameters {
    /// COEFF_A = -1
    #[rustfmt::skip]
    const COEFF_A: Fq = field_new!(Fq, BigInt([
        0xfffffffd00000003,
        0xfb38ec08fffb13fc,
        0x99ad88181ce5880f,
        0x5bc8f5f97cd877d8,
    ]));

    /// COEFF_D = -(10240/10241) mod q
    #[rustfmt::skip]
    const COEFF_D: Fq = field_new!(Fq, BigInt([
        0x2a522455b974f6b0,
        0xfc6cc9ef0d9acab3,
        0x7a08fb94c27628d1,
        0x57f8f6a8fe0e262e,
    ]));

    /// COFACTOR = 8
    const COFACTOR: &'static [u64] = &[8];

    /// COFACTOR^(-1) mod r =
    /// 819310549611346726241370945440405716213240158234039660170669895299022906775
    #[rustfmt::skip]
    const COFACTOR_INV: Fr = field_new!(Fr, BigInt([
        0x5ed1e3425211a692,
        0xb32fbed8666fdefa,
        0xf33189fdfd9789fe,
        0x304962b3598a0ad,
    ]));

    /// AFFINE_GENERATOR_COEFFS = (GENERATOR_X, GENERATOR_Y)
    const AFFINE_GENERATOR_COEFFS: (Self::BaseField, Self::BaseField) = (GENERATOR_X, GENERATOR_Y);

    /// Multiplication by `a` is simply negation here.
    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        -(*elem)
    }
}
