use algebra_core::{
    biginteger::{BigInt, BigInteger256 as BigInteger},
    field_new,
    fields::{Fp256, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl FpParameters<4> for FrParameters {
    /// MODULUS = 21888242871839275222246405745257275088548364400416034343698204186575808495617
    #[rustfmt::skip]
    const MODULUS: BigInteger = BigInt([
        0x43e1f593f0000001,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]);

    const MODULUS_BITS: u32 = 254;


    const REPR_SHAVE_BITS: u32 = 2;

    #[rustfmt::skip]
    const R: BigInteger = BigInt([
        0xac96341c4ffffffb,
        0x36fc76959f60cd29,
        0x666ea36f7879462e,
        0xe0a77c19a07df2f,
    ]);

    #[rustfmt::skip]
    const R2: BigInteger = BigInt([
        0x1bb8e645ae216da7,
        0x53fe3ab1e35c59e3,
        0x8c49833d53bb8085,
        0x216d0b17f4e44a5,
    ]);

    const INV: u64 = 0xc2e1f593efffffff;

    /// GENERATOR = 5
    #[rustfmt::skip]
    const GENERATOR: BigInteger = BigInt([
        0x1b0d0ef99fffffe6,
        0xeaba68a3a32a913f,
        0x47d8eb76d8dd0689,
        0x15d0085520f5bbc3,
    ]);

    const TWO_ADICITY: u32 = 28;

    /// TWO_ADIC_ROOT_OF_UNITY = GENERATOR^T
    #[rustfmt::skip]
    const TWO_ADIC_ROOT_OF_UNITY: BigInteger = BigInt([
        0x636e735580d13d9c,
        0xa22bf3742445ffd6,
        0x56452ac01eb203d8,
        0x1860ef942963f9e7,
    ]);

    #[rustfmt::skip]
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0xa1f0fac9f8000000,
        0x9419f4243cdcb848,
        0xdc2822db40c0ac2e,
        0x183227397098d014,
    ]);

    #[rustfmt::skip]
    const T: BigInteger = BigInt([
        0x9b9709143e1f593f,
        0x181585d2833e8487,
        0x131a029b85045b68,
        0x30644e72e,
    ]);

    #[rustfmt::skip]
    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0xcdcb848a1f0fac9f,
        0xc0ac2e9419f4243,
        0x98d014dc2822db4,
        0x183227397,
    ]);
}

pub const FR_ONE: Fr = field_new!(Fr, FrParameters::R);
pub const FR_ZERO: Fr = field_new!(Fr, BigInt([0, 0, 0, 0]));
