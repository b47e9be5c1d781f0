use algebra_core::{
    biginteger::{BigInt, BigInteger256 as BigInteger},
    field_new,
    fields::{Fp256, FpParameters},
};

pub type Fq = Fp256<FqParameters>;

pub struct FqParameters;

impl FpParameters<4> for FqParameters {
    /// MODULUS = 115792089237316195423570985008687907853269984665640564039457584007908834671663
    #[rustfmt::skip]
    const MODULUS: BigInteger = BigInt([
        0xfffffffefffffc2f,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
    ]);

    const MODULUS_BITS: u32 = 256;


    const REPR_SHAVE_BITS: u32 = 0;

    #[rustfmt::skip]
    const R: BigInteger = BigInt([
        0x1000003d1,
        0x0,
        0x0,
        0x0,
    ]);

    #[rustfmt::skip]
    const R2: BigInteger = BigInt([
        0x7a2000e90a1,
        0x1,
        0x0,
        0x0,
    ]);

    const INV: u64 = 0xd838091dd2253531;

    /// GENERATOR = 3
    #[rustfmt::skip]
    const GENERATOR: BigInteger = BigInt([
        0x300000b73,
        0x0,
        0x0,
        0x0,
    ]);

    const TWO_ADICITY: u32 = 1;

    /// TWO_ADIC_ROOT_OF_UNITY = GENERATOR^T
    #[rustfmt::skip]
    const TWO_ADIC_ROOT_OF_UNITY: BigInteger = BigInt([
        0xfffffffdfffff85e,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
    ]);

    #[rustfmt::skip]
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0xffffffff7ffffe17,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x7fffffffffffffff,
    ]);

    #[rustfmt::skip]
    const T: BigInteger = BigInt([
        0xffffffff7ffffe17,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x7fffffffffffffff,
    ]);

    #[rustfmt::skip]
    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0xffffffffbfffff0b,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0x3fffffffffffffff,
    ]);
}

pub const FQ_ONE: Fq = field_new!(Fq, FqParameters::R);
pub const FQ_ZERO: Fq = field_new!(Fq, BigInt([0, 0, 0, 0]));
