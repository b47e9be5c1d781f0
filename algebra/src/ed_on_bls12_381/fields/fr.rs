use algebra_core::{
    biginteger::{BigInt, BigInteger256 as BigInteger},
    fields::{Fp256, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl FpParameters<4> for FrParameters {
    /// MODULUS = 6554484396890773809930967563523245729705921265872317281365359162392183254199
    #[rustfmt::skip]
    const MODULUS: BigInteger = BigInt([
        0xd0970e5ed6f72cb7,
        0xa6682093ccc81082,
        0x6673b0101343b00,
        0xe7db4ea6533afa9,
    ]);

    const MODULUS_BITS: u32 = 252;


    const REPR_SHAVE_BITS: u32 = 4;

    #[rustfmt::skip]
    const R: BigInteger = BigInt([
        0x25f80bb3b99607d9,
        0xf315d62f66b6e750,
        0x932514eeeb8814f4,
        0x9a6fc6f479155c6,
    ]);

    #[rustfmt::skip]
    const R2: BigInteger = BigInt([
        0x67719aa495e57731,
        0x51b0cef09ce3fc26,
        0x69dab7fac026e9a5,
        0x4f6547b8d127688,
    ]);

    const INV: u64 = 0x1ba3a358ef788ef9;

    /// GENERATOR = 6
    #[rustfmt::skip]
    const GENERATOR: BigInteger = BigInt([
        0x720b1b19d49ea8f1,
        0xbf4aa36101f13a58,
        0x5fa8cc968193ccbb,
        0xe70cbdc7dccf3ac,
    ]);

    const TWO_ADICITY: u32 = 1;

    /// TWO_ADIC_ROOT_OF_UNITY = GENERATOR^T
    #[rustfmt::skip]
    const TWO_ADIC_ROOT_OF_UNITY: BigInteger = BigInt([
        0xaa9f02ab1d6124de,
        0xb3524a6466112932,
        0x7342261215ac260b,
        0x4d6b87b1da259e2,
    ]);

    #[rustfmt::skip]
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0x684b872f6b7b965b,
        0x53341049e6640841,
        0x83339d80809a1d80,
        0x73eda753299d7d4,
    ]);

    #[rustfmt::skip]
    const T: BigInteger = BigInt([
        0x684b872f6b7b965b,
        0x53341049e6640841,
        0x83339d80809a1d80,
        0x73eda753299d7d4,
    ]);

    #[rustfmt::skip]
    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0xb425c397b5bdcb2d,
        0x299a0824f3320420,
        0x4199cec0404d0ec0,
        0x39f6d3a994cebea,
    ]);
}
