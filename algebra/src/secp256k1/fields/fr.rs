use algebra_core::{
    biginteger::{BigInt, BigInteger256 as BigInteger},
    field_new,
    fields::{Fp256, FpParameters},
};

pub type Fr = Fp256<FrParameters>;

pub struct FrParameters;

impl FpParameters<4> for FrParameters {
    /// MODULUS = 115792089237316195423570985008687907852837564279074904382605163141518161494337
    #[rustfmt::skip]
    const MODULUS: BigInteger = BigInt([
        0xbfd25e8cd0364141,
        0xbaaedce6af48a03b,
        0xfffffffffffffffe,
        0xffffffffffffffff,
    ]);

    const MODULUS_BITS: u32 = 256;


    const REPR_SHAVE_BITS: u32 = 0;

    #[rustfmt::skip]
    const R: BigInteger = BigInt([
        0x402da1732fc9bebf,
        0x4551231950b75fc4,
        0x1,
        0x0,
    ]);

    #[rustfmt::skip]
    const R2: BigInteger = BigInt([
        0x896cf21467d7d140,
        0x741496c20e7cf878,
        0xe697f5e45bcd07c6,
        0x9d671cd581c69bc5,
    ]);

    const INV: u64 = 0x4b0dff665588b13f;

    /// GENERATOR = 7
    #[rustfmt::skip]
    const GENERATOR: BigInteger = BigInt([
        0xc13f6a264e843739,
        0xe537f5b135039e5d,
        0x8,
        0x0,
    ]);

    const TWO_ADICITY: u32 = 6;

    /// TWO_ADIC_ROOT_OF_UNITY = GENERATOR^T
    #[rustfmt::skip]
    const TWO_ADIC_ROOT_OF_UNITY: BigInteger = BigInt([
        0x944cf2a220910e04,
        0x815c829c780589f4,
        0x55980b07bc222113,
        0xc702b0d248825b36,
    ]);

    #[rustfmt::skip]
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0xdfe92f46681b20a0,
        0x5d576e7357a4501d,
        0xffffffffffffffff,
        0x7fffffffffffffff,
    ]);

    #[rustfmt::skip]
    const T: BigInteger = BigInt([
        0xeeff497a3340d905,
        0xfaeabb739abd2280,
        0xffffffffffffffff,
        0x3ffffffffffffff,
    ]);

    #[rustfmt::skip]
    const T_MINUS_ONE_DIV_TWO: BigInteger = BigInt([
        0x777fa4bd19a06c82,
        0xfd755db9cd5e9140,
        0xffffffffffffffff,
        0x1ffffffffffffff,
    ]);
}

pub const FR_ONE: Fr = field_new!(Fr, FrParameters::R);
pub const FR_ZERO: Fr = field_new!(Fr, BigInt([0, 0, 0, 0]));
