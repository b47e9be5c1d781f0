//! Generic prime fields, extension towers, elliptic curve models and
//! pairing engines. Concrete curves instantiate these models with their
//! parameter constants.
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts, variant_size_differences)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_imports)]
#![deny(unused_extern_crates, renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![deny(unused_mut, unused_unsafe)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate derivative;

#[macro_use]
extern crate tracing;

#[macro_use]
pub mod serialize;
pub use self::serialize::*;

#[macro_use]
pub mod fields;
pub use self::fields::{
    batch_inversion, BitIteratorBE, Field, Fp, FpParameters, LegendreSymbol, PrimeField,
    SquareRootField,
};

pub mod biginteger;
pub use self::biginteger::{
    BigInt, BigInteger, BigInteger256, BigInteger320, BigInteger384, BigInteger64,
};

pub mod curves;
pub use self::curves::{
    prepare_g1, prepare_g2, AffineCurve, PairingEngine, ProjectiveCurve, WnafContext,
};

mod rand;
pub use self::rand::*;

mod error;
pub use self::error::*;

pub mod msm;
pub use self::msm::*;

pub use num_traits::{One, Zero};

pub mod prelude {
    pub use crate::biginteger::BigInteger;

    pub use crate::fields::{Field, FpParameters, PrimeField, SquareRootField};

    pub use crate::curves::{AffineCurve, PairingEngine, ProjectiveCurve};

    pub use crate::rand::UniformRand;

    pub use num_traits::{One, Zero};

    pub use crate::error::*;
}

/// Iterates over a collection in parallel when the `parallel` feature is
/// enabled, and sequentially otherwise.
#[macro_export]
macro_rules! cfg_iter_mut {
    ($e: expr) => {{
        #[cfg(feature = "parallel")]
        let result = $e.par_iter_mut();

        #[cfg(not(feature = "parallel"))]
        let result = $e.iter_mut();

        result
    }};
}

#[macro_export]
macro_rules! cfg_into_iter {
    ($e: expr) => {{
        #[cfg(feature = "parallel")]
        let result = $e.into_par_iter();

        #[cfg(not(feature = "parallel"))]
        let result = $e.into_iter();

        result
    }};
}

/// Returns the ceiling of the base-2 logarithm of `x`.
pub fn log2(x: usize) -> u32 {
    if x <= 1 {
        return 0;
    }

    let n = x.leading_zeros();
    usize::BITS - n - (x & (x - 1) == 0) as u32
}

#[cfg(test)]
mod tests {
    use super::log2;

    #[test]
    fn test_log2() {
        assert_eq!(log2(0), 0);
        assert_eq!(log2(1), 0);
        assert_eq!(log2(2), 1);
        assert_eq!(log2(3), 2);
        assert_eq!(log2(4), 2);
        assert_eq!(log2(5), 3);
        assert_eq!(log2(1 << 20), 20);
    }
}
