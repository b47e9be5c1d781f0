//! Concrete fields and curves for `algebra-core`: the pairing-friendly
//! BLS12-381, BN254 and MNT4/6-298 engines, the Jubjub twisted Edwards
//! curve and secp256k1. Every curve sits behind a cargo feature of the
//! same name.
#![deny(unused_import_braces, unused_qualifications, trivial_casts)]
#![deny(trivial_numeric_casts, variant_size_differences)]
#![deny(non_shorthand_field_patterns, unused_attributes, unused_imports)]
#![deny(unused_extern_crates, renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![deny(unused_mut, unused_unsafe)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[macro_use]
mod tests;

pub use algebra_core::*;

#[cfg(any(feature = "bls12_381", feature = "ed_on_bls12_381"))]
pub mod bls12_381;
#[cfg(feature = "bls12_381")]
pub use bls12_381::Bls12_381;

#[cfg(feature = "bn254")]
pub mod bn254;
#[cfg(feature = "bn254")]
pub use bn254::Bn254;

#[cfg(feature = "mnt4_298")]
pub mod mnt4_298;
#[cfg(feature = "mnt4_298")]
pub use mnt4_298::MNT4_298;

#[cfg(feature = "mnt6_298")]
pub mod mnt6_298;
#[cfg(feature = "mnt6_298")]
pub use mnt6_298::MNT6_298;

#[cfg(feature = "ed_on_bls12_381")]
pub mod ed_on_bls12_381;

#[cfg(feature = "secp256k1")]
pub mod secp256k1;
