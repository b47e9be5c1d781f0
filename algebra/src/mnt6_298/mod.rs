//! MNT6-298, the 298-bit Miyaji-Nakabayashi-Takano curve of embedding
//! degree 6 that closes the cycle with MNT4-298.
//!
//! Curve information:
//! * Base field: q = 475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137
//! * Scalar field: r = 475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081
//! * G1 curve equation: y^2 = x^3 + 11 x + b
//! * G2 curve equation: y^2 = x^3 + 11 X^2 x + b X^3 over Fq3 = Fq[X]/(X^3 - 5)

#[cfg(feature = "mnt6_298")]
mod curves;
mod fields;

#[cfg(feature = "mnt6_298")]
pub use curves::*;
pub use fields::*;
