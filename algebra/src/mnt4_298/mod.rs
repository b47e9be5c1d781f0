//! MNT4-298, the 298-bit Miyaji-Nakabayashi-Takano curve of embedding
//! degree 4. Its scalar field is the base field of MNT6-298 and vice versa,
//! so the two curves form a cycle.
//!
//! Curve information:
//! * Base field: q = 475922286169261325753349249653048451545124879242694725395555128576210262817955800483758081
//! * Scalar field: r = 475922286169261325753349249653048451545124878552823515553267735739164647307408490559963137
//! * G1 curve equation: y^2 = x^3 + 2 x + b
//! * G2 curve equation: y^2 = x^3 + 2 X^2 x + b X^3 over Fq2 = Fq[X]/(X^2 - 17)

#[cfg(feature = "mnt4_298")]
mod curves;
mod fields;

#[cfg(feature = "mnt4_298")]
pub use curves::*;
pub use fields::*;
