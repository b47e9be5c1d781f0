//! BLS12-381, the Barreto-Lynn-Scott curve of embedding degree 12 with a
//! 381-bit base field, as used by Zcash Sapling and Ethereum 2.0.
//!
//! Curve information:
//! * Base field: q = 4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787
//! * Scalar field: r = 52435875175126190479447740508185965837690552500527637822603658699938581184513
//! * valuation(q - 1, 2) = 1
//! * valuation(r - 1, 2) = 32
//! * G1 curve equation: y^2 = x^3 + 4
//! * G2 curve equation: y^2 = x^3 + Fq2(4, 4), an M-type twist by (1 + u)

#[cfg(feature = "bls12_381")]
mod curves;
mod fields;

#[cfg(feature = "bls12_381")]
pub use curves::*;
pub use fields::*;
