//! Jubjub, the twisted Edwards curve defined over the scalar field of
//! BLS12-381, so that its arithmetic is native to BLS12-381 circuits.
//!
//! Curve information:
//! * Base field: q = 52435875175126190479447740508185965837690552500527637822603658699938581184513
//! * Scalar field: r = 6554484396890773809930967563523245729705921265872317281365359162392183254199
//! * Curve equation: -x^2 + y^2 = 1 + d x^2 y^2, with d = -(10240/10241)
//! * Cofactor: 8

mod curves;
mod fields;

pub use curves::*;
pub use fields::*;
