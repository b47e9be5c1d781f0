//! secp256k1, the prime-order short Weierstrass curve of the SEC 2 standard
//! used for ECDSA and Schnorr signatures in Bitcoin. It is not
//! pairing-friendly.
//!
//! Curve information:
//! * Base field: q = 115792089237316195423570985008687907853269984665640564039457584007908834671663
//! * Scalar field: r = 115792089237316195423570985008687907852837564279074904382605163141518161494337
//! * valuation(q - 1, 2) = 1
//! * valuation(r - 1, 2) = 6
//! * Curve equation: y^2 = x^3 + 7

#[cfg(feature = "secp256k1")]
mod curves;
mod fields;

#[cfg(feature = "secp256k1")]
pub use curves::*;
pub use fields::*;
