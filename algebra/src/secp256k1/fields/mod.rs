#[cfg(feature = "secp256k1")]
pub mod fr;
#[cfg(feature = "secp256k1")]
pub use self::fr::*;

#[cfg(feature = "secp256k1")]
pub mod fq;
#[cfg(feature = "secp256k1")]
pub use self::fq::*;

#[cfg(all(feature = "secp256k1", test))]
mod tests;
