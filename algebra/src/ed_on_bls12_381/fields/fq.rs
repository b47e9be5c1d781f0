pub use crate::bls12_381::{Fr as Fq, FrParameters as FqParameters};
