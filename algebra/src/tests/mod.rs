#[macro_use]
pub(crate) mod macros;
pub(crate) mod curves;
pub(crate) mod fields;
pub(crate) mod msm;
pub(crate) mod pairings;
