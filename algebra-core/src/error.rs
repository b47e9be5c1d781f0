use core::fmt;
use std::io;

/// Failures surfaced by field, curve and encoding operations.
///
/// Every variant is local to the value being processed; callers decide
/// whether to reject the input or retry with different data.
#[derive(Debug)]
pub enum AlgebraError {
    /// Attempted to invert the additive identity.
    DivisionByZero,
    /// Attempted to take the square root of a quadratic non-residue.
    NotQuadraticResidue,
    /// A byte string had the wrong length, carried an out-of-range value
    /// or an inconsistent flag combination.
    InvalidEncoding,
    /// Decoded coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// Decoded point lies on the curve but outside the prime-order subgroup.
    PointNotInSubgroup,
    /// A general addition or doubling formula was invoked on the identity.
    IdentityElementMisuse,
    /// The underlying reader or writer failed.
    IoError(io::Error),
}

impl std::error::Error for AlgebraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlgebraError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AlgebraError {
    fn from(e: io::Error) -> AlgebraError {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => AlgebraError::InvalidEncoding,
            _ => AlgebraError::IoError(e),
        }
    }
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            AlgebraError::DivisionByZero => write!(f, "attempted to invert zero"),
            AlgebraError::NotQuadraticResidue => {
                write!(f, "the element is not a quadratic residue")
            },
            AlgebraError::InvalidEncoding => {
                write!(f, "the input buffer does not hold a canonical encoding")
            },
            AlgebraError::PointNotOnCurve => write!(f, "the point is not on the curve"),
            AlgebraError::PointNotInSubgroup => {
                write!(f, "the point is not in the prime order subgroup")
            },
            AlgebraError::IdentityElementMisuse => write!(
                f,
                "a general group formula was applied to the identity element"
            ),
            AlgebraError::IoError(err) => write!(f, "I/O error: {:?}", err),
        }
    }
}
