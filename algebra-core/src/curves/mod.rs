use crate::{
    fields::{BitIteratorBE, Field, PrimeField, SquareRootField},
    AlgebraError, CanonicalDeserialize, CanonicalSerialize, UniformRand,
};
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    iter::Sum,
    ops::{Add, AddAssign, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::Zero;

pub mod models;
pub use self::models::*;

mod pairing;
pub use self::pairing::{prepare_g1, prepare_g2, PairingEngine};

pub mod wnaf;
pub use self::wnaf::WnafContext;

/// A curve point in a representation where the group law needs no
/// inversions. Implementors only hold points of the prime order subgroup.
pub trait ProjectiveCurve:
    Eq
    + 'static
    + Sized
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + UniformRand
    + Zero
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<<Self as ProjectiveCurve>::ScalarField>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Sum<Self>
    + for<'a> Sum<&'a Self>
    + From<<Self as ProjectiveCurve>::Affine>
{
    /// `h` such that the curve order is `h * r`, as little endian limbs.
    const COFACTOR: &'static [u64];
    type ScalarField: PrimeField + SquareRootField;
    type BaseField: Field;
    type Affine: AffineCurve<Projective = Self, ScalarField = Self::ScalarField, BaseField = Self::BaseField>
        + From<Self>
        + Into<Self>;

    #[must_use]
    fn prime_subgroup_generator() -> Self;

    /// Rescales every point to `Z = 1` with one shared inversion.
    fn batch_normalization(v: &mut [Self]);

    fn batch_normalization_into_affine(v: &[Self]) -> Vec<Self::Affine> {
        let mut points = v.to_vec();
        Self::batch_normalization(&mut points);
        points.into_iter().map(Into::into).collect()
    }

    /// Whether the affine coordinates can be read off without an inversion.
    #[must_use]
    fn is_normalized(&self) -> bool;

    #[must_use]
    fn double(&self) -> Self {
        let mut doubled = *self;
        doubled.double_in_place();
        doubled
    }

    fn double_in_place(&mut self) -> &mut Self;

    /// Applies the doubling formula directly. Fails with
    /// [`AlgebraError::IdentityElementMisuse`] when `self` is the identity
    /// and the formula of this model is not defined there.
    fn checked_double(&self) -> Result<Self, AlgebraError>;

    /// Applies the general addition formula directly. Fails with
    /// [`AlgebraError::IdentityElementMisuse`] when an operand is the
    /// identity and the formula of this model is not defined there.
    fn checked_add(&self, other: &Self) -> Result<Self, AlgebraError>;

    fn into_affine(&self) -> Self::Affine {
        (*self).into()
    }

    fn add_mixed(mut self, other: &Self::Affine) -> Self {
        self.add_assign_mixed(other);
        self
    }

    /// `self += other` for an affine `other`, which saves the multiplications
    /// by its `Z = 1`.
    fn add_assign_mixed(&mut self, other: &Self::Affine);

    /// Double-and-add over the big endian bits of `scalar`.
    #[must_use]
    fn mul<S: AsRef<[u64]>>(self, scalar: S) -> Self {
        BitIteratorBE::without_leading_zeros(scalar).fold(Self::zero(), |mut acc, bit| {
            acc.double_in_place();
            if bit {
                acc += &self;
            }
            acc
        })
    }
}

/// A curve point in affine coordinates, with a flag or sentinel for the
/// identity. Used for storage, serialization and pairing inputs.
pub trait AffineCurve:
    Eq
    + 'static
    + Sized
    + CanonicalSerialize
    + CanonicalDeserialize
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + Hash
    + Debug
    + Display
    + Zero
    + Neg<Output = Self>
    + From<<Self as AffineCurve>::Projective>
{
    const COFACTOR: &'static [u64];
    type ScalarField: PrimeField + SquareRootField + Into<<Self::ScalarField as PrimeField>::BigInt>;
    type BaseField: Field;
    type Projective: ProjectiveCurve<Affine = Self, ScalarField = Self::ScalarField, BaseField = Self::BaseField>
        + From<Self>
        + Into<Self>
        + MulAssign<Self::ScalarField>;

    #[must_use]
    fn prime_subgroup_generator() -> Self;

    fn into_projective(&self) -> Self::Projective {
        (*self).into()
    }

    /// Whether the coordinates satisfy the curve equation. The identity is
    /// always on the curve.
    fn is_on_curve(&self) -> bool;

    /// Whether `r * self` is the identity. Only meaningful for points on the
    /// curve.
    fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool;

    #[must_use]
    fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(&self, other: S)
        -> Self::Projective;

    #[must_use]
    fn mul_by_cofactor_to_projective(&self) -> Self::Projective;

    /// Clears the cofactor, mapping any curve point into the prime order
    /// subgroup.
    #[must_use]
    fn mul_by_cofactor(&self) -> Self {
        self.mul_by_cofactor_to_projective().into()
    }

    /// Multiplies by `h^-1 mod r`. On the prime order subgroup this undoes
    /// [`AffineCurve::mul_by_cofactor`].
    #[must_use]
    fn mul_by_cofactor_inv(&self) -> Self;
}
