use crate::{
    curves::{AffineCurve, ProjectiveCurve},
    fields::{batch_inversion, BitIteratorBE, Field, PrimeField, SquareRootField},
    serialize::PointFlags,
    AlgebraError, CanonicalDeserialize, CanonicalDeserializeWithFlags, CanonicalSerialize,
    CanonicalSerializeWithFlags, UniformRand,
};
use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, MulAssign, Neg, SubAssign},
};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::io::{Read, Write};

pub use super::SWModelParameters as Parameters;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

specialise_affine_to_proj!(GroupProjective);

/// Homogeneous projective coordinates `(X, Y, Z)` for the affine point
/// `(X / Z, Y / Z)`. The identity is any point with `Z = 0`.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: Parameters"),
    Clone(bound = "P: Parameters"),
    Debug(bound = "P: Parameters")
)]
#[must_use]
pub struct GroupProjective<P: Parameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: Parameters> Display for GroupProjective<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", GroupAffine::from(*self))
    }
}

impl<P: Parameters> Hash for GroupProjective<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        GroupAffine::from(*self).hash(state)
    }
}

impl<P: Parameters> PartialEq for GroupProjective<P> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }

        if other.is_zero() {
            return false;
        }

        self.x * &other.z == other.x * &self.z && self.y * &other.z == other.y * &self.z
    }
}

impl<P: Parameters> Eq for GroupProjective<P> {}

impl<P: Parameters> PartialEq<GroupAffine<P>> for GroupProjective<P> {
    fn eq(&self, other: &GroupAffine<P>) -> bool {
        *self == other.into_projective()
    }
}

impl<P: Parameters> Distribution<GroupProjective<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GroupProjective<P> {
        loop {
            let x = P::BaseField::rand(rng);
            let greatest = rng.gen();

            if let Some(p) = GroupAffine::get_point_from_x(x, greatest) {
                return p.scale_by_cofactor();
            }
        }
    }
}

impl<P: Parameters> Default for GroupProjective<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: Parameters> GroupProjective<P> {
    pub fn new(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }

    /// `dbl-2007-bl` from the EFD, valid for any `a`. Assumes `self` is not
    /// the identity.
    fn double_nonzero_in_place(&mut self) {
        let (x, y, z) = (self.x, self.y, self.z);
        let x_sq = x.square();
        let slope = P::mul_by_a(&z.square()) + &(x_sq.double() + &x_sq);
        let s = (y * &z).double();
        let r = y * &s;
        let r_sq = r.square();
        // (x + r)^2 - x^2 - r^2 = 2xr
        let two_xr = (x + &r).square() - &x_sq - &r_sq;
        let h = slope.square() - &two_xr.double();

        self.x = h * &s;
        self.y = slope * &(two_xr - &h) - &r_sq.double();
        self.z = s.square() * &s;
    }

    /// `add-1998-cmo-2` from the EFD against the point `(x2 : y2 : z2)`.
    /// Assumes neither operand is the identity. Equal operands fall back to
    /// doubling, opposite ones yield `Z = 0`.
    fn add_coordinates(&mut self, x2: &P::BaseField, y2: &P::BaseField, z2: &P::BaseField) {
        let x1z2 = self.x * z2;
        let y1z2 = self.y * z2;
        let u = self.z * y2 - &y1z2;
        let v = self.z * x2 - &x1z2;
        if v.is_zero() && u.is_zero() {
            self.double_nonzero_in_place();
            return;
        }

        let z1z2 = self.z * z2;
        let v_sq = v.square();
        let v_cube = v_sq * &v;
        let r = v_sq * &x1z2;
        let a = u.square() * &z1z2 - &v_cube - &r.double();

        self.x = v * &a;
        self.y = u * &(r - &a) - &(v_cube * &y1z2);
        self.z = v_cube * &z1z2;
    }

    fn add_nonzero_in_place(&mut self, other: &Self) {
        self.add_coordinates(&other.x, &other.y, &other.z);
    }
}

/// The identity is `(0 : 1 : 0)`, and any point with `Z = 0` is treated as it.
impl<P: Parameters> Zero for GroupProjective<P> {
    #[inline]
    fn zero() -> Self {
        Self::new(
            P::BaseField::zero(),
            P::BaseField::one(),
            P::BaseField::zero(),
        )
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.z.is_zero()
    }
}

impl<P: Parameters> ProjectiveCurve for GroupProjective<P> {
    const COFACTOR: &'static [u64] = P::COFACTOR;
    type BaseField = P::BaseField;
    type ScalarField = P::ScalarField;
    type Affine = GroupAffine<P>;

    #[inline]
    fn prime_subgroup_generator() -> Self {
        GroupAffine::prime_subgroup_generator().into()
    }

    #[inline]
    fn is_normalized(&self) -> bool {
        self.is_zero() || self.z.is_one()
    }

    fn batch_normalization(v: &mut [Self]) {
        let mut z_s = v.iter().map(|g| g.z).collect::<Vec<_>>();
        batch_inversion(&mut z_s);

        crate::cfg_iter_mut!(v)
            .zip(z_s)
            .filter(|(g, _)| !g.is_normalized())
            .for_each(|(g, z_inv)| {
                *g = Self::new(g.x * &z_inv, g.y * &z_inv, P::BaseField::one());
            });
    }

    fn double_in_place(&mut self) -> &mut Self {
        if !self.is_zero() {
            self.double_nonzero_in_place();
        }
        self
    }

    fn checked_double(&self) -> Result<Self, AlgebraError> {
        if self.is_zero() {
            return Err(AlgebraError::IdentityElementMisuse);
        }
        let mut copy = *self;
        copy.double_nonzero_in_place();
        Ok(copy)
    }

    fn checked_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        if self.is_zero() || other.is_zero() {
            return Err(AlgebraError::IdentityElementMisuse);
        }
        let mut copy = *self;
        copy.add_nonzero_in_place(other);
        Ok(copy)
    }

    fn add_assign_mixed(&mut self, other: &GroupAffine<P>) {
        if other.is_zero() {
            return;
        }
        if self.is_zero() {
            *self = (*other).into();
            return;
        }
        self.add_coordinates(&other.x, &other.y, &P::BaseField::one());
    }
}

impl<P: Parameters> Neg for GroupProjective<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if !self.is_zero() {
            Self::new(self.x, -self.y, self.z)
        } else {
            self
        }
    }
}

crate::impl_additive_ops_from_ref!(GroupProjective<P>, [P: Parameters]);

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupProjective<P> {
    fn add_assign(&mut self, other: &'a Self) {
        if self.is_zero() {
            *self = *other;
            return;
        }

        if other.is_zero() {
            return;
        }

        self.add_nonzero_in_place(other);
    }
}

impl<'a, P: Parameters> SubAssign<&'a Self> for GroupProjective<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-(*other));
    }
}

impl<P: Parameters> MulAssign<P::ScalarField> for GroupProjective<P> {
    fn mul_assign(&mut self, other: P::ScalarField) {
        *self = ProjectiveCurve::mul(*self, other.into_repr())
    }
}

impl<P: Parameters> From<GroupAffine<P>> for GroupProjective<P> {
    #[inline]
    fn from(p: GroupAffine<P>) -> GroupProjective<P> {
        if p.is_zero() {
            Self::zero()
        } else {
            Self::new(p.x, p.y, P::BaseField::one())
        }
    }
}

/// Normalizes to `(X / Z, Y / Z)`.
impl<P: Parameters> From<GroupProjective<P>> for GroupAffine<P> {
    #[inline]
    fn from(p: GroupProjective<P>) -> GroupAffine<P> {
        if p.is_zero() {
            return GroupAffine::zero();
        }
        match p.z.inverse() {
            Some(z_inv) if !p.z.is_one() => GroupAffine::new(p.x * &z_inv, p.y * &z_inv, false),
            Some(_) => GroupAffine::new(p.x, p.y, false),
            None => GroupAffine::zero(),
        }
    }
}
