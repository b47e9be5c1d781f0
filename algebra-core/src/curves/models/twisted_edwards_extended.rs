use crate::{
    curves::{models::TEModelParameters as Parameters, AffineCurve, ProjectiveCurve},
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

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: Parameters"),
    Clone(bound = "P: Parameters"),
    PartialEq(bound = "P: Parameters"),
    Eq(bound = "P: Parameters"),
    Debug(bound = "P: Parameters"),
    Hash(bound = "P: Parameters")
)]
#[must_use]
pub struct GroupAffine<P: Parameters> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: Parameters> Display for GroupAffine<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GroupAffine(x={}, y={})", self.x, self.y)
    }
}

impl<P: Parameters> GroupAffine<P> {
    pub fn new(x: P::BaseField, y: P::BaseField) -> Self {
        Self {
            x,
            y,
            _params: PhantomData,
        }
    }

    #[must_use]
    pub fn scale_by_cofactor(&self) -> <Self as AffineCurve>::Projective {
        self.mul_bits(BitIteratorBE::new(P::COFACTOR))
    }

    pub(crate) fn mul_bits(
        &self,
        bits: impl Iterator<Item = bool>,
    ) -> <Self as AffineCurve>::Projective {
        let mut res = GroupProjective::zero();
        for i in bits.skip_while(|b| !b) {
            res.double_in_place();
            if i {
                res.add_assign_mixed(self)
            }
        }
        res
    }

    /// Attempts to construct an affine point given an x-coordinate. The
    /// point is not guaranteed to be in the prime order subgroup.
    ///
    /// If and only if `greatest` is set will the lexicographically
    /// largest y-coordinate be selected.
    pub fn get_point_from_x(x: P::BaseField, greatest: bool) -> Option<Self> {
        let x2 = x.square();
        let one = P::BaseField::one();
        let numerator = one - &P::mul_by_a(&x2);
        let denominator = one - &(x2 * &P::COEFF_D);

        denominator
            .inverse()
            .map(|denom| denom * &numerator)
            .and_then(|y2| y2.sqrt())
            .map(|y| {
                let y = if y.is_lexicographically_largest() ^ greatest {
                    -y
                } else {
                    y
                };
                Self::new(x, y)
            })
    }

    fn validate(self) -> Result<Self, AlgebraError> {
        if !self.is_on_curve() {
            trace!("decoded point is not on the curve");
            return Err(AlgebraError::PointNotOnCurve);
        }
        if !self.is_in_correct_subgroup_assuming_on_curve() {
            trace!("decoded point is not in the prime order subgroup");
            return Err(AlgebraError::PointNotInSubgroup);
        }
        Ok(self)
    }
}

impl<P: Parameters> Zero for GroupAffine<P> {
    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::one())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() & self.y.is_one()
    }
}

impl<P: Parameters> AffineCurve for GroupAffine<P> {
    const COFACTOR: &'static [u64] = P::COFACTOR;
    type BaseField = P::BaseField;
    type ScalarField = P::ScalarField;
    type Projective = GroupProjective<P>;

    fn prime_subgroup_generator() -> Self {
        Self::new(P::AFFINE_GENERATOR_COEFFS.0, P::AFFINE_GENERATOR_COEFFS.1)
    }

    /// Checks that `a * x^2 + y^2 = 1 + d * x^2 * y^2`.
    fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();

        let lhs = y2 + &P::mul_by_a(&x2);
        let rhs = P::BaseField::one() + &(P::COEFF_D * &(x2 * &y2));

        lhs == rhs
    }

    fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool {
        self.mul_bits(BitIteratorBE::new(<P::ScalarField as PrimeField>::MODULUS))
            .is_zero()
    }

    fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(&self, by: S) -> GroupProjective<P> {
        self.mul_bits(BitIteratorBE::new(by.into()))
    }

    fn mul_by_cofactor_to_projective(&self) -> Self::Projective {
        self.scale_by_cofactor()
    }

    fn mul_by_cofactor_inv(&self) -> Self {
        self.mul(P::COFACTOR_INV).into()
    }
}

impl<P: Parameters> Neg for GroupAffine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

impl<P: Parameters> Add<Self> for GroupAffine<P> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut copy = self;
        copy += &other;
        copy
    }
}

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupAffine<P> {
    fn add_assign(&mut self, other: &'a Self) {
        *self = self.into_projective().add_mixed(other).into();
    }
}

impl<P: Parameters> Default for GroupAffine<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: Parameters> CanonicalSerialize for GroupAffine<P> {
    /// Writes `x` with the compression flag and the sign of `y`.
    fn serialize<W: Write>(&self, mut writer: W) -> Result<(), AlgebraError> {
        let flags = PointFlags::compressed(self.y.is_lexicographically_largest());
        self.x.serialize_with_flags(&mut writer, flags)
    }

    fn serialized_size(&self) -> usize {
        self.x.serialized_size_with_flags::<PointFlags>()
    }

    fn serialize_uncompressed<W: Write>(&self, mut writer: W) -> Result<(), AlgebraError> {
        self.x
            .serialize_with_flags(&mut writer, PointFlags::uncompressed())?;
        self.y.serialize(&mut writer)
    }

    fn uncompressed_size(&self) -> usize {
        self.x.serialized_size_with_flags::<PointFlags>() + self.y.serialized_size()
    }
}

impl<P: Parameters> CanonicalDeserialize for GroupAffine<P> {
    fn deserialize<R: Read>(mut reader: R) -> Result<Self, AlgebraError> {
        let (x, flags): (P::BaseField, PointFlags) =
            CanonicalDeserializeWithFlags::deserialize_with_flags(&mut reader)?;
        // The identity (0, 1) is an ordinary affine point on this model.
        if !flags.compressed || flags.is_infinity {
            trace!(?flags, "unexpected flags on a twisted Edwards point");
            return Err(AlgebraError::InvalidEncoding);
        }
        let point = Self::get_point_from_x(x, flags.y_sign).ok_or_else(|| {
            trace!("no curve point has the decoded x-coordinate");
            AlgebraError::PointNotOnCurve
        })?;
        point.validate()
    }

    fn deserialize_uncompressed<R: Read>(mut reader: R) -> Result<Self, AlgebraError> {
        let (x, flags): (P::BaseField, PointFlags) =
            CanonicalDeserializeWithFlags::deserialize_with_flags(&mut reader)?;
        let y = P::BaseField::deserialize(&mut reader)?;
        if flags.compressed || flags.is_infinity {
            trace!(?flags, "unexpected flags on a twisted Edwards point");
            return Err(AlgebraError::InvalidEncoding);
        }
        Self::new(x, y).validate()
    }
}

//////////////////////////////////////////////////////////////////////////////

/// Extended coordinates `(X, Y, T, Z)` with `x = X / Z`, `y = Y / Z` and
/// `x * y = T / Z`.
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
    pub t: P::BaseField,
    pub z: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: Parameters> PartialEq<GroupProjective<P>> for GroupAffine<P> {
    fn eq(&self, other: &GroupProjective<P>) -> bool {
        self.into_projective() == *other
    }
}

impl<P: Parameters> PartialEq<GroupAffine<P>> for GroupProjective<P> {
    fn eq(&self, other: &GroupAffine<P>) -> bool {
        *self == other.into_projective()
    }
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

        // x1/z1 == x2/z2  <==> x1 * z2 == x2 * z1
        (self.x * &other.z) == (other.x * &self.z) && (self.y * &other.z) == (other.y * &self.z)
    }
}

impl<P: Parameters> Eq for GroupProjective<P> {}

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
    pub fn new(x: P::BaseField, y: P::BaseField, t: P::BaseField, z: P::BaseField) -> Self {
        Self {
            x,
            y,
            t,
            z,
            _params: PhantomData,
        }
    }
}

impl<P: Parameters> Zero for GroupProjective<P> {
    fn zero() -> Self {
        Self::new(
            P::BaseField::zero(),
            P::BaseField::one(),
            P::BaseField::zero(),
            P::BaseField::one(),
        )
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y == self.z && !self.y.is_zero() && self.t.is_zero()
    }
}

impl<P: Parameters> ProjectiveCurve for GroupProjective<P> {
    const COFACTOR: &'static [u64] = P::COFACTOR;
    type BaseField = P::BaseField;
    type ScalarField = P::ScalarField;
    type Affine = GroupAffine<P>;

    fn prime_subgroup_generator() -> Self {
        GroupAffine::prime_subgroup_generator().into()
    }

    fn is_normalized(&self) -> bool {
        self.z.is_one()
    }

    fn batch_normalization(v: &mut [Self]) {
        let mut z_s = v.iter().map(|g| g.z).collect::<Vec<_>>();
        batch_inversion(&mut z_s);

        crate::cfg_iter_mut!(v)
            .zip(z_s)
            .filter(|(g, _)| !g.is_normalized())
            .for_each(|(g, z)| {
                g.x *= &z; // x/z
                g.y *= &z;
                g.t *= &z;
                g.z = P::BaseField::one(); // z = 1
            });
    }

    fn double_in_place(&mut self) -> &mut Self {
        // See "Twisted Edwards Curves Revisited"
        // Huseyin Hisil, Kenneth Koon-Ho Wong, Gary Carter, and Ed Dawson
        // 3.3 Doubling in E^e
        // Source: https://www.hyperelliptic.org/EFD/g1p/data/twisted/extended/doubling/dbl-2008-hwcd

        // A = X1^2
        let a = self.x.square();
        // B = Y1^2
        let b = self.y.square();
        // C = 2 * Z1^2
        let c = self.z.square().double();
        // D = a * A
        let d = P::mul_by_a(&a);
        // E = (X1 + Y1)^2 - A - B
        let e = (self.x + &self.y).square() - &a - &b;
        // G = D + B
        let g = d + &b;
        // F = G - C
        let f = g - &c;
        // H = D - B
        let h = d - &b;
        // X3 = E * F
        self.x = e * &f;
        // Y3 = G * H
        self.y = g * &h;
        // T3 = E * H
        self.t = e * &h;
        // Z3 = F * G
        self.z = f * &g;

        self
    }

    /// The extended formulas are complete, so the identity needs no
    /// special handling.
    fn checked_double(&self) -> Result<Self, AlgebraError> {
        Ok(self.double())
    }

    fn checked_add(&self, other: &Self) -> Result<Self, AlgebraError> {
        Ok(*self + other)
    }

    fn add_assign_mixed(&mut self, other: &GroupAffine<P>) {
        // https://www.hyperelliptic.org/EFD/g1p/data/twisted/extended-1/addition/madd-2008-hwcd-3
        // Z2 = 1, T2 = X2 * Y2

        // A = (Y1 - X1) * (Y2 - X2)
        let a = (self.y - &self.x) * &(other.y - &other.x);
        // B = (Y1 + X1) * (Y2 + X2)
        let b = (self.y + &self.x) * &(other.y + &other.x);
        // C = T1 * 2d * T2
        let c = P::COEFF_D.double() * &self.t * &other.x * &other.y;
        // D = 2 * Z1
        let d = self.z.double();
        // E = B - A
        let e = b - &a;
        // F = D - C
        let f = d - &c;
        // G = D + C
        let g = d + &c;
        // H = B + A
        let h = b + &a;
        // X3 = E * F
        self.x = e * &f;
        // Y3 = G * H
        self.y = g * &h;
        // T3 = E * H
        self.t = e * &h;
        // Z3 = F * G
        self.z = f * &g;
    }
}

impl<P: Parameters> Neg for GroupProjective<P> {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.x = -self.x;
        self.t = -self.t;
        self
    }
}

crate::impl_additive_ops_from_ref!(GroupProjective<P>, [P: Parameters]);

impl<'a, P: Parameters> AddAssign<&'a Self> for GroupProjective<P> {
    fn add_assign(&mut self, other: &'a Self) {
        // https://www.hyperelliptic.org/EFD/g1p/data/twisted/extended-1/addition/add-2008-hwcd-3

        // A = (Y1 - X1) * (Y2 - X2)
        let a = (self.y - &self.x) * &(other.y - &other.x);
        // B = (Y1 + X1) * (Y2 + X2)
        let b = (self.y + &self.x) * &(other.y + &other.x);
        // C = T1 * 2d * T2
        let c = P::COEFF_D.double() * &self.t * &other.t;
        // D = Z1 * 2 * Z2
        let d = self.z.double() * &other.z;
        // E = B - A
        let e = b - &a;
        // F = D - C
        let f = d - &c;
        // G = D + C
        let g = d + &c;
        // H = B + A
        let h = b + &a;
        // X3 = E * F
        self.x = e * &f;
        // Y3 = G * H
        self.y = g * &h;
        // T3 = E * H
        self.t = e * &h;
        // Z3 = F * G
        self.z = f * &g;
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

// The affine point (X, Y) is represented in the Extended Projective coordinates
// with Z = 1.
impl<P: Parameters> From<GroupAffine<P>> for GroupProjective<P> {
    fn from(p: GroupAffine<P>) -> GroupProjective<P> {
        Self::new(p.x, p.y, p.x * &p.y, P::BaseField::one())
    }
}

// The projective point X, Y, T, Z is represented in the affine
// coordinates as X/Z, Y/Z.
impl<P: Parameters> From<GroupProjective<P>> for GroupAffine<P> {
    fn from(p: GroupProjective<P>) -> GroupAffine<P> {
        if p.is_zero() {
            GroupAffine::zero()
        } else if p.z.is_one() {
            // If Z is one, the point is already normalized.
            GroupAffine::new(p.x, p.y)
        } else {
            match p.z.inverse() {
                Some(z_inv) => GroupAffine::new(p.x * &z_inv, p.y * &z_inv),
                None => GroupAffine::zero(),
            }
        }
    }
}
