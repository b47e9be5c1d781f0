use core::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt,
    marker::PhantomData,
    ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign},
};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::io::{Read, Write};

use crate::{
    fields::{Field, PrimeField},
    AlgebraError, CanonicalDeserialize, CanonicalDeserializeWithFlags, CanonicalSerialize,
    CanonicalSerializeWithFlags, EmptyFlags, Flags, UniformRand,
};

/// Constants and hooks describing `BaseField[X]/(X^3 - NONRESIDUE)`.
pub trait CubicExtParameters: 'static + Send + Sync + Sized {
    type BasePrimeField: PrimeField;
    /// The field the extension is built over.
    type BaseField: Field<BasePrimeField = Self::BasePrimeField>;
    /// The field the Frobenius coefficients live in.
    type FrobCoeff: Field;

    /// Degree of the whole tower over `BasePrimeField`.
    const DEGREE_OVER_BASE_PRIME_FIELD: usize;

    /// Frobenius coefficients of `X` and `X^2`, indexed by power.
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];
    const FROBENIUS_COEFF_C2: &'static [Self::FrobCoeff];

    /// `NONRESIDUE * fe`.
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField;

    /// Scales the `X` and `X^2` coefficients after the base field Frobenius
    /// has been applied to them.
    fn mul_base_field_by_frob_coeff(
        c1: &mut Self::BaseField,
        c2: &mut Self::BaseField,
        power: usize,
    );
}

/// The element `c0 + c1 * X + c2 * X^2`.
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: CubicExtParameters"),
    Hash(bound = "P: CubicExtParameters"),
    Clone(bound = "P: CubicExtParameters"),
    Copy(bound = "P: CubicExtParameters"),
    Debug(bound = "P: CubicExtParameters"),
    PartialEq(bound = "P: CubicExtParameters"),
    Eq(bound = "P: CubicExtParameters")
)]
pub struct CubicExtField<P: CubicExtParameters> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    pub c2: P::BaseField,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: CubicExtParameters> CubicExtField<P> {
    pub fn new(c0: P::BaseField, c1: P::BaseField, c2: P::BaseField) -> Self {
        Self {
            c0,
            c1,
            c2,
            _parameters: PhantomData,
        }
    }

    fn from_base(c0: P::BaseField) -> Self {
        Self::new(c0, P::BaseField::zero(), P::BaseField::zero())
    }

    pub fn mul_assign_by_base_field(&mut self, value: &P::BaseField) {
        self.c0 *= value;
        self.c1 *= value;
        self.c2 *= value;
    }

    /// The product of the three conjugates `self`, `self^p` and `self^(p^2)`,
    /// which lies in the base field.
    pub fn norm(&self) -> P::BaseField {
        let mut conjugate_1 = *self;
        conjugate_1.frobenius_map(1);
        let mut conjugate_2 = *self;
        conjugate_2.frobenius_map(2);
        let product = *self * &conjugate_1 * &conjugate_2;
        debug_assert!(product.c1.is_zero() && product.c2.is_zero());
        product.c0
    }
}

impl<P: CubicExtParameters> Zero for CubicExtField<P> {
    fn zero() -> Self {
        Self::from_base(P::BaseField::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }
}

impl<P: CubicExtParameters> One for CubicExtField<P> {
    fn one() -> Self {
        Self::from_base(P::BaseField::one())
    }

    fn is_one(&self) -> bool {
        self.c1.is_zero() && self.c2.is_zero() && self.c0.is_one()
    }
}

impl<P: CubicExtParameters> Field for CubicExtField<P> {
    type BasePrimeField = P::BasePrimeField;

    fn extension_degree() -> u64 {
        P::DEGREE_OVER_BASE_PRIME_FIELD as u64
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double(), self.c2.double())
    }

    fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    fn square(&self) -> Self {
        // Chung-Hasan SQR2: two squarings of single coefficients, one of
        // a - b + c, and two products.
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let a_sq = a.square();
        let c_sq = c.square();
        let two_ab = (a * &b).double();
        let two_bc = (b * &c).double();
        let mixed = (a - &b + &c).square();
        Self::new(
            a_sq + &P::mul_base_field_by_nonresidue(&two_bc),
            two_ab + &P::mul_base_field_by_nonresidue(&c_sq),
            two_ab + &mixed + &two_bc - &a_sq - &c_sq,
        )
    }

    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    fn inverse(&self) -> Option<Self> {
        // The adjugate (t0, t1, t2) satisfies self * adj = norm in the base
        // field.
        let (a, b, c) = (self.c0, self.c1, self.c2);
        let t0 = a.square() - &P::mul_base_field_by_nonresidue(&(b * &c));
        let t1 = P::mul_base_field_by_nonresidue(&c.square()) - &(a * &b);
        let t2 = b.square() - &(a * &c);
        let norm = a * &t0 + &P::mul_base_field_by_nonresidue(&(c * &t1 + &(b * &t2)));
        let norm_inverse = norm.inverse()?;
        Some(Self::new(
            t0 * &norm_inverse,
            t1 * &norm_inverse,
            t2 * &norm_inverse,
        ))
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        self.c2.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut self.c1, &mut self.c2, power);
    }

    fn is_lexicographically_largest(&self) -> bool {
        [self.c2, self.c1]
            .iter()
            .find(|c| !c.is_zero())
            .unwrap_or(&self.c0)
            .is_lexicographically_largest()
    }
}

/// Compares `c2` first, then `c1`, then `c0`.
impl<P: CubicExtParameters> Ord for CubicExtField<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.c2
            .cmp(&other.c2)
            .then_with(|| self.c1.cmp(&other.c1))
            .then_with(|| self.c0.cmp(&other.c0))
    }
}

impl<P: CubicExtParameters> PartialOrd for CubicExtField<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: CubicExtParameters> From<u64> for CubicExtField<P> {
    fn from(value: u64) -> Self {
        Self::from_base(value.into())
    }
}

impl<P: CubicExtParameters> From<bool> for CubicExtField<P> {
    fn from(value: bool) -> Self {
        Self::from_base(value.into())
    }
}

impl<P: CubicExtParameters> Neg for CubicExtField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1, -self.c2)
    }
}

impl<P: CubicExtParameters> Distribution<CubicExtField<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CubicExtField<P> {
        CubicExtField::new(
            UniformRand::rand(rng),
            UniformRand::rand(rng),
            UniformRand::rand(rng),
        )
    }
}

impl<'a, P: CubicExtParameters> AddAssign<&'a Self> for CubicExtField<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
        self.c2 += &other.c2;
    }
}

impl<'a, P: CubicExtParameters> SubAssign<&'a Self> for CubicExtField<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
        self.c2 -= &other.c2;
    }
}

impl<'a, P: CubicExtParameters> MulAssign<&'a Self> for CubicExtField<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        // Karatsuba over three coefficients: each cross term
        // a_i b_j + a_j b_i is (a_i + a_j)(b_i + b_j) - a_i b_i - a_j b_j.
        let (a0, a1, a2) = (self.c0, self.c1, self.c2);
        let (b0, b1, b2) = (other.c0, other.c1, other.c2);
        let v0 = a0 * &b0;
        let v1 = a1 * &b1;
        let v2 = a2 * &b2;
        let cross_01 = (a0 + &a1) * &(b0 + &b1) - &v0 - &v1;
        let cross_02 = (a0 + &a2) * &(b0 + &b2) - &v0 - &v2;
        let cross_12 = (a1 + &a2) * &(b1 + &b2) - &v1 - &v2;

        // X^3 = NONRESIDUE folds the X^3 and X^4 terms back down.
        self.c0 = v0 + &P::mul_base_field_by_nonresidue(&cross_12);
        self.c1 = cross_01 + &P::mul_base_field_by_nonresidue(&v2);
        self.c2 = cross_02 + &v1;
    }
}

impl<'a, P: CubicExtParameters> DivAssign<&'a Self> for CubicExtField<P> {
    /// # Panics
    /// Panics when `other` is zero.
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        match other.inverse() {
            Some(inverse) => *self *= &inverse,
            None => panic!("{}", AlgebraError::DivisionByZero),
        }
    }
}

impl_additive_ops_from_ref!(CubicExtField<P>, [P: CubicExtParameters]);
impl_multiplicative_ops_from_ref!(CubicExtField<P>, [P: CubicExtParameters]);

impl<P: CubicExtParameters> fmt::Display for CubicExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicExtField({}, {}, {})", self.c0, self.c1, self.c2)
    }
}

/// `c2` is written first and carries the flags, followed by `c1` and `c0`.
impl<P: CubicExtParameters> CanonicalSerializeWithFlags for CubicExtField<P> {
    fn serialize_with_flags<W: Write, F: Flags>(
        &self,
        mut writer: W,
        flags: F,
    ) -> Result<(), AlgebraError> {
        self.c2.serialize_with_flags(&mut writer, flags)?;
        self.c1.serialize(&mut writer)?;
        self.c0.serialize(writer)
    }

    fn serialized_size_with_flags<F: Flags>(&self) -> usize {
        self.c2.serialized_size_with_flags::<F>()
            + self.c1.serialized_size()
            + self.c0.serialized_size()
    }
}

impl<P: CubicExtParameters> CanonicalSerialize for CubicExtField<P> {
    fn serialize<W: Write>(&self, writer: W) -> Result<(), AlgebraError> {
        self.serialize_with_flags(writer, EmptyFlags)
    }

    fn serialized_size(&self) -> usize {
        self.serialized_size_with_flags::<EmptyFlags>()
    }
}

impl<P: CubicExtParameters> CanonicalDeserializeWithFlags for CubicExtField<P> {
    fn deserialize_with_flags<R: Read, F: Flags>(
        mut reader: R,
    ) -> Result<(Self, F), AlgebraError> {
        let (c2, flags) = P::BaseField::deserialize_with_flags(&mut reader)?;
        let c1 = P::BaseField::deserialize(&mut reader)?;
        let c0 = P::BaseField::deserialize(reader)?;
        Ok((Self::new(c0, c1, c2), flags))
    }
}

impl<P: CubicExtParameters> CanonicalDeserialize for CubicExtField<P> {
    fn deserialize<R: Read>(reader: R) -> Result<Self, AlgebraError> {
        Self::deserialize_with_flags::<_, EmptyFlags>(reader).map(|(element, _)| element)
    }
}
