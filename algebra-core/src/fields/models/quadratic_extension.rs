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
    biginteger::arithmetic::find_wnaf,
    fields::{Field, LegendreSymbol, PrimeField, SquareRootField},
    AlgebraError, CanonicalDeserialize, CanonicalDeserializeWithFlags, CanonicalSerialize,
    CanonicalSerializeWithFlags, EmptyFlags, Flags, UniformRand,
};

/// Constants and hooks describing `BaseField[X]/(X^2 - NONRESIDUE)`.
pub trait QuadExtParameters: 'static + Send + Sync + Sized {
    type BasePrimeField: PrimeField;
    /// The field the extension is built over.
    type BaseField: Field<BasePrimeField = Self::BasePrimeField>;
    /// The field the Frobenius coefficients live in.
    type FrobCoeff: Field;

    /// Degree of the whole tower over `BasePrimeField`.
    const DEGREE_OVER_BASE_PRIME_FIELD: usize;

    /// `NONRESIDUE^((p^i - 1) / 2)` for `i` in `0..DEGREE_OVER_BASE_PRIME_FIELD`.
    const FROBENIUS_COEFF_C1: &'static [Self::FrobCoeff];

    /// `NONRESIDUE * fe`.
    fn mul_base_field_by_nonresidue(fe: &Self::BaseField) -> Self::BaseField;

    /// Scales the `X` coefficient after the base field Frobenius has been
    /// applied to it.
    fn mul_base_field_by_frob_coeff(fe: &mut Self::BaseField, power: usize);

    /// Squaring for elements of norm one. Towers with a cheaper formula
    /// override it.
    fn cyclotomic_square(fe: &QuadExtField<Self>) -> QuadExtField<Self> {
        fe.square()
    }

    /// Exponentiation for elements of norm one, where inversion is the
    /// conjugate and a signed-digit recoding of `exponent` pays off.
    fn cyclotomic_exp(fe: &QuadExtField<Self>, exponent: impl AsRef<[u64]>) -> QuadExtField<Self> {
        let inverse = fe.unitary_inverse();
        let digits = find_wnaf(exponent.as_ref(), 2);
        let mut acc = QuadExtField::one();
        for &digit in digits.iter().rev().skip_while(|d| **d == 0) {
            acc = Self::cyclotomic_square(&acc);
            match digit.signum() {
                1 => acc *= fe,
                -1 => acc *= &inverse,
                _ => {},
            }
        }
        acc
    }
}

/// The element `c0 + c1 * X`.
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: QuadExtParameters"),
    Hash(bound = "P: QuadExtParameters"),
    Clone(bound = "P: QuadExtParameters"),
    Copy(bound = "P: QuadExtParameters"),
    Debug(bound = "P: QuadExtParameters"),
    PartialEq(bound = "P: QuadExtParameters"),
    Eq(bound = "P: QuadExtParameters")
)]
pub struct QuadExtField<P: QuadExtParameters> {
    pub c0: P::BaseField,
    pub c1: P::BaseField,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub _parameters: PhantomData<P>,
}

impl<P: QuadExtParameters> QuadExtField<P> {
    pub fn new(c0: P::BaseField, c1: P::BaseField) -> Self {
        Self {
            c0,
            c1,
            _parameters: PhantomData,
        }
    }

    /// Negates the `X` coefficient, which is the Frobenius map of order two
    /// over `BaseField`.
    pub fn conjugate(&mut self) {
        self.c1 = -self.c1;
    }

    /// The inverse of an element of norm one.
    pub fn unitary_inverse(&self) -> Self {
        let mut conjugate = *self;
        conjugate.conjugate();
        conjugate
    }

    /// Only valid for elements of norm one.
    pub fn cyclotomic_square(&self) -> Self {
        P::cyclotomic_square(self)
    }

    /// Only valid for elements of norm one.
    pub fn cyclotomic_exp(&self, exponent: impl AsRef<[u64]>) -> Self {
        P::cyclotomic_exp(self, exponent)
    }

    /// `self * conjugate(self) = c0^2 - NONRESIDUE * c1^2`.
    pub fn norm(&self) -> P::BaseField {
        self.c0.square() - &P::mul_base_field_by_nonresidue(&self.c1.square())
    }

    pub fn mul_assign_by_basefield(&mut self, element: &P::BaseField) {
        self.c0 *= element;
        self.c1 *= element;
    }
}

impl<P: QuadExtParameters> Zero for QuadExtField<P> {
    fn zero() -> Self {
        Self::new(P::BaseField::zero(), P::BaseField::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

impl<P: QuadExtParameters> One for QuadExtField<P> {
    fn one() -> Self {
        Self::new(P::BaseField::one(), P::BaseField::zero())
    }

    fn is_one(&self) -> bool {
        self.c1.is_zero() && self.c0.is_one()
    }
}

impl<P: QuadExtParameters> Field for QuadExtField<P> {
    type BasePrimeField = P::BasePrimeField;

    fn extension_degree() -> u64 {
        P::DEGREE_OVER_BASE_PRIME_FIELD as u64
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    fn square(&self) -> Self {
        // (a + bX)^2 = (a^2 + NONRESIDUE * b^2) + 2ab X, and the first term
        // equals (a + b)(a + NONRESIDUE * b) - ab - NONRESIDUE * ab.
        let ab = self.c0 * &self.c1;
        let nonresidue_ab = P::mul_base_field_by_nonresidue(&ab);
        let cross =
            (self.c0 + &self.c1) * &(self.c0 + &P::mul_base_field_by_nonresidue(&self.c1));
        Self::new(cross - &ab - &nonresidue_ab, ab.double())
    }

    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    fn inverse(&self) -> Option<Self> {
        // (a + bX)^-1 = (a - bX) / norm
        let norm_inverse = self.norm().inverse()?;
        Some(Self::new(
            self.c0 * &norm_inverse,
            -(self.c1 * &norm_inverse),
        ))
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    fn frobenius_map(&mut self, power: usize) {
        self.c0.frobenius_map(power);
        self.c1.frobenius_map(power);
        P::mul_base_field_by_frob_coeff(&mut self.c1, power);
    }

    fn is_lexicographically_largest(&self) -> bool {
        if self.c1.is_zero() {
            self.c0.is_lexicographically_largest()
        } else {
            self.c1.is_lexicographically_largest()
        }
    }
}

impl<P: QuadExtParameters> QuadExtField<P>
where
    P::BaseField: SquareRootField,
{
    /// Complex method square root of a quadratic residue, after algorithm 8
    /// of <https://eprint.iacr.org/2012/685.pdf> with an arbitrary
    /// non-residue.
    fn complex_sqrt(&self) -> Option<Self> {
        let zero = P::BaseField::zero();
        if self.c1.is_zero() {
            // A non-square of the base field is NONRESIDUE times a square.
            if let Some(c0) = self.c0.sqrt() {
                return Some(Self::new(c0, zero));
            }
            let nonresidue = P::mul_base_field_by_nonresidue(&P::BaseField::one());
            let c1 = (self.c0 * &nonresidue.inverse()?).sqrt()?;
            return Some(Self::new(zero, c1));
        }

        let half = P::BaseField::one().double().inverse()?;
        let alpha = self.norm().sqrt()?;
        let mut delta = (alpha + &self.c0) * &half;
        if delta.legendre().is_qnr() {
            delta -= &alpha;
        }
        let c0 = delta.sqrt()?;
        let c1 = self.c1 * &half * &c0.inverse()?;
        Some(Self::new(c0, c1))
    }
}

impl<P: QuadExtParameters> SquareRootField for QuadExtField<P>
where
    P::BaseField: SquareRootField,
{
    fn legendre(&self) -> LegendreSymbol {
        self.norm().legendre()
    }

    /// Returns the root that is not lexicographically largest.
    fn sqrt(&self) -> Option<Self> {
        match self.legendre() {
            LegendreSymbol::Zero => Some(*self),
            LegendreSymbol::QuadraticNonResidue => None,
            LegendreSymbol::QuadraticResidue => {
                let root = self.complex_sqrt()?;
                Some(if root.is_lexicographically_largest() {
                    -root
                } else {
                    root
                })
            },
        }
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        *self = self.sqrt()?;
        Some(self)
    }
}

/// Compares `c1` first, then `c0`.
impl<P: QuadExtParameters> Ord for QuadExtField<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.c1
            .cmp(&other.c1)
            .then_with(|| self.c0.cmp(&other.c0))
    }
}

impl<P: QuadExtParameters> PartialOrd for QuadExtField<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: QuadExtParameters> From<u64> for QuadExtField<P> {
    fn from(value: u64) -> Self {
        Self::new(value.into(), P::BaseField::zero())
    }
}

impl<P: QuadExtParameters> From<bool> for QuadExtField<P> {
    fn from(value: bool) -> Self {
        Self::new(value.into(), P::BaseField::zero())
    }
}

impl<P: QuadExtParameters> Neg for QuadExtField<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.c0, -self.c1)
    }
}

impl<P: QuadExtParameters> Distribution<QuadExtField<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> QuadExtField<P> {
        QuadExtField::new(UniformRand::rand(rng), UniformRand::rand(rng))
    }
}

impl<'a, P: QuadExtParameters> AddAssign<&'a Self> for QuadExtField<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.c0 += &other.c0;
        self.c1 += &other.c1;
    }
}

impl<'a, P: QuadExtParameters> SubAssign<&'a Self> for QuadExtField<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        self.c0 -= &other.c0;
        self.c1 -= &other.c1;
    }
}

impl<'a, P: QuadExtParameters> MulAssign<&'a Self> for QuadExtField<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        // Karatsuba: the X coefficient is (a0 + a1)(b0 + b1) - a0 b0 - a1 b1.
        let low = self.c0 * &other.c0;
        let high = self.c1 * &other.c1;
        let cross = (self.c0 + &self.c1) * &(other.c0 + &other.c1);
        self.c0 = low + &P::mul_base_field_by_nonresidue(&high);
        self.c1 = cross - &low - &high;
    }
}

impl<'a, P: QuadExtParameters> DivAssign<&'a Self> for QuadExtField<P> {
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

impl_additive_ops_from_ref!(QuadExtField<P>, [P: QuadExtParameters]);
impl_multiplicative_ops_from_ref!(QuadExtField<P>, [P: QuadExtParameters]);

impl<P: QuadExtParameters> fmt::Display for QuadExtField<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuadExtField({} + {} * u)", self.c0, self.c1)
    }
}

/// `c1` is written first and carries the flags.
impl<P: QuadExtParameters> CanonicalSerializeWithFlags for QuadExtField<P> {
    fn serialize_with_flags<W: Write, F: Flags>(
        &self,
        mut writer: W,
        flags: F,
    ) -> Result<(), AlgebraError> {
        self.c1.serialize_with_flags(&mut writer, flags)?;
        self.c0.serialize(writer)
    }

    fn serialized_size_with_flags<F: Flags>(&self) -> usize {
        self.c1.serialized_size_with_flags::<F>() + self.c0.serialized_size()
    }
}

impl<P: QuadExtParameters> CanonicalSerialize for QuadExtField<P> {
    fn serialize<W: Write>(&self, writer: W) -> Result<(), AlgebraError> {
        self.serialize_with_flags(writer, EmptyFlags)
    }

    fn serialized_size(&self) -> usize {
        self.serialized_size_with_flags::<EmptyFlags>()
    }
}

impl<P: QuadExtParameters> CanonicalDeserializeWithFlags for QuadExtField<P> {
    fn deserialize_with_flags<R: Read, F: Flags>(
        mut reader: R,
    ) -> Result<(Self, F), AlgebraError> {
        let (c1, flags) = P::BaseField::deserialize_with_flags(&mut reader)?;
        let c0 = P::BaseField::deserialize(reader)?;
        Ok((Self::new(c0, c1), flags))
    }
}

impl<P: QuadExtParameters> CanonicalDeserialize for QuadExtField<P> {
    fn deserialize<R: Read>(reader: R) -> Result<Self, AlgebraError> {
        Self::deserialize_with_flags::<_, EmptyFlags>(reader).map(|(element, _)| element)
    }
}
