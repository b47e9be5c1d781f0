use core::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign},
    str::FromStr,
};
use num_traits::{One, Zero};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
use std::io::{Read, Write};

use crate::{
    biginteger::{arithmetic as fa, BigInt, BigInteger},
    fields::{Field, FpParameters, LegendreSymbol, PrimeField, SquareRootField},
    serialize::{
        buffer_byte_size, deserialize_repr_be, serialize_repr_be, CanonicalDeserialize,
        CanonicalDeserializeWithFlags, CanonicalSerialize, CanonicalSerializeWithFlags,
        EmptyFlags, Flags,
    },
    AlgebraError,
};

/// An element of the prime field described by `P`, stored in Montgomery
/// form over `N` limbs. The stored value is always fully reduced.
pub struct Fp<P, const N: usize>(pub BigInt<N>, pub PhantomData<P>);

pub type Fp256<P> = Fp<P, 4>;
pub type Fp320<P> = Fp<P, 5>;
pub type Fp384<P> = Fp<P, 6>;

impl<P, const N: usize> Fp<P, N> {
    /// Wraps a value that is already in Montgomery form.
    #[inline]
    pub const fn new(element: BigInt<N>) -> Self {
        Fp(element, PhantomData)
    }
}

impl<P: FpParameters<N>, const N: usize> Fp<P, N> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    #[inline]
    fn reduce(&mut self) {
        if !self.is_valid() {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }

    /// Montgomery multiplication (CIOS) of two reduced operands. An extra
    /// word keeps the intermediate sum exact, so moduli that use every bit
    /// of the top limb are supported.
    #[inline]
    fn mont_mul(a: &BigInt<N>, b: &BigInt<N>) -> BigInt<N> {
        let mut t = [0u64; N];
        let mut t_hi = 0u64;

        for i in 0..N {
            let mut carry = 0;
            for j in 0..N {
                t[j] = fa::mac_with_carry(t[j], a.0[j], b.0[i], &mut carry);
            }
            let (sum, overflow) = t_hi.overflowing_add(carry);
            t_hi = sum;
            let t_top = overflow as u64;

            let k = t[0].wrapping_mul(P::INV);
            let mut carry = 0;
            fa::mac_with_carry(t[0], k, P::MODULUS.0[0], &mut carry);
            for j in 1..N {
                t[j - 1] = fa::mac_with_carry(t[j], k, P::MODULUS.0[j], &mut carry);
            }
            let (sum, overflow) = t_hi.overflowing_add(carry);
            t[N - 1] = sum;
            t_hi = t_top + overflow as u64;
        }

        let mut result = BigInt(t);
        // The result is below 2 * MODULUS.
        if t_hi != 0 || result >= P::MODULUS {
            result.sub_noborrow(&P::MODULUS);
        }
        result
    }
}

impl<P, const N: usize> Clone for Fp<P, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, const N: usize> Copy for Fp<P, N> {}

impl<P, const N: usize> PartialEq for Fp<P, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P, const N: usize> Eq for Fp<P, N> {}

impl<P, const N: usize> Hash for Fp<P, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<P: FpParameters<N>, const N: usize> Debug for Fp<P, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_repr())
    }
}

impl<P: FpParameters<N>, const N: usize> Display for Fp<P, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp({})", self.into_repr())
    }
}

impl<P, const N: usize> Default for Fp<P, N> {
    #[inline]
    fn default() -> Self {
        Fp::new(BigInt::zero())
    }
}

impl<P: FpParameters<N>, const N: usize> Zero for Fp<P, N> {
    #[inline]
    fn zero() -> Self {
        Fp::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<P: FpParameters<N>, const N: usize> One for Fp<P, N> {
    #[inline]
    fn one() -> Self {
        Fp::new(P::R)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == P::R
    }
}

impl<P: FpParameters<N>, const N: usize> Field for Fp<P, N> {
    type BasePrimeField = Self;

    fn extension_degree() -> u64 {
        1
    }

    #[inline]
    fn double(&self) -> Self {
        *self + self
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        *self = self.double();
        self
    }

    #[inline]
    fn square(&self) -> Self {
        Fp::new(Self::mont_mul(&self.0, &self.0))
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        *self = self.square();
        self
    }

    /// Binary extended Euclid on the Montgomery representative, algorithm
    /// 16 of Guajardo, Kumar, Paar and Pelzl, "Efficient Software
    /// Implementation of Finite Fields with Applications to Cryptography".
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        // x -> x / 2 mod p, on values below p
        let halve_mod_p = |x: &mut BigInt<N>| {
            let overflow = x.is_odd() && x.add_nocarry(&P::MODULUS);
            x.div2();
            if overflow {
                x.0[N - 1] |= 1 << 63;
            }
        };

        // Invariants: self.0 * lhs_coeff = lhs * R^2 and likewise for rhs,
        // so that the coefficient paired with 1 is the Montgomery inverse.
        let one = BigInt::<N>::one();
        let (mut lhs, mut rhs) = (self.0, P::MODULUS);
        let (mut lhs_coeff, mut rhs_coeff) = (Fp::<P, N>::new(P::R2), Self::zero());
        while lhs != one && rhs != one {
            while lhs.is_even() {
                lhs.div2();
                halve_mod_p(&mut lhs_coeff.0);
            }
            while rhs.is_even() {
                rhs.div2();
                halve_mod_p(&mut rhs_coeff.0);
            }
            if rhs < lhs {
                lhs.sub_noborrow(&rhs);
                lhs_coeff -= &rhs_coeff;
            } else {
                rhs.sub_noborrow(&lhs);
                rhs_coeff -= &lhs_coeff;
            }
        }

        Some(if lhs == one { lhs_coeff } else { rhs_coeff })
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    /// The identity on a prime field.
    #[inline]
    fn frobenius_map(&mut self, _: usize) {}

    #[inline]
    fn is_lexicographically_largest(&self) -> bool {
        self.into_repr() > P::MODULUS_MINUS_ONE_DIV_TWO
    }
}

impl<P: FpParameters<N>, const N: usize> PrimeField for Fp<P, N> {
    type BigInt = BigInt<N>;

    const MODULUS: BigInt<N> = P::MODULUS;
    const MODULUS_BITS: u32 = P::MODULUS_BITS;
    const MODULUS_MINUS_ONE_DIV_TWO: BigInt<N> = P::MODULUS_MINUS_ONE_DIV_TWO;

    #[inline]
    fn from_repr(r: BigInt<N>) -> Option<Self> {
        if r < P::MODULUS {
            Some(Fp(Self::mont_mul(&r, &P::R2), PhantomData))
        } else {
            None
        }
    }

    #[inline]
    fn into_repr(&self) -> BigInt<N> {
        Self::mont_mul(&self.0, &BigInt::one())
    }

    #[inline]
    fn multiplicative_generator() -> Self {
        Fp(P::GENERATOR, PhantomData)
    }

    #[inline]
    fn two_adic_root_of_unity() -> Self {
        Fp(P::TWO_ADIC_ROOT_OF_UNITY, PhantomData)
    }
}

impl<P: FpParameters<N>, const N: usize> SquareRootField for Fp<P, N> {
    /// Euler's criterion.
    fn legendre(&self) -> LegendreSymbol {
        let symbol = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO);
        if symbol.is_zero() {
            LegendreSymbol::Zero
        } else if symbol.is_one() {
            LegendreSymbol::QuadraticResidue
        } else {
            LegendreSymbol::QuadraticNonResidue
        }
    }

    /// Returns the root whose canonical integer is at most `(p - 1) / 2`.
    fn sqrt(&self) -> Option<Self> {
        let root: Self = sqrt_impl!(
            self,
            Self::two_adic_root_of_unity(),
            P::T_MINUS_ONE_DIV_TWO,
            P::TWO_ADICITY
        )?;
        Some(if root.is_lexicographically_largest() {
            -root
        } else {
            root
        })
    }

    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        *self = self.sqrt()?;
        Some(self)
    }
}

impl<P: FpParameters<N>, const N: usize> Ord for Fp<P, N> {
    /// Compares the canonical integers of the two elements.
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_repr().cmp(&other.into_repr())
    }
}

impl<P: FpParameters<N>, const N: usize> PartialOrd for Fp<P, N> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpParameters<N>, const N: usize> From<Fp<P, N>> for BigInt<N> {
    #[inline]
    fn from(fp: Fp<P, N>) -> Self {
        fp.into_repr()
    }
}

impl<P: FpParameters<N>, const N: usize> From<u64> for Fp<P, N> {
    /// Reduces `value` modulo `p`.
    fn from(value: u64) -> Self {
        let mut repr = BigInt::from(value);
        while repr >= P::MODULUS {
            repr.sub_noborrow(&P::MODULUS);
        }
        Fp::new(Self::mont_mul(&repr, &P::R2))
    }
}

impl<P: FpParameters<N>, const N: usize> From<bool> for Fp<P, N> {
    fn from(value: bool) -> Self {
        Self::from(u64::from(value))
    }
}

/// Rejection sampling on uniformly random limbs with the unused top bits
/// cleared.
impl<P: FpParameters<N>, const N: usize> Distribution<Fp<P, N>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp<P, N> {
        let top_mask = u64::MAX >> P::REPR_SHAVE_BITS;
        loop {
            let mut candidate: BigInt<N> = rng.sample(Standard);
            candidate.0[N - 1] &= top_mask;
            if candidate < P::MODULUS {
                return Fp::new(candidate);
            }
        }
    }
}

impl<P: FpParameters<N>, const N: usize> FromStr for Fp<P, N> {
    type Err = ();

    /// Parses a decimal integer and reduces it modulo `p`. Empty input and
    /// leading zeros are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || (s.len() > 1 && s.starts_with('0')) {
            return Err(());
        }
        let ten = Self::from(10u64);
        s.chars().try_fold(Self::zero(), |acc, c| {
            let digit = c.to_digit(10).ok_or(())?;
            Ok(acc * &ten + &Self::from(u64::from(digit)))
        })
    }
}

impl<P: FpParameters<N>, const N: usize> CanonicalSerializeWithFlags for Fp<P, N> {
    fn serialize_with_flags<W: Write, F: Flags>(
        &self,
        writer: W,
        flags: F,
    ) -> Result<(), AlgebraError> {
        let num_bytes = buffer_byte_size(P::MODULUS_BITS as usize + F::BIT_SIZE);
        serialize_repr_be(writer, &self.into_repr(), num_bytes, flags)
    }

    fn serialized_size_with_flags<F: Flags>(&self) -> usize {
        buffer_byte_size(P::MODULUS_BITS as usize + F::BIT_SIZE)
    }
}

impl<P: FpParameters<N>, const N: usize> CanonicalSerialize for Fp<P, N> {
    #[inline]
    fn serialize<W: Write>(&self, writer: W) -> Result<(), AlgebraError> {
        self.serialize_with_flags(writer, EmptyFlags)
    }

    #[inline]
    fn serialized_size(&self) -> usize {
        self.serialized_size_with_flags::<EmptyFlags>()
    }
}

impl<P: FpParameters<N>, const N: usize> CanonicalDeserializeWithFlags for Fp<P, N> {
    fn deserialize_with_flags<R: Read, F: Flags>(reader: R) -> Result<(Self, F), AlgebraError> {
        let num_bytes = buffer_byte_size(P::MODULUS_BITS as usize + F::BIT_SIZE);
        let (repr, flags) = deserialize_repr_be::<_, BigInt<N>, F>(reader, num_bytes)?;
        let element = Self::from_repr(repr).ok_or_else(|| {
            trace!("encoded field element is not below the modulus");
            AlgebraError::InvalidEncoding
        })?;
        Ok((element, flags))
    }
}

impl<P: FpParameters<N>, const N: usize> CanonicalDeserialize for Fp<P, N> {
    #[inline]
    fn deserialize<R: Read>(reader: R) -> Result<Self, AlgebraError> {
        Self::deserialize_with_flags::<_, EmptyFlags>(reader).map(|(element, _)| element)
    }
}

impl<P: FpParameters<N>, const N: usize> Neg for Fp<P, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            return self;
        }
        let mut negated = P::MODULUS;
        negated.sub_noborrow(&self.0);
        Fp::new(negated)
    }
}

impl_additive_ops_from_ref!(Fp<P, N>, [P: FpParameters<N>, const N: usize]);
impl_multiplicative_ops_from_ref!(Fp<P, N>, [P: FpParameters<N>, const N: usize]);

impl<'a, P: FpParameters<N>, const N: usize> AddAssign<&'a Self> for Fp<P, N> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        let carry = self.0.add_nocarry(&other.0);
        if carry || !self.is_valid() {
            self.0.sub_noborrow(&P::MODULUS);
        }
    }
}

impl<'a, P: FpParameters<N>, const N: usize> SubAssign<&'a Self> for Fp<P, N> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        // If `other` is larger than `self`, add the modulus to self first.
        // Any carry out of the top limb cancels against the borrow below.
        if other.0 > self.0 {
            self.0.add_nocarry(&P::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}

impl<'a, P: FpParameters<N>, const N: usize> MulAssign<&'a Self> for Fp<P, N> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        self.0 = Self::mont_mul(&self.0, &other.0);
    }
}

impl<'a, P: FpParameters<N>, const N: usize> DivAssign<&'a Self> for Fp<P, N> {
    /// # Panics
    /// Panics when `other` is zero; use [`Field::checked_div`] to handle
    /// that case.
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        match other.inverse() {
            Some(inverse) => *self *= &inverse,
            None => panic!("{}", AlgebraError::DivisionByZero),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    /// The 64-bit prime 2^64 - 59, which uses every bit of its only limb.
    struct FullLimbParameters;

    impl FpParameters<1> for FullLimbParameters {
        const MODULUS: BigInt<1> = BigInt([0xffffffffffffffc5]);
        const MODULUS_BITS: u32 = 64;
        const REPR_SHAVE_BITS: u32 = 0;
        const R: BigInt<1> = BigInt([0x3b]);
        const R2: BigInt<1> = BigInt([0xd99]);
        const INV: u64 = 0xcbeea4e1a08ad8f3;
        const GENERATOR: BigInt<1> = BigInt([0x76]);
        const TWO_ADICITY: u32 = 2;
        const TWO_ADIC_ROOT_OF_UNITY: BigInt<1> = BigInt([0x57f56382b3d1def4]);
        const MODULUS_MINUS_ONE_DIV_TWO: BigInt<1> = BigInt([0x7fffffffffffffe2]);
        const T: BigInt<1> = BigInt([0x3ffffffffffffff1]);
        const T_MINUS_ONE_DIV_TWO: BigInt<1> = BigInt([0x1ffffffffffffff8]);
    }

    type F = Fp<FullLimbParameters, 1>;

    const P: u128 = 0xffffffffffffffc5;

    fn value(x: F) -> u128 {
        u128::from(x.into_repr().0[0])
    }

    #[test]
    fn full_limb_modulus_arithmetic() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789);
        for _ in 0..1000 {
            let a: F = rng.gen();
            let b: F = rng.gen();
            let (x, y) = (value(a), value(b));

            assert_eq!(value(a + b), (x + y) % P);
            assert_eq!(value(a - b), (x + P - y) % P);
            assert_eq!(value(a * b), (x * y) % P);
            assert_eq!(value(a.double()), (2 * x) % P);
            assert_eq!(value(-a), (P - x) % P);
            if !a.is_zero() {
                assert_eq!(a * a.inverse().unwrap(), F::one());
            }
        }
    }

    #[test]
    fn full_limb_modulus_sqrt_is_canonical() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789);
        for _ in 0..100 {
            let a: F = rng.gen();
            let root = a.square().sqrt().unwrap();
            assert_eq!(root.square(), a.square());
            assert!(!root.is_lexicographically_largest());
        }
        assert_eq!(F::from(5u64).sqrt(), None);
        assert!(matches!(
            F::from(5u64).checked_sqrt(),
            Err(AlgebraError::NotQuadraticResidue)
        ));
    }

    #[test]
    fn from_str_and_repr() {
        assert_eq!(F::from_str("18446744073709551556"), Ok(-F::one()));
        assert_eq!(F::from_str("0"), Ok(F::zero()));
        assert!(F::from_str("007").is_err());
        assert!(F::from_str("").is_err());
        assert_eq!(F::from_repr(BigInt([0xffffffffffffffc5])), None);
        assert_eq!(F::from(u64::MAX), F::from(58u64));
    }

    #[test]
    fn batch_inversion_skips_zeros() {
        let mut rng = XorShiftRng::seed_from_u64(1231275789);
        let original: Vec<F> = (0..10)
            .map(|i| if i % 3 == 0 { F::zero() } else { rng.gen() })
            .collect();
        let mut inverted = original.clone();
        crate::fields::batch_inversion(&mut inverted);
        for (x, x_inv) in original.iter().zip(&inverted) {
            match x.inverse() {
                Some(expected) => assert_eq!(*x_inv, expected),
                None => assert!(x_inv.is_zero()),
            }
        }
    }
}
