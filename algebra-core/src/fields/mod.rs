use crate::{
    biginteger::{BigInt, BigInteger},
    AlgebraError, CanonicalDeserialize, CanonicalDeserializeWithFlags, CanonicalSerialize,
    CanonicalSerializeWithFlags, UniformRand,
};
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::{One, Zero};

#[macro_use]
pub mod arithmetic;

pub mod models;
pub use self::models::*;

/// Builds a field element constant directly from its (Montgomery) limbs or
/// from its coefficients.
#[macro_export]
macro_rules! field_new {
    ($name:ident, $c0:expr) => {
        $name {
            0: $c0,
            1: core::marker::PhantomData,
        }
    };
    ($name:ident, $c0:expr, $c1:expr $(,)?) => {
        $name {
            c0: $c0,
            c1: $c1,
            _parameters: core::marker::PhantomData,
        }
    };
    ($name:ident, $c0:expr, $c1:expr, $c2:expr $(,)?) => {
        $name {
            c0: $c0,
            c1: $c1,
            c2: $c2,
            _parameters: core::marker::PhantomData,
        }
    };
}

/// Arithmetic shared by prime fields and their extension towers.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + One
    + Ord
    + Neg<Output = Self>
    + UniformRand
    + Zero
    + Sized
    + Hash
    + CanonicalSerialize
    + CanonicalSerializeWithFlags
    + CanonicalDeserialize
    + CanonicalDeserializeWithFlags
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + Sum<Self>
    + for<'a> Sum<&'a Self>
    + Product<Self>
    + for<'a> Product<&'a Self>
    + From<u64>
    + From<bool>
{
    type BasePrimeField: PrimeField;

    /// Degree over `BasePrimeField`.
    fn extension_degree() -> u64;

    #[must_use]
    fn double(&self) -> Self;

    fn double_in_place(&mut self) -> &mut Self;

    #[must_use]
    fn square(&self) -> Self;

    fn square_in_place(&mut self) -> &mut Self;

    /// `None` exactly when `self` is zero.
    #[must_use]
    fn inverse(&self) -> Option<Self>;

    /// Leaves `self` unchanged and returns `None` when it is zero.
    fn inverse_in_place(&mut self) -> Option<&mut Self>;

    /// Like [`Field::inverse`], with [`AlgebraError::DivisionByZero`] for
    /// zero.
    fn checked_inverse(&self) -> Result<Self, AlgebraError> {
        self.inverse().ok_or(AlgebraError::DivisionByZero)
    }

    /// `self / other`, with [`AlgebraError::DivisionByZero`] when `other`
    /// is zero.
    fn checked_div(&self, other: &Self) -> Result<Self, AlgebraError> {
        Ok(*self * &other.checked_inverse()?)
    }

    /// Raises `self` to `p^power`, where `p` is the characteristic.
    fn frobenius_map(&mut self, power: usize);

    /// Whether the highest nonzero coefficient, read as an integer in
    /// `[0, p)`, exceeds `(p - 1) / 2`. Exactly one of `y` and `-y` is
    /// largest for nonzero `y`, which is what compressed encodings record.
    fn is_lexicographically_largest(&self) -> bool;

    /// `self^exp` for an exponent given as little endian limbs.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        BitIteratorBE::without_leading_zeros(exp).fold(Self::one(), |mut acc, bit| {
            acc.square_in_place();
            if bit {
                acc *= self;
            }
            acc
        })
    }
}

/// Constants of a prime field `F_p` whose elements are stored in Montgomery
/// form `a * R mod p` over `N` limbs, with `R = 2^(64 N)`.
pub trait FpParameters<const N: usize>: 'static + Send + Sync + Sized {
    const MODULUS: BigInt<N>;

    /// Bit length of `MODULUS`.
    const MODULUS_BITS: u32;

    /// Number of high bits of the top limb cleared when sampling, so that
    /// rejection sampling succeeds with probability above one half.
    const REPR_SHAVE_BITS: u32;

    /// `R mod p`, the Montgomery form of one.
    const R: BigInt<N>;

    /// `R^2 mod p`, used to move into Montgomery form.
    const R2: BigInt<N>;

    /// `-p^-1 mod 2^64`.
    const INV: u64;

    /// A generator of `F_p^*` in Montgomery form.
    const GENERATOR: BigInt<N>;

    /// `s` in `p - 1 = 2^s * t` with `t` odd.
    const TWO_ADICITY: u32;

    /// `GENERATOR^t`, a primitive `2^s`-th root of unity, in Montgomery
    /// form.
    const TWO_ADIC_ROOT_OF_UNITY: BigInt<N>;

    const MODULUS_MINUS_ONE_DIV_TWO: BigInt<N>;

    /// The odd part `t` of `p - 1`.
    const T: BigInt<N>;

    const T_MINUS_ONE_DIV_TWO: BigInt<N>;
}

/// A field of prime order with conversions to and from its canonical
/// integer representative and a fixed-width byte encoding.
pub trait PrimeField:
    Field<BasePrimeField = Self> + SquareRootField + Into<<Self as PrimeField>::BigInt>
{
    type BigInt: BigInteger;

    const MODULUS: Self::BigInt;

    const MODULUS_BITS: u32;

    const MODULUS_MINUS_ONE_DIV_TWO: Self::BigInt;

    /// `None` when `repr` is not below the modulus.
    fn from_repr(repr: Self::BigInt) -> Option<Self>;

    /// The canonical integer in `[0, p)`.
    fn into_repr(&self) -> Self::BigInt;

    fn multiplicative_generator() -> Self;

    fn two_adic_root_of_unity() -> Self;

    /// `ceil(MODULUS_BITS / 8)`, the length of the byte encodings.
    fn encoded_size() -> usize {
        crate::serialize::buffer_byte_size(Self::MODULUS_BITS as usize)
    }

    /// The canonical integer as `encoded_size()` big endian bytes.
    fn to_bytes_be(&self) -> Vec<u8> {
        let full = self.into_repr().to_bytes_be();
        full[full.len() - Self::encoded_size()..].to_vec()
    }

    /// The canonical integer as `encoded_size()` little endian bytes.
    fn to_bytes_le(&self) -> Vec<u8> {
        let mut bytes = self.to_bytes_be();
        bytes.reverse();
        bytes
    }

    /// Inverse of [`PrimeField::to_bytes_be`]. Fails with
    /// [`AlgebraError::InvalidEncoding`] on a wrong length or a value that
    /// is not below the modulus.
    fn from_bytes_be(bytes: &[u8]) -> Result<Self, AlgebraError> {
        if bytes.len() != Self::encoded_size() {
            trace!(
                expected = Self::encoded_size(),
                actual = bytes.len(),
                "field element encoding has the wrong length"
            );
            return Err(AlgebraError::InvalidEncoding);
        }
        Self::BigInt::from_bytes_be(bytes)
            .and_then(Self::from_repr)
            .ok_or(AlgebraError::InvalidEncoding)
    }

    /// Inverse of [`PrimeField::to_bytes_le`].
    fn from_bytes_le(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
        Self::from_bytes_be(&reversed)
    }
}

/// Fields with a square root algorithm.
pub trait SquareRootField: Field {
    fn legendre(&self) -> LegendreSymbol;

    /// One of the two roots, or `None` for a non-residue.
    #[must_use]
    fn sqrt(&self) -> Option<Self>;

    /// Replaces `self` by [`SquareRootField::sqrt`], leaving it unchanged
    /// for a non-residue.
    fn sqrt_in_place(&mut self) -> Option<&mut Self>;

    /// Like [`SquareRootField::sqrt`], with
    /// [`AlgebraError::NotQuadraticResidue`] for a non-residue.
    fn checked_sqrt(&self) -> Result<Self, AlgebraError> {
        self.sqrt().ok_or(AlgebraError::NotQuadraticResidue)
    }
}

/// Quadratic character of a field element.
#[derive(Debug, PartialEq)]
pub enum LegendreSymbol {
    Zero = 0,
    QuadraticResidue = 1,
    QuadraticNonResidue = -1,
}

impl LegendreSymbol {
    pub fn is_zero(&self) -> bool {
        matches!(self, LegendreSymbol::Zero)
    }

    pub fn is_qnr(&self) -> bool {
        matches!(self, LegendreSymbol::QuadraticNonResidue)
    }

    pub fn is_qr(&self) -> bool {
        matches!(self, LegendreSymbol::QuadraticResidue)
    }
}

/// Bits of a little endian limb slice, most significant first.
#[derive(Debug)]
pub struct BitIteratorBE<Slice: AsRef<[u64]>> {
    limbs: Slice,
    remaining: usize,
}

impl<Slice: AsRef<[u64]>> BitIteratorBE<Slice> {
    pub fn new(limbs: Slice) -> Self {
        let remaining = limbs.as_ref().len() * 64;
        Self { limbs, remaining }
    }

    /// Starts at the most significant set bit.
    pub fn without_leading_zeros(limbs: Slice) -> impl Iterator<Item = bool> {
        Self::new(limbs).skip_while(|bit| !bit)
    }
}

impl<Slice: AsRef<[u64]>> Iterator for BitIteratorBE<Slice> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.remaining = self.remaining.checked_sub(1)?;
        let limb = self.limbs.as_ref()[self.remaining / 64];
        Some((limb >> (self.remaining % 64)) & 1 == 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Inverts every nonzero entry of `v` with one field inversion
/// (Montgomery's trick). Zero entries are left as they are.
pub fn batch_inversion<F: Field>(v: &mut [F]) {
    // prefixes[i] is the product of the nonzero entries before the i-th one
    let mut prefixes = Vec::with_capacity(v.len());
    let mut product = F::one();
    for x in v.iter().filter(|x| !x.is_zero()) {
        prefixes.push(product);
        product *= x;
    }

    let mut inverse = match product.inverse() {
        Some(inverse) => inverse,
        None => return,
    };
    for (x, prefix) in v
        .iter_mut()
        .rev()
        .filter(|x| !x.is_zero())
        .zip(prefixes.into_iter().rev())
    {
        // `inverse` is the inverse of `prefix * x` here
        let x_inverse = inverse * &prefix;
        inverse *= &*x;
        *x = x_inverse;
    }
}

#[cfg(test)]
mod tests {
    use super::BitIteratorBE;

    #[test]
    fn test_bit_iterator_be() {
        let bits = BitIteratorBE::new([1u64 << 10, 0]).collect::<Vec<_>>();
        assert_eq!(bits.len(), 128);
        for (i, bit) in bits.into_iter().enumerate() {
            assert_eq!(bit, i == 117);
        }
    }

    #[test]
    fn test_bit_iterator_be_skips_leading_zeros() {
        let bits = BitIteratorBE::without_leading_zeros(&[0b1011u64, 0]).collect::<Vec<_>>();
        assert_eq!(bits, vec![true, false, true, true]);
        assert_eq!(BitIteratorBE::without_leading_zeros([0u64; 2]).count(), 0);
    }
}
