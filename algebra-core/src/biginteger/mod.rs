use crate::{fields::BitIteratorBE, UniformRand};
use core::{
    cmp::Ordering,
    fmt::{Debug, Display},
};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Fixed-width unsigned integer made of `N` 64-bit limbs, least-significant
/// limb first.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct BigInt<const N: usize>(pub [u64; N]);

pub type BigInteger64 = BigInt<1>;
pub type BigInteger256 = BigInt<4>;
pub type BigInteger320 = BigInt<5>;
pub type BigInteger384 = BigInt<6>;

impl<const N: usize> BigInt<N> {
    pub const fn new(value: [u64; N]) -> Self {
        BigInt(value)
    }

    pub const fn zero() -> Self {
        BigInt([0u64; N])
    }

    pub const fn one() -> Self {
        let mut one = [0u64; N];
        one[0] = 1;
        BigInt(one)
    }
}

impl<const N: usize> Default for BigInt<N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> BigInteger for BigInt<N> {
    const NUM_LIMBS: usize = N;

    #[inline]
    fn add_nocarry(&mut self, other: &Self) -> bool {
        let mut carry = 0;

        for i in 0..N {
            self.0[i] = arithmetic::adc(self.0[i], other.0[i], &mut carry);
        }

        carry != 0
    }

    #[inline]
    fn sub_noborrow(&mut self, other: &Self) -> bool {
        let mut borrow = 0;

        for i in 0..N {
            self.0[i] = arithmetic::sbb(self.0[i], other.0[i], &mut borrow);
        }

        borrow != 0
    }

    #[inline]
    fn mul2(&mut self) {
        let mut last = 0;
        for i in 0..N {
            let tmp = self.0[i] >> 63;
            self.0[i] <<= 1;
            self.0[i] |= last;
            last = tmp;
        }
    }

    #[inline]
    fn muln(&mut self, mut n: u32) {
        if n >= 64 * N as u32 {
            *self = Self::zero();
            return;
        }

        while n >= 64 {
            let mut t = 0;
            for i in 0..N {
                core::mem::swap(&mut t, &mut self.0[i]);
            }
            n -= 64;
        }

        if n > 0 {
            let mut t = 0;
            for i in 0..N {
                let t2 = self.0[i] >> (64 - n);
                self.0[i] <<= n;
                self.0[i] |= t;
                t = t2;
            }
        }
    }

    #[inline]
    fn div2(&mut self) {
        let mut t = 0;
        for i in self.0.iter_mut().rev() {
            let t2 = *i << 63;
            *i >>= 1;
            *i |= t;
            t = t2;
        }
    }

    #[inline]
    fn divn(&mut self, mut n: u32) {
        if n >= 64 * N as u32 {
            *self = Self::zero();
            return;
        }

        while n >= 64 {
            let mut t = 0;
            for i in 0..N {
                core::mem::swap(&mut t, &mut self.0[N - 1 - i]);
            }
            n -= 64;
        }

        if n > 0 {
            let mut t = 0;
            for i in 0..N {
                let t2 = self.0[N - 1 - i] << (64 - n);
                self.0[N - 1 - i] >>= n;
                self.0[N - 1 - i] |= t;
                t = t2;
            }
        }
    }

    #[inline]
    fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    #[inline]
    fn is_even(&self) -> bool {
        !self.is_odd()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    #[inline]
    fn num_bits(&self) -> u32 {
        let mut ret = N as u32 * 64;
        for i in self.0.iter().rev() {
            let leading = i.leading_zeros();
            ret -= leading;
            if leading != 64 {
                break;
            }
        }

        ret
    }

    #[inline]
    fn get_bit(&self, i: usize) -> bool {
        if i >= 64 * N {
            false
        } else {
            let limb = i / 64;
            let bit = i - (64 * limb);
            (self.0[limb] & (1 << bit)) != 0
        }
    }

    fn from_bits_be(bits: &[bool]) -> Self {
        let mut res = Self::default();
        let mut acc: u64 = 0;

        let mut bits = bits.to_vec();
        bits.reverse();
        for (i, bits64) in bits.chunks(64).take(N).enumerate() {
            for bit in bits64.iter().rev() {
                acc <<= 1;
                acc += *bit as u64;
            }
            res.0[i] = acc;
            acc = 0;
        }
        res
    }

    fn to_bits_be(&self) -> Vec<bool> {
        BitIteratorBE::without_leading_zeros(self).collect()
    }

    fn find_naf(&self) -> Vec<i8> {
        arithmetic::find_wnaf(&self.0, 2)
            .into_iter()
            .map(|digit| digit as i8)
            .collect()
    }

    fn find_wnaf(&self, w: usize) -> Option<Vec<i64>> {
        if (2..32).contains(&w) {
            Some(arithmetic::find_wnaf(&self.0, w))
        } else {
            None
        }
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        self.0.iter().rev().flat_map(|limb| limb.to_be_bytes()).collect()
    }

    fn to_bytes_le(&self) -> Vec<u8> {
        self.0.iter().flat_map(|limb| limb.to_le_bytes()).collect()
    }

    fn from_bytes_be(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N * 8 {
            return None;
        }
        let mut padded = vec![0u8; N * 8 - bytes.len()];
        padded.extend_from_slice(bytes);

        let mut res = Self::zero();
        for (limb, chunk) in res.0.iter_mut().rev().zip(padded.chunks(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(buf);
        }
        Some(res)
    }

    fn from_bytes_le(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N * 8 {
            return None;
        }
        let mut reversed = bytes.to_vec();
        reversed.reverse();
        Self::from_bytes_be(&reversed)
    }
}

impl<const N: usize> Ord for BigInt<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            if a < b {
                return Ordering::Less;
            } else if a > b {
                return Ordering::Greater;
            }
        }

        Ordering::Equal
    }
}

impl<const N: usize> PartialOrd for BigInt<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Display for BigInt<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x")?;
        for i in self.0.iter().rev() {
            write!(f, "{:016X}", *i)?;
        }
        Ok(())
    }
}

impl<const N: usize> Distribution<BigInt<N>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt<N> {
        let mut res = [0u64; N];
        for limb in res.iter_mut() {
            *limb = rng.gen();
        }
        BigInt(res)
    }
}

impl<const N: usize> AsMut<[u64]> for BigInt<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl<const N: usize> AsRef<[u64]> for BigInt<N> {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl<const N: usize> From<u64> for BigInt<N> {
    #[inline]
    fn from(val: u64) -> BigInt<N> {
        let mut repr = Self::default();
        repr.0[0] = val;
        repr
    }
}

#[cfg(test)]
mod tests;

/// This defines a `BigInteger`, a smart wrapper around a
/// sequence of `u64` limbs, least-significant limb first.
pub trait BigInteger:
    Copy
    + Clone
    + Debug
    + Default
    + Display
    + Eq
    + Ord
    + Send
    + Sized
    + Sync
    + 'static
    + core::hash::Hash
    + UniformRand
    + AsMut<[u64]>
    + AsRef<[u64]>
    + From<u64>
{
    /// Number of limbs.
    const NUM_LIMBS: usize;

    /// Add another representation to this one, returning the carry bit.
    fn add_nocarry(&mut self, other: &Self) -> bool;

    /// Subtract another representation from this one, returning the borrow bit.
    fn sub_noborrow(&mut self, other: &Self) -> bool;

    /// Performs a leftwise bitshift of this number, effectively multiplying
    /// it by 2. Overflow is ignored.
    fn mul2(&mut self);

    /// Performs a leftwise bitshift of this number by some amount.
    fn muln(&mut self, amt: u32);

    /// Performs a rightwise bitshift of this number, effectively dividing
    /// it by 2.
    fn div2(&mut self);

    /// Performs a rightwise bitshift of this number by some amount.
    fn divn(&mut self, amt: u32);

    /// Returns true iff this number is odd.
    fn is_odd(&self) -> bool;

    /// Returns true iff this number is even.
    fn is_even(&self) -> bool;

    /// Returns true iff this number is zero.
    fn is_zero(&self) -> bool;

    /// Compute the minimum number of bits needed to encode this number.
    fn num_bits(&self) -> u32;

    /// Compute the `i`-th bit of `self`.
    fn get_bit(&self, i: usize) -> bool;

    /// Returns the big integer representation of a given big endian boolean
    /// array.
    fn from_bits_be(bits: &[bool]) -> Self;

    /// Returns the bit representation in a big endian boolean array, without
    /// leading zeros.
    fn to_bits_be(&self) -> Vec<bool>;

    /// Returns the non-adjacent form of this number, least significant
    /// digit first.
    fn find_naf(&self) -> Vec<i8>;

    /// Returns the windowed non-adjacent form of this number for a window of
    /// `w` bits, least significant digit first. Every nonzero digit is odd
    /// and lies in `(-2^(w-1), 2^(w-1))`.
    fn find_wnaf(&self, w: usize) -> Option<Vec<i64>>;

    /// Writes all limbs as one big endian byte string.
    fn to_bytes_be(&self) -> Vec<u8>;

    /// Writes all limbs as one little endian byte string.
    fn to_bytes_le(&self) -> Vec<u8>;

    /// Reads a big endian byte string of at most `8 * NUM_LIMBS` bytes.
    fn from_bytes_be(bytes: &[u8]) -> Option<Self>;

    /// Reads a little endian byte string of at most `8 * NUM_LIMBS` bytes.
    fn from_bytes_le(bytes: &[u8]) -> Option<Self>;
}

pub mod arithmetic {
    /// Signed-digit recoding of `num` where every nonzero digit is odd and
    /// bounded by `2^(w-1)` in absolute value.
    pub fn find_wnaf(num: &[u64], w: usize) -> Vec<i64> {
        let is_zero = |num: &[u64]| num.iter().all(|x| *x == 0u64);
        let is_odd = |num: &[u64]| num[0] & 1 == 1;
        let sub_noborrow = |num: &mut [u64], z: u64| {
            let mut borrow = 0;
            for (i, a) in num.iter_mut().enumerate() {
                *a = sbb(*a, if i == 0 { z } else { 0 }, &mut borrow);
            }
        };
        let add_nocarry = |num: &mut [u64], z: u64| {
            let mut carry = 0;
            for (i, a) in num.iter_mut().enumerate() {
                *a = adc(*a, if i == 0 { z } else { 0 }, &mut carry);
            }
        };
        let div2 = |num: &mut [u64]| {
            let mut t = 0;
            for i in num.iter_mut().rev() {
                let t2 = *i << 63;
                *i >>= 1;
                *i |= t;
                t = t2;
            }
        };

        let window: u64 = 1 << w;
        let half_window: i64 = 1 << (w - 1);

        // One spare limb absorbs the carry of a negative digit at the top.
        let mut num = num.to_vec();
        num.push(0);
        let mut res = vec![];
        while !is_zero(&num) {
            let z: i64;
            if is_odd(&num) {
                z = (num[0] % window) as i64;
                if z < half_window {
                    sub_noborrow(&mut num, z as u64);
                    res.push(z);
                } else {
                    add_nocarry(&mut num, (window as i64 - z) as u64);
                    res.push(z - window as i64);
                }
            } else {
                res.push(0);
            }
            div2(&mut num);
        }
        res
    }

    /// Calculate a + b + carry, returning the sum and modifying the
    /// carry value.
    #[inline(always)]
    pub(crate) fn adc(a: u64, b: u64, carry: &mut u64) -> u64 {
        let tmp = u128::from(a) + u128::from(b) + u128::from(*carry);
        *carry = (tmp >> 64) as u64;
        tmp as u64
    }

    /// Calculate a - b - borrow, returning the result and modifying
    /// the borrow value.
    #[inline(always)]
    pub(crate) fn sbb(a: u64, b: u64, borrow: &mut u64) -> u64 {
        let tmp = (1u128 << 64) + u128::from(a) - u128::from(b) - u128::from(*borrow);
        *borrow = if tmp >> 64 == 0 { 1 } else { 0 };
        tmp as u64
    }

    /// Calculate a + (b * c) + carry, returning the least significant digit
    /// and setting carry to the most significant digit.
    #[inline(always)]
    pub(crate) fn mac_with_carry(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
        let tmp = (u128::from(a)) + u128::from(b) * u128::from(c) + u128::from(*carry);
        *carry = (tmp >> 64) as u64;
        tmp as u64
    }
}
