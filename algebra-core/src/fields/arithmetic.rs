/// Tonelli-Shanks over any field with a known 2-adic decomposition of
/// `|F*| = 2^s * t`. `$qnr_to_t` must be a quadratic non-residue raised
/// to `t`.
macro_rules! sqrt_impl {
    ($self:expr, $qnr_to_t:expr, $t_minus_one_div_two:expr, $two_adicity:expr) => {{
        use crate::fields::LegendreSymbol::*;
        // https://eprint.iacr.org/2012/685.pdf (page 12, algorithm 5)
        match $self.legendre() {
            Zero => Some(*$self),
            QuadraticNonResidue => None,
            QuadraticResidue => {
                let mut z = $qnr_to_t;
                let mut w = $self.pow($t_minus_one_div_two);
                let mut x = w * $self;
                let mut b = x * &w;

                let mut v = $two_adicity as usize;

                while !b.is_one() {
                    let mut k = 0usize;

                    let mut b2k = b;
                    while !b2k.is_one() {
                        // invariant: b2k = b^(2^k) after entering this loop
                        b2k.square_in_place();
                        k += 1;
                    }

                    let j = v - k - 1;
                    w = z;
                    for _ in 0..j {
                        w.square_in_place();
                    }

                    z = w.square();
                    b *= &z;
                    x *= &w;
                    v = k;
                }

                Some(x)
            },
        }
    }};
}

/// Given hand-written `AddAssign<&Self>` and `SubAssign<&Self>`, derives
/// `Add`, `Sub` and their assigning forms for owned, shared and mutable
/// operands, together with `Sum`.
#[macro_export]
macro_rules! impl_additive_ops_from_ref {
    ($type: ty, $generics: tt) => {
        $crate::impl_binop_from_assign!($type, $generics, Add, add, AddAssign, add_assign);
        $crate::impl_binop_from_assign!($type, $generics, Sub, sub, SubAssign, sub_assign);
        $crate::impl_fold_from_op!($type, $generics, Sum, sum, Zero, zero, Add, add);
    };
}

/// The multiplicative counterpart of [`impl_additive_ops_from_ref`], built on
/// `MulAssign<&Self>` and `DivAssign<&Self>`.
#[macro_export]
macro_rules! impl_multiplicative_ops_from_ref {
    ($type: ty, $generics: tt) => {
        $crate::impl_binop_from_assign!($type, $generics, Mul, mul, MulAssign, mul_assign);
        $crate::impl_binop_from_assign!($type, $generics, Div, div, DivAssign, div_assign);
        $crate::impl_fold_from_op!($type, $generics, Product, product, One, one, Mul, mul);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_binop_from_assign {
    (
        $type: ty,
        [$($generics: tt)*],
        $op: ident,
        $method: ident,
        $op_assign: ident,
        $method_assign: ident
    ) => {
        #[allow(unused_qualifications)]
        impl<'a, $($generics)*> core::ops::$op<&'a Self> for $type {
            type Output = Self;

            #[inline]
            fn $method(mut self, other: &'a Self) -> Self {
                core::ops::$op_assign::$method_assign(&mut self, other);
                self
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, $($generics)*> core::ops::$op<&'a mut Self> for $type {
            type Output = Self;

            #[inline]
            fn $method(self, other: &'a mut Self) -> Self {
                core::ops::$op::$method(self, &*other)
            }
        }

        #[allow(unused_qualifications)]
        impl<$($generics)*> core::ops::$op<Self> for $type {
            type Output = Self;

            #[inline]
            fn $method(self, other: Self) -> Self {
                core::ops::$op::$method(self, &other)
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, $($generics)*> core::ops::$op_assign<&'a mut Self> for $type {
            #[inline]
            fn $method_assign(&mut self, other: &'a mut Self) {
                core::ops::$op_assign::$method_assign(self, &*other)
            }
        }

        #[allow(unused_qualifications)]
        impl<$($generics)*> core::ops::$op_assign<Self> for $type {
            #[inline]
            fn $method_assign(&mut self, other: Self) {
                core::ops::$op_assign::$method_assign(self, &other)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! impl_fold_from_op {
    (
        $type: ty,
        [$($generics: tt)*],
        $fold: ident,
        $method: ident,
        $unit: ident,
        $unit_fn: ident,
        $op: ident,
        $op_fn: ident
    ) => {
        #[allow(unused_qualifications)]
        impl<$($generics)*> core::iter::$fold<Self> for $type {
            fn $method<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(num_traits::$unit::$unit_fn(), core::ops::$op::$op_fn)
            }
        }

        #[allow(unused_qualifications)]
        impl<'a, $($generics)*> core::iter::$fold<&'a Self> for $type {
            fn $method<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(num_traits::$unit::$unit_fn(), core::ops::$op::$op_fn)
            }
        }
    };
}
