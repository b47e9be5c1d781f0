use crate::{
    biginteger::BigInteger,
    curves::{AffineCurve, ProjectiveCurve},
    fields::PrimeField,
};
use num_traits::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

type ScalarRepr<G> = <<G as AffineCurve>::ScalarField as PrimeField>::BigInt;

/// Pippenger's bucket method for `sum_i scalars[i] * bases[i]`. Windows are
/// processed in parallel when the `parallel` feature is enabled.
pub struct VariableBaseMSM;

impl VariableBaseMSM {
    /// Computes `sum_i scalars[i] * bases[i]`. Extra entries in the longer
    /// slice are ignored.
    pub fn multi_scalar_mul<G: AffineCurve>(
        bases: &[G],
        scalars: &[ScalarRepr<G>],
    ) -> G::Projective {
        let terms: Vec<(&G, &ScalarRepr<G>)> = bases
            .iter()
            .zip(scalars)
            .filter(|(base, scalar)| !base.is_zero() && !scalar.is_zero())
            .collect();
        trace!(
            len = bases.len().min(scalars.len()),
            nonzero = terms.len(),
            "variable base msm"
        );
        if terms.is_empty() {
            return G::Projective::zero();
        }

        let c = window_bits(terms.len());
        let num_bits = <G::ScalarField as PrimeField>::MODULUS_BITS as usize;
        let offsets: Vec<usize> = (0..num_bits).step_by(c).collect();
        let window_sums: Vec<G::Projective> = crate::cfg_into_iter!(offsets)
            .map(|offset| window_sum(&terms, offset, c))
            .collect();

        // Horner's rule over the windows, most significant first.
        window_sums
            .iter()
            .rev()
            .fold(G::Projective::zero(), |mut acc, sum| {
                for _ in 0..c {
                    acc.double_in_place();
                }
                acc + sum
            })
    }
}

fn window_bits(len: usize) -> usize {
    if len < 32 {
        3
    } else {
        super::ln_without_floats(len) + 2
    }
}

/// The `c` bits of `scalar` starting at bit `offset`.
fn window_digit<B: BigInteger>(mut scalar: B, offset: usize, c: usize) -> usize {
    scalar.divn(offset as u32);
    (scalar.as_ref()[0] % (1 << c)) as usize
}

/// `sum_i d_i * base_i` where `d_i` is the window of the i-th scalar at
/// `offset`. Bucket `j` collects the bases whose digit is `j + 1`.
fn window_sum<G: AffineCurve>(
    terms: &[(&G, &ScalarRepr<G>)],
    offset: usize,
    c: usize,
) -> G::Projective {
    let mut buckets = vec![G::Projective::zero(); (1 << c) - 1];
    for (base, scalar) in terms {
        let digit = window_digit(**scalar, offset, c);
        if digit != 0 {
            buckets[digit - 1].add_assign_mixed(base);
        }
    }

    // Suffix sums weight bucket `j` by `j + 1`.
    let mut suffix = G::Projective::zero();
    let mut total = G::Projective::zero();
    for bucket in buckets.iter().rev() {
        suffix += bucket;
        total += &suffix;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biginteger::BigInteger64;

    #[test]
    fn test_window_digit() {
        let s = BigInteger64::from(0b1011_0110u64);
        assert_eq!(window_digit(s, 0, 3), 0b110);
        assert_eq!(window_digit(s, 3, 3), 0b110);
        assert_eq!(window_digit(s, 6, 3), 0b10);
        assert_eq!(window_digit(s, 9, 3), 0);
    }

    #[test]
    fn test_window_bits() {
        assert_eq!(window_bits(1), 3);
        assert_eq!(window_bits(31), 3);
        assert!(window_bits(1 << 16) > 3);
    }
}
