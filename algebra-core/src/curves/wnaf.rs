use crate::{biginteger::arithmetic::find_wnaf, curves::ProjectiveCurve, fields::PrimeField};

/// A helper type that contains all the context required for computing
/// a window NAF multiplication of a group element by a scalar.
pub struct WnafContext {
    pub window_size: usize,
}

impl WnafContext {
    /// Constructs a new context for a window of size `window_size`.
    ///
    /// # Panics
    ///
    /// This function will panic if not `2 <= window_size < 32`.
    pub fn new(window_size: usize) -> Self {
        assert!(window_size >= 2);
        assert!(window_size < 32);
        Self { window_size }
    }

    /// The odd multiples `base, 3 * base, ..., (2^(w-1) - 1) * base`.
    pub fn table<G: ProjectiveCurve>(&self, mut base: G) -> Vec<G> {
        let mut table = Vec::with_capacity(1 << (self.window_size - 2));
        let dbl = base.double();

        for _ in 0..(1 << (self.window_size - 2)) {
            table.push(base);
            base += &dbl;
        }
        table
    }

    /// Computes scalar multiplication of a group element `g` by `scalar`.
    ///
    /// This method uses the wNAF algorithm to perform the scalar
    /// multiplication; first, it uses `Self::table` to calculate an
    /// appropriate table of multiples of `g`, and then uses the wNAF
    /// algorithm to compute the scalar multiple.
    pub fn mul<G: ProjectiveCurve>(&self, g: G, scalar: &G::ScalarField) -> G {
        let table = self.table(g);
        self.mul_inner(&table, scalar)
    }

    /// Computes scalar multiplication of a group element by `scalar`.
    /// `base_table` holds precomputed multiples of the group element; it
    /// can be generated using `Self::table`. `scalar` is an element of
    /// `G::ScalarField`.
    ///
    /// Returns `None` if the table is too small.
    pub fn mul_with_table<G: ProjectiveCurve>(
        &self,
        base_table: &[G],
        scalar: &G::ScalarField,
    ) -> Option<G> {
        if 1 << (self.window_size - 2) > base_table.len() {
            return None;
        }
        Some(self.mul_inner(base_table, scalar))
    }

    fn mul_inner<G: ProjectiveCurve>(&self, base_table: &[G], scalar: &G::ScalarField) -> G {
        let repr = scalar.into_repr();
        let scalar_wnaf = find_wnaf(repr.as_ref(), self.window_size);

        let mut result = G::zero();

        let mut found_non_zero = false;

        for n in scalar_wnaf.iter().rev() {
            if found_non_zero {
                result.double_in_place();
            }

            if *n != 0 {
                found_non_zero = true;

                if *n > 0 {
                    result += &base_table[(n / 2) as usize];
                } else {
                    result -= &base_table[((-n) / 2) as usize];
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::WnafContext;

    #[test]
    #[should_panic]
    fn window_of_one_is_rejected() {
        let _ = WnafContext::new(1);
    }
}
