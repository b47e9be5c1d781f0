use crate::curves::{
    mnt6::MNT6Parameters,
    short_weierstrass_projective::{GroupAffine, GroupProjective},
    AffineCurve,
};
use crate::AlgebraError;
use crate::fields::{Field, Fp3};
use num_traits::Zero;

pub type G2Affine<P> = GroupAffine<<P as MNT6Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as MNT6Parameters>::G2Parameters>;

/// Line data for one step of the Miller loop:
/// the y-coordinate of the running point `S`, the slope `gamma` of the
/// tangent or chord at `S`, and `gamma * S.x`.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: MNT6Parameters"),
    Debug(bound = "P: MNT6Parameters"),
    PartialEq(bound = "P: MNT6Parameters"),
    Eq(bound = "P: MNT6Parameters")
)]
pub struct G2PreparedCoefficients<P: MNT6Parameters> {
    pub r_y: Fp3<P::Fp3Params>,
    pub gamma: Fp3<P::Fp3Params>,
    pub gamma_x: Fp3<P::Fp3Params>,
}

#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: MNT6Parameters"),
    Debug(bound = "P: MNT6Parameters"),
    PartialEq(bound = "P: MNT6Parameters"),
    Eq(bound = "P: MNT6Parameters")
)]
pub struct G2Prepared<P: MNT6Parameters> {
    pub q: G2Affine<P>,
    pub coeffs: Vec<G2PreparedCoefficients<P>>,
}

impl<P: MNT6Parameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.q.is_zero()
    }
}

impl<P: MNT6Parameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self::from(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: MNT6Parameters> G2Prepared<P> {
    /// Precomputes the affine line coefficients of every Miller loop step.
    ///
    /// Fails with `PointNotInSubgroup` when an intermediate multiple of `q`
    /// has no tangent or chord slope, which only happens outside the prime
    /// order subgroup.
    pub fn try_from_affine(q: G2Affine<P>) -> Result<Self, AlgebraError> {
        let mut g2p = G2Prepared {
            q,
            coeffs: vec![],
        };
        if q.is_zero() {
            return Ok(g2p);
        }

        let mut s = q;

        // signed binary representation of the Ate loop count in big endian order
        for &n in P::WNAF.iter().rev() {
            // doubling step
            let gamma = {
                let sx_squared = s.x.square();
                let three_sx_squared_plus_a = sx_squared.double() + &sx_squared + &P::TWIST_COEFF_A;
                let two_sy_inv = s.y.double().inverse().ok_or_else(|| {
                    trace!("G2 point has a multiple of order two");
                    AlgebraError::PointNotInSubgroup
                })?;
                // the F3-slope of the tangent at S=(s.x,s.y)
                three_sx_squared_plus_a * &two_sy_inv
            };
            let gamma_x = gamma * &s.x;
            // x-coordinate after doubling
            let new_sx = gamma.square() - &s.x.double();
            // y-coordinate after doubling
            let new_sy = gamma * &(s.x - &new_sx) - &s.y;
            g2p.coeffs.push(G2PreparedCoefficients {
                r_y: s.y,
                gamma,
                gamma_x,
            });
            s.x = new_sx;
            s.y = new_sy;

            if n != 0 {
                // addition/substraction step depending on the sign of n
                let sx_minus_x_inv = (s.x - &q.x).inverse().ok_or_else(|| {
                    trace!("G2 point has a partial multiple equal to +-q");
                    AlgebraError::PointNotInSubgroup
                })?;
                let numerator = if n > 0 { s.y - &q.y } else { s.y + &q.y };
                // the F3-slope of chord Q' to R'
                let gamma = numerator * &sx_minus_x_inv;
                let gamma_x = gamma * &q.x;
                let new_sx = gamma.square() - &(s.x + &q.x);
                let new_sy = gamma * &(s.x - &new_sx) - &s.y;
                g2p.coeffs.push(G2PreparedCoefficients {
                    r_y: s.y,
                    gamma,
                    gamma_x,
                });
                s.x = new_sx;
                s.y = new_sy;
            }
        }
        Ok(g2p)
    }
}

impl<P: MNT6Parameters> From<G2Affine<P>> for G2Prepared<P> {
    /// # Panics
    ///
    /// Panics if `q` lies outside the prime order subgroup. Use
    /// [`G2Prepared::try_from_affine`] for unvalidated points.
    fn from(q: G2Affine<P>) -> Self {
        match Self::try_from_affine(q) {
            Ok(prepared) => prepared,
            Err(e) => panic!("{}", e),
        }
    }
}
