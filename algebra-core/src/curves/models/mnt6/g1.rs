use crate::curves::{
    mnt6::MNT6Parameters,
    short_weierstrass_projective::{GroupAffine, GroupProjective},
    AffineCurve,
};
use crate::fields::{Field, Fp3};
use num_traits::Zero;

pub type G1Affine<P> = GroupAffine<<P as MNT6Parameters>::G1Parameters>;
pub type G1Projective<P> = GroupProjective<<P as MNT6Parameters>::G1Parameters>;

/// A point of G1 together with `y * twist^2`, which every line evaluation
/// of the Miller loop needs.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: MNT6Parameters"),
    Clone(bound = "P: MNT6Parameters"),
    Debug(bound = "P: MNT6Parameters"),
    PartialEq(bound = "P: MNT6Parameters"),
    Eq(bound = "P: MNT6Parameters")
)]
pub struct G1Prepared<P: MNT6Parameters> {
    pub p: G1Affine<P>,
    pub py_twist_squared: Fp3<P::Fp3Params>,
}

impl<P: MNT6Parameters> From<G1Affine<P>> for G1Prepared<P> {
    fn from(p: G1Affine<P>) -> Self {
        let mut py_twist_squared = P::TWIST.square();
        py_twist_squared.mul_assign_by_fp(&p.y);

        G1Prepared {
            p,
            py_twist_squared,
        }
    }
}

impl<P: MNT6Parameters> G1Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }
}

impl<P: MNT6Parameters> Default for G1Prepared<P> {
    fn default() -> Self {
        Self::from(G1Affine::<P>::prime_subgroup_generator())
    }
}
