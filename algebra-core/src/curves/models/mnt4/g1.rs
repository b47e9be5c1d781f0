use crate::curves::{
    mnt4::MNT4Parameters,
    short_weierstrass_projective::{GroupAffine, GroupProjective},
    AffineCurve,
};
use crate::fields::{Field, Fp2};
use num_traits::Zero;

pub type G1Affine<P> = GroupAffine<<P as MNT4Parameters>::G1Parameters>;
pub type G1Projective<P> = GroupProjective<<P as MNT4Parameters>::G1Parameters>;

/// A point of G1 together with `y * twist^2`, which every line evaluation
/// of the Miller loop needs.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: MNT4Parameters"),
    Clone(bound = "P: MNT4Parameters"),
    Debug(bound = "P: MNT4Parameters"),
    PartialEq(bound = "P: MNT4Parameters"),
    Eq(bound = "P: MNT4Parameters")
)]
pub struct G1Prepared<P: MNT4Parameters> {
    pub p: G1Affine<P>,
    pub py_twist_squared: Fp2<P::Fp2Params>,
}

impl<P: MNT4Parameters> From<G1Affine<P>> for G1Prepared<P> {
    fn from(p: G1Affine<P>) -> Self {
        let mut py_twist_squared = P::TWIST.square();
        py_twist_squared.mul_assign_by_fp(&p.y);

        G1Prepared {
            p,
            py_twist_squared,
        }
    }
}

impl<P: MNT4Parameters> G1Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }
}

impl<P: MNT4Parameters> Default for G1Prepared<P> {
    fn default() -> Self {
        Self::from(G1Affine::<P>::prime_subgroup_generator())
    }
}
