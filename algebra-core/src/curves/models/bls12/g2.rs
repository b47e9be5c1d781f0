use crate::{
    curves::{
        models::{
            bls12::Bls12Parameters,
            sextic_twist::{EllCoeff, LineRecorder},
            SWModelParameters,
        },
        short_weierstrass_jacobian::{GroupAffine, GroupProjective},
        AffineCurve,
    },
    fields::{BitIteratorBE, Fp2},
};
use num_traits::Zero;

pub type G2Affine<P> = GroupAffine<<P as Bls12Parameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as Bls12Parameters>::G2Parameters>;

#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: Bls12Parameters"),
    Debug(bound = "P: Bls12Parameters"),
    PartialEq(bound = "P: Bls12Parameters"),
    Eq(bound = "P: Bls12Parameters")
)]
pub struct G2Prepared<P: Bls12Parameters> {
    /// One line per doubling and addition of the loop over `|x|`.
    pub ell_coeffs: Vec<EllCoeff<Fp2<P::Fp2Params>>>,
    pub infinity: bool,
}

impl<P: Bls12Parameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self::from(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: Bls12Parameters> From<G2Affine<P>> for G2Prepared<P> {
    fn from(q: G2Affine<P>) -> Self {
        if q.is_zero() {
            return Self {
                ell_coeffs: vec![],
                infinity: true,
            };
        }

        let mut lines = LineRecorder::new(q.x, q.y, P::G2Parameters::COEFF_B, P::TWIST_TYPE);
        for bit in BitIteratorBE::without_leading_zeros(P::X).skip(1) {
            lines.double();
            if bit {
                lines.add(&q.x, &q.y);
            }
        }

        Self {
            ell_coeffs: lines.into_lines(),
            infinity: false,
        }
    }
}

impl<P: Bls12Parameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}
