use crate::{
    curves::{
        models::{
            bn::BnParameters,
            sextic_twist::{EllCoeff, LineRecorder},
            SWModelParameters,
        },
        short_weierstrass_jacobian::{GroupAffine, GroupProjective},
        AffineCurve,
    },
    fields::{fp6_3over2::Fp6Parameters, Field, Fp2},
};
use num_traits::Zero;

pub type G2Affine<P> = GroupAffine<<P as BnParameters>::G2Parameters>;
pub type G2Projective<P> = GroupProjective<<P as BnParameters>::G2Parameters>;

#[derive(Derivative)]
#[derivative(
    Clone(bound = "P: BnParameters"),
    Debug(bound = "P: BnParameters"),
    PartialEq(bound = "P: BnParameters"),
    Eq(bound = "P: BnParameters")
)]
pub struct G2Prepared<P: BnParameters> {
    /// One line per doubling and addition of the loop over `6u + 2`,
    /// followed by the lines through `pi(q)` and `-pi^2(q)`.
    pub ell_coeffs: Vec<EllCoeff<Fp2<P::Fp2Params>>>,
    pub infinity: bool,
}

impl<P: BnParameters> Default for G2Prepared<P> {
    fn default() -> Self {
        Self::from(G2Affine::<P>::prime_subgroup_generator())
    }
}

impl<P: BnParameters> From<G2Affine<P>> for G2Prepared<P> {
    fn from(q: G2Affine<P>) -> Self {
        if q.is_zero() {
            return Self {
                ell_coeffs: vec![],
                infinity: true,
            };
        }

        let mut lines = LineRecorder::new(q.x, q.y, P::G2Parameters::COEFF_B, P::TWIST_TYPE);
        let neg_y = -q.y;
        for &digit in P::SIX_U_PLUS_2_NAF.iter().rev().skip(1) {
            lines.double();
            match digit {
                1 => lines.add(&q.x, &q.y),
                -1 => lines.add(&q.x, &neg_y),
                _ => {},
            }
        }

        // The untwist-Frobenius-twist endomorphism on the twist:
        // pi(x, y) = (x^q * xi^((q - 1) / 3), y^q * xi^((q - 1) / 2)).
        let mut pi_x = q.x;
        pi_x.frobenius_map(1);
        pi_x *= &P::Fp6Params::FROBENIUS_COEFF_FP6_C1[1];
        let mut pi_y = q.y;
        pi_y.frobenius_map(1);
        pi_y *= &P::CUBIC_NONRESIDUE_TO_Q_MINUS_1_OVER_2;
        lines.add(&pi_x, &pi_y);

        // -pi^2(q) = (x * xi^((q^2 - 1) / 3), y), as xi^((q^2 - 1) / 2) = -1.
        let pi2_x = q.x * &P::Fp6Params::FROBENIUS_COEFF_FP6_C1[2];
        lines.add(&pi2_x, &q.y);

        Self {
            ell_coeffs: lines.into_lines(),
            infinity: false,
        }
    }
}

impl<P: BnParameters> G2Prepared<P> {
    pub fn is_zero(&self) -> bool {
        self.infinity
    }
}
