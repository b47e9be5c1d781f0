//! Miller loop lines for pairings whose G2 is a sextic twist over `Fp2`
//! and whose target group is `Fp12`, i.e. the BLS12 and BN families.
//!
//! The running point is kept in homogeneous projective coordinates and
//! every doubling or addition records the line through it, following
//! formulas 11 and 12 of <https://eprint.iacr.org/2013/722.pdf>.
use crate::fields::{
    fp12_2over3over2::{Fp12, Fp12Parameters},
    fp6_3over2::Fp6Parameters,
    Field, Fp2, Fp2Parameters,
};
use core::slice;
use num_traits::One;

type Fp2Params<P> = <<P as Fp12Parameters>::Fp6Params as Fp6Parameters>::Fp2Params;
type BaseField<P> = <Fp2Params<P> as Fp2Parameters>::Fp;

/// Which side of the pairing the sextic twist of G2 divides `b` on. This
/// decides where the sparse line coefficients land in `Fp12`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TwistType {
    M,
    D,
}

/// The three non-zero `Fp2` coefficients of a line in `Fp12`.
pub type EllCoeff<F> = (F, F, F);

/// Walks multiples of a G2 point and records the line of every step.
pub(crate) struct LineRecorder<F: Fp2Parameters> {
    x: Fp2<F>,
    y: Fp2<F>,
    z: Fp2<F>,
    coeff_b: Fp2<F>,
    twist: TwistType,
    lines: Vec<EllCoeff<Fp2<F>>>,
}

impl<F: Fp2Parameters> LineRecorder<F> {
    /// Starts at the affine point `(x, y)` of `y^2 = x^3 + coeff_b`.
    pub(crate) fn new(x: Fp2<F>, y: Fp2<F>, coeff_b: Fp2<F>, twist: TwistType) -> Self {
        Self {
            x,
            y,
            z: Fp2::one(),
            coeff_b,
            twist,
            lines: vec![],
        }
    }

    /// Doubles the running point. The new coordinates are scaled by 4 so
    /// that no halving is needed.
    pub(crate) fn double(&mut self) {
        let a = self.x * &self.y;
        let b = self.y.square();
        let c = self.z.square();
        let e = self.coeff_b * &(c.double() + &c);
        let f = e.double() + &e;
        let g = b + &f;
        let h = (self.y + &self.z).square() - &(b + &c);
        let i = e - &b;
        let j = self.x.square();
        let e_square = e.square();

        self.x = (a * &(b - &f)).double();
        self.y = g.square() - &(e_square.double() + &e_square).double().double();
        self.z = (b * &h).double().double();

        let line = match self.twist {
            TwistType::M => (i, j.double() + &j, -h),
            TwistType::D => (-h, j.double() + &j, i),
        };
        self.lines.push(line);
    }

    /// Adds the affine point `(qx, qy)` to the running point. The two must
    /// differ and must not be negatives of each other.
    pub(crate) fn add(&mut self, qx: &Fp2<F>, qy: &Fp2<F>) {
        let theta = self.y - &(*qy * &self.z);
        let lambda = self.x - &(*qx * &self.z);
        let c = theta.square();
        let d = lambda.square();
        let e = lambda * &d;
        let f = self.z * &c;
        let g = self.x * &d;
        let h = e + &f - &g.double();
        self.x = lambda * &h;
        self.y = theta * &(g - &h) - &(e * &self.y);
        self.z *= &e;
        let j = theta * qx - &(lambda * qy);

        let line = match self.twist {
            TwistType::M => (j, -theta, lambda),
            TwistType::D => (lambda, -theta, j),
        };
        self.lines.push(line);
    }

    pub(crate) fn into_lines(self) -> Vec<EllCoeff<Fp2<F>>> {
        self.lines
    }
}

/// Feeds the recorded lines of several pairs into one Miller loop
/// accumulator, one step at a time.
pub(crate) struct LineEvaluator<'a, P: Fp12Parameters> {
    twist: TwistType,
    pairs: Vec<(
        BaseField<P>,
        BaseField<P>,
        slice::Iter<'a, EllCoeff<Fp2<Fp2Params<P>>>>,
    )>,
}

impl<'a, P: Fp12Parameters> LineEvaluator<'a, P> {
    pub(crate) fn new(twist: TwistType) -> Self {
        Self {
            twist,
            pairs: vec![],
        }
    }

    /// Adds the pair with G1 point `(px, py)` and the prepared G2 lines.
    pub(crate) fn push(
        &mut self,
        px: BaseField<P>,
        py: BaseField<P>,
        lines: &'a [EllCoeff<Fp2<Fp2Params<P>>>],
    ) {
        self.pairs.push((px, py, lines.iter()));
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Multiplies `f` by the next line of every pair, evaluated at its G1
    /// point.
    pub(crate) fn step(&mut self, f: &mut Fp12<P>) {
        for (px, py, lines) in &mut self.pairs {
            let (mut c0, mut c1, mut c2) = match lines.next() {
                Some(line) => *line,
                None => continue,
            };
            match self.twist {
                TwistType::M => {
                    c2.mul_assign_by_fp(py);
                    c1.mul_assign_by_fp(px);
                    f.mul_by_014(&c0, &c1, &c2);
                },
                TwistType::D => {
                    c0.mul_assign_by_fp(py);
                    c1.mul_assign_by_fp(px);
                    f.mul_by_034(&c0, &c1, &c2);
                },
            }
        }
    }
}

