/// Generates the affine point type shared by the short Weierstrass
/// coordinate systems. The invoking module must bring `Parameters`
/// (an alias of `SWModelParameters`) and `$GroupProjective` into scope.
#[macro_export]
macro_rules! specialise_affine_to_proj {
    ($GroupProjective: ident) => {
        #[derive(Derivative)]
        #[derivative(
            Copy(bound = "P: Parameters"),
            Clone(bound = "P: Parameters"),
            PartialEq(bound = "P: Parameters"),
            Eq(bound = "P: Parameters"),
            Debug(bound = "P: Parameters"),
            Hash(bound = "P: Parameters")
        )]
        #[must_use]
        pub struct GroupAffine<P: Parameters> {
            pub x: P::BaseField,
            pub y: P::BaseField,
            pub infinity: bool,
            #[derivative(Debug = "ignore")]
            _params: PhantomData<P>,
        }

        impl<P: Parameters> AffineCurve for GroupAffine<P> {
            const COFACTOR: &'static [u64] = P::COFACTOR;
            type BaseField = P::BaseField;
            type ScalarField = P::ScalarField;
            type Projective = $GroupProjective<P>;

            fn prime_subgroup_generator() -> Self {
                Self::new(
                    P::AFFINE_GENERATOR_COEFFS.0,
                    P::AFFINE_GENERATOR_COEFFS.1,
                    false,
                )
            }

            fn is_on_curve(&self) -> bool {
                if self.is_zero() {
                    true
                } else {
                    let y2 = self.y.square();
                    let x3b = P::add_b(&((self.x.square() * &self.x) + &P::mul_by_a(&self.x)));
                    y2 == x3b
                }
            }

            fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool {
                self.mul_bits(BitIteratorBE::new(
                    <P::ScalarField as PrimeField>::MODULUS,
                ))
                .is_zero()
            }

            #[inline]
            fn mul<S: Into<<Self::ScalarField as PrimeField>::BigInt>>(
                &self,
                by: S,
            ) -> $GroupProjective<P> {
                let bits = BitIteratorBE::new(by.into());
                self.mul_bits(bits)
            }

            #[inline]
            fn mul_by_cofactor_to_projective(&self) -> Self::Projective {
                self.scale_by_cofactor()
            }

            fn mul_by_cofactor_inv(&self) -> Self {
                self.mul(P::COFACTOR_INV).into()
            }
        }

        impl<P: Parameters> GroupAffine<P> {
            pub fn new(x: P::BaseField, y: P::BaseField, infinity: bool) -> Self {
                Self {
                    x,
                    y,
                    infinity,
                    _params: PhantomData,
                }
            }

            pub fn scale_by_cofactor(&self) -> $GroupProjective<P> {
                self.mul_bits(BitIteratorBE::new(P::COFACTOR))
            }

            pub(crate) fn mul_bits(&self, bits: impl Iterator<Item = bool>) -> $GroupProjective<P> {
                let mut res = $GroupProjective::zero();
                for i in bits.skip_while(|b| !b) {
                    res.double_in_place();
                    if i {
                        res.add_assign_mixed(self)
                    }
                }
                res
            }

            /// Attempts to construct an affine point given an x-coordinate. The
            /// point is not guaranteed to be in the prime order subgroup.
            ///
            /// If and only if `greatest` is set will the lexicographically
            /// largest y-coordinate be selected.
            pub fn get_point_from_x(x: P::BaseField, greatest: bool) -> Option<Self> {
                // Compute x^3 + ax + b
                let x3b = P::add_b(&((x.square() * &x) + &P::mul_by_a(&x)));

                x3b.sqrt().map(|y| {
                    let y = if y.is_lexicographically_largest() ^ greatest {
                        -y
                    } else {
                        y
                    };
                    Self::new(x, y, false)
                })
            }

            /// Checks the curve equation and subgroup membership of a freshly
            /// decoded point.
            fn validate(self) -> Result<Self, AlgebraError> {
                if !self.is_on_curve() {
                    trace!("decoded point is not on the curve");
                    return Err(AlgebraError::PointNotOnCurve);
                }
                if !self.is_in_correct_subgroup_assuming_on_curve() {
                    trace!("decoded point is not in the prime order subgroup");
                    return Err(AlgebraError::PointNotInSubgroup);
                }
                Ok(self)
            }
        }

        impl<P: Parameters> Display for GroupAffine<P> {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                if self.infinity {
                    write!(f, "GroupAffine(Infinity)")
                } else {
                    write!(f, "GroupAffine(x={}, y={})", self.x, self.y)
                }
            }
        }

        impl<P: Parameters> Zero for GroupAffine<P> {
            fn zero() -> Self {
                Self::new(P::BaseField::zero(), P::BaseField::one(), true)
            }

            fn is_zero(&self) -> bool {
                self.infinity
            }
        }

        impl<P: Parameters> Add<Self> for GroupAffine<P> {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                let mut copy = self;
                copy += &other;
                copy
            }
        }

        impl<'a, P: Parameters> AddAssign<&'a Self> for GroupAffine<P> {
            fn add_assign(&mut self, other: &'a Self) {
                let mut s_proj = $GroupProjective::from(*self);
                s_proj.add_assign_mixed(other);
                *self = s_proj.into();
            }
        }

        impl<P: Parameters> Neg for GroupAffine<P> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                if !self.is_zero() {
                    Self::new(self.x, -self.y, false)
                } else {
                    self
                }
            }
        }

        impl<P: Parameters> Default for GroupAffine<P> {
            #[inline]
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<P: Parameters> CanonicalSerialize for GroupAffine<P> {
            /// Writes `x` with the compression flag set. The identity is
            /// an all-zero `x` carrying the infinity flag.
            fn serialize<W: Write>(&self, mut writer: W) -> Result<(), AlgebraError> {
                if self.is_zero() {
                    P::BaseField::zero().serialize_with_flags(&mut writer, PointFlags::infinity(true))
                } else {
                    let flags = PointFlags::compressed(self.y.is_lexicographically_largest());
                    self.x.serialize_with_flags(&mut writer, flags)
                }
            }

            fn serialized_size(&self) -> usize {
                self.x.serialized_size_with_flags::<PointFlags>()
            }

            fn serialize_uncompressed<W: Write>(&self, mut writer: W) -> Result<(), AlgebraError> {
                if self.is_zero() {
                    P::BaseField::zero()
                        .serialize_with_flags(&mut writer, PointFlags::infinity(false))?;
                    P::BaseField::zero().serialize(&mut writer)
                } else {
                    self.x.serialize_with_flags(&mut writer, PointFlags::uncompressed())?;
                    self.y.serialize(&mut writer)
                }
            }

            fn uncompressed_size(&self) -> usize {
                self.x.serialized_size_with_flags::<PointFlags>() + self.y.serialized_size()
            }
        }

        impl<P: Parameters> CanonicalDeserialize for GroupAffine<P> {
            fn deserialize<R: Read>(mut reader: R) -> Result<Self, AlgebraError> {
                let (x, flags): (P::BaseField, PointFlags) =
                    CanonicalDeserializeWithFlags::deserialize_with_flags(&mut reader)?;
                if !flags.compressed {
                    trace!("expected a compressed point encoding");
                    return Err(AlgebraError::InvalidEncoding);
                }
                if flags.is_infinity {
                    return if x.is_zero() {
                        Ok(Self::zero())
                    } else {
                        Err(AlgebraError::InvalidEncoding)
                    };
                }
                let point = Self::get_point_from_x(x, flags.y_sign).ok_or_else(|| {
                    trace!("no curve point has the decoded x-coordinate");
                    AlgebraError::PointNotOnCurve
                })?;
                point.validate()
            }

            fn deserialize_uncompressed<R: Read>(mut reader: R) -> Result<Self, AlgebraError> {
                let (x, flags): (P::BaseField, PointFlags) =
                    CanonicalDeserializeWithFlags::deserialize_with_flags(&mut reader)?;
                let y = P::BaseField::deserialize(&mut reader)?;
                if flags.compressed {
                    trace!("expected an uncompressed point encoding");
                    return Err(AlgebraError::InvalidEncoding);
                }
                if flags.is_infinity {
                    return if x.is_zero() && y.is_zero() {
                        Ok(Self::zero())
                    } else {
                        Err(AlgebraError::InvalidEncoding)
                    };
                }
                Self::new(x, y, false).validate()
            }
        }
    };
}
