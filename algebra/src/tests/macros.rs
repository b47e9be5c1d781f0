#[allow(unused_macros)]
macro_rules! std_curve_tests {
    ($CURVE_IDENT: ident, $GTField: ident) => {
        use algebra_core::{AffineCurve, PairingEngine};

        use crate::tests::{curves::*, msm::*, pairings::*};

        #[test]
        fn test_g1_curve() {
            curve_tests::<G1Projective>();
            sw_identity_misuse_test::<G1Projective>();
        }

        #[test]
        fn test_g1_serialization() {
            curve_serialization_test::<G1Affine>();
            sw_flags_test::<G1Affine>();
        }

        #[test]
        fn test_g2_curve() {
            curve_tests::<G2Projective>();
            sw_identity_misuse_test::<G2Projective>();
        }

        #[test]
        fn test_g2_serialization() {
            curve_serialization_test::<G2Affine>();
            sw_flags_test::<G2Affine>();
        }

        #[test]
        fn test_sw_models_agree() {
            sw_model_agreement_test::<g1::Parameters>();
            sw_model_agreement_test::<g2::Parameters>();
        }

        #[test]
        fn test_g1_generator() {
            let generator = G1Affine::prime_subgroup_generator();
            assert!(generator.is_on_curve());
            assert!(generator.is_in_correct_subgroup_assuming_on_curve());
        }

        #[test]
        fn test_g2_generator() {
            let generator = G2Affine::prime_subgroup_generator();
            assert!(generator.is_on_curve());
            assert!(generator.is_in_correct_subgroup_assuming_on_curve());
        }

        #[test]
        fn test_g1_msm() {
            test_msm::<G1Affine>();
        }

        #[test]
        fn test_g2_msm() {
            test_msm::<G2Affine>();
        }

        #[test]
        fn test_bilinearity() {
            bilinearity_test::<$CURVE_IDENT>();
        }

        #[test]
        fn test_generator_pairing() {
            generator_pairing_test::<$CURVE_IDENT>();
        }

        #[test]
        fn test_identity_pairing() {
            identity_pairing_test::<$CURVE_IDENT>();
        }

        #[test]
        fn test_double_miller_loop() {
            double_miller_loop_test::<$CURVE_IDENT>();
        }

        #[test]
        fn test_product_of_pairings() {
            product_of_pairings_test::<$CURVE_IDENT>();
        }

        #[test]
        fn test_target_group_type() {
            use algebra_core::Zero;

            let gt: $GTField = $CURVE_IDENT::pairing(
                G1Affine::prime_subgroup_generator(),
                G2Affine::prime_subgroup_generator(),
            )
            .unwrap();
            assert!(!gt.is_zero());
        }
    };
}

#[allow(unused_macros)]
macro_rules! edwards_curve_tests {
    () => {
        use algebra_core::curves::{AffineCurve, ProjectiveCurve};

        use crate::tests::{curves::*, msm::*};

        #[test]
        fn test_curve() {
            curve_tests::<EdwardsProjective>();
            edwards_complete_addition_test::<EdwardsProjective>();
        }

        #[test]
        fn test_serialization() {
            curve_serialization_test::<EdwardsAffine>();
        }

        #[test]
        fn test_affine_msm() {
            test_msm::<EdwardsAffine>();
        }

        #[test]
        fn test_generator() {
            let generator = EdwardsAffine::prime_subgroup_generator();
            assert!(generator.is_on_curve());
            assert!(generator.is_in_correct_subgroup_assuming_on_curve());
        }

        #[test]
        fn test_conversion() {
            use algebra_core::UniformRand;
            use rand::SeedableRng;

            let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(1231275789u64);
            let a: EdwardsAffine = EdwardsProjective::rand(&mut rng).into_affine();
            let b: EdwardsAffine = EdwardsProjective::rand(&mut rng).into_affine();
            let a_b = (a + b).into_projective().double().double();
            let a_b2 = (a.into_projective() + &b.into_projective())
                .double()
                .double();
            assert_eq!(a_b.into_affine(), a_b2.into_affine());
            assert_eq!(a_b, a_b2);
        }
    };
}
