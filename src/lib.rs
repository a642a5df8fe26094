// ============================================================================
// Fara'id Engine Library
// Islamic inheritance shares computed with exact fractions
// ============================================================================

//! # Fara'id Engine
//!
//! Computes how an estate is divided among the heirs of a deceased person
//! under the rules of Islamic inheritance (fara'id).
//!
//! ## Features
//!
//! - **Exact rational arithmetic** for every share; floats appear only when
//!   amounts are produced
//! - **Staged pipeline**: fixed shares, proportional abatement (awwal),
//!   residuary allocation (asabah) and return of surplus (radd)
//! - **Event stream** for auditing each stage of a calculation
//! - **Stateless calculator**, safe to share across threads
//!
//! ## Example
//!
//! ```rust
//! use faraid_engine::prelude::*;
//!
//! // Deceased man survived by his wife, both parents, a son and a daughter
//! let family = FamilyComposition::new(Gender::Male)
//!     .with_spouse(true)
//!     .with_father(true)
//!     .with_mother(true)
//!     .with_sons(1)
//!     .with_daughters(1);
//!
//! let result = calculate_inheritance(&family, 120_000.0).unwrap();
//!
//! let wife = result.share(HeirClass::Wife).unwrap();
//! assert_eq!(wife.share_amount, 15_000.0);
//! assert_eq!(result.unallocated_amount, 0.0);
//!
//! for share in &result.shares {
//!     println!("{}: {} = {:.2}", share.heir, share.share_fraction, share.share_amount);
//! }
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Analysis, CalculationId, CalculatorConfig, FamilyComposition, Gender, HeirClass,
        HeirShare, InheritanceResult, ResiduaryBranch,
    };
    pub use crate::engine::{
        calculate_inheritance, create_from_config, InheritanceCalculator,
        InheritanceCalculatorBuilder,
    };
    pub use crate::interfaces::{
        CalculationEvent, CollectingEventHandler, EventHandler, LoggingEventHandler,
        NoOpEventHandler,
    };
    pub use crate::numeric::{Fraction, NumericError};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    fn fraction_of(result: &InheritanceResult, heir: HeirClass) -> Fraction {
        result.share(heir).unwrap().share_fraction
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_awwal_scales_overfull_shares() {
        // 1/8 + 1/6 + 1/6 + 2/3 = 9/8
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(true)
            .with_father(true)
            .with_mother(true)
            .with_daughters(2);
        let result = calculate_inheritance(&family, 27_000.0).unwrap();

        assert_eq!(
            result.analysis,
            Some(Analysis::Awwal {
                total_fraction: frac(9, 8)
            })
        );
        assert_eq!(fraction_of(&result, HeirClass::Wife), frac(1, 9));
        assert_eq!(fraction_of(&result, HeirClass::Father), frac(4, 27));
        assert_eq!(fraction_of(&result, HeirClass::Mother), frac(4, 27));
        assert_eq!(fraction_of(&result, HeirClass::Daughter), frac(16, 27));

        assert_close(result.share(HeirClass::Wife).unwrap().share_amount, 3_000.0);
        assert_close(result.share(HeirClass::Daughter).unwrap().share_per_individual, 8_000.0);
        assert_close(result.total_distributed, 27_000.0);
        assert_eq!(result.unallocated_amount, 0.0);
        assert!(result.is_fully_distributed());
    }

    #[test]
    fn test_radd_keeps_ratio_between_heirs() {
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(false)
            .with_father(false)
            .with_mother(true)
            .with_sons(0)
            .with_daughters(1);
        let result = calculate_inheritance(&family, 1_200.0).unwrap();

        assert_eq!(result.analysis, Some(Analysis::Radd));
        assert_eq!(fraction_of(&result, HeirClass::Mother), frac(1, 4));
        assert_eq!(fraction_of(&result, HeirClass::Daughter), frac(3, 4));
        assert_close(result.share(HeirClass::Mother).unwrap().share_amount, 300.0);
        assert_close(result.share(HeirClass::Daughter).unwrap().share_amount, 900.0);
        assert_eq!(result.unallocated_amount, 0.0);
    }

    #[test]
    fn test_radd_skips_the_wife() {
        // Nobody is residuary, so the 5/24 left by wife and daughters goes
        // back to the daughters alone
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(true)
            .with_father(false)
            .with_mother(false)
            .with_sons(0)
            .with_daughters(2);
        let result = calculate_inheritance(&family, 2_400.0).unwrap();

        assert_eq!(result.analysis, Some(Analysis::Radd));
        assert_eq!(fraction_of(&result, HeirClass::Wife), frac(1, 8));
        assert_eq!(fraction_of(&result, HeirClass::Daughter), frac(7, 8));
        assert_close(result.share(HeirClass::Daughter).unwrap().share_per_individual, 1_050.0);
        assert_eq!(result.unallocated_amount, 0.0);
    }

    #[test]
    fn test_spouse_alone_leaves_remainder_unallocated() {
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(true)
            .with_father(false)
            .with_mother(false)
            .with_sons(0)
            .with_daughters(0);
        let result = calculate_inheritance(&family, 1_000.0).unwrap();

        assert_eq!(result.analysis, None);
        assert_eq!(result.shares.len(), 1);
        assert_close(result.total_distributed, 250.0);
        assert_close(result.unallocated_amount, 750.0);
        assert!(!result.is_fully_distributed());
    }

    #[test]
    fn test_zero_estate() {
        let result = calculate_inheritance(&FamilyComposition::default(), 0.0).unwrap();

        assert!(result.shares.is_empty());
        assert_eq!(result.total_distributed, 0.0);
        assert_eq!(result.unallocated_amount, 0.0);
        assert_eq!(result.analysis, Some(Analysis::InvalidEstate));
        assert_eq!(result, InheritanceResult::invalid_estate());
    }

    #[test]
    fn test_negative_and_nan_estate() {
        for estate in [-1.0, f64::NEG_INFINITY, f64::NAN] {
            let result = calculate_inheritance(&FamilyComposition::default(), estate).unwrap();
            assert_eq!(result.analysis, Some(Analysis::InvalidEstate));
        }
    }

    #[test]
    fn test_sons_take_twice_daughters() {
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(true)
            .with_father(true)
            .with_mother(true)
            .with_sons(1)
            .with_daughters(1);
        let result = calculate_inheritance(&family, 120_000.0).unwrap();

        assert_eq!(result.analysis, None);
        assert_eq!(fraction_of(&result, HeirClass::Son), frac(5, 18));
        assert_eq!(fraction_of(&result, HeirClass::Daughter), frac(5, 36));

        let son = result.share(HeirClass::Son).unwrap().share_amount;
        let daughter = result.share(HeirClass::Daughter).unwrap().share_amount;
        assert_close(son, 33_333.333_333);
        assert_close(daughter, 16_666.666_667);
        assert_close(son / daughter, 2.0);

        assert_close(result.share(HeirClass::Wife).unwrap().share_amount, 15_000.0);
        assert_close(result.share(HeirClass::Father).unwrap().share_amount, 20_000.0);
        assert_close(result.share(HeirClass::Mother).unwrap().share_amount, 20_000.0);
        assert_close(result.total_distributed, 120_000.0);
    }

    #[test]
    fn test_umariyyatayn_with_wife() {
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(true)
            .with_father(true)
            .with_mother(true)
            .with_sons(0)
            .with_daughters(0);
        let result = calculate_inheritance(&family, 1_000.0).unwrap();

        assert_eq!(fraction_of(&result, HeirClass::Wife), frac(1, 4));
        assert_eq!(fraction_of(&result, HeirClass::Mother), frac(1, 4));
        assert_eq!(fraction_of(&result, HeirClass::Father), frac(1, 2));
        assert_eq!(result.analysis, None);
    }

    #[test]
    fn test_kalalah_husband_and_sisters_abated() {
        let family = FamilyComposition::new(Gender::Female)
            .with_spouse(true)
            .with_father(false)
            .with_mother(false)
            .with_sons(0)
            .with_daughters(0)
            .with_sisters(2);
        let result = calculate_inheritance(&family, 700.0).unwrap();

        assert_eq!(
            result.analysis,
            Some(Analysis::Awwal {
                total_fraction: frac(7, 6)
            })
        );
        assert_close(result.share(HeirClass::Husband).unwrap().share_amount, 300.0);
        assert_close(result.share(HeirClass::Sister).unwrap().share_amount, 400.0);
    }

    #[test]
    fn test_kalalah_mother_and_sisters_radd() {
        // Two sisters reduce the mother to 1/6; the leftover 1/6 returns to both
        let family = FamilyComposition::new(Gender::Male)
            .with_spouse(false)
            .with_father(false)
            .with_mother(true)
            .with_sons(0)
            .with_daughters(0)
            .with_sisters(2);
        let result = calculate_inheritance(&family, 1_000.0).unwrap();

        assert_eq!(result.analysis, Some(Analysis::Radd));
        assert_eq!(fraction_of(&result, HeirClass::Mother), frac(1, 5));
        assert_eq!(fraction_of(&result, HeirClass::Sister), frac(4, 5));
    }

    #[test]
    fn test_brothers_share_residue_with_sisters() {
        let family = FamilyComposition::new(Gender::Female)
            .with_spouse(true)
            .with_father(false)
            .with_mother(false)
            .with_sons(0)
            .with_daughters(0)
            .with_brothers(1)
            .with_sisters(2);
        let result = calculate_inheritance(&family, 800.0).unwrap();

        // Husband 1/2, brother 2 parts and each sister 1 part of the other half
        assert_eq!(fraction_of(&result, HeirClass::Husband), frac(1, 2));
        assert_eq!(fraction_of(&result, HeirClass::Brother), frac(1, 4));
        assert_eq!(fraction_of(&result, HeirClass::Sister), frac(1, 4));
        assert_close(result.share(HeirClass::Sister).unwrap().share_per_individual, 100.0);
    }

    #[test]
    fn test_nobody_inherits() {
        let family = FamilyComposition::new(Gender::Female)
            .with_spouse(false)
            .with_father(false)
            .with_mother(false)
            .with_sons(0)
            .with_daughters(0);
        let result = calculate_inheritance(&family, 500.0).unwrap();

        assert!(result.shares.is_empty());
        assert_eq!(result.total_distributed, 0.0);
        assert_eq!(result.unallocated_amount, 500.0);
        assert_eq!(result.analysis, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_json_round_trip() {
        let result = calculate_inheritance(&FamilyComposition::default(), 1_000.0).unwrap();
        let json = result.to_json().unwrap();
        let back: InheritanceResult = serde_json::from_str(&json).unwrap();

        assert_eq!(back.analysis, result.analysis);
        assert_eq!(back.shares.len(), result.shares.len());
        for (parsed, original) in back.shares.iter().zip(&result.shares) {
            assert_eq!(parsed.heir, original.heir);
            assert_eq!(parsed.share_fraction, original.share_fraction);
        }
    }

    fn family_strategy() -> impl Strategy<Value = FamilyComposition> {
        (
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            0u32..5,
            0u32..5,
            0u32..5,
            0u32..5,
        )
            .prop_map(
                |(female, spouse, father, mother, sons, daughters, brothers, sisters)| {
                    let gender = if female { Gender::Female } else { Gender::Male };
                    FamilyComposition::new(gender)
                        .with_spouse(spouse)
                        .with_father(father)
                        .with_mother(mother)
                        .with_sons(sons)
                        .with_daughters(daughters)
                        .with_brothers(brothers)
                        .with_sisters(sisters)
                },
            )
    }

    proptest! {
        #[test]
        fn prop_estate_is_conserved(family in family_strategy(), estate in 1.0f64..10_000_000.0) {
            let result = calculate_inheritance(&family, estate).unwrap();

            let accounted = result.total_distributed + result.unallocated_amount;
            prop_assert!((accounted - estate).abs() <= estate * 1e-9 + 1e-6);
            prop_assert!(result.unallocated_amount >= -1e-6);

            let allocated = Fraction::sum(result.shares.iter().map(|s| s.share_fraction)).unwrap();
            prop_assert!(allocated <= Fraction::ONE);
            for share in &result.shares {
                prop_assert!(share.share_fraction.is_positive());
                prop_assert!(share.count > 0);
            }
        }

        #[test]
        fn prop_fully_distributed_unless_only_spouse_remains(
            family in family_strategy(),
            estate in 1.0f64..10_000_000.0,
        ) {
            let result = calculate_inheritance(&family, estate).unwrap();
            let non_spouse_heirs = result.shares.iter().any(|s| !s.heir.is_spouse());
            if non_spouse_heirs {
                prop_assert_eq!(result.unallocated_amount, 0.0);
            }
        }
    }

    #[test]
    fn prop_calculation_is_deterministic() {
        fn same_result(
            female: bool,
            flags: u8,
            sons: u8,
            daughters: u8,
            brothers: u8,
            sisters: u8,
            estate: u32,
        ) -> bool {
            let gender = if female { Gender::Female } else { Gender::Male };
            let family = FamilyComposition::new(gender)
                .with_spouse(flags & 1 != 0)
                .with_father(flags & 2 != 0)
                .with_mother(flags & 4 != 0)
                .with_sons(u32::from(sons % 6))
                .with_daughters(u32::from(daughters % 6))
                .with_brothers(u32::from(brothers % 6))
                .with_sisters(u32::from(sisters % 6));
            let estate = f64::from(estate);

            let first = calculate_inheritance(&family, estate).unwrap();
            let second = calculate_inheritance(&family, estate).unwrap();
            first == second
        }

        quickcheck(same_result as fn(bool, u8, u8, u8, u8, u8, u32) -> bool);
    }
}
