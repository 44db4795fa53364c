//! Property-based tests for rollout decisions.
//!
//! These tests verify that bucketing is deterministic, monotonic in the
//! percentage, and independent of the on/off switch.

use proptest::prelude::*;

use rollout::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn decision_is_deterministic(id in ".*", percentage in -50.0f64..150.0) {
        let registry = Registry::new(vec![Feature::new("f", percentage, true)]);

        let first = registry.is_active("f", &id);
        for _ in 0..5 {
            prop_assert_eq!(registry.is_active("f", &id), first);
        }

        // A fresh registry with the same definition agrees
        let rebuilt = Registry::new(vec![Feature::new("f", percentage, false)]);
        prop_assert_eq!(rebuilt.is_active("f", &id), first);
    }

    #[test]
    fn raising_percentage_never_removes_users(
        id in "[a-f0-9-]{1,40}",
        low in -10.0f64..110.0,
        delta in 0.0f64..110.0,
    ) {
        let high = low + delta;
        let before = Registry::new(vec![Feature::new("f", low, true)]);
        let after = Registry::new(vec![Feature::new("f", high, true)]);

        if before.is_active("f", &id) {
            prop_assert!(after.is_active("f", &id));
        }
    }

    #[test]
    fn boundaries_hold_for_every_id(id in ".*") {
        let registry = Registry::new(vec![
            Feature::new("none", 0.0, true),
            Feature::new("all", 100.0, false),
        ]);

        prop_assert!(!registry.is_active("none", &id));
        prop_assert!(registry.is_active("all", &id));
    }

    #[test]
    fn decision_matches_bucket(id in ".*", percentage in 0.0f64..100.0) {
        let registry = Registry::new(vec![Feature::new("f", percentage, true)]);

        prop_assert!(bucket(&id) < BUCKET_COUNT);
        prop_assert_eq!(
            registry.is_active("f", &id),
            percentage > f64::from(checksum(&id) % 100)
        );
    }

    #[test]
    fn switch_and_percentage_are_independent(
        id in ".*",
        percentage in -10.0f64..110.0,
        other in -10.0f64..110.0,
        active in any::<bool>(),
    ) {
        let on = Registry::new(vec![Feature::new("f", percentage, active)]);
        let off = Registry::new(vec![Feature::new("f", percentage, !active)]);
        prop_assert_eq!(on.is_active("f", &id), off.is_active("f", &id));

        let moved = Registry::new(vec![Feature::new("f", other, active)]);
        prop_assert_eq!(on.is_feature_active("f"), moved.is_feature_active("f"));
        prop_assert_eq!(on.is_feature_active("f"), active);
    }

    #[test]
    fn set_fully_replaces(
        first in 0.0f64..100.0,
        second in 0.0f64..100.0,
        a in any::<bool>(),
        b in any::<bool>(),
    ) {
        let mut registry = Registry::new(vec![Feature::new("f", first, a)]);
        registry.set(Feature::new("f", second, b));

        prop_assert_eq!(registry.get("f"), Some(Feature::new("f", second, b)));
        prop_assert_eq!(registry.len(), 1);
    }
}
