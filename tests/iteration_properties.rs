//! Property-based tests for the iteration helpers

use proptest::prelude::*;
use salvage::testing::{failing_at, failing_fold_at};
use salvage::{
    safe_every, safe_filter, safe_map, safe_map_with_errors, safe_reduce, safe_some, SafeOptions,
};

proptest! {
    #[test]
    fn prop_infallible_map_matches_std_map(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let expected: Vec<i64> = values.iter().map(|&x| x as i64 + 1).collect();

        let result = safe_map(
            values,
            |x, _| Ok::<_, String>(*x as i64 + 1),
            SafeOptions::default(),
        );

        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_map_drops_exactly_the_failing_indices(
        values in prop::collection::vec(any::<i32>(), 0..50),
        failures in prop::collection::btree_set(0usize..50, 0..10)
    ) {
        let failing: Vec<usize> = failures.iter().copied().collect();
        let expected: Vec<i32> = values
            .iter()
            .enumerate()
            .filter(|(i, _)| !failures.contains(i))
            .map(|(_, &x)| x)
            .collect();

        let result = safe_map(
            values,
            failing_at(failing, |x: &i32, _| *x),
            SafeOptions::default(),
        );

        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_map_with_errors_splits_input_completely(
        values in prop::collection::vec(any::<i32>(), 0..50),
        failures in prop::collection::btree_set(0usize..50, 0..10)
    ) {
        let len = values.len();
        let failing: Vec<usize> = failures.iter().copied().collect();

        let report = safe_map_with_errors(
            values,
            failing_at(failing, |x: &i32, _| *x),
            SafeOptions::default(),
        );

        // Every input item lands exactly once: in the output or in a report.
        prop_assert_eq!(report.value.len() + report.errors.len(), len);

        // Reports carry the failing indices in ascending order.
        let reported: Vec<usize> = report.errors.iter().map(|e| e.index).collect();
        let expected: Vec<usize> = failures.into_iter().filter(|i| *i < len).collect();
        prop_assert_eq!(reported, expected);
    }

    #[test]
    fn prop_filter_is_deterministic(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let predicate = |x: &i32, _: usize| {
            if x % 7 == 0 {
                Err("sevens are unreadable".to_string())
            } else {
                Ok(x % 2 == 0)
            }
        };

        let first = safe_filter(values.clone(), predicate, SafeOptions::default());
        let second = safe_filter(values, predicate, SafeOptions::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_filter_output_is_subsequence(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let kept = safe_filter(
            values.clone(),
            |x, _| Ok::<_, String>(x % 3 != 0),
            SafeOptions::default(),
        );

        // Retained items appear in input order.
        let mut cursor = values.iter();
        for item in &kept {
            prop_assert!(cursor.any(|v| v == item));
        }
    }

    #[test]
    fn prop_infallible_some_matches_any(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected = values.iter().any(|&x| x > 0);
        let result = safe_some(
            values,
            |x, _| Ok::<_, String>(*x > 0),
            SafeOptions::default(),
        );
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_infallible_every_matches_all(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected = values.iter().all(|&x| x > 0);
        let result = safe_every(
            values,
            |x, _| Ok::<_, String>(*x > 0),
            SafeOptions::default(),
        );
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_infallible_reduce_matches_fold(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected: i64 = values.iter().fold(0i64, |acc, &x| acc + x as i64);
        let result = safe_reduce(
            values,
            |acc, x, _| Ok::<_, String>(acc + *x as i64),
            0i64,
            SafeOptions::default(),
        );
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_reduce_skips_failing_steps(
        values in prop::collection::vec(1i64..1000, 0..50),
        failures in prop::collection::btree_set(0usize..50, 0..10)
    ) {
        let expected: i64 = values
            .iter()
            .enumerate()
            .filter(|(i, _)| !failures.contains(i))
            .map(|(_, &x)| x)
            .sum();

        let failing: Vec<usize> = failures.into_iter().collect();
        let result = safe_reduce(
            values,
            failing_fold_at(failing, |acc: &i64, x: &i64, _| acc + x),
            0i64,
            SafeOptions::default(),
        );

        prop_assert_eq!(result, expected);
    }
}
