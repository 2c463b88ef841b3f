//! Fallible filtering with per-item error isolation
//!
//! [`safe_filter`] retains the items a fallible predicate accepts. An item
//! whose predicate fails is dropped from the output, exactly as if the
//! predicate had rejected it, and iteration continues.
//! [`safe_filter_with_errors`] additionally reports each failure, which is
//! the only way to tell a rejected item from a failed one.

use crate::report::{trace_isolated, ErrorReport, Report, SafeOptions};

/// Retain the items of a sequence accepted by a fallible predicate.
///
/// The predicate is invoked once per item, in order. Items are kept when it
/// returns `Ok(true)`, dropped on `Ok(false)`, and skipped on `Err` after
/// notifying the `on_error` hook.
///
/// # Examples
///
/// ```
/// use salvage::{safe_filter, SafeOptions};
///
/// let evens = safe_filter(
///     vec![1, 2, 3, 4],
///     |x, _| Ok::<_, String>(x % 2 == 0),
///     SafeOptions::default(),
/// );
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn safe_filter<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut results = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => results.push(item),
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_filter", index);
                options.notify(&error, &item, index);
            }
        }
    }

    results
}

/// Retain the items accepted by a fallible predicate, collecting a report
/// for every failed evaluation.
///
/// Behaves exactly like [`safe_filter`], but each failure also produces an
/// [`ErrorReport`] owning the error and the offending item, in iteration
/// order.
///
/// # Examples
///
/// ```
/// use salvage::{safe_filter_with_errors, SafeOptions};
///
/// let report = safe_filter_with_errors(
///     vec!["7", "x", "12"],
///     |s, _| s.parse::<i32>().map(|n| n > 10).map_err(|e| e.to_string()),
///     SafeOptions::default(),
/// );
///
/// assert_eq!(report.value, vec!["12"]);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].item, "x");
/// ```
pub fn safe_filter_with_errors<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<Vec<T>, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut results = Vec::new();
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => results.push(item),
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_filter_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });
            }
        }
    }

    Report {
        value: results,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::failing_at;

    #[test]
    fn test_filter_retains_matches() {
        let result = safe_filter(
            vec![1, 2, 3, 4, 5],
            |x, _| Ok::<_, String>(x % 2 == 1),
            SafeOptions::default(),
        );
        assert_eq!(result, vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_skips_failures() {
        let result = safe_filter(
            vec![1, 2, 3, 4],
            failing_at(vec![2], |x: &i32, _| *x > 1),
            SafeOptions::default(),
        );
        // Index 2 would have matched, but its failure drops it.
        assert_eq!(result, vec![2, 4]);
    }

    #[test]
    fn test_filter_empty_input() {
        let result = safe_filter(
            Vec::<i32>::new(),
            |_, _| Ok::<_, String>(true),
            SafeOptions::default(),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_notifies_hook() {
        let mut failed = Vec::new();
        let mut hook = |_: &String, item: &i32, index: usize| failed.push((*item, index));

        let result = safe_filter(
            vec![10, 20, 30],
            failing_at(vec![1], |_: &i32, _| true),
            SafeOptions::on_error(&mut hook),
        );

        assert_eq!(result, vec![10, 30]);
        assert_eq!(failed, vec![(20, 1)]);
    }

    #[test]
    fn test_filter_with_errors_separates_rejected_from_failed() {
        let report = safe_filter_with_errors(
            vec![1, 2, 3, 4],
            failing_at(vec![3], |x: &i32, _| x % 2 == 0),
            SafeOptions::default(),
        );

        // 1 and 3 were rejected, 4 failed, only 2 survives.
        assert_eq!(report.value, vec![2]);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].item, 4);
        assert_eq!(report.errors[0].index, 3);
    }

    #[test]
    fn test_filter_with_errors_clean_pass() {
        let report = safe_filter_with_errors(
            vec![1, 2, 3],
            |x, _| Ok::<_, String>(*x < 3),
            SafeOptions::default(),
        );
        assert_eq!(report.value, vec![1, 2]);
        assert!(report.is_clean());
    }

    #[test]
    fn test_filter_is_deterministic_for_pure_predicates() {
        let predicate = |x: &i32, _: usize| {
            if *x == 2 {
                Err("two".to_string())
            } else {
                Ok(*x > 0)
            }
        };

        let first = safe_filter(vec![1, 2, 3], predicate, SafeOptions::default());
        let second = safe_filter(vec![1, 2, 3], predicate, SafeOptions::default());
        assert_eq!(first, second);
    }
}
