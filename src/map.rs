//! Fallible transformation with per-item error isolation
//!
//! [`safe_map`] transforms a sequence with a fallible callback. An item whose
//! transformation fails is skipped, so the output may be shorter than the
//! input; the relative order of surviving items is preserved.
//! [`safe_map_with_errors`] additionally captures one [`ErrorReport`] per
//! failed item.
//!
//! # Examples
//!
//! ```
//! use salvage::{safe_map, SafeOptions};
//!
//! let halved = safe_map(
//!     vec![4, 5, 8],
//!     |x, _| {
//!         if x % 2 == 0 {
//!             Ok(x / 2)
//!         } else {
//!             Err(format!("{} is odd", x))
//!         }
//!     },
//!     SafeOptions::default(),
//! );
//!
//! // The odd element is skipped rather than aborting the pass.
//! assert_eq!(halved, vec![2, 4]);
//! ```

use crate::report::{trace_isolated, ErrorReport, Report, SafeOptions};

/// Transform a sequence with a fallible callback, skipping items that fail.
///
/// The transformer is invoked once per item, in order, with the item and its
/// zero-based index. Items whose transformer returns `Err` are omitted from
/// the output; the error is forwarded to the `on_error` hook when one is
/// installed and otherwise discarded. Use [`safe_map_with_errors`] to keep
/// the failures.
///
/// # Examples
///
/// ```
/// use salvage::{safe_map, SafeOptions};
///
/// let lengths = safe_map(
///     vec!["a", "bb", "ccc"],
///     |s, _| Ok::<_, String>(s.len()),
///     SafeOptions::default(),
/// );
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
///
/// Failures can be observed without collecting them:
///
/// ```
/// use salvage::{safe_map, SafeOptions};
///
/// let mut failed_at = Vec::new();
/// let mut hook = |_: &String, _: &&str, index: usize| failed_at.push(index);
///
/// let parsed = safe_map(
///     vec!["1", "x", "3"],
///     |s, _| s.parse::<i32>().map_err(|e| e.to_string()),
///     SafeOptions::on_error(&mut hook),
/// );
///
/// assert_eq!(parsed, vec![1, 3]);
/// assert_eq!(failed_at, vec![1]);
/// ```
pub fn safe_map<T, U, E, I, F>(
    collection: I,
    mut transformer: F,
    mut options: SafeOptions<'_, T, E>,
) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<U, E>,
{
    let mut results = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match transformer(&item, index) {
            Ok(output) => results.push(output),
            Err(error) => {
                trace_isolated("safe_map", index);
                options.notify(&error, &item, index);
            }
        }
    }

    results
}

/// Transform a sequence with a fallible callback, collecting both the
/// surviving outputs and a report for every failure.
///
/// Behaves exactly like [`safe_map`], but each failed evaluation also
/// produces an [`ErrorReport`] owning the error and the offending item.
/// Reports appear in iteration order.
///
/// # Examples
///
/// ```
/// use salvage::{safe_map_with_errors, SafeOptions};
///
/// let report = safe_map_with_errors(
///     vec![2, 3, 4],
///     |x, _| {
///         if x % 2 == 0 {
///             Ok(x * 10)
///         } else {
///             Err("odd".to_string())
///         }
///     },
///     SafeOptions::default(),
/// );
///
/// assert_eq!(report.value, vec![20, 40]);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].item, 3);
/// assert_eq!(report.errors[0].index, 1);
/// ```
pub fn safe_map_with_errors<T, U, E, I, F>(
    collection: I,
    mut transformer: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<Vec<U>, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<U, E>,
{
    let mut results = Vec::new();
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match transformer(&item, index) {
            Ok(output) => results.push(output),
            Err(error) => {
                trace_isolated("safe_map_with_errors", index);
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
