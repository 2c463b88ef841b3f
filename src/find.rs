//! Fallible searching with per-item error isolation
//!
//! [`safe_find`] and [`safe_find_index`] return the first item (or its
//! position) accepted by a fallible predicate. A failed evaluation is
//! skipped and the search continues; only when no later item matches does
//! the search come back empty. The `*_with_errors` variants collect the
//! failures encountered before the match; items past the match are never
//! evaluated, so they can contribute neither matches nor errors.

use crate::report::{trace_isolated, ErrorReport, Report, SafeOptions};

/// Return the first item of a sequence accepted by a fallible predicate.
///
/// The predicate is invoked once per item, in order, until it returns
/// `Ok(true)`; that item is returned and the rest of the sequence is never
/// evaluated. Failed evaluations notify the `on_error` hook and the search
/// continues. Returns `None` when the sequence is exhausted without a match.
///
/// # Examples
///
/// ```
/// use salvage::{safe_find, SafeOptions};
///
/// let found = safe_find(
///     vec![3, 8, 12],
///     |x, _| Ok::<_, String>(*x > 5),
///     SafeOptions::default(),
/// );
/// assert_eq!(found, Some(8));
/// ```
///
/// A failure on the way to the match does not abort the search:
///
/// ```
/// use salvage::{safe_find, SafeOptions};
///
/// let found = safe_find(
///     vec![10, 20, 30],
///     |x, _| {
///         if *x == 20 {
///             Err("unreadable")
///         } else {
///             Ok(*x == 30)
///         }
///     },
///     SafeOptions::default(),
/// );
/// assert_eq!(found, Some(30));
/// ```
pub fn safe_find<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => return Some(item),
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_find", index);
                options.notify(&error, &item, index);
            }
        }
    }

    None
}

/// Return the first item accepted by a fallible predicate, collecting the
/// failures encountered before the match.
///
/// Behaves exactly like [`safe_find`], but every failed evaluation prior to
/// the match produces an [`ErrorReport`]. Only errors that occur before the
/// desired match can be collected.
///
/// # Examples
///
/// ```
/// use salvage::{safe_find_with_errors, SafeOptions};
///
/// let report = safe_find_with_errors(
///     vec![10, 20, 30],
///     |x, _| {
///         if *x == 20 {
///             Err("unreadable")
///         } else {
///             Ok(*x == 30)
///         }
///     },
///     SafeOptions::default(),
/// );
///
/// assert_eq!(report.value, Some(30));
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].item, 20);
/// assert_eq!(report.errors[0].index, 1);
/// ```
pub fn safe_find_with_errors<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<Option<T>, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => {
                return Report {
                    value: Some(item),
                    errors,
                }
            }
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_find_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });
            }
        }
    }

    Report {
        value: None,
        errors,
    }
}

/// Return the position of the first item accepted by a fallible predicate.
///
/// Same search behavior as [`safe_find`], yielding the zero-based index
/// instead of the item. Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use salvage::{safe_find_index, SafeOptions};
///
/// let position = safe_find_index(
///     vec!["a", "bb", "ccc"],
///     |s, _| Ok::<_, String>(s.len() == 2),
///     SafeOptions::default(),
/// );
/// assert_eq!(position, Some(1));
/// ```
pub fn safe_find_index<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Option<usize>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => return Some(index),
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_find_index", index);
                options.notify(&error, &item, index);
            }
        }
    }

    None
}

/// Return the position of the first accepted item, collecting the failures
/// encountered before the match.
///
/// # Examples
///
/// ```
/// use salvage::{safe_find_index_with_errors, SafeOptions};
///
/// let report = safe_find_index_with_errors(
///     vec![1, 2, 3],
///     |x, _| {
///         if *x == 1 {
///             Err("opaque")
///         } else {
///             Ok(*x == 3)
///         }
///     },
///     SafeOptions::default(),
/// );
///
/// assert_eq!(report.value, Some(2));
/// assert_eq!(report.errors[0].index, 0);
/// ```
pub fn safe_find_index_with_errors<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<Option<usize>, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => {
                return Report {
                    value: Some(index),
                    errors,
                }
            }
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_find_index_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });
            }
        }
    }

    Report {
        value: None,
        errors,
    }
}
