//! Fallible aggregation with per-item error isolation
//!
//! [`safe_reduce`] folds a sequence into a single accumulated value with a
//! fallible reducer. A step that fails leaves the accumulator exactly as it
//! was and the fold continues with the next item, so the result reflects
//! every step that succeeded and nothing else.
//!
//! The reducer borrows the current accumulator and returns the next one,
//! which is what lets a failed step leave the previous value intact.

use crate::report::{trace_isolated, ErrorReport, Report, SafeOptions};

/// Fold a sequence into an accumulated value with a fallible reducer.
///
/// The reducer is invoked once per item, in order, with the current
/// accumulator, the item, and its index. On `Ok`, the returned value
/// becomes the new accumulator; on `Err`, the accumulator is left unchanged,
/// the `on_error` hook is notified, and the fold continues. The initial
/// value is returned untouched for an empty sequence.
///
/// # Examples
///
/// ```
/// use salvage::{safe_reduce, SafeOptions};
///
/// let sum = safe_reduce(
///     vec!["1", "x", "3"],
///     |acc, s, _| s.parse::<i32>().map(|n| acc + n).map_err(|e| e.to_string()),
///     0,
///     SafeOptions::default(),
/// );
///
/// // The unparseable element contributes nothing.
/// assert_eq!(sum, 4);
/// ```
pub fn safe_reduce<T, A, E, I, F>(
    collection: I,
    mut reducer: F,
    initial: A,
    mut options: SafeOptions<'_, T, E>,
) -> A
where
    I: IntoIterator<Item = T>,
    F: FnMut(&A, &T, usize) -> Result<A, E>,
{
    let mut accumulator = initial;

    for (index, item) in collection.into_iter().enumerate() {
        match reducer(&accumulator, &item, index) {
            Ok(next) => accumulator = next,
            Err(error) => {
                trace_isolated("safe_reduce", index);
                options.notify(&error, &item, index);
            }
        }
    }

    accumulator
}

/// Fold a sequence with a fallible reducer, collecting a report for every
/// failed step.
///
/// Behaves exactly like [`safe_reduce`]; each failed step also produces an
/// [`ErrorReport`] owning the error and the item that could not be folded
/// in.
///
/// # Examples
///
/// ```
/// use salvage::{safe_reduce_with_errors, SafeOptions};
///
/// let report = safe_reduce_with_errors(
///     vec![1, 2, 3],
///     |acc, x, _| {
///         if *x == 2 {
///             Err("even".to_string())
///         } else {
///             Ok(acc + x)
///         }
///     },
///     0,
///     SafeOptions::default(),
/// );
///
/// assert_eq!(report.value, 4);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].item, 2);
/// ```
pub fn safe_reduce_with_errors<T, A, E, I, F>(
    collection: I,
    mut reducer: F,
    initial: A,
    mut options: SafeOptions<'_, T, E>,
) -> Report<A, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&A, &T, usize) -> Result<A, E>,
{
    let mut accumulator = initial;
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match reducer(&accumulator, &item, index) {
            Ok(next) => accumulator = next,
            Err(error) => {
                trace_isolated("safe_reduce_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });
            }
        }
    }

    Report {
        value: accumulator,
        errors,
    }
}
