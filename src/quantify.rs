//! Existential and universal tests with asymmetric failure policies
//!
//! [`safe_some`] asks whether any item satisfies a fallible predicate;
//! [`safe_every`] asks whether all of them do. Their failure policies are
//! deliberately different:
//!
//! - `safe_some` treats a failed evaluation like any other iteration helper:
//!   the item is skipped and the search for a witness continues.
//! - `safe_every` treats a failed evaluation as a refuted claim. The first
//!   failure terminates the whole pass immediately and the answer is
//!   `false`, exactly as if the predicate had returned `Ok(false)`. Items
//!   past the failure are never evaluated, so [`safe_every_with_errors`]
//!   can collect at most one report.
//!
//! The universal claim "every item passes" cannot survive an item whose
//! evaluation failed, whereas the existential claim "some item passes" can
//! still be proven by a later witness.

use crate::report::{trace_isolated, ErrorReport, Report, SafeOptions};

/// Test whether any item of a sequence satisfies a fallible predicate.
///
/// The predicate is invoked once per item, in order, until it returns
/// `Ok(true)`; remaining items are never evaluated. Failed evaluations
/// notify the `on_error` hook and the search continues. Returns `false`
/// when the sequence is exhausted without a witness, including when every
/// evaluation failed.
///
/// # Examples
///
/// ```
/// use salvage::{safe_some, SafeOptions};
///
/// let any_big = safe_some(
///     vec![5, 10, 15],
///     |x, _| {
///         if *x == 10 {
///             Err("unreadable")
///         } else {
///             Ok(*x > 12)
///         }
///     },
///     SafeOptions::default(),
/// );
///
/// // The failure at 10 is skipped; 15 still proves the claim.
/// assert!(any_big);
/// ```
pub fn safe_some<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> bool
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => return true,
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_some", index);
                options.notify(&error, &item, index);
            }
        }
    }

    false
}

/// Test whether any item satisfies a fallible predicate, collecting the
/// failures encountered before the witness.
///
/// Behaves exactly like [`safe_some`]; each failed evaluation prior to the
/// witness (or through the end of the sequence, if none is found) produces
/// an [`ErrorReport`].
///
/// # Examples
///
/// ```
/// use salvage::{safe_some_with_errors, SafeOptions};
///
/// let report = safe_some_with_errors(
///     vec![5, 10, 15],
///     |x, _| {
///         if *x == 10 {
///             Err("unreadable")
///         } else {
///             Ok(*x > 12)
///         }
///     },
///     SafeOptions::default(),
/// );
///
/// assert!(report.value);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].index, 1);
/// ```
pub fn safe_some_with_errors<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<bool, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => {
                return Report {
                    value: true,
                    errors,
                }
            }
            Ok(false) => {}
            Err(error) => {
                trace_isolated("safe_some_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });
            }
        }
    }

    Report {
        value: false,
        errors,
    }
}

/// Test whether every item of a sequence satisfies a fallible predicate.
///
/// The predicate is invoked once per item, in order. `Ok(false)` resolves
/// the answer to `false` immediately. A failed evaluation also resolves the
/// answer to `false` immediately, after notifying the `on_error` hook;
/// unlike the other iteration helpers, the failing item is not skipped and
/// the pass does not continue. Returns `true` only when every item was
/// evaluated and accepted; the empty sequence is vacuously `true`.
///
/// # Examples
///
/// ```
/// use salvage::{safe_every, SafeOptions};
///
/// assert!(safe_every(
///     vec![2, 4, 6],
///     |x, _| Ok::<_, String>(x % 2 == 0),
///     SafeOptions::default(),
/// ));
/// ```
///
/// A single failure refutes the claim, even if later items would pass:
///
/// ```
/// use salvage::{safe_every, SafeOptions};
///
/// let all_positive = safe_every(
///     vec![1, 2, 3],
///     |x, _| {
///         if *x == 2 {
///             Err("unreadable")
///         } else {
///             Ok(*x > 0)
///         }
///     },
///     SafeOptions::default(),
/// );
/// assert!(!all_positive);
/// ```
pub fn safe_every<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> bool
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => {}
            Ok(false) => return false,
            Err(error) => {
                trace_isolated("safe_every", index);
                options.notify(&error, &item, index);
                return false;
            }
        }
    }

    true
}

/// Test whether every item satisfies a fallible predicate, reporting the
/// failure that refuted the claim.
///
/// Behaves exactly like [`safe_every`]: the first failed evaluation
/// terminates the pass with `false`. Because no failure is ever skipped,
/// the report carries at most one entry: the failure that ended the pass.
///
/// # Examples
///
/// ```
/// use salvage::{safe_every_with_errors, SafeOptions};
///
/// let report = safe_every_with_errors(
///     vec![10, 20, 30],
///     |x, _| {
///         if *x == 20 {
///             Err("unreadable")
///         } else {
///             Ok(*x > 0)
///         }
///     },
///     SafeOptions::default(),
/// );
///
/// assert!(!report.value);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].item, 20);
/// assert_eq!(report.errors[0].index, 1);
/// ```
pub fn safe_every_with_errors<T, E, I, F>(
    collection: I,
    mut predicate: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<bool, T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<bool, E>,
{
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match predicate(&item, index) {
            Ok(true) => {}
            Ok(false) => {
                return Report {
                    value: false,
                    errors,
                }
            }
            Err(error) => {
                trace_isolated("safe_every_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });

                return Report {
                    value: false,
                    errors,
                };
            }
        }
    }

    Report {
        value: true,
        errors,
    }
}
