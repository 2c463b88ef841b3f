//! Fallible visitation with per-item error isolation
//!
//! [`safe_for_each`] runs a side-effecting callback once per item. A failed
//! visit is isolated and the remaining items are still visited;
//! [`safe_for_each_with_errors`] returns the collected failures.

use crate::report::{trace_isolated, ErrorReport, Report, SafeOptions};

/// Visit every item of a sequence with a fallible callback.
///
/// The callback is invoked once per item, in order, for its side effects.
/// A failed visit notifies the `on_error` hook and iteration continues with
/// the next item; there is no early exit.
///
/// # Examples
///
/// ```
/// use salvage::{safe_for_each, SafeOptions};
///
/// let mut total = 0;
/// safe_for_each(
///     vec![1, 2, 3],
///     |x, _| {
///         if *x == 2 {
///             return Err("skipped");
///         }
///         total += x;
///         Ok(())
///     },
///     SafeOptions::default(),
/// );
///
/// assert_eq!(total, 4);
/// ```
pub fn safe_for_each<T, E, I, F>(
    collection: I,
    mut callback: F,
    mut options: SafeOptions<'_, T, E>,
) where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<(), E>,
{
    for (index, item) in collection.into_iter().enumerate() {
        match callback(&item, index) {
            Ok(()) => {}
            Err(error) => {
                trace_isolated("safe_for_each", index);
                options.notify(&error, &item, index);
            }
        }
    }
}

/// Visit every item with a fallible callback, collecting a report for each
/// failed visit.
///
/// # Examples
///
/// ```
/// use salvage::{safe_for_each_with_errors, SafeOptions};
///
/// let report = safe_for_each_with_errors(
///     vec!["ok", "bad", "ok"],
///     |s, _| if *s == "bad" { Err("rejected") } else { Ok(()) },
///     SafeOptions::default(),
/// );
///
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].item, "bad");
/// assert_eq!(report.errors[0].index, 1);
/// ```
pub fn safe_for_each_with_errors<T, E, I, F>(
    collection: I,
    mut callback: F,
    mut options: SafeOptions<'_, T, E>,
) -> Report<(), T, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> Result<(), E>,
{
    let mut errors = Vec::new();

    for (index, item) in collection.into_iter().enumerate() {
        match callback(&item, index) {
            Ok(()) => {}
            Err(error) => {
                trace_isolated("safe_for_each_with_errors", index);
                options.notify(&error, &item, index);
                errors.push(ErrorReport { error, item, index });
            }
        }
    }

    Report { value: (), errors }
}
