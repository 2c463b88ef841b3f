//! Testing utilities and helpers for Salvage
//!
//! This module provides helpers for exercising failure paths in code built
//! on the iteration helpers: callback builders that inject failures at
//! chosen positions, and assertion macros for [`Report`](crate::Report)
//! values.
//!
//! # Examples
//!
//! ```
//! use salvage::testing::failing_at;
//! use salvage::{safe_map_with_errors, SafeOptions};
//!
//! let report = safe_map_with_errors(
//!     vec![1, 2, 3],
//!     failing_at(vec![1], |x: &i32, _| x * 10),
//!     SafeOptions::default(),
//! );
//!
//! assert_eq!(report.value, vec![10, 30]);
//! assert_eq!(report.errors[0].index, 1);
//! ```

/// Wrap an infallible callback so that it fails at the given positions.
///
/// The returned callback produces `Err` with a descriptive message whenever
/// the index is listed in `indices`, and otherwise delegates to `inner`.
/// Useful for exercising skip-and-continue behavior deterministically.
///
/// # Examples
///
/// ```
/// use salvage::testing::failing_at;
/// use salvage::{safe_filter, SafeOptions};
///
/// let kept = safe_filter(
///     vec![1, 2, 3],
///     failing_at(vec![0], |x: &i32, _| *x > 0),
///     SafeOptions::default(),
/// );
/// assert_eq!(kept, vec![2, 3]);
/// ```
pub fn failing_at<T, R, F>(
    indices: Vec<usize>,
    mut inner: F,
) -> impl FnMut(&T, usize) -> Result<R, String>
where
    F: FnMut(&T, usize) -> R,
{
    move |item, index| {
        if indices.contains(&index) {
            Err(format!("injected failure at index {}", index))
        } else {
            Ok(inner(item, index))
        }
    }
}

/// Wrap an infallible reducer so that it fails at the given positions.
///
/// The reducer counterpart of [`failing_at`], for use with
/// [`safe_reduce`](crate::safe_reduce) and
/// [`safe_reduce_with_errors`](crate::safe_reduce_with_errors).
pub fn failing_fold_at<A, T, F>(
    indices: Vec<usize>,
    mut inner: F,
) -> impl FnMut(&A, &T, usize) -> Result<A, String>
where
    F: FnMut(&A, &T, usize) -> A,
{
    move |accumulator, item, index| {
        if indices.contains(&index) {
            Err(format!("injected failure at index {}", index))
        } else {
            Ok(inner(accumulator, item, index))
        }
    }
}

/// Assert that a report collected no errors.
///
/// This macro will panic if the report carries any error entries.
///
/// # Example
///
/// ```rust
/// use salvage::{assert_clean, safe_map_with_errors, SafeOptions};
///
/// let report = safe_map_with_errors(
///     vec![1, 2],
///     |x, _| Ok::<_, String>(x + 1),
///     SafeOptions::default(),
/// );
/// assert_clean!(report);
/// ```
#[macro_export]
macro_rules! assert_clean {
    ($report:expr) => {
        match &$report.errors {
            errors if errors.is_empty() => {}
            errors => {
                panic!("Expected a clean report, got {} errors", errors.len());
            }
        }
    };
}

/// Assert that a report collected exactly the given number of errors.
///
/// This macro will panic if the error count differs.
///
/// # Example
///
/// ```rust
/// use salvage::testing::failing_at;
/// use salvage::{assert_error_count, safe_map_with_errors, SafeOptions};
///
/// let report = safe_map_with_errors(
///     vec![1, 2, 3],
///     failing_at(vec![0, 2], |x: &i32, _| *x),
///     SafeOptions::default(),
/// );
/// assert_error_count!(report, 2);
/// ```
#[macro_export]
macro_rules! assert_error_count {
    ($report:expr, $expected:expr) => {
        match $report.errors.len() {
            count if count == $expected => {}
            count => {
                panic!("Expected {} collected errors, got {}", $expected, count);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for crate::Attempt<T, E>
where
    T: Arbitrary,
    E: Arbitrary,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(crate::Attempt::Succeeded),
            any_with::<E>(e_params).prop_map(crate::Attempt::Failed),
        ]
        .boxed()
    }
}
