//! Shared report types and options for the iteration helpers
//!
//! Every `*_with_errors` helper returns a [`Report`] pairing the operation's
//! primary result with the [`ErrorReport`]s collected along the way, and
//! every helper accepts a [`SafeOptions`] carrying the optional `on_error`
//! hook. The original per-operation result shapes are unified here into one
//! canonical envelope so that failure handling reads the same regardless of
//! which operation produced it.
//!
//! # Examples
//!
//! ```
//! use salvage::{safe_filter_with_errors, SafeOptions};
//!
//! let report = safe_filter_with_errors(
//!     vec![1, 2, 3, 4],
//!     |x, _| if *x == 3 { Err("boom") } else { Ok(x % 2 == 0) },
//!     SafeOptions::default(),
//! );
//!
//! assert_eq!(report.value, vec![2, 4]);
//! assert!(!report.is_clean());
//! assert_eq!(report.errors[0].index, 2);
//! ```

use std::fmt;

use serde::Serialize;

/// A single failed evaluation captured during iteration.
///
/// Holds the raw error value produced by the callback, the offending item
/// (moved out of the input sequence), and the item's zero-based position at
/// the time of failure. The error type is whatever the caller's callback
/// produces; the library never inspects or wraps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport<T, E> {
    /// The raw error value produced by the callback.
    pub error: E,
    /// The item whose evaluation failed.
    pub item: T,
    /// Zero-based position of the item at the time of failure.
    pub index: usize,
}

/// The result of a `*_with_errors` helper: the operation's primary value
/// alongside every error collected during the pass.
///
/// `R` is the operation's primary result type (`Vec<U>` for
/// [`safe_map_with_errors`](crate::safe_map_with_errors), `bool` for
/// [`safe_every_with_errors`](crate::safe_every_with_errors), and so on).
/// Errors appear in iteration order.
///
/// # Examples
///
/// ```
/// use salvage::{safe_map_with_errors, SafeOptions};
///
/// let report = safe_map_with_errors(
///     vec![1, 2, 3],
///     |x, _| if *x == 2 { Err("even") } else { Ok(x * 10) },
///     SafeOptions::default(),
/// );
///
/// let (value, errors) = report.into_parts();
/// assert_eq!(value, vec![10, 30]);
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report<R, T, E> {
    /// The operation's primary result.
    pub value: R,
    /// One entry per failed evaluation, in iteration order.
    pub errors: Vec<ErrorReport<T, E>>,
}

impl<R, T, E> Report<R, T, E> {
    /// Check whether the pass completed without collecting any errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use salvage::{safe_map_with_errors, SafeOptions};
    ///
    /// let report = safe_map_with_errors(
    ///     vec![1, 2],
    ///     |x, _| Ok::<_, String>(x + 1),
    ///     SafeOptions::default(),
    /// );
    /// assert!(report.is_clean());
    /// ```
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split the report into its primary value and collected errors.
    #[inline]
    pub fn into_parts(self) -> (R, Vec<ErrorReport<T, E>>) {
        (self.value, self.errors)
    }

    /// Convert the report into a `Result`, treating any collected error as
    /// overall failure.
    ///
    /// Returns `Ok` with the primary value only when no errors were
    /// collected; otherwise the value is discarded and the error list is
    /// returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use salvage::{safe_map_with_errors, SafeOptions};
    ///
    /// let report = safe_map_with_errors(
    ///     vec![1, 2],
    ///     |x, _| if *x == 2 { Err("even") } else { Ok(x * 10) },
    ///     SafeOptions::default(),
    /// );
    ///
    /// let errors = report.into_result().unwrap_err();
    /// assert_eq!(errors[0].item, 2);
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<R, Vec<ErrorReport<T, E>>> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(self.errors)
        }
    }
}

/// Options accepted by every iteration helper.
///
/// The only recognized option is `on_error`: a hook invoked once per failed
/// evaluation, in iteration order, with the error, the offending item, and
/// its index. The hook is a side-effecting notification; it returns `()`
/// and cannot alter the outcome of the iteration. When absent it behaves as
/// a no-op.
///
/// # Examples
///
/// ```
/// use salvage::{safe_for_each, SafeOptions};
///
/// let mut seen = Vec::new();
/// let mut hook = |error: &String, item: &i32, index: usize| {
///     seen.push((error.clone(), *item, index));
/// };
///
/// safe_for_each(
///     vec![1, 2, 3],
///     |x, _| {
///         if *x == 2 {
///             Err("no twos".to_string())
///         } else {
///             Ok(())
///         }
///     },
///     SafeOptions::on_error(&mut hook),
/// );
///
/// assert_eq!(seen, vec![("no twos".to_string(), 2, 1)]);
/// ```
pub struct SafeOptions<'h, T, E> {
    /// Hook invoked once per failed evaluation, in iteration order.
    pub on_error: Option<&'h mut dyn FnMut(&E, &T, usize)>,
}

impl<'h, T, E> SafeOptions<'h, T, E> {
    /// Options with an error hook installed.
    ///
    /// Equivalent to constructing the struct with `on_error: Some(hook)`.
    pub fn on_error(hook: &'h mut dyn FnMut(&E, &T, usize)) -> Self {
        SafeOptions {
            on_error: Some(hook),
        }
    }

    /// Invoke the hook for one failed evaluation, if a hook is present.
    pub(crate) fn notify(&mut self, error: &E, item: &T, index: usize) {
        if let Some(hook) = self.on_error.as_mut() {
            hook(error, item, index);
        }
    }
}

impl<T, E> Default for SafeOptions<'_, T, E> {
    fn default() -> Self {
        SafeOptions { on_error: None }
    }
}

impl<T, E> fmt::Debug for SafeOptions<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeOptions")
            .field(
                "on_error",
                if self.on_error.is_some() {
                    &"Some(hook)"
                } else {
                    &"None"
                },
            )
            .finish()
    }
}

/// Emit a debug event for one isolated callback failure.
#[cfg(feature = "tracing")]
pub(crate) fn trace_isolated(op: &'static str, index: usize) {
    tracing::debug!(op, index, "callback failed, error isolated");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn trace_isolated(_op: &'static str, _index: usize) {}
