//! Single-invocation result envelopes
//!
//! [`attempt`] and [`attempt_async`] run a fallible callable exactly once
//! and fold its outcome into an [`Attempt`]: an envelope that always reaches
//! the caller, carrying either the produced value or the captured error.
//! Nothing ever propagates past the wrapper.
//!
//! # Examples
//!
//! ```
//! use salvage::attempt;
//!
//! let outcome = attempt(|| "21".parse::<i32>().map(|n| n * 2));
//!
//! assert!(outcome.ok());
//! assert_eq!(outcome.result(), Some(&42));
//! assert_eq!(outcome.error(), None);
//! ```

use std::future::Future;

use serde::Serialize;

/// The outcome of a single wrapped invocation.
///
/// Exactly one of the value and the error is present, selected by [`ok`].
/// The error type is whatever the wrapped callable produces; it is captured
/// raw, never classified or wrapped.
///
/// [`ok`]: Attempt::ok
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Attempt<T, E> {
    /// The call completed and produced a value.
    Succeeded(T),
    /// The call failed and its error was captured.
    Failed(E),
}

impl<T, E> Attempt<T, E> {
    /// Whether the wrapped call completed successfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use salvage::attempt;
    ///
    /// assert!(attempt(|| Ok::<_, String>(5)).ok());
    /// assert!(!attempt(|| Err::<i32, _>("nope")).ok());
    /// ```
    #[inline]
    pub fn ok(&self) -> bool {
        matches!(self, Attempt::Succeeded(_))
    }

    /// The produced value, when the call succeeded.
    #[inline]
    pub fn result(&self) -> Option<&T> {
        match self {
            Attempt::Succeeded(value) => Some(value),
            Attempt::Failed(_) => None,
        }
    }

    /// The captured error, when the call failed.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Attempt::Succeeded(_) => None,
            Attempt::Failed(error) => Some(error),
        }
    }

    /// Build an envelope from an already-computed `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Attempt::Succeeded(value),
            Err(error) => Attempt::Failed(error),
        }
    }

    /// Convert the envelope back into a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use salvage::attempt;
    ///
    /// let outcome = attempt(|| Ok::<_, String>(7));
    /// assert_eq!(outcome.into_result(), Ok(7));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Attempt::Succeeded(value) => Ok(value),
            Attempt::Failed(error) => Err(error),
        }
    }

    /// Transform the produced value if present.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Attempt<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Attempt::Succeeded(value) => Attempt::Succeeded(f(value)),
            Attempt::Failed(error) => Attempt::Failed(error),
        }
    }

    /// Transform the captured error if present.
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Attempt<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Attempt::Succeeded(value) => Attempt::Succeeded(value),
            Attempt::Failed(error) => Attempt::Failed(f(error)),
        }
    }

    /// The produced value, or a fallback computed from the captured error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Attempt::Succeeded(value) => value,
            Attempt::Failed(error) => f(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Attempt::from_result(result)
    }
}

impl<T, E> From<Attempt<T, E>> for Result<T, E> {
    fn from(attempt: Attempt<T, E>) -> Self {
        attempt.into_result()
    }
}

/// Invoke a fallible callable exactly once and capture its outcome.
///
/// The error never reaches the caller directly; success and failure both
/// arrive as an [`Attempt`].
///
/// # Examples
///
/// ```
/// use salvage::attempt;
///
/// let parsed = attempt(|| "not a number".parse::<i32>());
///
/// assert!(!parsed.ok());
/// assert_eq!(parsed.result(), None);
/// assert!(parsed.error().is_some());
/// ```
pub fn attempt<T, E, F>(f: F) -> Attempt<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Attempt::from_result(f())
}

/// Invoke an asynchronous fallible callable exactly once, awaiting its
/// completion, and capture its outcome.
///
/// The future is driven to completion before the envelope is produced, so
/// asynchronous failures are captured the same way synchronous ones are.
/// Works on any executor; nothing here depends on a particular runtime.
///
/// # Examples
///
/// ```
/// use salvage::attempt_async;
///
/// async fn fetch_size() -> Result<usize, String> {
///     Ok(1024)
/// }
///
/// # tokio_test::block_on(async {
/// let outcome = attempt_async(fetch_size).await;
/// assert_eq!(outcome.result(), Some(&1024));
/// # });
/// ```
pub async fn attempt_async<T, E, F, Fut>(f: F) -> Attempt<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    Attempt::from_result(f().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Boom(&'static str);

    #[test]
    fn test_attempt_success_envelope() {
        let outcome = attempt(|| Ok::<_, Boom>(5));
        assert!(outcome.ok());
        assert_eq!(outcome.result(), Some(&5));
        assert_eq!(outcome.error(), None);
    }

    #[test]
    fn test_attempt_failure_envelope() {
        let outcome = attempt(|| Err::<i32, _>(Boom("exploded")));
        assert!(!outcome.ok());
        assert_eq!(outcome.result(), None);
        assert_eq!(outcome.error(), Some(&Boom("exploded")));
    }

    #[test]
    fn test_attempt_invokes_exactly_once() {
        let mut calls = 0;
        let _ = attempt(|| {
            calls += 1;
            Ok::<_, String>(())
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_into_result_round_trip() {
        let outcome = attempt(|| Ok::<_, String>("hi"));
        assert_eq!(outcome.into_result(), Ok("hi"));

        let outcome = attempt(|| Err::<&str, _>("bad".to_string()));
        assert_eq!(outcome.into_result(), Err("bad".to_string()));
    }

    #[test]
    fn test_map_transforms_success_only() {
        let doubled = Attempt::<_, String>::Succeeded(4).map(|x| x * 2);
        assert_eq!(doubled, Attempt::Succeeded(8));

        let failed = Attempt::<i32, _>::Failed("bad").map(|x| x * 2);
        assert_eq!(failed, Attempt::Failed("bad"));
    }

    #[test]
    fn test_map_err_transforms_failure_only() {
        let failed = Attempt::<i32, _>::Failed("bad").map_err(|e| e.len());
        assert_eq!(failed, Attempt::Failed(3));

        let succeeded = Attempt::<_, &str>::Succeeded(1).map_err(|e| e.len());
        assert_eq!(succeeded, Attempt::Succeeded(1));
    }

    #[test]
    fn test_unwrap_or_else() {
        let value = Attempt::<i32, &str>::Failed("bad").unwrap_or_else(|e| e.len() as i32);
        assert_eq!(value, 3);
    }

    #[test]
    fn test_from_conversions() {
        let outcome: Attempt<i32, String> = Ok(3).into();
        assert_eq!(outcome, Attempt::Succeeded(3));

        let back: Result<i32, String> = outcome.into();
        assert_eq!(back, Ok(3));
    }

    #[tokio::test]
    async fn test_attempt_async_success() {
        let outcome = attempt_async(|| async { Ok::<_, String>(10) }).await;
        assert!(outcome.ok());
        assert_eq!(outcome.result(), Some(&10));
    }

    #[tokio::test]
    async fn test_attempt_async_failure() {
        let outcome = attempt_async(|| async { Err::<i32, _>("offline".to_string()) }).await;
        assert!(!outcome.ok());
        assert_eq!(outcome.error(), Some(&"offline".to_string()));
    }

    #[tokio::test]
    async fn test_attempt_async_waits_for_completion() {
        let outcome = attempt_async(|| async {
            tokio::task::yield_now().await;
            Ok::<_, String>("done")
        })
        .await;
        assert_eq!(outcome.result(), Some(&"done"));
    }
}
