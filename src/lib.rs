//! # Salvage
//!
//! > *"Keep what succeeds, report what fails"*
//!
//! A Rust library for error-isolating collection iteration.
//!
//! ## Philosophy
//!
//! One bad element should not sink a whole batch. Every iteration helper in
//! **salvage** runs its fallible callback once per item, in order, and treats
//! a failed evaluation as a local event: the item is skipped (or the
//! operation resolves, for [`safe_every`]), the failure is optionally
//! reported, and the loop moves on. Callers choose how much failure detail
//! they want:
//!
//! - the plain variants return only the primary result;
//! - the `*_with_errors` variants additionally collect an [`ErrorReport`]
//!   per failed item into a [`Report`];
//! - either kind accepts an `on_error` hook via [`SafeOptions`] for
//!   side-channel notification.
//!
//! ## Quick Example
//!
//! ```rust
//! use salvage::{safe_map_with_errors, SafeOptions};
//!
//! let raw = vec!["10", "twenty", "30"];
//!
//! let report = safe_map_with_errors(
//!     raw,
//!     |s, _| s.parse::<i32>().map_err(|e| e.to_string()),
//!     SafeOptions::default(),
//! );
//!
//! // The parse failure is isolated: good items survive, the bad one is
//! // reported with its position.
//! assert_eq!(report.value, vec![10, 30]);
//! assert_eq!(report.errors.len(), 1);
//! assert_eq!(report.errors[0].item, "twenty");
//! assert_eq!(report.errors[0].index, 1);
//! ```
//!
//! Alongside the iteration helpers live three standalone primitives:
//! [`attempt`] / [`attempt_async`] wrap a single invocation into an
//! [`Attempt`] envelope, [`safe_json_parse`] decodes JSON with a fallback,
//! and [`safeguard`] narrows away falsy values via the [`Truthy`] trait.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attempt;
pub mod filter;
pub mod find;
pub mod for_each;
pub mod guard;
pub mod json;
pub mod map;
pub mod quantify;
pub mod reduce;
pub mod report;
pub mod testing;

// Re-exports
pub use attempt::{attempt, attempt_async, Attempt};
pub use filter::{safe_filter, safe_filter_with_errors};
pub use find::{
    safe_find, safe_find_index, safe_find_index_with_errors, safe_find_with_errors,
};
pub use for_each::{safe_for_each, safe_for_each_with_errors};
pub use guard::{safeguard, Truthy};
pub use json::safe_json_parse;
pub use map::{safe_map, safe_map_with_errors};
pub use quantify::{safe_every, safe_every_with_errors, safe_some, safe_some_with_errors};
pub use reduce::{safe_reduce, safe_reduce_with_errors};
pub use report::{ErrorReport, Report, SafeOptions};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attempt::{attempt, attempt_async, Attempt};
    pub use crate::filter::{safe_filter, safe_filter_with_errors};
    pub use crate::find::{
        safe_find, safe_find_index, safe_find_index_with_errors, safe_find_with_errors,
    };
    pub use crate::for_each::{safe_for_each, safe_for_each_with_errors};
    pub use crate::guard::{safeguard, Truthy};
    pub use crate::json::safe_json_parse;
    pub use crate::map::{safe_map, safe_map_with_errors};
    pub use crate::quantify::{
        safe_every, safe_every_with_errors, safe_some, safe_some_with_errors,
    };
    pub use crate::reduce::{safe_reduce, safe_reduce_with_errors};
    pub use crate::report::{ErrorReport, Report, SafeOptions};
}
