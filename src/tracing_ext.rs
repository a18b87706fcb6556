//! Tracing integration for error-merge.
//!
//! Emits one `tracing` event per leaf error so a merged failure shows up in
//! logs as separate, filterable records instead of one multi-line message.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-merge = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::traits::Walk;
use crate::types::Failure;

/// Emits an `ERROR` event for every leaf error in `value`.
///
/// Each event carries the leaf's `index` and the total `count`. Nothing is
/// emitted when `value` is `None`.
///
/// # Example
///
/// ```rust,ignore
/// use error_merge::tracing_ext::trace_failures;
///
/// let err = write_then_close(path);
/// trace_failures(err.as_ref());
/// ```
pub fn trace_failures<E: Display>(value: Option<&Failure<E>>) {
    let Some(failure) = value else { return };
    let count = failure.len();
    let mut index = 0usize;
    failure.walk(|error| {
        tracing::error!(index, count, error = %error, "operation failed");
        index += 1;
    });
}

/// Emits at most `limit` leaf `ERROR` events, then one `WARN` summary with the
/// number of errors left out.
pub fn trace_failures_n<E: Display>(value: Option<&Failure<E>>, limit: usize) {
    let Some(failure) = value else { return };
    let count = failure.len();
    let mut index = 0usize;
    failure.walk_bounded(limit, |error| {
        tracing::error!(index, count, error = %error, "operation failed");
        index += 1;
    });

    let suppressed = count.saturating_sub(index);
    if suppressed > 0 {
        tracing::warn!(count, suppressed, "further failures not logged");
    }
}
