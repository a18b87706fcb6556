//! Variadic merging of heterogeneous outcomes.
//!
//! - [`macro@crate::merge`] - Converts each argument through
//!   [`IntoFailure`](crate::traits::IntoFailure) and merges them left to right.
//!
//! # Examples
//!
//! ```
//! use error_merge::{merge, Failure};
//!
//! let write: Result<(), &str> = Err("write failed");
//! let close: Result<(), &str> = Err("close failed");
//! let earlier: Option<Failure<&str>> = None;
//!
//! let err = merge!(earlier, write, close).unwrap();
//! assert_eq!(err.to_string(), "write failed\nclose failed");
//! ```

/// Merges any mix of `Option<Failure<E>>`, `Failure<E>`, `ErrorList<E>` and
/// `Result<(), E>` values into one `Option<Failure<E>>`.
///
/// The two-argument form goes through [`append`](crate::append), which
/// returns without allocating when both sides are absent.
///
/// # Examples
///
/// ```rust
/// use error_merge::{merge, Failure};
///
/// let ok: Result<(), &str> = Ok(());
/// assert_eq!(merge!(ok, Ok::<(), &str>(())), None);
///
/// let single = merge!(Failure::from("only"), Ok::<(), &str>(()));
/// assert_eq!(single, Some(Failure::Single("only")));
/// ```
#[macro_export]
macro_rules! merge {
    ($first:expr, $second:expr $(,)?) => {
        $crate::append(
            $crate::traits::IntoFailure::into_failure($first),
            $crate::traits::IntoFailure::into_failure($second),
        )
    };
    ($($value:expr),+ $(,)?) => {
        $crate::merge([$($crate::traits::IntoFailure::into_failure($value)),+])
    };
}
