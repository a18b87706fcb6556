//! Merging errors from several fallible steps into one failure.
//!
//! Every argument is absent, a single error, or an [`ErrorList`]. The result
//! collapses the same way: nothing collected yields `None`, one error is
//! returned as-is, two or more come back as a flattened [`ErrorList`].
//!
//! # Ownership of the first list
//!
//! When the first non-absent argument is a [`Failure::List`], merge takes over
//! that list and extends it in place instead of allocating a new one. This is
//! what makes accumulating errors in a loop cheap:
//!
//! ```
//! use error_merge::{append, Failure};
//!
//! let mut acc = None;
//! for n in 0..100 {
//!     acc = append(acc, Some(Failure::from(n)));
//! }
//! assert_eq!(acc.map(|f| f.len()), Some(100));
//! ```
//!
//! Lists in any other position are only drained, never extended.
use crate::traits::IntoFailure;
use crate::types::{ErrorList, Failure};

/// Merges two possibly-absent failures.
///
/// Returns `None` without allocating when both are absent, the present one
/// when only one is, and a flattened list otherwise. A list passed as `acc`
/// is extended in place and returned.
///
/// # Examples
///
/// ```
/// use error_merge::{append, Failure};
///
/// assert_eq!(append::<&str>(None, None), None);
/// assert_eq!(append(Some(Failure::from("a")), None), Some(Failure::Single("a")));
///
/// let both = append(Some(Failure::from("a")), Some(Failure::from("b"))).unwrap();
/// assert_eq!(both.to_string(), "a\nb");
/// ```
#[inline]
pub fn append<E>(acc: Option<Failure<E>>, next: Option<Failure<E>>) -> Option<Failure<E>> {
    match (acc, next) {
        (None, None) => None,
        (acc, None) => acc,
        (None, next) => next,
        (Some(Failure::Single(first)), Some(Failure::Single(second))) => {
            Some(Failure::List(ErrorList::pair(first, second)))
        }
        (Some(Failure::Single(first)), Some(Failure::List(rest))) => {
            Some(Failure::List(ErrorList::prepend(first, rest)))
        }
        (Some(Failure::List(mut list)), Some(next)) => {
            match next {
                Failure::Single(error) => list.push(error),
                Failure::List(other) => list.splice(other),
            }
            Some(Failure::List(list))
        }
    }
}

/// Merges any number of possibly-absent failures, left to right.
///
/// Absent values are skipped and nested lists are flattened in place, so the
/// leaves of the result are the leaves of the arguments in argument order.
///
/// # Examples
///
/// ```
/// use error_merge::{merge, Failure};
///
/// let tail = merge([Some(Failure::from("b")), Some(Failure::from("c"))]);
/// let all = merge([Some(Failure::from("a")), tail]).unwrap();
///
/// assert_eq!(all.into_vec(), ["a", "b", "c"]);
/// assert_eq!(merge::<&str, _>([None, None, None]), None);
/// ```
pub fn merge<E, I>(values: I) -> Option<Failure<E>>
where
    I: IntoIterator<Item = Option<Failure<E>>>,
{
    values.into_iter().fold(None, |acc, next| append(acc, next))
}

/// Runs `operation` and merges its outcome into `slot`.
///
/// Meant for cleanup steps whose error must neither be dropped nor replace a
/// more meaningful primary error: the primary error stays first and the
/// cleanup error is appended after it.
///
/// # Sharp edge
///
/// This only helps if `slot` is the value the enclosing function actually
/// returns. Merging into a local that is never read afterwards discards the
/// cleanup error without any warning.
///
/// # Examples
///
/// ```
/// use error_merge::{merge_into, Failure};
///
/// fn write_then_close() -> Option<Failure<&'static str>> {
///     let mut err = None;
///     // primary step succeeded, cleanup did not
///     merge_into(&mut err, || Err::<(), _>("close failed"));
///     err
/// }
///
/// assert_eq!(write_then_close(), Some(Failure::Single("close failed")));
/// ```
pub fn merge_into<E, F, R>(slot: &mut Option<Failure<E>>, operation: F)
where
    F: FnOnce() -> R,
    R: IntoFailure<Error = E>,
{
    let outcome = operation().into_failure();
    *slot = append(slot.take(), outcome);
}
