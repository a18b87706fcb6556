//! Traversal of possibly-absent failures.
//!
//! The free functions here take `Option<&Failure<E>>` so the result of a
//! merge can be walked without first checking whether anything failed:
//! walking `None` never calls the visitor.
//!
//! # Examples
//!
//! ```
//! use error_merge::{merge, walk, Failure};
//!
//! let err = merge([Some(Failure::from("write failed")), None, Some(Failure::from("close failed"))]);
//!
//! let mut lines = Vec::new();
//! walk::walk(err.as_ref(), |e| lines.push(format!("app, Error: {e}")));
//! assert_eq!(lines, ["app, Error: write failed", "app, Error: close failed"]);
//! ```
use crate::traits::Walk;
use crate::types::{ErrorList, Failure};

pub mod iter;

pub use iter::{IntoIter, Iter};

impl<E> Walk for ErrorList<E> {
    type Leaf = E;

    #[inline]
    fn leaf_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn walk_partial<F>(&self, visit: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        self.iter().all(visit)
    }
}

impl<E> Walk for Failure<E> {
    type Leaf = E;

    #[inline]
    fn leaf_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn walk_partial<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        match self {
            Self::Single(error) => visit(error),
            Self::List(list) => list.walk_partial(visit),
        }
    }
}

impl<T: Walk> Walk for Option<T> {
    type Leaf = T::Leaf;

    #[inline]
    fn leaf_count(&self) -> usize {
        self.as_ref().map_or(0, Walk::leaf_count)
    }

    #[inline]
    fn walk_partial<F>(&self, visit: F) -> bool
    where
        F: FnMut(&Self::Leaf) -> bool,
    {
        match self {
            Some(inner) => inner.walk_partial(visit),
            None => true,
        }
    }
}

/// Calls `visit` once for every leaf error in `value`, in merge order.
#[inline]
pub fn walk<E, F>(value: Option<&Failure<E>>, visit: F)
where
    F: FnMut(&E),
{
    value.walk(visit);
}

/// Like [`walk`], but stops as soon as `visit` returns `false`.
///
/// Returns `true` if the walk ran to completion. Walking `None` returns `true`.
///
/// # Examples
///
/// ```
/// use error_merge::{merge, walk, Failure};
///
/// let err = merge((1..=4).map(|n| Some(Failure::from(n))));
///
/// let mut seen = Vec::new();
/// let completed = walk::walk_partial(err.as_ref(), |n| {
///     seen.push(*n);
///     *n < 2
/// });
/// assert!(!completed);
/// assert_eq!(seen, [1, 2]);
/// ```
#[inline]
pub fn walk_partial<E, F>(value: Option<&Failure<E>>, visit: F) -> bool
where
    F: FnMut(&E) -> bool,
{
    value.walk_partial(visit)
}

/// Visits at most `limit` leaf errors in `value`.
///
/// Short-circuits after `limit` visits however many errors remain.
#[inline]
pub fn walk_bounded<E, F>(value: Option<&Failure<E>>, limit: usize, visit: F)
where
    F: FnMut(&E),
{
    value.walk_bounded(limit, visit);
}

/// Returns the first leaf error, or `None` when nothing failed.
///
/// Agrees with the first leaf [`walk`] would visit.
///
/// # Examples
///
/// ```
/// use error_merge::{merge, walk, Failure};
///
/// let err = merge([Some(Failure::from("a")), Some(Failure::from("b")), Some(Failure::from("c"))]);
/// assert_eq!(walk::first(err.as_ref()), Some(&"a"));
/// assert_eq!(walk::first::<&str>(None), None);
/// ```
#[inline]
pub fn first<E>(value: Option<&Failure<E>>) -> Option<&E> {
    value.map(Failure::first)
}
