//! Leaf traversal shared by every failure-shaped type.
//!
//! [`Walk::walk_partial`] is the one primitive implementors provide; full and
//! bounded traversal are built on top of it, so all three visit the same
//! leaves in the same order.
//!
//! # Examples
//!
//! ```
//! use error_merge::traits::Walk;
//! use error_merge::{merge, Failure};
//!
//! let failure = merge((1..=5).map(|n| Some(Failure::from(n)))).unwrap();
//!
//! let mut seen = Vec::new();
//! failure.walk_bounded(2, |n| seen.push(*n));
//! assert_eq!(seen, [1, 2]);
//! ```

/// Visits the leaf errors of a failure, in merge order.
///
/// A visitor never receives an aggregate: leaves are always `Self::Leaf`.
pub trait Walk {
    /// The error type handed to visitors.
    type Leaf;

    /// Number of leaves a full walk visits.
    fn leaf_count(&self) -> usize;

    /// Visits leaves until `visit` returns `false`.
    ///
    /// Returns `true` if every leaf was visited, `false` if the visitor
    /// stopped the walk early.
    fn walk_partial<F>(&self, visit: F) -> bool
    where
        F: FnMut(&Self::Leaf) -> bool;

    /// Visits every leaf.
    #[inline]
    fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Self::Leaf),
    {
        self.walk_partial(|leaf| {
            visit(leaf);
            true
        });
    }

    /// Visits at most `limit` leaves, then stops.
    ///
    /// Stops after the `limit`-th visit without looking at the remaining
    /// leaves. A `limit` of zero visits nothing. The budget is checked before
    /// every visit, so an implementor that keeps walking after being told to
    /// stop still never reaches `visit` more than `limit` times. A panic
    /// raised by `visit` propagates to the caller unchanged.
    fn walk_bounded<F>(&self, limit: usize, mut visit: F)
    where
        F: FnMut(&Self::Leaf),
    {
        if limit == 0 {
            return;
        }
        let mut remaining = limit;
        self.walk_partial(|leaf| {
            if remaining == 0 {
                return false;
            }
            visit(leaf);
            remaining -= 1;
            remaining > 0
        });
    }
}

impl<T: Walk + ?Sized> Walk for &T {
    type Leaf = T::Leaf;

    #[inline]
    fn leaf_count(&self) -> usize {
        (**self).leaf_count()
    }

    #[inline]
    fn walk_partial<F>(&self, visit: F) -> bool
    where
        F: FnMut(&Self::Leaf) -> bool,
    {
        (**self).walk_partial(visit)
    }
}
