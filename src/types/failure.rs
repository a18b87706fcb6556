//! One or more errors produced by a single logical operation.
use crate::types::alloc_type::Vec;
use crate::types::ErrorList;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a single error or an [`ErrorList`] of several.
///
/// "No error" is `None` in an `Option<Failure<E>>`; a `Failure` always holds at
/// least one error. A `Failure` renders and reports like a plain error, so
/// code that merges a primary error with a cleanup error can hand the result
/// to anything expecting a single error.
///
/// # Variants
///
/// * `Single(E)` - Exactly one error, never wrapped in a list
/// * `List(ErrorList<E>)` - Two or more errors in merge order
///
/// # Examples
///
/// ```
/// use error_merge::{merge, Failure};
///
/// let only = merge([None, Some(Failure::from("disk full")), None]);
/// assert_eq!(only, Some(Failure::Single("disk full")));
///
/// let both = merge([Some(Failure::from("a")), Some(Failure::from("b"))]).unwrap();
/// assert_eq!(both.len(), 2);
/// assert_eq!(*both.first(), "a");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Failure<E> {
    Single(E),
    List(ErrorList<E>),
}

impl<E> Failure<E> {
    /// Number of leaf errors.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(list) => list.len(),
        }
    }

    /// Returns `true` if this holds more than one error.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The first leaf error in walk order.
    ///
    /// Constant time. For a single error this is the error itself.
    #[inline]
    pub fn first(&self) -> &E {
        match self {
            Self::Single(error) => error,
            Self::List(list) => list.first(),
        }
    }

    /// Consumes the failure, returning its first leaf error.
    #[inline]
    pub fn into_first(self) -> E {
        match self {
            Self::Single(error) => error,
            Self::List(list) => list.into_first(),
        }
    }

    /// Consumes the failure, returning every leaf error in order.
    pub fn into_vec(self) -> Vec<E> {
        match self {
            Self::Single(error) => Vec::from([error]),
            Self::List(list) => list.into_vec(),
        }
    }

    /// Returns the list if this holds several errors.
    #[inline]
    pub fn as_list(&self) -> Option<&ErrorList<E>> {
        match self {
            Self::Single(_) => None,
            Self::List(list) => Some(list),
        }
    }

    /// Applies `f` to every leaf error, keeping the shape.
    pub fn map<T, F>(self, mut f: F) -> Failure<T>
    where
        F: FnMut(E) -> T,
    {
        match self {
            Self::Single(error) => Failure::Single(f(error)),
            Self::List(list) => Failure::List(ErrorList {
                head: f(list.head),
                tail: list.tail.into_iter().map(f).collect(),
            }),
        }
    }
}

impl<E> From<E> for Failure<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::Single(error)
    }
}

impl<E: Display> Display for Failure<E> {
    /// A single error renders as itself; a list renders one error per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(error) => Display::fmt(error, f),
            Self::List(list) => Display::fmt(list, f),
        }
    }
}

impl<E> core::error::Error for Failure<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Single(error) => error.source(),
            Self::List(_) => None,
        }
    }
}
