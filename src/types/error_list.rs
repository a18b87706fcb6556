//! The aggregate of two or more errors.
use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered, flattened list of at least two errors.
///
/// The first error is stored apart from the rest so the list can never be
/// empty. Elements are plain `E` values, never nested lists; merging a list
/// into another splices its elements in place.
///
/// There is no public constructor. Lists are produced by
/// [`merge`](crate::merge), [`append`](crate::append) and the
/// [`merge!`](crate::merge!) macro only.
///
/// # Ownership
///
/// Passing a list by value as the first non-absent argument of a merge hands
/// its storage to that merge, which extends it in place and returns the same
/// list. Clone the list first if you need to keep the original.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorList<E> {
    pub(crate) head: E,
    pub(crate) tail: ErrorVec<E>,
}

impl<E> ErrorList<E> {
    /// Builds the list `[first, second]`.
    #[inline]
    pub(crate) fn pair(first: E, second: E) -> Self {
        let mut tail = ErrorVec::new();
        tail.push(second);
        Self { head: first, tail }
    }

    /// Builds a fresh list holding `first` followed by every element of `rest`.
    ///
    /// `rest` is only drained, its storage is not reused.
    pub(crate) fn prepend(first: E, rest: ErrorList<E>) -> Self {
        let mut tail = ErrorVec::with_capacity(rest.len());
        tail.push(rest.head);
        tail.extend(rest.tail);
        Self { head: first, tail }
    }

    #[inline]
    pub(crate) fn push(&mut self, error: E) {
        self.tail.push(error);
    }

    /// Splices every element of `other` onto the end of `self`.
    pub(crate) fn splice(&mut self, other: ErrorList<E>) {
        self.tail.reserve(other.len());
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Number of errors in the list. Always at least two.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        debug_assert!(!self.tail.is_empty(), "error list holds fewer than two errors");
        1 + self.tail.len()
    }

    /// The first error, in insertion order.
    #[inline]
    pub fn first(&self) -> &E {
        &self.head
    }

    /// The most recently merged error.
    #[inline]
    pub fn last(&self) -> &E {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Consumes the list, returning its first error.
    #[inline]
    pub fn into_first(self) -> E {
        self.head
    }

    /// Consumes the list, returning all errors in order.
    pub fn into_vec(self) -> Vec<E> {
        let mut errors = Vec::with_capacity(self.len());
        errors.push(self.head);
        errors.extend(self.tail);
        errors
    }
}

impl<E: Display> Display for ErrorList<E> {
    /// One error per line, in walk order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&crate::types::ListFormatBuilder::new(self), f)
    }
}

impl<E> core::error::Error for ErrorList<E> where E: core::error::Error + 'static {}

#[cfg(feature = "serde")]
impl<E: Serialize> Serialize for ErrorList<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, E: Deserialize<'de>> Deserialize<'de> for ErrorList<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut errors = ErrorVec::<E>::deserialize(deserializer)?;
        if errors.len() < 2 {
            return Err(serde::de::Error::invalid_length(errors.len(), &"at least two errors"));
        }
        let head = errors.remove(0);
        Ok(Self { head, tail: errors })
    }
}
