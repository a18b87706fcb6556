use crate::types::{ErrorList, ErrorVec, Failure};
use core::iter::FusedIterator;

/// Borrowing iterator over the leaf errors of a [`Failure`] or [`ErrorList`].
///
/// Yields leaves in the same order as [`Walk::walk`](crate::traits::Walk::walk).
pub struct Iter<'a, E> {
    head: Option<&'a E>,
    tail: core::slice::Iter<'a, E>,
}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self { head: self.head, tail: self.tail.clone() }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.head.is_some()) + self.tail.len();
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

/// Owning iterator over the leaf errors of a [`Failure`] or [`ErrorList`].
pub struct IntoIter<E> {
    head: Option<E>,
    tail: smallvec::IntoIter<[E; 2]>,
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.head.take().or_else(|| self.tail.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.head.is_some()) + self.tail.len();
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

impl<E> ErrorList<E> {
    /// Returns an iterator over the errors, in merge order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter { head: Some(&self.head), tail: self.tail.iter() }
    }
}

impl<E> Failure<E> {
    /// Returns an iterator over the leaf errors, in walk order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        match self {
            Self::Single(error) => Iter { head: Some(error), tail: [].iter() },
            Self::List(list) => list.iter(),
        }
    }
}

impl<E> IntoIterator for ErrorList<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { head: Some(self.head), tail: self.tail.into_iter() }
    }
}

impl<E> IntoIterator for Failure<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Single(error) => {
                IntoIter { head: Some(error), tail: ErrorVec::new().into_iter() }
            }
            Self::List(list) => list.into_iter(),
        }
    }
}

impl<'a, E> IntoIterator for &'a ErrorList<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, E> IntoIterator for &'a Failure<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
