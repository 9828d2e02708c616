//! Iterators over a [`SortedSet`].

use super::SortedSet;
use super::storage::{INLINE_CAPACITY, Storage};
use std::iter::FusedIterator;

/// Iterator over references to the elements of a [`SortedSet`] in
/// ascending order.
///
/// Created by [`SortedSet::iter`]. Call `.rev()` (or use
/// [`SortedSet::reverse_iter`]) for descending order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(elements: &'a [T]) -> Self {
        Self {
            inner: elements.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_tuple("Iter")
            .field(&self.inner.as_slice())
            .finish()
    }
}

/// Owning iterator over the elements of a [`SortedSet`] in ascending order.
///
/// Inline sets hand over their buffer directly. A large set moves its
/// vector out when it is the only owner and clones it otherwise.
pub struct IntoIter<T> {
    inner: IntoIterInner<T>,
}

enum IntoIterInner<T> {
    Inline(smallvec::IntoIter<[T; INLINE_CAPACITY]>),
    Heap(std::vec::IntoIter<T>),
}

impl<T: Clone> IntoIter<T> {
    pub(super) fn new(storage: Storage<T>) -> Self {
        let inner = match storage {
            Storage::Inline(elements) => IntoIterInner::Inline(elements.into_iter()),
            other => IntoIterInner::Heap(other.into_vec().into_iter()),
        };
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Inline(iter) => iter.next(),
            IntoIterInner::Heap(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntoIterInner::Inline(iter) => iter.size_hint(),
            IntoIterInner::Heap(iter) => iter.size_hint(),
        }
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Inline(iter) => iter.next_back(),
            IntoIterInner::Heap(iter) => iter.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage)
    }
}
