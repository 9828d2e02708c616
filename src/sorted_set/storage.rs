//! Backing storage for [`SortedSet`](super::SortedSet).
//!
//! The strictly increasing element sequence lives in one of three states:
//!
//! ```text
//!     len == 0          len <= 8                 len > 8
//!     Empty      │      Inline (SmallVec)  │     Shared (Arc<Vec<T>>)
//! ```
//!
//! Every state keeps its elements sorted, so readers only ever see a
//! `&[T]` through [`Storage::as_slice`]. The state is chosen from the
//! length whenever a new sequence is stored.

use smallvec::SmallVec;
use std::sync::Arc;

/// Sequences of at most this many elements are stored inline.
pub(super) const INLINE_CAPACITY: usize = 8;

/// Panic message for a backing sequence that is not strictly increasing.
pub(super) const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "backing sequence must be strictly increasing (sorted + deduplicated)";

#[derive(Clone)]
pub(super) enum Storage<T> {
    Empty,
    Inline(SmallVec<[T; INLINE_CAPACITY]>),
    Shared(Arc<Vec<T>>),
}

impl<T> Storage<T> {
    /// Stores a vector that is already strictly increasing.
    pub(super) fn from_sorted_vec(elements: Vec<T>) -> Self
    where
        T: Ord,
    {
        debug_assert!(
            is_strictly_sorted(&elements),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );

        if elements.is_empty() {
            Self::Empty
        } else if elements.len() <= INLINE_CAPACITY {
            Self::Inline(elements.into_iter().collect())
        } else {
            Self::Shared(Arc::new(elements))
        }
    }

    /// Stores the elements of a strictly increasing iterator.
    ///
    /// Elements are buffered inline until the ninth arrives, then the buffer
    /// spills into a heap vector sized from the iterator's hint.
    pub(super) fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut buffer: SmallVec<[T; INLINE_CAPACITY]> = SmallVec::new();
        let mut iter = iter.into_iter();

        for element in iter.by_ref() {
            debug_assert!(
                buffer.last().is_none_or(|last| last < &element),
                "{}",
                SORTED_INVARIANT_PANIC_MESSAGE
            );

            if buffer.len() >= INLINE_CAPACITY {
                let (lower, _) = iter.size_hint();
                let mut elements = Vec::with_capacity(buffer.len() + 1 + lower);
                elements.extend(buffer.drain(..));
                elements.push(element);
                elements.extend(iter);
                return Self::from_sorted_vec(elements);
            }
            buffer.push(element);
        }

        if buffer.is_empty() {
            Self::Empty
        } else {
            Self::Inline(buffer)
        }
    }

    #[inline]
    pub(super) fn as_slice(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Inline(elements) => elements.as_slice(),
            Self::Shared(elements) => elements.as_slice(),
        }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Moves the elements out, cloning only when the vector is shared.
    pub(super) fn into_vec(self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            Self::Empty => Vec::new(),
            Self::Inline(elements) => elements.into_vec(),
            Self::Shared(elements) => {
                Arc::try_unwrap(elements).unwrap_or_else(|shared| shared.as_ref().clone())
            }
        }
    }

    #[cfg(test)]
    pub(super) const fn state_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Inline(_) => "inline",
            Self::Shared(_) => "shared",
        }
    }
}

/// Returns `true` if every element is strictly less than its successor.
#[inline]
pub(super) fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}
