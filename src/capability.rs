//! Capability traits for ordered sequences and sets.
//!
//! A sorted, deduplicated container is two things at once: a sequence that
//! can be indexed, sliced and iterated in order, and a set that supports
//! membership and set algebra. These are modelled as two small, independent
//! traits so that generic code can ask for exactly the capability it needs.
//!
//! - [`OrderedSequence`]: length, signed positional access, slicing and
//!   double-ended iteration.
//! - [`SetAlgebra`]: membership, union, intersection, difference and the
//!   subset relations.
//!
//! # Laws
//!
//! For any `SetAlgebra` values `a`, `b`:
//!
//! ```text
//! a.union(&b)        == b.union(&a)
//! a.intersection(&b) == b.intersection(&a)
//! a.difference(&b).is_disjoint(&b)
//! a.is_subset(&b)    == b.is_superset(&a)
//! a.is_subset(&a.union(&b))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sorted_set::{SetAlgebra, SortedSet};
//! use std::collections::BTreeSet;
//!
//! fn shared<S: SetAlgebra>(left: &S, right: &S) -> S {
//!     left.intersection(right)
//! }
//!
//! let sorted = shared(&SortedSet::from([1, 2, 3]), &SortedSet::from([2, 3, 4]));
//! let tree = shared(&BTreeSet::from([1, 2, 3]), &BTreeSet::from([2, 3, 4]));
//! assert!(sorted.iter().eq(tree.iter()));
//! ```

use crate::error::IndexOutOfRangeError;
use std::collections::BTreeSet;
use std::ops::RangeBounds;

/// A finite sequence whose elements can be reached by position.
///
/// Positions are signed: `0..length` counts from the front and
/// `-length..=-1` counts from the back.
///
/// # Examples
///
/// ```rust
/// use sorted_set::{OrderedSequence, SortedSet};
///
/// fn middle<S: OrderedSequence>(sequence: &S) -> Option<&S::Element> {
///     let half = isize::try_from(sequence.length() / 2).ok()?;
///     sequence.element_at(half).ok()
/// }
///
/// assert_eq!(middle(&SortedSet::from([9, 1, 5])), Some(&5));
/// ```
pub trait OrderedSequence {
    /// The element type.
    type Element;

    /// Iterator over the elements in sequence order.
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Element> + ExactSizeIterator
    where
        Self: 'a;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns the element at a signed position.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRangeError`] if `index` is not in
    /// `-length..length`.
    fn element_at(&self, index: isize) -> Result<&Self::Element, IndexOutOfRangeError>;

    /// Returns the contiguous run selected by `range`, with negative bounds
    /// counting from the back and bounds clamped to the sequence.
    #[must_use]
    fn subsequence<R>(&self, range: R) -> Self
    where
        R: RangeBounds<isize>,
        Self: Sized;

    /// Returns a fresh iterator from the first element.
    fn iterate(&self) -> Self::Iter<'_>;

    /// Returns a fresh iterator from the last element.
    fn reverse_iterate(&self) -> std::iter::Rev<Self::Iter<'_>> {
        self.iterate().rev()
    }

    /// Returns `true` if the sequence has no elements.
    fn is_empty_sequence(&self) -> bool {
        self.length() == 0
    }

    /// Returns the first element, if any.
    fn first_element(&self) -> Option<&Self::Element> {
        self.iterate().next()
    }

    /// Returns the last element, if any.
    fn last_element(&self) -> Option<&Self::Element> {
        self.iterate().next_back()
    }
}

/// A finite set of elements with the usual set algebra.
///
/// Implementors provide membership, union, intersection, difference and
/// the subset test; the remaining relations are derived from them.
pub trait SetAlgebra: Sized {
    /// The element type.
    type Element;

    /// Returns `true` if `element` is a member.
    fn contains_element(&self, element: &Self::Element) -> bool;

    /// Returns the set of elements in `self` or `other`.
    #[must_use]
    fn union(&self, other: &Self) -> Self;

    /// Returns the set of elements in both `self` and `other`.
    #[must_use]
    fn intersection(&self, other: &Self) -> Self;

    /// Returns the set of elements in `self` but not in `other`.
    #[must_use]
    fn difference(&self, other: &Self) -> Self;

    /// Returns `true` if every element of `self` is in `other`.
    fn is_subset(&self, other: &Self) -> bool;

    /// Returns the set of elements in exactly one of `self` and `other`.
    #[must_use]
    fn symmetric_difference(&self, other: &Self) -> Self {
        self.union(other).difference(&self.intersection(other))
    }

    /// Returns `true` if every element of `other` is in `self`.
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && !other.is_subset(self)
    }

    /// Returns `true` if `self` is a superset of `other` and the two differ.
    fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if `self` and `other` share no element.
    fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).is_subset(&self.difference(self))
    }
}

impl<T: Clone + Ord> SetAlgebra for BTreeSet<T> {
    type Element = T;

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn union(&self, other: &Self) -> Self {
        Self::union(self, other).cloned().collect()
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::intersection(self, other).cloned().collect()
    }

    fn difference(&self, other: &Self) -> Self {
        Self::difference(self, other).cloned().collect()
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        Self::symmetric_difference(self, other).cloned().collect()
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Self::is_disjoint(self, other)
    }
}
