//! Immutable ordered set backed by a sorted, deduplicated sequence.
//!
//! This module provides [`SortedSet`], a collection that is at the same
//! time a set (membership, union, intersection, difference, subset
//! relations) and a sequence (length, signed indexing, slicing, forward and
//! reverse iteration).
//!
//! # Overview
//!
//! Construction normalizes any input: the elements are sorted ascending and
//! duplicates are dropped. The resulting sequence is never modified again;
//! every operation that produces a set builds a new one.
//!
//! Small sets (up to 8 elements) are stored inline without heap
//! allocation. Larger sets keep their elements in an `Arc`-shared vector,
//! so cloning a large set is O(1).
//!
//! # Time Complexity
//!
//! | Operation                 | Complexity   |
//! |---------------------------|--------------|
//! | construction (unsorted)   | O(n log n)   |
//! | construction (sorted)     | O(n)         |
//! | `contains`, `index_of`    | O(log n)     |
//! | `len`, `at`, `get`        | O(1)         |
//! | `slice`                   | O(k)         |
//! | `union`, `intersection`   | O(n + m)     |
//! | `difference`, `is_subset` | O(n + m)     |
//!
//! # Examples
//!
//! ```rust
//! use sorted_set::SortedSet;
//!
//! let set = SortedSet::from([7, 2, 1, 1, 9]);
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.to_vec(), vec![1, 2, 7, 9]);
//!
//! // Signed indexing and slicing
//! assert_eq!(set.at(-1), Ok(&9));
//! assert_eq!(set.slice(1..3), SortedSet::from([2, 7]));
//!
//! // Set algebra returns new sets
//! let other = SortedSet::from([2, 3]);
//! assert_eq!(&set | &other, SortedSet::from([1, 2, 3, 7, 9]));
//! assert_eq!(&set & &other, SortedSet::from([2]));
//! assert_eq!(set.len(), 4);
//! ```

mod algorithms;
mod iter;
mod ops;
#[cfg(feature = "rayon")]
mod parallel;
#[cfg(feature = "serde")]
mod serialization;
mod storage;

pub use iter::{IntoIter, Iter};

use crate::capability::{OrderedSequence, SetAlgebra};
use crate::error::{ElementNotFoundError, IndexOutOfRangeError};
use std::any::Any;
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use storage::{SORTED_INVARIANT_PANIC_MESSAGE, Storage, is_strictly_sorted};

/// An immutable set of distinct elements kept in ascending order.
///
/// All operations are immutable and return new instances.
///
/// # Type Parameters
///
/// * `T` - The element type. Queries require `Ord`; operations that build a
///   new set from existing elements additionally require `Clone`.
///
/// # Examples
///
/// ```rust
/// use sorted_set::SortedSet;
///
/// let set: SortedSet<i32> = [3, 1, 2, 3].into_iter().collect();
/// let ascending: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(ascending, vec![1, 2, 3]);
///
/// let descending: Vec<i32> = set.reverse_iter().copied().collect();
/// assert_eq!(descending, vec![3, 2, 1]);
/// ```
#[derive(Clone)]
pub struct SortedSet<T> {
    storage: Storage<T>,
}

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(SortedSet<String>: Send, Sync);

impl<T> SortedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Storage::Empty,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.storage, Storage::Empty)
    }

    /// Returns the elements as an ascending slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Each call starts a new, independent traversal from the smallest
    /// element.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Returns an iterator over the elements in descending order.
    #[inline]
    pub fn reverse_iter(&self) -> std::iter::Rev<Iter<'_, T>> {
        self.iter().rev()
    }

    /// Returns the element at an unsigned position, or `None` when out of
    /// range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the smallest element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the largest element.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the element at a signed position.
    ///
    /// Non-negative indices count from the smallest element; negative
    /// indices count from the largest, so `-1` is the last element and
    /// `-len` the first.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRangeError`] when `index >= len` or
    /// `index < -len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 4, 9, 13, 15]);
    /// assert_eq!(set.at(0), Ok(&1));
    /// assert_eq!(set.at(-1), Ok(&15));
    /// assert_eq!(set.at(-5), Ok(&1));
    /// assert!(set.at(5).is_err());
    /// assert!(set.at(-6).is_err());
    /// ```
    pub fn at(&self, index: isize) -> Result<&T, IndexOutOfRangeError> {
        let length = self.len();
        let position = if index < 0 {
            length.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        position
            .and_then(|position| self.get(position))
            .ok_or(IndexOutOfRangeError { index, length })
    }
}

impl<T: Ord> SortedSet<T> {
    /// Creates a set from a vector in any order, possibly with duplicates.
    ///
    /// The vector is sorted with a stable sort and each run of equal
    /// elements keeps its first occurrence. Input that is already strictly
    /// increasing is stored as is.
    #[must_use]
    pub fn from_unsorted_vec(mut elements: Vec<T>) -> Self {
        if !is_strictly_sorted(&elements) {
            elements.sort();
            elements.dedup();
        }
        Self {
            storage: Storage::from_sorted_vec(elements),
        }
    }

    /// Creates a set from a strictly increasing vector without sorting.
    ///
    /// # Preconditions
    ///
    /// The vector must be sorted ascending with no duplicates. This is
    /// checked with `debug_assert!` in debug builds. In release builds
    /// invalid input yields a set with broken ordering (a logic error, not
    /// memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![2, 4, 6, 8, 10]);
    /// assert_eq!(set.len(), 5);
    /// ```
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<T>) -> Self {
        Self {
            storage: Storage::from_sorted_vec(elements),
        }
    }

    /// Creates a set from a strictly increasing iterator without sorting.
    ///
    /// The same preconditions as [`SortedSet::from_sorted_vec`] apply.
    #[must_use]
    pub fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            storage: Storage::from_sorted_iter(iter),
        }
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// Uses binary search. Borrowed forms of the element type are accepted,
    /// so a `SortedSet<String>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let words = SortedSet::from(["pear".to_string(), "fig".to_string()]);
    /// assert!(words.contains("fig"));
    /// assert!(!words.contains("plum"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(element).is_ok()
    }

    /// Returns the position of `element` in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`ElementNotFoundError`], carrying the position the element
    /// would be inserted at, when the element is not a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([7, 14, 22, 23]);
    /// assert_eq!(set.index_of(&22), Ok(2));
    /// assert!(set.index_of(&15).is_err());
    /// ```
    pub fn index_of<Q>(&self, element: &Q) -> Result<usize, ElementNotFoundError>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        debug_assert!(
            is_strictly_sorted(self.as_slice()),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        self.search(element)
            .map_err(|insertion_point| ElementNotFoundError { insertion_point })
    }

    /// Returns how many times `element` occurs: `1` for a member, `0`
    /// otherwise.
    #[must_use]
    pub fn count<Q>(&self, element: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        debug_assert!(
            is_strictly_sorted(self.as_slice()),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        usize::from(self.contains(element))
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        algorithms::is_subset_slices(self.as_slice(), other.as_slice())
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` is a subset of `other` and smaller than it.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Returns `true` if `self` is a superset of `other` and larger than it.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Returns `true` if `self` and `other` have no element in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        algorithms::is_disjoint_slices(self.as_slice(), other.as_slice())
    }

    fn search<Q>(&self, element: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.as_slice()
            .binary_search_by(|item| item.borrow().cmp(element))
    }
}

impl<T: Clone + Ord> SortedSet<T> {
    /// Returns the contiguous run of elements selected by `range`.
    ///
    /// Bounds are signed: negative values count from the end. Bounds past
    /// either end are clamped, so an out-of-range slice is empty rather than
    /// an error. The run is already sorted and unique and is copied without
    /// re-normalizing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 4, 9, 13, 15]);
    /// assert_eq!(set.slice(..3), SortedSet::from([1, 4, 9]));
    /// assert_eq!(set.slice(3..), SortedSet::from([13, 15]));
    /// assert_eq!(set.slice(-2..), SortedSet::from([13, 15]));
    /// assert_eq!(set.slice(7..), SortedSet::new());
    /// assert_eq!(set.slice(..), set);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        R: RangeBounds<isize>,
    {
        // A Vec never holds more than isize::MAX elements.
        let length = isize::try_from(self.len()).unwrap_or(isize::MAX);
        let absolute = |offset: isize| {
            if offset < 0 {
                length.saturating_add(offset)
            } else {
                offset
            }
        };

        let start = match range.start_bound() {
            Bound::Included(&offset) => absolute(offset),
            Bound::Excluded(&offset) => absolute(offset).saturating_add(1),
            Bound::Unbounded => 0,
        }
        .clamp(0, length);
        let end = match range.end_bound() {
            Bound::Included(&offset) => absolute(offset).saturating_add(1),
            Bound::Excluded(&offset) => absolute(offset),
            Bound::Unbounded => length,
        }
        .clamp(0, length);

        if start >= end {
            return Self::new();
        }
        if start == 0 && end == length {
            return self.clone();
        }

        let run = &self.as_slice()[start.unsigned_abs()..end.unsigned_abs()];
        Self::from_sorted_vec(run.to_vec())
    }

    /// Returns a sorted `Vec` containing clones of all elements.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Returns the union of `self` and `other`.
    ///
    /// Also available as `self + other` and `self | other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let left = SortedSet::from([1, 2, 3]);
    /// let right = SortedSet::from([3, 4, 5]);
    /// assert_eq!(left.union(&right), SortedSet::from([1, 2, 3, 4, 5]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        Self::from_sorted_vec(algorithms::union_slices(self.as_slice(), other.as_slice()))
    }

    /// Returns the elements present in both `self` and `other`.
    ///
    /// Also available as `self & other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_sorted_vec(algorithms::intersection_slices(
            self.as_slice(),
            other.as_slice(),
        ))
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// Also available as `self - other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let left = SortedSet::from([1, 2, 3, 4, 5]);
    /// let right = SortedSet::from([3, 4, 5, 6, 7]);
    /// assert_eq!(left.difference(&right), SortedSet::from([1, 2]));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self::from_sorted_vec(algorithms::difference_slices(
            self.as_slice(),
            other.as_slice(),
        ))
    }

    /// Returns the elements present in exactly one of `self` and `other`.
    ///
    /// Also available as `self ^ other`.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self::from_sorted_vec(algorithms::symmetric_difference_slices(
            self.as_slice(),
            other.as_slice(),
        ))
    }

    /// Returns `self` for a positive count and the empty set for zero.
    ///
    /// Repeating a set adds no new elements. Also available as
    /// `set * times` and `times * set`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.repeat(99), set);
    /// assert!(set.repeat(0).is_empty());
    /// ```
    #[must_use]
    pub fn repeat(&self, times: usize) -> Self {
        if times > 0 { self.clone() } else { Self::new() }
    }

    /// Returns the union of `self` and the elements of any collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 5]);
    /// assert_eq!(set.union_with(vec![4, 4, 2]), SortedSet::from([1, 2, 4, 5]));
    /// ```
    #[must_use]
    pub fn union_with<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.union(&elements.into_iter().collect())
    }

    /// Returns the elements of `self` that also occur in a collection.
    #[must_use]
    pub fn intersection_with<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.intersection(&elements.into_iter().collect())
    }

    /// Returns the elements of `self` that do not occur in a collection.
    #[must_use]
    pub fn difference_with<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.difference(&elements.into_iter().collect())
    }

    /// Returns the elements in exactly one of `self` and a collection.
    #[must_use]
    pub fn symmetric_difference_with<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.symmetric_difference(&elements.into_iter().collect())
    }

    /// Returns `true` if every element of `self` occurs in a collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2]);
    /// assert!(set.is_subset_of(vec![1, 2, 3]));
    /// assert!(!set.is_subset_of(vec![2, 3]));
    /// ```
    #[must_use]
    pub fn is_subset_of<I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let other: Self = elements.into_iter().collect();
        *self <= other
    }

    /// Returns `true` if every element of a collection occurs in `self`.
    #[must_use]
    pub fn is_superset_of<I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let other: Self = elements.into_iter().collect();
        *self >= other
    }

    /// Returns `true` if `self` shares no element with a collection.
    #[must_use]
    pub fn is_disjoint_with<I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.is_disjoint(&elements.into_iter().collect())
    }
}

impl<T: PartialEq + 'static> SortedSet<T> {
    /// Compares against a value of any type.
    ///
    /// Returns `false` for anything that is not a `SortedSet<T>`, including
    /// plain vectors or slices holding the same elements; otherwise compares
    /// element-wise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_set::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert!(set.equals(&SortedSet::from([3, 1, 2])));
    /// assert!(!set.equals(&vec![1, 2, 3]));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Negation of [`SortedSet::equals`].
    #[must_use]
    pub fn not_equals(&self, other: &dyn Any) -> bool {
        !self.equals(other)
    }
}

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for SortedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_unsorted_vec(elements)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_unsorted_vec(Vec::from(elements))
    }
}

impl<T: Clone + Ord> From<&[T]> for SortedSet<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_unsorted_vec(elements.to_vec())
    }
}

impl<T: Ord> From<BTreeSet<T>> for SortedSet<T> {
    fn from(elements: BTreeSet<T>) -> Self {
        Self::from_sorted_iter(elements)
    }
}

impl<T: Clone> From<SortedSet<T>> for Vec<T> {
    fn from(set: SortedSet<T>) -> Self {
        set.storage.into_vec()
    }
}

impl<T> AsRef<[T]> for SortedSet<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders as `SortedSet([a, b, c])`, or `SortedSet()` when empty.
impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SortedSet(")?;
        if !self.is_empty() {
            formatter.debug_list().entries(self.iter()).finish()?;
        }
        formatter.write_str(")")
    }
}

/// Renders as `{a, b, c}` in ascending order.
impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T: Clone + Ord> OrderedSequence for SortedSet<T> {
    type Element = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    fn length(&self) -> usize {
        self.len()
    }

    fn element_at(&self, index: isize) -> Result<&T, IndexOutOfRangeError> {
        self.at(index)
    }

    fn subsequence<R>(&self, range: R) -> Self
    where
        R: RangeBounds<isize>,
    {
        self.slice(range)
    }

    fn iterate(&self) -> Iter<'_, T> {
        self.iter()
    }

    fn first_element(&self) -> Option<&T> {
        self.first()
    }

    fn last_element(&self) -> Option<&T> {
        self.last()
    }
}

impl<T: Clone + Ord> SetAlgebra for SortedSet<T> {
    type Element = T;

    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn union(&self, other: &Self) -> Self {
        Self::union(self, other)
    }

    fn intersection(&self, other: &Self) -> Self {
        Self::intersection(self, other)
    }

    fn difference(&self, other: &Self) -> Self {
        Self::difference(self, other)
    }

    fn is_subset(&self, other: &Self) -> bool {
        Self::is_subset(self, other)
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        Self::symmetric_difference(self, other)
    }

    fn is_proper_subset(&self, other: &Self) -> bool {
        Self::is_proper_subset(self, other)
    }

    fn is_disjoint(&self, other: &Self) -> bool {
        Self::is_disjoint(self, other)
    }
}
