//! Error types for positional access and search on a [`SortedSet`].
//!
//! Failures are local and synchronous: an index outside the set, or an
//! element that is not a member. Both are surfaced to the caller and never
//! recovered internally.
//!
//! [`SortedSet`]: crate::SortedSet

use std::fmt;

/// Represents an error when a signed index falls outside a set.
///
/// Valid indices are `0..length` counting from the front and
/// `-length..=-1` counting from the back.
///
/// # Examples
///
/// ```rust
/// use sorted_set::{IndexOutOfRangeError, SortedSet};
///
/// let set = SortedSet::from([1, 4, 9]);
/// let error = set.at(3).unwrap_err();
/// assert_eq!(error, IndexOutOfRangeError { index: 3, length: 3 });
/// assert_eq!(
///     format!("{error}"),
///     "index 3 is out of range for a set of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    /// The index that was requested.
    pub index: isize,
    /// The length of the set at the time of the request.
    pub length: usize,
}

impl fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "index {} is out of range for a set of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Represents an error when a searched element is not a member of a set.
///
/// The `insertion_point` is the position the element would occupy if a set
/// containing it were built, which lets callers locate neighbours without a
/// second search.
///
/// # Examples
///
/// ```rust
/// use sorted_set::SortedSet;
///
/// let set = SortedSet::from([7, 14, 22, 23]);
/// let error = set.index_of(&15).unwrap_err();
/// assert_eq!(error.insertion_point, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementNotFoundError {
    /// Position at which the missing element would be inserted.
    pub insertion_point: usize,
}

impl fmt::Display for ElementNotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "element not found (would be inserted at position {})",
            self.insertion_point
        )
    }
}

impl std::error::Error for ElementNotFoundError {}

/// Unified error type for every fallible [`SortedSet`] operation.
///
/// Each operation returns its own specific error; this enum exists so callers
/// mixing several operations can propagate them with a single `?` type.
///
/// # Examples
///
/// ```rust
/// use sorted_set::{SortedSet, SortedSetError};
///
/// fn neighbour_of(set: &SortedSet<i32>, element: i32) -> Result<i32, SortedSetError> {
///     let position = set.index_of(&element)?;
///     let position = isize::try_from(position).unwrap_or(isize::MAX);
///     Ok(*set.at(position + 1)?)
/// }
///
/// let set = SortedSet::from([1, 2, 3]);
/// assert_eq!(neighbour_of(&set, 1), Ok(2));
/// assert!(matches!(neighbour_of(&set, 3), Err(SortedSetError::IndexOutOfRange(_))));
/// assert!(matches!(neighbour_of(&set, 9), Err(SortedSetError::NotFound(_))));
/// ```
///
/// [`SortedSet`]: crate::SortedSet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedSetError {
    /// A positional access fell outside the set.
    IndexOutOfRange(IndexOutOfRangeError),
    /// A searched element is not a member of the set.
    NotFound(ElementNotFoundError),
}

impl fmt::Display for SortedSetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange(error) => write!(formatter, "{error}"),
            Self::NotFound(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SortedSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IndexOutOfRange(error) => Some(error),
            Self::NotFound(error) => Some(error),
        }
    }
}

impl From<IndexOutOfRangeError> for SortedSetError {
    fn from(error: IndexOutOfRangeError) -> Self {
        Self::IndexOutOfRange(error)
    }
}

impl From<ElementNotFoundError> for SortedSetError {
    fn from(error: ElementNotFoundError) -> Self {
        Self::NotFound(error)
    }
}
