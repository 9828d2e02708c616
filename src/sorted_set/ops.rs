//! Comparison traits and operator bindings for [`SortedSet`].
//!
//! Every operator is a thin binding to a named method:
//!
//! | Operator      | Method                              |
//! |---------------|-------------------------------------|
//! | `a + b`       | [`SortedSet::union`]                |
//! | `a \| b`      | [`SortedSet::union`]                |
//! | `a & b`       | [`SortedSet::intersection`]         |
//! | `a - b`       | [`SortedSet::difference`]           |
//! | `a ^ b`       | [`SortedSet::symmetric_difference`] |
//! | `a * n`       | [`SortedSet::repeat`]               |
//! | `n * a`       | [`SortedSet::repeat`]               |
//! | `a < b` etc.  | subset relations                    |
//!
//! Binary set operators accept any mix of owned and borrowed operands.

use super::SortedSet;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::{Add, BitAnd, BitOr, BitXor, Index, Mul, Sub};

impl<T: PartialEq> PartialEq for SortedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SortedSet<T> {}

/// Orders sets by inclusion.
///
/// `a < b` holds when `a` is a proper subset of `b`, `a <= b` when it is a
/// subset, and symmetrically for `>` and `>=`. Sets where neither contains
/// the other are incomparable: `partial_cmp` returns `None` and every
/// relational operator is `false`.
///
/// # Examples
///
/// ```rust
/// use sorted_set::SortedSet;
///
/// let small = SortedSet::from([1, 2]);
/// let large = SortedSet::from([1, 2, 3]);
/// let other = SortedSet::from([4]);
///
/// assert!(small < large);
/// assert!(large >= small);
/// assert!(!(small < other) && !(small >= other));
/// ```
impl<T: Ord> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Less => self.is_subset(other).then_some(Ordering::Less),
            Ordering::Greater => other.is_subset(self).then_some(Ordering::Greater),
            Ordering::Equal => (self == other).then_some(Ordering::Equal),
        }
    }
}

impl<T: Hash> Hash for SortedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

/// Positional access in ascending order.
///
/// # Panics
///
/// Panics if `index >= len`. Use [`SortedSet::get`] or [`SortedSet::at`]
/// for non-panicking access.
impl<T> Index<usize> for SortedSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

macro_rules! set_operator {
    ($operator:ident, $function:ident, $method:ident) => {
        impl<T: Clone + Ord> $operator<&SortedSet<T>> for &SortedSet<T> {
            type Output = SortedSet<T>;

            fn $function(self, other: &SortedSet<T>) -> SortedSet<T> {
                self.$method(other)
            }
        }

        impl<T: Clone + Ord> $operator<SortedSet<T>> for &SortedSet<T> {
            type Output = SortedSet<T>;

            fn $function(self, other: SortedSet<T>) -> SortedSet<T> {
                self.$method(&other)
            }
        }

        impl<T: Clone + Ord> $operator<&SortedSet<T>> for SortedSet<T> {
            type Output = SortedSet<T>;

            fn $function(self, other: &SortedSet<T>) -> SortedSet<T> {
                self.$method(other)
            }
        }

        impl<T: Clone + Ord> $operator<SortedSet<T>> for SortedSet<T> {
            type Output = SortedSet<T>;

            fn $function(self, other: SortedSet<T>) -> SortedSet<T> {
                self.$method(&other)
            }
        }
    };
}

set_operator!(Add, add, union);
set_operator!(BitOr, bitor, union);
set_operator!(BitAnd, bitand, intersection);
set_operator!(Sub, sub, difference);
set_operator!(BitXor, bitxor, symmetric_difference);

impl<T: Clone + Ord> Mul<usize> for SortedSet<T> {
    type Output = Self;

    fn mul(self, times: usize) -> Self {
        if times > 0 { self } else { Self::new() }
    }
}

impl<T: Clone + Ord> Mul<usize> for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn mul(self, times: usize) -> SortedSet<T> {
        self.repeat(times)
    }
}

impl<T: Clone + Ord> Mul<SortedSet<T>> for usize {
    type Output = SortedSet<T>;

    fn mul(self, set: SortedSet<T>) -> SortedSet<T> {
        set * self
    }
}

impl<T: Clone + Ord> Mul<&SortedSet<T>> for usize {
    type Output = SortedSet<T>;

    fn mul(self, set: &SortedSet<T>) -> SortedSet<T> {
        set.repeat(self)
    }
}
