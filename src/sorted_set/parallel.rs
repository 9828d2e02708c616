//! Rayon integration for [`SortedSet`].
//!
//! Borrowed sets expose an indexed parallel iterator over their ascending
//! slice (so `set.par_iter()` is available), and sets can be collected from
//! any parallel iterator.

use super::SortedSet;
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

impl<'a, T: Sync + 'a> IntoParallelIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type Iter = rayon::slice::Iter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.as_slice().into_par_iter()
    }
}

/// Collects with a parallel stable sort, so the first of several equal
/// elements is the one kept, as with sequential collection.
impl<T: Ord + Send> FromParallelIterator<T> for SortedSet<T> {
    fn from_par_iter<I>(iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        let mut elements: Vec<T> = iter.into_par_iter().collect();
        elements.par_sort();
        elements.dedup();
        Self::from_sorted_vec(elements)
    }
}
