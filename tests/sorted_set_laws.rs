//! Property-based tests for SortedSet laws.
//!
//! Every set operation is checked against `BTreeSet` through the shared
//! `SetAlgebra` capability, and the sequence view is checked against the
//! sorted, deduplicated input.

use proptest::prelude::*;
use sorted_set::{OrderedSequence, SetAlgebra, SortedSet};
use std::collections::BTreeSet;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-40..40_i32, 0..40)
}

fn both(input: &[i32]) -> (SortedSet<i32>, BTreeSet<i32>) {
    (
        input.iter().copied().collect(),
        input.iter().copied().collect(),
    )
}

fn assert_matches_oracle(set: &SortedSet<i32>, oracle: &BTreeSet<i32>) -> Result<(), TestCaseError> {
    let expected: Vec<i32> = oracle.iter().copied().collect();
    prop_assert_eq!(set.to_vec(), expected);
    Ok(())
}

// =============================================================================
// Normalization Law
// Description: Construction sorts and deduplicates its input
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_normalizes(input in elements()) {
        let set: SortedSet<i32> = input.iter().copied().collect();
        let mut expected = input;
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(set.len(), expected.len());
        prop_assert_eq!(set.to_vec(), expected);
        prop_assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #[test]
    fn prop_construction_is_order_independent(input in elements()) {
        let forward: SortedSet<i32> = input.iter().copied().collect();
        let backward: SortedSet<i32> = input.iter().rev().copied().collect();
        prop_assert_eq!(forward, backward);
    }
}

// =============================================================================
// Oracle Laws
// Description: Set operations agree with BTreeSet
// =============================================================================

proptest! {
    #[test]
    fn prop_membership_matches_oracle(input in elements(), probe in -50..50_i32) {
        let (set, oracle) = both(&input);
        prop_assert_eq!(set.contains_element(&probe), oracle.contains_element(&probe));
        prop_assert_eq!(set.count(&probe), usize::from(oracle.contains(&probe)));
    }
}

proptest! {
    #[test]
    fn prop_binary_operations_match_oracle(left in elements(), right in elements()) {
        let (left_set, left_oracle) = both(&left);
        let (right_set, right_oracle) = both(&right);

        assert_matches_oracle(
            &SetAlgebra::union(&left_set, &right_set),
            &SetAlgebra::union(&left_oracle, &right_oracle),
        )?;
        assert_matches_oracle(
            &SetAlgebra::intersection(&left_set, &right_set),
            &SetAlgebra::intersection(&left_oracle, &right_oracle),
        )?;
        assert_matches_oracle(
            &SetAlgebra::difference(&left_set, &right_set),
            &SetAlgebra::difference(&left_oracle, &right_oracle),
        )?;
        assert_matches_oracle(
            &SetAlgebra::symmetric_difference(&left_set, &right_set),
            &SetAlgebra::symmetric_difference(&left_oracle, &right_oracle),
        )?;
    }
}

proptest! {
    #[test]
    fn prop_relations_match_oracle(left in elements(), right in elements()) {
        let (left_set, left_oracle) = both(&left);
        let (right_set, right_oracle) = both(&right);

        prop_assert_eq!(
            SetAlgebra::is_subset(&left_set, &right_set),
            SetAlgebra::is_subset(&left_oracle, &right_oracle)
        );
        prop_assert_eq!(
            SetAlgebra::is_proper_superset(&left_set, &right_set),
            SetAlgebra::is_proper_superset(&left_oracle, &right_oracle)
        );
        prop_assert_eq!(
            SetAlgebra::is_disjoint(&left_set, &right_set),
            SetAlgebra::is_disjoint(&left_oracle, &right_oracle)
        );
    }
}

// =============================================================================
// Algebraic Laws
// Description: Union and intersection are commutative and idempotent, the
// empty set is an identity, and the operations relate to one another
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutative(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        prop_assert_eq!(&left | &right, &right | &left);
    }
}

proptest! {
    #[test]
    fn prop_intersection_commutative(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        prop_assert_eq!(&left & &right, &right & &left);
    }
}

proptest! {
    #[test]
    fn prop_idempotent(input in elements()) {
        let set: SortedSet<i32> = input.into_iter().collect();
        prop_assert_eq!(&set | &set, set.clone());
        prop_assert_eq!(&set & &set, set.clone());
        prop_assert!((&set - &set).is_empty());
        prop_assert!((&set ^ &set).is_empty());
    }
}

proptest! {
    #[test]
    fn prop_union_and_intersection_bound_operands(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        let union = &left | &right;
        let intersection = &left & &right;

        prop_assert!(left <= union);
        prop_assert!(right <= union);
        prop_assert!(intersection <= left);
        prop_assert!(intersection <= right);
        prop_assert_eq!(union.len() + intersection.len(), left.len() + right.len());
    }
}

proptest! {
    #[test]
    fn prop_empty_set_is_identity(input in elements()) {
        let set: SortedSet<i32> = input.into_iter().collect();
        let empty = SortedSet::new();
        prop_assert_eq!(&set | &empty, set.clone());
        prop_assert_eq!(&set - &empty, set.clone());
        prop_assert_eq!(&set ^ &empty, set.clone());
        prop_assert!((&set & &empty).is_empty());
    }
}

proptest! {
    #[test]
    fn prop_difference_is_disjoint_from_subtrahend(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        let difference = &left - &right;
        prop_assert!(difference.is_disjoint(&right));
        prop_assert!(difference <= left);
    }
}

proptest! {
    #[test]
    fn prop_symmetric_difference_is_union_minus_intersection(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        prop_assert_eq!(&left ^ &right, (&left | &right) - (&left & &right));
    }
}

// =============================================================================
// Inclusion Order Laws
// Description: Relational operators are the subset partial order
// =============================================================================

proptest! {
    #[test]
    fn prop_relational_operators_match_subset(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();

        prop_assert_eq!(left <= right, left.is_subset(&right));
        prop_assert_eq!(left < right, left.is_proper_subset(&right));
        prop_assert_eq!(left >= right, left.is_superset(&right));
        prop_assert_eq!(left > right, left.is_proper_superset(&right));
    }
}

proptest! {
    #[test]
    fn prop_subset_superset_duality(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        prop_assert_eq!(left.is_subset(&right), right.is_superset(&left));
        prop_assert_eq!(left.is_subset_of(right.to_vec()), right.is_superset_of(left.to_vec()));
    }
}

proptest! {
    #[test]
    fn prop_mutual_subset_is_equality(left in elements(), right in elements()) {
        let left: SortedSet<i32> = left.into_iter().collect();
        let right: SortedSet<i32> = right.into_iter().collect();
        prop_assert_eq!(left <= right && right <= left, left == right);
    }
}

// =============================================================================
// Sequence Laws
// Description: Indexing, searching and slicing agree with the ascending view
// =============================================================================

proptest! {
    #[test]
    fn prop_index_of_inverts_at(input in elements()) {
        let set: SortedSet<i32> = input.into_iter().collect();
        for (position, element) in set.iter().enumerate() {
            prop_assert_eq!(set.index_of(element), Ok(position));
            let index = isize::try_from(position).unwrap();
            prop_assert_eq!(set.at(index), Ok(element));
        }
    }
}

proptest! {
    #[test]
    fn prop_negative_index_counts_from_end(input in elements()) {
        let set: SortedSet<i32> = input.into_iter().collect();
        let length = isize::try_from(set.len()).unwrap();
        for offset in 1..=length {
            prop_assert_eq!(set.at(-offset), set.at(length - offset));
        }
        prop_assert!(set.at(length).is_err());
        prop_assert!(set.at(-length - 1).is_err());
    }
}

proptest! {
    #[test]
    fn prop_slice_matches_vec_slice(input in elements(), start in 0..50_isize, end in 0..50_isize) {
        let set: SortedSet<i32> = input.into_iter().collect();
        let ascending = set.to_vec();
        let length = isize::try_from(ascending.len()).unwrap();
        let clamped_start = start.min(length).unsigned_abs();
        let clamped_end = end.min(length).unsigned_abs();
        let expected = if clamped_start < clamped_end {
            ascending[clamped_start..clamped_end].to_vec()
        } else {
            Vec::new()
        };

        prop_assert_eq!(set.slice(start..end).to_vec(), expected);
    }
}

proptest! {
    #[test]
    fn prop_slices_concatenate_to_whole(input in elements(), split in -50..50_isize) {
        let set: SortedSet<i32> = input.into_iter().collect();
        let head = set.slice(..split);
        let tail = set.slice(split..);
        prop_assert_eq!(head.len() + tail.len(), set.len());
        prop_assert_eq!(&head | &tail, set);
    }
}

proptest! {
    #[test]
    fn prop_reverse_iteration_is_reversed(input in elements()) {
        let set: SortedSet<i32> = input.into_iter().collect();
        let mut forward: Vec<i32> = set.iterate().copied().collect();
        forward.reverse();
        let backward: Vec<i32> = set.reverse_iterate().copied().collect();
        prop_assert_eq!(backward, forward);
    }
}
