//! Linear-time set algorithms over strictly increasing slices.
//!
//! Every function here requires both inputs to be sorted in strictly
//! ascending order and produces output with the same property. They walk
//! both slices with two indices and take a fast path when the value ranges
//! of the inputs do not overlap.

use std::cmp::Ordering;

/// Returns `true` when every element of one slice is below every element of
/// the other. Empty slices are disjoint from anything.
#[inline]
fn ranges_disjoint<T: Ord>(left: &[T], right: &[T]) -> bool {
    match (left.first(), left.last(), right.first(), right.last()) {
        (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) => {
            left_last < right_first || right_last < left_first
        }
        _ => true,
    }
}

/// Merges two slices into their union.
///
/// # Complexity
///
/// O(n + m). Disjoint ranges are concatenated without per-element comparison.
pub(super) fn union_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len() + right.len());

    if ranges_disjoint(left, right) {
        let (lower, upper) = if left[0] < right[0] {
            (left, right)
        } else {
            (right, left)
        };
        result.extend_from_slice(lower);
        result.extend_from_slice(upper);
        return result;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Elements of `left` that are not in `right`.
pub(super) fn difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result
}

/// Elements present in both slices.
pub(super) fn intersection_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result
}

/// Elements present in exactly one of the slices.
pub(super) fn symmetric_difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Vec<T> {
    if ranges_disjoint(left, right) {
        return union_slices(left, right);
    }

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Returns `true` if every element of `left` is also in `right`.
pub(super) fn is_subset_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if left.len() > right.len() {
        return false;
    }
    if left.is_empty() {
        return true;
    }
    if ranges_disjoint(left, right) {
        return false;
    }

    let mut right_index = 0;
    for element in left {
        loop {
            match right.get(right_index).map(|candidate| candidate.cmp(element)) {
                Some(Ordering::Less) => right_index += 1,
                Some(Ordering::Equal) => {
                    right_index += 1;
                    break;
                }
                Some(Ordering::Greater) | None => return false,
            }
        }
    }
    true
}

/// Returns `true` if the slices share no element.
pub(super) fn is_disjoint_slices<T: Ord>(left: &[T], right: &[T]) -> bool {
    if ranges_disjoint(left, right) {
        return true;
    }

    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => return false,
        }
    }
    true
}
