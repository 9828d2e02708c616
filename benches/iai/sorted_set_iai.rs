//! IAI-Callgrind benchmark for SortedSet.
//!
//! Measures instruction counts for construction, lookup and merge.
//! Data sizes: 8 (inline), 1000 and 100000 (shared).

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sorted_set::SortedSet;
use std::hint::black_box;

fn setup_unsorted_vec(size: i32) -> Vec<i32> {
    (0..size).rev().chain(0..size / 4).collect()
}

fn setup_sorted_vec(size: i32) -> Vec<i32> {
    (0..size).collect()
}

fn setup_set(size: i32) -> SortedSet<i32> {
    (0..size).collect()
}

fn setup_pair(size: i32) -> (SortedSet<i32>, SortedSet<i32>) {
    (
        (0..size).collect(),
        (size / 2..size + size / 2).collect(),
    )
}

// construction benchmarks
#[library_benchmark]
#[bench::inline(setup_unsorted_vec(8))]
#[bench::medium(setup_unsorted_vec(1000))]
#[bench::large(setup_unsorted_vec(100_000))]
fn from_unsorted_vec(elements: Vec<i32>) -> SortedSet<i32> {
    black_box(SortedSet::from_unsorted_vec(black_box(elements)))
}

#[library_benchmark]
#[bench::inline(setup_sorted_vec(8))]
#[bench::medium(setup_sorted_vec(1000))]
#[bench::large(setup_sorted_vec(100_000))]
fn from_sorted_vec(elements: Vec<i32>) -> SortedSet<i32> {
    black_box(SortedSet::from_sorted_vec(black_box(elements)))
}

// lookup benchmarks
#[library_benchmark]
#[bench::medium(setup_set(1000))]
#[bench::large(setup_set(100_000))]
fn contains_every_tenth(set: SortedSet<i32>) -> usize {
    let length = i32::try_from(set.len()).unwrap_or(i32::MAX);
    black_box(
        (0..length)
            .step_by(10)
            .filter(|probe| set.contains(black_box(probe)))
            .count(),
    )
}

// merge benchmarks
#[library_benchmark]
#[bench::medium(setup_pair(1000))]
#[bench::large(setup_pair(100_000))]
fn union(pair: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (left, right) = pair;
    black_box(black_box(&left).union(black_box(&right)))
}

#[library_benchmark]
#[bench::medium(setup_pair(1000))]
#[bench::large(setup_pair(100_000))]
fn intersection(pair: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (left, right) = pair;
    black_box(black_box(&left).intersection(black_box(&right)))
}

library_benchmark_group!(
    name = sorted_set_group;
    benchmarks =
        from_unsorted_vec, from_sorted_vec,
        contains_every_tenth,
        union, intersection
);

main!(library_benchmark_groups = sorted_set_group);
