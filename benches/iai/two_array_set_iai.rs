//! IAI-Callgrind benchmark for TwoArraySet construction and search.
//!
//! Measures instruction counts for loading ascending and descending input and
//! for hit and miss searches.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use std::hint::black_box;
use two_array_set::set::{Location, TwoArraySet};

// Setup functions for different data sizes
fn setup_ascending_1000() -> Vec<i32> {
    (0..1000).collect()
}

fn setup_descending_1000() -> Vec<i32> {
    (0..1000).rev().collect()
}

fn setup_ascending_10000() -> Vec<i32> {
    (0..10000).collect()
}

fn setup_loaded_10000() -> TwoArraySet {
    TwoArraySet::from_elements(0..10000)
}

// Construction benchmarks
#[library_benchmark]
#[bench::with_setup(setup_ascending_1000())]
fn from_ascending_1000(elements: Vec<i32>) -> TwoArraySet {
    black_box(TwoArraySet::from_elements(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_descending_1000())]
fn from_descending_1000(elements: Vec<i32>) -> TwoArraySet {
    black_box(TwoArraySet::from_elements(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_ascending_10000())]
fn from_ascending_10000(elements: Vec<i32>) -> TwoArraySet {
    black_box(TwoArraySet::from_elements(black_box(elements)))
}

// Search benchmarks
#[library_benchmark]
#[bench::with_setup(setup_loaded_10000())]
fn search_hit_10000(mut set: TwoArraySet) -> Location {
    black_box(set.search(black_box(4321)))
}

#[library_benchmark]
#[bench::with_setup(setup_loaded_10000())]
fn search_miss_10000(mut set: TwoArraySet) -> Location {
    black_box(set.search(black_box(-3)))
}

library_benchmark_group!(
    name = two_array_set_group;
    benchmarks =
        from_ascending_1000, from_descending_1000, from_ascending_10000,
        search_hit_10000, search_miss_10000
);

main!(library_benchmark_groups = two_array_set_group);
