//! Property-based tests for TwoArraySet laws.
//!
//! These tests verify the structural invariants of the two buffers and the
//! lookup guarantees that follow from them.

use proptest::prelude::*;
use two_array_set::set::{Buffer, Location, TwoArraySet};

fn is_sorted(slice: &[i32]) -> bool {
    slice.windows(2).all(|pair| pair[0] <= pair[1])
}

// =============================================================================
// Sortedness Law
// Description: Both buffers stay non-decreasing after every insert
// =============================================================================

proptest! {
    #[test]
    fn prop_buffers_stay_sorted(elements in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut set = TwoArraySet::new();
        for element in elements {
            set.insert(element);
            prop_assert!(is_sorted(set.small_slice()));
            prop_assert!(is_sorted(set.large_slice()));
        }
    }
}

// =============================================================================
// Conservation Law
// Description: The size equals the number of inserted elements, and the
// buffers together hold exactly the inserted multiset
// =============================================================================

proptest! {
    #[test]
    fn prop_conservation_law(
        initial in prop::collection::vec(any::<i32>(), 0..100),
        additional in prop::collection::vec(-50i32..50, 0..100)
    ) {
        let mut set = TwoArraySet::from_elements(initial.clone());
        for &element in &additional {
            set.insert(element);
        }

        prop_assert_eq!(set.len(), initial.len() + additional.len());

        let mut expected: Vec<i32> = initial.into_iter().chain(additional).collect();
        expected.sort_unstable();
        prop_assert_eq!(set.to_sorted_vec(), expected);
    }
}

// =============================================================================
// Find-What-You-Put Law
// Description: Every inserted element is found, at its reported position
// =============================================================================

proptest! {
    #[test]
    fn prop_find_what_you_put(elements in prop::collection::vec(-1000i32..1000, 1..150)) {
        let mut set = TwoArraySet::from_elements(elements.clone());

        for element in elements {
            let location = set.search(element);
            let stored = match location {
                Location::Found { buffer: Buffer::Large, index } => set.large_slice()[index],
                Location::Found { buffer: Buffer::Small, index } => set.small_slice()[index],
                Location::NotFound => {
                    return Err(TestCaseError::fail(format!("{element} not found")));
                }
            };
            prop_assert_eq!(stored, element);
        }
    }
}

// =============================================================================
// Miss Law
// Description: Keys outside [min, max] and keys never inserted are not found
// =============================================================================

proptest! {
    #[test]
    fn prop_out_of_range_miss(
        elements in prop::collection::vec(-1000i32..1000, 0..150),
        below in i32::MIN..-1000,
        above in 1000i32..=i32::MAX
    ) {
        let mut set = TwoArraySet::from_elements(elements);

        prop_assert_eq!(set.search(below), Location::NotFound);
        prop_assert_eq!(set.search_cost(), 0);
        prop_assert_eq!(set.search(above), Location::NotFound);
        prop_assert_eq!(set.search_cost(), 0);
    }

    #[test]
    fn prop_absent_key_miss(
        elements in prop::collection::vec((-500i32..500).prop_map(|value| value * 2), 0..150),
        odd in (-500i32..500).prop_map(|value| value * 2 + 1)
    ) {
        let mut set = TwoArraySet::from_elements(elements);
        prop_assert_eq!(set.search(odd), Location::NotFound);
    }
}

// =============================================================================
// Capacity Law
// Description: The small buffer never exceeds its capacity, and the capacity
// equals max(1, floor(sqrt(len(large)))) once a merge has happened
// =============================================================================

proptest! {
    #[test]
    fn prop_capacity_law(elements in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut set = TwoArraySet::new();
        for element in elements {
            set.insert(element);
            prop_assert!(set.small_slice().len() <= set.small_capacity());
            prop_assert!(set.small_capacity() >= 1);
            if set.merge_count() > 0 {
                prop_assert_eq!(set.small_capacity(), set.large_slice().len().isqrt().max(1));
            }
        }
    }
}

// =============================================================================
// Cost Laws
// Description: Insertion cost never decreases; search cost is bounded by the
// binary-search depth of both buffers
// =============================================================================

proptest! {
    #[test]
    fn prop_insertion_cost_monotonic(elements in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut set = TwoArraySet::new();
        let mut previous = 0;
        for element in elements {
            set.insert(element);
            prop_assert!(set.insertion_cost() >= previous);
            previous = set.insertion_cost();
        }
    }

    #[test]
    fn prop_search_cost_bounded(
        elements in prop::collection::vec(-1000i32..1000, 0..300),
        key in -1100i32..1100
    ) {
        let mut set = TwoArraySet::from_elements(elements);
        set.search(key);

        let depth = |len: usize| if len == 0 { 0 } else { u64::from(len.ilog2()) + 2 };
        let bound = depth(set.large_slice().len()) + depth(set.small_slice().len());
        prop_assert!(set.search_cost() <= bound);
    }

    #[test]
    fn prop_find_matches_search(
        elements in prop::collection::vec(-100i32..100, 0..100),
        key in -120i32..120
    ) {
        let mut set = TwoArraySet::from_elements(elements);
        let outcome = set.find(key);
        let location = set.search(key);

        prop_assert_eq!(outcome.location, location);
        prop_assert_eq!(outcome.cost, set.search_cost());
    }
}
