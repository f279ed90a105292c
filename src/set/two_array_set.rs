//! Integer multiset backed by a small staging buffer and a large sorted buffer.
//!
//! # Overview
//!
//! [`TwoArraySet`] keeps every element in one of two sorted buffers:
//!
//! - **small**: a bounded staging buffer. New elements are always inserted
//!   here and placed by insertion sort. It lives inline (`SmallVec`) while its
//!   capacity is at most 8 and spills to the heap beyond that.
//! - **large**: the fully sorted store. When the small buffer is full, both
//!   buffers are merged into a fresh large buffer and a new small buffer is
//!   allocated with capacity `floor(sqrt(len(large)))`, never less than 1.
//!
//! Lookups check the value range of the large buffer first, then the small
//! buffer, and binary search whichever buffer could hold the key.
//!
//! Duplicates are kept: inserting the same value twice stores it twice.
//!
//! # Cost accounting
//!
//! The set counts element moves performed by insertion (`insertion_cost`:
//! one per insertion-sort shift, one per element copied by a merge) and the
//! binary-search steps of the most recent [`search`](TwoArraySet::search)
//! (`search_cost`). The counters are instrumentation only.
//!
//! # Time Complexity
//!
//! | Operation      | Cost                                  |
//! |----------------|---------------------------------------|
//! | `insert`       | O(sqrt n) amortized                   |
//! | `search`       | O(log n)                              |
//! | `find`         | O(log n)                              |
//! | `len`          | O(1)                                  |
//! | `iter_sorted`  | O(1) + O(n)                           |
//!
//! # Examples
//!
//! ```rust
//! use two_array_set::set::{Buffer, Location, TwoArraySet};
//!
//! let mut set = TwoArraySet::from_elements([5, 3, 8, 1]);
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.large_slice(), &[3, 5, 8]);
//! assert_eq!(set.small_slice(), &[1]);
//!
//! assert_eq!(
//!     set.search(8),
//!     Location::Found { buffer: Buffer::Large, index: 2 }
//! );
//! assert_eq!(set.search_cost(), 2);
//!
//! assert_eq!(set.search(100), Location::NotFound);
//! assert_eq!(set.search_cost(), 0);
//! ```

use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;

use super::location::{Buffer, Location, SearchOutcome};
use super::search::binary_search;

/// Number of staging elements stored inline before the small buffer spills to the heap.
const INLINE_CAPACITY: usize = 8;

/// Capacity of the small buffer before the first merge.
const INITIAL_SMALL_CAPACITY: usize = 1;

/// A two-buffer integer multiset with amortized insertion and binary-search lookup.
///
/// See the [module documentation](self) for the layout and growth rule.
///
/// # Examples
///
/// ```rust
/// use two_array_set::set::TwoArraySet;
///
/// let mut set = TwoArraySet::new();
/// for value in (0..100).rev() {
///     set.insert(value);
/// }
///
/// assert_eq!(set.len(), 100);
/// assert!(set.contains(42));
/// assert_eq!(set.to_sorted_vec(), (0..100).collect::<Vec<_>>());
/// ```
#[derive(Clone)]
pub struct TwoArraySet {
    small: SmallVec<[i32; INLINE_CAPACITY]>,
    small_capacity: usize,
    large: Vec<i32>,
    insertion_cost: u64,
    search_cost: u64,
    merge_count: u64,
}

impl TwoArraySet {
    /// Creates an empty set whose small buffer holds a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use two_array_set::set::TwoArraySet;
    ///
    /// let set = TwoArraySet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.small_capacity(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            small: SmallVec::new(),
            small_capacity: INITIAL_SMALL_CAPACITY,
            large: Vec::new(),
            insertion_cost: 0,
            search_cost: 0,
            merge_count: 0,
        }
    }

    /// Builds a set by inserting every element of `elements` in order.
    ///
    /// The result is identical to calling [`insert`](Self::insert) on an empty
    /// set once per element, including the accumulated insertion cost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use two_array_set::set::TwoArraySet;
    ///
    /// let set = TwoArraySet::from_elements(vec![2, 2, 1]);
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(set.to_sorted_vec(), vec![1, 2, 2]);
    /// ```
    #[must_use]
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut set = Self::new();
        set.extend(elements);
        set
    }

    /// Inserts `entry`, merging the buffers first if the small buffer is full.
    ///
    /// When the small buffer is at capacity, the small and large buffers are
    /// merged into a new large buffer and the small buffer is reallocated with
    /// capacity `max(1, floor(sqrt(len(large))))`. The entry is then placed in
    /// the small buffer by insertion sort; each element shifted to make room
    /// adds one to the insertion cost.
    ///
    /// # Complexity
    ///
    /// O(sqrt n) amortized: insertion sort over at most `sqrt n` elements plus
    /// an O(n) merge every `sqrt n` inserts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use two_array_set::set::TwoArraySet;
    ///
    /// let mut set = TwoArraySet::new();
    /// set.insert(7);
    /// set.insert(7);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, entry: i32) {
        if self.is_small_full() {
            self.merge();
        }

        self.small.push(entry);

        let mut position = self.small.len() - 1;
        while position > 0 && self.small[position - 1] > entry {
            self.small[position] = self.small[position - 1];
            self.insertion_cost = self.insertion_cost.saturating_add(1);
            position -= 1;
        }
        self.small[position] = entry;

        tracing::trace!(entry, position, "inserted into small buffer");
    }

    /// Searches both buffers for `key` and records the number of steps taken.
    ///
    /// The large buffer is searched first, and only when `key` lies within its
    /// `[first, last]` range. The small buffer is searched next under the same
    /// range condition. An empty buffer is skipped without reading its bounds.
    ///
    /// The step count replaces the previous value of
    /// [`search_cost`](Self::search_cost). Use [`find`](Self::find) for the
    /// same lookup without mutating the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use two_array_set::set::{Buffer, Location, TwoArraySet};
    ///
    /// let mut set = TwoArraySet::from_elements([5, 3, 8, 1]);
    ///
    /// assert_eq!(
    ///     set.search(1),
    ///     Location::Found { buffer: Buffer::Small, index: 0 }
    /// );
    /// assert_eq!(set.search_cost(), 1);
    /// ```
    pub fn search(&mut self, key: i32) -> Location {
        self.search_cost = 0;
        let outcome = self.find(key);
        self.search_cost = outcome.cost;
        outcome.location
    }

    /// Looks up `key` like [`search`](Self::search) but returns the step count
    /// instead of recording it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use two_array_set::set::{Location, TwoArraySet};
    ///
    /// let set = TwoArraySet::from_elements([5, 3, 8, 1]);
    ///
    /// // 4 lies inside the large buffer's range, so the miss still costs steps.
    /// let outcome = set.find(4);
    /// assert_eq!(outcome.location, Location::NotFound);
    /// assert_eq!(outcome.cost, 3);
    /// ```
    #[must_use]
    pub fn find(&self, key: i32) -> SearchOutcome {
        let (found, large_cost) = search_in_range(&self.large, key);
        if let Some(index) = found {
            return SearchOutcome {
                location: Location::Found {
                    buffer: Buffer::Large,
                    index,
                },
                cost: large_cost,
            };
        }

        let (found, small_cost) = search_in_range(&self.small, key);
        let location = found.map_or(Location::NotFound, |index| Location::Found {
            buffer: Buffer::Small,
            index,
        });

        SearchOutcome {
            location,
            cost: large_cost + small_cost,
        }
    }

    /// Returns `true` if at least one copy of `key` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: i32) -> bool {
        self.find(key).location.is_found()
    }

    /// Returns the total number of stored elements across both buffers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.small.len() + self.large.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.small.is_empty() && self.large.is_empty()
    }

    /// Returns the cumulative number of element moves performed by inserts and merges.
    #[inline]
    #[must_use]
    pub const fn insertion_cost(&self) -> u64 {
        self.insertion_cost
    }

    /// Returns the insertion cost divided by the element count, rounded down.
    ///
    /// An empty set reports 0.
    #[inline]
    #[must_use]
    pub fn amortized_insertion_cost(&self) -> u64 {
        u64::try_from(self.len())
            .ok()
            .and_then(|len| self.insertion_cost.checked_div(len))
            .unwrap_or(0)
    }

    /// Returns the binary-search steps taken by the most recent [`search`](Self::search).
    #[inline]
    #[must_use]
    pub const fn search_cost(&self) -> u64 {
        self.search_cost
    }

    /// Returns the number of merges performed so far.
    #[inline]
    #[must_use]
    pub const fn merge_count(&self) -> u64 {
        self.merge_count
    }

    /// Returns the number of elements the small buffer accepts before the next merge.
    #[inline]
    #[must_use]
    pub const fn small_capacity(&self) -> usize {
        self.small_capacity
    }

    /// Returns the occupied, sorted part of the small buffer.
    #[inline]
    #[must_use]
    pub fn small_slice(&self) -> &[i32] {
        &self.small
    }

    /// Returns the sorted large buffer.
    #[inline]
    #[must_use]
    pub fn large_slice(&self) -> &[i32] {
        &self.large
    }

    /// Returns an iterator over all elements in ascending order.
    ///
    /// The two buffers are merged lazily; nothing is allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use two_array_set::set::TwoArraySet;
    ///
    /// let set = TwoArraySet::from_elements([4, 1, 3, 2, 5]);
    /// let sorted: Vec<i32> = set.iter_sorted().collect();
    /// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_sorted(&self) -> SortedIter<'_> {
        SortedIter {
            small: &self.small,
            large: &self.large,
        }
    }

    /// Collects all elements into a sorted `Vec`.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<i32> {
        self.iter_sorted().collect()
    }

    #[inline]
    fn is_small_full(&self) -> bool {
        self.small.len() >= self.small_capacity
    }

    /// Replaces the large buffer with the merge of both buffers and resizes the small buffer.
    fn merge(&mut self) {
        let merged = merge_sorted(&self.small, &self.large);
        let copied = u64::try_from(merged.len()).unwrap_or(u64::MAX);
        self.insertion_cost = self.insertion_cost.saturating_add(copied);
        self.merge_count += 1;

        self.small_capacity = small_capacity_for(merged.len());
        self.large = merged;
        self.small = SmallVec::with_capacity(self.small_capacity);

        tracing::debug!(
            large_len = self.large.len(),
            small_capacity = self.small_capacity,
            merge_count = self.merge_count,
            "merged small buffer into large buffer"
        );
    }
}

impl Default for TwoArraySet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TwoArraySet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TwoArraySet")
            .field("small", &self.small.as_slice())
            .field("small_capacity", &self.small_capacity)
            .field("large", &self.large)
            .field("insertion_cost", &self.insertion_cost)
            .field("search_cost", &self.search_cost)
            .field("merge_count", &self.merge_count)
            .finish()
    }
}

impl PartialEq for TwoArraySet {
    fn eq(&self, other: &Self) -> bool {
        self.small_capacity == other.small_capacity
            && self.small == other.small
            && self.large == other.large
    }
}

impl Eq for TwoArraySet {}

impl Extend<i32> for TwoArraySet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<i32> for TwoArraySet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from_elements(iter)
    }
}

impl<'a> IntoIterator for &'a TwoArraySet {
    type Item = i32;
    type IntoIter = SortedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_sorted()
    }
}

/// Ascending iterator over both buffers of a [`TwoArraySet`].
///
/// Created by [`TwoArraySet::iter_sorted`].
#[derive(Debug, Clone)]
pub struct SortedIter<'a> {
    small: &'a [i32],
    large: &'a [i32],
}

impl Iterator for SortedIter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.small.split_first(), self.large.split_first()) {
            (Some((&small, small_rest)), Some((&large, _))) if small < large => {
                self.small = small_rest;
                Some(small)
            }
            (_, Some((&large, large_rest))) => {
                self.large = large_rest;
                Some(large)
            }
            (Some((&small, small_rest)), None) => {
                self.small = small_rest;
                Some(small)
            }
            (None, None) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.small.len() + self.large.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SortedIter<'_> {}

impl FusedIterator for SortedIter<'_> {}

static_assertions::assert_impl_all!(TwoArraySet: Send, Sync, Clone);

/// Returns the small-buffer capacity that follows a merge producing `large_len` elements.
#[inline]
fn small_capacity_for(large_len: usize) -> usize {
    large_len.isqrt().max(INITIAL_SMALL_CAPACITY)
}

/// Range-checks `data` before binary searching it.
///
/// An empty slice, or a key outside `[first, last]`, is a miss that costs no
/// steps.
fn search_in_range(data: &[i32], key: i32) -> (Option<usize>, u64) {
    match (data.first(), data.last()) {
        (Some(&first), Some(&last)) if first <= key && key <= last => binary_search(data, key),
        _ => (None, 0),
    }
}

/// Merges two sorted slices into a new sorted `Vec`.
///
/// The small element is taken only when strictly less than the large one, so
/// equal keys from the large buffer come first. Duplicates are preserved.
///
/// # Complexity
///
/// O(n + m) where n = `small.len()`, m = `large.len()`.
fn merge_sorted(small: &[i32], large: &[i32]) -> Vec<i32> {
    let mut result = Vec::with_capacity(small.len() + large.len());
    let mut small_index = 0;
    let mut large_index = 0;

    while small_index < small.len() && large_index < large.len() {
        if small[small_index] < large[large_index] {
            result.push(small[small_index]);
            small_index += 1;
        } else {
            result.push(large[large_index]);
            large_index += 1;
        }
    }

    // Tail: at most one side still has elements
    result.extend_from_slice(&small[small_index..]);
    result.extend_from_slice(&large[large_index..]);

    result
}
