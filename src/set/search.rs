//! Cost-counting binary search over a sorted slice.

use std::cmp::Ordering;

/// Searches the sorted `data` for `key`.
///
/// Returns the index of a matching element (if any) and the number of steps
/// taken. Every step counts once, including the final step that observes an
/// empty range, so a miss on a slice of length `n` costs
/// `floor(log2 n) + 2` at most and a miss on an empty slice costs 1.
///
/// The midpoint of the inclusive range `[left, right]` is
/// `floor((left + right) / 2)`. Here the range is tracked half-open as
/// `[low, high)`, which gives the same midpoint without underflowing `usize`.
pub(crate) fn binary_search(data: &[i32], key: i32) -> (Option<usize>, u64) {
    let mut cost = 0;
    let mut low = 0;
    let mut high = data.len();

    loop {
        cost += 1;
        if low >= high {
            return (None, cost);
        }

        let middle = low + (high - 1 - low) / 2;
        match data[middle].cmp(&key) {
            Ordering::Equal => return (Some(middle), cost),
            Ordering::Greater => high = middle,
            Ordering::Less => low = middle + 1,
        }
    }
}
