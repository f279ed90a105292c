//! Two-buffer integer multiset.
//!
//! This module provides [`TwoArraySet`], which stores integers in a small
//! insertion-sorted staging buffer and a large merged buffer:
//!
//! - [`TwoArraySet`]: the set itself, with cost accounting
//! - [`Location`] / [`Buffer`]: where a search found its key
//! - [`SearchOutcome`]: a location plus the steps it took
//! - [`SortedIter`]: ascending iteration over both buffers
//!
//! # Examples
//!
//! ```rust
//! use two_array_set::set::TwoArraySet;
//!
//! let mut set: TwoArraySet = (1..=10).rev().collect();
//! assert_eq!(set.len(), 10);
//!
//! let location = set.search(7);
//! assert!(location.is_found());
//! assert!(set.search_cost() > 0);
//! ```

mod location;
mod search;
mod two_array_set;

pub use location::{Buffer, Location, SearchOutcome};
pub use two_array_set::{SortedIter, TwoArraySet};
