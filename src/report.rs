//! Human-readable summary of a loaded [`TwoArraySet`].
//!
//! A [`Report`] captures the set's size and insertion cost, the outcome of a
//! list of probe searches, and the contents of both buffers. Its `Display`
//! implementation renders the text layout written by the command-line tool.
//!
//! # Examples
//!
//! ```rust
//! use two_array_set::report::{DEFAULT_MISSING_KEY, Report};
//! use two_array_set::set::TwoArraySet;
//!
//! let mut set = TwoArraySet::from_elements([5, 3, 8, 1]);
//! let report = Report::build(&mut set, &[5, DEFAULT_MISSING_KEY]);
//!
//! let text = report.to_string();
//! assert!(text.starts_with("The total cost of inserting 4 elements is 6\n"));
//! assert!(text.contains("Key = 5 was found in the Large Array at index 1\n"));
//! assert!(text.contains("Key = -3 was not found\n"));
//! ```

use std::fmt;

use crate::set::{Location, TwoArraySet};

/// The probe used to illustrate a search for a key that is not stored.
pub const DEFAULT_MISSING_KEY: i32 = -3;

/// One recorded search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Probe {
    /// The key searched for.
    pub key: i32,
    /// Where the key was found.
    pub location: Location,
    /// The search cost reported by the set after the search.
    pub cost: u64,
}

impl Probe {
    /// Searches `set` for `key` and captures the resulting location and cost.
    pub fn run(set: &mut TwoArraySet, key: i32) -> Self {
        let location = set.search(key);
        let cost = set.search_cost();
        tracing::debug!(key, %location, cost, "probe finished");
        Self {
            key,
            location,
            cost,
        }
    }
}

/// A snapshot of a set's cost metrics, probe results and buffer contents.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    /// Total number of elements.
    pub size: usize,
    /// Cumulative insertion cost.
    pub insertion_cost: u64,
    /// Insertion cost per element, rounded down.
    pub amortized_insertion_cost: u64,
    /// Number of merges performed while loading.
    pub merge_count: u64,
    /// Capacity of the small buffer at report time.
    pub small_capacity: usize,
    /// Probe searches in the order they were run.
    pub probes: Vec<Probe>,
    /// Contents of the large buffer.
    pub large: Vec<i32>,
    /// Contents of the small buffer.
    pub small: Vec<i32>,
}

impl Report {
    /// Runs a [`Probe`] for each key in `probe_keys` and snapshots `set`.
    ///
    /// The set is borrowed mutably only because each search records its cost.
    #[must_use]
    pub fn build(set: &mut TwoArraySet, probe_keys: &[i32]) -> Self {
        let probes = probe_keys
            .iter()
            .map(|&key| Probe::run(set, key))
            .collect();

        Self {
            size: set.len(),
            insertion_cost: set.insertion_cost(),
            amortized_insertion_cost: set.amortized_insertion_cost(),
            merge_count: set.merge_count(),
            small_capacity: set.small_capacity(),
            probes,
            large: set.large_slice().to_vec(),
            small: set.small_slice().to_vec(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "The total cost of inserting {} elements is {}",
            self.size, self.insertion_cost
        )?;
        writeln!(
            formatter,
            "This results in an amortized cost for each insertion of {}",
            self.amortized_insertion_cost
        )?;
        writeln!(formatter)?;

        for probe in &self.probes {
            writeln!(formatter, "Key = {} was {}", probe.key, probe.location)?;
            writeln!(formatter, "The search cost {}", probe.cost)?;
            writeln!(formatter)?;
        }

        writeln!(formatter, "Large Array:")?;
        for value in &self.large {
            writeln!(formatter, "{value}")?;
        }

        writeln!(formatter)?;
        writeln!(formatter, "Small Array:")?;
        for value in &self.small {
            writeln!(formatter, "{value}")?;
        }

        Ok(())
    }
}
