//! # two-array-set
//!
//! An integer multiset stored in two sorted buffers, with cost accounting for
//! studying amortized insertion and binary-search lookup.
//!
//! ## Overview
//!
//! - **Set**: [`set::TwoArraySet`] keeps a small insertion-sorted staging
//!   buffer and a large merged buffer; the staging buffer is resized to the
//!   square root of the large buffer on every merge
//! - **Load**: [`load`] parses one integer per line from any reader
//! - **Report**: [`report`] runs probe searches and renders a text summary
//!
//! ## Feature Flags
//!
//! - `report` (default): the [`load`] and [`report`] modules
//! - `serde`: `Serialize` for search results and reports
//!
//! ## Example
//!
//! ```rust
//! use two_array_set::prelude::*;
//!
//! let mut set = TwoArraySet::from_elements([5, 3, 8, 1]);
//! assert_eq!(set.len(), 4);
//! assert!(set.search(8).is_found());
//! assert_eq!(set.search(100), Location::NotFound);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use two_array_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;

    #[cfg(feature = "report")]
    pub use crate::load::{LoadError, load_file, parse_integers};

    #[cfg(feature = "report")]
    pub use crate::report::{DEFAULT_MISSING_KEY, Probe, Report};
}

pub mod set;

#[cfg(feature = "report")]
pub mod load;

#[cfg(feature = "report")]
pub mod report;
