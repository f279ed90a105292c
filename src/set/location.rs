//! Search results for [`TwoArraySet`](super::TwoArraySet).

use std::fmt;

/// Identifies one of the two sorted buffers of a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum Buffer {
    /// The bounded staging buffer that receives new elements.
    Small,
    /// The fully sorted buffer produced by merges.
    Large,
}

impl fmt::Display for Buffer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => formatter.write_str("Small Array"),
            Self::Large => formatter.write_str("Large Array"),
        }
    }
}

/// Where a key was found, if anywhere.
///
/// # Examples
///
/// ```rust
/// use two_array_set::set::{Buffer, Location};
///
/// let location = Location::Found { buffer: Buffer::Large, index: 2 };
/// assert_eq!(location.buffer(), Some(Buffer::Large));
/// assert_eq!(location.index(), Some(2));
///
/// assert!(!Location::NotFound.is_found());
/// assert_eq!(Location::NotFound.index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum Location {
    /// The key is stored in `buffer` at `index`.
    Found {
        /// The buffer holding the key.
        buffer: Buffer,
        /// Position of the key inside that buffer.
        index: usize,
    },
    /// Neither buffer holds the key.
    NotFound,
}

impl Location {
    /// Returns the buffer holding the key, or `None` for a miss.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> Option<Buffer> {
        match self {
            Self::Found { buffer, .. } => Some(*buffer),
            Self::NotFound => None,
        }
    }

    /// Returns the index of the key inside its buffer, or `None` for a miss.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Found { index, .. } => Some(*index),
            Self::NotFound => None,
        }
    }

    /// Returns `true` if the key was found in either buffer.
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { buffer, index } => {
                write!(formatter, "found in the {buffer} at index {index}")
            }
            Self::NotFound => formatter.write_str("not found"),
        }
    }
}

/// A [`Location`] together with the number of binary-search steps it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchOutcome {
    /// Where the key was found.
    pub location: Location,
    /// Binary-search comparison steps performed across both buffers.
    pub cost: u64,
}
