//! Loading integer input, one value per line.
//!
//! Parsing is strict: the first line that is neither blank nor a valid `i32`
//! stops the load with a [`LoadError::MalformedLine`] naming its line number.
//!
//! # Examples
//!
//! ```rust
//! use two_array_set::load::parse_integers;
//!
//! let input = "5\n3\n\n 8 \n1\n";
//! assert_eq!(parse_integers(input.as_bytes()).unwrap(), vec![5, 3, 8, 1]);
//!
//! let error = parse_integers("5\nfive\n".as_bytes()).unwrap_err();
//! assert_eq!(error.to_string(), "line 2: `five` is not an integer");
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading integer input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be opened.
    #[error("cannot open {}", path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from the input failed part way through.
    #[error("failed to read input")]
    Read(#[from] io::Error),

    /// A non-blank line did not hold a valid integer.
    #[error("line {line_number}: `{content}` is not an integer")]
    MalformedLine {
        /// 1-based line number.
        line_number: usize,
        /// The trimmed line content.
        content: String,
        /// The parse failure.
        #[source]
        source: ParseIntError,
    },
}

/// Parses one integer per line from `reader`.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the reader fails and
/// [`LoadError::MalformedLine`] for the first line that is not an integer.
pub fn parse_integers<R: BufRead>(reader: R) -> Result<Vec<i32>, LoadError> {
    let mut values = Vec::new();

    for (offset, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }

        let value = content
            .parse::<i32>()
            .map_err(|source| LoadError::MalformedLine {
                line_number: offset + 1,
                content: content.to_owned(),
                source,
            })?;
        values.push(value);
    }

    tracing::debug!(count = values.len(), "parsed integer input");
    Ok(values)
}

/// Opens `path` and parses it with [`parse_integers`].
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file cannot be opened, otherwise any
/// error from [`parse_integers`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<i32>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_integers(BufReader::new(file))
}
