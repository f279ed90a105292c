//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use two_array_set::report::DEFAULT_MISSING_KEY;

/// Loads integers (one per line) into a two-array set and reports insertion
/// and search costs.
#[derive(Parser, Debug)]
#[command(name = "two-array-set")]
#[command(about = "Load integers into a two-array set and report insertion and search costs")]
pub struct Args {
    /// Input file with one integer per line
    pub input: PathBuf,

    /// Report destination (stdout when omitted)
    pub output: Option<PathBuf>,

    /// Key expected to be present (default: first loaded value)
    #[arg(long, allow_negative_numbers = true)]
    pub key: Option<i32>,

    /// Key used to illustrate a search miss
    #[arg(
        long,
        env = "TWO_ARRAY_SET_MISSING_KEY",
        default_value_t = DEFAULT_MISSING_KEY,
        allow_negative_numbers = true
    )]
    pub missing_key: i32,

    /// Report format
    #[arg(long, value_enum, env = "TWO_ARRAY_SET_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// How the report is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text report
    Text,
    /// Pretty-printed JSON
    Json,
}
