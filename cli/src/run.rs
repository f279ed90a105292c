//! Load, probe and report.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use two_array_set::load::parse_integers;
use two_array_set::report::Report;
use two_array_set::set::TwoArraySet;

use crate::args::{Args, OutputFormat};

/// Probe settings taken from the command line.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub key: Option<i32>,
    pub missing_key: i32,
    pub format: OutputFormat,
}

impl From<&Args> for Options {
    fn from(args: &Args) -> Self {
        Self {
            key: args.key,
            missing_key: args.missing_key,
            format: args.format,
        }
    }
}

pub fn run(args: &Args) -> Result<()> {
    let input = File::open(&args.input)
        .with_context(|| format!("failed to open input {}", args.input.display()))?;
    let options = Options::from(args);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            execute(BufReader::new(input), &mut writer, options)
                .with_context(|| format!("failed to process {}", args.input.display()))?;
            writer
                .flush()
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            execute(BufReader::new(input), &mut writer, options)
                .with_context(|| format!("failed to process {}", args.input.display()))?;
        }
    }

    Ok(())
}

/// Reads integers from `input`, builds the set, runs the probes and writes the report.
pub fn execute<R: BufRead, W: Write>(input: R, output: &mut W, options: Options) -> Result<()> {
    let values = parse_integers(input)?;
    tracing::info!(count = values.len(), "loaded input");

    let existing_key = options.key.or_else(|| values.first().copied());
    if existing_key.is_none() {
        tracing::warn!("input is empty; skipping the existing-key probe");
    }
    let probe_keys: Vec<i32> = existing_key
        .into_iter()
        .chain(std::iter::once(options.missing_key))
        .collect();

    let mut set = TwoArraySet::from_elements(values);
    tracing::info!(
        size = set.len(),
        insertion_cost = set.insertion_cost(),
        merges = set.merge_count(),
        "set built"
    );

    let report = Report::build(&mut set, &probe_keys);

    match options.format {
        OutputFormat::Text => write!(output, "{report}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, &report)?;
            writeln!(output)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text_options() -> Options {
        Options {
            key: None,
            missing_key: -3,
            format: OutputFormat::Text,
        }
    }

    fn execute_to_string(input: &str, options: Options) -> Result<String> {
        let mut output = Vec::new();
        execute(input.as_bytes(), &mut output, options)?;
        Ok(String::from_utf8(output)?)
    }

    #[rstest]
    fn probes_first_value_and_missing_key_by_default() {
        let text = execute_to_string("5\n3\n8\n1\n", text_options()).unwrap();

        assert!(text.starts_with("The total cost of inserting 4 elements is 6\n"));
        assert!(text.contains("Key = 5 was found in the Large Array at index 1\n"));
        assert!(text.contains("Key = -3 was not found\n"));
        assert!(text.ends_with("Small Array:\n1\n"));
    }

    #[rstest]
    fn explicit_key_replaces_first_value() {
        let options = Options {
            key: Some(1),
            ..text_options()
        };
        let text = execute_to_string("5\n3\n8\n1\n", options).unwrap();

        assert!(text.contains("Key = 1 was found in the Small Array at index 0\n"));
        assert!(!text.contains("Key = 5"));
    }

    #[rstest]
    fn empty_input_only_runs_missing_probe() {
        let text = execute_to_string("", text_options()).unwrap();

        assert!(text.starts_with("The total cost of inserting 0 elements is 0\n"));
        assert_eq!(text.matches("Key = ").count(), 1);
        assert!(text.contains("Key = -3 was not found\n"));
    }

    #[rstest]
    fn malformed_input_fails_with_line_number() {
        let error = execute_to_string("1\nabc\n", text_options()).unwrap_err();
        assert_eq!(error.to_string(), "line 2: `abc` is not an integer");
    }

    #[rstest]
    fn json_format_serializes_report() {
        let options = Options {
            format: OutputFormat::Json,
            ..text_options()
        };
        let json = execute_to_string("5\n3\n8\n1\n", options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["size"], 4);
        assert_eq!(value["large"], serde_json::json!([3, 5, 8]));
        assert_eq!(value["probes"][0]["location"]["status"], "found");
        assert_eq!(value["probes"][0]["location"]["buffer"], "large");
        assert_eq!(value["probes"][1]["location"]["status"], "not_found");
    }
}
