//! two-array-set - load integers into a two-array set and report its costs
//!
//! Usage:
//!   two-array-set <INPUT> [OUTPUT] [--key <INT>] [--missing-key <INT>] [--format text|json]
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

mod args;
mod run;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::Args;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    run::run(&args)
}
