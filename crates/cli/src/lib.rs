pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use crate::presentation::ConsoleReporter;
use std::io::{self, Write};
use unixize_engine::summary::RunSummary;

/// Resolve `args` and run the engine, printing progress to stdout.
///
/// # Errors
/// Returns an error for a missing input path, or for the first failing file
/// unless `--keep-going` was given.
pub fn run(args: Args) -> Result<RunSummary> {
    let verbosity = args.verbosity();
    let config = Config::try_from(args)?;
    tracing::debug!(?config, ?verbosity, "resolved configuration");

    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock(), verbosity);
    reporter.announce(&config);

    let summary = unixize_engine::run(&config, &mut reporter)?;
    reporter.finish(&summary);
    reporter.into_inner().flush()?;

    Ok(summary)
}
