use crate::options::Verbosity;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use unixize_engine::bom;
use unixize_engine::config::Config;
use unixize_engine::error::EngineError;
use unixize_engine::events::{Event, Reporter};
use unixize_engine::options::Action;
use unixize_engine::summary::RunSummary;

/// Renders engine events as console lines according to the verbosity.
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbosity: Verbosity,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Start-up lines shown with `--verbose`.
    pub fn announce(&mut self, config: &Config) {
        self.line(Verbosity::Verbose, format_args!("verbosity set to 2"));
        if config.action == Action::Unixize {
            self.line(
                Verbosity::Verbose,
                format_args!("The line ending used will be {}.", config.line_ending),
            );
        }
    }

    /// Totals shown with `--verbose` once the run is over.
    pub fn finish(&mut self, summary: &RunSummary) {
        self.line(
            Verbosity::Verbose,
            format_args!(
                "{} file(s) processed, {} skipped, {} failed.",
                summary.processed,
                summary.skipped,
                summary.errors.len()
            ),
        );
    }

    fn line(&mut self, min: Verbosity, args: fmt::Arguments<'_>) {
        if self.verbosity >= min {
            // A closed stdout must not abort a half-finished run.
            let _ = writeln!(self.out, "{args}");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: Event) {
        use Verbosity::{Normal, Verbose};

        match event {
            Event::DirectoryEntered(dir) => {
                self.line(Normal, format_args!("Checking {}/...", dir.display()));
            }
            Event::FileStarted(path) => {
                self.line(Normal, format_args!("{} is being processed", path.display()));
            }
            Event::FileSkipped(path) => {
                self.line(Normal, format_args!("{} is not a text file.", path.display()));
            }
            Event::BomCheck => self.line(Verbose, format_args!("Checking BOM...")),
            Event::BomChecked(Some(mark)) => {
                self.line(Verbose, format_args!("File starts with {mark} BOM"));
            }
            Event::BomChecked(None) => self.line(Verbose, format_args!("No BOM in file.")),
            Event::Recoded(path) => {
                self.line(Verbose, format_args!("{} recoded to UTF-8", path.display()));
            }
            Event::LineEndingsChanged(mode) => {
                self.line(Verbose, format_args!("Line endings changed to {mode}"));
            }
            Event::Decoded { bom, .. } => {
                self.line(Normal, format_args!("{}", bom::key(bom)));
            }
        }
    }
}

/// Print per-file failures collected with `--keep-going`.
pub fn print_errors(errors: &[(PathBuf, EngineError)]) {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    for (path, e) in errors {
        let _ = writeln!(err, "Error processing {}: {e}", path.display());
    }
}
