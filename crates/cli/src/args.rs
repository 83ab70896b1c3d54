use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueHint};

use crate::options::{Action, LineEnding, Verbosity};
use crate::parsers::{self, SizeArg};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "unixize",
    version = crate::VERSION,
    about = "Adapt text files written on Windows so they can be used on Unix systems",
    long_about = "Adapt text files written on Windows so they can be used on Unix systems.\n\n\
        Byte-order marks are removed, UTF-16 is re-encoded to UTF-8 and line endings are \
        rewritten. Only files with a text extension (.txt, .py, .sas, .csv, .json, .md, \
        .diff, .patch) are changed; everything else is reported and skipped.",
    group(
        ArgGroup::new("verbosity")
            .args(["verbose", "quiet"])
            .multiple(false)
    ),
    group(
        ArgGroup::new("action")
            .args(["unixize", "decode", "recode"])
            .multiple(false)
    )
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Report every step: BOM checks, re-encoding and line-ending changes
    #[arg(short, long, help_heading = "Output")]
    pub verbose: bool,

    /// Run without producing output
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,

    /// Re-encode to UTF-8 and rewrite line endings (default)
    #[arg(short, long, help_heading = "Action")]
    pub unixize: bool,

    /// Print the byte-order mark of each file without changing it
    #[arg(short, long, help_heading = "Action")]
    pub decode: bool,

    /// Only re-encode, keep line endings as they are
    #[arg(short, long, help_heading = "Action")]
    pub recode: bool,

    /// Line ending to convert to
    #[arg(
        short = 'l',
        long,
        value_enum,
        ignore_case = true,
        default_value = "lf",
        help_heading = "Conversion"
    )]
    pub line_ending: LineEnding,

    /// Extra extensions to treat as text (comma separated, e.g. --text-ext sql,yaml)
    #[arg(
        long = "text-ext",
        value_delimiter = ',',
        value_parser = parsers::parse_extension,
        help_heading = "Conversion"
    )]
    pub text_ext: Vec<String>,

    /// Streaming buffer size (e.g. 64K, 1MiB)
    #[arg(long, default_value = "1MiB", help_heading = "Conversion")]
    pub chunk_size: SizeArg,

    /// Apply changes to subdirectories
    #[arg(short = 'R', long, help_heading = "Traversal")]
    pub recursive: bool,

    /// Continue with the remaining files when one fails
    #[arg(long, help_heading = "Traversal")]
    pub keep_going: bool,

    /// Files or directories to work on
    #[arg(value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,
}

impl Args {
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }

    #[must_use]
    pub const fn action(&self) -> Action {
        if self.recode {
            Action::Recode
        } else if self.decode {
            Action::Decode
        } else {
            Action::Unixize
        }
    }
}
