use crate::config::Config;
use crate::error::Result;
use crate::events::{Event, Reporter};
use crate::line_endings::rewrite_line_endings;
use crate::options::{Action, LineEnding};
use crate::recode::{probe, recode};
use std::path::{Path, PathBuf};

/// A discovered file and what should be done to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
    pub path: PathBuf,
    pub is_text: bool,
    pub action: Action,
    pub line_ending: LineEnding,
    pub chunk_size: usize,
}

impl FileTarget {
    #[must_use]
    pub fn classify(path: &Path, config: &Config) -> Self {
        Self {
            path: path.to_path_buf(),
            is_text: config.is_text(path),
            action: config.action,
            line_ending: config.line_ending,
            chunk_size: config.chunk_size,
        }
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Processed,
    Skipped,
}

/// Apply the target's action to its file.
///
/// Files that are not on the text allow-list are reported and left unopened.
///
/// # Errors
/// Propagates re-encoding and rewrite errors. Line endings are never touched
/// after a failed re-encode.
pub fn process_file(target: &FileTarget, reporter: &mut dyn Reporter) -> Result<FileOutcome> {
    let path = target.path.as_path();
    if !target.is_text {
        reporter.report(Event::FileSkipped(target.path.clone()));
        return Ok(FileOutcome::Skipped);
    }
    reporter.report(Event::FileStarted(target.path.clone()));

    match target.action {
        Action::Unixize => {
            recode(path, target.chunk_size, reporter)?;
            reporter.report(Event::Recoded(target.path.clone()));
            rewrite_line_endings(path, target.line_ending, target.chunk_size)?;
            reporter.report(Event::LineEndingsChanged(target.line_ending));
        }
        Action::Recode => {
            recode(path, target.chunk_size, reporter)?;
            reporter.report(Event::Recoded(target.path.clone()));
        }
        Action::Decode => {
            reporter.report(Event::BomCheck);
            let bom = probe(path)?;
            reporter.report(Event::BomChecked(bom));
            reporter.report(Event::Decoded {
                path: target.path.clone(),
                bom,
            });
        }
    }

    Ok(FileOutcome::Processed)
}
