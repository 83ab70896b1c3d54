pub mod bom;
pub mod config;
pub mod error;
pub mod events;
pub mod filesystem;
pub mod line_endings;
pub mod options;
pub mod processor;
pub mod recode;
pub mod staging;
pub mod summary;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::events::{Event, Reporter};
use crate::filesystem::Entry;
use crate::processor::{FileOutcome, FileTarget, process_file};
use crate::summary::RunSummary;
use std::path::{Path, PathBuf};

/// Run the configured action over every input path, one file at a time.
///
/// All paths are checked for existence first; a missing path aborts the run
/// before any file is opened. Directories are walked top-down, files before
/// subdirectories. Symbolic links to files are never rewritten, whether given
/// directly or found during a walk.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a path is missing, or,
/// unless `keep_going` is set, on the first file that fails. With
/// `keep_going`, per-file errors are collected in [`RunSummary::errors`].
pub fn run(config: &Config, reporter: &mut dyn Reporter) -> Result<RunSummary> {
    if config.chunk_size == 0 {
        return Err(EngineError::Config("chunk size must be positive".into()));
    }
    filesystem::check_paths(&config.paths)?;

    let mut summary = RunSummary::default();

    for root in &config.paths {
        if root.is_dir() {
            filesystem::walk(root, config.recursive, |entry| match entry {
                Entry::Directory(dir) => {
                    reporter.report(Event::DirectoryEntered(dir));
                    Ok(())
                }
                Entry::File(path) => handle_file(&path, config, reporter, &mut summary),
                Entry::Failed(e) => {
                    let path = filesystem::error_path(&e)
                        .map_or_else(|| root.clone(), Path::to_path_buf);
                    record(path, e.into(), config, &mut summary)
                }
            })?;
        } else if root.is_symlink() {
            log::debug!("not following symbolic link: {}", root.display());
        } else if root.is_file() {
            handle_file(root, config, reporter, &mut summary)?;
        } else {
            log::debug!("not a file or directory: {}", root.display());
        }
    }

    log::debug!(
        "{} processed, {} skipped, {} failed",
        summary.processed,
        summary.skipped,
        summary.errors.len()
    );
    Ok(summary)
}

fn handle_file(
    path: &Path,
    config: &Config,
    reporter: &mut dyn Reporter,
    summary: &mut RunSummary,
) -> Result<()> {
    let target = FileTarget::classify(path, config);
    match process_file(&target, reporter) {
        Ok(FileOutcome::Processed) => summary.processed += 1,
        Ok(FileOutcome::Skipped) => summary.skipped += 1,
        Err(e) => record(target.path, e, config, summary)?,
    }
    Ok(())
}

fn record(path: PathBuf, err: EngineError, config: &Config, summary: &mut RunSummary) -> Result<()> {
    if !config.keep_going {
        return Err(err);
    }
    log::debug!("{}: {err}", path.display());
    summary.errors.push((path, err));
    Ok(())
}
