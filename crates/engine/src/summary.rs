use crate::error::EngineError;
use std::path::PathBuf;

/// Totals for one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Text files handled by the selected action.
    pub processed: usize,
    /// Files left alone because they are not on the allow-list.
    pub skipped: usize,
    /// Per-file failures, only collected when `keep_going` is set.
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
