use crate::options::{Action, LineEnding};
use derive_builder::Builder;
use std::path::{Path, PathBuf};

/// Extensions treated as text when no others are configured.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "py", "sas", "csv", "json", "md", "diff", "patch"];

/// Streaming buffer size (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;

fn default_text_extensions() -> Vec<String> {
    TEXT_EXTENSIONS.iter().map(|&e| e.to_owned()).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub paths: Vec<PathBuf>,
    #[builder(default)]
    pub action: Action,
    #[builder(default)]
    pub line_ending: LineEnding,
    #[builder(default)]
    pub recursive: bool,
    /// Extensions (without the dot) of files that may be rewritten.
    #[builder(default = "default_text_extensions()")]
    pub text_extensions: Vec<String>,
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
    /// Collect per-file errors instead of stopping at the first one.
    #[builder(default)]
    pub keep_going: bool,
}

impl Config {
    /// Whether `path` has an extension on the allow-list. Matching is case-sensitive.
    #[must_use]
    pub fn is_text(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| self.text_extensions.iter().any(|e| e == ext))
    }
}
