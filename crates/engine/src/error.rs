use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Path not found: '{}'", .0.display())]
    PathNotFound(PathBuf),

    #[error("Failed to decode '{path}' as {encoding} at byte {offset}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
        offset: u64,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Byte-order mark in '{path}' survived {passes} re-encoding passes")]
    BomPersisted { path: PathBuf, passes: usize },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn read(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileRead { path, source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileWrite { path, source }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
