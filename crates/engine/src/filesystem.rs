use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Something found while walking an input directory.
#[derive(Debug)]
pub enum Entry {
    /// A directory about to be scanned. Only produced for recursive walks.
    Directory(PathBuf),
    File(PathBuf),
    /// An entry that could not be read.
    Failed(ignore::Error),
}

/// Verify that every input path exists before anything is touched.
///
/// # Errors
/// Returns [`EngineError::PathNotFound`] for the first missing path, or
/// [`EngineError::FileRead`] if a path cannot be inspected.
pub fn check_paths(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        fs::metadata(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EngineError::PathNotFound(path.clone())
            } else {
                EngineError::FileRead {
                    path: path.clone(),
                    source,
                }
            }
        })?;
    }
    Ok(())
}

/// Sequential, top-down walk of `root`.
///
/// Each directory is reported before its entries, and within a directory all
/// files come before any subdirectory, each group in name order. Without
/// `recursive` only the immediate files of `root` are visited and
/// subdirectories are ignored without being reported. Nothing is filtered out:
/// hidden files and ignore files are not consulted. Symbolic links are not
/// followed and never visited, so a rewrite cannot replace a link with a copy.
///
/// # Errors
/// Returns the first error produced by `visit`.
pub fn walk<F>(root: &Path, recursive: bool, mut visit: F) -> Result<()>
where
    F: FnMut(Entry) -> Result<()>,
{
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_path(|a, b| a.is_dir().cmp(&b.is_dir()).then_with(|| a.cmp(b)));
    if !recursive {
        builder.max_depth(Some(1));
    }

    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                visit(Entry::Failed(e))?;
                continue;
            }
        };
        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if recursive {
                visit(Entry::Directory(entry.into_path()))?;
            }
        } else if file_type.is_file() {
            visit(Entry::File(entry.into_path()))?;
        } else {
            log::debug!("not a regular file: {}", entry.path().display());
        }
    }

    Ok(())
}

/// Path of the entry an [`ignore::Error`] refers to, if it names one.
#[must_use]
pub fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.md"), b"c").unwrap();
        fs::write(dir.path().join(".hidden.txt"), b"h").unwrap();
        dir
    }

    fn collect(root: &Path, recursive: bool) -> Vec<String> {
        let mut seen = Vec::new();
        walk(root, recursive, |entry| {
            let label = match entry {
                Entry::Directory(p) => format!("dir:{}", rel(root, &p)),
                Entry::File(p) => format!("file:{}", rel(root, &p)),
                Entry::Failed(e) => panic!("{e}"),
            };
            seen.push(label);
            Ok(())
        })
        .unwrap();
        seen
    }

    fn rel(root: &Path, p: &Path) -> String {
        p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
    }

    #[test]
    fn flat_walk_ignores_subdirectories() {
        let dir = tree();
        assert_eq!(
            collect(dir.path(), false),
            vec!["file:.hidden.txt", "file:a.txt", "file:b.txt"]
        );
    }

    #[test]
    fn recursive_walk_reports_directories() {
        let dir = tree();
        assert_eq!(
            collect(dir.path(), true),
            vec![
                "dir:",
                "file:.hidden.txt",
                "file:a.txt",
                "file:b.txt",
                "dir:sub",
                "file:sub/c.md",
            ]
        );
    }

    #[test]
    fn files_come_before_sibling_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("a_sub")).unwrap();
        fs::write(dir.path().join("a_sub").join("x.txt"), b"x").unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();
        fs::write(dir.path().join("c.txt"), b"c").unwrap();

        assert_eq!(
            collect(dir.path(), true),
            vec!["dir:", "file:b.txt", "file:c.txt", "dir:a_sub", "file:a_sub/x.txt"]
        );
    }

    #[test]
    fn error_path_unwraps_context() {
        let err = ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(ignore::Error::WithPath {
                path: PathBuf::from("docs/locked"),
                err: Box::new(ignore::Error::Io(std::io::Error::other("denied"))),
            }),
        };
        assert_eq!(error_path(&err), Some(Path::new("docs/locked")));
        assert_eq!(
            error_path(&ignore::Error::Io(std::io::Error::other("x"))),
            None
        );
    }

    #[test]
    fn missing_path_is_reported() {
        let dir = tree();
        let paths = vec![dir.path().join("a.txt"), dir.path().join("nope.txt")];
        match check_paths(&paths) {
            Err(EngineError::PathNotFound(p)) => assert_eq!(p, dir.path().join("nope.txt")),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(check_paths(&paths[..1]).is_ok());
    }
}
