//! In-place rewrites through a sibling temporary file.
//!
//! The original is only touched by the final rename in [`StagedFile::commit`].
//! A staged file that is dropped without being committed deletes itself.

use crate::error::{EngineError, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replacement content for `target`, written to a temporary file next to it.
#[derive(Debug)]
pub struct StagedFile {
    target: PathBuf,
    writer: BufWriter<NamedTempFile>,
}

impl StagedFile {
    /// Create a uniquely named temporary file in the directory of `target`.
    ///
    /// # Errors
    /// Returns [`EngineError::FileWrite`] if the temporary file cannot be created.
    pub fn create(target: &Path, capacity: usize) -> Result<Self> {
        let name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let tmp = tempfile::Builder::new()
            .prefix(&format!(".{name}."))
            .suffix(".unixize")
            .tempfile_in(parent_dir(target))
            .map_err(EngineError::write(target))?;
        log::trace!("staging {} as {}", target.display(), tmp.path().display());

        Ok(Self {
            target: target.to_path_buf(),
            writer: BufWriter::with_capacity(capacity.max(1), tmp),
        })
    }

    /// Location of the temporary file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.writer.get_ref().path()
    }

    /// Flush, sync and rename the temporary file over the target.
    ///
    /// The target's permissions are carried over to the new file.
    ///
    /// # Errors
    /// Returns [`EngineError::FileWrite`] if flushing, syncing or renaming fails.
    /// The temporary file is removed in that case and the target is left as it was.
    pub fn commit(self) -> Result<()> {
        let Self { target, writer } = self;

        let tmp = writer.into_inner().map_err(|e| EngineError::FileWrite {
            path: target.clone(),
            source: e.into_error(),
        })?;
        tmp.as_file().sync_all().map_err(EngineError::write(&target))?;

        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), meta.permissions())
                .map_err(EngineError::write(&target))?;
        }

        tmp.persist(&target).map_err(|e| EngineError::FileWrite {
            path: target.clone(),
            source: e.error,
        })?;

        // Make the rename durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent_dir(&target)) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

impl Write for StagedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// Rewrite `path` in place.
///
/// `f` receives the opened source and the staged replacement. The replacement
/// is committed only if `f` returns `Ok`; the source handle is closed first.
///
/// # Errors
/// Propagates the error from `f`, or any error opening, staging or committing.
pub fn rewrite_in_place<F>(path: &Path, chunk_size: usize, f: F) -> Result<()>
where
    F: FnOnce(File, &mut StagedFile) -> Result<()>,
{
    let source = File::open(path).map_err(EngineError::read(path))?;
    let mut staged = StagedFile::create(path, chunk_size)?;
    f(source, &mut staged)?;
    staged.commit()
}

/// Zeroed read buffer of `chunk_size` bytes, at least one.
pub(crate) fn chunk_buffer(chunk_size: usize) -> Vec<u8> {
    vec![0; chunk_size.max(1)]
}

/// Fill `buf` from `reader`, stopping early only at end of file.
pub(crate) fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
