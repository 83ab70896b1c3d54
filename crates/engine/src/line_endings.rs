//! Streaming line-terminator rewrite.
//!
//! Every transform handles `\r` and `\n` one byte at a time, so the result
//! does not depend on where chunk boundaries fall.

use crate::error::{EngineError, Result};
use crate::options::LineEnding;
use crate::staging::{chunk_buffer, read_chunk, rewrite_in_place};
use std::io::Write;
use std::path::Path;

/// Pure chunk-to-chunk transform; appends the result to the output buffer.
pub type ChunkTransform = fn(&[u8], &mut Vec<u8>);

/// Drop every `\r`.
pub fn to_lf(chunk: &[u8], out: &mut Vec<u8>) {
    let mut start = 0;
    for pos in memchr::memchr_iter(b'\r', chunk) {
        out.extend_from_slice(&chunk[start..pos]);
        start = pos + 1;
    }
    out.extend_from_slice(&chunk[start..]);
}

/// Drop every `\r`, then write each `\n` as `\r\n`.
pub fn to_crlf(chunk: &[u8], out: &mut Vec<u8>) {
    let mut start = 0;
    for pos in memchr::memchr2_iter(b'\r', b'\n', chunk) {
        out.extend_from_slice(&chunk[start..pos]);
        if chunk[pos] == b'\n' {
            out.extend_from_slice(b"\r\n");
        }
        start = pos + 1;
    }
    out.extend_from_slice(&chunk[start..]);
}

pub fn unchanged(chunk: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(chunk);
}

impl LineEnding {
    #[must_use]
    pub fn transform(self) -> ChunkTransform {
        match self {
            Self::Lf => to_lf,
            Self::Crlf => to_crlf,
            Self::Unchanged => unchanged,
        }
    }
}

/// Convert a whole buffer.
#[must_use]
pub fn convert(input: &[u8], mode: LineEnding) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    mode.transform()(input, &mut out);
    out
}

/// Rewrite the line terminators of `path` in place.
///
/// [`LineEnding::Unchanged`] does not touch the file.
///
/// # Errors
/// Returns [`EngineError::FileRead`] or [`EngineError::FileWrite`] on I/O
/// failure; the original file is left as it was.
pub fn rewrite_line_endings(path: &Path, mode: LineEnding, chunk_size: usize) -> Result<()> {
    if mode == LineEnding::Unchanged {
        log::debug!("{}: line endings left unchanged", path.display());
        return Ok(());
    }
    let transform = mode.transform();

    rewrite_in_place(path, chunk_size, |mut source, out| {
        let mut input = chunk_buffer(chunk_size);
        let mut output = Vec::with_capacity(input.len() * 2);
        let mut chunks = 0usize;

        loop {
            let n = read_chunk(&mut source, &mut input).map_err(EngineError::read(path))?;
            if n == 0 {
                break;
            }
            output.clear();
            transform(&input[..n], &mut output);
            out.write_all(&output).map_err(EngineError::write(path))?;
            chunks += 1;
        }

        log::debug!("{}: {chunks} chunk(s) rewritten to {mode}", path.display());
        Ok(())
    })
}
