//! Re-encoding to UTF-8 without a byte-order mark.

use crate::bom::{self, Bom};
use crate::error::{EngineError, Result};
use crate::events::{Event, Reporter};
use crate::staging::{chunk_buffer, read_chunk, rewrite_in_place};
use encoding_rs::DecoderResult;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Transcode passes attempted before a file whose mark keeps reappearing is rejected.
pub const MAX_PASSES: usize = 2;

/// Bytes read to classify a file; covers the longest mark.
const PROBE_LEN: u64 = 4;

/// Read the head of `path` and classify its byte-order mark.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or read.
pub fn probe(path: &Path) -> Result<Option<Bom>> {
    let file = File::open(path).map_err(EngineError::read(path))?;
    let mut head = Vec::with_capacity(PROBE_LEN as usize);
    file.take(PROBE_LEN)
        .read_to_end(&mut head)
        .map_err(EngineError::read(path))?;
    Ok(bom::detect(&head))
}

/// Re-encode `path` in place to UTF-8 without a byte-order mark.
///
/// Files without a mark are left untouched. After each transcode the head is
/// checked again, since the decoded text may itself begin with U+FEFF.
///
/// # Errors
/// - [`EngineError::Decode`] if the content is not valid in the marked encoding.
///   The file is not modified.
/// - [`EngineError::BomPersisted`] if a mark is still present after [`MAX_PASSES`].
/// - [`EngineError::FileRead`] / [`EngineError::FileWrite`] on I/O failure.
pub fn recode(path: &Path, chunk_size: usize, reporter: &mut dyn Reporter) -> Result<()> {
    let mut passes = 0;
    loop {
        reporter.report(Event::BomCheck);
        let detected = probe(path)?;
        reporter.report(Event::BomChecked(detected));

        let Some(bom) = detected else {
            return Ok(());
        };
        if passes == MAX_PASSES {
            return Err(EngineError::BomPersisted {
                path: path.to_path_buf(),
                passes,
            });
        }
        passes += 1;
        log::debug!(
            "{}: pass {passes}, decoding as {}",
            path.display(),
            bom.encoding().name()
        );
        transcode(path, bom, chunk_size)?;
    }
}

fn transcode(path: &Path, bom: Bom, chunk_size: usize) -> Result<()> {
    let encoding = bom.encoding();

    rewrite_in_place(path, chunk_size, |mut source, out| {
        let mark_len = bom.bytes().len();
        let mut mark = [0u8; 3];
        source
            .read_exact(&mut mark[..mark_len])
            .map_err(EngineError::read(path))?;

        let mut decoder = encoding.new_decoder_without_bom_handling();
        let mut input = chunk_buffer(chunk_size);
        let out_len = decoder
            .max_utf8_buffer_length_without_replacement(input.len())
            .unwrap_or(input.len());
        let mut output = vec![0u8; out_len.max(16)];
        let mut offset = mark_len as u64;

        loop {
            let n = read_chunk(&mut source, &mut input).map_err(EngineError::read(path))?;
            let last = n == 0;
            let mut pending = &input[..n];

            loop {
                let (result, read, written) =
                    decoder.decode_to_utf8_without_replacement(pending, &mut output, last);
                out.write_all(&output[..written])
                    .map_err(EngineError::write(path))?;
                pending = &pending[read..];
                offset += read as u64;

                match result {
                    DecoderResult::InputEmpty => break,
                    DecoderResult::OutputFull => {}
                    DecoderResult::Malformed(bad, consumed) => {
                        return Err(EngineError::Decode {
                            path: path.to_path_buf(),
                            encoding: encoding.name(),
                            offset: offset.saturating_sub(u64::from(bad) + u64::from(consumed)),
                        });
                    }
                }
            }

            if last {
                break;
            }
        }

        log::trace!("{}: decoded {offset} bytes", path.display());
        Ok(())
    })
}
