//! Reads a program image: a flat sequence of 32-bit big-endian words with
//! no header or alignment padding.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::VmError;

/// Read `path` as a stream of 4-byte big-endian words. Faults if the file
/// size isn't a multiple of 4 or on any underlying I/O error.
pub fn load_program(path: &Path) -> Result<Vec<u32>, VmError> {
    let file = File::open(path)?;
    read_words(BufReader::new(file))
}

/// Core of the loader, split out from `load_program` so it can be driven
/// by anything implementing `Read` — a real file, or an in-memory buffer
/// in tests.
fn read_words<R: Read>(mut reader: R) -> Result<Vec<u32>, VmError> {
    let mut words = Vec::new();
    let mut buf = [0u8; 4];
    loop {
        match read_full_or_eof(&mut reader, &mut buf)? {
            0 => break,
            4 => words.push(u32::from_be_bytes(buf)),
            n => {
                return Err(VmError::InvalidInput(format!(
                    "program file size is not a multiple of 4 bytes \
                     (trailing {n} byte{plural})",
                    plural = if n == 1 { "" } else { "s" },
                )))
            }
        }
    }
    Ok(words)
}

/// Like `read_exact`, but reports how many bytes were actually read instead
/// of erroring on a short final read, so the caller can tell "clean EOF"
/// apart from "trailing partial word".
fn read_full_or_eof<R: Read>(reader: &mut R, buf: &mut [u8; 4]) -> Result<usize, VmError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
