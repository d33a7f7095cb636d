//! Edge-list input
//!
//! Line reading that preserves each line exactly as it appears on disk,
//! trailing newline included (or absent, on an unterminated last line).
//! The containment check is text-based, so lines must survive the trip
//! from file to memory byte-for-byte.

use crate::types::EdgeDiffError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Iterator over raw lines of a reader, newlines preserved
pub struct RawLines<R> {
    inner: R,
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = Result<String, std::io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.inner.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(Ok(line)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Wrap a reader in a raw-line iterator
pub fn raw_lines<R: BufRead>(reader: R) -> RawLines<R> {
    RawLines { inner: reader }
}

/// Open a file as a stream of raw lines
pub fn open_raw_lines(path: &Path) -> Result<RawLines<BufReader<File>>, EdgeDiffError> {
    let file = File::open(path)?;
    Ok(raw_lines(BufReader::new(file)))
}

/// Read a whole file into an ordered line list, duplicates and order preserved
pub fn read_lines(path: &Path) -> Result<Vec<String>, EdgeDiffError> {
    open_raw_lines(path)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(EdgeDiffError::Io)
}
