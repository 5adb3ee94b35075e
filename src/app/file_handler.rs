//! File output for the pattern dump (`-o`).
//!
//! The whole tree is streamed through a `BufWriter`, so the dump never sits
//! in memory as one string.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use crate::tree::PatternTree;

/// Writes `header` followed by every pattern of `tree` to `file_path`,
/// creating or truncating the file. Returns the number of patterns written.
///
/// # Errors
/// Returns an `IoError` if opening, writing or flushing fails.
pub fn write_patterns_to_file(
    file_path: &Path,
    header: &str,
    tree: &PatternTree,
) -> Result<u64, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", header)?;
    let written = tree.serialize_patterns(&mut writer)?;
    writer.flush()?; // Surface write errors here instead of on drop.
    Ok(written)
}
