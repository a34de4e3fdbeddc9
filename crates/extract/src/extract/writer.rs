//! Reference-file emission.
//!
//! This module writes the terminal artifact of an extraction run. It performs:
//! 1. **Rendering:** Fixed-width hexadecimal, one value per line, newline
//!    separated, in execution order.
//! 2. **Atomic Content:** The full contents are built in memory and written
//!    in one call, so the file is either complete or absent.

use std::fs;
use std::path::Path;

use crate::common::ExtractError;
use crate::config::Xlen;
use crate::trace::record::MemWrite;

/// Writes the expected-data set to the reference file.
///
/// An empty record list produces an empty file; downstream comparison treats
/// that as "assert no writes occurred".
///
/// # Arguments
///
/// * `path` - Reference file location; overwritten if present.
/// * `records` - Ordered expected-data set.
/// * `xlen` - Target word width fixing the rendered digit count.
///
/// # Errors
///
/// Returns [`ExtractError::OutputWrite`] when the file cannot be created or
/// written.
pub fn write_reference(
    path: &Path,
    records: &[MemWrite],
    xlen: Xlen,
) -> Result<(), ExtractError> {
    let mut contents = String::with_capacity(records.len() * (xlen.hex_digits() + 1));
    for record in records {
        contents.push_str(&record.rendered(xlen));
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|source| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
