//! Commit-log line grammar.
//!
//! This module recognizes and parses memory-write lines in the reference
//! simulator's commit log. It performs:
//! 1. **Classification:** Deciding whether a line commits a store, a load, or
//!    no memory access at all.
//! 2. **Payload Extraction:** Parsing the hexadecimal address and value that
//!    follow the memory marker.
//! 3. **Validation:** Rejecting malformed payloads and values wider than the
//!    target word, without guessing or truncating.
//!
//! The grammar is free-text scraping of the simulator's commit output; it is
//! isolated here so a structured trace backend could be added behind the same
//! [`MemWrite`] type.

use crate::common::ExtractError;
use crate::common::MemAddr;
use crate::common::constants::{HEX_PREFIX, MEM_MARKER};
use crate::config::Xlen;
use crate::trace::record::MemWrite;

/// Parses one commit-log line.
///
/// A store commits as `... mem 0x<addr> 0x<value>`; a load commits with only
/// the address after the marker. Lines without the marker are instruction or
/// register commits.
///
/// # Arguments
///
/// * `line` - Raw line content, without its trailing newline.
/// * `line_no` - 1-based line number, used in error reports.
/// * `xlen` - Target word width; values wider than it are rejected.
///
/// # Returns
///
/// `Ok(Some(record))` for a store line, `Ok(None)` for any line that does not
/// commit a store.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedRecord`] when the marker is present but
/// the address or value payload is not valid hexadecimal, or when the value
/// does not fit the target word width.
pub fn parse_line(line: &str, line_no: usize, xlen: Xlen) -> Result<Option<MemWrite>, ExtractError> {
    let mut tokens = line.split_whitespace().skip_while(|tok| *tok != MEM_MARKER);

    // No marker: instruction commit or register writeback.
    if tokens.next().is_none() {
        return Ok(None);
    }

    let malformed = || ExtractError::MalformedRecord {
        line: line_no,
        content: line.to_string(),
    };

    // The marker must be followed by an address payload.
    let addr_tok = tokens.next().ok_or_else(malformed)?;
    let addr = parse_payload(addr_tok).ok_or_else(malformed)?;

    // Loads log only the address after the marker; a trailing payload is the
    // stored value and makes this line a write record.
    let Some(value_tok) = tokens.next() else {
        return Ok(None);
    };
    let value = parse_payload(value_tok).ok_or_else(malformed)?;

    if value > xlen.value_mask() {
        return Err(malformed());
    }

    Ok(Some(MemWrite::new(MemAddr::new(addr), value)))
}

/// Parses a `0x`-prefixed hexadecimal payload token.
///
/// Returns `None` when the prefix is missing, the digits are empty, or any
/// digit is not hexadecimal.
fn parse_payload(token: &str) -> Option<u64> {
    let digits = token.strip_prefix(HEX_PREFIX)?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
