//! Trace scan and extraction entry point.
//!
//! This module implements the extraction transform. It performs:
//! 1. **Scanning:** A single pass over the commit log, line by line.
//! 2. **Filtering:** Dropping non-write lines silently and restricting writes
//!    to the configured result-buffer region.
//! 3. **Collection:** Preserving execution order with no deduplication, then
//!    handing the records to the writer.
//!
//! The transform is pure and one-shot: it reads one stream, writes one file,
//! and never retries. A failure means the upstream simulator run or its
//! output format needs fixing, not the extraction.

use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::{debug, info};

use crate::common::ExtractError;
use crate::config::ExtractConfig;
use crate::extract::writer;
use crate::trace::line::parse_line;
use crate::trace::record::MemWrite;

/// Counters describing one extraction run.
///
/// `writes_matched == 0` is the "no writes observed" condition: legitimate
/// (a test may fault before its first store) and reported as success, but
/// distinguishable so the caller can log it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Total lines scanned, matching or not.
    pub lines_scanned: usize,
    /// Lines that committed a memory write.
    pub writes_matched: usize,
    /// Writes that survived the region filter and entered the output.
    pub writes_kept: usize,
}

/// Scans a commit-log stream and collects the expected-data set.
///
/// Non-write lines are skipped silently. Writes are kept in execution order;
/// the only transformation is dropping writes outside the configured region.
///
/// # Arguments
///
/// * `reader` - Buffered commit-log stream.
/// * `config` - Extraction parameters (width, region, paths for error reports).
///
/// # Returns
///
/// The ordered records and the run counters.
///
/// # Errors
///
/// Returns [`ExtractError::TraceUnreadable`] if the stream fails mid-read and
/// [`ExtractError::MalformedRecord`] for an invalid payload on a write line.
pub fn extract_writes<R: BufRead>(
    reader: R,
    config: &ExtractConfig,
) -> Result<(Vec<MemWrite>, ExtractSummary), ExtractError> {
    let mut records = Vec::new();
    let mut summary = ExtractSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ExtractError::TraceUnreadable {
            path: config.trace_path.clone(),
            source,
        })?;
        summary.lines_scanned += 1;

        let Some(write) = parse_line(&line, idx + 1, config.xlen)? else {
            continue;
        };
        summary.writes_matched += 1;

        if let Some(region) = config.region {
            if !region.contains(write.addr) {
                debug!(addr = write.addr.val(), "write outside result region, dropped");
                continue;
            }
        }

        debug!(
            addr = write.addr.val(),
            value = write.value,
            "memory write kept"
        );
        summary.writes_kept += 1;
        records.push(write);
    }

    Ok((records, summary))
}

/// Runs one complete extraction: read the trace, collect writes, emit the
/// reference file.
///
/// The record list is fully collected before the output file is touched, so a
/// parse failure never leaves a partial reference file behind. An existing
/// reference file is overwritten.
///
/// # Arguments
///
/// * `config` - Extraction parameters for this run.
///
/// # Returns
///
/// The run counters on success.
///
/// # Errors
///
/// Returns [`ExtractError::TraceUnreadable`] when the trace file is missing or
/// unreadable, [`ExtractError::MalformedRecord`] for an invalid write payload,
/// and [`ExtractError::OutputWrite`] when the reference file cannot be written.
pub fn run(config: &ExtractConfig) -> Result<ExtractSummary, ExtractError> {
    let file = File::open(&config.trace_path).map_err(|source| ExtractError::TraceUnreadable {
        path: config.trace_path.clone(),
        source,
    })?;

    let (records, summary) = extract_writes(BufReader::new(file), config)?;

    if summary.writes_matched == 0 {
        info!("no writes observed in trace");
    }

    writer::write_reference(&config.output_path, &records, config.xlen)?;

    info!(
        lines = summary.lines_scanned,
        matched = summary.writes_matched,
        kept = summary.writes_kept,
        "extraction complete"
    );

    Ok(summary)
}
