//! Extraction error definitions.
//!
//! This module defines the error surface of the trace extractor. It provides:
//! 1. **Precondition Failures:** A missing or unreadable trace file.
//! 2. **Parse Failures:** Malformed payloads on lines that match the write grammar.
//! 3. **Output Failures:** I/O errors while emitting the reference file.
//!
//! Every failure is fatal to the extraction run; the calling build
//! orchestration treats a non-zero exit as a build failure and fixes the
//! upstream cause rather than retrying.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while extracting expected memory data from a commit log.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The trace file does not exist or could not be read.
    ///
    /// The reference simulator run must complete and leave its commit log on
    /// disk before extraction starts, so this is a precondition failure.
    #[error("cannot read trace file '{path}': {source}")]
    TraceUnreadable {
        /// Path of the trace file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line matched the memory-write grammar but carried a payload that is
    /// not valid fixed-width hexadecimal.
    ///
    /// The extractor never guesses or truncates: the run aborts and no
    /// reference file is written.
    #[error("line {line}: malformed memory-write record: {content:?}")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        /// Raw content of the offending line.
        content: String,
    },

    /// The reference file could not be created or written.
    #[error("cannot write reference file '{path}': {source}")]
    OutputWrite {
        /// Path of the reference file being emitted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A JSON configuration file was missing, unreadable, or not valid
    /// configuration.
    #[error("invalid config '{path}': {reason}")]
    InvalidConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },
}
