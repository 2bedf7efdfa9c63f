// WHY: one error type for the library so the binary can tell fatal input, record and output failures apart

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Failures raised while turning a corpus into sentence offset lines
#[derive(Debug, Error)]
pub enum SegmentError {
    /// Input file could not be opened or mapped (missing, permission denied)
    #[error("input unavailable: {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record is not valid UTF-8 and cannot be segmented
    #[error("invalid input at line {line}: {source}")]
    InvalidInput {
        line: u64,
        /// Bytes the record occupied in the input, terminator included
        raw_len: usize,
        #[source]
        source: Utf8Error,
    },

    /// Reading failed after the input was opened
    #[error("failed to read input at line {line}: {source}")]
    InputRead {
        line: u64,
        #[source]
        source: io::Error,
    },

    /// Output stream rejected a write or flush (e.g. broken pipe)
    #[error("failed to write output: {0}")]
    OutputWrite(#[source] io::Error),

    /// Run statistics could not be written
    #[error("failed to write run stats to {}: {message}", .path.display())]
    Stats { path: PathBuf, message: String },
}

impl SegmentError {
    /// Whether `--skip-invalid` may step over this error and keep going
    pub fn is_recoverable_record_error(&self) -> bool {
        matches!(self, SegmentError::InvalidInput { .. })
    }

    /// Input bytes a skipped record consumed, if the error belongs to one record
    pub fn skipped_len(&self) -> Option<usize> {
        match self {
            SegmentError::InvalidInput { raw_len, .. } => Some(*raw_len),
            _ => None,
        }
    }
}

pub type SegmentResult<T> = Result<T, SegmentError>;
