// WHY: Run statistics for --stats-out, one JSON document per invocation

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SegmentError, SegmentResult};
use crate::sentence_detector::{Locale, OffsetUnit};

/// Outcome of a run as recorded in the stats file
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failed,
}

/// Per-run processing statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Input corpus path
    pub path: String,
    pub locale: Locale,
    pub offset_unit: OffsetUnit,
    /// Records read, including invalid ones
    pub records_read: u64,
    /// Records replaced by an empty line under --skip-invalid
    pub records_skipped: u64,
    /// Spans written across all records
    pub sentences_detected: u64,
    /// Input bytes consumed, line terminators included
    pub bytes_read: u64,
    /// Wall time in milliseconds
    pub processing_time_ms: u64,
    /// Throughput in input bytes per second
    pub bytes_per_sec: f64,
    pub status: RunStatus,
    /// Error message if processing failed
    pub error: Option<String>,
}

impl RunStats {
    pub fn new(path: &Path, locale: Locale, offset_unit: OffsetUnit) -> Self {
        Self {
            path: path.display().to_string(),
            locale,
            offset_unit,
            records_read: 0,
            records_skipped: 0,
            sentences_detected: 0,
            bytes_read: 0,
            processing_time_ms: 0,
            bytes_per_sec: 0.0,
            status: RunStatus::Success,
            error: None,
        }
    }

    /// Record elapsed time and derive throughput
    pub fn finish(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
        let secs = elapsed.as_secs_f64();
        self.bytes_per_sec = if secs > 0.0 {
            self.bytes_read as f64 / secs
        } else {
            0.0
        };
    }

    /// Mark the run as failed with `error`
    pub fn fail(&mut self, error: &SegmentError) {
        self.status = RunStatus::Failed;
        self.error = Some(error.to_string());
    }

    /// Write the stats as pretty JSON to `path`
    pub fn write_json(&self, path: &Path) -> SegmentResult<()> {
        let stats_error = |message: String| SegmentError::Stats {
            path: PathBuf::from(path),
            message,
        };
        let content = serde_json::to_string_pretty(self).map_err(|e| stats_error(e.to_string()))?;
        std::fs::write(path, content + "\n").map_err(|e| stats_error(e.to_string()))
    }
}
