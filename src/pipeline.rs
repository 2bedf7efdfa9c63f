// WHY: the read -> segment -> format -> write loop, one record at a time and strictly in input order

use std::io::Write;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::SegmentResult;
use crate::output::OutputWriter;
use crate::progress::ProgressReporter;
use crate::reader::Record;
use crate::run_stats::RunStats;
use crate::sentence_detector::SentenceDetector;

/// Configuration for record processing policy
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Emit an empty line for undecodable records instead of aborting
    pub skip_invalid: bool,
}

/// Segment every record from `records` and write one output line per record
///
/// `stats` is updated as records are processed, so it is meaningful even when an
/// error is returned. The writer is flushed before a successful return.
pub fn process_records<'a, I, W>(
    records: I,
    detector: &SentenceDetector,
    output: &mut OutputWriter<W>,
    config: &PipelineConfig,
    progress: &ProgressReporter,
    stats: &mut RunStats,
) -> SegmentResult<()>
where
    I: IntoIterator<Item = SegmentResult<Record<'a>>>,
    W: Write,
{
    let start_time = Instant::now();
    let outcome = run_loop(records, detector, output, config, progress, stats);
    stats.finish(start_time.elapsed());

    match &outcome {
        Ok(()) => {
            progress.finish(stats.records_read);
            info!(
                records = stats.records_read,
                sentences = stats.sentences_detected,
                skipped = stats.records_skipped,
                bytes = stats.bytes_read,
                elapsed_ms = stats.processing_time_ms,
                "Processing completed"
            );
        }
        Err(error) => {
            progress.abandon();
            stats.fail(error);
        }
    }
    outcome
}

fn run_loop<'a, I, W>(
    records: I,
    detector: &SentenceDetector,
    output: &mut OutputWriter<W>,
    config: &PipelineConfig,
    progress: &ProgressReporter,
    stats: &mut RunStats,
) -> SegmentResult<()>
where
    I: IntoIterator<Item = SegmentResult<Record<'a>>>,
    W: Write,
{
    for record in records {
        let record = match record {
            Ok(record) => record,
            Err(error) if config.skip_invalid && error.is_recoverable_record_error() => {
                warn!("Skipping record: {}", error);
                // WHY: an empty line keeps output line N aligned with input line N
                output.write_empty_line()?;
                let raw_len = error.skipped_len().unwrap_or(0);
                stats.records_read += 1;
                stats.records_skipped += 1;
                stats.bytes_read += raw_len as u64;
                progress.record_completed(raw_len);
                continue;
            }
            Err(error) => return Err(error),
        };

        let sentences = output.write_spans(detector.spans(&record.text))?;
        debug!(line = record.line_number, sentences, "Record segmented");

        stats.records_read += 1;
        stats.sentences_detected += sentences as u64;
        stats.bytes_read += record.raw_len as u64;
        progress.record_completed(record.raw_len);
    }

    output.flush()
}
