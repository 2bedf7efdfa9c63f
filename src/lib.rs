pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod reader;
pub mod run_stats;
pub mod sentence_detector;

// Re-export main types for convenient access
pub use error::{SegmentError, SegmentResult};
pub use sentence_detector::{
    Boundary, Locale, OffsetUnit, SentenceBoundaryProvider, SentenceDetector, Span
};

// Re-export the processing loop and its collaborators for the binary, benches and tests
pub use output::{format_output_line, OutputWriter};
pub use pipeline::{process_records, PipelineConfig};
pub use reader::{BufferedLines, MappedInput, MappedLines, ReaderConfig, Record};
pub use run_stats::{RunStats, RunStatus};
