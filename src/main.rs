use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use sentence_offsets::progress::ProgressReporter;
use sentence_offsets::{
    process_records, reader, BufferedLines, Locale, MappedInput, OffsetUnit, OutputWriter,
    PipelineConfig, ReaderConfig, RunStats, SegmentResult, SentenceDetector,
};

#[derive(Parser, Debug)]
#[command(name = "sentence-offsets")]
#[command(about = "Emit per-line sentence offset spans for a text corpus")]
#[command(version)]
struct Args {
    /// Input corpus, one document per line (UTF-8)
    input: PathBuf,

    /// Sentence-breaking rule set
    #[arg(long, value_enum, default_value_t = Locale::English)]
    locale: Locale,

    /// Unit in which offsets are counted
    #[arg(long, value_enum, default_value_t = OffsetUnit::Char)]
    offset_unit: OffsetUnit,

    /// Use memory-mapped I/O instead of buffered streaming
    #[arg(long)]
    use_mmap: bool,

    /// Emit an empty line for undecodable lines instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Suppress the console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    // WHY: stdout carries the offsets, so structured JSON logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(io::stderr)
        .json()
        .init();

    let args = Args::parse();
    debug!(?args, "Parsed CLI arguments");

    let detector = SentenceDetector::new(args.locale, args.offset_unit)
        .context("Failed to build sentence detector")?;
    let reader_config = ReaderConfig {
        use_mmap: args.use_mmap,
        ..ReaderConfig::default()
    };
    let pipeline_config = PipelineConfig {
        skip_invalid: args.skip_invalid,
    };

    let mut stats = RunStats::new(&args.input, args.locale, args.offset_unit);
    let outcome = run(&args, &detector, &reader_config, &pipeline_config, &mut stats);

    if let Err(e) = &outcome {
        error!(error = %e, "Processing aborted");
    }

    let stats_outcome = match &args.stats_out {
        Some(stats_path) => stats.write_json(stats_path).map(|()| {
            info!("Run stats written to {}", stats_path.display());
        }),
        None => Ok(()),
    };

    // WHY: the processing error is the exit reason; a stats failure on top of it is only logged
    if let Err(stats_error) = stats_outcome {
        if outcome.is_ok() {
            return Err(stats_error.into());
        }
        error!(error = %stats_error, "Run stats not written");
    }
    outcome.with_context(|| format!("Failed to process {}", args.input.display()))
}

fn run(
    args: &Args,
    detector: &SentenceDetector,
    reader_config: &ReaderConfig,
    pipeline_config: &PipelineConfig,
    stats: &mut RunStats,
) -> SegmentResult<()> {
    let progress = if args.no_progress {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::new(reader::input_len(&args.input)?)
    };

    // WHY: locking stdout once avoids a lock per line; the writer is flushed by the pipeline
    let mut output = OutputWriter::new(io::stdout().lock());

    if reader_config.use_mmap {
        let mapped = MappedInput::open(&args.input)?;
        process_records(mapped.lines(), detector, &mut output, pipeline_config, &progress, stats)
    } else {
        let lines = BufferedLines::open(&args.input, reader_config)?;
        process_records(lines, detector, &mut output, pipeline_config, &progress, stats)
    }
}
