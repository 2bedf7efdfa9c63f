use sentence_offsets::progress::ProgressReporter;
use sentence_offsets::{
    process_records, BufferedLines, MappedInput, OutputWriter, PipelineConfig, ReaderConfig,
    RunStats, RunStatus, SegmentError, SentenceDetector,
};
use std::io::{self, Write};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

fn run_with<W: Write>(path: &std::path::Path, writer: W, config: PipelineConfig) -> (Result<(), SegmentError>, RunStats) {
    let detector = SentenceDetector::with_default_rules().expect("Detector creation should succeed");
    let mut output = OutputWriter::new(writer);
    let mut stats = RunStats::new(path, detector.locale(), detector.offset_unit());
    let lines = BufferedLines::open(path, &ReaderConfig::default()).expect("Open should succeed");
    let result = process_records(lines, &detector, &mut output, &config, &ProgressReporter::hidden(), &mut stats);
    (result, stats)
}

/// Missing input is reported as unavailable by both line sources
#[test]
fn test_missing_input_is_unavailable() {
    let fixture = TestFixture::new();
    let missing = fixture.missing_path();

    let streamed = BufferedLines::open(&missing, &ReaderConfig::default());
    assert!(matches!(streamed, Err(SegmentError::InputUnavailable { .. })));

    match MappedInput::open(&missing) {
        Err(SegmentError::InputUnavailable { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("missing file should not map"),
    }
}

/// Permission denied is an input-unavailable error (Unix-specific test)
#[cfg(unix)]
#[test]
fn test_permission_denied_is_unavailable() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = TestFixture::new();
    let file_path = fixture.create_corpus_file("restricted.txt", "Test content.");

    let mut perms = std::fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o000);
    std::fs::set_permissions(&file_path, perms).unwrap();

    // WHY: root can read mode 000 files; only assert when the open really fails
    if std::fs::File::open(&file_path).is_err() {
        let result = BufferedLines::open(&file_path, &ReaderConfig::default());
        assert!(matches!(result, Err(SegmentError::InputUnavailable { .. })));
    }

    // Restore permissions for cleanup
    let mut perms = std::fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o644);
    std::fs::set_permissions(&file_path, perms).unwrap();
}

/// Whitespace-only and punctuation-only records still produce one covering span
#[test]
fn test_degenerate_records() {
    let fixture = TestFixture::new();
    let file_path = fixture.create_corpus_file("odd.txt", "   \n...!?!...\n");

    let mut buffer = Vec::new();
    let (result, stats) = run_with(&file_path, &mut buffer, PipelineConfig::default());
    result.expect("Degenerate records should process");

    assert_eq!(String::from_utf8(buffer).unwrap(), "0,3;\n0,9;\n");
    assert_eq!(stats.records_read, 2);
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A closed output stream aborts the run with an output error
#[test]
fn test_broken_output_pipe() {
    let fixture = TestFixture::new();
    let file_path = fixture.create_corpus_file("corpus.txt", "One. Two.\nThree.\n");

    let (result, stats) = run_with(&file_path, BrokenPipe, PipelineConfig::default());
    match result {
        Err(SegmentError::OutputWrite(source)) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected output error, got {:?}", other),
    }
    assert_eq!(stats.status, RunStatus::Failed);
}

/// --skip-invalid does not swallow output failures
#[test]
fn test_skip_invalid_still_aborts_on_output_failure() {
    let fixture = TestFixture::new();
    let file_path = fixture.create_corpus_bytes("bad.txt", b"\xFF\nOne.\n");

    let (result, _) = run_with(&file_path, BrokenPipe, PipelineConfig { skip_invalid: true });
    assert!(matches!(result, Err(SegmentError::OutputWrite(_))));
}
