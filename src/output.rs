// WHY: output format is consumed by external tooling; keep rendering in one place
// Format per record: "start,end;" for every span, then "\n"

use std::fmt::Write as _;
use std::io::{BufWriter, Write};

use crate::error::{SegmentError, SegmentResult};
use crate::sentence_detector::Span;

/// Render spans as one output line (including the trailing newline) into `buffer`
pub fn format_output_line_into<I>(spans: I, buffer: &mut String) -> usize
where
    I: IntoIterator<Item = Span>,
{
    buffer.clear();
    let mut count = 0;
    for span in spans {
        // Writing into a String cannot fail
        let _ = write!(buffer, "{},{};", span.start, span.end);
        count += 1;
    }
    buffer.push('\n');
    count
}

/// Render spans as one output line with a new allocation
pub fn format_output_line<I>(spans: I) -> String
where
    I: IntoIterator<Item = Span>,
{
    let mut buffer = String::new();
    format_output_line_into(spans, &mut buffer);
    buffer
}

/// Buffered sink for output lines
pub struct OutputWriter<W: Write> {
    writer: BufWriter<W>,
    line: String,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            line: String::new(),
        }
    }

    /// Format and write one record's spans, returning how many spans were written
    pub fn write_spans<I>(&mut self, spans: I) -> SegmentResult<usize>
    where
        I: IntoIterator<Item = Span>,
    {
        let count = format_output_line_into(spans, &mut self.line);
        self.writer
            .write_all(self.line.as_bytes())
            .map_err(SegmentError::OutputWrite)?;
        Ok(count)
    }

    /// Write the line for a record that produced no spans
    pub fn write_empty_line(&mut self) -> SegmentResult<()> {
        self.writer.write_all(b"\n").map_err(SegmentError::OutputWrite)
    }

    pub fn flush(&mut self) -> SegmentResult<()> {
        self.writer.flush().map_err(SegmentError::OutputWrite)
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> SegmentResult<W> {
        self.writer
            .into_inner()
            .map_err(|error| SegmentError::OutputWrite(error.into_error()))
    }
}
