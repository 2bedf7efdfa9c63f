//! Progress reporting on stderr

use indicatif::{ProgressBar, ProgressStyle};

/// Byte-based progress over one input file
pub struct ProgressReporter {
    progress_bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter for `total_bytes` of input
    ///
    /// indicatif draws to stderr and stays invisible when stderr is not a terminal.
    pub fn new(total_bytes: u64) -> Self {
        let pb = ProgressBar::new(total_bytes);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        Self { progress_bar: pb }
    }

    /// Reporter that never draws
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    /// Account for one consumed record
    pub fn record_completed(&self, raw_len: usize) {
        self.progress_bar.inc(raw_len as u64);
    }

    pub fn finish(&self, records: u64) {
        self.progress_bar
            .finish_with_message(format!("{records} records"));
    }

    pub fn abandon(&self) {
        self.progress_bar.abandon_with_message("aborted");
    }

    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}
