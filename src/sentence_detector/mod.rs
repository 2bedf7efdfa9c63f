// WHY: Main detector interface: a per-locale boundary provider plus offset conversion and end normalization
// Providers speak UTF-8 byte ranges; everything downstream speaks offsets in the configured unit

use std::fmt;
use std::ops::Range;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod abbreviations;
pub mod english;
pub mod offsets;

pub use abbreviations::AbbreviationChecker;
pub use english::EnglishSentenceBoundaries;
pub use offsets::{BytePos, OffsetTracker, OffsetUnit};

/// Rule set used to find sentence boundaries
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[value(name = "en", alias = "english", alias = "en-US", alias = "en-GB")]
    #[serde(rename = "en")]
    English,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "en"),
        }
    }
}

/// Maps a record's text to its ordered, contiguous, exclusive sentence byte ranges
///
/// Implementations must cover `0..text.len()` with no gaps or overlaps, yield only
/// non-empty ranges, yield nothing for empty text and be a pure function of `text`.
pub trait SentenceBoundaryProvider: Send + Sync {
    fn boundaries<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Range<usize>> + 'a>;
}

/// One sentence as an exclusive range in offset units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub start: usize,
    pub end: usize,
    /// Whether `end` is the length of the record
    pub reaches_record_end: bool,
}

/// Emitted sentence position: the end is inclusive except for the record-final sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<Boundary> for Span {
    /// The output format reports the last character of internal sentences but the
    /// exclusive end of the record-final one; downstream readers depend on this.
    fn from(boundary: Boundary) -> Self {
        let end = if boundary.reaches_record_end {
            boundary.end
        } else {
            // an empty range from a misbehaving provider must not wrap
            boundary.end.saturating_sub(1)
        };
        Span { start: boundary.start, end }
    }
}

/// Main sentence detector: locale provider + offset unit
pub struct SentenceDetector {
    locale: Locale,
    unit: OffsetUnit,
    provider: Box<dyn SentenceBoundaryProvider>,
}

impl SentenceDetector {
    /// Create a detector for `locale` reporting offsets in `unit`
    pub fn new(locale: Locale, unit: OffsetUnit) -> Result<Self> {
        let provider: Box<dyn SentenceBoundaryProvider> = match locale {
            Locale::English => Box::new(EnglishSentenceBoundaries::new()?),
        };
        Ok(Self::with_provider(locale, unit, provider))
    }

    /// Create a detector around a caller-supplied provider
    pub fn with_provider(locale: Locale, unit: OffsetUnit, provider: Box<dyn SentenceBoundaryProvider>) -> Self {
        Self { locale, unit, provider }
    }

    /// Create sentence detector with English rules and character offsets
    pub fn with_default_rules() -> Result<Self> {
        Self::new(Locale::default(), OffsetUnit::default())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn offset_unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Exclusive sentence boundaries of `text`, lazily
    pub fn boundaries<'a>(&'a self, text: &'a str) -> Boundaries<'a> {
        Boundaries {
            ranges: self.provider.boundaries(text),
            tracker: OffsetTracker::new(text, self.unit),
            text_len: text.len(),
        }
    }

    /// Normalized output spans of `text`, lazily
    pub fn spans<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Span> + 'a {
        self.boundaries(text).map(Span::from)
    }

    /// Collect the spans of one record
    pub fn detect_spans(&self, text: &str) -> Vec<Span> {
        self.spans(text).collect()
    }
}

/// Lazy iterator of [`Boundary`] values for one record
pub struct Boundaries<'a> {
    ranges: Box<dyn Iterator<Item = Range<usize>> + 'a>,
    tracker: OffsetTracker<'a>,
    text_len: usize,
}

impl<'a> Iterator for Boundaries<'a> {
    type Item = Boundary;

    fn next(&mut self) -> Option<Self::Item> {
        let range = self.ranges.next()?;
        let start = self.tracker.advance_to(BytePos(range.start));
        let end = self.tracker.advance_to(BytePos(range.end));
        Some(Boundary {
            start,
            end,
            reaches_record_end: range.end == self.text_len,
        })
    }
}
