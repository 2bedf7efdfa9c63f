// WHY: English sentence boundaries = Unicode UAX #29 sentence breaks minus false breaks after abbreviations
// UAX #29 already keeps decimals ("3.5"), ellipses and lowercase continuations together

use std::iter::Peekable;
use std::ops::Range;

use anyhow::Result;
use tracing::trace;
use unicode_segmentation::{USentenceBoundIndices, UnicodeSegmentation};

use super::{AbbreviationChecker, SentenceBoundaryProvider};

/// English rule set: UAX #29 plus abbreviation suppression
pub struct EnglishSentenceBoundaries {
    abbreviation_checker: AbbreviationChecker,
}

impl EnglishSentenceBoundaries {
    pub fn new() -> Result<Self> {
        Ok(Self {
            abbreviation_checker: AbbreviationChecker::new()?,
        })
    }

    /// Lazily yield exclusive byte ranges of the sentences in `text`
    pub fn sentence_ranges<'a>(&'a self, text: &'a str) -> EnglishSentenceRanges<'a> {
        EnglishSentenceRanges {
            segments: text.split_sentence_bound_indices().peekable(),
            checker: &self.abbreviation_checker,
        }
    }
}

impl SentenceBoundaryProvider for EnglishSentenceBoundaries {
    fn boundaries<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = Range<usize>> + 'a> {
        Box::new(self.sentence_ranges(text))
    }
}

/// Iterator over merged UAX #29 segments
pub struct EnglishSentenceRanges<'a> {
    segments: Peekable<USentenceBoundIndices<'a>>,
    checker: &'a AbbreviationChecker,
}

impl<'a> Iterator for EnglishSentenceRanges<'a> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, first) = self.segments.next()?;
        let mut end = start + first.len();
        let mut last_segment = first;

        // WHY: at end of record there is no break to remove
        while let Some(&(next_start, next_segment)) = self.segments.peek() {
            if !self.checker.suppresses_break(last_segment, next_segment) {
                break;
            }
            trace!(offset = end, "suppressed abbreviation break");
            debug_assert_eq!(next_start, end);
            self.segments.next();
            end = next_start + next_segment.len();
            last_segment = next_segment;
        }

        Some(start..end)
    }
}
