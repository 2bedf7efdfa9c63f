// Type-safe byte positions and incremental conversion into output offset units
// WHY: the segmenter works on UTF-8 byte indices, the output format counts characters

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 0-based byte position in source text
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct BytePos(pub usize);

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0
    }
}

/// What one step of an emitted offset counts
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// Unicode scalar values
    #[default]
    Char,
    /// UTF-16 code units; astral characters count twice
    Utf16,
    /// UTF-8 bytes
    Byte,
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OffsetUnit::Char => "char",
            OffsetUnit::Utf16 => "utf16",
            OffsetUnit::Byte => "byte",
        };
        f.write_str(name)
    }
}

impl OffsetUnit {
    /// Length of `text` measured in this unit
    pub fn measure(self, text: &str) -> usize {
        match self {
            OffsetUnit::Char => text.chars().count(),
            OffsetUnit::Utf16 => text.chars().map(char::len_utf16).sum(),
            OffsetUnit::Byte => text.len(),
        }
    }
}

/// Walks forward through a record converting byte positions to unit offsets
/// Each call only scans the bytes since the previous call, so a whole record costs O(N)
#[derive(Debug)]
pub struct OffsetTracker<'a> {
    text: &'a str,
    unit: OffsetUnit,
    byte_pos: usize,
    unit_pos: usize,
}

impl<'a> OffsetTracker<'a> {
    pub fn new(text: &'a str, unit: OffsetUnit) -> Self {
        Self {
            text,
            unit,
            byte_pos: 0,
            unit_pos: 0,
        }
    }

    /// Advance to `target` and return its offset in the tracker's unit
    ///
    /// `target` must lie on a char boundary at or after the current position;
    /// boundaries from a segmenter always do.
    pub fn advance_to(&mut self, target: BytePos) -> usize {
        debug_assert!(target.0 >= self.byte_pos, "cannot seek backwards");
        if target.0 > self.byte_pos {
            self.unit_pos += self.unit.measure(&self.text[self.byte_pos..target.0]);
            self.byte_pos = target.0;
        }
        self.unit_pos
    }
}
