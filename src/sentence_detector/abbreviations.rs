// WHY: Centralized abbreviation handling for sentence boundary suppression
// UAX #29 breaks after "Dr. " before a capital; these tables decide which of those breaks are false

use std::collections::HashSet;

use anyhow::Result;
use regex_automata::meta::Regex;

/// Title abbreviations that cause false sentence boundaries when followed by proper nouns
/// These are the first part of 2-segment identifiers like "Dr. Smith", "Mr. Johnson"
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Mx.", "Dr.", "Prof.", "Sr.", "Jr.", "St.", "Mt.",
    "Rev.", "Hon.", "Gen.", "Col.", "Capt.", "Lt.", "Sgt.", "Cmdr.", "Adm.",
    "Gov.", "Sen.", "Rep.", "Pres.", "Messrs.", "Mme.", "Mlle.",
];

/// Abbreviations that are practically never sentence-final and usually precede a capital or number
pub const NON_TERMINAL_ABBREVIATIONS: &[&str] = &[
    "e.g.", "i.e.", "vs.", "cf.", "viz.", "approx.", "ca.",
    "Fig.", "Figs.", "Vol.", "Vols.", "Eq.", "Ch.", "Sec.", "Art.",
    "pp.", "p.", "Dept.", "Univ.", "Assn.", "Bros.", "Ave.", "Blvd.", "Rd.",
];

/// Abbreviations that only hold a sentence open in front of a number: "No. 5" but "No. I won't."
pub const NUMERIC_PREFIX_ABBREVIATIONS: &[&str] = &["No.", "Nos."];

/// Capitalized words that commonly open a sentence and therefore never continue a name after "B."
pub const SENTENCE_STARTERS: &[&str] = &[
    "A", "An", "The", "I", "It", "Its", "He", "She", "We", "They", "You", "This", "That",
    "These", "Those", "There", "Here", "Then", "Now", "But", "And", "Or", "So", "Yet",
    "If", "When", "What", "Why", "How", "Who", "Where", "In", "On", "At", "As", "For",
    "My", "His", "Her", "Our", "Their", "Yes", "No", "Not", "After", "Before",
];

/// Dotted initialisms of two or more letters: "U.S.", "J.R.R."
const INITIALISM_PATTERN: &str = r"^(?:\p{Lu}\.){2,}$";

/// A lone initial: "J.", "B."
const SINGLE_INITIAL_PATTERN: &str = r"^\p{Lu}\.$";

/// Characters stripped from the front of the inspected word: "(Dr." / "\"Mr."
fn is_opening_punctuation(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '{' | '\u{201C}' | '\u{2018}' | '\u{00AB}')
}

/// Last whitespace-separated word of a segment that ends in '.', opening punctuation removed
fn final_dotted_word(segment: &str) -> Option<&str> {
    let trimmed = segment.trim_end();
    if !trimmed.ends_with('.') {
        return None;
    }
    trimmed
        .split_whitespace()
        .last()
        .map(|word| word.trim_start_matches(is_opening_punctuation))
}

/// First word of the following segment, opening punctuation removed
fn leading_word(segment: &str) -> Option<&str> {
    segment
        .split_whitespace()
        .next()
        .map(|word| word.trim_start_matches(is_opening_punctuation))
        .filter(|word| !word.is_empty())
}

/// Efficient abbreviation lookup using HashSet for O(1) performance
pub struct AbbreviationChecker {
    title_abbreviations: HashSet<&'static str>,
    non_terminal_abbreviations: HashSet<&'static str>,
    numeric_prefix_abbreviations: HashSet<&'static str>,
    sentence_starters: HashSet<&'static str>,
    initialism: Regex,
    single_initial: Regex,
}

impl AbbreviationChecker {
    /// Create new abbreviation checker with the English abbreviation sets
    pub fn new() -> Result<Self> {
        Ok(Self {
            title_abbreviations: TITLE_ABBREVIATIONS.iter().copied().collect(),
            non_terminal_abbreviations: NON_TERMINAL_ABBREVIATIONS.iter().copied().collect(),
            numeric_prefix_abbreviations: NUMERIC_PREFIX_ABBREVIATIONS.iter().copied().collect(),
            sentence_starters: SENTENCE_STARTERS.iter().copied().collect(),
            initialism: Regex::new(INITIALISM_PATTERN)?,
            single_initial: Regex::new(SINGLE_INITIAL_PATTERN)?,
        })
    }

    /// Check if a word is a title abbreviation (causes false positives with proper nouns)
    pub fn is_title_abbreviation(&self, word: &str) -> bool {
        self.title_abbreviations.contains(word)
    }

    /// Check if a word never ends a sentence, whatever follows it
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.is_title_abbreviation(word)
            || self.non_terminal_abbreviations.contains(word)
            || self.initialism.is_match(word)
    }

    /// Whether `word` starts like an initial: "R." or "R.R."
    fn is_initial_token(&self, word: &str) -> bool {
        let mut chars = word.chars();
        matches!((chars.next(), chars.next()), (Some(c), Some('.')) if c.is_uppercase())
    }

    /// Whether `word` reads as the continuation of a name: "Tolkien", "Kennedy,"
    fn is_name_token(&self, word: &str) -> bool {
        let core = word.trim_end_matches(|c: char| !c.is_alphanumeric());
        core.chars().next().is_some_and(char::is_uppercase) && !self.sentence_starters.contains(core)
    }

    /// Decide whether the UAX #29 break between `segment` and `next_segment` is false
    /// WHY: Trailing whitespace belongs to `segment` under UAX #29, so `next_segment` starts at a word
    pub fn suppresses_break(&self, segment: &str, next_segment: &str) -> bool {
        let Some(word) = final_dotted_word(segment) else {
            return false;
        };
        let next_word = leading_word(next_segment);

        if self.is_abbreviation(word) {
            return true;
        }

        if self.numeric_prefix_abbreviations.contains(word) {
            return next_word
                .and_then(|w| w.chars().next())
                .is_some_and(|c| c.is_ascii_digit());
        }

        if self.single_initial.is_match(word) {
            // WHY: "I." is nearly always the pronoun; it only joins a run of initials ("I. M. Pei")
            return match next_word {
                Some(next) if self.is_initial_token(next) => true,
                Some(next) => word != "I." && self.is_name_token(next),
                None => false,
            };
        }

        false
    }
}
