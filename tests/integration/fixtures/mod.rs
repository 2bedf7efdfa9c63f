// Test fixtures with known corpus lines and expected offset output
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// One record per line, covering the English rules the segmenter must honour
pub const ENGLISH_CORPUS: &str = "how soft works?Java!Python

Dr. Smith went home.
The price is 3.5 dollars.
Hello world. This is a test. How are you?
Mr. and Mrs. Smith arrived. They sat.
He said \"Stop.\" Then he left.
Wait... what happened?
J. R. R. Tolkien wrote it.
So did I. Then we left.
No. I will not go.
I want plan B. It works.
";

/// Expected output for ENGLISH_CORPUS
/// Format: start,end; per sentence, internal ends inclusive, record-final end exclusive
pub const ENGLISH_EXPECTED: &str = "0,14;15,19;20,26;

0,20;
0,25;
0,12;13,28;29,41;
0,27;28,37;
0,15;16,29;
0,22;
0,26;
0,9;10,23;
0,3;4,18;
0,14;15,24;
";

/// Non-ASCII record: "😀" is one char, two UTF-16 units, four bytes
pub const EMOJI_RECORD: &str = "Hi 😀. Bye.";
pub const EMOJI_EXPECTED_CHAR: &str = "0,5;6,10;\n";
pub const EMOJI_EXPECTED_UTF16: &str = "0,6;7,11;\n";
pub const EMOJI_EXPECTED_BYTE: &str = "0,8;9,13;\n";

/// Records with awkward shapes for partition checks
pub const PARTITION_SAMPLES: &[&str] = &[
    "how soft works?Java!Python",
    "Hello world. This is a test. How are you?",
    "   ",
    "...!?!...",
    "(This is one.) This is two.",
    "Is it 3.14? Yes! It is... maybe.",
    "Café au lait. Très bien. 世界。",
    "He met Dr. Who. Then Prof. X arrived!  ",
    "\"Quoted.\" 'Single.' (Paren.) [Bracket.]",
    "No terminal punctuation at all",
    "A.",
    "e.g. this continues. And this ends.",
];
