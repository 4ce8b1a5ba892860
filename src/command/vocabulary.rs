//! Fixed keyword vocabulary for spoken commands
//!
//! Tables are slices rather than maps so that scan order is part of the
//! definition. Ordinal lookup in particular depends on it: "first" is tried
//! before "one" regardless of where each appears in the transcript.

/// Phrases that clear the whole selection
pub const CLEAR_PHRASES: &[&str] = &["clear all", "clear selection", "deselect all"];

/// Phrase that selects every record
pub const SELECT_ALL_PHRASE: &str = "select all";

/// Words that ask for the report to be generated
pub const GENERATE_WORDS: &[&str] = &["generate", "continue", "next"];

/// Prefixes that start a keyword search
pub const FIND_PREFIXES: &[&str] = &["show me sources", "find sources", "which sources"];

/// Leading words dropped from a search keyword
pub const FIND_PREPOSITIONS: &[&str] = &["with", "about", "on", "mentioning"];

/// Ordinal words and the 1-based list position they name, in scan order
pub const ORDINALS: &[(&str, usize)] = &[
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
];

/// Title words must be longer than this to identify a record
pub const MIN_TITLE_WORD_LEN: usize = 3;

pub const DISCUSS_PHRASES: &[&str] = &["discuss", "tell me about"];

/// Checked before `SELECT_WORDS`, which it contains
pub const DESELECT_WORD: &str = "deselect";

pub const SELECT_WORDS: &[&str] = &["select", "add"];

pub const REMOVE_WORD: &str = "remove";

/// Spoken form of a 1-based list position
pub fn ordinal_name(position: usize) -> String {
    match position {
        1 => "first".to_string(),
        2 => "second".to_string(),
        3 => "third".to_string(),
        4 => "fourth".to_string(),
        n => format!("number {}", n),
    }
}

pub(crate) fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}
