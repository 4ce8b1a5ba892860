//! Classify transcripts into intents
//!
//! Classification is an ordered cascade of keyword tests. The first rule that
//! matches wins; there is no scoring and no backtracking. Global commands are
//! tested before per-record ones so that "select all" never reaches the
//! single-record select rule.

use crate::command::normalize::normalize;
use crate::command::resolver::TargetResolver;
use crate::command::vocabulary::{
    contains_any, CLEAR_PHRASES, DESELECT_WORD, DISCUSS_PHRASES, FIND_PREFIXES,
    FIND_PREPOSITIONS, GENERATE_WORDS, REMOVE_WORD, SELECT_ALL_PHRASE, SELECT_WORDS,
};
use crate::core::types::{Record, SelectionSet};
use serde::{Deserialize, Serialize};

/// The single action a transcript maps to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "arg", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    ClearAll,
    SelectAll,
    Generate,
    /// Search keyword; may be empty, in which case the user is asked for one
    FindByKeyword(String),
    DiscussTarget(Record),
    SelectTarget(Record),
    DeselectTarget(Record),
    Unrecognized,
}

impl Intent {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::ClearAll => "clear_all",
            Intent::SelectAll => "select_all",
            Intent::Generate => "generate",
            Intent::FindByKeyword(_) => "find_by_keyword",
            Intent::DiscussTarget(_) => "discuss_target",
            Intent::SelectTarget(_) => "select_target",
            Intent::DeselectTarget(_) => "deselect_target",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

/// Classify a raw transcript against the current record list
///
/// The selection is not consulted by any rule; preconditions on it are
/// checked when the intent is executed.
pub fn classify(transcript: &str, records: &[Record], _selection: &SelectionSet) -> Intent {
    let command = normalize(transcript);
    let intent = classify_normalized(&command, records);
    tracing::debug!(transcript = %command, intent = intent.kind(), "classified transcript");
    intent
}

fn classify_normalized(command: &str, records: &[Record]) -> Intent {
    if contains_any(command, CLEAR_PHRASES) {
        return Intent::ClearAll;
    }

    if command.contains(SELECT_ALL_PHRASE) {
        return Intent::SelectAll;
    }

    if contains_any(command, GENERATE_WORDS) {
        return Intent::Generate;
    }

    if let Some(keyword) = extract_find_keyword(command) {
        return Intent::FindByKeyword(keyword);
    }

    let Some(target) = TargetResolver::new(records).resolve(command) else {
        return Intent::Unrecognized;
    };
    tracing::debug!(
        index = target.index,
        reason = ?target.match_reason,
        "resolved target record"
    );

    let record = target.record.clone();
    if contains_any(command, DISCUSS_PHRASES) {
        Intent::DiscussTarget(record)
    } else if command.contains(DESELECT_WORD) {
        Intent::DeselectTarget(record)
    } else if contains_any(command, SELECT_WORDS) {
        Intent::SelectTarget(record)
    } else if command.contains(REMOVE_WORD) {
        Intent::DeselectTarget(record)
    } else {
        Intent::Unrecognized
    }
}

/// Keyword of a find command, or None if the command is not a search
fn extract_find_keyword(command: &str) -> Option<String> {
    let prefix = FIND_PREFIXES.iter().find(|p| command.starts_with(*p))?;
    let body = command[prefix.len()..].trim();

    let first_word = body.split(' ').next().unwrap_or_default();
    let keyword = if FIND_PREPOSITIONS.contains(&first_word) {
        body[first_word.len()..].trim()
    } else {
        body
    };

    Some(keyword.to_string())
}
