//! Command execution - applies intents to the selection

use crate::command::intent::Intent;
use crate::command::vocabulary::ordinal_name;
use crate::core::types::{Record, SelectionSet};
use serde::Serialize;

pub const CLEARED_MESSAGE: &str = "All selections have been cleared.";
pub const SELECTED_ALL_MESSAGE: &str = "Okay, I've selected all sources.";
pub const GENERATING_MESSAGE: &str = "Generating the report now.";
pub const EMPTY_SELECTION_MESSAGE: &str =
    "Please select at least one source before generating the report.";
pub const EMPTY_KEYWORD_MESSAGE: &str = "I can search for sources, but please tell me what to look for. For example, 'Show me sources about cardiovascular disease'.";
pub const FALLBACK_MESSAGE: &str = "Sorry, I didn't understand that. You can say things like 'Select the first source', 'Clear all', or 'Show me sources about lipids'.";

/// Request handed to the report generator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    /// Selected records, in list order
    pub selected: Vec<Record>,
}

/// Outcome of executing one intent
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    /// Selection after the intent was applied
    pub selection: SelectionSet,
    /// Confirmation or clarification for the user
    pub message: String,
    /// Set only for a generate intent with a non-empty selection
    pub generate: Option<GenerateRequest>,
    /// 1-based positions of records matched by a keyword search
    pub found: Vec<usize>,
}

impl ExecutionResult {
    fn unchanged(selection: &SelectionSet, message: impl Into<String>) -> Self {
        Self {
            selection: selection.clone(),
            message: message.into(),
            generate: None,
            found: Vec::new(),
        }
    }

    fn with_selection(selection: SelectionSet, message: impl Into<String>) -> Self {
        Self {
            selection,
            message: message.into(),
            generate: None,
            found: Vec::new(),
        }
    }
}

/// Applies intents to a selection
///
/// Execution never fails: every intent yields a selection and a message,
/// possibly leaving the selection untouched.
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn execute(intent: &Intent, selection: &SelectionSet, records: &[Record]) -> ExecutionResult {
        match intent {
            Intent::ClearAll => ExecutionResult::with_selection(SelectionSet::new(), CLEARED_MESSAGE),
            Intent::SelectAll => ExecutionResult::with_selection(
                SelectionSet::from_records(records),
                SELECTED_ALL_MESSAGE,
            ),
            Intent::Generate => generate(selection, records),
            Intent::FindByKeyword(keyword) => find(keyword, selection, records),
            Intent::DiscussTarget(record) => ExecutionResult::unchanged(
                selection,
                format!(
                    "Of course. Here is a summary of \"{}\": {}",
                    record.title, record.summary
                ),
            ),
            Intent::SelectTarget(record) => {
                let mut next = selection.clone();
                if next.insert(record.id.clone()) {
                    tracing::info!(id = %record.id, "selected record");
                }
                ExecutionResult::with_selection(next, format!("Selected: \"{}\".", record.title))
            }
            Intent::DeselectTarget(record) => {
                let mut next = selection.clone();
                if next.remove(&record.id) {
                    tracing::info!(id = %record.id, "deselected record");
                }
                ExecutionResult::with_selection(next, format!("Deselected: \"{}\".", record.title))
            }
            Intent::Unrecognized => ExecutionResult::unchanged(selection, FALLBACK_MESSAGE),
        }
    }
}

fn generate(selection: &SelectionSet, records: &[Record]) -> ExecutionResult {
    if selection.is_empty() {
        return ExecutionResult::unchanged(selection, EMPTY_SELECTION_MESSAGE);
    }

    let selected = selection.filter_records(records);
    tracing::info!(count = selected.len(), "report generation requested");
    ExecutionResult {
        generate: Some(GenerateRequest { selected }),
        ..ExecutionResult::unchanged(selection, GENERATING_MESSAGE)
    }
}

fn find(keyword: &str, selection: &SelectionSet, records: &[Record]) -> ExecutionResult {
    if keyword.is_empty() {
        return ExecutionResult::unchanged(selection, EMPTY_KEYWORD_MESSAGE);
    }

    let needle = keyword.to_lowercase();
    let found: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.searchable_text().contains(&needle))
        .map(|(index, _)| index + 1)
        .collect();

    if found.is_empty() {
        return ExecutionResult::unchanged(
            selection,
            format!("Sorry, I couldn't find any sources mentioning \"{}\".", keyword),
        );
    }

    let positions = found
        .iter()
        .map(|&p| ordinal_name(p))
        .collect::<Vec<_>>()
        .join(" and ");
    let plural = if found.len() > 1 { "s" } else { "" };
    let message = format!(
        "I found matches for \"{}\" in the {} source{}.",
        keyword, positions, plural
    );

    ExecutionResult {
        found,
        ..ExecutionResult::unchanged(selection, message)
    }
}
