//! Command interpretation pipeline
//!
//! Turns a transcript into a selection change and a reply:
//! transcript -> normalize -> classify -> Intent -> CommandExecutor -> ExecutionResult

pub mod executor;
pub mod intent;
pub mod normalize;
pub mod resolver;
pub mod vocabulary;

pub use executor::{CommandExecutor, ExecutionResult, GenerateRequest};
pub use intent::{classify, Intent};
pub use resolver::{MatchReason, TargetMatch, TargetResolver};

use crate::core::types::{Record, SelectionSet};

/// Classify a transcript and execute the resulting intent
pub fn interpret(
    transcript: &str,
    records: &[Record],
    selection: &SelectionSet,
) -> (Intent, ExecutionResult) {
    let intent = classify(transcript, records, selection);
    let result = CommandExecutor::execute(&intent, selection, records);
    (intent, result)
}
