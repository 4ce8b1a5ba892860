//! Integration tests for command interpretation
//!
//! These tests drive the public classify/execute pipeline the way a host
//! does, and check the guarantees a user relies on:
//! - global commands win over per-record commands
//! - repeated select/deselect commands are idempotent
//! - searches never change the selection

use proptest::prelude::*;
use research_voice::command::vocabulary::CLEAR_PHRASES;
use research_voice::command::{classify, interpret, CommandExecutor, Intent};
use research_voice::core::types::{Record, RecordId, SelectionSet};

fn records() -> Vec<Record> {
    vec![
        Record::new(
            "r1",
            "APOE Variants and Plasma Lipid Levels",
            "Association of APOE haplotypes with lipid metabolism in adults.",
        )
        .with_markers(["rs429358"])
        .with_authors(["Cristen Willer"]),
        Record::new(
            "r2",
            "FTO Locus Association with Body Mass Index",
            "Common variation in FTO and obesity risk.",
        )
        .with_authors(["Timothy Frayling"]),
        Record::new(
            "r3",
            "Genetic Determinants of Chronotype",
            "Loci linked to morning preference and sleep timing.",
        )
        .with_authors(["Samuel Jones", "Michael Weedon"]),
    ]
}

// ============================================================================
// Scripted scenarios
// ============================================================================

#[test]
fn test_select_all_selects_every_record() {
    let records = records();
    let (intent, result) = interpret("Okay, select all of them", &records, &SelectionSet::new());
    assert_eq!(intent, Intent::SelectAll);
    assert_eq!(result.selection, SelectionSet::from_records(&records));
}

#[test]
fn test_clear_all_beats_target_select() {
    let records = records();
    let intent = classify("clear all and select the first", &records, &SelectionSet::new());
    assert_eq!(intent, Intent::ClearAll);
}

#[test]
fn test_ordinal_resolution_picks_second_record() {
    let records = records();
    let intent = classify("select the second source", &records, &SelectionSet::new());
    assert_eq!(intent, Intent::SelectTarget(records[1].clone()));
}

#[test]
fn test_keyword_search_names_position() {
    let records = records();
    let selection: SelectionSet = [RecordId::from("r2")].into_iter().collect();
    let (intent, result) = interpret("show me sources about lipid metabolism", &records, &selection);

    assert_eq!(intent, Intent::FindByKeyword("lipid metabolism".to_string()));
    assert_eq!(result.found, vec![1]);
    assert_eq!(
        result.message,
        "I found matches for \"lipid metabolism\" in the first source."
    );
    assert_eq!(result.selection, selection);
}

#[test]
fn test_generate_requires_selection() {
    let records = records();
    let (_, empty) = interpret("generate the report", &records, &SelectionSet::new());
    assert!(empty.generate.is_none());
    assert!(empty.message.contains("select at least one source"));

    let selection: SelectionSet = [RecordId::from("r3")].into_iter().collect();
    let (_, result) = interpret("generate the report", &records, &selection);
    let request = result.generate.expect("generate request");
    assert_eq!(request.selected, vec![records[2].clone()]);
}

#[test]
fn test_unrecognized_leaves_selection() {
    let records = records();
    let selection: SelectionSet = [RecordId::from("r1")].into_iter().collect();
    let (intent, result) = interpret("what's the weather", &records, &selection);
    assert_eq!(intent, Intent::Unrecognized);
    assert_eq!(result.selection, selection);
}

#[test]
fn test_author_surname_resolution() {
    let records = records();
    let (intent, result) = interpret("Add the paper by Weedon", &records, &SelectionSet::new());
    assert_eq!(intent, Intent::SelectTarget(records[2].clone()));
    assert!(result.selection.contains(&RecordId::from("r3")));
}

#[test]
fn test_discuss_by_title_word() {
    let records = records();
    let (intent, result) = interpret("Tell me about chronotype", &records, &SelectionSet::new());
    assert_eq!(intent, Intent::DiscussTarget(records[2].clone()));
    assert!(result.message.contains("Loci linked to morning preference"));
}

#[test]
fn test_voice_session_script() {
    let records = records();
    let mut selection = SelectionSet::new();
    let script = [
        ("select all", 3),
        ("deselect the second source", 2),
        ("remove the first", 1),
        ("add the first one", 2),
        ("clear selection", 0),
    ];
    for (transcript, expected) in script {
        let (_, result) = interpret(transcript, &records, &selection);
        selection = result.selection;
        assert_eq!(selection.len(), expected, "after {:?}", transcript);
    }
}

#[test]
fn test_empty_record_list_is_tolerated() {
    let (intent, result) = interpret("select the first source", &[], &SelectionSet::new());
    assert_eq!(intent, Intent::Unrecognized);
    assert!(result.selection.is_empty());

    let (_, result) = interpret("select all", &[], &SelectionSet::new());
    assert!(result.selection.is_empty());
}

// ============================================================================
// Properties
// ============================================================================

fn selection_from_mask(records: &[Record], mask: &[bool]) -> SelectionSet {
    records
        .iter()
        .zip(mask)
        .filter(|(_, on)| **on)
        .map(|(r, _)| r.id.clone())
        .collect()
}

proptest! {
    #[test]
    fn prop_select_all_anywhere(prefix in "[a-z ]{0,16}", suffix in "[a-z ]{0,16}") {
        let transcript = format!("{}select all{}", prefix, suffix);
        prop_assume!(!CLEAR_PHRASES.iter().any(|p| transcript.contains(p)));

        let records = records();
        let (intent, result) = interpret(&transcript, &records, &SelectionSet::new());
        prop_assert_eq!(intent, Intent::SelectAll);
        prop_assert_eq!(result.selection, SelectionSet::from_records(&records));
    }

    #[test]
    fn prop_clear_all_wins(prefix in "[a-z ]{0,16}", suffix in "[a-z ]{0,16}") {
        let transcript = format!("{}clear all{}", prefix, suffix);
        let intent = classify(&transcript, &records(), &SelectionSet::new());
        prop_assert_eq!(intent, Intent::ClearAll);
    }

    #[test]
    fn prop_select_and_deselect_are_idempotent(
        mask in proptest::collection::vec(any::<bool>(), 3),
        target in 0usize..3,
    ) {
        let records = records();
        let selection = selection_from_mask(&records, &mask);
        let record = records[target].clone();

        let select = Intent::SelectTarget(record.clone());
        let once = CommandExecutor::execute(&select, &selection, &records).selection;
        let twice = CommandExecutor::execute(&select, &once, &records).selection;
        prop_assert_eq!(&once, &twice);

        let deselect = Intent::DeselectTarget(record);
        let once = CommandExecutor::execute(&deselect, &selection, &records).selection;
        let twice = CommandExecutor::execute(&deselect, &once, &records).selection;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_select_then_deselect_restores(
        mask in proptest::collection::vec(any::<bool>(), 3),
        target in 0usize..3,
    ) {
        let records = records();
        let selection = selection_from_mask(&records, &mask);
        let record = records[target].clone();
        prop_assume!(!selection.contains(&record.id));

        let selected = CommandExecutor::execute(&Intent::SelectTarget(record.clone()), &selection, &records);
        let restored = CommandExecutor::execute(&Intent::DeselectTarget(record), &selected.selection, &records);
        prop_assert_eq!(restored.selection, selection);
    }

    #[test]
    fn prop_find_is_read_only(
        keyword in "[a-z]{0,8}",
        mask in proptest::collection::vec(any::<bool>(), 3),
    ) {
        let records = records();
        let selection = selection_from_mask(&records, &mask);
        let result = CommandExecutor::execute(&Intent::FindByKeyword(keyword), &selection, &records);
        prop_assert_eq!(result.selection, selection);
    }
}
