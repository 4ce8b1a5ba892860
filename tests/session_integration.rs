//! Integration tests for a full voice session
//!
//! Loads the bundled source list and plays a conversation through
//! `VoiceSession`, checking selection, replies and report requests.

use async_trait::async_trait;
use research_voice::command::{GenerateRequest, Intent};
use research_voice::core::config::SessionConfig;
use research_voice::core::error::Result;
use research_voice::session::{SelectionStore, SpeechOutput, VoiceSession};
use research_voice::sources::SourceList;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::unbounded_channel;

#[derive(Default, Clone)]
struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl SpeechOutput for Transcript {
    async fn speak(&self, text: &str) -> Result<()> {
        self.lines.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn bundled_sources() -> SourceList {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sources.json");
    SourceList::load(&path).expect("bundled sources should load")
}

#[tokio::test]
async fn test_conversation_ends_in_report_request() {
    let speech = Transcript::default();
    let (tx, mut rx) = unbounded_channel::<GenerateRequest>();
    let session = VoiceSession::new(bundled_sources(), speech.clone(), tx, SessionConfig::default());

    let turns = [
        "Show me sources about cardiovascular disease",
        "Select the fourth source",
        "Add the paper by Frayling",
        "Tell me about the first one",
        "Generate the report",
    ];
    let mut outcomes = Vec::new();
    for turn in turns {
        session.start_listening();
        outcomes.push(session.handle_transcript(turn).await.expect("cycle should run"));
    }

    assert_eq!(outcomes[0].found, vec![4]);
    assert_eq!(
        outcomes[0].message,
        "I found matches for \"cardiovascular disease\" in the fourth source."
    );
    assert!(matches!(outcomes[3].intent, Intent::DiscussTarget(_)));

    let request = rx.recv().await.expect("report request");
    let ids: Vec<_> = request.selected.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["gwas-fto-bmi", "s2-caffeine"]);

    let spoken = speech.lines.lock().unwrap();
    assert_eq!(spoken.len(), turns.len());
    assert_eq!(spoken.last().map(String::as_str), Some("Generating the report now."));
}

#[tokio::test]
async fn test_sessions_can_share_a_store() {
    let store = Arc::new(SelectionStore::new());
    let (tx, _rx) = unbounded_channel::<GenerateRequest>();
    let first = VoiceSession::new(bundled_sources(), Transcript::default(), tx.clone(), SessionConfig::default())
        .with_store(Arc::clone(&store));
    let second = VoiceSession::new(bundled_sources(), Transcript::default(), tx, SessionConfig::default())
        .with_store(Arc::clone(&store));

    first.start_listening();
    first.handle_transcript("select all").await.unwrap();
    second.start_listening();
    second.handle_transcript("remove the third source").await.unwrap();

    assert_eq!(store.snapshot().len(), 4);
    assert_eq!(first.selection(), second.selection());
}

#[tokio::test]
async fn test_reply_waits_for_capture_restart() {
    let (tx, _rx) = unbounded_channel::<GenerateRequest>();
    let session = VoiceSession::new(bundled_sources(), Transcript::default(), tx, SessionConfig::default());

    session.start_listening();
    session.handle_transcript("select the second source").await.unwrap();
    // Capture stopped while replying; a stray transcript is dropped
    assert!(session.handle_transcript("clear all").await.is_none());
    assert_eq!(session.selection().len(), 1);
}
