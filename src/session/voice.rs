//! Voice session - runs one interpretation cycle at a time
//!
//! A cycle is: echo the transcript, classify, apply to the store, show the
//! reply, stop capture, speak, then hand any generate request on. Capture is
//! stopped before speaking so the reply is not heard back as a new command.

use crate::command::{classify, GenerateRequest, Intent};
use crate::core::config::SessionConfig;
use crate::core::types::{RecordId, SelectionSet};
use crate::session::report::ReportTrigger;
use crate::session::speech::SpeechOutput;
use crate::session::state::AssistantState;
use crate::session::store::SelectionStore;
use crate::sources::SourceList;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Result of one handled transcript
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub intent: Intent,
    pub message: String,
    /// Selection after the cycle
    pub selection: SelectionSet,
    /// Request passed to the report trigger, if any
    pub generated: Option<GenerateRequest>,
    /// 1-based positions matched by a keyword search
    pub found: Vec<usize>,
    /// False if speech was disabled or failed
    pub spoken: bool,
}

pub struct VoiceSession<S, R> {
    sources: SourceList,
    store: Arc<SelectionStore>,
    state: Mutex<AssistantState>,
    cycle: tokio::sync::Mutex<()>,
    speech: S,
    reports: R,
    config: SessionConfig,
}

impl<S: SpeechOutput, R: ReportTrigger> VoiceSession<S, R> {
    pub fn new(sources: SourceList, speech: S, reports: R, config: SessionConfig) -> Self {
        Self {
            sources,
            store: Arc::new(SelectionStore::new()),
            state: Mutex::new(AssistantState::new()),
            cycle: tokio::sync::Mutex::new(()),
            speech,
            reports,
            config,
        }
    }

    /// Share a selection store with other hosts
    pub fn with_store(mut self, store: Arc<SelectionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    pub fn store(&self) -> &Arc<SelectionStore> {
        &self.store
    }

    pub fn selection(&self) -> SelectionSet {
        self.store.snapshot()
    }

    pub fn state(&self) -> AssistantState {
        self.lock_state().clone()
    }

    fn lock_state(&self) -> MutexGuard<'_, AssistantState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_listening(&self) {
        self.lock_state().start_listening();
    }

    pub fn stop_listening(&self) {
        self.lock_state().stop_listening();
    }

    /// Interpret one transcript
    ///
    /// Returns None without touching any state if another cycle is still in
    /// flight or capture is not active.
    pub async fn handle_transcript(&self, transcript: &str) -> Option<CycleOutcome> {
        let Ok(_cycle) = self.cycle.try_lock() else {
            tracing::warn!("Transcript arrived while a command is in flight; ignored");
            return None;
        };

        {
            let mut state = self.lock_state();
            if !state.listening {
                tracing::warn!("Transcript arrived while not listening; ignored");
                return None;
            }
            if self.config.echo_transcript {
                state.echo(transcript);
            }
        }

        let records = self.sources.records();
        let intent = classify(transcript, records, &self.store.snapshot());
        let result = self.store.apply(&intent, records);

        {
            let mut state = self.lock_state();
            state.reply(result.message.clone());
            state.stop_listening();
        }

        let spoken = self.speak(&result.message).await;

        if let Some(request) = &result.generate {
            self.reports.request_report(request.clone());
        }

        Some(CycleOutcome {
            intent,
            message: result.message,
            selection: result.selection,
            generated: result.generate,
            found: result.found,
            spoken,
        })
    }

    async fn speak(&self, message: &str) -> bool {
        if !self.config.speak_responses {
            return false;
        }
        match self.speech.speak(message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Could not speak reply: {}", e);
                false
            }
        }
    }

    /// Manually flip a record in or out of the selection
    pub fn toggle(&self, id: &RecordId) -> bool {
        let selected = self.store.toggle(id);
        tracing::info!(id = %id, selected, "toggled record");
        selected
    }

    /// Send the current selection to the report generator, if non-empty
    pub fn generate_now(&self) -> Option<GenerateRequest> {
        let selection = self.store.snapshot();
        if selection.is_empty() {
            return None;
        }
        let request = GenerateRequest {
            selected: selection.filter_records(self.sources.records()),
        };
        self.reports.request_report(request.clone());
        Some(request)
    }

    /// Start over with an empty selection
    pub fn reset(&self) {
        self.store.reset();
        *self.lock_state() = AssistantState::new();
    }
}
