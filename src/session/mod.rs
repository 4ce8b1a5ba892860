//! Host session around the command engine
//!
//! Owns the selection store and the assistant display state, and connects
//! the engine to the speech and report collaborators.

pub mod report;
pub mod speech;
pub mod state;
pub mod store;
pub mod voice;

pub use report::ReportTrigger;
pub use speech::{ConsoleSpeech, SpeechOutput};
pub use state::AssistantState;
pub use store::SelectionStore;
pub use voice::{CycleOutcome, VoiceSession};
