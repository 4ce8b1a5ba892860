//! Assistant display state

/// Shown before the first command
pub const INITIAL_MESSAGE: &str =
    "Try saying 'Select all', 'Clear selection', or 'Show me sources about lipid metabolism'.";

pub const LISTENING_MESSAGE: &str = "Listening...";

/// What the assistant panel currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantState {
    /// Last reply, or a hint/status line
    pub message: String,
    /// Echo of the last handled transcript
    pub transcript: Option<String>,
    /// Whether speech capture is active
    pub listening: bool,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            message: INITIAL_MESSAGE.to_string(),
            transcript: None,
            listening: false,
        }
    }
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_listening(&mut self) {
        self.listening = true;
        self.transcript = None;
        self.message = LISTENING_MESSAGE.to_string();
    }

    pub fn stop_listening(&mut self) {
        self.listening = false;
    }

    /// Record a transcript as `You said: "..."`
    pub fn echo(&mut self, transcript: &str) {
        self.transcript = Some(format!("You said: \"{}\"", transcript));
    }

    pub fn reply(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}
