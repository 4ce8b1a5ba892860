//! Host session configuration
//!
//! Settings for the process wrapped around the command engine. The engine
//! itself has no tunables: its vocabulary is fixed in `command::vocabulary`.

use crate::core::error::{Result, VoiceError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the source list
pub const DEFAULT_SOURCES_PATH: &str = "data/sources.json";

/// Default tracing directive for the binary
pub const DEFAULT_LOG_FILTER: &str = "research_voice=info";

/// Configuration for a voice session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// JSON file holding the ordered source list
    pub sources_path: PathBuf,

    /// Hand responses to the speech-output boundary
    ///
    /// When false, responses are only stored as the assistant message.
    pub speak_responses: bool,

    /// Show `You said: "..."` for every handled transcript
    pub echo_transcript: bool,

    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sources_path: PathBuf::from(DEFAULT_SOURCES_PATH),
            speak_responses: true,
            echo_transcript: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse a config from TOML text; missing keys take their defaults
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| VoiceError::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file, falling back to defaults if it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }
}
