use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid config {path:?}: {message}")]
    ConfigError { path: PathBuf, message: String },

    #[error("Invalid source list: {0}")]
    InvalidSources(String),

    #[error("Speech output error: {0}")]
    SpeechError(String),
}

pub type Result<T> = std::result::Result<T, VoiceError>;
