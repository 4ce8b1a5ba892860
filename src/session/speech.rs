//! Speech boundary - where replies leave the engine

use crate::core::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// Vocalizes assistant replies
///
/// `speak` resolves once the utterance has finished, so capture can resume
/// without picking up the assistant's own voice.
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    async fn speak(&self, text: &str) -> Result<()>;
}

/// Writes replies to stdout, for typed sessions
pub struct ConsoleSpeech {
    out: Mutex<Stdout>,
}

impl ConsoleSpeech {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for ConsoleSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechOutput for ConsoleSpeech {
    async fn speak(&self, text: &str) -> Result<()> {
        let mut out = self.out.lock().await;
        out.write_all(format!("assistant> {}\n", text).as_bytes()).await?;
        out.flush().await?;
        Ok(())
    }
}
