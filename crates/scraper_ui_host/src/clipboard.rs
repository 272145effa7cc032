use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps every written text in memory. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
    }

    pub fn history(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        entries.push(text.to_string());
        Ok(())
    }
}
