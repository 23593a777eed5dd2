//! Validated inbound chat message.

use thiserror::Error;

use crate::matching::language::Language;

/// The message was empty or whitespace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Message required")]
pub struct EmptyMessage;

/// A non-empty, trimmed message and its detected language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    text: String,
    language: Language,
}

impl IncomingMessage {
    /// Trim `raw` and classify it. Fails on empty input.
    pub fn new(raw: &str) -> Result<Self, EmptyMessage> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(EmptyMessage);
        }
        Ok(Self {
            text: text.to_string(),
            language: Language::detect(text),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
