//! Message view model: role, content, optional raw diagnostic payload, timestamp.
//!
//! Supplied by the hosting application (backend response, transcript, demo feed);
//! immutable once rendered. Field names match the backend's message schema.

use serde::{Deserialize, Serialize};

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One chat message as the UI consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    /// Primary body, displayed verbatim (embedded newlines preserved).
    pub content: String,
    /// Secondary diagnostic payload (triage model output). Shown on demand,
    /// and only for assistant messages.
    #[serde(default)]
    pub raw_model_response: Option<String>,
    /// ISO-ish timestamp as serialized by the backend. Formatted at render time.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ChatMessage {
    /// User message with text.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            raw_model_response: None,
            timestamp: None,
        }
    }

    /// Assistant message with text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            raw_model_response: None,
            timestamp: None,
        }
    }

    pub fn with_raw_response(mut self, raw: impl Into<String>) -> Self {
        self.raw_model_response = Some(raw.into());
        self
    }

    pub fn with_timestamp(mut self, ts: impl Into<String>) -> Self {
        self.timestamp = Some(ts.into());
        self
    }

    /// Whether the disclosure control may be shown for this message:
    /// assistant role AND a non-empty raw payload. An empty string counts as
    /// absent.
    pub fn has_details(&self) -> bool {
        self.role == Role::Assistant
            && self
                .raw_model_response
                .as_deref()
                .is_some_and(|raw| !raw.is_empty())
    }
}
