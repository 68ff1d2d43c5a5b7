//! Conversation and message models.
//!
//! Every struct derives `Serialize` and `Deserialize` so snapshots can be
//! handed to any view layer as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TITLE;
use crate::text::{derived_title, last_message_preview};
use crate::types::{ConversationId, MessageId, MessageStatus, Sender};

// ---------------------------------------------------------------------------
// Conversation
// ---------------------------------------------------------------------------

/// Sidebar entry: a named thread container with summary metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: ConversationId,
    /// `"New Chat"` until the first message gives it a real title.
    pub title: String,
    /// Preview of the most recent message, at most 60 chars plus ellipsis.
    pub last_message: String,
    /// Time of the last activity.
    pub timestamp: DateTime<Utc>,
    /// Number of messages ever appended to this conversation's thread.
    pub message_count: u32,
}

impl Conversation {
    /// A fresh, empty conversation carrying the placeholder title.
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            title: DEFAULT_TITLE.to_string(),
            last_message: String::new(),
            timestamp: Utc::now(),
            message_count: 0,
        }
    }

    /// Whether the title is still the placeholder.
    pub fn has_default_title(&self) -> bool {
        self.title == DEFAULT_TITLE
    }

    /// Fold one appended message into the summary metadata.
    ///
    /// The title is derived from `content` only for the very first message,
    /// and only while the placeholder title is still in place.
    pub fn record_message(&mut self, content: &str, at: DateTime<Utc>) {
        let is_first = self.message_count == 0;

        self.last_message = last_message_preview(content);
        self.timestamp = at;
        self.message_count += 1;

        if is_first && self.has_default_title() {
            self.title = derived_title(content);
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// ChatMessage
// ---------------------------------------------------------------------------

/// A single entry in a thread. Never mutated once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: MessageId,
    pub from: Sender,
    /// Plain text, newlines preserved.
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

impl ChatMessage {
    pub fn new(from: Sender, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            from,
            content: content.into(),
            timestamp: Utc::now(),
            status: Some(MessageStatus::Complete),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Sender::Model, content)
    }
}
