use serde::Serialize;
use tokio::sync::mpsc;

use parley_shared::{ChatMessage, Conversation, ConversationId};

/// Capacity of the controller-to-view event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Everything a view needs to render, copied out of the session state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub conversations: Vec<Conversation>,
    pub selected_conversation_id: Option<ConversationId>,
    pub active_thread: Vec<ChatMessage>,
    pub is_awaiting_response: bool,
}

/// Notifications pushed from the controller to the views.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SessionEvent {
    /// State changed; re-render from this snapshot.
    Snapshot(Snapshot),
    /// The thread view should scroll to its newest message.
    #[serde(rename_all = "camelCase")]
    ScrollToLatest { conversation_id: ConversationId },
}

/// Sending half of the event channel, shared by every session handle.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::Sender<SessionEvent>,
}

impl EventSink {
    pub fn channel() -> (Self, mpsc::Receiver<SessionEvent>) {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        (Self { tx }, rx)
    }

    /// Deliver `event` without blocking. Each snapshot is complete, so a
    /// dropped one is superseded by the next.
    pub fn emit(&self, event: SessionEvent) {
        if let Err(e) = self.tx.try_send(event) {
            tracing::error!(error = %e, "Failed to emit session event");
        }
    }
}
