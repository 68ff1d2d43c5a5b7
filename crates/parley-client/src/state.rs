//! Session state owned by the controller.
//!
//! The [`SessionState`] struct lives behind `Arc<Mutex<>>` inside
//! [`crate::session::Session`]; only the command handlers and the reply
//! scheduler write to it.

use std::collections::HashMap;

use parley_shared::{ChatMessage, Conversation, ConversationId};

use crate::events::Snapshot;

/// Central session state.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Sidebar entries, most recently created first.
    pub(crate) conversations: Vec<Conversation>,

    /// Currently selected conversation. `None` before the first conversation
    /// exists or after selecting an unknown id.
    pub(crate) selected: Option<ConversationId>,

    /// Every conversation's own thread, in append order.
    pub(crate) threads: HashMap<ConversationId, Vec<ChatMessage>>,

    /// Replies still in flight, counted per originating conversation.
    pub(crate) pending: HashMap<ConversationId, u32>,
}

impl SessionState {
    /// Create an empty state with no conversations.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    fn conversation_mut(&mut self, id: ConversationId) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    pub fn selected(&self) -> Option<ConversationId> {
        self.selected
    }

    /// Thread of the selected conversation (empty when nothing is selected).
    pub fn active_thread(&self) -> &[ChatMessage] {
        self.selected.map_or(&[], |id| self.thread(id))
    }

    /// Thread recorded for `id`.
    pub fn thread(&self, id: ConversationId) -> &[ChatMessage] {
        self.threads.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the selected conversation has a reply in flight.
    pub fn is_awaiting_response(&self) -> bool {
        self.selected
            .is_some_and(|id| self.pending.get(&id).copied().unwrap_or(0) > 0)
    }

    /// Select `id`. Unknown ids leave nothing selected; returns whether the
    /// id was found.
    pub(crate) fn select(&mut self, id: ConversationId) -> bool {
        let found = self.conversation(id).is_some();
        self.selected = found.then_some(id);
        found
    }

    /// Put `conversation` at the top of the sidebar with an empty thread.
    pub(crate) fn insert_front(&mut self, conversation: Conversation) {
        self.threads.entry(conversation.id).or_default();
        self.conversations.insert(0, conversation);
    }

    /// Append `message` to `id`'s thread and fold it into the conversation's
    /// metadata. Returns `false` if the conversation does not exist.
    pub(crate) fn append(&mut self, id: ConversationId, message: ChatMessage) -> bool {
        let Some(conversation) = self.conversation_mut(id) else {
            return false;
        };
        conversation.record_message(&message.content, message.timestamp);
        self.threads.entry(id).or_default().push(message);
        true
    }

    pub(crate) fn begin_pending(&mut self, id: ConversationId) {
        *self.pending.entry(id).or_insert(0) += 1;
    }

    pub(crate) fn finish_pending(&mut self, id: ConversationId) {
        if let Some(count) = self.pending.get_mut(&id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.pending.remove(&id);
            }
        }
    }

    /// Immutable copy of everything the views render.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            conversations: self.conversations.clone(),
            selected_conversation_id: self.selected,
            active_thread: self.active_thread().to_vec(),
            is_awaiting_response: self.is_awaiting_response(),
        }
    }
}
