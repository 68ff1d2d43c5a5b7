use tracing::{debug, info};

use parley_shared::{Conversation, ConversationId};

use crate::events::SessionEvent;
use crate::session::Session;

/// Select `id` and show its thread. An unknown id leaves nothing selected.
pub fn select_conversation(session: &Session, id: ConversationId) {
    let mut state = session.lock_state();
    let found = state.select(id);

    if found {
        debug!(conversation = %id.short(), "Conversation selected");
    } else {
        debug!(conversation = %id, "Unknown conversation, selection cleared");
    }

    session.emit(SessionEvent::Snapshot(state.snapshot()));
    if found {
        session.emit(SessionEvent::ScrollToLatest { conversation_id: id });
    }
}

/// Start a new, empty conversation at the top of the list and select it.
pub fn create_conversation(session: &Session) -> ConversationId {
    let conversation = Conversation::new();
    let id = conversation.id;

    let mut state = session.lock_state();
    state.insert_front(conversation);
    state.select(id);
    session.emit(SessionEvent::Snapshot(state.snapshot()));

    info!(conversation = %id.short(), "Conversation created");
    id
}

/// Sidebar entries in display order.
pub fn list_conversations(session: &Session) -> Vec<Conversation> {
    session.lock_state().conversations.clone()
}
