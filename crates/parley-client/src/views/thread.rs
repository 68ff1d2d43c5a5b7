use std::fmt::Write;

use parley_shared::Sender;

use crate::events::Snapshot;

use super::clock;

pub const AWAITING_INDICATOR: &str = "assistant is typing...";

/// Render the active thread oldest first. Content is printed verbatim,
/// indented under a header that tells user and model turns apart.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if snapshot.selected_conversation_id.is_none() {
        out.push_str("Select a conversation or start a new chat.\n");
        return out;
    }

    if snapshot.active_thread.is_empty() && !snapshot.is_awaiting_response {
        out.push_str("No messages yet. Ask about issues, pull requests, labels or stats.\n");
        return out;
    }

    for message in &snapshot.active_thread {
        let header = match message.from {
            Sender::User => format!(">> {} ({})", message.from.label(), clock(message.timestamp)),
            Sender::Model => format!("<< {} ({})", message.from.label(), clock(message.timestamp)),
        };
        let _ = writeln!(out, "{header}");
        for line in message.content.split('\n') {
            let _ = writeln!(out, "   {line}");
        }
    }

    if snapshot.is_awaiting_response {
        let _ = writeln!(out, "   {AWAITING_INDICATOR}");
    }
    out
}

#[cfg(test)]
mod tests {
    use parley_shared::{ChatMessage, ConversationId};

    use super::*;

    fn snapshot(thread: Vec<ChatMessage>, awaiting: bool) -> Snapshot {
        Snapshot {
            conversations: Vec::new(),
            selected_conversation_id: Some(ConversationId::new()),
            active_thread: thread,
            is_awaiting_response: awaiting,
        }
    }

    #[test]
    fn test_distinguishes_senders() {
        let out = render(&snapshot(
            vec![ChatMessage::user("hi"), ChatMessage::model("hello")],
            false,
        ));
        let user_at = out.find(">> you").unwrap();
        let model_at = out.find("<< assistant").unwrap();
        assert!(user_at < model_at);
    }

    #[test]
    fn test_preserves_whitespace() {
        let out = render(&snapshot(vec![ChatMessage::user("a\n  indented")], false));
        assert!(out.contains("   a\n     indented\n"));
    }

    #[test]
    fn test_indicator_after_messages() {
        let out = render(&snapshot(vec![ChatMessage::user("bug?")], true));
        assert!(out.trim_end().ends_with(AWAITING_INDICATOR));
    }

    #[test]
    fn test_no_selection() {
        let mut snap = snapshot(Vec::new(), false);
        snap.selected_conversation_id = None;
        assert!(render(&snap).starts_with("Select a conversation"));
    }
}
