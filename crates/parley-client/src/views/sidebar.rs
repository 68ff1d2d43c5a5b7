use std::fmt::Write;

use crate::events::Snapshot;

use super::clock;

/// Render the conversation list in controller order, numbered from 1.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::from("Conversations  (/new to start a chat)\n");

    if snapshot.conversations.is_empty() {
        out.push_str("  (none yet)\n");
        return out;
    }

    for (i, conv) in snapshot.conversations.iter().enumerate() {
        let marker = if snapshot.selected_conversation_id == Some(conv.id) {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(
            out,
            "{marker} {}. {}  [{} msgs, {}]",
            i + 1,
            conv.title,
            conv.message_count,
            clock(conv.timestamp)
        );
        if !conv.last_message.is_empty() {
            let preview = conv.last_message.replace('\n', " ");
            let _ = writeln!(out, "     {preview}");
        }
    }
    out
}
