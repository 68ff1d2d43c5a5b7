use tracing::{debug, info};

use parley_shared::ChatMessage;

use crate::events::SessionEvent;
use crate::responder::{schedule_reply, PendingReply};
use crate::session::Session;

/// Send `text` in the selected conversation and schedule the simulated reply.
///
/// Returns `None` without touching any state when nothing is selected or the
/// trimmed text is empty. Must be called from within a Tokio runtime.
pub fn send_message(session: &Session, text: &str) -> Option<PendingReply> {
    let content = text.trim();
    if content.is_empty() {
        debug!("Ignoring empty message");
        return None;
    }

    let conversation_id = {
        let mut state = session.lock_state();
        let Some(id) = state.selected() else {
            debug!("No conversation selected, message dropped");
            return None;
        };
        if !state.append(id, ChatMessage::user(content)) {
            return None;
        }
        session.emit(SessionEvent::Snapshot(state.snapshot()));
        session.emit(SessionEvent::ScrollToLatest { conversation_id: id });

        // Raised only after the user message is out, so views never show the
        // indicator ahead of the message it answers.
        state.begin_pending(id);
        session.emit(SessionEvent::Snapshot(state.snapshot()));
        id
    };

    info!(
        conversation = %conversation_id.short(),
        chars = content.chars().count(),
        "Message sent"
    );

    Some(schedule_reply(session, conversation_id, content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::conversations::{create_conversation, select_conversation};
    use crate::responder::ReplyDelay;
    use parley_shared::classifier::ISSUES_REPLY;
    use parley_shared::Sender;

    #[tokio::test(start_paused = true)]
    async fn test_send_then_reply() {
        let (session, _rx) = Session::new(ReplyDelay::default());
        let id = create_conversation(&session);

        let pending = send_message(&session, "Tell me about open issues").unwrap();
        assert_eq!(pending.conversation_id, id);
        assert!(pending.delay >= std::time::Duration::from_millis(1500));
        assert!(pending.delay < std::time::Duration::from_millis(2500));

        let snapshot = session.snapshot();
        assert_eq!(snapshot.active_thread.len(), 1);
        assert_eq!(snapshot.active_thread[0].from, Sender::User);
        assert_eq!(snapshot.active_thread[0].content, "Tell me about open issues");
        assert!(snapshot.is_awaiting_response);

        pending.wait().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.active_thread.len(), 2);
        assert_eq!(snapshot.active_thread[1].from, Sender::Model);
        assert_eq!(snapshot.active_thread[1].content, ISSUES_REPLY);
        assert!(!snapshot.is_awaiting_response);

        let conv = &snapshot.conversations[0];
        assert_eq!(conv.message_count, 2);
        assert_eq!(conv.title, "Tell me about open issues");
        assert!(conv.last_message.starts_with("I can help you with issues."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_visible_before_delay() {
        let (session, _rx) = Session::new(ReplyDelay::fixed(2000));
        create_conversation(&session);

        let pending = send_message(&session, "hello").unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(1999)).await;
        assert_eq!(session.snapshot().active_thread.len(), 1);

        pending.wait().await;
        assert_eq!(session.snapshot().active_thread.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_message_is_noop() {
        let (session, mut rx) = Session::new(ReplyDelay::default());
        create_conversation(&session);
        let before = session.snapshot();
        while rx.try_recv().is_ok() {}

        assert!(send_message(&session, "").is_none());
        assert!(send_message(&session, "   \n\t ").is_none());

        assert_eq!(session.snapshot(), before);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_send_without_selection_is_noop() {
        let (session, _rx) = Session::new(ReplyDelay::default());
        assert!(send_message(&session, "anyone there?").is_none());
        assert!(session.snapshot().conversations.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_is_trimmed() {
        let (session, _rx) = Session::new(ReplyDelay::fixed(10));
        create_conversation(&session);
        let pending = send_message(&session, "  line one\nline two  \n").unwrap();
        assert_eq!(session.snapshot().active_thread[0].content, "line one\nline two");
        pending.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_lands_in_originating_conversation() {
        let (session, _rx) = Session::new(ReplyDelay::fixed(1500));
        let a = create_conversation(&session);
        let b = create_conversation(&session);

        select_conversation(&session, a);
        let pending = send_message(&session, "any bugs?").unwrap();

        select_conversation(&session, b);
        assert!(!session.is_awaiting_response());
        pending.wait().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.selected_conversation_id, Some(b));
        assert!(snapshot.active_thread.is_empty());

        let a_thread = session.lock_state().thread(a).to_vec();
        assert_eq!(a_thread.len(), 2);
        assert_eq!(a_thread[1].content, ISSUES_REPLY);

        let convs = snapshot.conversations;
        let conv_a = convs.iter().find(|c| c.id == a).unwrap();
        let conv_b = convs.iter().find(|c| c.id == b).unwrap();
        assert_eq!(conv_a.message_count, 2);
        assert_eq!(conv_b.message_count, 0);
        assert_eq!(conv_b.title, "New Chat");
    }

    #[tokio::test(start_paused = true)]
    async fn test_awaiting_follows_selection() {
        let (session, _rx) = Session::new(ReplyDelay::fixed(1500));
        let a = create_conversation(&session);
        let b = create_conversation(&session);

        select_conversation(&session, a);
        let pending = send_message(&session, "stats please").unwrap();
        select_conversation(&session, b);
        assert!(!session.is_awaiting_response());
        select_conversation(&session, a);
        assert!(session.is_awaiting_response());

        pending.wait().await;
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_order() {
        let (session, mut rx) = Session::new(ReplyDelay::fixed(100));
        let id = create_conversation(&session);
        while rx.try_recv().is_ok() {}

        let pending = send_message(&session, "label it").unwrap();
        pending.wait().await;

        let mut snapshots = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let SessionEvent::Snapshot(s) = event {
                snapshots.push(s);
            }
        }
        assert_eq!(snapshots.len(), 3);

        assert_eq!(snapshots[0].active_thread.len(), 1);
        assert!(!snapshots[0].is_awaiting_response);
        assert_eq!(snapshots[1].active_thread.len(), 1);
        assert!(snapshots[1].is_awaiting_response);
        assert_eq!(snapshots[2].active_thread.len(), 2);
        assert!(!snapshots[2].is_awaiting_response);
        assert_eq!(snapshots[2].selected_conversation_id, Some(id));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_last_snapshot_matches_state() {
        let (session, mut rx) = Session::new(ReplyDelay::fixed(1));
        let a = create_conversation(&session);
        let b = create_conversation(&session);

        for _ in 0..50 {
            select_conversation(&session, a);
            let pending = send_message(&session, "bug report").unwrap();
            for _ in 0..5 {
                select_conversation(&session, b);
                select_conversation(&session, a);
            }
            pending.wait().await;

            let mut last = None;
            while let Ok(event) = rx.try_recv() {
                if let SessionEvent::Snapshot(s) = event {
                    last = Some(s);
                }
            }
            assert_eq!(last, Some(session.snapshot()));
            assert!(!session.is_awaiting_response());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_title_changes_only_once() {
        let (session, _rx) = Session::new(ReplyDelay::fixed(10));
        create_conversation(&session);

        send_message(&session, "Summarize the velocity of the platform team this quarter")
            .unwrap()
            .wait()
            .await;
        let title = session.snapshot().conversations[0].title.clone();
        assert_eq!(title, "Summarize the velocity of the ...");

        send_message(&session, "and the bugs").unwrap().wait().await;
        let conv = &session.snapshot().conversations[0];
        assert_eq!(conv.title, title);
        assert_eq!(conv.message_count, 4);
    }
}
