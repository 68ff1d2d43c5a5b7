//! Simulated assistant replies.
//!
//! A sent message schedules one reply task keyed by the conversation it was
//! sent in. The task sleeps for a random delay, asks the Response Classifier
//! for the canned text, and appends it to that conversation's own thread,
//! whatever is selected by then. Scheduled replies are never cancelled.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use parley_shared::classifier::{canned_reply, classify_intent};
use parley_shared::constants::{REPLY_DELAY_MAX_MS, REPLY_DELAY_MIN_MS};
use parley_shared::{ChatMessage, ConversationId};

use crate::events::SessionEvent;
use crate::session::Session;

/// Half-open range `[min_ms, max_ms)` the reply delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    min_ms: u64,
    max_ms: u64,
}

impl ReplyDelay {
    /// An empty range collapses to `min_ms`.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min_ms,
            max_ms: max_ms.max(min_ms + 1),
        }
    }

    /// Always wait exactly `ms`.
    pub fn fixed(ms: u64) -> Self {
        Self::new(ms, ms + 1)
    }

    pub fn range_ms(&self) -> Range<u64> {
        self.min_ms..self.max_ms
    }

    pub fn sample(&self) -> Duration {
        Duration::from_millis(rand::thread_rng().gen_range(self.range_ms()))
    }
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self::new(REPLY_DELAY_MIN_MS, REPLY_DELAY_MAX_MS)
    }
}

/// A reply that has been scheduled but may not have landed yet.
#[derive(Debug)]
pub struct PendingReply {
    pub conversation_id: ConversationId,
    pub delay: Duration,
    handle: JoinHandle<()>,
}

impl PendingReply {
    /// Wait until the reply has been appended.
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            warn!(conversation = %self.conversation_id, error = %e, "Reply task failed");
        }
    }
}

/// Spawn the reply task for `user_text`, sent in `conversation_id`.
///
/// Must be called from within a Tokio runtime.
pub fn schedule_reply(
    session: &Session,
    conversation_id: ConversationId,
    user_text: String,
) -> PendingReply {
    let delay = session.reply_delay().sample();
    let session = session.clone();

    debug!(
        conversation = %conversation_id.short(),
        delay_ms = delay.as_millis() as u64,
        "Reply scheduled"
    );

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        deliver_reply(&session, conversation_id, &user_text);
    });

    PendingReply {
        conversation_id,
        delay,
        handle,
    }
}

fn deliver_reply(session: &Session, conversation_id: ConversationId, user_text: &str) {
    let intent = classify_intent(user_text);
    let reply = ChatMessage::model(canned_reply(intent, user_text));

    let mut state = session.lock_state();
    state.finish_pending(conversation_id);
    let appended = state.append(conversation_id, reply);

    if !appended {
        warn!(conversation = %conversation_id, "Conversation vanished before reply landed");
    } else {
        info!(conversation = %conversation_id.short(), ?intent, "Reply delivered");
    }

    session.emit(SessionEvent::Snapshot(state.snapshot()));
    if appended && state.selected() == Some(conversation_id) {
        session.emit(SessionEvent::ScrollToLatest { conversation_id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range() {
        assert_eq!(ReplyDelay::default().range_ms(), 1500..2500);
    }

    #[test]
    fn test_sample_within_range() {
        let delay = ReplyDelay::default();
        for _ in 0..200 {
            let ms = delay.sample().as_millis() as u64;
            assert!((1500..2500).contains(&ms), "{ms} out of range");
        }
    }

    #[test]
    fn test_fixed_delay() {
        assert_eq!(ReplyDelay::fixed(40).sample(), Duration::from_millis(40));
    }

    #[test]
    fn test_empty_range_collapses() {
        assert_eq!(ReplyDelay::new(100, 50).range_ms(), 100..101);
    }
}
