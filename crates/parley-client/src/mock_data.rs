//! Conversations the sidebar starts with.

use chrono::{Duration, Utc};
use tracing::info;

use parley_shared::classifier::{ISSUES_REPLY, LABELS_REPLY, STATISTICS_REPLY};
use parley_shared::{ChatMessage, Conversation, Sender};

use crate::session::Session;

struct SeedConversation {
    title: &'static str,
    /// How long ago the exchange ended.
    age_minutes: i64,
    exchange: &'static [(Sender, &'static str)],
}

const SEED: &[SeedConversation] = &[
    SeedConversation {
        title: "Triage this week's bugs",
        age_minutes: 12,
        exchange: &[
            (Sender::User, "Which bugs were reported this week?"),
            (Sender::Model, ISSUES_REPLY),
        ],
    },
    SeedConversation {
        title: "Sprint velocity review",
        age_minutes: 3 * 60,
        exchange: &[
            (Sender::User, "How did our velocity look last sprint?"),
            (Sender::Model, STATISTICS_REPLY),
        ],
    },
    SeedConversation {
        title: "Label cleanup",
        age_minutes: 2 * 24 * 60,
        exchange: &[
            (Sender::User, "We have too many labels, can you help?"),
            (Sender::Model, LABELS_REPLY),
            (Sender::User, "Start by listing them"),
        ],
    },
];

/// Build the seeded conversations, newest first, each with its thread.
pub fn seed_conversations() -> Vec<(Conversation, Vec<ChatMessage>)> {
    let now = Utc::now();

    SEED.iter()
        .map(|seed| {
            let mut conversation = Conversation::new();
            conversation.title = seed.title.to_string();

            let end = now - Duration::minutes(seed.age_minutes);
            let count = seed.exchange.len() as i64;
            let thread: Vec<ChatMessage> = seed
                .exchange
                .iter()
                .enumerate()
                .map(|(i, (from, content))| {
                    let mut message = ChatMessage::new(*from, *content);
                    message.timestamp = end - Duration::minutes(count - 1 - i as i64);
                    message
                })
                .collect();

            for message in &thread {
                conversation.record_message(&message.content, message.timestamp);
            }
            (conversation, thread)
        })
        .collect()
}

/// Load the seeded conversations into `session` and select the newest one.
/// Called before any view is attached, so nothing is published.
pub fn seed(session: &Session) {
    let seeded = seed_conversations();
    let count = seeded.len();

    {
        let mut state = session.lock_state();
        // insert_front reverses, so feed oldest first
        for (conversation, thread) in seeded.into_iter().rev() {
            let id = conversation.id;
            state.insert_front(conversation);
            state.threads.insert(id, thread);
        }
        if let Some(first) = state.conversations.first().map(|c| c.id) {
            state.select(first);
        }
    }

    info!(count, "Seeded mock conversations");
}
