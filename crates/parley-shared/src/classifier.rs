//! Response Classifier: deterministic keyword lookup that stands in for a
//! real assistant backend.
//!
//! Matching is a case-insensitive substring test against the user's text.
//! Rules are checked in a fixed priority order and the first hit wins, so
//! "bug in my pull request" is an issue question, not a pull request one.

/// Which canned reply a message maps to, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Issues,
    Statistics,
    PullRequests,
    Labels,
    Fallback,
}

const RULES: &[(Intent, &[&str])] = &[
    (Intent::Issues, &["issue", "bug"]),
    (Intent::Statistics, &["stat", "metric", "velocity"]),
    (Intent::PullRequests, &["pull request", "pr"]),
    (Intent::Labels, &["label"]),
];

pub const ISSUES_REPLY: &str = "I can help you with issues. What would you like to do?\n\n\
1. List open issues in the repository\n\
2. Search issues by keyword, author or assignee\n\
3. Create a new issue\n\
4. Update the title, body or state of an existing issue\n\
5. Read or add comments on an issue";

pub const STATISTICS_REPLY: &str =
    "Fetching repository statistics... This includes open and closed issue counts, \
average time to close, and team velocity over the last few sprints.";

pub const PULL_REQUESTS_REPLY: &str = "Here is what I can do with pull requests:\n\n\
1. List open pull requests\n\
2. Show the issues a pull request closes\n\
3. Summarize the review status of a pull request\n\
4. Find pull requests linked to a branch";

pub const LABELS_REPLY: &str = "I can manage repository labels for you:\n\n\
1. List all labels in the repository\n\
2. Create a new label with a name, color and description\n\
3. Add or remove labels on an issue\n\
4. Rename, recolor or delete an existing label";

/// Decide which rule `user_text` falls under.
pub fn classify_intent(user_text: &str) -> Intent {
    let lowered = user_text.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Fallback)
}

/// Canned reply for `user_text`. The fallback echoes the input verbatim.
pub fn classify(user_text: &str) -> String {
    canned_reply(classify_intent(user_text), user_text)
}

/// Reply text for an already-classified message.
pub fn canned_reply(intent: Intent, user_text: &str) -> String {
    match intent {
        Intent::Issues => ISSUES_REPLY.to_string(),
        Intent::Statistics => STATISTICS_REPLY.to_string(),
        Intent::PullRequests => PULL_REQUESTS_REPLY.to_string(),
        Intent::Labels => LABELS_REPLY.to_string(),
        Intent::Fallback => format!(
            "I received your message: \"{user_text}\". I can help with issues, \
pull requests, labels and repository statistics. What would you like to explore?"
        ),
    }
}
