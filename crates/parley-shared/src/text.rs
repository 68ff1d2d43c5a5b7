//! Display-text helpers shared by the controller and the views.
//!
//! Lengths are counted in `char`s, not bytes, so multi-byte input is never
//! split in the middle of a code point.

use crate::constants::{DERIVED_TITLE_CHARS, ELLIPSIS, LAST_MESSAGE_PREVIEW_CHARS};

/// Keep at most `max_chars` characters of `text`, appending [`ELLIPSIS`]
/// when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Sidebar preview of a message body.
pub fn last_message_preview(text: &str) -> String {
    truncate_with_ellipsis(text, LAST_MESSAGE_PREVIEW_CHARS)
}

/// Conversation title derived from the first message sent in it.
pub fn derived_title(text: &str) -> String {
    truncate_with_ellipsis(text, DERIVED_TITLE_CHARS)
}
