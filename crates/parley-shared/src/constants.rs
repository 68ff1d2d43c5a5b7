/// Application name
pub const APP_NAME: &str = "Parley";

/// Title given to a conversation until its first message arrives
pub const DEFAULT_TITLE: &str = "New Chat";

/// Marker appended to truncated display strings
pub const ELLIPSIS: &str = "...";

/// Maximum characters of a conversation's last-message preview
pub const LAST_MESSAGE_PREVIEW_CHARS: usize = 60;

/// Maximum characters of a title derived from the first message
pub const DERIVED_TITLE_CHARS: usize = 30;

/// Simulated reply delay, inclusive lower bound (milliseconds)
pub const REPLY_DELAY_MIN_MS: u64 = 1500;

/// Simulated reply delay, exclusive upper bound (milliseconds)
pub const REPLY_DELAY_MAX_MS: u64 = 2500;
