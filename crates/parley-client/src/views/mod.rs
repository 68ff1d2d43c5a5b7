//! Plain-text renderers for the terminal front end.
//!
//! Views are pure functions of a [`crate::events::Snapshot`]; they hold no
//! state and make no decisions beyond layout.

pub mod sidebar;
pub mod thread;

use chrono::{DateTime, Local, Utc};

pub(crate) fn clock(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M").to_string()
}
