//! Intent handlers invoked by the views.
//!
//! Each sub-module groups related intents. Handlers never fail: invalid
//! input is a logged no-op, and every state change is followed by a fresh
//! snapshot on the session's event channel.

pub mod conversations;
pub mod messaging;
