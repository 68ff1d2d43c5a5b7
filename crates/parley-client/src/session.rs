//! Cloneable handle to the single session controller.
//!
//! Every clone shares the same state and event channel. All mutation goes
//! through the functions in [`crate::commands`] and the reply scheduler in
//! [`crate::responder`]; views only ever see [`Snapshot`]s.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc;

use crate::events::{EventSink, SessionEvent, Snapshot};
use crate::responder::ReplyDelay;
use crate::state::SessionState;

#[derive(Debug, Clone)]
pub struct Session {
    state: Arc<Mutex<SessionState>>,
    events: EventSink,
    reply_delay: ReplyDelay,
}

impl Session {
    /// Create an empty session. Returns the handle and the receiving half of
    /// its event channel.
    pub fn new(reply_delay: ReplyDelay) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (events, rx) = EventSink::channel();
        let session = Self {
            state: Arc::new(Mutex::new(SessionState::new())),
            events,
            reply_delay,
        };
        (session, rx)
    }

    /// Lock the state. A panic while holding the lock cannot leave the state
    /// half-written (every mutation is a single call), so poisoning is
    /// recovered.
    pub(crate) fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue `event` for the views. Call it while still holding the state
    /// lock, so the channel order matches the order of mutations.
    pub(crate) fn emit(&self, event: SessionEvent) {
        self.events.emit(event);
    }

    pub(crate) fn reply_delay(&self) -> ReplyDelay {
        self.reply_delay
    }

    /// Push the current snapshot to the views.
    pub fn publish(&self) {
        let state = self.lock_state();
        self.emit(SessionEvent::Snapshot(state.snapshot()));
    }

    pub fn snapshot(&self) -> Snapshot {
        self.lock_state().snapshot()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.lock_state().is_awaiting_response()
    }
}
