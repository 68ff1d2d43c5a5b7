//! # parley-shared
//!
//! Domain types shared by every Parley crate: conversation and message
//! models, identifier newtypes, display-text helpers, and the canned
//! Response Classifier that stands in for a real assistant backend.

pub mod classifier;
pub mod constants;
pub mod error;
pub mod models;
pub mod text;
pub mod types;

pub use error::ConfigError;
pub use models::{ChatMessage, Conversation};
pub use types::{ConversationId, MessageId, MessageStatus, Sender};
