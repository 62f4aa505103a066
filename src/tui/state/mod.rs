//! Conversation view state.

pub mod conversation;
pub mod message;

pub use conversation::{Conversation, TraceSelection};
pub use message::{Message, MessageRole};
