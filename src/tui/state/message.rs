//! Chat message types for the conversation view.

use serde_json::Value;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Agent,
}

/// A single chat message.
///
/// Messages are immutable once created; the conversation only ever appends.
/// The trace is an opaque sequence of diagnostic entries recorded while the
/// reply was produced, rendered on demand by the trace panel.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub trace: Option<Vec<Value>>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            trace: None,
        }
    }

    pub fn agent(content: impl Into<String>, trace: Option<Vec<Value>>) -> Self {
        Self {
            role: MessageRole::Agent,
            content: content.into(),
            trace,
        }
    }

    /// Trace entries, empty when the message carries none.
    pub fn trace_entries(&self) -> &[Value] {
        self.trace.as_deref().unwrap_or_default()
    }
}
