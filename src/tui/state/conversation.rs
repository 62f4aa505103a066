//! Conversation state and trace selection.

use serde_json::Value;

use super::message::Message;

/// A conversation (ordered list of messages).
///
/// Indexes are stable: messages are appended, never reordered or removed,
/// so a message index is a durable handle for the trace selection.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn push_agent(&mut self, content: impl Into<String>, trace: Option<Vec<Value>>) {
        self.messages.push(Message::agent(content, trace));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Which message's trace is open, plus the payload on display.
///
/// The selection is an explicit optional index; the entries are copied out
/// of the message at selection time and cleared on collapse, so the panel
/// always shows exactly the payload of the selected message.
#[derive(Debug, Clone, Default)]
pub struct TraceSelection {
    selected: Option<usize>,
    entries: Vec<Value>,
}

impl TraceSelection {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Toggle the trace panel for the message at `index`.
    ///
    /// Re-toggling the open message collapses the panel. An index past the
    /// end of the conversation is a no-op.
    pub fn toggle(&mut self, conversation: &Conversation, index: usize) {
        if self.selected == Some(index) {
            self.clear();
            return;
        }
        let Some(message) = conversation.messages.get(index) else {
            return;
        };
        self.selected = Some(index);
        self.entries = message.trace_entries().to_vec();
    }

    /// Collapse the panel.
    pub fn clear(&mut self) {
        self.selected = None;
        self.entries.clear();
    }
}
