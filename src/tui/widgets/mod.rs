//! Widgets for the chat client.

mod messages;
mod status;
mod trace;

pub use messages::{MessageList, MessageListState};
pub use status::StatusBar;
pub use trace::TracePanel;
