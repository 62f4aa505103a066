//! The concierge: prompt → intent → travel API call → reply with trace.

pub mod dispatcher;
pub mod intent;

pub use dispatcher::{AgentReply, Dispatcher};
pub use intent::Intent;
