//! Terminal chat client.
//!
//! Renders the conversation with the concierge, the composer input, and a
//! per-message debug-trace panel.

mod app;
mod event;
mod theme;
mod ui;

pub mod state;
pub mod widgets;

pub use app::App;
pub use theme::Theme;

use anyhow::Result;

use crate::config::Settings;

/// Run the chat client until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    App::new(settings)?.run().await
}
