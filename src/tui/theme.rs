//! Color theme for the chat client.
//!
//! An explicit value threaded into the widgets rather than process-wide
//! styling state.

use ratatui::style::Color;

/// TUI color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel_background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub user_bubble: Color,
    pub agent_bubble: Color,
    pub trace_step: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(30, 30, 30),
            panel_background: Color::Rgb(37, 37, 38),
            text: Color::Rgb(212, 212, 212),
            text_muted: Color::Rgb(128, 128, 128),
            border: Color::Rgb(60, 60, 60),
            accent: Color::Rgb(25, 118, 210),
            success: Color::Rgb(72, 185, 100),
            error: Color::Rgb(244, 67, 54),
            user_bubble: Color::Rgb(45, 45, 48),
            agent_bubble: Color::Rgb(25, 118, 210),
            trace_step: Color::Rgb(156, 220, 254),
        }
    }
}
