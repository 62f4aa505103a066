//! Status bar widget
//!
//! Format: ` MODE  │ hints... │ api url`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Theme;

/// Status bar with mode pill, keybind hints, and the API endpoint.
pub struct StatusBar<'a> {
    is_loading: bool,
    api_url: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(is_loading: bool, api_url: &'a str, theme: &'a Theme) -> Self {
        Self {
            is_loading,
            api_url,
            theme,
        }
    }

    fn mode_info(&self) -> (&'static str, Color) {
        if self.is_loading {
            ("WAITING", self.theme.accent)
        } else {
            ("READY", self.theme.success)
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_bg(self.theme.panel_background);
            }
        }

        let (mode_text, mode_color) = self.mode_info();
        let separator_style = Style::default().fg(self.theme.text_muted);
        let hint_style = Style::default().fg(self.theme.text_muted);

        let mode_span = Span::styled(
            format!(" {} ", mode_text),
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        );

        let mut spans = vec![mode_span, Span::styled(" │ ", separator_style)];

        let hints = [
            ("Enter", "send"),
            ("Ctrl+T", "trace"),
            ("Alt+↑/↓", "pick reply"),
            ("Esc", "collapse"),
            ("Ctrl+Q", "quit"),
        ];
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", separator_style));
            }
            spans.push(Span::styled(format!("{}: {}", key, action), hint_style));
        }

        // Right-align the API endpoint
        let left_content: String = spans.iter().map(|s| s.content.as_ref()).collect();
        let left_width = left_content.chars().count();
        let api_text = format!("{} ", self.api_url);
        let api_width = api_text.chars().count();
        let padding_needed = (area.width as usize).saturating_sub(left_width + api_width);
        if padding_needed > 0 {
            spans.push(Span::raw(" ".repeat(padding_needed)));
        }
        spans.push(Span::styled(api_text, hint_style));

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
