//! Message list widget.
//!
//! Concierge messages sit on the right in the accent bubble, user messages
//! on the left in the neutral one. Each concierge message carries a
//! trace-toggle affordance; a progress line is appended while a reply is
//! loading.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::tui::state::{Message, MessageRole, TraceSelection};
use crate::tui::theme::Theme;

/// State for the message list
#[derive(Debug, Default)]
pub struct MessageListState {
    /// Current scroll offset (in lines)
    pub offset: usize,
    /// Total content height (in lines)
    pub content_height: usize,
    /// Viewport height
    pub viewport_height: usize,
}

impl MessageListState {
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.content_height.saturating_sub(self.viewport_height);
        self.offset = (self.offset + amount).min(max_offset);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.content_height.saturating_sub(self.viewport_height);
    }
}

/// Widget for rendering the message list
pub struct MessageList<'a> {
    messages: &'a [Message],
    theme: &'a Theme,
    is_loading: bool,
    selection: Option<&'a TraceSelection>,
    cursor: Option<usize>,
}

impl<'a> MessageList<'a> {
    pub fn new(messages: &'a [Message], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            is_loading: false,
            selection: None,
            cursor: None,
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn selection(mut self, selection: &'a TraceSelection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    fn affordance_line(&self, index: usize, message: &Message) -> Line<'static> {
        let open = self
            .selection
            .map(|s| s.is_selected(index))
            .unwrap_or(false);
        let at_cursor = self.cursor == Some(index);

        let marker = if at_cursor { "› " } else { "  " };
        let arrow = if open { "▾" } else { "▸" };
        let count = match message.trace_entries().len() {
            0 => "no entries".to_string(),
            1 => "1 entry".to_string(),
            n => format!("{n} entries"),
        };

        let style = if open {
            Style::default().fg(self.theme.accent)
        } else if at_cursor {
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.text_muted)
        };

        Line::from(Span::styled(
            format!("{marker}[Ctrl+T] trace {arrow} ({count})"),
            style,
        ))
    }
}

/// Pad a line with leading spaces so it ends at the right edge.
fn right_align(line: Line<'static>, width: usize) -> Line<'static> {
    let used: usize = line
        .spans
        .iter()
        .map(|span| span.content.chars().count())
        .sum();
    let pad = width.saturating_sub(used);
    if pad == 0 {
        return line;
    }
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.extend(line.spans);
    Line::from(spans)
}

impl StatefulWidget for MessageList<'_> {
    type State = MessageListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = area.width as usize;
        // Bubbles take three quarters of the pane, like the web layout
        let bubble_width = (width * 3 / 4).max(8);
        let mut virtual_y = 0usize;

        let mut put = |virtual_y: usize, line: &Line<'_>| {
            if virtual_y >= state.offset && (virtual_y - state.offset) < area.height as usize {
                let render_y = (area.y as usize + virtual_y - state.offset) as u16;
                buf.set_line(area.x, render_y, line, area.width);
            }
        };

        for (index, message) in self.messages.iter().enumerate() {
            let is_agent = message.role == MessageRole::Agent;

            // Role line
            let (role_text, role_style) = match message.role {
                MessageRole::User => (
                    "You",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                MessageRole::Agent => (
                    "Concierge",
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            let mut role_line = Line::from(Span::styled(role_text, role_style));
            if is_agent {
                role_line = right_align(role_line, width);
            }
            put(virtual_y, &role_line);
            virtual_y += 1;

            // Content lines
            let bubble_style = if is_agent {
                Style::default().fg(Color::White).bg(self.theme.agent_bubble)
            } else {
                Style::default().fg(self.theme.text).bg(self.theme.user_bubble)
            };
            for wrapped in textwrap::wrap(&message.content, bubble_width) {
                let mut line = Line::from(Span::styled(wrapped.to_string(), bubble_style));
                if is_agent {
                    line = right_align(line, width);
                }
                put(virtual_y, &line);
                virtual_y += 1;
            }

            // Trace affordance, concierge messages only
            if is_agent {
                let line = right_align(self.affordance_line(index, message), width);
                put(virtual_y, &line);
                virtual_y += 1;
            }

            // Spacer
            virtual_y += 1;
        }

        if self.is_loading {
            let line = Line::from(Span::styled(
                "● Thinking...",
                Style::default().fg(self.theme.accent),
            ));
            put(virtual_y, &line);
            virtual_y += 1;
        }

        state.content_height = virtual_y;
        state.viewport_height = area.height as usize;
    }
}
