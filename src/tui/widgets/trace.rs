//! Debug-trace panel.
//!
//! Renders the trace entries of the currently selected message. Entries are
//! opaque JSON; objects with a `step` field get the step highlighted, and
//! everything else is shown compactly as-is.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use serde_json::Value;

use crate::tui::state::TraceSelection;
use crate::tui::theme::Theme;

pub struct TracePanel<'a> {
    selection: &'a TraceSelection,
    theme: &'a Theme,
}

impl<'a> TracePanel<'a> {
    pub fn new(selection: &'a TraceSelection, theme: &'a Theme) -> Self {
        Self { selection, theme }
    }

    fn entry_line(&self, entry: &Value) -> Line<'static> {
        let bullet = Span::styled("• ", Style::default().fg(self.theme.text_muted));

        if let Value::Object(fields) = entry {
            if let Some(step) = fields.get("step").and_then(Value::as_str) {
                let mut rest = fields.clone();
                rest.remove("step");
                let mut spans = vec![
                    bullet,
                    Span::styled(
                        step.to_string(),
                        Style::default()
                            .fg(self.theme.trace_step)
                            .add_modifier(Modifier::BOLD),
                    ),
                ];
                if !rest.is_empty() {
                    let detail = serde_json::to_string(&Value::Object(rest))
                        .unwrap_or_else(|_| String::new());
                    spans.push(Span::styled(
                        format!(" {detail}"),
                        Style::default().fg(self.theme.text),
                    ));
                }
                return Line::from(spans);
            }
        }

        let compact = serde_json::to_string(entry).unwrap_or_else(|_| String::new());
        Line::from(vec![
            bullet,
            Span::styled(compact, Style::default().fg(self.theme.text)),
        ])
    }
}

impl Widget for TracePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.selection.selected() {
            Some(index) => format!(" Trace · message {} ", index + 1),
            None => " Trace ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let muted = Style::default().fg(self.theme.text_muted);
        let lines: Vec<Line> = if self.selection.selected().is_none() {
            vec![Line::from(Span::styled(
                "Pick a concierge reply (Alt+↑/↓) and press Ctrl+T to inspect its trace.",
                muted,
            ))]
        } else if self.selection.entries().is_empty() {
            vec![Line::from(Span::styled(
                "No trace recorded for this message.",
                muted,
            ))]
        } else {
            self.selection
                .entries()
                .iter()
                .map(|entry| self.entry_line(entry))
                .collect()
        };

        let mut y = inner.y;
        for line in lines {
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Conversation;
    use serde_json::json;

    fn buffer_text(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_selection_renders_no_entries() {
        let theme = Theme::dark();
        let selection = TraceSelection::default();
        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);

        TracePanel::new(&selection, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("press Ctrl+T"));
        assert!(!text.contains('•'));
    }

    #[test]
    fn entries_render_with_step_names() {
        let theme = Theme::dark();
        let mut conversation = Conversation::new();
        conversation.push_agent(
            "Hello",
            Some(vec![
                json!({"step": "intent", "intent": "help"}),
                json!("raw entry"),
            ]),
        );
        let mut selection = TraceSelection::default();
        selection.toggle(&conversation, 0);

        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        TracePanel::new(&selection, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("• intent"));
        assert!(text.contains(r#"{"intent":"help"}"#));
        assert!(text.contains(r#""raw entry""#));
    }

    #[test]
    fn selected_message_number_in_title() {
        let theme = Theme::dark();
        let mut conversation = Conversation::new();
        conversation.push_user("Hi");
        conversation.push_agent("Hello", Some(vec![json!("step1")]));
        let mut selection = TraceSelection::default();
        selection.toggle(&conversation, 1);

        let area = Rect::new(0, 0, 60, 6);
        let mut buf = Buffer::empty(area);
        TracePanel::new(&selection, &theme).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Trace · message 2"));
    }
}
