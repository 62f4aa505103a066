//! Main UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use super::widgets::{MessageList, StatusBar, TracePanel};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Conversation + trace panel
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // Composer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);
    render_input(frame, app, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "🧳 Valise",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " │ travel concierge",
            Style::default().fg(app.theme.text_muted),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, app: &mut App, area: Rect) {
    // Conversation and trace panel split the width, like the web layout
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_messages(frame, app, panes[0]);
    frame.render_widget(TracePanel::new(&app.trace, &app.theme), panes[1]);
}

fn render_messages(frame: &mut Frame, app: &mut App, area: Rect) {
    let messages = app
        .conversation
        .as_ref()
        .map(|conversation| conversation.messages.as_slice())
        .unwrap_or_default();

    if messages.is_empty() && !app.is_loading {
        let welcome = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from("🧳"),
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to Valise",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your pocket travel concierge",
                Style::default().fg(app.theme.text_muted),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Ask about airports, flights, rewards, or bookings",
                Style::default().fg(app.theme.text_muted),
            )),
            Line::from(Span::styled(
                "Type a message below to get started",
                Style::default().fg(app.theme.text_muted),
            )),
        ])
        .alignment(Alignment::Center);

        frame.render_widget(welcome, area);
        return;
    }

    let list = MessageList::new(messages, &app.theme)
        .loading(app.is_loading)
        .selection(&app.trace)
        .cursor(app.cursor);
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(
        StatusBar::new(app.is_loading, &app.settings.api_url, &app.theme),
        area,
    );
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let (title, border_style) = if app.is_loading {
        (
            " waiting for reply… ",
            Style::default().fg(app.theme.text_muted),
        )
    } else {
        (" prompt ", Style::default().fg(app.theme.border))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    app.input.set_block(block);
    frame.render_widget(&app.input, area);
}
