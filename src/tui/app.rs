//! TUI application state and event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{Input, TextArea};

use crate::agent::{AgentReply, Dispatcher};
use crate::api::TravelApi;
use crate::config::Settings;

use super::event::{AppEvent, EventHandler};
use super::state::{Conversation, MessageRole, TraceSelection};
use super::theme::Theme;
use super::ui;
use super::widgets::MessageListState;

/// The chat application.
///
/// Owns the conversation plus the two pieces of view state the trace panel
/// depends on: the selection and the affordance cursor. The conversation is
/// absent until the first message is sent.
pub struct App {
    pub theme: Theme,
    pub settings: Settings,
    pub conversation: Option<Conversation>,
    pub trace: TraceSelection,
    /// Concierge message the trace affordance points at
    pub cursor: Option<usize>,
    /// True while a reply is outstanding; the composer is disabled
    pub is_loading: bool,
    pub input: TextArea<'static>,
    pub list_state: MessageListState,
    dispatcher: Dispatcher,
    should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let dispatcher = Dispatcher::new(TravelApi::new(settings.api_url.as_str()));

        Ok(Self {
            theme: Theme::dark(),
            settings,
            conversation: None,
            trace: TraceSelection::default(),
            cursor: None,
            is_loading: false,
            input: Self::build_input(),
            list_state: MessageListState::default(),
            dispatcher,
            should_quit: false,
        })
    }

    fn build_input() -> TextArea<'static> {
        let mut input = TextArea::default();
        input.set_placeholder_text("Ask anything...");
        input.set_cursor_line_style(ratatui::style::Style::default());
        input
    }

    /// Run until the user quits, restoring the terminal on the way out.
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut events = EventHandler::new(Duration::from_millis(100));
        let tx = events.sender();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;
            if let Some(event) = events.next().await {
                self.handle_event(event, &tx);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: AppEvent, tx: &UnboundedSender<AppEvent>) {
        match event {
            AppEvent::Key(key) => self.handle_key(key, tx),
            AppEvent::Reply(reply) => self.finish_turn(reply),
            AppEvent::Resize(..) | AppEvent::Tick => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent, tx: &UnboundedSender<AppEvent>) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => self.toggle_trace_at_cursor(),
            (KeyModifiers::ALT, KeyCode::Up) => self.move_cursor(-1),
            (KeyModifiers::ALT, KeyCode::Down) => self.move_cursor(1),
            (_, KeyCode::PageUp) => self.list_state.scroll_up(5),
            (_, KeyCode::PageDown) => self.list_state.scroll_down(5),
            (_, KeyCode::Esc) => self.trace.clear(),
            (KeyModifiers::NONE, KeyCode::Enter) => {
                // The composer is disabled while a reply is outstanding
                if !self.is_loading && !self.input.is_empty() {
                    self.submit(tx);
                }
            }
            (KeyModifiers::SHIFT, KeyCode::Enter) | (KeyModifiers::ALT, KeyCode::Enter) => {
                if !self.is_loading {
                    self.input.insert_newline();
                }
            }
            _ => {
                if !self.is_loading {
                    self.input.input(Input::from(key));
                }
            }
        }
    }

    /// Indices of concierge messages, the only ones with a trace affordance.
    fn agent_indices(&self) -> Vec<usize> {
        self.conversation
            .as_ref()
            .map(|conversation| {
                conversation
                    .messages
                    .iter()
                    .enumerate()
                    .filter(|(_, message)| message.role == MessageRole::Agent)
                    .map(|(index, _)| index)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn move_cursor(&mut self, delta: i32) {
        let agents = self.agent_indices();
        if agents.is_empty() {
            return;
        }
        let current = self
            .cursor
            .and_then(|cursor| agents.iter().position(|&index| index == cursor));
        let next = match current {
            None => agents.len() - 1,
            Some(position) if delta < 0 => position.saturating_sub(1),
            Some(position) => (position + 1).min(agents.len() - 1),
        };
        self.cursor = Some(agents[next]);
    }

    fn toggle_trace_at_cursor(&mut self) {
        let target = self.cursor.or_else(|| self.agent_indices().last().copied());
        let Some(index) = target else {
            return;
        };
        let Some(conversation) = &self.conversation else {
            return;
        };
        self.trace.toggle(conversation, index);
        self.cursor = Some(index);
    }

    fn submit(&mut self, tx: &UnboundedSender<AppEvent>) {
        let prompt = self.input.lines().join("\n").trim().to_string();
        if prompt.is_empty() {
            return;
        }
        self.input = Self::build_input();

        let conversation = self.conversation.get_or_insert_with(Conversation::new);
        conversation.push_user(prompt.clone());
        self.is_loading = true;
        self.list_state.scroll_to_bottom();

        let dispatcher = self.dispatcher.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let reply = dispatcher.handle(&prompt).await;
            // Receiver gone means the app is shutting down
            let _ = tx.send(AppEvent::Reply(reply));
        });
    }

    fn finish_turn(&mut self, reply: AgentReply) {
        let conversation = self.conversation.get_or_insert_with(Conversation::new);
        conversation.push_agent(reply.content, Some(reply.trace));
        self.cursor = Some(conversation.len() - 1);
        self.is_loading = false;
        self.list_state.scroll_to_bottom();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_app() -> App {
        App::new(Settings::default()).unwrap()
    }

    fn reply(content: &str) -> AgentReply {
        AgentReply {
            content: content.to_string(),
            trace: vec![json!({"step": "intent", "intent": "help"})],
        }
    }

    #[test]
    fn finish_turn_appends_and_unlocks_the_composer() {
        let mut app = test_app();
        app.conversation = Some(Conversation::new());
        app.conversation.as_mut().unwrap().push_user("Hi");
        app.is_loading = true;

        app.finish_turn(reply("Hello"));

        let conversation = app.conversation.as_ref().unwrap();
        assert_eq!(conversation.len(), 2);
        assert!(!app.is_loading);
        assert_eq!(app.cursor, Some(1));
    }

    #[test]
    fn trace_toggle_defaults_to_latest_reply() {
        let mut app = test_app();
        app.conversation = Some(Conversation::new());
        app.finish_turn(reply("first"));
        app.finish_turn(reply("second"));
        app.cursor = None;

        app.toggle_trace_at_cursor();

        assert_eq!(app.trace.selected(), Some(1));
        assert_eq!(app.cursor, Some(1));
    }

    #[test]
    fn toggle_without_a_conversation_is_a_no_op() {
        let mut app = test_app();
        app.toggle_trace_at_cursor();
        assert_eq!(app.trace.selected(), None);
    }

    #[test]
    fn composer_is_disabled_while_loading() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut app = test_app();
        app.is_loading = true;

        // Typing is ignored
        app.handle_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            &tx,
        );
        assert!(app.input.is_empty());

        // And Enter dispatches nothing
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &tx);
        assert!(app.conversation.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn enter_submits_and_locks_the_composer() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut app = test_app();

        app.handle_key(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            &tx,
        );
        app.handle_key(
            KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE),
            &tx,
        );
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &tx);

        assert!(app.is_loading);
        assert!(app.input.is_empty());
        let conversation = app.conversation.as_ref().unwrap();
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages[0].content, "hi");
    }

    #[test]
    fn cursor_moves_over_concierge_messages_only() {
        let mut app = test_app();
        app.conversation = Some(Conversation::new());
        app.conversation.as_mut().unwrap().push_user("Hi");
        app.finish_turn(reply("first"));
        app.conversation.as_mut().unwrap().push_user("More");
        app.finish_turn(reply("second"));
        // Messages: user(0), agent(1), user(2), agent(3)

        app.cursor = None;
        app.move_cursor(-1);
        assert_eq!(app.cursor, Some(3));
        app.move_cursor(-1);
        assert_eq!(app.cursor, Some(1));
        app.move_cursor(-1);
        assert_eq!(app.cursor, Some(1));
        app.move_cursor(1);
        assert_eq!(app.cursor, Some(3));
    }
}
