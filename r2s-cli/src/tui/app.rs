//! App state machine and screen routing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;

use r2s_client::ScanApiClient;
use r2s_core::{ScanController, ScanForm, ScanOutcome};
use r2s_types::Lang;

use super::screens;
use super::strings::strings;
use super::theme;

// ---------------------------------------------------------------------------
// Screen enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Form,
    Result,
    Help,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Form, Screen::Result, Screen::Help];

    pub fn label(&self, lang: Lang) -> &'static str {
        let s = strings(lang);
        match self {
            Self::Form => s.tab_scan,
            Self::Result => s.tab_result,
            Self::Help => s.tab_about,
        }
    }
}

// ---------------------------------------------------------------------------
// Actions that screens can request
// ---------------------------------------------------------------------------

pub enum Action {
    Quit,
    SwitchScreen(Screen),
    StartScan,
    SwitchLang,
}

// ---------------------------------------------------------------------------
// Per-screen state structs
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FormScreenState {
    pub form: ScanForm,
    pub focused_field: usize,
    pub error: Option<String>,
}

#[derive(Default)]
pub struct HelpScreenState {
    pub scroll: u16,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub screen: Screen,
    pub lang: Lang,

    pub form_state: FormScreenState,
    pub help_state: HelpScreenState,

    pub controller: ScanController,
    pub should_quit: bool,

    client: ScanApiClient,
}

impl App {
    pub fn new(client: ScanApiClient, lang: Lang, form: Option<ScanForm>) -> Self {
        Self {
            screen: Screen::Form,
            lang,
            form_state: FormScreenState {
                form: form.unwrap_or_default(),
                ..FormScreenState::default()
            },
            help_state: HelpScreenState::default(),
            controller: ScanController::new(),
            should_quit: false,
            client,
        }
    }

    pub fn take_outcome_rx(&mut self) -> Option<mpsc::Receiver<ScanOutcome>> {
        self.controller.take_outcome_rx()
    }

    /// Build the form into a request and hand it to the controller. Invalid
    /// input shows an inline error; a submit while a scan is running is a
    /// no-op.
    pub fn start_scan(&mut self) {
        match self.form_state.form.build() {
            Ok(request) => {
                self.form_state.error = None;
                if self.controller.submit(self.client.clone(), request) {
                    self.screen = Screen::Result;
                }
            }
            Err(_) => {
                self.form_state.error = Some(strings(self.lang).host_required.to_string());
            }
        }
    }

    pub fn handle_outcome(&mut self, outcome: ScanOutcome) {
        self.controller.finish(outcome);
        self.screen = Screen::Result;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // Global keys: F1-F3 switch screens, F4 switches language
        let global = match key.code {
            KeyCode::F(1) => Some(Action::SwitchScreen(Screen::Form)),
            KeyCode::F(2) => Some(Action::SwitchScreen(Screen::Result)),
            KeyCode::F(3) => Some(Action::SwitchScreen(Screen::Help)),
            KeyCode::F(4) => Some(Action::SwitchLang),
            _ => None,
        };
        if let Some(action) = global {
            self.apply_action(action);
            return;
        }

        let running = self.controller.state().is_in_flight();
        let actions = match self.screen {
            Screen::Form => screens::form::handle_key(key, &mut self.form_state, running),
            Screen::Result => screens::result::handle_key(key),
            Screen::Help => screens::help::handle_key(key, &mut self.help_state),
        };

        for action in actions {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchScreen(s) => self.screen = s,
            Action::StartScan => self.start_scan(),
            Action::SwitchLang => self.lang = self.lang.next(),
        }
    }

    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(size);

        render_tab_bar(frame, chunks[0], self.screen, self.lang);

        match self.screen {
            Screen::Form => screens::form::render(
                frame,
                chunks[1],
                &mut self.form_state,
                self.lang,
                self.controller.state().is_in_flight(),
            ),
            Screen::Result => {
                screens::result::render(frame, chunks[1], self.controller.state(), self.lang)
            }
            Screen::Help => screens::help::render(frame, chunks[1], &mut self.help_state, self.lang),
        }

        let hints = match self.screen {
            Screen::Form => screens::form::footer_hints(),
            Screen::Result => screens::result::footer_hints(),
            Screen::Help => screens::help::footer_hints(),
        };
        render_footer(frame, chunks[2], &hints);
    }
}

// ---------------------------------------------------------------------------
// Shared widgets
// ---------------------------------------------------------------------------

fn render_tab_bar(frame: &mut ratatui::Frame, area: Rect, active: Screen, lang: Lang) {
    let mut spans = Vec::new();
    for screen in Screen::ALL {
        let style = if screen == active {
            theme::TAB_ACTIVE
        } else {
            theme::TAB_INACTIVE
        };
        spans.push(Span::styled(format!(" {} ", screen.label(lang)), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        format!("  [{}]", lang.label()),
        theme::TEXT_ACCENT,
    ));
    spans.push(Span::styled(
        format!("  r2s v{}", env!("CARGO_PKG_VERSION")),
        theme::TEXT_DIM,
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut ratatui::Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled(format!(" {key}"), theme::FOOTER_KEY));
        spans.push(Span::raw(format!(":{desc}  ")));
    }
    spans.push(Span::styled(" F1-F3", theme::FOOTER_KEY));
    spans.push(Span::raw(":screens"));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(theme::FOOTER_BG),
        area,
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use r2s_client::ApiConfig;
    use r2s_core::ScanState;

    fn test_app() -> App {
        let client = ScanApiClient::new(&ApiConfig::default());
        App::new(client, Lang::En, None)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn empty_host_shows_inline_error() {
        let mut app = test_app();
        app.start_scan();
        assert_eq!(
            app.form_state.error.as_deref(),
            Some("Target host is required")
        );
        assert_eq!(*app.controller.state(), ScanState::Idle);
        assert_eq!(app.screen, Screen::Form);
    }

    #[tokio::test]
    async fn start_scan_moves_to_result_screen() {
        let mut app = test_app();
        app.form_state.form.host = "example.com".to_string();
        app.start_scan();
        assert_eq!(*app.controller.state(), ScanState::InFlight);
        assert_eq!(app.screen, Screen::Result);
        assert!(app.take_outcome_rx().is_some());
    }

    #[tokio::test]
    async fn submit_while_in_flight_is_ignored() {
        let mut app = test_app();
        app.form_state.form.host = "example.com".to_string();
        app.start_scan();
        let rx = app.take_outcome_rx();
        assert!(rx.is_some());

        app.start_scan();
        assert_eq!(*app.controller.state(), ScanState::InFlight);
        // No new channel: the first scan is still the one in flight
        assert!(app.take_outcome_rx().is_none());
    }

    #[tokio::test]
    async fn outcome_settles_and_shows_result() {
        let mut app = test_app();
        app.screen = Screen::Form;
        app.handle_outcome(ScanOutcome::Failed("Unknown error occurred".to_string()));
        assert_eq!(
            *app.controller.state(),
            ScanState::Failed("Unknown error occurred".to_string())
        );
        assert_eq!(app.screen, Screen::Result);
    }

    #[tokio::test]
    async fn language_switch_keeps_scan_state() {
        let mut app = test_app();
        app.form_state.form.host = "example.com".to_string();
        app.start_scan();

        app.handle_key(key(KeyCode::F(4)));
        assert_eq!(app.lang, Lang::Zh);
        assert_eq!(*app.controller.state(), ScanState::InFlight);
        assert_eq!(app.form_state.form.host, "example.com");

        app.handle_key(key(KeyCode::F(4)));
        assert_eq!(app.lang, Lang::En);
    }

    #[tokio::test]
    async fn function_keys_switch_screens() {
        let mut app = test_app();
        app.handle_key(key(KeyCode::F(3)));
        assert_eq!(app.screen, Screen::Help);
        app.handle_key(key(KeyCode::F(2)));
        assert_eq!(app.screen, Screen::Result);
        app.handle_key(key(KeyCode::F(1)));
        assert_eq!(app.screen, Screen::Form);
    }

    #[tokio::test]
    async fn ctrl_c_quits() {
        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
