//! Scan screen — form for setting up a scan.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use r2s_core::timeout_secs;
use r2s_types::Lang;

use crate::tui::app::{Action, FormScreenState};
use crate::tui::strings::strings;
use crate::tui::theme;

// ---------------------------------------------------------------------------
// Field indices
// ---------------------------------------------------------------------------

pub const FIELD_HOST: usize = 0;
pub const FIELD_MODE: usize = 1;
pub const FIELD_PATHS: usize = 2;
pub const FIELD_WAF: usize = 3;
pub const FIELD_WINDOWS: usize = 4;
pub const FIELD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn render(
    frame: &mut ratatui::Frame,
    area: Rect,
    state: &mut FormScreenState,
    lang: Lang,
    scan_running: bool,
) {
    let s = strings(lang);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", s.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let f = state.focused_field;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("  {}", s.subtitle),
        theme::TEXT_DIM,
    )));
    lines.push(Line::from(""));

    lines.push(text_field(
        &format!("  {}", s.host_label),
        &state.form.host,
        s.host_placeholder,
        f == FIELD_HOST,
    ));
    lines.push(cycle_field(
        &format!("  {}", s.mode_label),
        s.mode_name(state.form.mode),
        f == FIELD_MODE,
    ));
    lines.push(Line::from(Span::styled(
        format!("               {}", s.mode_desc(state.form.mode)),
        theme::TEXT_DIM,
    )));
    lines.push(text_field(
        &format!("  {}", s.paths_label),
        &state.form.paths,
        s.paths_placeholder,
        f == FIELD_PATHS,
    ));
    lines.push(Line::from(""));

    lines.push(toggle_field(
        &format!("  {}", s.waf_label),
        state.form.waf_bypass,
        f == FIELD_WAF,
    ));
    lines.push(toggle_field(
        &format!("  {}", s.windows_label),
        state.form.windows,
        f == FIELD_WINDOWS,
    ));
    lines.push(Line::from(""));

    // Derived timeout, so the operator knows what the service will use
    lines.push(Line::from(Span::styled(
        format!("  timeout: {}s", timeout_secs(state.form.waf_bypass)),
        theme::TEXT_DIM,
    )));
    lines.push(Line::from(""));

    if scan_running {
        lines.push(Line::from(Span::styled(
            format!("  {}", s.scanning),
            theme::TEXT_WARN,
        )));
    } else if let Some(ref err) = state.error {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            theme::TEXT_ERROR,
        )));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", s.start_hint),
        theme::TEXT_DIM,
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

// ---------------------------------------------------------------------------
// Key handling
// ---------------------------------------------------------------------------

pub fn handle_key(key: KeyEvent, state: &mut FormScreenState, scan_running: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    match key.code {
        KeyCode::Esc => {
            actions.push(Action::Quit);
        }
        KeyCode::Tab | KeyCode::Down => {
            state.focused_field = (state.focused_field + 1) % FIELD_COUNT;
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focused_field = if state.focused_field == 0 {
                FIELD_COUNT - 1
            } else {
                state.focused_field - 1
            };
        }
        KeyCode::Enter if !scan_running => {
            actions.push(Action::StartScan);
        }
        KeyCode::Char(' ') if is_toggle_field(state.focused_field) => {
            toggle_value(state);
        }
        KeyCode::Left if state.focused_field == FIELD_MODE => {
            state.form.mode = cycle_mode(state.form.mode, -1);
        }
        KeyCode::Right if state.focused_field == FIELD_MODE => {
            state.form.mode = cycle_mode(state.form.mode, 1);
        }
        KeyCode::Backspace if is_text_field(state.focused_field) => {
            if let Some(field) = active_text_mut(state) {
                field.pop();
            }
        }
        KeyCode::Char(c) if is_text_field(state.focused_field) => {
            if let Some(field) = active_text_mut(state) {
                field.push(c);
            }
        }
        KeyCode::Char('q') => {
            actions.push(Action::Quit);
        }
        _ => {}
    }
    actions
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab", "navigate"),
        ("</>", "cycle"),
        ("Space", "toggle"),
        ("Enter", "scan"),
        ("F4", "language"),
        ("q", "quit"),
    ]
}

// ---------------------------------------------------------------------------
// Field type helpers
// ---------------------------------------------------------------------------

fn is_text_field(idx: usize) -> bool {
    matches!(idx, FIELD_HOST | FIELD_PATHS)
}

fn is_toggle_field(idx: usize) -> bool {
    matches!(idx, FIELD_WAF | FIELD_WINDOWS)
}

fn active_text_mut(state: &mut FormScreenState) -> Option<&mut String> {
    match state.focused_field {
        FIELD_HOST => Some(&mut state.form.host),
        FIELD_PATHS => Some(&mut state.form.paths),
        _ => None,
    }
}

fn toggle_value(state: &mut FormScreenState) {
    match state.focused_field {
        FIELD_WAF => state.form.waf_bypass = !state.form.waf_bypass,
        FIELD_WINDOWS => state.form.windows = !state.form.windows,
        _ => {}
    }
}

fn cycle_mode(mode: r2s_types::ScanMode, dir: isize) -> r2s_types::ScanMode {
    use r2s_types::ScanMode;
    let len = ScanMode::ALL.len() as isize;
    let i = ScanMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or(0) as isize;
    ScanMode::ALL[((i + dir + len) % len) as usize]
}

// ---------------------------------------------------------------------------
// Rendering helpers
// ---------------------------------------------------------------------------

fn text_field(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        theme::TEXT_ACCENT
    } else {
        ratatui::style::Style::default()
    };
    let display = if value.is_empty() {
        Span::styled(
            format!("[{placeholder}]"),
            if focused {
                theme::TEXT_ACCENT
            } else {
                theme::TEXT_DIM
            },
        )
    } else {
        Span::styled(format!("[{value}]"), style)
    };
    Line::from(vec![
        Span::styled(label.to_string(), theme::TEXT_BOLD),
        display,
    ])
}

fn cycle_field(label: &str, value: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        theme::TEXT_ACCENT
    } else {
        ratatui::style::Style::default()
    };
    Line::from(vec![
        Span::styled(label.to_string(), theme::TEXT_BOLD),
        Span::styled(format!("\u{25C0} {value} \u{25B6}"), style),
    ])
}

fn toggle_field(label: &str, checked: bool, focused: bool) -> Line<'static> {
    let style = if focused {
        theme::TEXT_ACCENT
    } else {
        ratatui::style::Style::default()
    };
    let mark = if checked { "x" } else { " " };
    Line::from(vec![
        Span::styled(label.to_string(), theme::TEXT_BOLD),
        Span::styled(format!("[{mark}]"), style),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use r2s_types::ScanMode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_edits_focused_text_field() {
        let mut state = FormScreenState::default();
        for c in "abc".chars() {
            handle_key(key(KeyCode::Char(c)), &mut state, false);
        }
        assert_eq!(state.form.host, "abc");
        handle_key(key(KeyCode::Backspace), &mut state, false);
        assert_eq!(state.form.host, "ab");
    }

    #[test]
    fn tab_wraps_around_fields() {
        let mut state = FormScreenState::default();
        for _ in 0..FIELD_COUNT {
            handle_key(key(KeyCode::Tab), &mut state, false);
        }
        assert_eq!(state.focused_field, FIELD_HOST);
        handle_key(key(KeyCode::BackTab), &mut state, false);
        assert_eq!(state.focused_field, FIELD_WINDOWS);
    }

    #[test]
    fn space_toggles_only_toggle_fields() {
        let mut state = FormScreenState::default();
        state.focused_field = FIELD_WAF;
        handle_key(key(KeyCode::Char(' ')), &mut state, false);
        assert!(state.form.waf_bypass);

        state.focused_field = FIELD_HOST;
        handle_key(key(KeyCode::Char(' ')), &mut state, false);
        assert_eq!(state.form.host, " ");
        assert!(state.form.waf_bypass);
    }

    #[test]
    fn arrows_cycle_mode() {
        let mut state = FormScreenState::default();
        state.focused_field = FIELD_MODE;
        handle_key(key(KeyCode::Right), &mut state, false);
        assert_eq!(state.form.mode, ScanMode::Safe);
        handle_key(key(KeyCode::Left), &mut state, false);
        assert_eq!(state.form.mode, ScanMode::Rce);
        handle_key(key(KeyCode::Left), &mut state, false);
        assert_eq!(state.form.mode, ScanMode::VercelBypass);
    }

    #[test]
    fn enter_requests_scan_unless_running() {
        let mut state = FormScreenState::default();
        let actions = handle_key(key(KeyCode::Enter), &mut state, false);
        assert!(matches!(actions.as_slice(), [Action::StartScan]));

        let actions = handle_key(key(KeyCode::Enter), &mut state, true);
        assert!(actions.is_empty());
    }

    #[test]
    fn footer_advertises_the_real_language_key() {
        // The toggle is bound to F4 in the app, not a printable key.
        assert!(footer_hints().contains(&("F4", "language")));
    }

    #[test]
    fn q_quits_only_outside_text_fields() {
        let mut state = FormScreenState::default();
        let actions = handle_key(key(KeyCode::Char('q')), &mut state, false);
        assert!(actions.is_empty());
        assert_eq!(state.form.host, "q");

        state.focused_field = FIELD_WAF;
        let actions = handle_key(key(KeyCode::Char('q')), &mut state, false);
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }
}
