//! About screen — what the scanner does and how to drive it.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use r2s_types::Lang;

use crate::tui::app::{Action, HelpScreenState, Screen};
use crate::tui::strings::strings;
use crate::tui::theme;

pub fn render(frame: &mut ratatui::Frame, area: Rect, state: &mut HelpScreenState, lang: Lang) {
    let s = strings(lang);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} \u{2014} {} ", s.tab_about, s.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = s.about.iter().map(|l| Line::from(*l)).collect();

    lines.push(Line::from(Span::styled(
        "  === Keys ===",
        theme::TEXT_BOLD,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from("  F1            Scan form"));
    lines.push(Line::from("  F2            Result"));
    lines.push(Line::from("  F3            About"));
    lines.push(Line::from("  F4            Switch language (EN / \u{4e2d}\u{6587})"));
    lines.push(Line::from("  Ctrl+C        Quit"));
    lines.push(Line::from(""));

    let visible: Vec<Line> = lines.into_iter().skip(state.scroll as usize).collect();
    let paragraph = Paragraph::new(visible).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

pub fn handle_key(key: KeyEvent, state: &mut HelpScreenState) -> Vec<Action> {
    let mut actions = Vec::new();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            actions.push(Action::SwitchScreen(Screen::Form));
        }
        KeyCode::Down | KeyCode::Char('j') => state.scroll = state.scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => state.scroll = state.scroll.saturating_sub(1),
        KeyCode::PageDown => state.scroll = state.scroll.saturating_add(10),
        KeyCode::PageUp => state.scroll = state.scroll.saturating_sub(10),
        KeyCode::Home => state.scroll = 0,
        _ => {}
    }
    actions
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![("j/k", "scroll"), ("PgUp/Dn", "page"), ("q", "back")]
}
