//! Result screen — renders the current scan lifecycle state.

use chrono::DateTime;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use r2s_core::ScanState;
use r2s_types::{Lang, ScanResult, Verdict};

use crate::tui::app::{Action, Screen};
use crate::tui::strings::strings;
use crate::tui::theme;

pub fn render(frame: &mut ratatui::Frame, area: Rect, state: &ScanState, lang: Lang) {
    let s = strings(lang);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", s.tab_result));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match state {
        ScanState::Idle => vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", s.no_result), theme::TEXT_DIM)),
        ],
        ScanState::InFlight => vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}", s.scanning), theme::TEXT_WARN)),
        ],
        ScanState::Failed(message) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", s.error_title),
                theme::TEXT_ERROR,
            )),
            Line::from(""),
            Line::from(Span::styled(format!("  {message}"), theme::TEXT_ERROR)),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", s.new_scan_hint),
                theme::TEXT_DIM,
            )),
        ],
        ScanState::Succeeded(result) => result_lines(result, lang),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Badge style for a verdict: alert red, confirmation green, warning
/// yellow for the indeterminate case.
pub fn verdict_style(verdict: Verdict) -> ratatui::style::Style {
    match verdict {
        Verdict::Vulnerable => theme::VERDICT_VULNERABLE,
        Verdict::NotVulnerable => theme::VERDICT_SAFE,
        Verdict::Indeterminate => theme::VERDICT_WARN,
    }
}

fn result_lines(result: &ScanResult, lang: Lang) -> Vec<Line<'static>> {
    let s = strings(lang);
    let verdict = result.verdict();
    let badge_style = verdict_style(verdict);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(s.verdict_badge(verdict).to_string(), badge_style),
        ]),
        Line::from(""),
        row(s.row_host, result.host.clone()),
    ];

    if let Some(code) = result.status_code {
        lines.push(row(s.row_status, code.to_string()));
    }
    if let Some(ref tested) = result.tested_url {
        lines.push(row(s.row_tested, tested.clone()));
    }
    // Only worth showing when the target actually redirected
    if let Some(redirect) = result.redirect_url() {
        lines.push(row(s.row_redirect, redirect.to_string()));
    }
    if let Some(ref detail) = result.error {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", s.row_detail), theme::TEXT_BOLD),
            Span::styled(detail.clone(), theme::TEXT_WARN),
        ]));
    }
    lines.push(row(s.row_time, format_timestamp(&result.timestamp)));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", s.new_scan_hint),
        theme::TEXT_DIM,
    )));
    lines
}

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<14}"), theme::TEXT_BOLD),
        Span::raw(value),
    ])
}

/// Render an ISO-8601 timestamp in a readable form; unparsable input is
/// shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn handle_key(key: KeyEvent) -> Vec<Action> {
    let mut actions = Vec::new();
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => {
            actions.push(Action::SwitchScreen(Screen::Form));
        }
        KeyCode::Char('q') => {
            actions.push(Action::Quit);
        }
        _ => {}
    }
    actions
}

pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    vec![("Enter", "new scan"), ("F4", "language"), ("q", "quit")]
}
