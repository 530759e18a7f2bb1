//! Color constants and styling helpers for the TUI.

use ratatui::style::{Color, Modifier, Style};

// Tab bar
pub const TAB_ACTIVE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);
pub const TAB_INACTIVE: Style = Style::new().fg(Color::DarkGray).bg(Color::Reset);

// Verdict badges
pub const VERDICT_VULNERABLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Red)
    .add_modifier(Modifier::BOLD);
pub const VERDICT_SAFE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Green)
    .add_modifier(Modifier::BOLD);
pub const VERDICT_WARN: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

// Text
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);
pub const TEXT_ACCENT: Style = Style::new().fg(Color::Cyan);
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);
pub const TEXT_WARN: Style = Style::new().fg(Color::Yellow);
pub const TEXT_BOLD: Style = Style::new().add_modifier(Modifier::BOLD);

// Footer
pub const FOOTER_KEY: Style = Style::new().fg(Color::Yellow);
pub const FOOTER_BG: Style = Style::new().bg(Color::DarkGray);
