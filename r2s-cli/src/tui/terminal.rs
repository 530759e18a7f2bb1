//! Raw-mode terminal lifecycle for the scan console.

use std::io::{self, Stdout};

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type ConsoleTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Holds the terminal in raw mode + alternate screen for the UI's
/// lifetime and restores it on drop, panics included.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Claim the terminal. Returns the guard together with a cleared
    /// ratatui terminal drawing to stdout.
    pub fn setup() -> io::Result<(Self, ConsoleTerminal)> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
        let guard = Self;

        let mut term = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        term.clear()?;
        Ok((guard, term))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
    }
}
