//! Interactive terminal UI for r2s.
//!
//! Three screens: Scan form, Result, About.  Navigate with F1-F3,
//! switch language with F4.  Full keyboard-driven interface.

mod app;
mod event;
mod screens;
mod strings;
mod terminal;
mod theme;

use std::time::Duration;

use r2s_client::{ApiConfig, ScanApiClient};
use r2s_core::ScanForm;
use r2s_types::Lang;

use app::App;
use event::{AppEvent, EventHandler};
use terminal::TerminalGuard;

/// Run the interactive TUI.
///
/// If `form` is present (a host was given on the command line), a scan
/// starts immediately.  Otherwise the form opens for interactive setup.
pub async fn run_tui(api: ApiConfig, lang: Lang, form: Option<ScanForm>) -> anyhow::Result<()> {
    let auto_start = form.is_some();

    // Setup terminal
    let (_guard, mut term) = TerminalGuard::setup()?;

    // Create app
    let client = ScanApiClient::new(&api);
    let mut app = App::new(client, lang, form);

    if auto_start {
        app.start_scan();
    }

    // Create event handler
    let mut events = EventHandler::new(Duration::from_millis(100));

    // If a scan started, feed its outcome into the handler
    if let Some(rx) = app.take_outcome_rx() {
        events.set_outcome_receiver(rx);
    }

    // Main loop
    loop {
        term.draw(|frame| app.render(frame))?;

        match events.next().await? {
            AppEvent::Key(key) => {
                app.handle_key(key);
                // If a scan was just started (from the form screen),
                // pass the new receiver to the event handler
                if let Some(rx) = app.take_outcome_rx() {
                    events.set_outcome_receiver(rx);
                }
            }
            AppEvent::Outcome(outcome) => app.handle_outcome(outcome),
            AppEvent::Tick => {}
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
