//! Unified event loop merging crossterm input, tick, and scan outcomes.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use r2s_core::ScanOutcome;

/// Unified event type consumed by the main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Keyboard input (already filtered to Press only).
    Key(KeyEvent),
    /// 100ms render tick.
    Tick,
    /// The in-flight scan settled.
    Outcome(ScanOutcome),
    /// Terminal resized.
    #[allow(dead_code)]
    Resize(u16, u16),
}

/// Merges crossterm input and scan outcomes into a single stream.
pub struct EventHandler {
    tick_rate: Duration,
    outcome_rx: Option<mpsc::Receiver<ScanOutcome>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            outcome_rx: None,
        }
    }

    /// Attach the outcome receiver of a freshly submitted scan.
    pub fn set_outcome_receiver(&mut self, rx: mpsc::Receiver<ScanOutcome>) {
        self.outcome_rx = Some(rx);
    }

    /// Wait for the next event.  Returns `Tick` if nothing happens within the tick rate.
    pub async fn next(&mut self) -> anyhow::Result<AppEvent> {
        // Drain any pending outcome first (non-blocking)
        if let Some(outcome) = self.try_outcome() {
            return Ok(AppEvent::Outcome(outcome));
        }

        // Poll crossterm with the tick timeout
        if event::poll(self.tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(AppEvent::Key(key));
                }
                Event::Resize(w, h) => return Ok(AppEvent::Resize(w, h)),
                _ => {}
            }
        }

        // Check again after the poll wait
        if let Some(outcome) = self.try_outcome() {
            return Ok(AppEvent::Outcome(outcome));
        }

        Ok(AppEvent::Tick)
    }

    fn try_outcome(&mut self) -> Option<ScanOutcome> {
        let rx = self.outcome_rx.as_mut()?;
        match rx.try_recv() {
            Ok(outcome) => {
                // One outcome per submission; drop the drained channel.
                self.outcome_rx = None;
                Some(outcome)
            }
            Err(_) => None,
        }
    }
}
