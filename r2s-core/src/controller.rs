//! Single-flight scan lifecycle.
//!
//! At most one scan is in flight at a time. Submitting while a scan is
//! running is a no-op; there is no cancellation. The running scan reports
//! back over a channel that the event loop drains.

use r2s_client::{ClientError, ScanApiClient};
use r2s_types::{ScanRequest, ScanResult};
use std::future::Future;
use tokio::sync::mpsc;
use tracing::debug;

/// Where the current (or most recent) scan stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanState {
    /// No scan has run yet, or the last payload was cleared.
    #[default]
    Idle,
    /// A scan is running; submissions are ignored until it settles.
    InFlight,
    /// The service returned a result, including the indeterminate
    /// `vulnerable: null` case.
    Succeeded(Box<ScanResult>),
    /// The scan settled without a result; holds the display message.
    Failed(String),
}

impl ScanState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

/// Terminal outcome of one scan, as sent back from the worker task.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    Succeeded(Box<ScanResult>),
    Failed(String),
}

impl From<Result<ScanResult, ClientError>> for ScanOutcome {
    fn from(result: Result<ScanResult, ClientError>) -> Self {
        match result {
            Ok(res) => Self::Succeeded(Box::new(res)),
            Err(err) => Self::Failed(err.message().to_string()),
        }
    }
}

/// Drives scans through Idle -> InFlight -> Succeeded/Failed.
#[derive(Debug, Default)]
pub struct ScanController {
    state: ScanState,
    outcome_rx: Option<mpsc::Receiver<ScanOutcome>>,
}

impl ScanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Submit a scan against the service. Returns false without side
    /// effects when a scan is already in flight.
    pub fn submit(&mut self, client: ScanApiClient, request: ScanRequest) -> bool {
        self.submit_with(async move { client.scan(&request).await.into() })
    }

    /// Like [`submit`](Self::submit) but runs an arbitrary future as the
    /// scan body. The future is spawned on the current tokio runtime.
    pub fn submit_with<F>(&mut self, scan: F) -> bool
    where
        F: Future<Output = ScanOutcome> + Send + 'static,
    {
        if !self.begin() {
            return false;
        }
        let (tx, rx) = mpsc::channel(1);
        self.outcome_rx = Some(rx);
        tokio::spawn(async move {
            let outcome = scan.await;
            // Receiver may be gone if the app shut down mid-scan.
            let _ = tx.send(outcome).await;
        });
        true
    }

    /// Transition to InFlight, clearing any previous payload. Returns
    /// false when a scan is already running.
    pub fn begin(&mut self) -> bool {
        if self.state.is_in_flight() {
            debug!("scan already in flight, ignoring submit");
            return false;
        }
        self.state = ScanState::InFlight;
        true
    }

    /// Settle the in-flight scan with its outcome.
    pub fn finish(&mut self, outcome: ScanOutcome) {
        self.state = match outcome {
            ScanOutcome::Succeeded(result) => ScanState::Succeeded(result),
            ScanOutcome::Failed(message) => ScanState::Failed(message),
        };
    }

    /// Hand the outcome channel to the event loop. Called once per
    /// submission; subsequent calls return None until the next submit.
    pub fn take_outcome_rx(&mut self) -> Option<mpsc::Receiver<ScanOutcome>> {
        self.outcome_rx.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn sample_result() -> ScanResult {
        ScanResult {
            host: "example.com".to_string(),
            vulnerable: Some(true),
            status_code: Some(200),
            error: None,
            final_url: None,
            tested_url: Some("https://example.com/".to_string()),
            timestamp: "2025-12-05T10:30:00Z".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_moves_to_in_flight_and_clears_payload() {
        let mut ctl = ScanController::new();
        ctl.finish(ScanOutcome::Failed("boom".to_string()));
        assert!(matches!(ctl.state(), ScanState::Failed(_)));

        assert!(ctl.submit_with(async { ScanOutcome::Failed("x".to_string()) }));
        assert_eq!(*ctl.state(), ScanState::InFlight);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_a_no_op() {
        let mut ctl = ScanController::new();
        let launches = Arc::new(AtomicUsize::new(0));

        let l1 = launches.clone();
        assert!(ctl.submit_with(async move {
            l1.fetch_add(1, Ordering::SeqCst);
            ScanOutcome::Failed("first".to_string())
        }));

        let l2 = launches.clone();
        assert!(!ctl.submit_with(async move {
            l2.fetch_add(1, Ordering::SeqCst);
            ScanOutcome::Failed("second".to_string())
        }));

        let mut rx = ctl.take_outcome_rx().unwrap();
        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome, ScanOutcome::Failed("first".to_string()));
        assert_eq!(launches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn outcome_settles_the_state() {
        let mut ctl = ScanController::new();
        let result = sample_result();
        let sent = result.clone();
        assert!(ctl.submit_with(async move { ScanOutcome::Succeeded(Box::new(sent)) }));

        let mut rx = ctl.take_outcome_rx().unwrap();
        let outcome = rx.recv().await.unwrap();
        ctl.finish(outcome);
        assert_eq!(*ctl.state(), ScanState::Succeeded(Box::new(result)));
    }

    #[tokio::test]
    async fn resubmit_allowed_after_failure() {
        let mut ctl = ScanController::new();
        assert!(ctl.submit_with(async { ScanOutcome::Failed("down".to_string()) }));
        let mut rx = ctl.take_outcome_rx().unwrap();
        ctl.finish(rx.recv().await.unwrap());
        assert_eq!(*ctl.state(), ScanState::Failed("down".to_string()));

        assert!(ctl.submit_with(async { ScanOutcome::Failed("again".to_string()) }));
        assert_eq!(*ctl.state(), ScanState::InFlight);
    }

    #[test]
    fn outcome_from_client_result() {
        let ok: ScanOutcome = Ok(sample_result()).into();
        assert!(matches!(ok, ScanOutcome::Succeeded(_)));

        let err: ScanOutcome =
            Err::<ScanResult, _>(ClientError::Transport("Unknown error occurred".to_string()))
                .into();
        assert_eq!(err, ScanOutcome::Failed("Unknown error occurred".to_string()));
    }

    #[test]
    fn take_outcome_rx_is_one_shot() {
        let mut ctl = ScanController::new();
        assert!(ctl.take_outcome_rx().is_none());
    }
}
