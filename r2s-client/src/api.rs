//! HTTP client for the remote scanning service.
//!
//! One endpoint: `POST {base}/api/scan`. The request's `timeout` field is
//! a hint for the service's own probe bound; the client deliberately sets
//! no request timeout of its own, so a slow padded-payload scan is never
//! cut short on this side.

use r2s_types::{ScanRequest, ScanResult};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ClientError, GENERIC_REJECTION, GENERIC_TRANSPORT};

/// Error body shape for non-success responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the remote scanning service.
#[derive(Debug, Clone)]
pub struct ScanApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScanApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("r2s/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Origin the client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a scan and wait for its result.
    ///
    /// Non-success statuses become [`ClientError::Rejected`] with the
    /// body's `detail` when present; network and parse failures become
    /// [`ClientError::Transport`].
    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanResult, ClientError> {
        let url = format!("{}/api/scan", self.base_url);
        debug!(host = %request.host, mode = %request.mode, "submitting scan");

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "scan request failed");
                ClientError::Transport(transport_message(&e))
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = rejection_message(&body);
            warn!(%status, message, "scan rejected");
            return Err(ClientError::Rejected(message));
        }

        resp.json::<ScanResult>().await.map_err(|e| {
            warn!(error = %e, "scan response parse failed");
            ClientError::Transport(transport_message(&e))
        })
    }
}

/// Extract the error message from a rejection body: the `detail` string
/// when the body is JSON and carries one, otherwise a generic message.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| GENERIC_REJECTION.to_string())
}

/// Description of a transport-level failure.
fn transport_message(err: &reqwest::Error) -> String {
    let msg = err.to_string();
    if msg.is_empty() {
        GENERIC_TRANSPORT.to_string()
    } else {
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_uses_detail() {
        assert_eq!(rejection_message(r#"{"detail":"timeout"}"#), "timeout");
    }

    #[test]
    fn rejection_message_generic_when_detail_missing() {
        assert_eq!(rejection_message(r#"{"error":"nope"}"#), GENERIC_REJECTION);
        assert_eq!(rejection_message(r#"{"detail":null}"#), GENERIC_REJECTION);
        assert_eq!(rejection_message(r#"{"detail":""}"#), GENERIC_REJECTION);
    }

    #[test]
    fn rejection_message_generic_on_malformed_body() {
        assert_eq!(rejection_message("<html>502</html>"), GENERIC_REJECTION);
        assert_eq!(rejection_message(""), GENERIC_REJECTION);
    }

    #[test]
    fn client_joins_scan_path() {
        let client = ScanApiClient::new(&ApiConfig::from_base(Some(
            "http://localhost:8000/".into(),
        )));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
