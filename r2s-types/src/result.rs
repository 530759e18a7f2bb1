use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a completed scan, consumed verbatim from the remote scanner.
///
/// `vulnerable: null` in the response body means the scan could not
/// determine vulnerability; it is preserved as `None`, never coerced to
/// `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Echo of the probed host.
    pub host: String,
    pub vulnerable: Option<bool>,
    #[serde(default)]
    pub status_code: Option<u16>,
    /// Diagnostic string; present when `vulnerable` is null or a soft
    /// error occurred.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub final_url: Option<String>,
    #[serde(default)]
    pub tested_url: Option<String>,
    /// ISO-8601 instant of when the scan was performed.
    pub timestamp: String,
}

impl ScanResult {
    /// Tri-state projection of `vulnerable` for rendering.
    pub fn verdict(&self) -> Verdict {
        match self.vulnerable {
            Some(true) => Verdict::Vulnerable,
            Some(false) => Verdict::NotVulnerable,
            None => Verdict::Indeterminate,
        }
    }

    /// The post-redirect URL, only when it differs from the tested URL.
    pub fn redirect_url(&self) -> Option<&str> {
        self.final_url
            .as_deref()
            .filter(|f| self.tested_url.as_deref() != Some(*f))
    }
}

/// Classification of a completed scan for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Vulnerable,
    NotVulnerable,
    /// The scan completed but could not classify the target.
    Indeterminate,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vulnerable => write!(f, "vulnerable"),
            Self::NotVulnerable => write!(f, "not vulnerable"),
            Self::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
