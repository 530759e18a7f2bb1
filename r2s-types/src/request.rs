use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which detection strategy the remote scanner should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Execute a harmless remote calculation; confirms RCE.
    #[default]
    Rce,
    /// Side-channel detection, no code execution on the target.
    Safe,
    /// WAF-bypass variant for targets hosted on Vercel.
    VercelBypass,
}

impl ScanMode {
    pub const ALL: [ScanMode; 3] = [ScanMode::Rce, ScanMode::Safe, ScanMode::VercelBypass];

    /// Wire tag, as sent in the request body.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rce => "rce",
            Self::Safe => "safe",
            Self::VercelBypass => "vercel-bypass",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rce" => Ok(Self::Rce),
            "safe" => Ok(Self::Safe),
            "vercel-bypass" => Ok(Self::VercelBypass),
            other => Err(format!(
                "unknown scan mode: {other} (expected rce, safe, or vercel-bypass)"
            )),
        }
    }
}

/// A wire-ready scan request. Built once per submission and immutable
/// after that; the builder in `r2s-core` is the only constructor used by
/// the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Target: scheme-and-host or bare host. Never empty.
    pub host: String,
    pub mode: ScanMode,
    /// Request paths to probe. Never empty; `["/"]` by default.
    pub paths: Vec<String>,
    /// Pad the request body with bulk junk to evade size-based WAF filters.
    pub waf_bypass: bool,
    /// PowerShell-flavored payload variant.
    pub windows: bool,
    /// Timeout hint for the scanner's own bound, in seconds. Derived from
    /// `waf_bypass`, never user-entered.
    pub timeout: u64,
}
