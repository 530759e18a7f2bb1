/// Local development fallback when no API base is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable holding the scan service origin.
pub const API_BASE_ENV: &str = "R2S_API_URL";

/// Where to reach the remote scanning service.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Origin of the scan service, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Read the API base from `R2S_API_URL`, falling back to the local
    /// development default.
    pub fn from_env() -> Self {
        Self::from_base(std::env::var(API_BASE_ENV).ok())
    }

    /// Build a config from an optional base URL. Empty or missing values
    /// fall back to the default; trailing slashes are trimmed so that
    /// path joins stay predictable.
    pub fn from_base(base: Option<String>) -> Self {
        let base = base
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Self { base_url: base }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base(None)
    }
}
