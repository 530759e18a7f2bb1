//! Turns raw form input into a well-formed scan request.

use r2s_types::{ScanMode, ScanRequest};

/// Probe timeout sent to the service, in seconds. The 128KB junk padding
/// used for WAF bypass slows the probe down, so that mode gets a longer
/// bound.
pub const fn timeout_secs(waf_bypass: bool) -> u64 {
    if waf_bypass {
        20
    } else {
        10
    }
}

/// Split a comma-separated path list into individual paths, dropping
/// empty entries. An input with no usable path falls back to `/`.
pub fn normalize_paths(raw: &str) -> Vec<String> {
    let paths: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    if paths.is_empty() {
        vec!["/".to_string()]
    } else {
        paths
    }
}

/// Why a form could not be turned into a request.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("target host is required")]
    EmptyHost,
}

/// Raw scan parameters as the user entered them.
///
/// Text fields hold unnormalized input; normalization happens once, in
/// [`ScanForm::build`], so edits never mutate what the user typed.
#[derive(Debug, Clone)]
pub struct ScanForm {
    pub host: String,
    pub mode: ScanMode,
    /// Comma-separated path list, as typed.
    pub paths: String,
    pub waf_bypass: bool,
    pub windows: bool,
}

impl Default for ScanForm {
    fn default() -> Self {
        Self {
            host: String::new(),
            mode: ScanMode::default(),
            paths: "/".to_string(),
            waf_bypass: false,
            windows: false,
        }
    }
}

impl ScanForm {
    /// Validate and normalize the form into a request ready to submit.
    pub fn build(&self) -> Result<ScanRequest, BuildError> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(BuildError::EmptyHost);
        }
        Ok(ScanRequest {
            host: host.to_string(),
            mode: self.mode,
            paths: normalize_paths(&self.paths),
            waf_bypass: self.waf_bypass,
            windows: self.windows,
            timeout: timeout_secs(self.waf_bypass),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_full_request() {
        let form = ScanForm {
            host: "  target.example.com ".to_string(),
            mode: ScanMode::VercelBypass,
            paths: "/login, /api ".to_string(),
            waf_bypass: true,
            windows: true,
        };
        let req = form.build().unwrap();
        assert_eq!(req.host, "target.example.com");
        assert_eq!(req.mode, ScanMode::VercelBypass);
        assert_eq!(req.paths, vec!["/login", "/api"]);
        assert!(req.waf_bypass);
        assert!(req.windows);
        assert_eq!(req.timeout, 20);
    }

    #[test]
    fn default_form_builds_root_path_scan() {
        let form = ScanForm {
            host: "example.com".to_string(),
            ..ScanForm::default()
        };
        let req = form.build().unwrap();
        assert_eq!(req.mode, ScanMode::Rce);
        assert_eq!(req.paths, vec!["/"]);
        assert_eq!(req.timeout, 10);
    }

    #[test]
    fn empty_host_is_rejected() {
        assert_eq!(ScanForm::default().build(), Err(BuildError::EmptyHost));
        let form = ScanForm {
            host: "   ".to_string(),
            ..ScanForm::default()
        };
        assert_eq!(form.build(), Err(BuildError::EmptyHost));
    }

    #[test]
    fn normalize_drops_empty_segments() {
        assert_eq!(normalize_paths(" /a , ,/b"), vec!["/a", "/b"]);
        assert_eq!(normalize_paths("/x"), vec!["/x"]);
    }

    #[test]
    fn normalize_falls_back_to_root() {
        assert_eq!(normalize_paths(""), vec!["/"]);
        assert_eq!(normalize_paths(" , ,"), vec!["/"]);
    }

    #[test]
    fn timeout_depends_only_on_waf_flag() {
        assert_eq!(timeout_secs(false), 10);
        assert_eq!(timeout_secs(true), 20);
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let form = ScanForm {
            host: "example.com".to_string(),
            ..ScanForm::default()
        };
        let value = serde_json::to_value(form.build().unwrap()).unwrap();
        assert_eq!(value["host"], "example.com");
        assert_eq!(value["mode"], "rce");
        assert_eq!(value["waf_bypass"], false);
        assert_eq!(value["windows"], false);
        assert_eq!(value["timeout"], 10);
    }
}
