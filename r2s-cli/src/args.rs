use clap::Parser;

use r2s_types::{Lang, ScanMode};

/// r2s — React2Shell vulnerability scanner front end
#[derive(Parser, Debug)]
#[command(
    name = "r2s",
    version,
    about = "Scan a host for CVE-2025-55182 / CVE-2025-66478 (React2Shell)"
)]
pub struct Args {
    /// Target host (URL or bare hostname). When present, a scan starts
    /// immediately; otherwise the form opens for interactive setup.
    #[arg(value_name = "HOST")]
    pub host: Option<String>,

    /// Scan mode: rce, safe, or vercel-bypass
    #[arg(short = 'm', long = "mode", value_name = "MODE", default_value = "rce")]
    pub mode: ScanMode,

    /// Comma-separated request paths to probe
    #[arg(short = 'p', long = "paths", value_name = "PATHS", default_value = "/")]
    pub paths: String,

    /// Pad the payload with 128KB of junk to evade size-based WAF rules
    #[arg(long = "waf-bypass")]
    pub waf_bypass: bool,

    /// Use the PowerShell payload variant for Windows targets
    #[arg(long = "windows")]
    pub windows: bool,

    /// Scan service origin (overrides the R2S_API_URL environment variable)
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Interface language: en or zh
    #[arg(long = "lang", value_name = "LANG", default_value = "en")]
    pub lang: Lang,

    /// Run one scan headless and print the raw result as JSON
    #[arg(long = "json", requires = "host")]
    pub json: bool,

    /// Increase verbosity level (use -v or -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["r2s"]);
        assert_eq!(args.host, None);
        assert_eq!(args.mode, ScanMode::Rce);
        assert_eq!(args.paths, "/");
        assert!(!args.waf_bypass);
        assert!(!args.json);
        assert_eq!(args.lang, Lang::En);
    }

    #[test]
    fn mode_and_flags() {
        let args = Args::parse_from([
            "r2s",
            "example.com",
            "-m",
            "vercel-bypass",
            "-p",
            "/login,/api",
            "--waf-bypass",
            "--windows",
        ]);
        assert_eq!(args.host.as_deref(), Some("example.com"));
        assert_eq!(args.mode, ScanMode::VercelBypass);
        assert_eq!(args.paths, "/login,/api");
        assert!(args.waf_bypass);
        assert!(args.windows);
    }

    #[test]
    fn json_requires_host() {
        assert!(Args::try_parse_from(["r2s", "--json"]).is_err());
        assert!(Args::try_parse_from(["r2s", "example.com", "--json"]).is_ok());
    }

    #[test]
    fn invalid_mode_rejected() {
        assert!(Args::try_parse_from(["r2s", "-m", "syn"]).is_err());
    }
}
