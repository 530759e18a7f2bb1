mod args;
mod tui;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Args;
use r2s_client::{ApiConfig, ScanApiClient};
use r2s_core::ScanForm;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing based on verbosity
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api = match args.api_base {
        Some(ref base) => ApiConfig::from_base(Some(base.clone())),
        None => ApiConfig::from_env(),
    };
    info!(api_base = %api.base_url, "using scan service");

    let form = args.host.as_ref().map(|host| ScanForm {
        host: host.clone(),
        mode: args.mode,
        paths: args.paths.clone(),
        waf_bypass: args.waf_bypass,
        windows: args.windows,
    });

    // Headless mode: one scan, raw JSON on stdout
    if args.json {
        let form = match form {
            Some(f) => f,
            None => bail!("--json requires a target host"),
        };
        return run_headless(&api, &form).await;
    }

    tui::run_tui(api, args.lang, form).await
}

/// Run a single scan without the TUI and print the result body.
async fn run_headless(api: &ApiConfig, form: &ScanForm) -> Result<()> {
    let request = form.build().map_err(|e| anyhow::anyhow!(e))?;
    let client = ScanApiClient::new(api);
    match client.scan(&request).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => bail!("{}", e.message()),
    }
}
