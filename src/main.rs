//! healthd - standalone health endpoint server
//!
//! Serves the aggregated health document for the checks enabled in
//! `config/health.yaml`.

use healthcheck_rs::server;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let build = healthcheck_rs::build_info();
    info!(version = build.version, git_hash = build.git_hash, "healthd");

    // Start server (auto-loads config/health.yaml)
    match server::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
