//! # healthcheck-rs
//!
//! A Rust implementation of the Health Check Response Format for HTTP APIs
//! (`application/health+json`). Pluggable check providers report named
//! groups of structured results; the aggregation engine merges them under
//! shared keys, derives the overall pass/warn/fail status, and renders one
//! response document per request.
//!
//! ## Features
//!
//! - **Standard wire format**: the draft-inadarei health-check response
//!   format, served as `application/health+json`
//! - **Pluggable providers**: any type implementing [`ChecksProvider`] can
//!   contribute checks, with per-request authorization
//! - **Worst-status-wins aggregation**: `fail` dominates `warn` dominates
//!   `pass`, across all providers and keys
//! - **Threshold policy**: shared response-time evaluation for probing
//!   checks (within threshold passes, above warns, errors fail)
//! - **Built-in checks**: process/system uptime, system counters, remote
//!   endpoint probes, datastore and Redis pings (feature-gated)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use healthcheck_rs::{HealthDocument, HealthService};
//! use healthcheck_rs::checks::uptime;
//! use healthcheck_rs::config::HealthConfig;
//! use healthcheck_rs::server::HttpServer;
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let template = HealthDocument::template()
//!         .with_version("1")
//!         .with_release_id("1.0.0-SNAPSHOT");
//!
//!     let service = HealthService::new(template)
//!         .with_provider(Arc::new(uptime::Process::new()));
//!
//!     let config = HealthConfig::default();
//!     HttpServer::with_service(&config, service).start().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Custom providers
//!
//! ```rust
//! use async_trait::async_trait;
//! use healthcheck_rs::{CheckMap, CheckResult, ChecksProvider, Status};
//!
//! struct CustomCheck;
//!
//! #[async_trait]
//! impl ChecksProvider for CustomCheck {
//!     async fn checks(&self) -> CheckMap {
//!         let mut map = CheckMap::new();
//!         map.insert(
//!             "custom".to_string(),
//!             vec![CheckResult::new(Status::Pass).with_component_id("custom-component")],
//!         );
//!         map
//!     }
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod checks;
pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::HealthConfig;
pub use core::provider::{CheckMap, ChecksProvider};
pub use core::service::HealthService;
pub use core::status::Status;
pub use core::threshold;
pub use core::types::{CheckResult, HealthDocument};
pub use utils::error::{HealthError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build information captured at compile time
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
