//! Configuration management for the health service
//!
//! This module handles loading, validation, and management of the service
//! configuration: listener settings, the static response metadata, the
//! response policy, and the built-in checks enabled for the `healthd`
//! binary.

use crate::core::types::HealthDocument;
use crate::utils::error::{HealthError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the health service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Static response metadata
    pub service: ServiceMetadata,
    /// Response policy
    pub response: ResponsePolicy,
    /// Built-in checks
    pub checks: ChecksConfig,
}

impl HealthConfig {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| HealthError::Config(format!("Failed to read config file: {}", e)))?;

        let config: HealthConfig = serde_yaml::from_str(&content)
            .map_err(|e| HealthError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Only the listener and metadata fields are covered; check wiring is
    /// file-only. Recognized variables: `HEALTHD_HOST`, `HEALTHD_PORT`,
    /// `HEALTHD_ROUTE`, `HEALTHD_VERSION`, `HEALTHD_RELEASE_ID`,
    /// `HEALTHD_SERVICE_ID`, `HEALTHD_FAIL_STATUS`.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        if let Ok(host) = std::env::var("HEALTHD_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("HEALTHD_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| HealthError::Config(format!("Invalid HEALTHD_PORT: {}", e)))?;
        }
        if let Ok(route) = std::env::var("HEALTHD_ROUTE") {
            config.server.route = route;
        }
        if let Ok(version) = std::env::var("HEALTHD_VERSION") {
            config.service.version = Some(version);
        }
        if let Ok(release_id) = std::env::var("HEALTHD_RELEASE_ID") {
            config.service.release_id = Some(release_id);
        }
        if let Ok(service_id) = std::env::var("HEALTHD_SERVICE_ID") {
            config.service.service_id = Some(service_id);
        }
        if let Ok(fail_status) = std::env::var("HEALTHD_FAIL_STATUS") {
            config.response.fail_status = fail_status
                .parse()
                .map_err(|e| HealthError::Config(format!("Invalid HEALTHD_FAIL_STATUS: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.server.route.starts_with('/') {
            return Err(HealthError::Config(format!(
                "Route must start with '/': {:?}",
                self.server.route
            )));
        }
        if !(100..=599).contains(&self.response.fail_status) {
            return Err(HealthError::Config(format!(
                "fail_status must be a valid HTTP status code: {}",
                self.response.fail_status
            )));
        }
        for endpoint in &self.checks.endpoints {
            if endpoint.component.is_empty() {
                return Err(HealthError::Config(
                    "Endpoint check is missing a component name".to_string(),
                ));
            }
            if endpoint.url.is_empty() {
                return Err(HealthError::Config(format!(
                    "Endpoint check {:?} is missing a url",
                    endpoint.component
                )));
            }
            if endpoint.threshold_ms == 0 {
                return Err(HealthError::Config(format!(
                    "Endpoint check {:?} must have a non-zero threshold",
                    endpoint.component
                )));
            }
        }
        Ok(())
    }

    /// Build the response template from the configured metadata
    pub fn template(&self) -> HealthDocument {
        let mut template = HealthDocument::template();
        template.version = self.service.version.clone();
        template.release_id = self.service.release_id.clone();
        template.service_id = self.service.service_id.clone();
        template.description = self.service.description.clone();
        if !self.service.notes.is_empty() {
            template.notes = Some(self.service.notes.clone());
        }
        if !self.service.links.is_empty() {
            template.links = Some(self.service.links.clone());
        }
        template
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Route the health endpoint is served under
    pub route: String,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            route: "/health".to_string(),
            cors: CorsConfig::default(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Whether cross-origin requests are allowed
    pub enabled: bool,
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl CorsConfig {
    /// Whether the configuration allows any origin
    pub fn allows_all_origins(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Static response metadata, set once and rendered into every response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceMetadata {
    /// Public version of the service
    pub version: Option<String>,
    /// Release or implementation version
    pub release_id: Option<String>,
    /// Unique identifier of the service
    pub service_id: Option<String>,
    /// Human-friendly description
    pub description: Option<String>,
    /// Notes relevant to the service health
    pub notes: Vec<String>,
    /// Link relations with more information
    pub links: IndexMap<String, String>,
}

/// Response policy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsePolicy {
    /// HTTP status code to respond with when the overall status is `fail`
    ///
    /// The health-check format draft recommends a 4xx-5xx code for `fail`;
    /// the default stays at 200 so that status-code mapping remains an
    /// explicit operator decision.
    pub fail_status: u16,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self { fail_status: 200 }
    }
}

/// Built-in checks enabled for the bundled server binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Report process uptime
    pub uptime: bool,
    /// Report system counters (requires the `system` feature)
    pub system: bool,
    /// Remote endpoint response-time probes
    pub endpoints: Vec<EndpointCheckConfig>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            uptime: true,
            system: false,
            endpoints: Vec::new(),
        }
    }
}

/// One remote endpoint response-time probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointCheckConfig {
    /// Component name used in the check key and component id
    pub component: String,
    /// URL to probe with a GET request
    pub url: String,
    /// Probe timeout in milliseconds
    pub timeout_ms: u64,
    /// Warn threshold for the round-trip time, in milliseconds
    pub threshold_ms: u64,
}

impl Default for EndpointCheckConfig {
    fn default() -> Self {
        Self {
            component: String::new(),
            url: String::new(),
            timeout_ms: 2000,
            threshold_ms: 500,
        }
    }
}
