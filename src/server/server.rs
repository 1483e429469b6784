//! HTTP server core implementation
//!
//! This module provides the HttpServer struct, the ServerBuilder, and the
//! run_server function for automatic configuration loading.

use crate::checks::{http, uptime};
use crate::config::HealthConfig;
use crate::core::provider::ChecksProvider;
use crate::core::service::HealthService;
use crate::server::handler::health_endpoint;
use crate::server::state::AppState;
use crate::utils::error::{HealthError, Result};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer as ActixHttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// HTTP server serving the health endpoint
pub struct HttpServer {
    /// Listener configuration
    config: crate::config::ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with the built-in checks the configuration
    /// enables
    pub async fn new(config: &HealthConfig) -> Result<Self> {
        info!("Creating health server");

        let service = build_service(config)?;
        Ok(Self::with_service(config, service))
    }

    /// Create a new HTTP server around an existing health service
    ///
    /// Use this to serve custom check providers alongside or instead of
    /// the configured built-ins.
    pub fn with_service(config: &HealthConfig, service: HealthService) -> Self {
        let state = AppState::new(service, config.response.clone());
        Self {
            config: config.server.clone(),
            state,
        }
    }

    /// Start the server and block until it shuts down
    pub async fn start(self) -> Result<()> {
        let host = self.config.host.clone();
        let port = self.config.port;
        let route = self.config.route.clone();
        let cors_config = self.config.cors.clone();
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            let cors = if cors_config.enabled {
                if cors_config.allows_all_origins() {
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header()
                } else {
                    let mut cors = Cors::default().allow_any_method().allow_any_header();
                    for origin in &cors_config.allowed_origins {
                        cors = cors.allowed_origin(origin);
                    }
                    cors
                }
            } else {
                // A default Cors transform adds no headers and lets
                // same-origin traffic through untouched.
                Cors::default()
            };

            App::new()
                .app_data(state.clone())
                .wrap(Logger::default())
                .wrap(cors)
                .route(&route, web::route().to(health_endpoint))
        })
        .bind((host.as_str(), port))
        .map_err(|e| {
            HealthError::Server(format!("Failed to bind {}:{}: {}", host, port, e))
        })?;

        info!("Health endpoint listening at http://{}:{}{}", host, port, self.config.route);
        server
            .run()
            .await
            .map_err(|e| HealthError::Server(e.to_string()))
    }
}

/// Build the health service from the configured metadata and checks
fn build_service(config: &HealthConfig) -> Result<HealthService> {
    let mut providers: Vec<Arc<dyn ChecksProvider>> = Vec::new();

    if config.checks.uptime {
        providers.push(Arc::new(uptime::Process::new()));
    }

    if config.checks.system {
        #[cfg(feature = "system")]
        providers.push(Arc::new(crate::checks::system::SystemReport::new()));

        #[cfg(not(feature = "system"))]
        tracing::warn!(
            "System checks are enabled in the configuration but the `system` feature is not compiled in"
        );
    }

    for endpoint in &config.checks.endpoints {
        providers.push(Arc::new(http::ResponseTime::new(
            endpoint.component.as_str(),
            endpoint.url.as_str(),
            Duration::from_millis(endpoint.timeout_ms),
            Duration::from_millis(endpoint.threshold_ms),
        )?));
        info!(component = %endpoint.component, url = %endpoint.url, "Registered endpoint check");
    }

    Ok(HealthService::new(config.template()).with_providers(providers))
}

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<HealthConfig>,
    service: Option<HealthService>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self {
            config: None,
            service: None,
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: HealthConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an existing health service instead of the configured built-ins
    pub fn with_service(mut self, service: HealthService) -> Self {
        self.service = Some(service);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| HealthError::Config("Configuration is required".to_string()))?;

        match self.service {
            Some(service) => Ok(HttpServer::with_service(&config, service)),
            None => HttpServer::new(&config).await,
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("🚀 Starting healthd");

    // Auto-load configuration file
    let config_path = "config/health.yaml";
    info!("📄 Loading configuration file: {}", config_path);

    let config = match HealthConfig::from_file(config_path).await {
        Ok(config) => {
            info!("✅ Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!(
                "⚠️  Configuration file loading failed, using default config: {}",
                e
            );
            HealthConfig::default()
        }
    };

    let server = HttpServer::new(&config).await?;
    info!(
        "🌐 Serving {} at http://{}:{}",
        config.server.route, config.server.host, config.server.port
    );

    server.start().await
}
