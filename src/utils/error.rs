//! Error handling for the health service
//!
//! This module defines all error types used throughout the crate.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the health service
pub type Result<T> = std::result::Result<T, HealthError>;

/// Main error type for the health service
///
/// Expected probe failures never surface here: the provider contract
/// captures them as `fail` check results. This type covers the fallible
/// non-probe paths (configuration, server bootstrap, serialization).
#[derive(Error, Debug)]
pub enum HealthError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server bootstrap errors
    #[error("Server error: {0}")]
    Server(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for HealthError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            HealthError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            HealthError::HttpClient(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "HTTP_CLIENT_ERROR",
                self.to_string(),
            ),
            HealthError::Serialization(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "SERIALIZATION_ERROR",
                "Response serialization failed".to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl HealthError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
