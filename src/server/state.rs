//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::ResponsePolicy;
use crate::core::service::HealthService;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after construction, so cloning the state
/// into each worker requires no locking.
#[derive(Clone)]
pub struct AppState {
    /// The health aggregation service
    pub service: Arc<HealthService>,
    /// Response policy (status-code mapping)
    pub policy: ResponsePolicy,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service: HealthService, policy: ResponsePolicy) -> Self {
        Self {
            service: Arc::new(service),
            policy,
        }
    }
}
