//! Health aggregation service
//!
//! Orchestrates the registered check providers for one request: filters
//! them by authorization, runs the survivors concurrently, merges their
//! result groups under shared keys in registration order, derives the
//! top-level status, and renders the response document from the template.

use crate::core::provider::{CheckMap, ChecksProvider};
use crate::core::status::Status;
use crate::core::types::HealthDocument;
use actix_web::HttpRequest;
use futures::future::join_all;
use std::sync::Arc;
use tracing::debug;

/// The health aggregation service
///
/// Holds an immutable response template (the operator-supplied static
/// metadata) and an immutable, ordered list of check providers. Both are
/// set at construction and never mutated afterwards, so one instance is
/// safe to share across concurrent requests without locking.
#[derive(Clone)]
pub struct HealthService {
    /// Template for the outer health response
    template: HealthDocument,
    /// Registered check providers, in registration order
    providers: Vec<Arc<dyn ChecksProvider>>,
}

impl HealthService {
    /// Create a new health service from a response template
    pub fn new(template: HealthDocument) -> Self {
        Self {
            template,
            providers: Vec::new(),
        }
    }

    /// Register a check provider
    ///
    /// Registration order is significant: merged result lists preserve it,
    /// and it fixes the key order of the rendered document.
    pub fn with_provider(mut self, provider: Arc<dyn ChecksProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Register several check providers at once
    pub fn with_providers(mut self, providers: Vec<Arc<dyn ChecksProvider>>) -> Self {
        self.providers.extend(providers);
        self
    }

    /// Number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// The response template this service renders from
    pub fn template(&self) -> &HealthDocument {
        &self.template
    }

    /// Compute the full health document for one request
    ///
    /// Every request starts from an empty checks mapping; nothing is
    /// cached or carried over. Providers whose `authorize` rejects the
    /// request are skipped without being probed. The rest run
    /// concurrently, and since `join_all` yields results in input order
    /// the merge below is deterministic regardless of completion order.
    pub async fn gather(&self, req: &HttpRequest) -> HealthDocument {
        let authorized: Vec<&Arc<dyn ChecksProvider>> = self
            .providers
            .iter()
            .filter(|provider| provider.authorize(req))
            .collect();

        debug!(
            authorized = authorized.len(),
            registered = self.providers.len(),
            "Gathering health checks"
        );

        let produced = join_all(authorized.iter().map(|provider| provider.checks())).await;

        let mut checks = CheckMap::new();
        for map in produced {
            for (key, results) in map {
                checks.entry(key).or_default().extend(results);
            }
        }

        let status = Status::worst(checks.values().flatten().map(|result| result.status));

        let mut document = self.template.clone();
        document.status = status;
        document.checks = checks;
        document
    }
}
