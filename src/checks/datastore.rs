//! SQL datastore ping check
//!
//! Pings a sea-orm database connection and evaluates the round-trip time
//! against a configured threshold. The connection is owned and
//! lifecycle-managed by the caller; this check only borrows it for the
//! ping.

use crate::core::provider::{CheckMap, ChecksProvider};
use crate::core::threshold;
use crate::core::types::now_rfc3339;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::time::{Duration, Instant};
use tracing::warn;

/// Response-time check against a SQL database connection
pub struct DatastorePing {
    component_id: String,
    connection: DatabaseConnection,
    timeout: Duration,
    threshold: Duration,
}

impl DatastorePing {
    /// Create a datastore ping check
    ///
    /// A single ping per request, bounded by `timeout`; no retries.
    pub fn new<S: Into<String>>(
        component_id: S,
        connection: DatabaseConnection,
        timeout: Duration,
        threshold: Duration,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            connection,
            timeout,
            threshold,
        }
    }

    async fn probe(&self) -> std::result::Result<Duration, String> {
        let start = Instant::now();
        match tokio::time::timeout(self.timeout, self.connection.ping()).await {
            Ok(Ok(())) => Ok(start.elapsed()),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!(
                "ping timed out after {}ms",
                self.timeout.as_millis()
            )),
        }
    }
}

#[async_trait]
impl ChecksProvider for DatastorePing {
    async fn checks(&self) -> CheckMap {
        let time = now_rfc3339();
        let outcome = self.probe().await;
        if let Err(ref cause) = outcome {
            warn!(component = %self.component_id, cause = %cause, "Datastore ping failed");
        }

        let result = threshold::observe(
            Some(&self.component_id),
            outcome,
            self.threshold,
            time,
        );

        let mut map = CheckMap::new();
        map.insert(
            format!("{}:responseTime", self.component_id),
            vec![result],
        );
        map
    }
}
