//! Redis ping check
//!
//! Sends a PING over a multiplexed async connection and evaluates the
//! round-trip time against a configured threshold.

use crate::core::provider::{CheckMap, ChecksProvider};
use crate::core::threshold;
use crate::core::types::now_rfc3339;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::warn;

/// Response-time check against a Redis server
pub struct RedisPing {
    component_id: String,
    client: redis::Client,
    timeout: Duration,
    threshold: Duration,
}

impl RedisPing {
    /// Create a Redis ping check
    ///
    /// A single PING per request, bounded by `timeout`; no retries.
    pub fn new<S: Into<String>>(
        component_id: S,
        client: redis::Client,
        timeout: Duration,
        threshold: Duration,
    ) -> Self {
        Self {
            component_id: component_id.into(),
            client,
            timeout,
            threshold,
        }
    }

    async fn ping(&self) -> std::result::Result<(), redis::RedisError> {
        let mut connection = self.client.get_multiplexed_async_connection().await?;
        let _pong: String = redis::cmd("PING").query_async(&mut connection).await?;
        Ok(())
    }

    async fn probe(&self) -> std::result::Result<Duration, String> {
        let start = Instant::now();
        match tokio::time::timeout(self.timeout, self.ping()).await {
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
impl ChecksProvider for RedisPing {
    async fn checks(&self) -> CheckMap {
        let time = now_rfc3339();
        let outcome = self.probe().await;
        if let Err(ref cause) = outcome {
            warn!(component = %self.component_id, cause = %cause, "Redis ping failed");
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
