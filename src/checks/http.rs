//! Remote HTTP check providers
//!
//! Probes over HTTP: a response-time check against any URL, evaluated
//! against a configured threshold, and a statuspage.io-style probe that
//! maps a remote status page's incident indicator onto the health status.

use crate::core::provider::{CheckMap, ChecksProvider};
use crate::core::threshold;
use crate::core::types::{now_rfc3339, CheckResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::warn;

/// Round-trip-time check against a remote HTTP endpoint
///
/// Issues a single GET per request with a bounded timeout. A 2xx answer
/// within the threshold passes, a slower one warns, and any transport
/// error, timeout, or non-2xx status fails with the cause as output.
pub struct ResponseTime {
    component_id: String,
    url: String,
    client: reqwest::Client,
    threshold: Duration,
}

impl ResponseTime {
    /// Create a response-time check
    ///
    /// The timeout bounds the probe; it should be chosen at or above the
    /// threshold so a slow-but-alive endpoint can still surface as `warn`.
    pub fn new<S: Into<String>, U: Into<String>>(
        component_id: S,
        url: U,
        timeout: Duration,
        threshold: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            component_id: component_id.into(),
            url: url.into(),
            client,
            threshold,
        })
    }

    async fn probe(&self) -> std::result::Result<Duration, String> {
        let start = Instant::now();
        match self.client.get(&self.url).send().await {
            Ok(response) if response.status().is_success() => Ok(start.elapsed()),
            Ok(response) => Err(format!("HTTP {}", response.status())),
            Err(e) => Err(e.to_string()),
        }
    }
}

#[async_trait]
impl ChecksProvider for ResponseTime {
    async fn checks(&self) -> CheckMap {
        let time = now_rfc3339();
        let outcome = self.probe().await;
        if let Err(ref cause) = outcome {
            warn!(component = %self.component_id, url = %self.url, cause = %cause, "Endpoint probe failed");
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

/// Health of a remote service published through a statuspage.io-style page
///
/// Fetches the page's JSON summary and maps its incident indicator:
/// "none" passes, "minor" and "major" warn, and anything else fails with
/// the page's own description as output.
pub struct StatusPage {
    component_id: String,
    url: String,
    client: reqwest::Client,
}

impl StatusPage {
    /// Create a status-page check
    pub fn new<S: Into<String>, U: Into<String>>(
        component_id: S,
        url: U,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            component_id: component_id.into(),
            url: url.into(),
            client,
        })
    }

    async fn fetch_status(&self) -> CheckResult {
        let response = match self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return CheckResult::failing(e.to_string()),
        };

        let body = match response.json::<serde_json::Value>().await {
            Ok(body) => body,
            Err(e) => return CheckResult::failing(e.to_string()),
        };

        match body.get("status") {
            Some(status) => match status.get("indicator").and_then(|i| i.as_str()) {
                Some("none") => CheckResult::passing(),
                Some(indicator @ ("minor" | "major")) => {
                    CheckResult::warning(format!("status page reports {} incident", indicator))
                }
                _ => match status.get("description").and_then(|d| d.as_str()) {
                    Some(description) => CheckResult::failing(description),
                    None => CheckResult::failing(format!(
                        "could not get status description from {}",
                        self.component_id
                    )),
                },
            },
            None => CheckResult::failing(format!(
                "could not parse status page response from {}",
                self.component_id
            )),
        }
    }
}

#[async_trait]
impl ChecksProvider for StatusPage {
    async fn checks(&self) -> CheckMap {
        let result = self.fetch_status().await.observed_now();

        let mut map = CheckMap::new();
        map.insert(self.component_id.clone(), vec![result]);
        map
    }
}
