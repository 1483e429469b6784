//! Response schema of the health-check response format
//!
//! The wire types for `application/health+json` documents: the per-check
//! observation record and the aggregate response document. Field names
//! follow the draft's camelCase spelling; optional fields are omitted from
//! the serialized output entirely rather than rendered as null.

use crate::core::status::Status;
use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One named observation contributed by a check provider
///
/// Results are constructed complete, per branch, and never mutated after
/// they are returned: a probe either yields a passing/warning observation
/// with its measured value, or a failing one carrying diagnostic output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Unique identifier of an instance of a specific sub-component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    /// Component category, e.g. "system", "datastore", "component"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,

    /// The measured quantity; any valid JSON value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<serde_json::Value>,

    /// Unit of measurement for `observed_value`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_unit: Option<String>,

    /// Status of this individual observation
    pub status: Status,

    /// URI templates of the endpoints affected by this check's troubles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_endpoints: Option<Vec<String>>,

    /// RFC 3339 date-time at which the reading was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Raw diagnostic output, populated for `warn` and `fail` states
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Link relations with more information about this check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, String>>,
}

impl CheckResult {
    /// Create a result with the given status and no other fields set
    pub fn new(status: Status) -> Self {
        Self {
            component_id: None,
            component_type: None,
            observed_value: None,
            observed_unit: None,
            status,
            affected_endpoints: None,
            time: None,
            output: None,
            links: None,
        }
    }

    /// Create a passing result
    pub fn passing() -> Self {
        Self::new(Status::Pass)
    }

    /// Create a warning result with diagnostic output
    pub fn warning<S: Into<String>>(output: S) -> Self {
        let mut result = Self::new(Status::Warn);
        result.output = Some(output.into());
        result
    }

    /// Create a failing result with diagnostic output
    ///
    /// Failing results derived by this crate never carry an observed
    /// value: the measurement did not complete.
    pub fn failing<S: Into<String>>(output: S) -> Self {
        let mut result = Self::new(Status::Fail);
        result.output = Some(output.into());
        result
    }

    /// Set the component identifier
    pub fn with_component_id<S: Into<String>>(mut self, component_id: S) -> Self {
        self.component_id = Some(component_id.into());
        self
    }

    /// Set the component category
    pub fn with_component_type<S: Into<String>>(mut self, component_type: S) -> Self {
        self.component_type = Some(component_type.into());
        self
    }

    /// Set the measured value together with its unit
    ///
    /// The unit is mandatory whenever a value is observed, so the typed
    /// API only offers them as a pair.
    pub fn with_observation<V: Into<serde_json::Value>, S: Into<String>>(
        mut self,
        value: V,
        unit: S,
    ) -> Self {
        self.observed_value = Some(value.into());
        self.observed_unit = Some(unit.into());
        self
    }

    /// Set the observation timestamp
    pub fn with_time<S: Into<String>>(mut self, time: S) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the observation timestamp to the current instant
    pub fn observed_now(self) -> Self {
        self.with_time(now_rfc3339())
    }
}

/// Current UTC time in the RFC 3339 nanosecond format used on the wire
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// The aggregate health response document
///
/// The static metadata fields are operator-supplied template state, set
/// once at service construction. `status` and `checks` are rebuilt from
/// scratch on every request and always overwrite whatever the template
/// carried.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthDocument {
    /// Overall service status, computed by the aggregator
    pub status: Status,

    /// Public version of the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Release or implementation version, distinct from the API version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_id: Option<String>,

    /// Notes relevant to the current state of health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,

    /// Raw error output, for `warn` and `fail` states
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Detailed health of downstream systems and sub-components
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub checks: IndexMap<String, Vec<CheckResult>>,

    /// Link relations with more information about the service health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<IndexMap<String, String>>,

    /// Unique identifier of the service, in the application scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// Human-friendly description of the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HealthDocument {
    /// Create an empty template
    pub fn template() -> Self {
        Self::default()
    }

    /// Set the public service version
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the release identifier
    pub fn with_release_id<S: Into<String>>(mut self, release_id: S) -> Self {
        self.release_id = Some(release_id.into());
        self
    }

    /// Set the service identifier
    pub fn with_service_id<S: Into<String>>(mut self, service_id: S) -> Self {
        self.service_id = Some(service_id.into());
        self
    }

    /// Set the service description
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the notes array
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Set the link relations
    pub fn with_links(mut self, links: IndexMap<String, String>) -> Self {
        self.links = Some(links);
        self
    }
}
