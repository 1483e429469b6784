//! Three-valued health status model
//!
//! Defines the `pass`/`warn`/`fail` status enumeration and its aggregation
//! ordering. A worse status always dominates when results are merged.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health status of a service or an individual check observation
///
/// The variant order defines the aggregation precedence: `Fail` dominates
/// `Warn`, which dominates `Pass`. The wire representation is the canonical
/// lowercase string; parsing is case-insensitive and accepts the aliases
/// the health-check response format draft documents for interoperability
/// ("ok"/"up" for pass, "error"/"down" for fail).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// The service or check is healthy
    #[default]
    Pass,
    /// Healthy, with some concerns
    Warn,
    /// Unhealthy
    Fail,
}

impl Status {
    /// Canonical lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        }
    }

    /// Aggregate an iterator of statuses under the worst-status-wins rule
    ///
    /// Returns `Pass` for an empty iterator: a service with no contributing
    /// checks is considered healthy.
    pub fn worst<I: IntoIterator<Item = Status>>(statuses: I) -> Status {
        statuses.into_iter().max().unwrap_or(Status::Pass)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pass" | "ok" | "up" => Ok(Status::Pass),
            "warn" => Ok(Status::Warn),
            "fail" | "error" | "down" => Ok(Status::Fail),
            other => Err(format!("unknown health status: {:?}", other)),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
