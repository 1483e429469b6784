//! Threshold-based status derivation
//!
//! The policy shared by every probing check: a measured round-trip within
//! the configured threshold passes, one strictly above it warns, and a
//! probe that errored fails outright. A single probe attempt per request;
//! retry policy, if any, belongs to the caller.

use crate::core::status::Status;
use crate::core::types::CheckResult;
use std::fmt::Display;
use std::time::Duration;

/// Derive a status from an observed value and a configured threshold
///
/// Equality passes: only an observation strictly greater than the
/// threshold triggers `Warn`. Operational failures never reach this
/// function; see [`observe`].
pub fn evaluate(observed: Duration, threshold: Duration) -> Status {
    if observed > threshold {
        Status::Warn
    } else {
        Status::Pass
    }
}

/// Turn a probe outcome into a complete check result
///
/// On success the round-trip time is reported in nanoseconds and evaluated
/// against the threshold; a warning carries diagnostic output naming the
/// excess. On failure the result is `fail` with the error's descriptive
/// text and no observed value, since the measurement did not complete.
pub fn observe<E: Display>(
    component_id: Option<&str>,
    outcome: Result<Duration, E>,
    threshold: Duration,
    time: String,
) -> CheckResult {
    let result = match outcome {
        Ok(rtt) => match evaluate(rtt, threshold) {
            Status::Warn => CheckResult::warning(format!(
                "response time {}ms exceeded threshold {}ms",
                rtt.as_millis(),
                threshold.as_millis()
            ))
            .with_observation(rtt.as_nanos() as u64, "ns"),
            _ => CheckResult::passing().with_observation(rtt.as_nanos() as u64, "ns"),
        },
        Err(e) => CheckResult::failing(e.to_string()),
    };

    let result = result.with_time(time);
    match component_id {
        Some(id) => result.with_component_id(id),
        None => result,
    }
}
