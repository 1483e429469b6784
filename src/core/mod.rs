//! Aggregation and reporting engine
//!
//! This module contains the core of the health service: the three-valued
//! status model, the check-result schema of the `application/health+json`
//! response format, the threshold evaluator shared by probing checks, the
//! provider contract, and the aggregator that merges provider output into
//! a single response document.

pub mod provider;
pub mod service;
pub mod status;
pub mod threshold;
pub mod types;

pub use provider::{CheckMap, ChecksProvider};
pub use service::HealthService;
pub use status::Status;
pub use types::{CheckResult, HealthDocument};
