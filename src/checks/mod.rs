//! Built-in check providers
//!
//! Concrete implementations of the provider contract: process and system
//! uptime, system counters, remote HTTP probes, and datastore pings. Each
//! provider owns its own probe resources (HTTP client, connection handle)
//! and enforces its own bounded timeout.

pub mod http;
pub mod uptime;

#[cfg(feature = "datastore")]
pub mod datastore;

#[cfg(feature = "redis")]
pub mod redis;

#[cfg(feature = "system")]
pub mod system;
