//! Uptime check providers

use crate::core::provider::{CheckMap, ChecksProvider};
use crate::core::types::CheckResult;
use async_trait::async_trait;
use std::time::Instant;

/// Reports the time elapsed since this provider was constructed
///
/// Note that this is not the true process uptime but the time since
/// [`Process::new`] was called, which for a provider registered at startup
/// amounts to the same thing.
pub struct Process {
    start: Instant,
}

impl Process {
    /// Create a process-uptime provider, starting the clock now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for Process {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChecksProvider for Process {
    async fn checks(&self) -> CheckMap {
        let mut map = CheckMap::new();
        map.insert(
            "uptime".to_string(),
            vec![
                CheckResult::passing()
                    .with_component_type("process")
                    .with_observation(self.start.elapsed().as_secs_f64(), "s")
                    .observed_now(),
            ],
        );
        map
    }
}

/// Reports the host system's uptime
///
/// On platforms the system probe does not support, this provider reports
/// nothing rather than failing.
#[cfg(feature = "system")]
pub struct System;

#[cfg(feature = "system")]
impl System {
    /// Create a system-uptime provider
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "system")]
impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "system")]
#[async_trait]
impl ChecksProvider for System {
    async fn checks(&self) -> CheckMap {
        let mut map = CheckMap::new();
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return map;
        }
        map.insert(
            "uptime".to_string(),
            vec![
                CheckResult::passing()
                    .with_component_type("system")
                    .with_observation(sysinfo::System::uptime(), "s")
                    .observed_now(),
            ],
        );
        map
    }
}
