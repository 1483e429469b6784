//! System counters check provider
//!
//! Reports host-level readings through the `sysinfo` crate: uptime,
//! hostname, load averages, and memory utilization. On platforms sysinfo
//! does not support, the provider reports an empty result mapping instead
//! of failing.

use crate::core::provider::{CheckMap, ChecksProvider};
use crate::core::types::{now_rfc3339, CheckResult};
use async_trait::async_trait;
use sysinfo::System;

/// Host system counters: uptime, hostname, cpu and memory utilization
pub struct SystemReport;

impl SystemReport {
    /// Create a system counters provider
    pub fn new() -> Self {
        Self
    }

    fn load_result(time: &str, component_id: &str, load: f64) -> CheckResult {
        CheckResult::passing()
            .with_component_type("system")
            .with_component_id(component_id)
            .with_observation(load, "load")
            .with_time(time)
    }

    fn memory_result(time: &str, component_id: &str, bytes: u64) -> CheckResult {
        CheckResult::passing()
            .with_component_type("system")
            .with_component_id(component_id)
            .with_observation(bytes, "bytes")
            .with_time(time)
    }
}

impl Default for SystemReport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChecksProvider for SystemReport {
    async fn checks(&self) -> CheckMap {
        let mut map = CheckMap::new();
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return map;
        }

        let time = now_rfc3339();

        map.insert(
            "uptime".to_string(),
            vec![
                CheckResult::passing()
                    .with_component_type("system")
                    .with_observation(System::uptime(), "s")
                    .with_time(time.as_str()),
            ],
        );

        let hostname = match System::host_name() {
            Some(name) => CheckResult::passing()
                .with_component_type("system")
                .with_component_id("hostname")
                .with_observation(name, "name")
                .with_time(time.as_str()),
            None => CheckResult::failing("could not read hostname")
                .with_component_type("system")
                .with_component_id("hostname")
                .with_time(time.as_str()),
        };
        map.insert("hostname".to_string(), vec![hostname]);

        let load = System::load_average();
        map.insert(
            "cpu:utilization".to_string(),
            vec![
                Self::load_result(&time, "1 minute", load.one),
                Self::load_result(&time, "5 minutes", load.five),
                Self::load_result(&time, "15 minutes", load.fifteen),
            ],
        );

        let mut system = System::new();
        system.refresh_memory();
        map.insert(
            "memory:utilization".to_string(),
            vec![
                Self::memory_result(&time, "Total Ram", system.total_memory()),
                Self::memory_result(&time, "Free Ram", system.free_memory()),
                Self::memory_result(&time, "Used Ram", system.used_memory()),
                Self::memory_result(&time, "Total Swap", system.total_swap()),
                Self::memory_result(&time, "Free Swap", system.free_swap()),
            ],
        );

        map
    }
}
