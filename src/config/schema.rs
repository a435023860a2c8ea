//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the radar.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::registry::catalog;
use crate::registry::MockProfile;

/// Root configuration for the status radar.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Polling cadence and per-check settings.
    pub poll: PollConfig,

    /// Relays tried in order for every check.
    pub relays: Vec<RelayConfig>,

    /// Monitored services, in display order.
    pub services: Vec<ServiceConfig>,

    /// Mock profiles keyed by service id.
    pub mock_profiles: HashMap<String, MockProfile>,

    /// Mock simulator settings.
    pub simulation: SimulationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            poll: PollConfig::default(),
            relays: default_relays(),
            services: catalog::builtin_services(),
            mock_profiles: catalog::builtin_profiles(),
            simulation: SimulationConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between automatic bulk refreshes.
    pub interval_secs: u64,

    /// Timeout for a single relay attempt in milliseconds.
    pub relay_timeout_ms: u64,

    /// Drop results from superseded cycles instead of letting them overwrite newer ones.
    pub discard_stale_results: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 30,
            relay_timeout_ms: 8000,
            discard_stale_results: true,
        }
    }
}

/// A relay hop. `url_template` must contain `{url}` (encoded target) or `{raw}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Relay identifier for logging/metrics.
    pub name: String,

    /// Request URL template, e.g. `https://corsproxy.io/?{url}`.
    pub url_template: String,
}

fn default_relays() -> Vec<RelayConfig> {
    vec![
        RelayConfig {
            name: "corsproxy".to_string(),
            url_template: "https://corsproxy.io/?{url}".to_string(),
        },
        RelayConfig {
            name: "allorigins".to_string(),
            url_template: "https://api.allorigins.win/get?url={url}".to_string(),
        },
    ]
}

/// A monitored service record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Unique service identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub description: String,

    /// Statuspage v2 JSON endpoint.
    pub endpoint_url: String,

    #[serde(default)]
    pub homepage_url: String,
}

/// Mock simulator configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for reproducible simulated data. Thread RNG when absent.
    pub seed: Option<u64>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log line format.
    pub log_format: LogFormat,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
