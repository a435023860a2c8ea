//! Service registry.
//!
//! # Data Flow
//! ```text
//! RadarConfig.services       (ordered records)
//! RadarConfig.mock_profiles  (id -> profile, parallel map)
//!     → Registry::from_config (join by id)
//!     → Arc<ServiceDescriptor> handed to every check task
//! ```
//!
//! # Design Decisions
//! - Descriptors are immutable once the registry is built
//! - Registry order is display order; the issue feed relies on it
//! - A service without a profile simulates with `MockProfile::default()`

pub mod catalog;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RadarConfig;

/// Latency/availability personality used when live data is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MockProfile {
    /// Typical latency in milliseconds.
    pub base_latency_ms: u32,
    /// Maximum swing around the base, in milliseconds.
    pub variance_ms: u32,
    /// Probability (0..=1) of drawing an operational result.
    pub up_probability: f64,
}

impl Default for MockProfile {
    fn default() -> Self {
        Self {
            base_latency_ms: 150,
            variance_ms: 100,
            up_probability: 0.95,
        }
    }
}

/// A monitored third-party service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceDescriptor {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    /// Statuspage v2 JSON endpoint.
    pub endpoint_url: String,
    /// Human-facing status page.
    pub homepage_url: String,
    pub mock: Option<MockProfile>,
}

impl ServiceDescriptor {
    /// Profile used by the simulator for this service.
    pub fn profile(&self) -> MockProfile {
        self.mock.unwrap_or_default()
    }
}

/// Ordered, read-only set of monitored services.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    services: Vec<Arc<ServiceDescriptor>>,
}

impl Registry {
    pub fn new(services: Vec<ServiceDescriptor>) -> Self {
        Self {
            services: services.into_iter().map(Arc::new).collect(),
        }
    }

    /// Join the configured service records with their mock profiles.
    pub fn from_config(config: &RadarConfig) -> Self {
        let profiles: &HashMap<String, MockProfile> = &config.mock_profiles;

        for id in profiles.keys() {
            if !config.services.iter().any(|s| &s.id == id) {
                tracing::warn!(service = %id, "Mock profile has no matching service, ignoring");
            }
        }

        let services = config
            .services
            .iter()
            .map(|s| ServiceDescriptor {
                id: s.id.clone(),
                name: s.name.clone(),
                category: s.category.clone(),
                description: s.description.clone(),
                endpoint_url: s.endpoint_url.clone(),
                homepage_url: s.homepage_url.clone(),
                mock: profiles.get(&s.id).copied(),
            })
            .collect();

        Self::new(services)
    }

    /// The built-in catalog of Statuspage-backed services.
    pub fn builtin() -> Self {
        Self::from_config(&RadarConfig::default())
    }

    pub fn get(&self, id: &str) -> Option<&Arc<ServiceDescriptor>> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ServiceDescriptor>> {
        self.services.iter()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;

    fn service(id: &str) -> ServiceConfig {
        ServiceConfig {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "Test".to_string(),
            description: String::new(),
            endpoint_url: format!("https://{}.example.com/api/v2/status.json", id),
            homepage_url: format!("https://{}.example.com", id),
        }
    }

    #[test]
    fn test_builtin_registry_has_profiles() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), 20);
        assert!(registry.iter().all(|s| s.mock.is_some()));

        let cf = registry.get("cf").expect("cloudflare missing");
        assert_eq!(cf.profile().base_latency_ms, 55);
    }

    #[test]
    fn test_missing_profile_falls_back_to_default() {
        let mut config = RadarConfig::default();
        config.services = vec![service("alpha"), service("beta")];
        config.mock_profiles = HashMap::from([(
            "alpha".to_string(),
            MockProfile { base_latency_ms: 10, variance_ms: 0, up_probability: 1.0 },
        )]);

        let registry = Registry::from_config(&config);
        let ids: Vec<_> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["alpha", "beta"]);

        assert_eq!(registry.get("alpha").unwrap().profile().base_latency_ms, 10);
        assert_eq!(registry.get("beta").unwrap().profile(), MockProfile::default());
    }
}
