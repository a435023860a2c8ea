//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, probabilities in 0..=1)
//! - Check relay templates and service endpoints are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RadarConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::RadarConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("at least one relay must be configured")]
    NoRelays,

    #[error("relay '{0}' url_template must contain {{url}} or {{raw}}")]
    RelayTemplate(String),

    #[error("poll.{0} must be greater than 0")]
    ZeroDuration(&'static str),

    #[error("poll.interval_secs must be at most 86400 (one day), got {0}")]
    IntervalTooLong(u64),

    #[error("service id cannot be empty")]
    EmptyServiceId,

    #[error("duplicate service id '{0}'")]
    DuplicateService(String),

    #[error("service '{id}' has invalid endpoint_url: {reason}")]
    InvalidEndpoint { id: String, reason: String },

    #[error("mock profile '{0}' up_probability must be within 0..=1")]
    Probability(String),
}

/// Longest accepted polling interval (one day).
pub const MAX_INTERVAL_SECS: u64 = 86_400;

pub fn validate_config(config: &RadarConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.relays.is_empty() {
        errors.push(ValidationError::NoRelays);
    }
    for relay in &config.relays {
        if !relay.url_template.contains("{url}") && !relay.url_template.contains("{raw}") {
            errors.push(ValidationError::RelayTemplate(relay.name.clone()));
        }
    }

    if config.poll.interval_secs == 0 {
        errors.push(ValidationError::ZeroDuration("interval_secs"));
    } else if config.poll.interval_secs > MAX_INTERVAL_SECS {
        errors.push(ValidationError::IntervalTooLong(config.poll.interval_secs));
    }
    if config.poll.relay_timeout_ms == 0 {
        errors.push(ValidationError::ZeroDuration("relay_timeout_ms"));
    }

    let mut seen = HashSet::new();
    for service in &config.services {
        if service.id.is_empty() {
            errors.push(ValidationError::EmptyServiceId);
            continue;
        }
        if !seen.insert(service.id.as_str()) {
            errors.push(ValidationError::DuplicateService(service.id.clone()));
        }
        if let Err(e) = Url::parse(&service.endpoint_url) {
            errors.push(ValidationError::InvalidEndpoint {
                id: service.id.clone(),
                reason: e.to_string(),
            });
        }
    }

    for (id, profile) in &config.mock_profiles {
        if !(0.0..=1.0).contains(&profile.up_probability) {
            errors.push(ValidationError::Probability(id.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
