//! Statuspage v2 response normalization.
//!
//! Relays hand back one of three shapes:
//! ```text
//! {"status": {"indicator": "none", "description": "..."}}    direct
//! {"contents": "{\"status\": {...}}"}                           envelope (one level)
//! "{\"status\": {...}}"                                         bare JSON string
//! ```
//! Anything else, or a missing/null/empty indicator, normalizes to `None`.
//! A non-string indicator counts as an unknown one; a non-string description
//! is kept as its JSON text.

use serde::Deserialize;
use serde_json::Value;

use crate::status::types::ServiceStatus;

const ENVELOPE_KEY: &str = "contents";

/// Canonical health extracted from an upstream document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub status: ServiceStatus,
    pub message: String,
}

/// Upstream status vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    None,
    Minor,
    Maintenance,
    Major,
    Critical,
    Other(String),
}

impl Indicator {
    fn parse(raw: &str) -> Option<Self> {
        let indicator = match raw {
            "" => return None,
            "none" => Indicator::None,
            "minor" => Indicator::Minor,
            "maintenance" => Indicator::Maintenance,
            "major" => Indicator::Major,
            "critical" => Indicator::Critical,
            other => Indicator::Other(other.to_string()),
        };
        Some(indicator)
    }

    pub fn status(&self) -> ServiceStatus {
        match self {
            Indicator::None => ServiceStatus::Operational,
            Indicator::Minor | Indicator::Maintenance => ServiceStatus::Degraded,
            _ => ServiceStatus::Down,
        }
    }
}

#[derive(Deserialize)]
struct StatusDocument {
    status: Option<StatusBlock>,
}

#[derive(Deserialize)]
struct StatusBlock {
    #[serde(default)]
    indicator: Value,
    #[serde(default)]
    description: Value,
}

/// Map a raw relay body onto `{status, message}`.
pub fn normalize(raw: &Value) -> Option<Normalized> {
    let document = unwrap_envelope(decode_string(raw)?)?;

    let parsed: StatusDocument = serde_json::from_value(document).ok()?;
    let block = parsed.status?;
    let indicator = match block.indicator {
        Value::Null => return None,
        Value::String(raw) => Indicator::parse(&raw)?,
        other => Indicator::Other(other.to_string()),
    };
    let message = match block.description {
        Value::Null => "Unknown".to_string(),
        Value::String(text) => text,
        other => other.to_string(),
    };

    Some(Normalized {
        status: indicator.status(),
        message,
    })
}

/// A bare string body is itself JSON text.
fn decode_string(raw: &Value) -> Option<Value> {
    match raw {
        Value::String(text) => serde_json::from_str(text).ok(),
        other => Some(other.clone()),
    }
}

fn unwrap_envelope(document: Value) -> Option<Value> {
    match document.get(ENVELOPE_KEY) {
        Some(Value::String(inner)) if !inner.is_empty() => serde_json::from_str(inner).ok(),
        Some(inner @ Value::Object(_)) => Some(inner.clone()),
        Some(Value::Null) | Some(Value::String(_)) | None => Some(document),
        Some(_) => None,
    }
}
