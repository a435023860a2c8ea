//! Scrolling issue feed.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::registry::ServiceDescriptor;
use crate::status::{CheckResult, ServiceStatus};

/// Operational entries shown after the all-clear headline.
const ALL_CLEAR_LIMIT: usize = 8;
/// Operational entries padding a feed that has issues.
const PADDING_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedItem {
    AllClear,
    Issue {
        service_id: String,
        name: String,
        status: ServiceStatus,
        message: String,
    },
    Healthy {
        service_id: String,
        name: String,
        latency_ms: Option<u64>,
    },
}

impl fmt::Display for FeedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedItem::AllClear => f.write_str("All monitored services operational"),
            FeedItem::Issue { name, message, .. } => write!(f, "{}: {}", name, message),
            FeedItem::Healthy { name, latency_ms: Some(ms), .. } => write!(f, "{} ({}ms)", name, ms),
            FeedItem::Healthy { name, latency_ms: None, .. } => write!(f, "{} (ok)", name),
        }
    }
}

fn rank(status: ServiceStatus) -> u8 {
    match status {
        ServiceStatus::Down => 0,
        ServiceStatus::Degraded => 1,
        ServiceStatus::Operational => 2,
    }
}

/// Build the feed from results in registry order.
pub fn issue_feed(entries: &[(Arc<ServiceDescriptor>, CheckResult)]) -> Vec<FeedItem> {
    let mut issues: Vec<_> = entries.iter().filter(|(_, r)| r.status().is_issue()).collect();
    let healthy = entries.iter().filter(|(_, r)| !r.status().is_issue());

    let healthy_item = |(service, result): &(Arc<ServiceDescriptor>, CheckResult)| FeedItem::Healthy {
        service_id: service.id.clone(),
        name: service.name.clone(),
        latency_ms: result.latency_ms(),
    };

    if issues.is_empty() {
        if entries.is_empty() {
            return Vec::new();
        }
        return std::iter::once(FeedItem::AllClear)
            .chain(healthy.take(ALL_CLEAR_LIMIT).map(healthy_item))
            .collect();
    }

    issues.sort_by_key(|(_, r)| rank(r.status()));
    issues
        .into_iter()
        .map(|(service, result)| FeedItem::Issue {
            service_id: service.id.clone(),
            name: service.name.clone(),
            status: result.status(),
            message: if result.message().is_empty() {
                result.status().to_string()
            } else {
                result.message().to_string()
            },
        })
        .chain(healthy.take(PADDING_LIMIT).map(healthy_item))
        .collect()
}
