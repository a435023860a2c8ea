//! Dashboard summary counts.

use serde::Serialize;

use crate::status::{CheckResult, ServiceStatus};

/// Stats strip values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSummary {
    pub operational: usize,
    pub degraded: usize,
    pub down: usize,
    /// Mean over results that carry a latency; down results never do.
    pub average_latency_ms: Option<u64>,
    /// Services with at least one result.
    pub checked: usize,
    /// Services in the registry.
    pub total: usize,
}

pub fn summarize<'a>(
    results: impl IntoIterator<Item = &'a CheckResult>,
    total: usize,
) -> AggregateSummary {
    let mut summary = AggregateSummary {
        total,
        ..AggregateSummary::default()
    };
    let mut latency_sum = 0u64;
    let mut latency_count = 0u64;

    for result in results {
        summary.checked += 1;
        match result.status() {
            ServiceStatus::Operational => summary.operational += 1,
            ServiceStatus::Degraded => summary.degraded += 1,
            ServiceStatus::Down => summary.down += 1,
        }
        if let Some(ms) = result.latency_ms() {
            latency_sum += ms;
            latency_count += 1;
        }
    }

    if latency_count > 0 {
        summary.average_latency_ms = Some((latency_sum as f64 / latency_count as f64).round() as u64);
    }
    summary
}
