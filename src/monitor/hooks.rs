//! Presentation hooks.

use crate::aggregate::{AggregateSummary, FeedItem};
use crate::registry::ServiceDescriptor;
use crate::status::{CheckResult, HistoryLog};

/// Receives dashboard updates as checks finalize.
///
/// Called from check tasks, so implementations must be cheap and must not block.
pub trait StatusObserver: Send + Sync {
    /// A service's result was stored. `history` includes it.
    fn on_result_updated(&self, service: &ServiceDescriptor, result: &CheckResult, history: &HistoryLog);

    /// Summary counts, recomputed after every accepted result.
    fn on_batch_summary_updated(&self, summary: &AggregateSummary);

    fn on_feed_updated(&self, _feed: &[FeedItem]) {}
}

/// Renders updates as log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl StatusObserver for TracingObserver {
    fn on_result_updated(&self, service: &ServiceDescriptor, result: &CheckResult, history: &HistoryLog) {
        tracing::info!(
            service = %service.id,
            name = %service.name,
            status = %result.status(),
            latency_ms = ?result.latency_ms(),
            simulated = result.is_simulated(),
            samples = history.len(),
            message = %result.message(),
            "Status updated"
        );
    }

    fn on_batch_summary_updated(&self, summary: &AggregateSummary) {
        tracing::debug!(
            operational = summary.operational,
            degraded = summary.degraded,
            down = summary.down,
            avg_latency_ms = ?summary.average_latency_ms,
            "{} of {} services checked",
            summary.checked,
            summary.total
        );
    }

    fn on_feed_updated(&self, feed: &[FeedItem]) {
        for item in feed {
            tracing::debug!(item = %item, "Feed");
        }
    }
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StatusObserver for NoopObserver {
    fn on_result_updated(&self, _: &ServiceDescriptor, _: &CheckResult, _: &HistoryLog) {}

    fn on_batch_summary_updated(&self, _: &AggregateSummary) {}
}
