//! Metrics collection and exposition.
//!
//! # Metrics
//! - `radar_checks_total` (counter): checks by service, status, simulated
//! - `radar_check_latency_ms` (histogram): measured or simulated latency
//! - `radar_relay_failures_total` (counter): failed attempts by relay, reason
//! - `radar_stale_results_total` (counter): results dropped as superseded
//! - `radar_services` (gauge): latest counts by status
//!
//! # Design Decisions
//! - Facade calls are no-ops until a recorder is installed, so tests need no setup
//! - Prometheus endpoint is opt-in

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::aggregate::AggregateSummary;
use crate::status::ServiceStatus;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_relay_failure(relay: &str, reason: &'static str) {
    ::metrics::counter!(
        "radar_relay_failures_total",
        "relay" => relay.to_string(),
        "reason" => reason
    )
    .increment(1);
}

pub fn record_check(service: &str, status: ServiceStatus, simulated: bool, latency_ms: Option<u64>) {
    ::metrics::counter!(
        "radar_checks_total",
        "service" => service.to_string(),
        "status" => status.as_str(),
        "simulated" => if simulated { "true" } else { "false" }
    )
    .increment(1);

    if let Some(ms) = latency_ms {
        ::metrics::histogram!("radar_check_latency_ms", "service" => service.to_string())
            .record(ms as f64);
    }
}

pub fn record_stale_result(service: &str) {
    ::metrics::counter!("radar_stale_results_total", "service" => service.to_string()).increment(1);
}

pub fn record_summary(summary: &AggregateSummary) {
    ::metrics::gauge!("radar_services", "status" => "operational").set(summary.operational as f64);
    ::metrics::gauge!("radar_services", "status" => "degraded").set(summary.degraded as f64);
    ::metrics::gauge!("radar_services", "status" => "down").set(summary.down as f64);
}
