//! Per-service check workflow.
//!
//! ```text
//! start → relay 1 → relay 2 → … ─┬─ normalized   → live result
//!                                 └─ exhausted    → simulated result
//!       → finalize (stamp, store, history)
//! ```

use std::time::Instant;

use chrono::Utc;

use crate::check::board::{CycleId, StatusBoard, WriteOutcome};
use crate::observability::metrics;
use crate::registry::ServiceDescriptor;
use crate::relay::{RelayChain, RelayError};
use crate::simulate::MockSimulator;
use crate::status::{normalize, CheckResult};

/// Result of one finalized check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub service_id: String,
    pub cycle: CycleId,
    pub result: CheckResult,
    pub write: WriteOutcome,
}

/// Combines the relay chain, normalizer and simulator into one infallible check.
#[derive(Debug, Clone)]
pub struct Checker {
    chain: RelayChain,
    simulator: MockSimulator,
}

impl Checker {
    pub fn new(chain: RelayChain, simulator: MockSimulator) -> Self {
        Self { chain, simulator }
    }

    /// Acquire a result without touching any state. Never fails.
    pub async fn evaluate(&self, service: &ServiceDescriptor) -> CheckResult {
        let started = Instant::now();

        match self
            .chain
            .fetch_with(&service.endpoint_url, |body| normalize(&body))
            .await
        {
            Ok(normalized) => {
                let latency_ms = started.elapsed().as_millis() as u64;
                tracing::debug!(
                    service = %service.id,
                    status = %normalized.status,
                    latency_ms,
                    "Live status acquired"
                );
                CheckResult::live(normalized.status, latency_ms, normalized.message)
            }
            Err(RelayError::Exhausted(failures)) => {
                let result = self.simulator.simulate_result(&service.profile());
                tracing::info!(
                    service = %service.id,
                    relays_failed = failures.len(),
                    status = %result.status(),
                    "All relays failed, using simulated status"
                );
                result
            }
        }
    }

    /// Evaluate, then finalize into `board` under `cycle`.
    pub async fn check_service(
        &self,
        service: &ServiceDescriptor,
        board: &StatusBoard,
        cycle: CycleId,
    ) -> CheckOutcome {
        let result = self.evaluate(service).await.stamp(Utc::now());

        metrics::record_check(
            &service.id,
            result.status(),
            result.is_simulated(),
            result.latency_ms(),
        );

        let write = board.record(&service.id, cycle, result.clone());
        if let WriteOutcome::Stale { latest } = write {
            tracing::debug!(
                service = %service.id,
                cycle,
                latest,
                "Discarding result from superseded cycle"
            );
            metrics::record_stale_result(&service.id);
        }

        CheckOutcome {
            service_id: service.id.clone(),
            cycle,
            result,
            write,
        }
    }
}
