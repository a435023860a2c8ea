//! Canonical check results and rolling history.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of samples kept per service.
pub const HISTORY_CAPACITY: usize = 12;

/// Health classification of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Operational,
    Degraded,
    Down,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Operational => "operational",
            ServiceStatus::Degraded => "degraded",
            ServiceStatus::Down => "down",
        }
    }

    /// Degraded or down.
    pub fn is_issue(&self) -> bool {
        !matches!(self, ServiceStatus::Operational)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check of one service.
///
/// Constructed only through [`CheckResult::live`] and [`CheckResult::simulated`],
/// which guarantee that a `Down` result never carries a latency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    status: ServiceStatus,
    latency_ms: Option<u64>,
    message: String,
    observed_at: DateTime<Utc>,
    is_simulated: bool,
}

impl CheckResult {
    /// A result derived from a parsed upstream document.
    pub fn live(status: ServiceStatus, latency_ms: u64, message: impl Into<String>) -> Self {
        Self::build(status, Some(latency_ms), message.into(), false)
    }

    /// A result synthesized by the mock simulator.
    pub fn simulated(
        status: ServiceStatus,
        latency_ms: Option<u64>,
        message: impl Into<String>,
    ) -> Self {
        Self::build(status, latency_ms, message.into(), true)
    }

    fn build(
        status: ServiceStatus,
        latency_ms: Option<u64>,
        message: String,
        is_simulated: bool,
    ) -> Self {
        let latency_ms = match status {
            ServiceStatus::Down => None,
            _ => latency_ms,
        };
        Self {
            status,
            latency_ms,
            message,
            observed_at: Utc::now(),
            is_simulated,
        }
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub fn latency_ms(&self) -> Option<u64> {
        self.latency_ms
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    pub fn is_simulated(&self) -> bool {
        self.is_simulated
    }

    /// Re-stamp at finalization time.
    pub(crate) fn stamp(mut self, at: DateTime<Utc>) -> Self {
        self.observed_at = at;
        self
    }
}

/// One entry of a service's rolling history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistorySample {
    pub status: ServiceStatus,
    pub latency_ms: Option<u64>,
}

impl From<&CheckResult> for HistorySample {
    fn from(result: &CheckResult) -> Self {
        Self {
            status: result.status,
            latency_ms: result.latency_ms,
        }
    }
}

/// Bounded FIFO of the most recent samples, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HistoryLog {
    samples: VecDeque<HistorySample>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    pub fn push(&mut self, sample: HistorySample) {
        self.samples.push_back(sample);
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter()
    }
}
