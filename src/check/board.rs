//! Result store and rolling history, keyed by service id.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;

use crate::registry::{Registry, ServiceDescriptor};
use crate::status::{CheckResult, HistoryLog, HistorySample};

/// Tag identifying the refresh (or manual check) a result belongs to.
pub type CycleId = u64;

/// Latest state of one service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceSlot {
    pub result: CheckResult,
    pub history: HistoryLog,
    pub cycle: CycleId,
}

/// What happened to a result handed to [`StatusBoard::record`].
#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// Stored; carries the history after the push.
    Accepted(HistoryLog),
    /// Dropped because a newer cycle already wrote this slot.
    Stale { latest: CycleId },
}

impl WriteOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, WriteOutcome::Accepted(_))
    }
}

/// Shared dashboard state.
///
/// Each slot is updated under its shard lock, so concurrent writes for the same
/// service are serialized while different services never contend on a slot.
#[derive(Debug)]
pub struct StatusBoard {
    slots: DashMap<String, ServiceSlot>,
    cycles: AtomicU64,
    discard_stale: bool,
}

impl StatusBoard {
    pub fn new(discard_stale: bool) -> Self {
        Self {
            slots: DashMap::new(),
            cycles: AtomicU64::new(0),
            discard_stale,
        }
    }

    /// Allocate the next cycle id. Later calls always return larger ids.
    pub fn begin_cycle(&self) -> CycleId {
        self.cycles.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current_cycle(&self) -> CycleId {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Store a finalized result and append it to the service's history.
    pub fn record(&self, service_id: &str, cycle: CycleId, result: CheckResult) -> WriteOutcome {
        let sample = HistorySample::from(&result);

        match self.slots.entry(service_id.to_string()) {
            Entry::Occupied(mut entry) => {
                let slot = entry.get_mut();
                if self.discard_stale && cycle < slot.cycle {
                    return WriteOutcome::Stale { latest: slot.cycle };
                }
                slot.result = result;
                slot.cycle = slot.cycle.max(cycle);
                slot.history.push(sample);
                WriteOutcome::Accepted(slot.history.clone())
            }
            Entry::Vacant(entry) => {
                let mut history = HistoryLog::new();
                history.push(sample);
                entry.insert(ServiceSlot {
                    result,
                    history: history.clone(),
                    cycle,
                });
                WriteOutcome::Accepted(history)
            }
        }
    }

    pub fn slot(&self, service_id: &str) -> Option<ServiceSlot> {
        self.slots.get(service_id).map(|s| s.value().clone())
    }

    pub fn latest(&self, service_id: &str) -> Option<CheckResult> {
        self.slots.get(service_id).map(|s| s.result.clone())
    }

    pub fn history(&self, service_id: &str) -> HistoryLog {
        self.slots
            .get(service_id)
            .map(|s| s.history.clone())
            .unwrap_or_default()
    }

    /// Latest results in no particular order.
    pub fn results(&self) -> Vec<CheckResult> {
        self.slots.iter().map(|s| s.result.clone()).collect()
    }

    /// Latest results for checked services, in registry order.
    pub fn entries(&self, registry: &Registry) -> Vec<(Arc<ServiceDescriptor>, CheckResult)> {
        registry
            .iter()
            .filter_map(|service| {
                self.latest(&service.id)
                    .map(|result| (Arc::clone(service), result))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new(true)
    }
}
