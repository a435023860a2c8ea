//! Monitor entry points and the periodic loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashSet;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinSet;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::aggregate::{issue_feed, summarize, AggregateSummary};
use crate::check::{CheckOutcome, Checker, CycleId, StatusBoard, WriteOutcome};
use crate::config::validation::MAX_INTERVAL_SECS;
use crate::monitor::error::MonitorError;
use crate::monitor::hooks::StatusObserver;
use crate::monitor::snapshot::{DashboardSnapshot, ServiceView};
use crate::observability::metrics;
use crate::registry::{Registry, ServiceDescriptor};
use crate::status::CheckResult;

/// Totals for one bulk refresh.
#[derive(Debug, Clone, Default)]
pub struct RefreshReport {
    pub cycle: CycleId,
    pub accepted: usize,
    pub stale: usize,
    pub simulated: usize,
    /// Check tasks that panicked or were cancelled.
    pub failed: usize,
    pub elapsed: Duration,
    pub summary: AggregateSummary,
}

impl RefreshReport {
    fn absorb(&mut self, outcome: &CheckOutcome) {
        match outcome.write {
            WriteOutcome::Accepted(_) => self.accepted += 1,
            WriteOutcome::Stale { .. } => self.stale += 1,
        }
        if outcome.result.is_simulated() {
            self.simulated += 1;
        }
    }
}

struct Inner {
    registry: Registry,
    checker: Checker,
    board: StatusBoard,
    observer: Arc<dyn StatusObserver>,
    in_flight: DashSet<String>,
    refreshing: AtomicBool,
}

/// Owns the dashboard state and drives checks against it.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Monitor {
    inner: Arc<Inner>,
}

/// Clears a service's in-flight mark when the manual check ends.
struct InFlight<'a> {
    set: &'a DashSet<String>,
    id: &'a str,
}

impl<'a> InFlight<'a> {
    fn acquire(set: &'a DashSet<String>, id: &'a str) -> Option<Self> {
        set.insert(id.to_string()).then(|| Self { set, id })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.set.remove(self.id);
    }
}

/// Clears the refresh flag, including when the refresh future is dropped.
struct Refreshing<'a>(&'a AtomicBool);

impl Drop for Refreshing<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Monitor {
    pub fn new(
        registry: Registry,
        checker: Checker,
        board: StatusBoard,
        observer: Arc<dyn StatusObserver>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry,
                checker,
                board,
                observer,
                in_flight: DashSet::new(),
                refreshing: AtomicBool::new(false),
            }),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn board(&self) -> &StatusBoard {
        &self.inner.board
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.refreshing.load(Ordering::SeqCst)
    }

    /// Check one service now, outside the periodic cycle.
    pub async fn check_service(&self, id: &str) -> Result<CheckResult, MonitorError> {
        let service = self
            .inner
            .registry
            .get(id)
            .cloned()
            .ok_or_else(|| MonitorError::UnknownService(id.to_string()))?;

        let _guard = InFlight::acquire(&self.inner.in_flight, id)
            .ok_or_else(|| MonitorError::AlreadyChecking(id.to_string()))?;

        let cycle = self.inner.board.begin_cycle();
        tracing::debug!(service = %id, cycle, "Manual check");

        let outcome = self
            .inner
            .checker
            .check_service(&service, &self.inner.board, cycle)
            .await;
        self.publish(&service, &outcome);

        Ok(outcome.result)
    }

    /// Check every registered service concurrently and wait for all of them.
    ///
    /// Returns `None` when another refresh is already running.
    pub async fn refresh_all(&self) -> Option<RefreshReport> {
        if self.inner.refreshing.swap(true, Ordering::SeqCst) {
            tracing::info!("Refresh already in progress, skipping");
            return None;
        }
        let _refreshing = Refreshing(&self.inner.refreshing);

        let started = Instant::now();
        let cycle = self.inner.board.begin_cycle();
        tracing::info!(cycle, services = self.inner.registry.len(), "Refreshing all services");

        let mut tasks = JoinSet::new();
        for service in self.inner.registry.iter() {
            let monitor = self.clone();
            let service = Arc::clone(service);
            tasks.spawn(async move {
                let outcome = monitor
                    .inner
                    .checker
                    .check_service(&service, &monitor.inner.board, cycle)
                    .await;
                monitor.publish(&service, &outcome);
                outcome
            });
        }

        let mut report = RefreshReport {
            cycle,
            ..RefreshReport::default()
        };
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => report.absorb(&outcome),
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(cycle, error = %e, "Check task failed");
                }
            }
        }

        report.elapsed = started.elapsed();
        report.summary = self.summary();

        tracing::info!(
            cycle,
            accepted = report.accepted,
            stale = report.stale,
            simulated = report.simulated,
            failed = report.failed,
            operational = report.summary.operational,
            degraded = report.summary.degraded,
            down = report.summary.down,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Refresh complete"
        );

        Some(report)
    }

    /// Refresh on start, then every `every`, and whenever `triggers` fires.
    ///
    /// A trigger restarts the interval. Triggers that arrive during any
    /// refresh are folded into it. `every` is capped at one day. Returns when
    /// `shutdown` fires.
    pub async fn run(
        &self,
        every: Duration,
        mut triggers: mpsc::Receiver<()>,
        mut shutdown: broadcast::Receiver<()>,
    ) {
        let max = Duration::from_secs(MAX_INTERVAL_SECS);
        if every > max {
            tracing::warn!(
                requested_secs = every.as_secs(),
                max_secs = MAX_INTERVAL_SECS,
                "Interval capped"
            );
        }
        let every = every.min(max);

        tracing::info!(
            interval_secs = every.as_secs(),
            services = self.inner.registry.len(),
            "Monitor starting"
        );

        let mut ticker = time::interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut triggers_open = true;

        if !self.refresh_until(&mut shutdown).await {
            return;
        }
        coalesce(&mut triggers);
        ticker.reset();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if !self.refresh_until(&mut shutdown).await {
                        break;
                    }
                    coalesce(&mut triggers);
                    ticker.reset();
                }
                trigger = triggers.recv(), if triggers_open => match trigger {
                    Some(()) => {
                        tracing::info!("Manual refresh requested");
                        if !self.refresh_until(&mut shutdown).await {
                            break;
                        }
                        coalesce(&mut triggers);
                        ticker.reset();
                    }
                    None => {
                        tracing::debug!("Trigger channel closed");
                        triggers_open = false;
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("Monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// `false` if shutdown fired first; the refresh is then abandoned.
    async fn refresh_until(&self, shutdown: &mut broadcast::Receiver<()>) -> bool {
        tokio::select! {
            _ = self.refresh_all() => true,
            _ = shutdown.recv() => {
                tracing::info!("Shutdown during refresh, abandoning in-flight checks");
                false
            }
        }
    }

    /// Current dashboard state in registry order.
    pub fn snapshot(&self) -> DashboardSnapshot {
        let registry = &self.inner.registry;
        let board = &self.inner.board;
        let entries = board.entries(registry);

        DashboardSnapshot {
            generated_at: Utc::now(),
            summary: summarize(entries.iter().map(|(_, r)| r), registry.len()),
            feed: issue_feed(&entries),
            services: registry
                .iter()
                .map(|service| {
                    let slot = board.slot(&service.id);
                    let (result, history) = match slot {
                        Some(slot) => (Some(slot.result), slot.history),
                        None => (None, Default::default()),
                    };
                    ServiceView::new(service, result, history)
                })
                .collect(),
        }
    }

    /// Notify observers of an accepted result, then of the summary and feed
    /// it produces. Stale writes notify nobody.
    fn publish(&self, service: &ServiceDescriptor, outcome: &CheckOutcome) {
        let WriteOutcome::Accepted(history) = &outcome.write else {
            return;
        };
        let observer = &self.inner.observer;
        observer.on_result_updated(service, &outcome.result, history);

        let entries = self.inner.board.entries(&self.inner.registry);
        let summary = summarize(entries.iter().map(|(_, r)| r), self.inner.registry.len());
        metrics::record_summary(&summary);
        observer.on_batch_summary_updated(&summary);
        observer.on_feed_updated(&issue_feed(&entries));
    }

    fn summary(&self) -> AggregateSummary {
        let entries = self.inner.board.entries(&self.inner.registry);
        summarize(entries.iter().map(|(_, r)| r), self.inner.registry.len())
    }
}

/// Drop triggers queued while a refresh ran; that refresh already served them.
fn coalesce(triggers: &mut mpsc::Receiver<()>) {
    let mut folded = 0;
    while triggers.try_recv().is_ok() {
        folded += 1;
    }
    if folded > 0 {
        tracing::debug!(folded, "Coalesced refresh triggers");
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("services", &self.inner.registry.len())
            .field("checked", &self.inner.board.len())
            .field("refreshing", &self.is_refreshing())
            .finish()
    }
}
