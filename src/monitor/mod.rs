//! Monitor subsystem.
//!
//! # Data Flow
//! ```text
//! run():  start ─┐
//!         tick  ─┼─→ refresh_all() → JoinSet (one task per service)
//!         trigger┘        → Checker::check_service → StatusBoard
//!                         → StatusObserver::on_result_updated
//!                         → summarize + issue_feed
//!                         → StatusObserver::on_batch_summary_updated / on_feed_updated
//!                  all settled → RefreshReport
//!
//! check_service(id) → same path for one service, guarded per id
//! ```
//!
//! # Design Decisions
//! - Bulk refreshes never overlap; a second request is skipped
//! - A panicking check task is logged and counted, never fatal to the batch
//! - The interval restarts after every refresh, including manual ones
//! - Hooks fire per accepted result, so counts never lag the slowest relay

pub mod error;
pub mod hooks;
pub mod runner;
pub mod snapshot;

pub use error::MonitorError;
pub use hooks::{NoopObserver, StatusObserver, TracingObserver};
pub use runner::{Monitor, RefreshReport};
pub use snapshot::{DashboardSnapshot, ServiceView};
