//! Status radar library.
//!
//! Polls Statuspage-style JSON endpoints through an ordered chain of relay
//! proxies, falls back to per-service simulated results when every relay
//! fails, and maintains latest results, rolling history, summary counts and an
//! issue feed.

pub mod config;
pub mod registry;
pub mod status;

// Acquisition
pub mod relay;
pub mod simulate;

// Orchestration
pub mod aggregate;
pub mod check;
pub mod monitor;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RadarConfig;
pub use lifecycle::Shutdown;
pub use monitor::{Monitor, MonitorError, StatusObserver};
pub use registry::Registry;
pub use status::{CheckResult, ServiceStatus};
