//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! relay chain, checker, monitor produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Service id and relay name are structured fields on every event
//! - Relay failures log at debug; a fully simulated check logs at info

pub mod logging;
pub mod metrics;
