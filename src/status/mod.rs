//! Status model and upstream normalization.
//!
//! # Data Flow
//! ```text
//! relay body (serde_json::Value)
//!     → normalizer.rs (unwrap envelope, read status.indicator)
//!     → Normalized {status, message}
//!     → CheckResult (types.rs), stamped and stored by the checker
//! ```
//!
//! # Design Decisions
//! - Normalization never fails loudly; `None` means "try the next relay"
//! - `CheckResult` fields are private so a down result can never carry latency

pub mod normalizer;
pub mod types;

pub use normalizer::{normalize, Indicator, Normalized};
pub use types::{CheckResult, HistoryLog, HistorySample, ServiceStatus, HISTORY_CAPACITY};
