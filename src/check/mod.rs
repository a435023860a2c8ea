//! Check orchestration.
//!
//! # Data Flow
//! ```text
//! ServiceDescriptor + CycleId
//!     → checker.rs (relay chain → normalize → simulate on exhaustion)
//!     → CheckResult stamped with observed_at
//!     → board.rs (store latest, push history, drop stale cycles)
//! ```
//!
//! # Design Decisions
//! - A check cannot fail; the worst case is a simulated result
//! - State lives in an explicit `StatusBoard` owned by the caller
//! - Every write carries a cycle id so a slow, superseded check cannot
//!   overwrite a newer result (configurable)

pub mod board;
pub mod checker;

pub use board::{CycleId, ServiceSlot, StatusBoard, WriteOutcome};
pub use checker::{CheckOutcome, Checker};
