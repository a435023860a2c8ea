//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     RadarConfig → Registry + RelayChain + MockSimulator + StatusBoard → Monitor
//!
//! Signals (signals.rs):
//!     Ctrl-C → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → Monitor::run leaves its loop → in-flight checks abandoned → exit
//! ```
//!
//! # Design Decisions
//! - Startup failures are fatal and reported before any check runs
//! - A second Ctrl-C is not special-cased; the first one already ends the loop

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{build_monitor, build_monitor_with, load_or_default, StartupError};
