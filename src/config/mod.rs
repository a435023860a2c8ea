//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RadarConfig (validated, immutable)
//!     → Registry / RelayChain / Monitor built from it at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the registry never changes at runtime
//! - All fields have defaults, so no file at all means the built-in catalog
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    LogFormat, ObservabilityConfig, PollConfig, RadarConfig, RelayConfig, ServiceConfig,
    SimulationConfig,
};
