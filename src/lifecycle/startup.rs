//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration (or fall back to the built-in catalog)
//! - Wire registry, relay chain, simulator and board into a `Monitor`
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The transport is injectable so tests can run the real wiring offline

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::check::{Checker, StatusBoard};
use crate::config::{load_config, ConfigError, RadarConfig};
use crate::monitor::{Monitor, StatusObserver};
use crate::registry::Registry;
use crate::relay::{FetchError, HttpTransport, RelayChain, Transport};
use crate::simulate::MockSimulator;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Transport(#[from] FetchError),
}

/// Read `path` if given, otherwise use defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<RadarConfig, StartupError> {
    match path {
        Some(path) => {
            let config = load_config(path)?;
            tracing::info!(path = %path.display(), services = config.services.len(), "Configuration loaded");
            Ok(config)
        }
        None => {
            tracing::info!("No configuration file given, using built-in catalog");
            Ok(RadarConfig::default())
        }
    }
}

/// Build a monitor that fetches over HTTP.
pub fn build_monitor(
    config: &RadarConfig,
    observer: Arc<dyn StatusObserver>,
) -> Result<Monitor, StartupError> {
    let transport = HttpTransport::new()?;
    Ok(build_monitor_with(config, Arc::new(transport), observer))
}

pub fn build_monitor_with(
    config: &RadarConfig,
    transport: Arc<dyn Transport>,
    observer: Arc<dyn StatusObserver>,
) -> Monitor {
    let registry = Registry::from_config(config);
    let chain = RelayChain::from_config(config, transport);
    let simulator = MockSimulator::from_config(&config.simulation);
    let board = StatusBoard::new(config.poll.discard_stale_results);

    tracing::info!(
        services = registry.len(),
        relays = chain.relays().len(),
        relay_timeout_ms = config.poll.relay_timeout_ms,
        discard_stale = config.poll.discard_stale_results,
        seeded = config.simulation.seed.is_some(),
        "Monitor initialized"
    );

    Monitor::new(registry, Checker::new(chain, simulator), board, observer)
}
