//! Ordered relay fallback.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::time::timeout;

use crate::config::RadarConfig;
use crate::observability::metrics;
use crate::relay::transform::Relay;
use crate::relay::transport::Transport;
use crate::relay::types::{FetchError, RelayError, RelayFailure};

/// Tries each relay in order until one yields a usable document.
#[derive(Clone)]
pub struct RelayChain {
    relays: Arc<[Relay]>,
    transport: Arc<dyn Transport>,
    attempt_timeout: Duration,
}

impl RelayChain {
    pub fn new(relays: Vec<Relay>, transport: Arc<dyn Transport>, attempt_timeout: Duration) -> Self {
        Self {
            relays: relays.into(),
            transport,
            attempt_timeout,
        }
    }

    pub fn from_config(config: &RadarConfig, transport: Arc<dyn Transport>) -> Self {
        Self::new(
            config.relays.iter().map(Relay::from).collect(),
            transport,
            Duration::from_millis(config.poll.relay_timeout_ms),
        )
    }

    pub fn relays(&self) -> &[Relay] {
        &self.relays
    }

    /// First document any relay returns that `parse` accepts.
    ///
    /// A rejected document counts as a failure of that relay and the chain
    /// moves on, exactly as for a network error.
    pub async fn fetch_with<T, F>(&self, target: &str, mut parse: F) -> Result<T, RelayError>
    where
        F: FnMut(Value) -> Option<T>,
    {
        let mut failures = Vec::with_capacity(self.relays.len());

        for relay in self.relays.iter() {
            let error = match self.attempt(relay, target).await {
                Ok(body) => match parse(body) {
                    Some(parsed) => return Ok(parsed),
                    None => FetchError::Rejected,
                },
                Err(e) => e,
            };

            tracing::debug!(
                relay = relay.name(),
                target = %target,
                error = %error,
                "Relay attempt failed, trying next relay"
            );
            metrics::record_relay_failure(relay.name(), error.reason());
            failures.push(RelayFailure {
                relay: relay.name().to_string(),
                error,
            });
        }

        Err(RelayError::Exhausted(failures))
    }

    async fn attempt(&self, relay: &Relay, target: &str) -> Result<Value, FetchError> {
        let url = relay.request_url(target);
        let started = Instant::now();

        // Dropping the in-flight future on timeout aborts the request.
        let outcome = match timeout(self.attempt_timeout, self.transport.get_json(&url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.attempt_timeout.as_millis() as u64)),
        };

        tracing::trace!(
            relay = relay.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = outcome.is_ok(),
            "Relay attempt finished"
        );
        outcome
    }
}

impl std::fmt::Debug for RelayChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayChain")
            .field("relays", &self.relays)
            .field("attempt_timeout", &self.attempt_timeout)
            .finish_non_exhaustive()
    }
}
