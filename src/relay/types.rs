//! Relay error definitions.

use thiserror::Error;

/// Why a single relay attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Attempt exceeded its deadline and was aborted.
    #[error("timed out after {0} ms")]
    Timeout(u64),

    /// Relay answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Connection or protocol failure.
    #[error("network error: {0}")]
    Network(String),

    /// Body was not JSON.
    #[error("undecodable body: {0}")]
    Decode(String),

    /// Body was JSON but not a usable status document.
    #[error("unrecognized status document")]
    Rejected,
}

impl FetchError {
    /// Short label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            FetchError::Timeout(_) => "timeout",
            FetchError::Status(_) => "status",
            FetchError::Network(_) => "network",
            FetchError::Decode(_) => "decode",
            FetchError::Rejected => "rejected",
        }
    }
}

/// A failed attempt, tagged with the relay that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayFailure {
    pub relay: String,
    pub error: FetchError,
}

/// Terminal outcome of a relay chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("all {} relays failed", .0.len())]
    Exhausted(Vec<RelayFailure>),
}

impl RelayError {
    pub fn failures(&self) -> &[RelayFailure] {
        match self {
            RelayError::Exhausted(failures) => failures,
        }
    }
}
