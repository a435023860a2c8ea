use thiserror::Error;

/// Rejections for manual single-service checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    #[error("unknown service '{0}'")]
    UnknownService(String),
    #[error("a check for '{0}' is already in progress")]
    AlreadyChecking(String),
}
