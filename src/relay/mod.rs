//! Relay subsystem (proxy fetcher).
//!
//! # Data Flow
//! ```text
//! target endpoint URL
//!     → transform.rs (relay N wraps the URL)
//!     → transport.rs (GET, JSON decode) under a per-attempt timeout
//!     → chain.rs: success → parse step; failure/rejection → relay N+1
//!     → Exhausted { failures } when every relay failed
//! ```
//!
//! # Design Decisions
//! - Strict order, one attempt per relay, no retries
//! - Timeouts cancel by dropping the request future
//! - Failures are values (`FetchError`), logged and counted, never raised
//! - Transport is a trait so tests can script relay behaviour

pub mod chain;
pub mod transform;
pub mod transport;
pub mod types;

pub use chain::RelayChain;
pub use transform::Relay;
pub use transport::{HttpTransport, Transport};
pub use types::{FetchError, RelayError, RelayFailure};
