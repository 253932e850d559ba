//! Networking modules for the fitness API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the authenticated-request policy, `auth` and `metrics` are
//! typed endpoint wrappers on top of it, `transport` is the `fetch` seam, and
//! `types` defines the wire schema.

pub mod auth;
pub mod client;
pub mod error;
pub mod metrics;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_transport;

pub use self::client::{ApiClient, InvalidationReason, SessionInvalidated};
pub use self::error::{ApiError, ApiResult, TransportError};
pub use self::transport::{BrowserTransport, Method};
