//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthenticated` and `SessionExpired` are session-loss outcomes: the
//! client has already cleared the token and emitted `SessionInvalidated`, so
//! views should not render them as in-page errors. `Http` and `Network` are
//! always locally recoverable and shown to the user as-is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Outcome of any backend call: `Ok(body)` or one of these failures.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthenticated,
    #[error("session expired, please sign in again")]
    SessionExpired,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Whether this outcome already invalidated the session.
    pub fn is_session_loss(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::SessionExpired)
    }

    /// Message to show inline, or `None` for session-loss outcomes.
    pub fn user_message(&self) -> Option<String> {
        if self.is_session_loss() { None } else { Some(self.to_string()) }
    }
}

/// Failure below HTTP: no response was received at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Network(err.0)
    }
}
