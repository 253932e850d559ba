//! Reactive mirror of the session for the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token itself lives in `Session`. This snapshot is what the shell keeps
//! in an `RwSignal` so the route guard and header re-render when the session
//! changes (login, logout, or `SessionInvalidated` from the request client).

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::InvalidationReason;
use crate::session::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    /// Display-only email from the unverified token claims.
    pub email: Option<String>,
    /// Set when the request client dropped the session.
    pub invalidated: Option<InvalidationReason>,
}

impl AuthState {
    pub fn from_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            email: session.email(),
            invalidated: None,
        }
    }

    pub fn invalidated(reason: InvalidationReason) -> Self {
        Self { authenticated: false, email: None, invalidated: Some(reason) }
    }

    /// Banner text for the login page after a forced sign-out.
    pub fn notice(&self) -> Option<&'static str> {
        match self.invalidated? {
            InvalidationReason::Rejected => Some("Your session expired. Please sign in again."),
            InvalidationReason::MissingCredential => Some("Please sign in to continue."),
        }
    }
}
