//! Client-side session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Session` is the single owner of the bearer token. It is cloned into the
//! request client, the route guard, and any page that shows identity, instead
//! of every caller touching `localStorage` directly.
//!
//! States are `Anonymous` (no token) and `Authenticated` (token present, not
//! yet rejected). There is no client-side notion of a verified session: a
//! present token counts as authenticated until the server answers 401.

pub mod claims;
pub mod store;

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

pub use self::claims::{Claims, decode_claims};
pub use self::store::{BrowserStore, CredentialStore, MemoryStore};

/// Shared handle over a [`CredentialStore`].
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }

    /// Session backed by an in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a freshly issued token (`Anonymous -> Authenticated`).
    pub fn sign_in(&self, token: &str) {
        self.store.set(token);
    }

    /// Drop the token (`Authenticated -> Anonymous`). Idempotent.
    pub fn sign_out(&self) {
        self.store.clear();
    }

    /// Unverified claims of the current token. Display only.
    pub fn claims(&self) -> Option<Claims> {
        self.token().as_deref().and_then(decode_claims)
    }

    pub fn email(&self) -> Option<String> {
        self.claims().and_then(|c| c.email)
    }

    pub fn subject(&self) -> Option<String> {
        self.claims().map(|c| c.subject)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
