//! Credential persistence backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store only persists. It never inspects the token, so expiry is
//! discovered by the request client when the server answers 401.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage failures (private mode, disabled storage) are treated as
//! absence: a store that cannot be read behaves like an empty one and the user
//! is sent back to the login page.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex};

/// Get/set/clear access to the current bearer token.
///
/// Last write wins. Implementations must not validate the token.
pub trait CredentialStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token persisted in `window.localStorage`, surviving page reloads.
///
/// Outside the browser build every read reports absence and writes are
/// dropped, matching the other browser-only helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().unwrap_or(None))
}

impl CredentialStore for BrowserStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage
                .get_item(crate::config::TOKEN_STORAGE_KEY)
                .unwrap_or(None)
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; credential not persisted");
                return;
            };
            if storage.set_item(crate::config::TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to persist credential");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(crate::config::TOKEN_STORAGE_KEY).is_err() {
                    log::warn!("failed to remove credential");
                }
            }
        }
    }
}

/// In-process token store for tests and non-browser embeddings.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        match self.token.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn set(&self, token: &str) {
        match self.token.lock() {
            Ok(mut guard) => *guard = Some(token.to_owned()),
            Err(poisoned) => *poisoned.into_inner() = Some(token.to_owned()),
        }
    }

    fn clear(&self) {
        match self.token.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
