//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `ApiClient`, `Session`, and `AuthState` from
//! Leptos context providers installed by the app shell.

pub mod auth_layout;
pub mod charts;
pub mod entry_row;
pub mod require_auth;
