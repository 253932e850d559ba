//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `dashboard`) so pages depend on small
//! focused models that can be tested without a reactive runtime.

pub mod auth;
pub mod dashboard;
