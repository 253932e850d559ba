//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and request orchestration and delegates
//! rendering details to `components`.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
