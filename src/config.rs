//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is a static WASM bundle, so configuration is baked in at build
//! time. `FITDASH_API_BASE` overrides the API prefix when the bundle is served
//! from a different origin than the backend.

/// Prefix prepended to every backend path.
pub const API_BASE: &str = match option_env!("FITDASH_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Unauthenticated entry location (the login page).
pub const ENTRY_PATH: &str = "/";

/// Where authenticated users land when they hit the entry location.
pub const DEFAULT_PROTECTED_PATH: &str = "/dashboard";

/// Number of months requested for the dashboard series chart.
pub const SERIES_MONTHS: u32 = 6;

/// Accepted password length bounds (the backend hashes with bcrypt, which
/// truncates past 72 bytes).
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 72;
