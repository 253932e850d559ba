//! Navigation-time route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated before a protected view mounts. It only looks at whether a token
//! is present; a present-but-expired token is caught later by the request
//! client's 401 handling, after which the guard redirects on its next run.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::{DEFAULT_PROTECTED_PATH, ENTRY_PATH};

/// Query parameter carrying the post-login return target.
pub const NEXT_PARAM: &str = "next";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Mount the requested view unchanged.
    Render,
    /// Navigate to `to`; `from` remembers the original target.
    Redirect { to: String, from: Option<String> },
}

impl GuardDecision {
    pub fn redirect(to: &str) -> Self {
        Self::Redirect { to: to.to_owned(), from: None }
    }

    pub fn redirect_from(to: &str, from: &str) -> Self {
        Self::Redirect { to: to.to_owned(), from: Some(from.to_owned()) }
    }

    /// URL to navigate to, with the remembered target as `?next=`.
    pub fn navigation_url(&self) -> Option<String> {
        match self {
            Self::Render => None,
            Self::Redirect { to, from: None } => Some(to.clone()),
            Self::Redirect { to, from: Some(from) } => {
                let encoded: String = url::form_urlencoded::byte_serialize(from.as_bytes()).collect();
                Some(format!("{to}?{NEXT_PARAM}={encoded}"))
            }
        }
    }
}

fn is_entry(location: &str) -> bool {
    location.is_empty() || location == ENTRY_PATH
}

/// Decide whether `location` may render given credential presence.
///
/// Pure and idempotent: same inputs, same decision.
pub fn evaluate(has_credential: bool, location: &str) -> GuardDecision {
    match (has_credential, is_entry(location)) {
        (false, false) => GuardDecision::redirect_from(ENTRY_PATH, location),
        (true, true) => GuardDecision::redirect(DEFAULT_PROTECTED_PATH),
        _ => GuardDecision::Render,
    }
}

/// Where to go after a successful login.
///
/// Honors a remembered `next` target only when it is a local absolute path
/// other than the entry page; anything else lands on the default page.
pub fn post_login_target(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !is_entry(path) && !path.contains("://") => {
            path.to_owned()
        }
        _ => DEFAULT_PROTECTED_PATH.to_owned(),
    }
}
