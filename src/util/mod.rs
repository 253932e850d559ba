//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic lives here (route gating, chart shaping, form checks) so pages
//! stay thin and every rule is testable without a browser.

pub mod guard;
pub mod series;
pub mod validation;
