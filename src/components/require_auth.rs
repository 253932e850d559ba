//! Route wrapper applying the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps both the entry page and protected pages. The decision is recomputed
//! whenever the location or the shell's `AuthState` changes, so a session
//! dropped by the request client redirects without any page-specific code.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::Session;
use crate::state::auth::AuthState;
use crate::util::guard::{self, GuardDecision};

/// Render `children` only when the guard allows the current location.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        auth.track();
        guard::evaluate(session.is_authenticated(), &location.pathname.get())
    });

    Effect::new(move || {
        if let Some(url) = decision.get().navigation_url() {
            navigate(&url, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || (decision.get() == GuardDecision::Render).then(|| children())
}
