//! Email + password login page mounted at the entry location.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrapped in `RequireAuth`, so an already-signed-in visitor is sent to the
//! dashboard before this renders. A successful login stores the token via the
//! shared `ApiClient` and navigates to the remembered `?next=` target.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::auth_layout::AuthLayout;
use crate::net::ApiClient;
use crate::state::auth::AuthState;
use crate::util::guard::{NEXT_PARAM, post_login_target};
use crate::util::validation::validate_login;

/// Message shown when the page first renders.
fn initial_message(auth: &AuthState) -> String {
    auth.notice().map(str::to_owned).unwrap_or_default()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(initial_message(&auth.get_untracked()));
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());
        let target = post_login_target(query.with_untracked(|q| q.get(NEXT_PARAM)).as_deref());
        let api = api.clone();
        let navigate = navigate.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.login(&email_value, &password_value).await {
                Ok(()) => {
                    navigate(&target, leptos_router::NavigateOptions { replace: true, ..Default::default() });
                    auth.set(AuthState::from_session(api.session()));
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout title="Sign in" subtitle="Track your training hours" message=info>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
            <div class="auth-links">
                <A href="/forgot-password">"Forgot your password?"</A>
                <A href="/register">"Create an account"</A>
            </div>
        </AuthLayout>
    }
}
