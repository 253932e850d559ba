//! Account registration page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::config::ENTRY_PATH;
use crate::net::ApiClient;
use crate::util::validation::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_registration(&email.get(), &password.get(), &confirm.get()) {
            Ok(pair) => pair,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());
        let api = api.clone();
        let navigate = navigate.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.register(&email_value, &password_value).await {
                Ok(()) => {
                    leptos::logging::log!("registered {email_value}");
                    navigate(ENTRY_PATH, leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    info.set(e.to_string());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <AuthLayout title="Create account" subtitle="Sign up and start logging your training" message=info>
            <div class="auth-links">
                <A href=ENTRY_PATH>"I already have an account"</A>
            </div>
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
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
            </form>
        </AuthLayout>
    }
}
