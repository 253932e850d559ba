//! Password recovery request page.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::auth_layout::AuthLayout;
use crate::config::ENTRY_PATH;
use crate::net::ApiClient;
use crate::util::validation::validate_email;

const LINK_SENT: &str = "Check your inbox for a reset link.";

/// Server confirmation, or a fixed one when the reply carried no message.
pub(crate) fn sent_notice(message: String) -> String {
    if message.trim().is_empty() { LINK_SENT.to_owned() } else { message }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        let api = api.clone();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match api.forgot_password(&email_value).await {
                Ok(message) => info.set(sent_notice(message)),
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <AuthLayout title="Recover password" subtitle="We will email you a reset link" message=info>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Send link"
                </button>
            </form>
            <div class="auth-links">
                <A href=ENTRY_PATH>"Back to sign in"</A>
            </div>
        </AuthLayout>
    }
}
