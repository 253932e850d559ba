//! Password reset page reached from the emailed link (`?token=`).

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::auth_layout::AuthLayout;
use crate::config::ENTRY_PATH;
use crate::net::ApiClient;
use crate::util::validation::validate_password_reset;

pub(crate) const TOKEN_PARAM: &str = "token";

const MISSING_TOKEN: &str = "This reset link is missing its token. Request a new one.";

const PASSWORD_CHANGED: &str = "Password changed. You can sign in now.";

/// Server confirmation, or a fixed one when the reply carried no message.
pub(crate) fn changed_notice(message: String) -> String {
    if message.trim().is_empty() { PASSWORD_CHANGED.to_owned() } else { message }
}

/// Reset token from the query string, if present and non-blank.
pub(crate) fn reset_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || done.get() {
            return;
        }
        let Some(token) = reset_token(query.with_untracked(|q| q.get(TOKEN_PARAM))) else {
            info.set(MISSING_TOKEN.to_owned());
            return;
        };
        let new_password = match validate_password_reset(&password.get(), &confirm.get()) {
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
            match api.reset_password(&token, &new_password).await {
                Ok(message) => {
                    info.set(changed_notice(message));
                    done.set(true);
                }
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <AuthLayout title="Reset password" message=info>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="auth-input"
                    type="password"
                    placeholder="New password"
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
                <button class="auth-button" type="submit" disabled=move || busy.get() || done.get()>
                    "Change password"
                </button>
            </form>
            <div class="auth-links">
                <A href=ENTRY_PATH>"Back to sign in"</A>
            </div>
        </AuthLayout>
    }
}
