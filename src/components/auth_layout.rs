//! Shared card layout for the account pages.

use leptos::prelude::*;

/// Centered card with a title, optional subtitle, and an inline message area.
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(into)] message: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{title}</h1>
                {subtitle.map(|s| view! { <p class="auth-card__subtitle">{s}</p> })}
                {children()}
                <Show when=move || !message.get().is_empty()>
                    <p class="auth-message">{move || message.get()}</p>
                </Show>
            </div>
        </div>
    }
}
