//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns the single `Session` and `ApiClient` and shares them via
//! context. The client reports dropped sessions through its listener, which
//! updates `AuthState`; `RequireAuth` reacts to that by redirecting to login.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::net::{ApiClient, BrowserTransport};
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage, register::RegisterPage,
    reset_password::ResetPasswordPage,
};
use crate::session::Session;
use crate::state::auth::AuthState;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::browser();
    let auth = RwSignal::new(AuthState::from_session(&session));
    let api = ApiClient::new(BrowserTransport, session.clone()).on_session_invalidated(move |event| {
        log::info!("session invalidated: {:?}", event.reason);
        auth.set(AuthState::invalidated(event.reason));
    });

    provide_context(session);
    provide_context(api);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/fitdash.css"/>
        <Title text="Fitdash"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <RequireAuth><LoginPage/></RequireAuth> }/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("dashboard") view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }/>
            </Routes>
        </Router>
    }
}
