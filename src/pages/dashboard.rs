//! Dashboard page with summary charts, entry form, and entry list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. It loads the current month summary,
//! the entry list, and the monthly history once on mount and again after any
//! create, edit, or delete. A 401 on any of these drops the session through
//! the shared `ApiClient`, and `RequireAuth` takes the user back to login.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::charts::{MonthBars, SeriesBars};
use crate::components::entry_row::EntryRow;
use crate::net::ApiClient;
use crate::net::types::TrainingType;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardState, DashboardTab};
use crate::util::validation::validate_entry;

pub(crate) const ENTRY_SAVED: &str = "Training saved.";

/// `YYYY-MM-DD` for a calendar day (`month` is 1-based).
pub(crate) fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

fn today() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "dashboard-tab dashboard-tab--active" } else { "dashboard-tab" }
}

fn spawn_reload(api: ApiClient, state: RwSignal<DashboardState>) {
    state.update(|s| s.loading = true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::state::dashboard::load_dashboard(&api).await;
        if let Err(e) = &result {
            leptos::logging::warn!("dashboard load failed: {e}");
        }
        state.update(|s| match result {
            Ok(data) => s.apply_data(data),
            Err(e) => s.apply_error(&e),
        });
    });
    #[cfg(not(feature = "csr"))]
    drop(api);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(DashboardState::loading());

    let reload = Callback::new({
        let api = api.clone();
        move |()| spawn_reload(api.clone(), state)
    });
    Effect::new(move || reload.run(()));

    let tab = Memo::new(move |_| state.with(|s| s.tab));

    let on_logout = move |_| {
        api.logout();
        auth.set(AuthState::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Training dashboard"</h1>
                <span class="dashboard-header__email">{move || auth.get().email.unwrap_or_default()}</span>
                <button class="dashboard-header__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <nav class="dashboard-tabs">
                {DashboardTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class=move || tab_class(tab.get() == t)
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.tab = t;
                                        s.notice = None;
                                    });
                                }
                            >
                                {t.title()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <Show when=move || state.with(|s| s.notice.is_some())>
                <p class="dashboard-notice">{move || state.with(|s| s.notice.clone()).unwrap_or_default()}</p>
            </Show>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="dashboard-error">{move || state.with(|s| s.error.clone()).unwrap_or_default()}</p>
            </Show>
            <main class="dashboard-body">
                {move || match tab.get() {
                    DashboardTab::Summary => view! { <SummaryTab state=state/> }.into_any(),
                    DashboardTab::AddEntry => view! { <AddEntryTab state=state reload=reload/> }.into_any(),
                    DashboardTab::Entries => view! { <EntriesTab state=state reload=reload/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn SummaryTab(state: RwSignal<DashboardState>) -> impl IntoView {
    let rows = Signal::derive(move || state.with(DashboardState::month_bars));
    let series = Signal::derive(move || state.with(|s| s.series.clone()));
    let period = move || state.with(DashboardState::period_label).unwrap_or_default();

    view! {
        <section class="dashboard-summary">
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="dashboard-loading">"Loading..."</p> }
            >
                <h2>"This month " <span class="dashboard-period">{period}</span></h2>
                <MonthBars rows=rows/>
                <h2>"Recent months"</h2>
                <SeriesBars series=series/>
            </Show>
        </section>
    }
}

#[component]
fn AddEntryTab(state: RwSignal<DashboardState>, reload: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let kind = RwSignal::new(TrainingType::Cardio.as_str().to_owned());
    let hours = RwSignal::new(String::new());
    let date = RwSignal::new(today());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let entry = match validate_entry(&kind.get(), &hours.get(), &date.get()) {
            Ok(entry) => entry,
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
            match api.create_entry(&entry).await {
                Ok(_) => {
                    hours.set(String::new());
                    state.update(|s| {
                        s.notice = Some(ENTRY_SAVED.to_owned());
                        s.tab = DashboardTab::Summary;
                    });
                    reload.run(());
                }
                Err(e) => info.set(e.user_message().unwrap_or_default()),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="dashboard-add">
            <h2>"New training"</h2>
            <form class="entry-form" on:submit=on_submit>
                <label>
                    "Type"
                    <select prop:value=move || kind.get() on:change=move |ev| kind.set(event_target_value(&ev))>
                        {TrainingType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label>
                    "Hours"
                    <input
                        type="number"
                        min="0"
                        step="0.1"
                        placeholder="1.5"
                        prop:value=move || hours.get()
                        on:input=move |ev| hours.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Date"
                    <input type="date" prop:value=move || date.get() on:input=move |ev| date.set(event_target_value(&ev))/>
                </label>
                <button class="entry-form__submit" type="submit" disabled=move || busy.get()>
                    "Save training"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="entry-form__message">{move || info.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn EntriesTab(state: RwSignal<DashboardState>, reload: Callback<()>) -> impl IntoView {
    view! {
        <section class="dashboard-entries">
            <Show
                when=move || state.with(|s| !s.entries.is_empty())
                fallback=|| view! { <p class="dashboard-empty">"No training logged yet."</p> }
            >
                <table class="entry-table">
                    <thead>
                        <tr>
                            <th>"Type"</th>
                            <th>"Hours"</th>
                            <th>"Date"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .with(|s| s.entries.clone())
                                .into_iter()
                                .map(|entry| view! { <EntryRow entry=entry on_changed=reload/> })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
