//! One row of the training entry table with inline edit and delete.

#[cfg(test)]
#[path = "entry_row_test.rs"]
mod entry_row_test;

use leptos::prelude::*;

use crate::components::charts::format_hours;
use crate::net::ApiClient;
use crate::net::types::{TrainingEntry, TrainingType};
use crate::util::validation::validate_entry;

/// Calendar part of a stored date (`2025-03-04T00:00:00.000Z` -> `2025-03-04`).
pub(crate) fn display_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(day, _)| day)
}

/// Editable form values for an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EntryDraft {
    pub kind: String,
    pub hours: String,
    pub date: String,
}

impl From<&TrainingEntry> for EntryDraft {
    fn from(entry: &TrainingEntry) -> Self {
        Self {
            kind: entry.kind.clone(),
            hours: entry.hours.to_string(),
            date: display_date(&entry.date).to_owned(),
        }
    }
}

fn confirm_delete() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this training entry?").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Table row for `entry`; `on_changed` fires after a successful edit or delete.
#[component]
pub fn EntryRow(entry: TrainingEntry, on_changed: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let original = EntryDraft::from(&entry);
    let draft = RwSignal::new(original.clone());
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_save = {
        let api = api.clone();
        let id = entry.id.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let current = draft.get();
            let update = match validate_entry(&current.kind, &current.hours, &current.date) {
                Ok(update) => update,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            busy.set(true);
            error.set(None);
            let api = api.clone();
            let id = id.clone();

            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let result = api.update_entry(&id, &update).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        editing.set(false);
                        on_changed.run(());
                    }
                    Err(e) => error.set(e.user_message()),
                }
            });
        }
    };

    let on_delete = {
        let id = entry.id.clone();
        move |_| {
            if busy.get() || !confirm_delete() {
                return;
            }
            busy.set(true);
            error.set(None);
            let api = api.clone();
            let id = id.clone();

            #[cfg(feature = "csr")]
            leptos::task::spawn_local(async move {
                let result = api.delete_entry(&id).await;
                busy.set(false);
                match result {
                    Ok(_) => on_changed.run(()),
                    Err(e) => error.set(e.user_message()),
                }
            });
        }
    };

    let on_cancel = move |_| {
        draft.set(original.clone());
        error.set(None);
        editing.set(false);
    };

    let hours_label = format_hours(entry.hours);
    let date_label = display_date(&entry.date).to_owned();
    let kind_label = entry.kind.clone();

    view! {
        <tr class="entry-row">
            {move || {
                if editing.get() {
                    let on_save = on_save.clone();
                    let on_cancel = on_cancel.clone();
                    view! {
                        <td>
                            <select
                                prop:value=move || draft.get().kind
                                on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                            >
                                {TrainingType::ALL
                                    .into_iter()
                                    .map(|kind| view! { <option value=kind.as_str()>{kind.as_str()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </td>
                        <td>
                            <input
                                type="number"
                                min="0"
                                step="0.1"
                                prop:value=move || draft.get().hours
                                on:input=move |ev| draft.update(|d| d.hours = event_target_value(&ev))
                            />
                        </td>
                        <td>
                            <input
                                type="date"
                                prop:value=move || draft.get().date
                                on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                            />
                        </td>
                        <td class="entry-row__actions">
                            <button on:click=on_save disabled=move || busy.get()>"Save"</button>
                            <button on:click=on_cancel disabled=move || busy.get()>"Cancel"</button>
                        </td>
                    }
                        .into_any()
                } else {
                    let on_delete = on_delete.clone();
                    view! {
                        <td>{kind_label.clone()}</td>
                        <td>{hours_label.clone()}</td>
                        <td>{date_label.clone()}</td>
                        <td class="entry-row__actions">
                            <button on:click=move |_| editing.set(true) disabled=move || busy.get()>"Edit"</button>
                            <button on:click=on_delete disabled=move || busy.get()>"Delete"</button>
                        </td>
                    }
                        .into_any()
                }
            }}
            <Show when=move || error.get().is_some()>
                <td class="entry-row__error">{move || error.get().unwrap_or_default()}</td>
            </Show>
        </tr>
    }
}
