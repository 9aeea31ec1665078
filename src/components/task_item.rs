//! Task Item Component
//!
//! A single row in the task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::models::Task;
use crate::store::{use_app_store, AppStateStoreFields};

/// A single task row with toggle and delete controls
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let store = use_app_store();

    let complete = task.complete;
    let title = task.title.clone();
    // Each control toggles/deletes the task it belongs to.
    let toggle_id = task.id.clone();
    let delete_id = task.id;

    view! {
        <li class=move || if complete { "task-row completed" } else { "task-row" }>
            <input
                type="checkbox"
                checked=complete
                disabled=move || store.loading().get()
                on:change=move |ev| {
                    let checkbox = event_target::<web_sys::HtmlInputElement>(&ev);
                    let id = toggle_id.clone();
                    spawn_local(async move {
                        // A click flips the DOM checkbox immediately. If the
                        // toggle did not make it to a refreshed list, the
                        // store still holds the old `complete`, so put the
                        // checkbox back to match it.
                        if !actions::toggle_task(store, id).await {
                            checkbox.set_checked(complete);
                        }
                    });
                }
            />
            <span class="task-title">{title}</span>
            <button
                class="delete-btn"
                disabled=move || store.loading().get()
                on:click=move |_| {
                    let id = delete_id.clone();
                    spawn_local(async move {
                        actions::remove_task(store, id).await;
                    });
                }
            >
                "×"
            </button>
        </li>
    }
}
