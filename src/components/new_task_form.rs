//! New Task Form Component
//!
//! Input box plus add button. Both are disabled while a request is in
//! flight, which is what keeps operations sequential.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let (new_title, set_new_title) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Controls are disabled while loading; this guards the submit
        // paths that bypass them (e.g. Enter in a re-enabled field).
        if store.loading().get() {
            return;
        }
        let input = new_title.get();
        spawn_local(async move {
            // Input is cleared only after a successful create; on failure
            // it stays as typed.
            if actions::add_task(store, &input).await {
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="Enter task"
                prop:value=move || new_title.get()
                disabled=move || store.loading().get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || store.loading().get()>
                "Add Task"
            </button>
        </form>
    }
}
