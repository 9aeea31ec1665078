//! Task List Component

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// List of task rows, re-rendered whenever the fetched list changes
#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="task-list">
            {move || {
                store
                    .tasks()
                    .get()
                    .into_iter()
                    .map(|task| view! { <TaskItem task=task /> })
                    .collect_view()
            }}
        </ul>
    }
}
