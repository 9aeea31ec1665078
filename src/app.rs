//! Todo Frontend App
//!
//! Root component: owns the view-state store and kicks off the initial
//! list fetch on mount. Every later fetch is triggered by a completed
//! mutation, never by local bookkeeping.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NewTaskForm, StatusBanner, TaskList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(async move {
            actions::refresh(store).await;
            web_sys::console::log_1(
                &format!("[APP] Loaded {} tasks", store.tasks().read().len()).into(),
            );
        });
    });

    view! {
        <div class="todo-app">
            <h1>"TODO APP"</h1>

            <p class="task-count">
                "Total Tasks: "
                <span>{move || store.tasks().read().len()}</span>
            </p>

            <NewTaskForm />

            <StatusBanner />

            <TaskList />
        </div>
    }
}
