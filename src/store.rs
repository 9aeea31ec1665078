//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;

/// View state driving the todo component.
///
/// `tasks` is only ever replaced wholesale with the server's latest list;
/// nothing is patched or constructed locally. The task count shown in the
/// UI is derived from `tasks`, never stored separately.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last fetched task list
    pub tasks: Vec<Task>,
    /// True only while a request is in flight
    pub loading: bool,
    /// Message of the most recent failure, if any
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the task list with a fresh fetch result
pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Mark a request as started: loading on, previous error discarded
pub fn store_begin_request(store: &AppStore) {
    store.loading().set(true);
    store.error().set(None);
}

/// Record a failure message for the banner
pub fn store_fail_request(store: &AppStore, message: String) {
    store.error().set(Some(message));
}

/// Mark the in-flight request as settled
pub fn store_end_request(store: &AppStore) {
    store.loading().set(false);
}
