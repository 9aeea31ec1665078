//! View State Controller
//!
//! Sequences one remote operation at a time over the store: loading on and
//! error cleared before the request, error recorded on failure, loading off
//! when the operation settles. Every successful mutation is followed by a
//! full list re-fetch, so the displayed state always mirrors the server's
//! last-known list and no local patching is needed.

use crate::api;
use crate::error::ApiError;
use crate::store::{
    store_begin_request, store_end_request, store_fail_request, store_set_tasks, AppStore,
};

/// Trim the typed title; `None` means "do not send anything".
pub fn normalized_title(input: &str) -> Option<String> {
    let title = input.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Fetch the full list and replace the store's tasks.
///
/// On failure the previous tasks are left untouched.
async fn load_tasks(store: AppStore) -> Result<(), ApiError> {
    let tasks = api::list_tasks().await?;
    store_set_tasks(&store, tasks);
    Ok(())
}

/// Re-fetch the task list (initial load and post-mutation refresh).
pub async fn refresh(store: AppStore) {
    store_begin_request(&store);
    if let Err(error) = load_tasks(store).await {
        store_fail_request(&store, error.to_string());
    }
    store_end_request(&store);
}

/// Create a task from the typed input, then re-fetch the list.
///
/// Whitespace-only input is a no-op: no request is sent and the store is
/// not touched. Returns whether the create succeeded, which is the signal
/// for the form to clear its input.
pub async fn add_task(store: AppStore, input: &str) -> bool {
    let Some(title) = normalized_title(input) else {
        return false;
    };

    store_begin_request(&store);
    let created = match api::create_task(&title).await {
        Ok(()) => true,
        Err(error) => {
            store_fail_request(&store, error.to_string());
            false
        }
    };
    if created {
        if let Err(error) = load_tasks(store).await {
            store_fail_request(&store, error.to_string());
        }
    }
    store_end_request(&store);
    created
}

/// Delete the task with the given id, then re-fetch the list.
pub async fn remove_task(store: AppStore, id: String) {
    store_begin_request(&store);
    match api::delete_task(&id).await {
        Ok(()) => {
            if let Err(error) = load_tasks(store).await {
                store_fail_request(&store, error.to_string());
            }
        }
        Err(error) => store_fail_request(&store, error.to_string()),
    }
    store_end_request(&store);
}

/// Toggle completion of the task with the given id, then re-fetch the
/// list. The new `complete` value comes from the refreshed list.
///
/// Returns whether the list was refreshed. On `false` the store's tasks
/// still hold the pre-toggle state, and the row's checkbox has to be put
/// back to match it.
pub async fn toggle_task(store: AppStore, id: String) -> bool {
    store_begin_request(&store);
    let refreshed = match api::toggle_task(&id).await {
        Ok(()) => match load_tasks(store).await {
            Ok(()) => true,
            Err(error) => {
                store_fail_request(&store, error.to_string());
                false
            }
        },
        Err(error) => {
            store_fail_request(&store, error.to_string());
            false
        }
    };
    store_end_request(&store);
    refreshed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AppState, AppStateStoreFields};
    use leptos::prelude::*;
    use reactive_stores::Store;

    #[test]
    fn normalized_title_trims_whitespace() {
        assert_eq!(normalized_title("  Buy milk  "), Some("Buy milk".to_string()));
    }

    #[test]
    fn normalized_title_rejects_empty_input() {
        assert_eq!(normalized_title(""), None);
        assert_eq!(normalized_title("   "), None);
        assert_eq!(normalized_title("\t\n"), None);
    }

    #[tokio::test]
    async fn refresh_settles_with_loading_off() {
        let store = Store::new(AppState::new());
        refresh(store).await;
        assert!(!store.loading().get());
        assert!(store.error().read().is_none());
    }

    #[tokio::test]
    async fn whitespace_input_sends_nothing() {
        let store = Store::new(AppState::new());
        let created = add_task(store, "   ").await;
        assert!(!created);
        // The store was never touched: no loading flicker, no error.
        assert!(!store.loading().get());
        assert!(store.error().read().is_none());
    }

    #[tokio::test]
    async fn add_task_reports_create_success() {
        let store = Store::new(AppState::new());
        let created = add_task(store, " Buy milk ").await;
        assert!(created);
        assert!(!store.loading().get());
    }

    #[tokio::test]
    async fn mutations_settle_with_loading_off() {
        let store = Store::new(AppState::new());
        remove_task(store, "1".to_string()).await;
        assert!(!store.loading().get());
        let refreshed = toggle_task(store, "1".to_string()).await;
        assert!(refreshed);
        assert!(!store.loading().get());
    }
}
