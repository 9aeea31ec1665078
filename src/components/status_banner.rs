//! Status Banner Component
//!
//! Loading indicator and the single error banner. Only the most recent
//! failure is shown; starting any new request clears it.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Loading and error banners
#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.loading().get()>
            <p class="loading-banner">"Loading..."</p>
        </Show>
        {move || {
            store
                .error()
                .get()
                .map(|message| view! { <p class="error-banner">{message}</p> })
        }}
    }
}
