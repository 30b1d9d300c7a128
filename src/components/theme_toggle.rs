//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_toggle_theme, SessionStateStoreFields};

/// Button switching between light and dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <button
            class="contained-btn theme-toggle"
            title=move || format!("Current mode: {}", store.theme().get().as_str())
            on:click=move |_| store_toggle_theme(&store)
        >
            "Toggle Theme"
        </button>
    }
}
