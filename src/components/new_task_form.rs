//! New Task Form Component
//!
//! Text input and "Add Task" button feeding the kanban board.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_append_draft, store_set_draft, SessionStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_context().store;

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank input is declined silently
        store_append_draft(&store);
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <label class="text-field">
                <span class="text-field-label">"New Task"</span>
                <input
                    type="text"
                    prop:value=move || store.draft().get()
                    on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                />
            </label>
            <button type="submit" class="contained-btn primary">"Add Task"</button>
        </form>
    }
}
