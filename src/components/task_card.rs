//! Task Card Component
//!
//! One kanban card with its delete control.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;
use crate::store::store_remove_task;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_context().store;
    let id = task.id;

    view! {
        <div class="kanban-card" data-task-id=id.to_string()>
            <span class="card-content">{task.content}</span>
            <button
                class="delete-btn"
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_remove_task(&store, id);
                }
            >
                "🗑"
            </button>
        </div>
    }
}
