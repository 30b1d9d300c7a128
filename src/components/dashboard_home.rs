//! Dashboard Home View

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::SessionStateStoreFields;

#[component]
pub fn DashboardHome() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let row_count = ctx.config.with_value(|c| c.grid.rows.len());

    view! {
        <section class="view dashboard-home">
            <div>"Dashboard Content"</div>
            <p class="summary">
                {move || format!("{} tasks on the board, {} table rows", store.tasks().with(|t| t.len()), row_count)}
            </p>
        </section>
    }
}
