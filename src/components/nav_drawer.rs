//! Navigation Drawer Component
//!
//! Permanent left drawer listing the dashboard views.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::DashboardView;
use crate::store::{store_navigate, SessionStateStoreFields};

#[component]
pub fn NavDrawer() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <nav class="nav-drawer">
            <ul class="nav-list">
                {DashboardView::ALL.into_iter().map(|target| {
                    let is_active = move || store.view().get() == target;
                    view! {
                        <li>
                            <a
                                href=target.href()
                                class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                on:click=move |_| store_navigate(&store, target)
                            >
                                {target.label()}
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
