//! Dashboard App
//!
//! Root component: app bar, navigation drawer and the active view.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AppBar, CalendarView, ChartsView, DashboardHome, KanbanBoard, NavDrawer, TablesView, ThemeToggle};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::routes::DashboardView;
use crate::store::{store_navigate, SessionState, SessionStateStoreFields};

/// Read the view addressed by the current `location.hash`
fn current_hash_view() -> DashboardView {
    let hash = web_sys::window()
        .and_then(|win| win.location().hash().ok())
        .unwrap_or_default();
    DashboardView::from_hash(&hash)
}

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Session state, owned here for the lifetime of the page
    let store = Store::new(SessionState::new(&config, current_hash_view()));
    let title = config.title.clone();

    // Provide context to all children
    provide_context(AppContext::new(store, config));

    // Follow back/forward and typed URLs
    let on_hashchange = window_event_listener(ev::hashchange, move |_| {
        store_navigate(&store, current_hash_view());
    });
    on_cleanup(move || on_hashchange.remove());

    let shell_class = move || format!("app-shell {}", store.theme().get().class_name());

    view! {
        <div class=shell_class>
            <AppBar title=title />
            <div class="app-body">
                <NavDrawer />

                <main class="main-content">
                    <ThemeToggle />

                    {move || match store.view().get() {
                        DashboardView::Dashboard => view! { <DashboardHome /> }.into_any(),
                        DashboardView::Tables => view! { <TablesView /> }.into_any(),
                        DashboardView::Charts => view! { <ChartsView /> }.into_any(),
                        DashboardView::Calendar => view! { <CalendarView /> }.into_any(),
                        DashboardView::Kanban => view! { <KanbanBoard /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
