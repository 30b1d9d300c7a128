//! App Bar Component
//!
//! Top bar carrying the dashboard title.

use leptos::prelude::*;

#[component]
pub fn AppBar(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="app-bar">
            <h1 class="app-bar-title">{title}</h1>
        </header>
    }
}
