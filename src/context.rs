//! Application Context
//!
//! Session store and configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The session's only mutable state
    pub store: AppStore,
    /// Static sample data and settings, read-only after startup
    pub config: StoredValue<DashboardConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: DashboardConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }
}

/// Get the app context provided by the root component
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
