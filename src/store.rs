//! Session State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! One store is created when the app mounts and lives for the session.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::DashboardConfig;
use crate::models::TaskId;
use crate::routes::DashboardView;
use crate::tasks::{submit_draft, TaskList};
use crate::theme::ThemeMode;

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Kanban cards in board order
    pub tasks: TaskList,
    /// Pending text of the "New Task" input
    pub draft: String,
    pub theme: ThemeMode,
    pub view: DashboardView,
}

impl SessionState {
    pub fn new(config: &DashboardConfig, view: DashboardView) -> Self {
        Self {
            tasks: TaskList::seeded(config.seed_tasks.iter().cloned()),
            draft: String::new(),
            theme: config.theme,
            view,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<SessionState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_draft(store: &AppStore, text: String) {
    store.draft().set(text);
}

/// Append the pending draft as a new card and clear the input.
/// Blank drafts are ignored and left in place.
pub fn store_append_draft(store: &AppStore) -> Option<TaskId> {
    let mut draft = store.draft().get_untracked();
    let mut added = None;
    store.tasks().maybe_update(|tasks| {
        added = submit_draft(tasks, &mut draft);
        added.is_some()
    });
    if let Some(id) = added {
        store.draft().set(draft);
        log::debug!("[KANBAN] Appended {}", id);
    }
    added
}

/// Remove a card by id. Returns whether a card was removed.
pub fn store_remove_task(store: &AppStore, id: TaskId) -> bool {
    let mut removed = false;
    store.tasks().maybe_update(|tasks| {
        removed = tasks.remove(id);
        removed
    });
    log::debug!("[KANBAN] Remove {}: removed={}", id, removed);
    removed
}

/// Move the card at `from` to index `to`. Returns whether the board changed.
pub fn store_move_task(store: &AppStore, from: usize, to: usize) -> bool {
    let mut moved = false;
    store.tasks().maybe_update(|tasks| {
        moved = tasks.move_task(from, to);
        moved
    });
    log::debug!("[KANBAN] Move {} -> {}: moved={}", from, to, moved);
    moved
}

pub fn store_toggle_theme(store: &AppStore) {
    store.theme().update(|mode| *mode = mode.toggled());
    log::info!("[THEME] Switched to {}", store.theme().get_untracked().as_str());
}

pub fn store_navigate(store: &AppStore, view: DashboardView) {
    if store.view().get_untracked() != view {
        log::info!("[NAV] {}", view.path());
        store.view().set(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_store() -> AppStore {
        Store::new(SessionState::new(&DashboardConfig::fallback(), DashboardView::Kanban))
    }

    fn contents(store: &AppStore) -> Vec<String> {
        store.tasks().with_untracked(|t| t.iter().map(|task| task.content.clone()).collect())
    }

    #[test]
    fn test_append_draft_flow() {
        let store = new_store();

        store_set_draft(&store, "   ".to_string());
        assert_eq!(store_append_draft(&store), None);
        assert_eq!(store.draft().get_untracked(), "   ");
        assert_eq!(store.tasks().with_untracked(|t| t.len()), 3);

        store_set_draft(&store, "Fourth task".to_string());
        assert_eq!(store_append_draft(&store), Some(TaskId(4)));
        assert_eq!(store.draft().get_untracked(), "");
        assert_eq!(contents(&store).last().map(String::as_str), Some("Fourth task"));
    }

    #[test]
    fn test_remove_and_move() {
        let store = new_store();
        assert!(store_remove_task(&store, TaskId(2)));
        assert!(store_move_task(&store, 0, 1));
        assert_eq!(contents(&store), vec!["Third task", "First task"]);
    }

    #[test]
    fn test_remove_and_move_report_noops() {
        let store = new_store();
        assert!(!store_remove_task(&store, TaskId(42)));
        assert!(!store_move_task(&store, 0, 3));
        assert!(!store_move_task(&store, 1, 1));
        assert_eq!(contents(&store), vec!["First task", "Second task", "Third task"]);
    }

    #[test]
    fn test_theme_and_navigation() {
        let store = new_store();
        assert_eq!(store.theme().get_untracked(), ThemeMode::Light);
        store_toggle_theme(&store);
        assert_eq!(store.theme().get_untracked(), ThemeMode::Dark);

        store_navigate(&store, DashboardView::Charts);
        assert_eq!(store.view().get_untracked(), DashboardView::Charts);
        // Theme is independent of navigation
        assert_eq!(store.theme().get_untracked(), ThemeMode::Dark);
    }
}
