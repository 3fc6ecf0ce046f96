//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the UI
//! thread writes here; each refresh load owns a disjoint field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::Filter;
use crate::models::{Stats, Task};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks from the last successful fetch, in service order
    pub tasks: Vec<Task>,
    /// Categories from the last successful fetch
    pub categories: Vec<String>,
    /// Service-computed counters
    pub stats: Stats,
    /// Active completion filter
    pub filter: Filter,
    /// Active search text, always lowercase
    pub search: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Search text is matched case-insensitively, so it is stored lowercase
pub fn normalize_search(text: &str) -> String {
    text.to_lowercase()
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_tasks(store: &AppStore, tasks: Vec<Task>) {
    *store.tasks().write() = tasks;
}

pub fn store_set_categories(store: &AppStore, categories: Vec<String>) {
    *store.categories().write() = categories;
}

pub fn store_set_stats(store: &AppStore, stats: Stats) {
    *store.stats().write() = stats;
}

pub fn store_set_filter(store: &AppStore, filter: Filter) {
    *store.filter().write() = filter;
}

pub fn store_set_search(store: &AppStore, text: &str) {
    *store.search().write() = normalize_search(text);
}

pub fn store_clear_search(store: &AppStore) {
    store.search().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_search() {
        assert_eq!(normalize_search("Buy MILK"), "buy milk");
        assert_eq!(normalize_search(""), "");
    }

    #[test]
    fn test_default_view_state() {
        let state = AppState::new();
        assert_eq!(state.filter, Filter::All);
        assert!(state.search.is_empty());
        assert!(state.tasks.is_empty());
        assert_eq!(state.stats, Stats::default());
    }
}
