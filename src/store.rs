//! Application State Store
//!
//! Root-owned task collection, held in a reactive_stores store so that
//! writes re-render the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoCollection;

/// Root state: the canonical ordered task collection
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub todos: TodoCollection,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Append a task to the end of the collection
pub fn store_add_todo(store: &AppStore, text: String) {
    let index = store.todos().write().add(text);
    log::debug!("[APP] added task #{}", index);
}

/// Remove the first task equal to `text`; absent values are ignored
pub fn store_delete_todo(store: &AppStore, text: &str) {
    match store.todos().write().delete(text) {
        Some(index) => log::debug!("[APP] deleted task #{}", index),
        None => log::debug!("[APP] delete of absent task ignored"),
    }
}

/// Snapshot of the current collection (tracked)
pub fn store_todos(store: &AppStore) -> TodoCollection {
    store.todos().get()
}
