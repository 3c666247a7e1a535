//! Application State Store
//!
//! Wraps the todo collection in a Leptos reactive_stores `Store`.
//! The root component owns the store and hands callbacks to its children.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::TodoCollection;
use crate::models::ItemId;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All items of the session, in insertion order
    pub todos: TodoCollection,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Add an item from raw draft text
pub fn store_add_item(store: &TodoStore, raw_text: &str) -> Option<ItemId> {
    let added = store.todos().write().add(raw_text);
    match added {
        Some(id) => log::debug!("[STORE] Added item {}", id),
        None => log::debug!("[STORE] Ignored blank item text"),
    }
    added
}

/// Toggle completion of an item by ID
pub fn store_toggle_item(store: &TodoStore, id: ItemId) -> bool {
    let toggled = store.todos().write().toggle(id);
    if !toggled {
        log::debug!("[STORE] Toggle ignored, no item {}", id);
    }
    toggled
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &TodoStore, id: ItemId) -> bool {
    let removed = store.todos().write().remove(id).is_some();
    if removed {
        log::debug!("[STORE] Removed item {}", id);
    } else {
        log::debug!("[STORE] Remove ignored, no item {}", id);
    }
    removed
}
