//! `data-testid` hooks used by the browser tests.

use crate::models::ItemId;

pub const TODO_FORM: &str = "todo-form";
pub const TODO_INPUT: &str = "todo-input";
pub const ADD_BUTTON: &str = "add-button";
pub const TODO_LIST: &str = "todo-list";
pub const TODO_LIST_EMPTY: &str = "todo-list-empty";
pub const TODO_SUMMARY: &str = "todo-summary";

pub fn todo_item(id: ItemId) -> String {
    format!("todo-item-{}", id)
}

pub fn todo_checkbox(id: ItemId) -> String {
    format!("todo-checkbox-{}", id)
}

pub fn todo_text(id: ItemId) -> String {
    format!("todo-text-{}", id)
}

pub fn todo_delete(id: ItemId) -> String {
    format!("todo-delete-{}", id)
}
