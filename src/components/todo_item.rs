//! Todo Item Component
//!
//! A single row of the todo list.

use leptos::prelude::*;

use crate::config::DEFAULT_DELETE_LABEL;
use crate::models::{Item, ItemId};
use crate::test_ids;

/// One item row: checkbox, text and delete button.
///
/// The checkbox only reports intent through `on_toggle`; its checked state
/// always comes from `item.completed`. The row stays mounted across toggles,
/// so focus is kept while toggling from the keyboard.
#[component]
pub fn TodoItem(
    #[prop(into)] item: Signal<Item>,
    #[prop(into)] on_toggle: Callback<ItemId>,
    #[prop(into)] on_delete: Callback<ItemId>,
    #[prop(into, default = String::from(DEFAULT_DELETE_LABEL))] delete_label: String,
) -> impl IntoView {
    let id = item.with_untracked(|item| item.id);
    let completed = move || item.with(|item| item.completed);
    let text = move || item.with(|item| item.text.clone());

    // The browser has already flipped the box; put it back until the new
    // value comes down from the owner
    let on_change = move |ev: web_sys::Event| {
        let checkbox = event_target::<web_sys::HtmlInputElement>(&ev);
        checkbox.set_checked(item.with_untracked(|item| item.completed));
        on_toggle.run(id);
    };

    view! {
        <li
            class=move || if completed() { "todo-item completed" } else { "todo-item" }
            data-testid=test_ids::todo_item(id)
        >
            <input
                type="checkbox"
                class="todo-checkbox"
                data-testid=test_ids::todo_checkbox(id)
                prop:checked=completed
                on:change=on_change
            />
            <span class="todo-text" data-testid=test_ids::todo_text(id)>{text}</span>
            <button
                type="button"
                class="todo-delete"
                data-testid=test_ids::todo_delete(id)
                on:click=move |_| on_delete.run(id)
            >
                {delete_label}
            </button>
        </li>
    }
}
