//! Todo List Component
//!
//! Renders all items in collection order, or the empty state.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::config::{DEFAULT_DELETE_LABEL, DEFAULT_EMPTY_MESSAGE};
use crate::models::{Item, ItemId};
use crate::test_ids;

/// List of item rows keyed by item id
#[component]
pub fn TodoList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] on_toggle: Callback<ItemId>,
    #[prop(into)] on_delete: Callback<ItemId>,
    #[prop(into, default = String::from(DEFAULT_EMPTY_MESSAGE))] empty_message: String,
    #[prop(into, default = String::from(DEFAULT_DELETE_LABEL))] delete_label: String,
) -> impl IntoView {
    let delete_label = StoredValue::new(delete_label);
    let has_items = move || items.with(|items| !items.is_empty());

    view! {
        <Show
            when=has_items
            fallback=move || {
                let message = empty_message.clone();
                view! {
                    <div class="todo-list-empty" data-testid=test_ids::TODO_LIST_EMPTY>
                        <p>{message}</p>
                    </div>
                }
            }
        >
            <ul class="todo-list" data-testid=test_ids::TODO_LIST>
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item: Item| {
                        let id = item.id;
                        // Follow the row's entry so toggles update it in place
                        let current = Signal::derive(move || {
                            items
                                .with(|items| items.iter().find(|i| i.id == id).cloned())
                                .unwrap_or_else(|| item.clone())
                        });
                        view! {
                            <TodoItem
                                item=current
                                on_toggle=on_toggle
                                on_delete=on_delete
                                delete_label=delete_label.get_value()
                            />
                        }
                    }
                />
            </ul>
        </Show>
    }
}
