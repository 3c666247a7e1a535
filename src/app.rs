//! Todo List App
//!
//! Root component: owns the store and wires the form and list to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoList};
use crate::config::AppConfig;
use crate::models::ItemId;
use crate::store::{store_add_item, store_remove_item, store_toggle_item, TodoState, TodoStateStoreFields};
use crate::test_ids;

#[component]
pub fn App(#[prop(optional)] config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(TodoState::default());
    let items = Signal::derive(move || store.todos().with(|todos| todos.items().to_vec()));
    let has_items = move || store.todos().with(|todos| !todos.is_empty());
    let summary = move || {
        store.todos().with(|todos| format!("{} of {} remaining", todos.remaining_count(), todos.len()))
    };

    // Intents from the children
    let on_add = Callback::new(move |text: String| {
        store_add_item(&store, &text);
    });
    let on_toggle = Callback::new(move |id: ItemId| {
        store_toggle_item(&store, id);
    });
    let on_delete = Callback::new(move |id: ItemId| {
        store_remove_item(&store, id);
    });

    log::info!("[APP] Mounted \"{}\"", config.title);

    let AppConfig {
        title,
        input_placeholder,
        input_label,
        add_label,
        delete_label,
        empty_message,
        ..
    } = config;

    view! {
        <div class="app">
            <h1>{title}</h1>

            <TodoForm
                on_add=on_add
                placeholder=input_placeholder
                input_label=input_label
                add_label=add_label
            />

            <TodoList
                items=items
                on_toggle=on_toggle
                on_delete=on_delete
                empty_message=empty_message
                delete_label=delete_label
            />

            <Show when=has_items>
                <p class="todo-summary" data-testid=test_ids::TODO_SUMMARY>{summary}</p>
            </Show>
        </div>
    }
}
