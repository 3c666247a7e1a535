//! Todo Form Component
//!
//! Text field plus submit button for adding items.

use leptos::prelude::*;

use crate::config::{DEFAULT_ADD_LABEL, DEFAULT_INPUT_LABEL, DEFAULT_INPUT_PLACEHOLDER};
use crate::test_ids;

/// Form holding the draft text of a new item.
///
/// Submitting (button click or Enter in the field) passes the raw draft to
/// `on_add` and clears the draft, whether or not anything was added.
#[component]
pub fn TodoForm(
    #[prop(into)] on_add: Callback<String>,
    #[prop(into, default = String::from(DEFAULT_INPUT_PLACEHOLDER))] placeholder: String,
    #[prop(into, default = String::from(DEFAULT_INPUT_LABEL))] input_label: String,
    #[prop(into, default = String::from(DEFAULT_ADD_LABEL))] add_label: String,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let submit = move || {
        on_add.run(draft.get_untracked());
        set_draft.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    // Handle Enter ourselves so the browser's implicit submit doesn't add twice.
    // Enter that confirms an IME composition is left alone.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.is_composing() {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <form class="todo-form" data-testid=test_ids::TODO_FORM on:submit=on_submit>
            <input
                type="text"
                class="todo-input"
                data-testid=test_ids::TODO_INPUT
                placeholder=placeholder
                aria-label=input_label
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button type="submit" class="todo-button" data-testid=test_ids::ADD_BUTTON>
                {add_label}
            </button>
        </form>
    }
}
