//! DOM helpers shared by the browser tests.

#![allow(dead_code)]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

pub fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("tests run in a browser")
}

/// Fresh `<div>` attached to `<body>` to mount a component into
pub fn fresh_container() -> HtmlElement {
    let document = document();
    let container = document
        .create_element("div")
        .expect("create container")
        .dyn_into::<HtmlElement>()
        .expect("div is an HtmlElement");
    document
        .body()
        .expect("document has a body")
        .append_child(&container)
        .expect("attach container");
    container
}

/// Let Leptos flush pending render effects
pub async fn tick() {
    TimeoutFuture::new(0).await;
}

pub fn selector(test_id: &str) -> String {
    format!("[data-testid=\"{}\"]", test_id)
}

pub fn find(root: &Element, test_id: &str) -> Option<Element> {
    root.query_selector(&selector(test_id)).ok().flatten()
}

pub fn get(root: &Element, test_id: &str) -> Element {
    find(root, test_id).unwrap_or_else(|| panic!("no element with data-testid={}", test_id))
}

pub fn get_input(root: &Element, test_id: &str) -> HtmlInputElement {
    get(root, test_id)
        .dyn_into::<HtmlInputElement>()
        .expect("element is an <input>")
}

pub fn click(element: &Element) {
    element
        .dyn_ref::<HtmlElement>()
        .expect("element is an HtmlElement")
        .click();
}

/// Replace the field's value and fire a bubbling `input` event
pub fn type_text(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("create input event");
    input.dispatch_event(&event).expect("dispatch input event");
}

pub fn press_enter(input: &HtmlInputElement) {
    dispatch_enter(input, false);
}

/// Enter that confirms an in-progress IME composition
pub fn press_enter_composing(input: &HtmlInputElement) {
    dispatch_enter(input, true);
}

fn dispatch_enter(input: &HtmlInputElement, composing: bool) {
    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_is_composing(composing);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("create keydown event");
    input.dispatch_event(&event).expect("dispatch keydown event");
}

/// Type into the draft field and click the add button
pub async fn add_todo(root: &Element, text: &str) {
    type_text(&get_input(root, "todo-input"), text);
    click(&get(root, "add-button"));
    tick().await;
}

pub fn rows(root: &Element) -> Vec<Element> {
    let list = root.query_selector_all("li.todo-item").expect("valid selector");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn row_text(row: &Element) -> String {
    row.query_selector(".todo-text")
        .ok()
        .flatten()
        .and_then(|span| span.text_content())
        .unwrap_or_default()
}

pub fn row_by_text(root: &Element, text: &str) -> Option<Element> {
    rows(root).into_iter().find(|row| row_text(row) == text)
}

pub fn row_checkbox(row: &Element) -> HtmlInputElement {
    row.query_selector("input[type=\"checkbox\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .expect("row has a checkbox")
}

pub fn row_delete_button(row: &Element) -> Element {
    row.query_selector("button")
        .ok()
        .flatten()
        .expect("row has a delete button")
}

/// (text, checked) for every visible row, in order
pub fn visible_todos(root: &Element) -> Vec<(String, bool)> {
    rows(root)
        .iter()
        .map(|row| (row_text(row), row_checkbox(row).checked()))
        .collect()
}

pub async fn toggle_by_text(root: &Element, text: &str) {
    let row = row_by_text(root, text).unwrap_or_else(|| panic!("no row \"{}\"", text));
    click(&row_checkbox(&row));
    tick().await;
}

pub async fn delete_by_text(root: &Element, text: &str) {
    let row = row_by_text(root, text).unwrap_or_else(|| panic!("no row \"{}\"", text));
    click(&row_delete_button(&row));
    tick().await;
}
