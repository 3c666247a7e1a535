//! Todo List Entry Point

fn main() {
    if let Err(err) = todo_list_ui::start() {
        web_sys::console::error_1(&format!("[APP] Failed to start: {}", err).into());
    }
}
