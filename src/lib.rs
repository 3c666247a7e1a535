//! Todo List Frontend
//!
//! Single-page todo list built with Leptos (CSR).

pub mod app;
pub mod collection;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod test_ids;

use leptos::prelude::*;

pub use app::App;
pub use collection::TodoCollection;
pub use config::AppConfig;
pub use error::AppError;
pub use models::{Item, ItemId};

/// Boot the app into `<body>`.
///
/// An unparsable page config is logged and replaced by the defaults.
pub fn start() -> Result<(), AppError> {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(AppError::Config(msg)) => (AppConfig::default(), Some(msg)),
        Err(err) => return Err(err),
    };

    if let Err(err) = logging::init(config.level_filter()) {
        // Already installed by an earlier start; keep using it
        log::debug!("[APP] {}", err);
    }
    if let Some(msg) = config_error {
        log::warn!("[CONFIG] Falling back to defaults: {}", msg);
    }

    mount_to_body(move || view! { <App config=config /> });
    Ok(())
}
