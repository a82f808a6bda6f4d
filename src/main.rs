//! Fyyur Frontend Entry Point
//!
//! Binds the delete buttons of server-rendered detail pages.

mod binding;
mod config;
mod error;
mod fetch;
mod js;
mod logger;
mod navigation;

use log::{debug, error, info, LevelFilter};

use crate::config::UiConfig;
use crate::error::BindError;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("No document to bind to");
        return;
    };

    let config = UiConfig::from_document(&document);
    log::set_max_level(config.log_level);

    for binding in config.bindings {
        let element_id = binding.element_id.clone();
        match binding::bind_delete_button(&document, binding) {
            Ok(()) => info!("Bound delete button #{}", element_id),
            Err(BindError::MissingElement(id)) => debug!("No #{} on this page", id),
            Err(e) => error!("Failed to bind #{}: {}", element_id, e),
        }
    }
}
