pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod form;
pub mod menu;
pub mod web;

pub use config::PageConfig;
pub use controller::{PageController, PageEvent};
pub use error::ControllerError;
pub use form::FormState;

use wasm_bindgen::prelude::*;

/// Attach the controller to the page.
///
/// Config and logging are set up by [`web::install_when_ready`] once the
/// document has been parsed.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    match web_sys::window().and_then(|w| w.document()) {
        Some(document) => web::install_when_ready(document),
        None => web_sys::console::error_1(&"Scrape page: no document to attach to".into()),
    }
}
