pub mod config;
pub mod interop;
pub mod page;
pub mod scheduler;

use std::rc::Rc;

use dioxus_logger::tracing::{info, Level};
use landing_core::{start_type_writer, LandingError, Scheduler};
use wasm_bindgen::prelude::*;

pub use scheduler::BrowserScheduler;

/// Set up console logging, read the config override and bind every page
/// behavior. Logging setup is a no-op once a subscriber exists.
pub fn start() -> Result<(), LandingError> {
    dioxus_logger::init(Level::INFO).ok();

    let document = interop::document()?;
    let config = config::load_config(&document);
    let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);

    page::bind_all(&document, &config, scheduler);
    info!("Landing page runtime started");
    Ok(())
}

/// Entry point for pages that load the `cdylib` directly.
#[wasm_bindgen(js_name = startLanding)]
pub fn start_landing() -> Result<(), JsValue> {
    start().map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Type `text` into the first element matching `selector`, one character
/// every `speed_ms` (100 by default).
#[wasm_bindgen(js_name = typeWriter)]
pub fn type_writer(selector: &str, text: &str, speed_ms: Option<u32>) -> Result<(), JsValue> {
    let document = interop::document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let element = interop::require(&document, selector)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let speed_ms = speed_ms.unwrap_or(config::load_config(&document).decor.typewriter_speed_ms);

    start_type_writer(Rc::new(BrowserScheduler), text, speed_ms, move |typed| {
        element.set_text_content(Some(typed));
    });
    Ok(())
}
