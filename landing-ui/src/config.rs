use dioxus_logger::tracing::{info, warn};
use landing_core::LandingConfig;
use web_sys::Document;

use crate::interop::lookup;

/// Inline JSON block a page can use to override defaults.
pub const CONFIG_SELECTOR: &str = "script#landing-config";

pub fn load_config(document: &Document) -> LandingConfig {
    let Some(raw) = lookup(document, CONFIG_SELECTOR).and_then(|el| el.text_content()) else {
        return LandingConfig::default();
    };

    match LandingConfig::from_json(&raw) {
        Ok(config) => {
            info!("Loaded landing config override");
            config
        }
        Err(e) => {
            warn!("Ignoring landing config override: {}", e);
            LandingConfig::default()
        }
    }
}
