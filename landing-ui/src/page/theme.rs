use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing::{debug, info};
use landing_core::config::ThemeConfig;
use landing_core::{LandingError, PreferenceStore, Theme, ThemeController, ThemeTarget};
use web_sys::{Document, Element, Event, Storage};

use crate::interop::{js_err, listen, lookup, window};

pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, LandingError> {
        window()?
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| LandingError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        Self::storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        Self::storage()?.set_item(key, value).map_err(js_err)
    }
}

/// The document element attribute that stylesheets key off.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: Element,
    attribute: String,
}

impl DocumentRoot {
    pub fn new(document: &Document, attribute: &str) -> Result<Self, LandingError> {
        let root = document
            .document_element()
            .ok_or_else(|| LandingError::Dom("document has no root element".to_string()))?;
        Ok(Self {
            root,
            attribute: attribute.to_string(),
        })
    }
}

impl ThemeTarget for DocumentRoot {
    fn apply_theme(&self, theme: Theme) {
        let _ = self.root.set_attribute(&self.attribute, theme.as_str());
    }
}

pub fn bind_theme(document: &Document, config: &ThemeConfig) -> Result<(), LandingError> {
    let root = DocumentRoot::new(document, &config.attribute)?;
    let mut controller = ThemeController::new(LocalStorageStore, root, config);
    info!("Theme initialized: {}", controller.initialize().as_str());

    let Some(button) = lookup(document, THEME_TOGGLE_SELECTOR) else {
        debug!("No theme toggle on page");
        return Ok(());
    };

    let controller = Rc::new(RefCell::new(controller));
    listen(&button, "click", move |_: Event| {
        let theme = controller.borrow_mut().toggle();
        debug!("Theme toggled to {}", theme.as_str());
    })
}
