use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::warn;

use crate::config::ThemeConfig;
use crate::error::LandingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only an exact "dark" reads as dark; anything else is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// String key-value store that survives page reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError>;
    fn set(&self, key: &str, value: &str) -> Result<(), LandingError>;
}

/// In-memory store. Clones share contents, so a clone stands in for the same
/// storage seen after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LandingError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Where the active theme becomes visible (the document root attribute).
pub trait ThemeTarget {
    fn apply_theme(&self, theme: Theme);
}

pub struct ThemeController<S, T> {
    store: S,
    target: T,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore, T: ThemeTarget> ThemeController<S, T> {
    pub fn new(store: S, target: T, config: &ThemeConfig) -> Self {
        Self {
            store,
            target,
            key: config.storage_key.clone(),
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Read the stored preference (light when absent), apply and store it.
    pub fn initialize(&mut self) -> Theme {
        let stored = self.store.get(&self.key).unwrap_or_else(|e| {
            warn!("Failed to read theme preference, using default: {}", e);
            None
        });
        let theme = stored.as_deref().map(Theme::from_stored).unwrap_or_default();
        self.commit(theme);
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        let theme = self.current.toggled();
        self.commit(theme);
        theme
    }

    fn commit(&mut self, theme: Theme) {
        self.current = theme;
        self.target.apply_theme(theme);
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
    }
}
