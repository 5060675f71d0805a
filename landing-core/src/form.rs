//! Contact form handling. Nothing is sent anywhere: a submission is logged,
//! acknowledged on the submit button, and the form resets after a delay.

use std::cell::RefCell;
use std::rc::Rc;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::info;

use crate::config::FormConfig;
use crate::error::LandingError;
use crate::schedule::{Scheduler, TaskHandle};

/// Field values keyed by field name, in form order. A repeated name keeps
/// its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord(Vec<(String, String)>);

impl FormRecord {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (name, value) in entries {
            let name = name.into();
            let value = value.into();
            match fields.iter_mut().find(|(existing, _)| *existing == name) {
                Some((_, slot)) => *slot = value,
                None => fields.push((name, value)),
            }
        }
        Self(fields)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FormRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Text and inline background of the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitView {
    pub text: String,
    pub background: String,
}

/// The DOM side of the contact form.
pub trait FormSurface {
    fn entries(&self) -> Vec<(String, String)>;
    fn submit_text(&self) -> String;
    fn apply_submit_view(&self, view: &SubmitView);
    fn reset(&self);
}

struct PendingRestore {
    original_text: String,
    handle: TaskHandle,
}

pub struct ContactFormController {
    scheduler: Rc<dyn Scheduler>,
    config: FormConfig,
    pending: Rc<RefCell<Option<PendingRestore>>>,
}

impl ContactFormController {
    pub fn new(scheduler: Rc<dyn Scheduler>, config: FormConfig) -> Self {
        Self {
            scheduler,
            config,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Handle one submission. A submission arriving while feedback is still
    /// shown restarts the delay but keeps the button's real original text.
    pub fn submit<S>(&self, surface: Rc<S>) -> Result<FormRecord, LandingError>
    where
        S: FormSurface + 'static,
    {
        let record = FormRecord::from_entries(surface.entries());
        info!("Form submitted: {}", serde_json::to_string(&record)?);

        let previous = self.pending.borrow_mut().take();
        let original_text = match previous {
            Some(previous) => {
                previous.handle.cancel();
                previous.original_text
            }
            None => surface.submit_text(),
        };

        surface.apply_submit_view(&SubmitView {
            text: self.config.success_text.clone(),
            background: self.config.success_background.clone(),
        });

        let restore_text = original_text.clone();
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.set_timeout(
            self.config.feedback_ms,
            Box::new(move || {
                surface.apply_submit_view(&SubmitView {
                    text: restore_text,
                    background: String::new(),
                });
                surface.reset();
                pending.borrow_mut().take();
            }),
        );

        *self.pending.borrow_mut() = Some(PendingRestore {
            original_text,
            handle,
        });

        Ok(record)
    }

    pub fn feedback_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
