use std::rc::Rc;

use dioxus_logger::tracing::{debug, warn};
use landing_core::config::FormConfig;
use landing_core::{ContactFormController, FormSurface, LandingError, Scheduler, SubmitView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

use crate::interop::{listen, require, set_style};

pub const CONTACT_FORM_SELECTOR: &str = "#contactForm";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

/// The contact form as seen by `ContactFormController`.
pub struct DomContactForm {
    form: HtmlFormElement,
    submit: Option<Element>,
}

impl DomContactForm {
    pub fn new(form: HtmlFormElement) -> Self {
        let submit = form.query_selector(SUBMIT_BUTTON_SELECTOR).ok().flatten();
        if submit.is_none() {
            warn!("Contact form has no submit button; feedback will not be shown");
        }
        Self { form, submit }
    }
}

impl FormSurface for DomContactForm {
    fn entries(&self) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return Vec::new();
        };
        let Ok(Some(iter)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };

        iter.filter_map(Result::ok)
            .filter_map(|pair| {
                let pair = pair.dyn_into::<js_sys::Array>().ok()?;
                let name = pair.get(0).as_string()?;
                // File inputs yield Blob values; only text fields are recorded.
                let value = pair.get(1).as_string()?;
                Some((name, value))
            })
            .collect()
    }

    fn submit_text(&self) -> String {
        self.submit
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn apply_submit_view(&self, view: &SubmitView) {
        if let Some(button) = &self.submit {
            button.set_text_content(Some(&view.text));
            set_style(button, "background", &view.background);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

pub fn bind_contact_form(
    document: &Document,
    config: &FormConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), LandingError> {
    let form = require(document, CONTACT_FORM_SELECTOR)?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| LandingError::Dom(format!("{CONTACT_FORM_SELECTOR} is not a form")))?;

    let surface = Rc::new(DomContactForm::new(form.clone()));
    let controller = ContactFormController::new(scheduler, config.clone());

    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        match controller.submit(Rc::clone(&surface)) {
            Ok(record) => debug!("Captured {} form fields", record.len()),
            Err(e) => warn!("Form submission handling failed: {}", e),
        }
    })
}
