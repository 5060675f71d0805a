use landing_core::labels::{focused_on_blur, focused_on_focus, FOCUSED_CLASS};
use landing_core::LandingError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlTextAreaElement};

use crate::interop::{has_class, listen, query_all, set_class};

pub const FIELD_SELECTOR: &str = ".form-group input, .form-group textarea";

pub fn bind_floating_labels(document: &Document) -> Result<(), LandingError> {
    for field in query_all(document, FIELD_SELECTOR) {
        let Some(group) = field.parent_element() else {
            continue;
        };

        let focus_group = group.clone();
        listen(&field, "focus", move |_: Event| {
            set_class(&focus_group, FOCUSED_CLASS, focused_on_focus());
        })?;

        let blurred = field.clone();
        listen(&field, "blur", move |_: Event| {
            let focused = focused_on_blur(&field_value(&blurred), has_class(&group, FOCUSED_CLASS));
            set_class(&group, FOCUSED_CLASS, focused);
        })?;
    }

    Ok(())
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
