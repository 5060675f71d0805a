use landing_core::LandingError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

pub fn js_err(err: JsValue) -> LandingError {
    LandingError::Dom(format!("{err:?}"))
}

pub fn window() -> Result<Window, LandingError> {
    web_sys::window().ok_or_else(|| LandingError::Dom("no global `window` exists".to_string()))
}

pub fn document() -> Result<Document, LandingError> {
    window()?
        .document()
        .ok_or_else(|| LandingError::Dom("no document on window".to_string()))
}

/// Optional capability: the element if the page has one.
pub fn lookup(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Required capability: a missing element is reported, never panicked on.
pub fn require(document: &Document, selector: &str) -> Result<Element, LandingError> {
    lookup(document, selector).ok_or_else(|| LandingError::missing(selector))
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attach `handler` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), LandingError>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;

    // Leak the closure to keep it alive (cleaned up when the page unloads)
    closure.forget();
    Ok(())
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Layout offsets of an element: (offsetTop, offsetHeight).
pub fn offset_box(element: &Element) -> Option<(f64, f64)> {
    let element = element.dyn_ref::<HtmlElement>()?;
    Some((
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

/// Get the browser viewport dimensions
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
