pub mod animator;
pub mod decor;
pub mod form;
pub mod labels;
pub mod nav;
pub mod pointer;
pub mod theme;

use std::rc::Rc;

use dioxus_logger::tracing::{debug, warn};
use landing_core::{LandingConfig, LandingError, Scheduler};
use web_sys::Document;

/// Bind every page behavior. A behavior whose elements are missing is
/// skipped; the others still bind.
pub fn bind_all(document: &Document, config: &LandingConfig, scheduler: Rc<dyn Scheduler>) {
    report("theme", theme::bind_theme(document, &config.theme));
    report("navbar", nav::bind_scrolled_navbar(document, &config.nav));
    report("mobile menu", nav::bind_mobile_menu(document));
    report("smooth scroll", nav::bind_smooth_scroll(document, &config.nav));
    report("active links", nav::bind_active_links(document, &config.nav));
    report(
        "stat counters",
        animator::bind_counters(document, &config.animator, Rc::clone(&scheduler)),
    );
    report("reveal", animator::bind_reveal(document, &config.animator));
    report("card tilt", pointer::bind_card_tilt(document, &config.pointer));
    report("parallax", pointer::bind_parallax(document, &config.pointer));
    report("stack layers", pointer::bind_stack_layers(document, &config.pointer));
    report(
        "contact form",
        form::bind_contact_form(document, &config.form, Rc::clone(&scheduler)),
    );
    report("floating labels", labels::bind_floating_labels(document));
    report(
        "page intro",
        decor::bind_page_intro(document, &config.decor, Rc::clone(&scheduler)),
    );
    report("mesh pulse", decor::bind_mesh_pulse(document, &config.decor, scheduler));
}

fn report(behavior: &str, result: Result<(), LandingError>) {
    match result {
        Ok(()) => debug!("Bound {}", behavior),
        Err(e @ LandingError::MissingElement { .. }) => warn!("Skipping {}: {}", behavior, e),
        Err(e) => warn!("Failed to bind {}: {}", behavior, e),
    }
}
