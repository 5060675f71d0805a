use std::rc::Rc;

use dioxus_logger::tracing::debug;
use landing_core::config::DecorConfig;
use landing_core::decor::{start_mesh_pulse, start_page_intro, HERO_SELECTOR, LOADED_CLASS};
use landing_core::{LandingError, Scheduler};
use web_sys::{Document, Event};

use crate::interop::{listen, lookup, query_all, set_class, set_style};

pub const MESH_SELECTOR: &str = ".mesh-center";

/// Runs the intro once the DOM is ready. The module usually loads after
/// `DOMContentLoaded` has already fired, so a ready document runs it now.
pub fn bind_page_intro(
    document: &Document,
    config: &DecorConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), LandingError> {
    let intro = {
        let document = document.clone();
        let config = config.clone();
        move || run_page_intro(&document, &config, scheduler.as_ref())
    };

    if document.ready_state() == "loading" {
        let mut intro = Some(intro);
        listen(document, "DOMContentLoaded", move |_: Event| {
            if let Some(intro) = intro.take() {
                intro();
            }
        })
    } else {
        intro();
        Ok(())
    }
}

fn run_page_intro(document: &Document, config: &DecorConfig, scheduler: &dyn Scheduler) {
    let body = document.body();
    let hero = query_all(document, HERO_SELECTOR);
    start_page_intro(
        scheduler,
        config,
        || {
            if let Some(body) = &body {
                set_class(body, LOADED_CLASS, true);
            }
        },
        move || {
            for element in &hero {
                set_style(element, "opacity", "1");
            }
        },
    );
}

pub fn bind_mesh_pulse(
    document: &Document,
    config: &DecorConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), LandingError> {
    let Some(mesh) = lookup(document, MESH_SELECTOR) else {
        debug!("No mesh element on page");
        return Ok(());
    };

    start_mesh_pulse(scheduler, config, move |shadow| {
        set_style(&mesh, "box-shadow", shadow);
    });
    Ok(())
}
