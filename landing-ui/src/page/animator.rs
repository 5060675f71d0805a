use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing::debug;
use landing_core::animator::VISIBLE_CLASS;
use landing_core::config::AnimatorConfig;
use landing_core::{
    run_frames, AnimationKind, CounterAnimation, CounterTarget, CounterTask, IntersectionEntry,
    LandingError, ObservationSet, RevealStyle, Scheduler,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::interop::{js_err, query_all, set_class, set_style};

pub const REVEAL_SELECTOR: &str =
    ".product-card, .detail-content, .detail-visual, .contact-info, .contact-form-wrapper";
pub const COUNTER_SELECTOR: &str = ".stat-number";

pub fn bind_counters(
    document: &Document,
    config: &AnimatorConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<(), LandingError> {
    let stats = query_all(document, COUNTER_SELECTOR);
    let kinds = vec![AnimationKind::Counter; stats.len()];
    let duration_ms = config.counter_duration_ms;

    observe_once(stats, kinds, config.counter_threshold, None, move |stat, _| {
        let target = CounterTarget::parse(stat.get_attribute("data-target").as_deref());
        let animation = CounterAnimation::new(target, duration_ms);
        let stat = stat.clone();
        run_frames(
            Rc::clone(&scheduler),
            CounterTask::new(animation, move |text: &str| stat.set_text_content(Some(text))),
        );
    })
}

pub fn bind_reveal(document: &Document, config: &AnimatorConfig) -> Result<(), LandingError> {
    let elements = query_all(document, REVEAL_SELECTOR);
    let kinds: Vec<AnimationKind> = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            apply_reveal_style(element, &RevealStyle::hidden(index, config));
            AnimationKind::Reveal { index }
        })
        .collect();

    observe_once(
        elements,
        kinds,
        config.reveal_threshold,
        Some(config.reveal_root_margin.as_str()),
        |element, _| {
            set_class(element, VISIBLE_CLASS, true);
            apply_reveal_style(element, &RevealStyle::shown());
        },
    )
}

fn apply_reveal_style(element: &Element, style: &RevealStyle) {
    set_style(element, "opacity", style.opacity);
    set_style(element, "transform", &style.transform);
    if let Some(transition) = &style.transition {
        set_style(element, "transition", transition);
    }
}

/// Observe `elements` with one observer; `on_trigger` runs at most once per
/// element, after which the element is unobserved.
fn observe_once<F>(
    elements: Vec<Element>,
    kinds: Vec<AnimationKind>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_trigger: F,
) -> Result<(), LandingError>
where
    F: FnMut(&Element, AnimationKind) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let mut set = ObservationSet::new(threshold);
    for (key, kind) in kinds.into_iter().enumerate() {
        set.observe(key, kind);
    }
    let set = Rc::new(RefCell::new(set));
    let elements = Rc::new(elements);

    let observed = Rc::clone(&elements);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let batch: Vec<IntersectionEntry<usize>> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let key = observed.iter().position(|element| *element == target)?;
                    Some(IntersectionEntry {
                        key,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                })
                .collect();

            let triggers = set.borrow_mut().on_intersections(&batch);
            for trigger in triggers {
                let element = &observed[trigger.key];
                observer.unobserve(element);
                on_trigger(element, trigger.kind);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    for element in elements.iter() {
        observer.observe(element);
    }
    debug!("Observing {} elements at threshold {}", elements.len(), threshold);

    // Leak the callback to keep it alive for the page lifetime
    callback.forget();
    Ok(())
}
