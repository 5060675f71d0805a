use std::cell::Cell;
use std::rc::Rc;

use dioxus_logger::tracing::warn;
use gloo_timers::callback::{Interval, Timeout};
use landing_core::{Scheduler, TaskHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `Scheduler` backed by the browser event loop.
///
/// Timeouts and intervals go through `gloo_timers` and are forgotten once
/// started; a cancelled interval clears itself by id on its next tick.
/// Animation frames use `Closure::once_into_js`, which frees itself after
/// firing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let guard = handle.clone();
        Timeout::new(delay_ms, move || {
            if !guard.is_cancelled() {
                task();
            }
        })
        .forget();

        handle
    }

    fn set_interval(&self, period_ms: u32, mut task: Box<dyn FnMut()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let guard = handle.clone();
        let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let own_id = Rc::clone(&interval_id);

        let interval = Interval::new(period_ms, move || {
            if guard.is_cancelled() {
                if let (Some(id), Some(window)) = (own_id.take(), web_sys::window()) {
                    window.clear_interval_with_handle(id);
                }
                return;
            }
            task();
        });
        interval_id.set(interval.forget().as_f64().map(|id| id as i32));

        handle
    }

    fn request_frame(&self, task: Box<dyn FnOnce(f64)>) -> TaskHandle {
        let handle = TaskHandle::new();
        let guard = handle.clone();
        let callback = Closure::once_into_js(move |timestamp: f64| {
            if !guard.is_cancelled() {
                task(timestamp);
            }
        });

        let requested = web_sys::window()
            .map(|window| window.request_animation_frame(callback.unchecked_ref()));
        if !matches!(requested, Some(Ok(_))) {
            warn!("Failed to request animation frame");
        }

        handle
    }
}
