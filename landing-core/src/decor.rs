//! Timed decorations: the page intro, the mesh glow pulse and the typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DecorConfig;
use crate::schedule::{Scheduler, TaskHandle};

pub const LOADED_CLASS: &str = "loaded";

/// Hero elements faded in shortly after the document loads.
pub const HERO_SELECTOR: &str = ".hero-badge, .hero-title, .hero-desc, .hero-buttons, .hero-stats";

/// Mark the page loaded now, reveal the hero after the configured delay.
pub fn start_page_intro<L, R>(
    scheduler: &dyn Scheduler,
    config: &DecorConfig,
    mark_loaded: L,
    reveal_hero: R,
) -> TaskHandle
where
    L: FnOnce(),
    R: FnOnce() + 'static,
{
    mark_loaded();
    scheduler.set_timeout(config.intro_delay_ms, Box::new(reveal_hero))
}

/// Every period: glow, then fall back to the resting shadow after the hold.
/// Cancelling the returned handle also drops a hold still in flight.
pub fn start_mesh_pulse<F>(
    scheduler: Rc<dyn Scheduler>,
    config: &DecorConfig,
    apply_shadow: F,
) -> TaskHandle
where
    F: Fn(&str) + 'static,
{
    let apply = Rc::new(apply_shadow);
    let glow = config.mesh_glow_shadow.clone();
    let rest = config.mesh_rest_shadow.clone();
    let hold_ms = config.mesh_pulse_hold_ms;

    let pulse_slot: Rc<RefCell<Option<TaskHandle>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&pulse_slot);
    let timer = Rc::clone(&scheduler);

    let handle = scheduler.set_interval(
        config.mesh_pulse_period_ms,
        Box::new(move || {
            apply(&glow);

            let apply = Rc::clone(&apply);
            let rest = rest.clone();
            let pulse = slot.borrow().clone();
            timer.set_timeout(
                hold_ms,
                Box::new(move || {
                    if pulse.as_ref().is_some_and(TaskHandle::is_cancelled) {
                        return;
                    }
                    apply(&rest);
                }),
            );
        }),
    );

    *pulse_slot.borrow_mut() = Some(handle.clone());
    handle
}

/// Reveals `text` one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// The text revealed so far after one more character, or `None` once the
    /// whole text is shown.
    pub fn tick(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }
}

struct TypingState<F> {
    writer: Typewriter,
    render: F,
}

/// Clear the target, then type one character every `speed_ms`.
pub fn start_type_writer<F>(
    scheduler: Rc<dyn Scheduler>,
    text: &str,
    speed_ms: u32,
    mut render: F,
) -> TaskHandle
where
    F: FnMut(&str) + 'static,
{
    render("");
    let handle = TaskHandle::new();
    let state = Rc::new(RefCell::new(TypingState {
        writer: Typewriter::new(text),
        render,
    }));
    type_next(scheduler, state, speed_ms, handle.clone());
    handle
}

fn type_next<F>(
    scheduler: Rc<dyn Scheduler>,
    state: Rc<RefCell<TypingState<F>>>,
    speed_ms: u32,
    handle: TaskHandle,
) where
    F: FnMut(&str) + 'static,
{
    if handle.is_cancelled() {
        return;
    }

    {
        let mut state = state.borrow_mut();
        let TypingState { writer, render } = &mut *state;
        match writer.tick() {
            Some(text) => render(&text),
            None => return,
        }
    }

    let next = Rc::clone(&scheduler);
    scheduler.set_timeout(
        speed_ms,
        Box::new(move || type_next(next, state, speed_ms, handle)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::VirtualScheduler;
    use std::cell::Cell;

    #[test]
    fn intro_marks_loaded_then_reveals_after_delay() {
        let scheduler = VirtualScheduler::shared();
        let loaded = Cell::new(false);
        let revealed = Rc::new(Cell::new(false));

        let flag = Rc::clone(&revealed);
        start_page_intro(
            scheduler.as_ref(),
            &DecorConfig::default(),
            || loaded.set(true),
            move || flag.set(true),
        );

        assert!(loaded.get());
        assert!(!revealed.get());
        scheduler.advance(100.0);
        assert!(revealed.get());
    }

    #[test]
    fn mesh_pulse_glows_then_rests() {
        let scheduler = VirtualScheduler::shared();
        let shadows = Rc::new(RefCell::new(Vec::<String>::new()));
        let config = DecorConfig::default();

        let log = Rc::clone(&shadows);
        let handle = start_mesh_pulse(scheduler.clone(), &config, move |shadow| {
            log.borrow_mut().push(shadow.to_string());
        });

        scheduler.advance(1999.0);
        assert!(shadows.borrow().is_empty());

        scheduler.advance(1.0);
        assert_eq!(*shadows.borrow(), vec![config.mesh_glow_shadow.clone()]);

        scheduler.advance(500.0);
        scheduler.advance(1500.0);
        assert_eq!(
            *shadows.borrow(),
            vec![
                config.mesh_glow_shadow.clone(),
                config.mesh_rest_shadow.clone(),
                config.mesh_glow_shadow.clone(),
            ]
        );

        handle.cancel();
        scheduler.advance(10_000.0);
        assert_eq!(shadows.borrow().len(), 3);
    }

    #[test]
    fn typewriter_counts_characters_not_bytes() {
        let mut writer = Typewriter::new("한글");
        assert_eq!(writer.tick().as_deref(), Some("한"));
        assert_eq!(writer.tick().as_deref(), Some("한글"));
        assert_eq!(writer.tick(), None);
    }

    #[test]
    fn typewriter_reveals_one_character_per_tick() {
        let scheduler = VirtualScheduler::shared();
        let frames = Rc::new(RefCell::new(Vec::<String>::new()));

        let log = Rc::clone(&frames);
        start_type_writer(scheduler.clone(), "abc", 100, move |text| {
            log.borrow_mut().push(text.to_string());
        });
        assert_eq!(*frames.borrow(), vec!["", "a"]);

        scheduler.advance(100.0);
        assert_eq!(frames.borrow().last().map(String::as_str), Some("ab"));

        scheduler.advance(1000.0);
        assert_eq!(*frames.borrow(), vec!["", "a", "ab", "abc"]);
        assert_eq!(scheduler.pending(), 0);
    }
}
