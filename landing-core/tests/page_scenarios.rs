use std::cell::RefCell;
use std::rc::Rc;

use landing_core::animator::IntersectionEntry;
use landing_core::config::FormConfig;
use landing_core::{
    run_frames, AnimationKind, ContactFormController, CounterAnimation, CounterTarget, CounterTask,
    FormRecord, FormSurface, LandingConfig, ObservationSet, RevealStyle, SubmitView,
    VirtualScheduler,
};

fn start_counter(
    scheduler: &Rc<VirtualScheduler>,
    raw_target: Option<&str>,
    duration_ms: f64,
) -> Rc<RefCell<Vec<String>>> {
    let shown = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&shown);
    let animation = CounterAnimation::new(CounterTarget::parse(raw_target), duration_ms);
    run_frames(
        scheduler.clone(),
        CounterTask::new(animation, move |text: &str| {
            log.borrow_mut().push(text.to_string())
        }),
    );
    shown
}

#[test]
fn counter_reaches_target_exactly_and_stops() {
    let scheduler = VirtualScheduler::shared();
    let shown = start_counter(&scheduler, Some("100"), 2000.0);

    scheduler.advance(5000.0);
    let shown = shown.borrow();

    assert_eq!(shown.last().map(String::as_str), Some("100"));
    assert!(shown
        .iter()
        .all(|text| text.parse::<i64>().map_or(false, |v| (0..=100).contains(&v))));
    assert!(shown
        .windows(2)
        .all(|w| w[0].parse::<i64>().unwrap() <= w[1].parse::<i64>().unwrap()));
    assert_eq!(shown.iter().filter(|text| *text == "100").count(), 1);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn counter_duration_does_not_depend_on_frame_rate() {
    for frame_ms in [8.0, 16.0, 33.0] {
        let scheduler = Rc::new(VirtualScheduler::new(frame_ms));
        let shown = start_counter(&scheduler, Some("500"), 2000.0);

        scheduler.advance(1990.0);
        assert_ne!(shown.borrow().last().map(String::as_str), Some("500"));

        scheduler.advance(50.0);
        assert_eq!(shown.borrow().last().map(String::as_str), Some("500"));
    }
}

#[test]
fn counter_with_garbage_target_displays_nan() {
    let scheduler = VirtualScheduler::shared();
    let shown = start_counter(&scheduler, Some("lots"), 2000.0);

    scheduler.advance(100.0);
    assert_eq!(*shown.borrow(), vec!["NaN"]);
}

#[test]
fn counters_start_once_when_observed_repeatedly() {
    let config = LandingConfig::default();
    let scheduler = VirtualScheduler::shared();
    let mut stats = ObservationSet::new(config.animator.counter_threshold);
    stats.observe(0usize, AnimationKind::Counter);

    let mut started = 0;
    for ratio in [0.2, 0.6, 0.0, 0.9] {
        let entries = [IntersectionEntry {
            key: 0usize,
            is_intersecting: ratio > 0.0,
            ratio,
        }];
        for _ in stats.on_intersections(&entries) {
            started += 1;
            start_counter(&scheduler, Some("42"), config.animator.counter_duration_ms);
        }
    }

    assert_eq!(started, 1);
}

#[test]
fn reveal_moves_from_hidden_to_shown() {
    let config = LandingConfig::default();
    let mut reveal = ObservationSet::new(config.animator.reveal_threshold);
    let mut styles: Vec<RevealStyle> = (0..3)
        .map(|index| {
            reveal.observe(index, AnimationKind::Reveal { index });
            RevealStyle::hidden(index, &config.animator)
        })
        .collect();

    let entries = [IntersectionEntry {
        key: 1usize,
        is_intersecting: true,
        ratio: 0.15,
    }];
    for trigger in reveal.on_intersections(&entries) {
        styles[trigger.key] = RevealStyle::shown();
    }

    assert_eq!(styles[0].opacity, "0");
    assert_eq!(styles[1], RevealStyle::shown());
    assert_eq!(styles[2].opacity, "0");
}

struct ContactForm {
    fields: RefCell<Vec<(String, String)>>,
    button: RefCell<SubmitView>,
}

impl FormSurface for ContactForm {
    fn entries(&self) -> Vec<(String, String)> {
        self.fields.borrow().clone()
    }

    fn submit_text(&self) -> String {
        self.button.borrow().text.clone()
    }

    fn apply_submit_view(&self, view: &SubmitView) {
        *self.button.borrow_mut() = view.clone();
    }

    fn reset(&self) {
        for (_, value) in self.fields.borrow_mut().iter_mut() {
            value.clear();
        }
    }
}

#[test]
fn form_submission_captures_record_and_resets_after_three_seconds() {
    let scheduler = VirtualScheduler::shared();
    let config = FormConfig::default();
    let controller = ContactFormController::new(scheduler.clone(), config.clone());
    let form = Rc::new(ContactForm {
        fields: RefCell::new(vec![
            ("name".to_string(), "A".to_string()),
            ("email".to_string(), "b@c.com".to_string()),
        ]),
        button: RefCell::new(SubmitView {
            text: "문의하기".to_string(),
            background: String::new(),
        }),
    });

    let record = controller.submit(Rc::clone(&form)).expect("submit");
    assert_eq!(
        record,
        FormRecord::from_entries([("name", "A"), ("email", "b@c.com")])
    );
    assert_eq!(form.button.borrow().text, config.success_text);
    assert_eq!(form.button.borrow().background, config.success_background);

    scheduler.advance(2999.0);
    assert_eq!(form.button.borrow().text, config.success_text);
    assert_eq!(form.fields.borrow()[0].1, "A");

    scheduler.advance(1.0);
    assert_eq!(
        *form.button.borrow(),
        SubmitView {
            text: "문의하기".to_string(),
            background: String::new(),
        }
    );
    assert!(form.fields.borrow().iter().all(|(_, value)| value.is_empty()));
    assert!(!controller.feedback_pending());
}
