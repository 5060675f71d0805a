//! Visibility-triggered animations.
//!
//! An `ObservationSet` mirrors one intersection observer. Each member fires
//! exactly once: the first qualifying entry removes it from the set, so later
//! entries for the same key find nothing to act on.

use crate::config::AnimatorConfig;

/// Class added to revealed elements.
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Fade/slide in; `index` is the element's position in the reveal set.
    Reveal { index: usize },
    Counter,
}

/// One observer callback entry, reduced to what the trigger test needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry<K> {
    pub key: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger<K> {
    pub key: K,
    pub kind: AnimationKind,
}

#[derive(Debug, Clone)]
pub struct ObservationSet<K> {
    threshold: f64,
    members: Vec<(K, AnimationKind)>,
}

impl<K: Copy + PartialEq> ObservationSet<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            members: Vec::new(),
        }
    }

    pub fn observe(&mut self, key: K, kind: AnimationKind) {
        if !self.is_observed(key) {
            self.members.push((key, kind));
        }
    }

    pub fn is_observed(&self, key: K) -> bool {
        self.members.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Consume a batch of entries, returning the members that crossed the
    /// threshold. Triggered members stop being observed.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry<K>]) -> Vec<Trigger<K>> {
        let mut triggered = Vec::new();

        for entry in entries {
            if !self.qualifies(entry) {
                continue;
            }
            if let Some(pos) = self.members.iter().position(|(k, _)| *k == entry.key) {
                let (key, kind) = self.members.remove(pos);
                triggered.push(Trigger { key, kind });
            }
        }

        triggered
    }

    fn qualifies(&self, entry: &IntersectionEntry<K>) -> bool {
        // Observers report ratios with float noise right at the boundary.
        entry.is_intersecting && entry.ratio + 1e-6 >= self.threshold
    }
}

/// Inline style values for a reveal element.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl RevealStyle {
    pub fn hidden(index: usize, config: &AnimatorConfig) -> Self {
        let delay = index as f64 * config.reveal_stagger_s;
        Self {
            opacity: "0",
            transform: format!("translateY({}px)", config.reveal_offset_px),
            transition: Some(format!(
                "all {}s ease {}s",
                config.reveal_duration_s,
                round_secs(delay)
            )),
        }
    }

    pub fn shown() -> Self {
        Self {
            opacity: "1",
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }
}

// 3 * 0.1 is 0.30000000000000004; keep CSS values readable.
fn round_secs(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
