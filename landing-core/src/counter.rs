//! Numeric stat counters that ramp from zero to a configured target.

use crate::schedule::{FrameStep, FrameTask};

const NOT_A_NUMBER: &str = "NaN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTarget {
    Value(i64),
    NotANumber,
}

impl CounterTarget {
    /// Integer-prefix parse of a `data-target` value: leading whitespace, an
    /// optional sign, then decimal digits. Trailing text is ignored.
    ///
    /// Values beyond `i64` saturate at `i64::MAX`/`-i64::MAX`. A `0x` prefix
    /// is not read as hex: `"0x1F"` parses as 0.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return CounterTarget::NotANumber;
        };

        let trimmed = raw.trim_start();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut value: i64 = 0;
        let mut seen_digit = false;
        for byte in digits.bytes().take_while(u8::is_ascii_digit) {
            seen_digit = true;
            value = value
                .saturating_mul(10)
                .saturating_add(i64::from(byte - b'0'));
        }

        if !seen_digit {
            return CounterTarget::NotANumber;
        }
        CounterTarget::Value(if negative { -value } else { value })
    }

    pub fn final_text(self) -> String {
        match self {
            CounterTarget::Value(value) => value.to_string(),
            CounterTarget::NotANumber => NOT_A_NUMBER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Time-based ramp: the displayed value depends on elapsed time, not on how
/// many frames have run.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: CounterTarget,
    duration_ms: f64,
    started_at: Option<f64>,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            started_at: None,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The display for this frame, or `None` once the final value was shown.
    pub fn frame(&mut self, now_ms: f64) -> Option<CounterFrame> {
        if self.finished {
            return None;
        }
        let started_at = *self.started_at.get_or_insert(now_ms);

        let target = match self.target {
            CounterTarget::Value(target) if target > 0 => target,
            _ => return Some(self.finish()),
        };

        let elapsed = (now_ms - started_at).max(0.0);
        if elapsed >= self.duration_ms {
            return Some(self.finish());
        }

        let current = (target as f64 * elapsed / self.duration_ms).floor() as i64;
        Some(CounterFrame {
            text: current.clamp(0, target).to_string(),
            done: false,
        })
    }

    fn finish(&mut self) -> CounterFrame {
        self.finished = true;
        CounterFrame {
            text: self.target.final_text(),
            done: true,
        }
    }
}

/// Binds a `CounterAnimation` to the element text it updates.
pub struct CounterTask<F> {
    animation: CounterAnimation,
    render: F,
}

impl<F: FnMut(&str)> CounterTask<F> {
    pub fn new(animation: CounterAnimation, render: F) -> Self {
        Self { animation, render }
    }
}

impl<F: FnMut(&str)> FrameTask for CounterTask<F> {
    fn step(&mut self, now_ms: f64) -> FrameStep {
        match self.animation.frame(now_ms) {
            Some(frame) => {
                (self.render)(&frame.text);
                if frame.done {
                    FrameStep::Done
                } else {
                    FrameStep::Continue
                }
            }
            None => FrameStep::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_follows_integer_prefix_rules() {
        assert_eq!(CounterTarget::parse(Some("100")), CounterTarget::Value(100));
        assert_eq!(CounterTarget::parse(Some("  42+")), CounterTarget::Value(42));
        assert_eq!(CounterTarget::parse(Some("-7")), CounterTarget::Value(-7));
        assert_eq!(CounterTarget::parse(Some("12.9")), CounterTarget::Value(12));
        assert_eq!(CounterTarget::parse(Some("abc")), CounterTarget::NotANumber);
        assert_eq!(CounterTarget::parse(Some("")), CounterTarget::NotANumber);
        assert_eq!(CounterTarget::parse(None), CounterTarget::NotANumber);
    }

    #[test]
    fn parse_saturates_and_reads_decimal_only() {
        assert_eq!(
            CounterTarget::parse(Some("99999999999999999999")),
            CounterTarget::Value(i64::MAX)
        );
        assert_eq!(CounterTarget::parse(Some("0x1F")), CounterTarget::Value(0));
    }

    #[test]
    fn ramp_is_time_based_and_snaps_to_target() {
        let mut counter = CounterAnimation::new(CounterTarget::Value(100), 2000.0);

        assert_eq!(counter.frame(500.0).unwrap().text, "0");
        assert_eq!(counter.frame(1500.0).unwrap().text, "50");
        assert_eq!(counter.frame(2499.0).unwrap().text, "99");

        let last = counter.frame(2500.0).unwrap();
        assert_eq!(last, CounterFrame { text: "100".to_string(), done: true });
        assert!(counter.frame(3000.0).is_none());
    }

    #[test]
    fn missing_target_shows_nan() {
        let mut counter = CounterAnimation::new(CounterTarget::parse(None), 2000.0);
        let frame = counter.frame(0.0).unwrap();
        assert_eq!(frame.text, "NaN");
        assert!(frame.done);
    }

    #[test]
    fn non_positive_target_finishes_immediately() {
        let mut counter = CounterAnimation::new(CounterTarget::Value(-5), 2000.0);
        assert_eq!(counter.frame(0.0).unwrap().text, "-5");
        assert!(counter.is_finished());
    }
}
