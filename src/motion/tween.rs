//! Time-based tweens
//!
//! A tween animates a scalar from one value to another over a fixed duration,
//! optionally after a delay. Tweens are sampled, never stepped, so the same
//! `Instant` always yields the same value.

use super::easing::Easing;
use std::time::{Duration, Instant};

/// A one-shot animation of a single scalar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in [0, 1] after `elapsed` since the tween started
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Value after `elapsed` since the tween started
    pub fn value(&self, elapsed: Duration) -> f64 {
        let eased = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    /// Total time including the delay
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}

/// A tween pinned to the moment it started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub tween: Tween,
    pub started_at: Instant,
}

impl Animation {
    pub fn start(tween: Tween, now: Instant) -> Self {
        Self {
            tween,
            started_at: now,
        }
    }

    pub fn value(&self, now: Instant) -> f64 {
        self.tween.value(now.saturating_duration_since(self.started_at))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.tween
            .is_finished(now.saturating_duration_since(self.started_at))
    }
}

/// Multi-stop animation, e.g. a pulse through `[0.9, 1.1, 1.0]`
///
/// `times` are fractions of the duration, one per value.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTween {
    pub values: Vec<f64>,
    pub times: Vec<f64>,
    pub duration: Duration,
    pub easing: Easing,
}

impl KeyframeTween {
    pub fn new(values: Vec<f64>, times: Vec<f64>, duration: Duration, easing: Easing) -> Self {
        Self {
            values,
            times,
            duration,
            easing,
        }
    }

    pub fn value(&self, elapsed: Duration) -> f64 {
        let Some(&first) = self.values.first() else {
            return 0.0;
        };
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        for (i, pair) in self.times.windows(2).enumerate() {
            let (start, end) = (pair[0], pair[1]);
            if t <= end && i + 1 < self.values.len() {
                let span = end - start;
                let local = if span > 0.0 { (t - start) / span } else { 1.0 };
                let eased = self.easing.apply(local);
                let (a, b) = (self.values[i], self.values[i + 1]);
                return a + (b - a) * eased;
            }
        }
        self.values.last().copied().unwrap_or(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::SOFT_LANDING;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_tween_respects_delay() {
        let tween = Tween::new(0.0, 1.0, ms(1000)).with_delay(ms(200));
        assert_eq!(tween.value(ms(100)), 0.0);
        assert_eq!(tween.value(ms(200)), 0.0);
        assert!((tween.value(ms(700)) - 0.5).abs() < 1e-9);
        assert_eq!(tween.value(ms(5000)), 1.0);
        assert!(tween.is_finished(ms(1200)));
        assert!(!tween.is_finished(ms(1199)));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::new(3.0, 7.0, Duration::ZERO);
        assert_eq!(tween.value(Duration::ZERO), 7.0);
    }

    #[test]
    fn test_eased_tween_stays_in_range() {
        let tween = Tween::new(-3.0, 0.0, ms(800)).with_easing(SOFT_LANDING);
        for step in 0..=8 {
            let value = tween.value(ms(step * 100));
            assert!((-3.0..=0.0).contains(&value));
        }
    }

    #[test]
    fn test_animation_samples_against_start() {
        let start = Instant::now();
        let animation = Animation::start(Tween::new(0.0, 10.0, ms(1000)), start);
        assert_eq!(animation.value(start), 0.0);
        assert!((animation.value(start + ms(500)) - 5.0).abs() < 1e-9);
        assert!(animation.is_finished(start + ms(1000)));
    }

    #[test]
    fn test_keyframe_tween_pulse() {
        let pulse = KeyframeTween::new(
            vec![0.9, 1.1, 1.0],
            vec![0.0, 0.6, 1.0],
            ms(2500),
            Easing::Linear,
        );
        assert!((pulse.value(Duration::ZERO) - 0.9).abs() < 1e-9);
        assert!((pulse.value(ms(1500)) - 1.1).abs() < 1e-9);
        assert!((pulse.value(ms(2500)) - 1.0).abs() < 1e-9);
        assert!((pulse.value(ms(9000)) - 1.0).abs() < 1e-9);
    }
}
