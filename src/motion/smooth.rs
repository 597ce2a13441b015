//! Smooth scrolling
//!
//! Wheel and key input move a target position; every frame the rendered
//! position eases toward it by a fixed lerp factor. Programmatic jumps run
//! a timed tween instead.

use super::easing::Easing;
use super::tween::{Animation, Tween};
use std::time::{Duration, Instant};

/// Distance under which the position snaps onto the target
const SNAP_EPSILON: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    current: f64,
    target: f64,
    limit: f64,
    lerp: f64,
    animation: Option<Animation>,
}

impl SmoothScroll {
    pub fn new(lerp: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            lerp: lerp.clamp(f64::EPSILON, 1.0),
            animation: None,
        }
    }

    /// Rendered position
    pub fn position(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Largest reachable position. Re-clamps the current state.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Nudge the target; interrupts any programmatic scroll
    pub fn scroll_by(&mut self, delta: f64) {
        if self.animation.take().is_some() {
            self.target = self.current;
        }
        self.target = (self.target + delta).clamp(0.0, self.limit);
    }

    /// Animate to `position` over `duration`
    pub fn scroll_to(&mut self, position: f64, now: Instant, duration: Duration, easing: Easing) {
        let destination = position.clamp(0.0, self.limit);
        let tween = Tween::new(self.current, destination, duration).with_easing(easing);
        self.animation = Some(Animation::start(tween, now));
        self.target = destination;
    }

    /// Advance one frame. Returns whether the rendered position moved.
    pub fn step(&mut self, now: Instant) -> bool {
        let before = self.current;

        if let Some(animation) = self.animation {
            self.current = animation.value(now).clamp(0.0, self.limit);
            if animation.is_finished(now) {
                self.animation = None;
                self.current = self.target;
            }
        } else {
            let delta = self.target - self.current;
            if delta.abs() <= SNAP_EPSILON {
                self.current = self.target;
            } else {
                self.current += delta * self.lerp;
            }
        }

        (self.current - before).abs() > f64::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_lerp_converges_on_target() {
        let now = Instant::now();
        let mut scroll = SmoothScroll::new(0.5);
        scroll.set_limit(100.0);
        scroll.scroll_by(10.0);

        assert!(scroll.step(now));
        assert_eq!(scroll.position(), 5.0);
        for _ in 0..20 {
            scroll.step(now);
        }
        assert_eq!(scroll.position(), 10.0);
        assert!(!scroll.step(now));
    }

    #[test]
    fn test_target_is_clamped_to_document() {
        let mut scroll = SmoothScroll::new(1.0);
        scroll.set_limit(50.0);
        scroll.scroll_by(-10.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.scroll_by(500.0);
        assert_eq!(scroll.target(), 50.0);

        scroll.step(Instant::now());
        assert_eq!(scroll.position(), 50.0);
        scroll.set_limit(20.0);
        assert_eq!(scroll.position(), 20.0);
    }

    #[test]
    fn test_scroll_to_follows_tween() {
        let start = Instant::now();
        let mut scroll = SmoothScroll::new(0.1);
        scroll.set_limit(200.0);
        scroll.scroll_to(100.0, start, ms(1000), Easing::Linear);

        scroll.step(start + ms(500));
        assert!((scroll.position() - 50.0).abs() < 1e-9);
        scroll.step(start + ms(1000));
        assert_eq!(scroll.position(), 100.0);
        assert!(!scroll.step(start + ms(1100)));
    }

    #[test]
    fn test_manual_scroll_interrupts_animation() {
        let start = Instant::now();
        let mut scroll = SmoothScroll::new(1.0);
        scroll.set_limit(200.0);
        scroll.scroll_to(100.0, start, ms(1000), Easing::Linear);
        scroll.step(start + ms(500));

        scroll.scroll_by(3.0);
        assert!((scroll.target() - 53.0).abs() < 1e-9);
        scroll.step(start + ms(600));
        assert!((scroll.position() - 53.0).abs() < 1e-9);
    }
}
