//! Reveal-on-view animations
//!
//! A latch watches one element; when it scrolls into view the element plays
//! its entrance. `once` latches stay revealed, others reverse when the
//! element leaves again.

use super::easing::{Easing, SOFT_LANDING};
use super::scroll::{ElementBounds, Viewport};
use super::tween::Tween;
use std::time::{Duration, Instant};

/// Entrance style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    FadeUp,
    FadeIn,
    SlideLeft,
    SlideRight,
    ScaleIn,
}

/// Visual parameters at one moment of an entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    /// Horizontal offset in px
    pub dx: f64,
    /// Vertical offset in px
    pub dy: f64,
    pub scale: f64,
}

impl RevealFrame {
    pub const SETTLED: RevealFrame = RevealFrame {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };
}

impl Reveal {
    pub fn duration(self) -> Duration {
        match self {
            Reveal::FadeIn | Reveal::ScaleIn => Duration::from_millis(800),
            _ => Duration::from_millis(1000),
        }
    }

    pub fn easing(self) -> Easing {
        SOFT_LANDING
    }

    /// Parameters at eased progress `p` (0 hidden, 1 settled)
    pub fn frame(self, p: f64) -> RevealFrame {
        let p = p.clamp(0.0, 1.0);
        let hidden = 1.0 - p;
        match self {
            Reveal::FadeUp => RevealFrame {
                opacity: p,
                dy: 60.0 * hidden,
                ..RevealFrame::SETTLED
            },
            Reveal::FadeIn => RevealFrame {
                opacity: p,
                ..RevealFrame::SETTLED
            },
            Reveal::SlideLeft => RevealFrame {
                opacity: p,
                dx: -60.0 * hidden,
                ..RevealFrame::SETTLED
            },
            Reveal::SlideRight => RevealFrame {
                opacity: p,
                dx: 60.0 * hidden,
                ..RevealFrame::SETTLED
            },
            Reveal::ScaleIn => RevealFrame {
                opacity: p,
                scale: 0.9 + 0.1 * p,
                ..RevealFrame::SETTLED
            },
        }
    }
}

/// Tracks whether one element has entered the viewport
#[derive(Debug, Clone)]
pub struct InViewLatch {
    reveal: Reveal,
    /// Rows the element must be inside the viewport before it counts
    margin: f64,
    once: bool,
    visible: bool,
    changed_at: Option<Instant>,
    /// Progress when the last change happened, so reversals start smoothly
    progress_at_change: f64,
}

impl InViewLatch {
    pub fn new(reveal: Reveal, margin: f64, once: bool) -> Self {
        Self {
            reveal,
            margin,
            once,
            visible: false,
            changed_at: None,
            progress_at_change: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Re-evaluate against the current viewport. Returns whether the latch flipped.
    pub fn observe(&mut self, bounds: Option<ElementBounds>, viewport: Viewport, now: Instant) -> bool {
        let Some(bounds) = bounds else {
            return false;
        };
        let in_view = viewport.intersects(bounds, self.margin);

        let flip = match (self.visible, in_view) {
            (false, true) => true,
            (true, false) => !self.once,
            _ => false,
        };
        if flip {
            self.progress_at_change = self.progress(now);
            self.visible = in_view;
            self.changed_at = Some(now);
        }
        flip
    }

    /// Linear progress of the entrance at `now`
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(changed_at) = self.changed_at else {
            return 0.0;
        };
        let target = if self.visible { 1.0 } else { 0.0 };
        let tween = Tween::new(self.progress_at_change, target, self.reveal.duration());
        tween.value(now.saturating_duration_since(changed_at))
    }

    pub fn frame(&self, now: Instant) -> RevealFrame {
        let eased = self.reveal.easing().apply(self.progress(now));
        self.reveal.frame(eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_once_latch_stays_revealed() {
        let start = Instant::now();
        let bounds = Some(ElementBounds::new(50.0, 10.0));
        let mut latch = InViewLatch::new(Reveal::FadeUp, 2.0, true);

        assert!(!latch.observe(bounds, Viewport::new(0.0, 40.0), start));
        assert!(latch.observe(bounds, Viewport::new(20.0, 40.0), start));
        assert!(!latch.observe(bounds, Viewport::new(0.0, 40.0), start + ms(100)));
        assert!(latch.is_visible());
        assert_eq!(latch.frame(start + ms(2000)), RevealFrame::SETTLED);
    }

    #[test]
    fn test_reversible_latch_hides_again() {
        let start = Instant::now();
        let bounds = Some(ElementBounds::new(50.0, 10.0));
        let mut latch = InViewLatch::new(Reveal::FadeIn, 0.0, false);

        latch.observe(bounds, Viewport::new(30.0, 40.0), start);
        assert!(latch.observe(bounds, Viewport::new(0.0, 40.0), start + ms(2000)));
        assert!(!latch.is_visible());
        assert_eq!(latch.progress(start + ms(5000)), 0.0);
    }

    #[test]
    fn test_reversal_starts_from_current_progress() {
        let start = Instant::now();
        let bounds = Some(ElementBounds::new(50.0, 10.0));
        let mut latch = InViewLatch::new(Reveal::FadeIn, 0.0, false);

        latch.observe(bounds, Viewport::new(30.0, 40.0), start);
        latch.observe(bounds, Viewport::new(0.0, 40.0), start + ms(400));
        assert!((latch.progress(start + ms(400)) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_bounds_never_reveal() {
        let mut latch = InViewLatch::new(Reveal::ScaleIn, 0.0, true);
        assert!(!latch.observe(None, Viewport::new(0.0, 40.0), Instant::now()));
        assert_eq!(latch.frame(Instant::now()).opacity, 0.0);
    }

    #[test]
    fn test_frames_start_hidden() {
        assert_eq!(Reveal::FadeUp.frame(0.0).dy, 60.0);
        assert_eq!(Reveal::SlideLeft.frame(0.0).dx, -60.0);
        assert_eq!(Reveal::ScaleIn.frame(0.0).scale, 0.9);
        assert_eq!(Reveal::FadeIn.frame(1.0), RevealFrame::SETTLED);
    }
}
