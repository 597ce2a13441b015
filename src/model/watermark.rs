//! Watermark heading
//!
//! A fixed oversize heading naming the section currently being read. The
//! label is a pure function of scroll position; the watermark keeps the
//! previous label around so a change can animate out before the new one
//! animates in.

use crate::motion::easing::SOFT_LANDING;
use crate::motion::Tween;
use std::time::{Duration, Instant};

const TRANSITION: Duration = Duration::from_millis(800);

/// Vertical travel of an entering/exiting label, in px
const TRAVEL_PX: f64 = 50.0;

/// Section tops the watermark keys off
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkAnchors {
    pub who_we_are: f64,
    pub what_we_do: f64,
    pub footer: f64,
}

/// Label for `scroll_y`, or `None` when no watermark belongs there.
///
/// Missing anchors (page not laid out) show nothing.
pub fn watermark_label(
    anchors: Option<WatermarkAnchors>,
    scroll_y: f64,
    viewport_height: f64,
) -> Option<&'static str> {
    let anchors = anchors?;
    let start_who = anchors.who_we_are - viewport_height * 0.1;
    let start_what = anchors.what_we_do - viewport_height * 0.1;
    let start_footer = anchors.footer - viewport_height * 0.8;

    if scroll_y >= start_who && scroll_y < start_what {
        Some("who we are")
    } else if scroll_y >= start_what && scroll_y < start_footer {
        Some("what we do")
    } else {
        None
    }
}

/// A label with its vertical offset (px) and opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkFrame {
    pub label: &'static str,
    pub dy: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Watermark {
    active: Option<&'static str>,
    outgoing: Option<&'static str>,
    changed_at: Option<Instant>,
}

impl Watermark {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    /// Set the label for this frame. Returns whether it changed.
    pub fn set(&mut self, label: Option<&'static str>, now: Instant) -> bool {
        if label == self.active {
            return false;
        }
        self.outgoing = self.active;
        self.active = label;
        self.changed_at = Some(now);
        true
    }

    /// What to draw at `now`. The outgoing label exits fully before the
    /// incoming one enters.
    pub fn frame(&self, now: Instant) -> Option<WatermarkFrame> {
        let Some(changed_at) = self.changed_at else {
            return self.active.map(|label| WatermarkFrame {
                label,
                dy: 0.0,
                opacity: 1.0,
            });
        };
        let elapsed = now.saturating_duration_since(changed_at);
        let tween = Tween::new(0.0, 1.0, TRANSITION).with_easing(SOFT_LANDING);

        if let Some(outgoing) = self.outgoing {
            if elapsed < TRANSITION {
                let p = tween.value(elapsed);
                return Some(WatermarkFrame {
                    label: outgoing,
                    dy: -TRAVEL_PX * p,
                    opacity: 1.0 - p,
                });
            }
        }

        let entering = if self.outgoing.is_some() {
            elapsed.saturating_sub(TRANSITION)
        } else {
            elapsed
        };
        self.active.map(|label| {
            let p = tween.value(entering);
            WatermarkFrame {
                label,
                dy: TRAVEL_PX * (1.0 - p),
                opacity: p,
            }
        })
    }
}
