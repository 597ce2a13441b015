//! Hero carousel state machine
//!
//! Cycles through a fixed list of slides on an interval, with manual
//! jump-to-slide. Each index change bumps an animation key; timers and
//! progress indicators carry the key they were created for, and anything
//! carrying an old key is ignored.

use crate::motion::easing::{Easing, ARCHITECTURAL, EXIT};
use crate::motion::timer::TimerId;
use crate::motion::{Timers, Tween};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Caption line entrance timing
const ENTER_DELAY: Duration = Duration::from_millis(200);
const ENTER_STAGGER: Duration = Duration::from_millis(150);
const ENTER_DURATION: Duration = Duration::from_millis(1100);

/// Caption line exit timing (stagger runs last line first)
const EXIT_STAGGER: Duration = Duration::from_millis(100);
const EXIT_DURATION: Duration = Duration::from_millis(600);

/// Background crossfade
const BG_ENTER: Duration = Duration::from_millis(1200);
const BG_EXIT: Duration = Duration::from_millis(800);
const BG_START_SCALE: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarouselTimer {
    Advance { key: u64 },
}

/// Why the slide changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideChange {
    Interval,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlideTransition {
    from: Option<usize>,
    to: usize,
    started_at: Instant,
}

/// One caption line at one moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFrame {
    /// Vertical offset in line heights; positive is below the resting spot
    pub offset: f64,
    pub opacity: f64,
}

/// Which caption is on screen and how each of its lines is placed
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionFrame {
    pub slide: usize,
    pub lines: Vec<LineFrame>,
}

/// Background media crossfade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundFrame {
    pub slide: usize,
    pub opacity: f64,
    pub scale: f64,
    /// Outgoing slide and its opacity while it fades away
    pub previous: Option<(usize, f64)>,
}

/// Carousel over `len` slides
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    key: u64,
    interval: Duration,
    slide_started: Option<Instant>,
    timers: Timers<CarouselTimer>,
    interval_timer: Option<TimerId>,
    transition: Option<SlideTransition>,
    /// Caption line counts per slide
    line_counts: Vec<usize>,
}

impl Carousel {
    pub fn new(line_counts: Vec<usize>, interval: Duration) -> Self {
        Self {
            len: line_counts.len(),
            index: 0,
            key: 0,
            interval,
            slide_started: None,
            timers: Timers::new(),
            interval_timer: None,
            transition: None,
            line_counts,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Animation key of the live slide
    pub fn key(&self) -> u64 {
        self.key
    }

    pub fn is_mounted(&self) -> bool {
        self.timers.is_mounted()
    }

    /// Start the interval and play the first slide's entrance
    pub fn mount(&mut self, now: Instant) {
        if self.slide_started.is_some() || !self.is_mounted() || self.is_empty() {
            return;
        }
        self.slide_started = Some(now);
        self.transition = Some(SlideTransition {
            from: None,
            to: self.index,
            started_at: now,
        });
        self.arm(now);
    }

    fn arm(&mut self, now: Instant) {
        if let Some(id) = self.interval_timer.take() {
            self.timers.cancel(id);
        }
        self.interval_timer = self
            .timers
            .every(now, self.interval, CarouselTimer::Advance { key: self.key });
    }

    /// Fire due interval timers. Returns the new index if the slide changed.
    pub fn advance(&mut self, now: Instant) -> Option<usize> {
        let mut changed = None;
        for event in self.timers.poll(now) {
            match event {
                CarouselTimer::Advance { key } if key == self.key => {
                    let next = (self.index + 1) % self.len;
                    if self.switch(next, now, SlideChange::Interval) {
                        changed = Some(next);
                    }
                }
                CarouselTimer::Advance { key } => {
                    debug!(stale = key, live = self.key, "ignoring stale carousel timer");
                }
            }
        }
        changed
    }

    /// Jump straight to `index`, restarting its progress and the interval
    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        self.switch(index, now, SlideChange::Manual)
    }

    pub fn next(&mut self, now: Instant) -> bool {
        if self.is_empty() {
            return false;
        }
        self.select((self.index + 1) % self.len, now)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        if self.is_empty() {
            return false;
        }
        self.select((self.index + self.len - 1) % self.len, now)
    }

    fn switch(&mut self, index: usize, now: Instant, reason: SlideChange) -> bool {
        if !self.is_mounted() || index >= self.len {
            return false;
        }
        let from = self.index;
        self.index = index;
        self.key += 1;
        self.slide_started = Some(now);
        self.transition = Some(SlideTransition {
            from: Some(from),
            to: index,
            started_at: now,
        });
        self.arm(now);
        info!(from, to = index, key = self.key, ?reason, "slide changed");
        true
    }

    /// Progress of the live slide's indicator in [0, 1]
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(started) = self.slide_started else {
            return 0.0;
        };
        if self.interval.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f64() / self.interval.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Progress for an indicator created under `key`; `None` once stale
    pub fn indicator_progress(&self, key: u64, now: Instant) -> Option<f64> {
        (key == self.key).then(|| self.progress(now))
    }

    fn exit_total(&self, slide: usize) -> Duration {
        let lines = self.line_counts.get(slide).copied().unwrap_or(0);
        EXIT_DURATION + EXIT_STAGGER * lines.saturating_sub(1) as u32
    }

    /// Caption placement at `now`. The outgoing caption finishes its exit
    /// before the incoming one starts.
    pub fn caption(&self, now: Instant) -> CaptionFrame {
        let Some(transition) = self.transition else {
            let lines = self.line_counts.get(self.index).copied().unwrap_or(0);
            return CaptionFrame {
                slide: self.index,
                lines: vec![LineFrame { offset: 0.0, opacity: 1.0 }; lines],
            };
        };
        let elapsed = now.saturating_duration_since(transition.started_at);

        if let Some(from) = transition.from {
            let exit_total = self.exit_total(from);
            if elapsed < exit_total {
                let count = self.line_counts.get(from).copied().unwrap_or(0);
                let lines = (0..count)
                    .map(|line| {
                        let order = (count - 1 - line) as u32;
                        let tween = Tween::new(0.0, 1.0, EXIT_DURATION)
                            .with_delay(EXIT_STAGGER * order)
                            .with_easing(EXIT);
                        let p = tween.value(elapsed);
                        LineFrame {
                            offset: -p,
                            opacity: 1.0 - p,
                        }
                    })
                    .collect();
                return CaptionFrame { slide: from, lines };
            }
        }

        let enter_elapsed = match transition.from {
            Some(from) => elapsed.saturating_sub(self.exit_total(from)),
            None => elapsed,
        };
        let count = self.line_counts.get(transition.to).copied().unwrap_or(0);
        let lines = (0..count)
            .map(|line| {
                let tween = Tween::new(0.0, 1.0, ENTER_DURATION)
                    .with_delay(ENTER_DELAY + ENTER_STAGGER * line as u32)
                    .with_easing(ARCHITECTURAL);
                let p = tween.value(enter_elapsed);
                LineFrame {
                    offset: 1.0 - p,
                    opacity: p,
                }
            })
            .collect();
        CaptionFrame {
            slide: transition.to,
            lines,
        }
    }

    /// Background crossfade at `now`
    pub fn background(&self, now: Instant) -> BackgroundFrame {
        let Some(transition) = self.transition else {
            return BackgroundFrame {
                slide: self.index,
                opacity: 1.0,
                scale: 1.0,
                previous: None,
            };
        };
        let elapsed = now.saturating_duration_since(transition.started_at);
        let enter = Tween::new(0.0, 1.0, BG_ENTER).with_easing(Easing::EaseOut);
        let p = enter.value(elapsed);

        let previous = transition.from.and_then(|from| {
            let exit = Tween::new(1.0, 0.0, BG_EXIT);
            (!exit.is_finished(elapsed)).then(|| (from, exit.value(elapsed)))
        });

        BackgroundFrame {
            slide: transition.to,
            opacity: p,
            scale: 1.0 + (BG_START_SCALE - 1.0) * (1.0 - p),
            previous,
        }
    }

    /// End of the lifecycle scope: pending timers are dropped and every
    /// later call leaves the state untouched
    pub fn teardown(&mut self) {
        debug!(pending = self.timers.pending(), "carousel unmounted");
        self.timers.unmount();
        self.interval_timer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mounted() -> (Carousel, Instant) {
        let start = Instant::now();
        let mut carousel = Carousel::new(vec![2, 2, 2, 2], ms(7000));
        carousel.mount(start);
        (carousel, start)
    }

    #[test]
    fn test_interval_advances_one_slide() {
        let (mut carousel, start) = mounted();
        assert_eq!(carousel.advance(start + ms(6999)), None);
        assert_eq!(carousel.advance(start + ms(7000)), Some(1));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_four_ticks_wrap_to_start() {
        let (mut carousel, start) = mounted();
        for tick in 1..=4u64 {
            carousel.advance(start + ms(7000 * tick));
        }
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.key(), 4);
    }

    #[test]
    fn test_manual_select_restarts_progress_and_interval() {
        let (mut carousel, start) = mounted();
        let now = start + ms(4000);
        assert!(carousel.select(2, now));
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.progress(now), 0.0);

        // Old interval would have fired at 7000
        assert_eq!(carousel.advance(start + ms(7000)), None);
        assert!((carousel.progress(start + ms(7500)) - 0.5).abs() < 1e-9);
        assert_eq!(carousel.advance(start + ms(11_000)), Some(3));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let (mut carousel, start) = mounted();
        assert!(!carousel.select(9, start));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.key(), 0);
    }

    #[test]
    fn test_stale_indicator_is_ignored() {
        let (mut carousel, start) = mounted();
        let old_key = carousel.key();
        carousel.select(1, start + ms(3000));

        assert_eq!(carousel.indicator_progress(old_key, start + ms(5000)), None);
        let live = carousel.indicator_progress(carousel.key(), start + ms(6500));
        assert!((live.unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_fills_over_interval() {
        let (carousel, start) = mounted();
        assert_eq!(carousel.progress(start), 0.0);
        assert!((carousel.progress(start + ms(3500)) - 0.5).abs() < 1e-9);
        assert_eq!(carousel.progress(start + ms(9000)), 1.0);
    }

    #[test]
    fn test_previous_and_next_wrap() {
        let (mut carousel, start) = mounted();
        carousel.previous(start);
        assert_eq!(carousel.index(), 3);
        carousel.next(start);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_teardown_before_timer_fires() {
        let (mut carousel, start) = mounted();
        carousel.teardown();

        assert_eq!(carousel.advance(start + ms(60_000)), None);
        assert!(!carousel.select(2, start + ms(100)));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.key(), 0);
    }

    #[test]
    fn test_one_interval_timer_at_a_time() {
        let (mut carousel, start) = mounted();
        assert_eq!(carousel.timers.pending(), 1);

        carousel.select(2, start + ms(1000));
        carousel.advance(start + ms(8000));
        carousel.advance(start + ms(15_000));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.timers.pending(), 1);

        carousel.teardown();
        assert_eq!(carousel.timers.pending(), 0);
    }

    #[test]
    fn test_late_poll_advances_once_and_keeps_cadence() {
        let (mut carousel, start) = mounted();
        // Three periods missed; the repeats after the first carry a stale key
        assert_eq!(carousel.advance(start + ms(21_500)), Some(1));
        assert_eq!(carousel.key(), 1);
        assert_eq!(carousel.advance(start + ms(28_499)), None);
        assert_eq!(carousel.advance(start + ms(28_500)), Some(2));
    }

    #[test]
    fn test_caption_exits_before_entering() {
        let (mut carousel, start) = mounted();
        let switch = start + ms(8000);
        carousel.select(1, switch);

        // Exit of two lines lasts 600 + 100 ms
        let exiting = carousel.caption(switch + ms(50));
        assert_eq!(exiting.slide, 0);
        // Last line leaves first
        assert!(exiting.lines[1].opacity < exiting.lines[0].opacity);

        let entering = carousel.caption(switch + ms(700));
        assert_eq!(entering.slide, 1);
        assert!(entering.lines.iter().all(|l| l.offset == 1.0 && l.opacity == 0.0));

        let settled = carousel.caption(switch + ms(3000));
        assert!(settled.lines.iter().all(|l| l.offset == 0.0 && l.opacity == 1.0));
    }

    #[test]
    fn test_caption_lines_are_staggered_on_entry() {
        let (carousel, start) = mounted();
        let frame = carousel.caption(start + ms(600));
        assert!(frame.lines[0].opacity > frame.lines[1].opacity);
    }

    #[test]
    fn test_background_crossfades() {
        let (mut carousel, start) = mounted();
        carousel.select(3, start + ms(1000));

        let mid = carousel.background(start + ms(1400));
        assert_eq!(mid.slide, 3);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.scale > 1.0 && mid.scale < 1.1);
        let (previous, fading) = mid.previous.unwrap();
        assert_eq!(previous, 0);
        assert!(fading < 1.0);

        let done = carousel.background(start + ms(3000));
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.scale, 1.0);
        assert!(done.previous.is_none());
    }
}
