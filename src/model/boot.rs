//! Boot sequence
//!
//! Gates the navigation bar and main content behind the splash screen.
//! The loading context is the single owner of the three visibility flags;
//! it only accepts transitions in order, so content can never show before
//! the navigation bar and nothing ever hides again.

use crate::motion::Timers;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

/// Phase of the page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootPhase {
    /// Splash screen on top of everything
    Splash,
    /// Splash fading out, navigation not yet shown
    SplashExiting,
    NavRevealed,
    ContentRevealed,
}

impl fmt::Display for BootPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootPhase::Splash => write!(f, "Splash"),
            BootPhase::SplashExiting => write!(f, "SplashExiting"),
            BootPhase::NavRevealed => write!(f, "NavRevealed"),
            BootPhase::ContentRevealed => write!(f, "ContentRevealed"),
        }
    }
}

/// Snapshot of the visibility flags handed to views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingState {
    pub splash_visible: bool,
    pub nav_visible: bool,
    pub content_visible: bool,
}

/// Shared boot state read by the splash, navbar and content views
#[derive(Debug, Clone)]
pub struct LoadingContext {
    phase: BootPhase,
    splash_hidden_at: Option<Instant>,
    nav_shown_at: Option<Instant>,
    content_shown_at: Option<Instant>,
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            phase: BootPhase::Splash,
            splash_hidden_at: None,
            nav_shown_at: None,
            content_shown_at: None,
        }
    }

    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    pub fn state(&self) -> LoadingState {
        LoadingState {
            splash_visible: self.phase == BootPhase::Splash,
            nav_visible: self.phase >= BootPhase::NavRevealed,
            content_visible: self.phase >= BootPhase::ContentRevealed,
        }
    }

    pub fn splash_hidden_at(&self) -> Option<Instant> {
        self.splash_hidden_at
    }

    pub fn nav_shown_at(&self) -> Option<Instant> {
        self.nav_shown_at
    }

    pub fn content_shown_at(&self) -> Option<Instant> {
        self.content_shown_at
    }

    /// Splash -> SplashExiting
    pub fn dismiss_splash(&mut self, now: Instant) -> bool {
        self.advance(BootPhase::Splash, BootPhase::SplashExiting, now)
    }

    /// SplashExiting -> NavRevealed
    pub fn reveal_nav(&mut self, now: Instant) -> bool {
        self.advance(BootPhase::SplashExiting, BootPhase::NavRevealed, now)
    }

    /// NavRevealed -> ContentRevealed
    pub fn reveal_content(&mut self, now: Instant) -> bool {
        self.advance(BootPhase::NavRevealed, BootPhase::ContentRevealed, now)
    }

    fn advance(&mut self, from: BootPhase, to: BootPhase, now: Instant) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        match to {
            BootPhase::SplashExiting => self.splash_hidden_at = Some(now),
            BootPhase::NavRevealed => self.nav_shown_at = Some(now),
            BootPhase::ContentRevealed => self.content_shown_at = Some(now),
            BootPhase::Splash => {}
        }
        true
    }
}

/// Fixed delays between the boot transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTimings {
    pub splash: Duration,
    /// After the splash starts exiting
    pub nav_delay: Duration,
    /// After the navigation bar is revealed
    pub content_delay: Duration,
}

impl Default for BootTimings {
    fn default() -> Self {
        Self {
            splash: Duration::from_millis(3000),
            nav_delay: Duration::from_millis(500),
            content_delay: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootStep {
    DismissSplash,
    RevealNav,
    RevealContent,
}

/// Timer-driven state machine that walks the loading context forward
#[derive(Debug)]
pub struct BootSequence {
    timings: BootTimings,
    timers: Timers<BootStep>,
    mounted_at: Option<Instant>,
}

impl BootSequence {
    pub fn new(timings: BootTimings) -> Self {
        Self {
            timings,
            timers: Timers::new(),
            mounted_at: None,
        }
    }

    /// Start the clocks. Mounting twice is ignored.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted_at.is_some() || !self.timers.is_mounted() {
            return;
        }
        self.mounted_at = Some(now);

        let nav_at = self.timings.splash + self.timings.nav_delay;
        let content_at = nav_at + self.timings.content_delay;
        self.timers.once(now, self.timings.splash, BootStep::DismissSplash);
        self.timers.once(now, nav_at, BootStep::RevealNav);
        self.timers.once(now, content_at, BootStep::RevealContent);
    }

    /// Apply every transition due at `now`; returns the phases entered
    pub fn advance(&mut self, ctx: &mut LoadingContext, now: Instant) -> Vec<BootPhase> {
        let mut entered = Vec::new();
        for step in self.timers.poll(now) {
            let moved = match step {
                BootStep::DismissSplash => ctx.dismiss_splash(now),
                BootStep::RevealNav => ctx.reveal_nav(now),
                BootStep::RevealContent => ctx.reveal_content(now),
            };
            if moved {
                info!(phase = %ctx.phase(), "boot phase changed");
                entered.push(ctx.phase());
            }
        }
        entered
    }

    /// Whether every transition has fired
    pub fn is_complete(&self, ctx: &LoadingContext) -> bool {
        ctx.phase() == BootPhase::ContentRevealed
    }

    /// Cancel pending transitions; later advances do nothing
    pub fn teardown(&mut self) {
        self.timers.unmount();
    }
}
