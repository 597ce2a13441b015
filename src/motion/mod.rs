//! Motion primitives
//!
//! Pure, clock-injected building blocks for the site's choreography:
//! easing curves, tweens, breakpoint mappings, scroll progress, smooth
//! scrolling, reveal latches and lifecycle-scoped timers. Nothing in here
//! touches the terminal.

pub mod easing;
pub mod keyframes;
pub mod reveal;
pub mod scroll;
pub mod smooth;
pub mod timer;
pub mod tween;

pub use easing::Easing;
pub use keyframes::{KeyframeError, Keyframes, Length};
pub use reveal::{InViewLatch, Reveal, RevealFrame};
pub use scroll::{scroll_progress, ElementBounds, FrameCoalescer, ScrollRange, Viewport};
pub use smooth::SmoothScroll;
pub use timer::Timers;
pub use tween::{Animation, KeyframeTween, Tween};
