//! Scroll-linked parallax
//!
//! Each parallax block maps its own scroll progress through fixed
//! breakpoint tables. The tables are built once; sampling is pure.
//!
//! Pinned blocks also get a stacking offset: while the viewport scrolls
//! through a block's held range the block is pushed down by exactly the
//! distance scrolled, so it stays at its pin row.

use crate::model::page::{Block, BlockKind, Pin};
use crate::motion::scroll::Intersection;
use crate::motion::{
    scroll_progress, ElementBounds, KeyframeError, Keyframes, Length, ScrollRange, Viewport,
};

/// Parallax offsets of one block, resolved to cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    /// Scroll progress the frame was sampled at
    pub progress: f64,
    /// Image content shift in rows, positive is down
    pub image_dy: f64,
    pub image_scale: f64,
    /// Text column shift in rows
    pub text_dy: f64,
    /// Whole-block shift in rows holding a pinned block in place
    pub stack_dy: f64,
}

impl ParallaxFrame {
    pub const STILL: ParallaxFrame = ParallaxFrame {
        progress: 0.0,
        image_dy: 0.0,
        image_scale: 1.0,
        text_dy: 0.0,
        stack_dy: 0.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
struct Track {
    image_y: Keyframes,
    image_scale: Keyframes,
    text_y: Keyframes,
}

impl Track {
    fn sample(&self, progress: f64, block: &Block, px_per_row: f64) -> ParallaxFrame {
        ParallaxFrame {
            progress,
            image_dy: self
                .image_y
                .sample_cells(progress, block.image_rows as f64, px_per_row),
            image_scale: self.image_scale.sample(progress).value,
            text_dy: self
                .text_y
                .sample_cells(progress, block.bounds.height, px_per_row),
            stack_dy: 0.0,
        }
    }
}

/// Breakpoint tables for every kind of parallax block
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxSet {
    story: Track,
    founder: Track,
    card: Track,
    /// Held progress to share of the held range
    stack: Keyframes,
    px_per_row: f64,
}

impl ParallaxSet {
    pub fn new(px_per_row: f64) -> Result<Self, KeyframeError> {
        let story = Track {
            image_y: Keyframes::parse(&[0.0, 1.0], &["-10%", "10%"])?,
            image_scale: Keyframes::constant(Length::scalar(1.0)),
            text_y: Keyframes::parse(&[0.0, 1.0], &["5%", "-5%"])?,
        };
        let founder = Track {
            image_y: Keyframes::constant(Length::percent(0.0)),
            image_scale: Keyframes::parse(&[0.0, 0.5, 1.0], &["1.1", "1", "1"])?,
            text_y: Keyframes::parse(&[0.0, 1.0], &["50px", "-50px"])?,
        };
        let card = Track {
            image_y: Keyframes::parse(&[0.0, 1.0], &["-10%", "10%"])?,
            image_scale: Keyframes::constant(Length::scalar(1.15)),
            text_y: Keyframes::constant(Length::px(0.0)),
        };
        Ok(Self {
            story,
            founder,
            card,
            stack: Keyframes::parse(&[0.0, 1.0], &["0%", "100%"])?,
            px_per_row,
        })
    }

    fn track(&self, kind: BlockKind) -> Option<&Track> {
        match kind {
            BlockKind::Story { .. } => Some(&self.story),
            BlockKind::Founder => Some(&self.founder),
            BlockKind::Card { image: true } => Some(&self.card),
            _ => None,
        }
    }

    /// Offsets for `block` at this viewport; blocks without a track stay still
    pub fn frame(&self, block: &Block, viewport: Viewport) -> ParallaxFrame {
        let mut frame = match self.track(block.kind) {
            Some(track) => {
                let progress = scroll_progress(Some(block.bounds), viewport, ScrollRange::ACROSS);
                track.sample(progress, block, self.px_per_row)
            }
            None => ParallaxFrame::STILL,
        };
        if let Some(pin) = block.pin {
            frame.stack_dy = self.stack_dy(block.bounds.top, pin, viewport);
        }
        frame
    }

    /// Held range: from the block's top reaching its pin row until it has
    /// scrolled `travel` rows further
    fn stack_dy(&self, top: f64, pin: Pin, viewport: Viewport) -> f64 {
        let held = ElementBounds::new(top, pin.travel);
        let range = ScrollRange::new(
            Intersection::new(0.0, pin.at),
            Intersection::new(1.0, pin.at),
        );
        let progress = scroll_progress(Some(held), viewport, range);
        self.stack.sample_cells(progress, pin.travel, self.px_per_row)
    }
}
