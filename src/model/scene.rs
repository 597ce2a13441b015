//! Scroll-derived scene state
//!
//! Everything that is a function of the scroll position lives here and is
//! recomputed at most once per frame: navbar contrast, the watermark label,
//! reveal latches and parallax offsets. Time-based entrance animations read
//! from the latches at draw time.

use crate::model::contrast::{Background, ContrastSwitch};
use crate::model::page::{Block, BlockKind, PageLayout};
use crate::model::parallax::{ParallaxFrame, ParallaxSet};
use crate::model::site::SectionId;
use crate::model::watermark::{watermark_label, Watermark};
use crate::motion::{Animation, Easing, InViewLatch, RevealFrame, Tween};
use std::time::{Duration, Instant};
use tracing::debug;

/// Fraction of the viewport an element must clear before it reveals
const REVEAL_MARGIN: f64 = 0.15;

/// Slide-in played on a section reached through a hero button
const SECTION_SLIDE: Duration = Duration::from_millis(1000);
const SECTION_SLIDE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug)]
pub struct Scene {
    layout: PageLayout,
    parallax: ParallaxSet,
    frames: Vec<ParallaxFrame>,
    latches: Vec<InViewLatch>,
    contrast: ContrastSwitch,
    watermark: Watermark,
    /// Viewport row sampled for the navbar contrast
    sample_row: f64,
    scroll_y: f64,
    slide_in: Option<(SectionId, Animation)>,
}

impl Scene {
    pub fn new(
        layout: PageLayout,
        parallax: ParallaxSet,
        contrast: ContrastSwitch,
        sample_row: f64,
    ) -> Self {
        let latches = latches_for(&layout);
        let frames = vec![ParallaxFrame::STILL; layout.blocks().len()];
        Self {
            layout,
            parallax,
            frames,
            latches,
            contrast,
            watermark: Watermark::new(),
            sample_row,
            scroll_y: 0.0,
            slide_in: None,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Swap in a layout for a new terminal size. Reveal state survives as
    /// long as the block list has the same shape.
    pub fn relayout(&mut self, layout: PageLayout) {
        if layout.blocks().len() != self.latches.len() {
            self.latches = latches_for(&layout);
        }
        self.frames = vec![ParallaxFrame::STILL; layout.blocks().len()];
        self.layout = layout;
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Re-derive every scroll-linked value for `scroll_y`
    pub fn recompute(&mut self, scroll_y: f64, now: Instant) {
        self.scroll_y = scroll_y;
        let viewport = self.layout.viewport(scroll_y);

        self.contrast
            .sample(self.layout.regions(), scroll_y + self.sample_row);

        let label = watermark_label(
            self.layout.watermark_anchors(),
            scroll_y,
            self.layout.viewport_height(),
        );
        if self.watermark.set(label, now) {
            debug!(?label, "watermark changed");
        }

        for ((block, latch), frame) in self
            .layout
            .blocks()
            .iter()
            .zip(self.latches.iter_mut())
            .zip(self.frames.iter_mut())
        {
            latch.observe(Some(block.bounds), viewport, now);
            *frame = self.parallax.frame(block, viewport);
        }
    }

    pub fn background(&self) -> Background {
        self.contrast.current()
    }

    /// Dark/light classification used to paint a section
    pub fn section_background(&self, section: SectionId) -> Background {
        self.contrast.classify(section)
    }

    pub fn watermark(&self) -> &Watermark {
        &self.watermark
    }

    pub fn parallax(&self, index: usize) -> ParallaxFrame {
        self.frames
            .get(index)
            .copied()
            .unwrap_or(ParallaxFrame::STILL)
    }

    pub fn reveal(&self, index: usize, now: Instant) -> RevealFrame {
        self.latches
            .get(index)
            .map(|latch| latch.frame(now))
            .unwrap_or(RevealFrame::SETTLED)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.latches
            .get(index)
            .map(InViewLatch::is_visible)
            .unwrap_or(false)
    }

    /// Slide `section` in from the left
    pub fn slide_in(&mut self, section: SectionId, now: Instant) {
        let tween = Tween::new(-1.0, 0.0, SECTION_SLIDE)
            .with_delay(SECTION_SLIDE_DELAY)
            .with_easing(Easing::Power3Out);
        self.slide_in = Some((section, Animation::start(tween, now)));
    }

    /// Horizontal offset of `section` as a fraction of the width
    pub fn section_dx(&self, section: SectionId, now: Instant) -> f64 {
        match &self.slide_in {
            Some((sliding, animation)) if *sliding == section => animation.value(now),
            _ => 0.0,
        }
    }

    /// Blocks with their index, for drawing
    pub fn blocks(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.layout.blocks().iter().enumerate()
    }
}

fn latches_for(layout: &PageLayout) -> Vec<InViewLatch> {
    let margin = layout.viewport_height() * REVEAL_MARGIN;
    layout
        .blocks()
        .iter()
        .map(|block| {
            let once = matches!(block.kind, BlockKind::Card { .. } | BlockKind::Contact);
            InViewLatch::new(block.reveal, margin, once)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contrast::Background;

    fn scene() -> Scene {
        let layout = PageLayout::compute(100, 40, 2026);
        let contrast = ContrastSwitch::new(
            ["section-hero", "section-footer", "section-founder"],
            Background::Dark,
        );
        Scene::new(layout, ParallaxSet::new(16.0).unwrap(), contrast, 1.0)
    }

    #[test]
    fn test_contrast_follows_scroll() {
        let now = Instant::now();
        let mut scene = scene();
        scene.recompute(0.0, now);
        assert_eq!(scene.background(), Background::Dark);

        let who = scene.layout().section_bounds(SectionId::WhoWeAre).unwrap();
        scene.recompute(who.top, now);
        assert_eq!(scene.background(), Background::Light);

        let founder = scene.layout().section_bounds(SectionId::Founder).unwrap();
        scene.recompute(founder.top, now);
        assert_eq!(scene.background(), Background::Dark);
    }

    #[test]
    fn test_watermark_tracks_sections() {
        let now = Instant::now();
        let mut scene = scene();
        scene.recompute(0.0, now);
        assert_eq!(scene.watermark().active(), None);

        let who = scene.layout().section_bounds(SectionId::WhoWeAre).unwrap();
        scene.recompute(who.top, now);
        assert_eq!(scene.watermark().active(), Some("who we are"));

        let what = scene.layout().section_bounds(SectionId::WhatWeDo).unwrap();
        scene.recompute(what.top, now);
        assert_eq!(scene.watermark().active(), Some("what we do"));
    }

    #[test]
    fn test_blocks_reveal_when_scrolled_into_view() {
        let now = Instant::now();
        let mut scene = scene();
        let last = scene.layout().blocks().len() - 1;

        scene.recompute(0.0, now);
        assert!(!scene.is_revealed(last));

        let limit = scene.layout().scroll_limit();
        scene.recompute(limit, now);
        assert!(scene.is_revealed(last));
        let settled = scene.reveal(last, now + Duration::from_secs(2));
        assert_eq!(settled.opacity, 1.0);
    }

    #[test]
    fn test_relayout_keeps_reveal_state() {
        let now = Instant::now();
        let mut scene = scene();
        scene.recompute(0.0, now);
        assert!(scene.is_revealed(0));

        scene.relayout(PageLayout::compute(80, 30, 2026));
        assert!(scene.is_revealed(0));
    }

    #[test]
    fn test_slide_in_only_moves_target_section() {
        let now = Instant::now();
        let mut scene = scene();
        scene.slide_in(SectionId::WhatWeDo, now);

        assert_eq!(scene.section_dx(SectionId::WhatWeDo, now), -1.0);
        assert_eq!(scene.section_dx(SectionId::BrandExperience, now), 0.0);
        assert_eq!(
            scene.section_dx(SectionId::WhatWeDo, now + Duration::from_secs(2)),
            0.0
        );
    }
}
