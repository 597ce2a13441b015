//! Page layout
//!
//! Lays the whole brochure out as one tall document measured in terminal
//! rows. Every block gets its bounds and pre-wrapped text, and every tagged
//! section gets a region for the contrast sampler.

use crate::model::contrast::TaggedRegion;
use crate::model::site::{
    Card, SectionId, BRAND_EXPERIENCE, BRAND_TITLE, COMPANY, CONTACT, FOUNDER, STORIES,
    WHAT_WE_DO, WHAT_WE_DO_TITLE,
};
use crate::model::watermark::WatermarkAnchors;
use crate::motion::{ElementBounds, Reveal, Viewport};
use unicode_width::UnicodeWidthStr;

/// Blank rows above and below a block's content
pub const PAD: usize = 2;

/// Height of the image band on a "what we do" card
const CARD_IMAGE_ROWS: usize = 8;

/// Narrowest text column we wrap to
const MIN_COLUMN: usize = 16;

/// Viewport fractions the stacked Brand + Experience cards hold at
const STACK_PINS: [f64; 3] = [0.17, 0.20, 0.25];

/// How a line of block text is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Eyebrow,
    Title,
    Heading,
    Body,
    Highlight,
    Name,
    Link,
    Fine,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub style: TextStyle,
}

impl TextLine {
    fn blank() -> Self {
        Self {
            text: String::new(),
            style: TextStyle::Blank,
        }
    }
}

/// What a block draws besides its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Hero,
    /// Centered section heading
    Title,
    /// Image beside text
    Story { image_left: bool },
    Founder,
    /// Service card; `image` when it carries a picture band
    Card { image: bool },
    Contact,
}

/// Sticky placement inside a stack of cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    /// Viewport fraction from the top the block's top edge holds at
    pub at: f64,
    /// Rows of scrolling the block stays held for; 0 for the last card
    pub travel: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub section: SectionId,
    pub bounds: ElementBounds,
    /// Rows of image inside the block, 0 when there is none
    pub image_rows: usize,
    pub text: Vec<TextLine>,
    pub reveal: Reveal,
    pub pin: Option<Pin>,
}

/// Document geometry for one viewport size
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    viewport_height: f64,
    blocks: Vec<Block>,
    regions: Vec<TaggedRegion>,
    height: f64,
}

impl PageLayout {
    /// Lay the page out for a `width` x `viewport_height` terminal
    pub fn compute(width: u16, viewport_height: u16, year: i32) -> Self {
        let mut builder = Builder::new(width, viewport_height);

        builder.section(SectionId::Hero, |b| {
            b.push(BlockKind::Hero, Vec::new(), b.viewport_height, 0, Reveal::FadeIn);
        });

        builder.section(SectionId::WhoWeAre, |b| {
            for story in &STORIES {
                let mut text = vec![line(story.eyebrow, TextStyle::Eyebrow), TextLine::blank()];
                text.extend(wrap_styled(story.heading, b.half_column(), TextStyle::Heading));
                text.push(TextLine::blank());
                text.extend(wrap_styled(story.body, b.half_column(), TextStyle::Body));

                let image_rows = b.image_rows().max(text.len());
                let height = image_rows + PAD * 2;
                let reveal = if story.image_left {
                    Reveal::SlideLeft
                } else {
                    Reveal::SlideRight
                };
                b.push(
                    BlockKind::Story {
                        image_left: story.image_left,
                    },
                    text,
                    height,
                    image_rows,
                    reveal,
                );
            }

            b.section(SectionId::Founder, |b| {
                let column = b.half_column();
                let mut text = vec![line(FOUNDER.eyebrow, TextStyle::Eyebrow), TextLine::blank()];
                text.extend(wrap_styled(FOUNDER.heading, column, TextStyle::Heading));
                text.push(TextLine::blank());
                for paragraph in FOUNDER.paragraphs {
                    text.extend(wrap_styled(paragraph, column, TextStyle::Body));
                    text.push(TextLine::blank());
                }
                text.push(line(FOUNDER.name, TextStyle::Name));
                text.push(line(FOUNDER.role, TextStyle::Eyebrow));

                let image_rows = b.image_rows().max(text.len());
                b.push(
                    BlockKind::Founder,
                    text,
                    image_rows + PAD * 2,
                    image_rows,
                    Reveal::FadeUp,
                );
            });
        });

        builder.section(SectionId::WhatWeDo, |b| {
            b.title(WHAT_WE_DO_TITLE);
            for card in &WHAT_WE_DO {
                b.card(card, true);
            }
        });

        builder.section(SectionId::BrandExperience, |b| {
            b.title(BRAND_TITLE);
            let first = b.blocks.len();
            for card in &BRAND_EXPERIENCE {
                b.card(card, false);
            }
            b.stack(first, &STACK_PINS);
        });

        builder.section(SectionId::Footer, |b| {
            let column = b.full_column();
            let mut text = vec![line(CONTACT.eyebrow, TextStyle::Eyebrow), TextLine::blank()];
            text.extend(wrap_styled(CONTACT.heading, column, TextStyle::Heading));
            text.push(TextLine::blank());
            for paragraph in CONTACT.paragraphs {
                text.extend(wrap_styled(paragraph, column, TextStyle::Body));
                text.push(TextLine::blank());
            }
            text.push(line(CONTACT.email, TextStyle::Link));
            text.push(TextLine::blank());
            text.push(TextLine {
                text: format!("Copyright {}. {}.", year, COMPANY),
                style: TextStyle::Fine,
            });

            let height = (text.len() + PAD * 2).max((b.viewport_height as f64 * 0.6) as usize);
            b.push(BlockKind::Contact, text, height, 0, Reveal::FadeIn);
        });

        builder.finish()
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Tagged sections in document order
    pub fn regions(&self) -> &[TaggedRegion] {
        &self.regions
    }

    /// Total document height in rows
    #[cfg(test)]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Largest scroll position that still fills the viewport
    pub fn scroll_limit(&self) -> f64 {
        (self.height - self.viewport_height).max(0.0)
    }

    pub fn section_bounds(&self, id: SectionId) -> Option<ElementBounds> {
        self.regions
            .iter()
            .find(|region| region.id == id)
            .map(|region| region.bounds)
    }

    /// Scroll position that puts the section's top at the top of the viewport
    pub fn section_top(&self, id: SectionId) -> Option<f64> {
        self.section_bounds(id)
            .map(|bounds| bounds.top.min(self.scroll_limit()))
    }

    pub fn viewport(&self, scroll_y: f64) -> Viewport {
        Viewport::new(scroll_y, self.viewport_height)
    }

    pub fn watermark_anchors(&self) -> Option<WatermarkAnchors> {
        Some(WatermarkAnchors {
            who_we_are: self.section_bounds(SectionId::WhoWeAre)?.top,
            what_we_do: self.section_bounds(SectionId::WhatWeDo)?.top,
            footer: self.section_bounds(SectionId::Footer)?.top,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════════

struct Builder {
    width: u16,
    viewport_height: usize,
    cursor: usize,
    /// Sections opened but not yet closed, outermost first
    open: Vec<SectionId>,
    blocks: Vec<Block>,
    regions: Vec<TaggedRegion>,
}

impl Builder {
    fn new(width: u16, viewport_height: u16) -> Self {
        Self {
            width,
            viewport_height: viewport_height.max(1) as usize,
            cursor: 0,
            open: Vec::new(),
            blocks: Vec::new(),
            regions: Vec::new(),
        }
    }

    fn half_column(&self) -> usize {
        half_column(self.width)
    }

    fn full_column(&self) -> usize {
        full_column(self.width)
    }

    fn image_rows(&self) -> usize {
        (self.viewport_height * 9 / 20).clamp(8, 18)
    }

    /// Run `body` inside a tagged section spanning whatever it pushes
    fn section(&mut self, id: SectionId, body: impl FnOnce(&mut Self)) {
        let top = self.cursor;
        let slot = self.regions.len();
        self.regions.push(TaggedRegion {
            id,
            bounds: ElementBounds::new(top as f64, 0.0),
            depth: self.open.len(),
        });

        self.open.push(id);
        body(self);
        self.open.pop();

        self.regions[slot].bounds = ElementBounds::new(top as f64, (self.cursor - top) as f64);
    }

    fn push(
        &mut self,
        kind: BlockKind,
        text: Vec<TextLine>,
        height: usize,
        image_rows: usize,
        reveal: Reveal,
    ) {
        let section = self.open.last().copied().unwrap_or(SectionId::Hero);
        self.blocks.push(Block {
            kind,
            section,
            bounds: ElementBounds::new(self.cursor as f64, height as f64),
            image_rows,
            text,
            reveal,
            pin: None,
        });
        self.cursor += height;
    }

    /// Pin the blocks from `first` on so each one holds at its own fraction
    /// of the viewport until the bottom of the stack pushes it up
    fn stack(&mut self, first: usize, pins: &[f64]) {
        let bottom = self.cursor as f64;
        for (block, &at) in self.blocks[first..].iter_mut().zip(pins) {
            block.pin = Some(Pin {
                at,
                travel: bottom - block.bounds.bottom(),
            });
        }
    }

    fn title(&mut self, title: &str) {
        let text = wrap_styled(title, self.full_column(), TextStyle::Title);
        let height = text.len() + PAD * 2;
        self.push(BlockKind::Title, text, height, 0, Reveal::FadeUp);
    }

    fn card(&mut self, card: &Card, image: bool) {
        let column = self.full_column();
        let mut text = vec![line(card.title, TextStyle::Heading)];
        text.extend(wrap_styled(card.tagline, column, TextStyle::Eyebrow));
        text.push(TextLine::blank());
        for paragraph in card.body {
            text.extend(wrap_styled(paragraph, column, TextStyle::Body));
        }
        text.push(TextLine::blank());
        text.extend(wrap_styled(card.highlight, column, TextStyle::Highlight));

        let image_rows = if image { CARD_IMAGE_ROWS } else { 0 };
        let gap = if image { 1 } else { 0 };
        let height = image_rows + gap + text.len() + PAD;
        let reveal = if image { Reveal::ScaleIn } else { Reveal::FadeUp };
        self.push(BlockKind::Card { image }, text, height, image_rows, reveal);
    }

    fn finish(self) -> PageLayout {
        PageLayout {
            viewport_height: self.viewport_height as f64,
            blocks: self.blocks,
            regions: self.regions,
            height: self.cursor as f64,
        }
    }
}

/// Text column beside an image
pub fn half_column(width: u16) -> usize {
    (width as usize / 2).saturating_sub(6).max(MIN_COLUMN)
}

/// Centered text column
pub fn full_column(width: u16) -> usize {
    (width as usize).saturating_sub(8).clamp(MIN_COLUMN, 96)
}

fn line(text: &str, style: TextStyle) -> TextLine {
    TextLine {
        text: text.to_string(),
        style,
    }
}

fn wrap_styled(text: &str, width: usize, style: TextStyle) -> Vec<TextLine> {
    wrap_text(text, width)
        .into_iter()
        .map(|text| TextLine { text, style })
        .collect()
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while word.width() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = split_at_width(&word, width);
            let rest = word.split_off(split);
            lines.push(word);
            word = rest;
        }

        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Byte index where the prefix of `word` reaches `width` columns
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    for (index, ch) in word.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            return index.max(ch.len_utf8());
        }
        used += w;
    }
    word.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PageLayout {
        PageLayout::compute(100, 40, 2026)
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 4).is_empty());
    }

    #[test]
    fn test_sections_follow_page_order() {
        let layout = layout();
        let tops: Vec<f64> = [
            SectionId::Hero,
            SectionId::WhoWeAre,
            SectionId::WhatWeDo,
            SectionId::BrandExperience,
            SectionId::Footer,
        ]
        .iter()
        .map(|id| layout.section_bounds(*id).unwrap().top)
        .collect();
        assert!(tops.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tops[0], 0.0);
    }

    #[test]
    fn test_hero_fills_viewport() {
        let hero = layout().section_bounds(SectionId::Hero).unwrap();
        assert_eq!(hero.height, 40.0);
    }

    #[test]
    fn test_founder_nested_in_who_we_are() {
        let layout = layout();
        let who = layout.section_bounds(SectionId::WhoWeAre).unwrap();
        let founder = layout
            .regions()
            .iter()
            .find(|r| r.id == SectionId::Founder)
            .unwrap();
        assert_eq!(founder.depth, 1);
        assert!(founder.bounds.top >= who.top);
        assert_eq!(founder.bounds.bottom(), who.bottom());
    }

    #[test]
    fn test_top_level_sections_tile_the_document() {
        let layout = layout();
        let top_level: Vec<_> = layout.regions().iter().filter(|r| r.depth == 0).collect();
        for pair in top_level.windows(2) {
            assert_eq!(pair[0].bounds.bottom(), pair[1].bounds.top);
        }
        assert_eq!(top_level.last().unwrap().bounds.bottom(), layout.height());
    }

    #[test]
    fn test_blocks_know_their_section() {
        let layout = layout();
        let founder = layout
            .blocks()
            .iter()
            .find(|b| b.kind == BlockKind::Founder)
            .unwrap();
        assert_eq!(founder.section, SectionId::Founder);
        let story = layout
            .blocks()
            .iter()
            .find(|b| matches!(b.kind, BlockKind::Story { .. }))
            .unwrap();
        assert_eq!(story.section, SectionId::WhoWeAre);
    }

    #[test]
    fn test_brand_cards_are_stacked() {
        let layout = layout();
        let pinned: Vec<&Block> = layout.blocks().iter().filter(|b| b.pin.is_some()).collect();
        assert_eq!(pinned.len(), BRAND_EXPERIENCE.len());
        assert!(pinned.iter().all(|b| {
            b.section == SectionId::BrandExperience && b.kind == BlockKind::Card { image: false }
        }));

        let section = layout.section_bounds(SectionId::BrandExperience).unwrap();
        for block in &pinned {
            let pin = block.pin.unwrap();
            assert_eq!(block.bounds.bottom() + pin.travel, section.bottom());
        }
        let pins: Vec<f64> = pinned.iter().map(|b| b.pin.unwrap().at).collect();
        assert_eq!(pins, STACK_PINS);
        assert_eq!(pinned.last().unwrap().pin.unwrap().travel, 0.0);
    }

    #[test]
    fn test_footer_carries_year() {
        let layout = layout();
        let footer = layout.blocks().last().unwrap();
        assert_eq!(footer.kind, BlockKind::Contact);
        assert!(footer
            .text
            .iter()
            .any(|l| l.text == "Copyright 2026. Smartotels LLC."));
    }

    #[test]
    fn test_section_top_clamped_to_scroll_limit() {
        let layout = layout();
        let footer_top = layout.section_top(SectionId::Footer).unwrap();
        assert!(footer_top <= layout.scroll_limit());
    }

    #[test]
    fn test_narrow_terminal_still_lays_out() {
        let layout = PageLayout::compute(10, 5, 2026);
        assert!(layout.height() > 5.0);
        assert!(layout.watermark_anchors().is_some());
    }
}
