//! Page component
//!
//! Draws every block below the hero: section surfaces, pictures with their
//! parallax and the pre-wrapped text, each offset by its reveal animation.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::project;
use crate::components::paint::{fill, Pen, Picture};
use crate::components::theme::{self, Rgb, BRASS, NIGHT};
use crate::model::contrast::Background;
use crate::model::page::{full_column, Block, BlockKind, TextLine, TextStyle, PAD};
use crate::model::parallax::ParallaxFrame;
use crate::model::scene::Scene;
use crate::motion::easing::SOFT_LANDING;
use crate::motion::{ElementBounds, RevealFrame, Tween};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect, Frame};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Content wrapper entrance
const CONTENT_ENTRANCE: Duration = Duration::from_millis(1000);
const CONTENT_RISE_PX: f64 = 20.0;

/// Picture tints, cycled by block index
const PICTURE_TINTS: [Rgb; 5] = [
    (122, 101, 80),
    (72, 86, 92),
    (98, 82, 70),
    (64, 76, 68),
    (112, 94, 72),
];

/// Opacity and vertical offset (px) of the content wrapper
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentFrame {
    pub opacity: f64,
    pub dy: f64,
}

/// Content fade-up once the boot sequence reveals it
pub fn content_entrance(shown_at: Option<Instant>, now: Instant) -> ContentFrame {
    let Some(shown_at) = shown_at else {
        return ContentFrame {
            opacity: 0.0,
            dy: CONTENT_RISE_PX,
        };
    };
    let p = Tween::new(0.0, 1.0, CONTENT_ENTRANCE)
        .with_easing(SOFT_LANDING)
        .value(now.saturating_duration_since(shown_at));
    ContentFrame {
        opacity: p,
        dy: CONTENT_RISE_PX * (1.0 - p),
    }
}

/// Context needed for drawing the page
pub struct PageRenderContext<'a> {
    pub scene: &'a Scene,
    /// Scroll position to draw at, entrance offset included
    pub scroll_y: f64,
    pub px_per_row: f64,
    pub now: Instant,
}

/// Everything that moves one block away from its resting place
struct Placement {
    clip: Rect,
    /// Document row of the block's top, on screen
    top: i32,
    /// Left edge of the page column the block is laid out in
    left: i32,
    width: u16,
    reveal: RevealFrame,
    reveal_dy: f64,
    parallax: ParallaxFrame,
    background: Background,
}

/// Page component
#[derive(Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn draw_with(&mut self, frame: &mut Frame, area: Rect, ctx: &PageRenderContext) -> Result<()> {
        let buf = frame.buffer_mut();
        fill(buf, area, NIGHT);

        // Points of reveal offset per cell; cells are about twice as tall as wide
        let px_per_column = ctx.px_per_row / 2.0;

        for (index, block) in ctx.scene.blocks() {
            if block.kind == BlockKind::Hero {
                continue;
            }
            let parallax = ctx.scene.parallax(index);
            let bounds =
                ElementBounds::new(block.bounds.top + parallax.stack_dy, block.bounds.height);
            let Some(projection) = project(bounds, ctx.scroll_y, area) else {
                continue;
            };

            let shift =
                (ctx.scene.section_dx(block.section, ctx.now) * area.width as f64).round() as i32;
            let Some(clip) = shifted(projection.rect, shift, area) else {
                continue;
            };
            let background = ctx.scene.section_background(block.section);
            fill(buf, clip, theme::surface(background));
            if !ctx.scene.is_revealed(index) {
                continue;
            }

            let reveal = ctx.scene.reveal(index, ctx.now);
            let placement = Placement {
                clip,
                top: projection.rect.y as i32 - projection.skipped as i32,
                left: area.x as i32 + shift + (reveal.dx / px_per_column).round() as i32,
                width: area.width,
                reveal,
                reveal_dy: reveal.dy / ctx.px_per_row,
                parallax,
                background,
            };
            draw_block(buf, index, block, &placement);
        }
        Ok(())
    }
}

impl Component for PageComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Char(' ') | KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
            KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_with which takes the scene
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Block Rendering
// ═══════════════════════════════════════════════════════════════════════════════

fn draw_block(buf: &mut Buffer, index: usize, block: &Block, at: &Placement) {
    let surface = theme::surface(at.background);
    let content_top = at.top + PAD as i32;
    let half = at.width as i32 / 2;

    let picture = Picture {
        tint: PICTURE_TINTS[index % PICTURE_TINTS.len()],
        dy: at.parallax.image_dy,
        scale: at.parallax.image_scale * at.reveal.scale,
        opacity: at.reveal.opacity,
        backdrop: surface,
    };

    match block.kind {
        BlockKind::Hero => {}
        BlockKind::Title => {
            let y = content_top + at.reveal_dy.round() as i32;
            for (i, line) in block.text.iter().enumerate() {
                let x = at.left + (at.width as i32 - line.text.width() as i32) / 2;
                draw_line(buf, line, x, y + i as i32, at);
            }
        }
        BlockKind::Story { .. } | BlockKind::Founder => {
            let image_left = match block.kind {
                BlockKind::Story { image_left } => image_left,
                _ => true,
            };
            let (image_x, text_x) = if image_left {
                (at.left + 2, at.left + half + 2)
            } else {
                (at.left + half + 1, at.left + 4)
            };
            let y = content_top + at.reveal_dy.round() as i32;
            picture.draw(
                buf,
                image_x,
                y,
                (half - 3).max(1) as u16,
                block.image_rows as u16,
                at.clip,
            );
            let text_y = content_top + (at.parallax.text_dy + at.reveal_dy).round() as i32;
            draw_lines(buf, &block.text, text_x, text_y, at);
        }
        BlockKind::Card { image } => {
            let column = full_column(at.width) as i32;
            let left = at.left + (at.width as i32 - column) / 2;
            let y = at.top + 1 + at.reveal_dy.round() as i32;
            Pen::new(theme::muted(at.background))
                .opacity(at.reveal.opacity * 0.5)
                .write(buf, left, at.top, &"─".repeat(column as usize), at.clip);

            let mut text_y = y;
            if image {
                picture.draw(buf, left, y, column as u16, block.image_rows as u16, at.clip);
                text_y += block.image_rows as i32 + 1;
            }
            draw_lines(buf, &block.text, left, text_y, at);
        }
        BlockKind::Contact => {
            let column = full_column(at.width) as i32;
            let left = at.left + (at.width as i32 - column) / 2;
            let y = content_top + at.reveal_dy.round() as i32;
            draw_lines(buf, &block.text, left, y, at);
        }
    }
}

fn draw_lines(buf: &mut Buffer, lines: &[TextLine], x: i32, y: i32, at: &Placement) {
    for (i, line) in lines.iter().enumerate() {
        draw_line(buf, line, x, y + i as i32, at);
    }
}

fn draw_line(buf: &mut Buffer, line: &TextLine, x: i32, y: i32, at: &Placement) {
    if let Some(pen) = pen_for(line.style, at.background) {
        pen.opacity(pen.opacity * at.reveal.opacity)
            .write(buf, x, y, &line.text, at.clip);
    }
}

fn pen_for(style: TextStyle, background: Background) -> Option<Pen> {
    let ink = theme::ink(background);
    let pen = match style {
        TextStyle::Eyebrow => Pen::new(BRASS).bold(),
        TextStyle::Title | TextStyle::Heading | TextStyle::Name => Pen::new(ink).bold(),
        TextStyle::Body => Pen::new(ink).opacity(0.85),
        TextStyle::Highlight => Pen::new(ink).italic(),
        TextStyle::Link => Pen::new(BRASS).underlined(),
        TextStyle::Fine => Pen::new(theme::muted(background)),
        TextStyle::Blank => return None,
    };
    Some(pen)
}

/// `rect` moved `dx` columns, cut to `area`
fn shifted(rect: Rect, dx: i32, area: Rect) -> Option<Rect> {
    let left = (rect.x as i32 + dx).max(area.left() as i32);
    let right = (rect.right() as i32 + dx).min(area.right() as i32);
    (right > left).then(|| Rect::new(left as u16, rect.y, (right - left) as u16, rect.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contrast::ContrastSwitch;
    use crate::model::page::PageLayout;
    use crate::model::parallax::ParallaxSet;
    use crate::model::site::SectionId;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn scene(width: u16, height: u16) -> Scene {
        let contrast = ContrastSwitch::new(
            ["section-hero", "section-footer", "section-founder"],
            Background::Dark,
        );
        Scene::new(
            PageLayout::compute(width, height, 2026),
            ParallaxSet::new(16.0).unwrap(),
            contrast,
            1.0,
        )
    }

    fn render(scene: &Scene, scroll_y: f64, now: Instant) -> String {
        let mut page = PageComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let ctx = PageRenderContext {
                    scene,
                    scroll_y,
                    px_per_row: 16.0,
                    now,
                };
                page.draw_with(frame, area, &ctx).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn test_revealed_story_is_drawn() {
        let now = Instant::now();
        let mut scene = scene(80, 24);
        let top = scene.layout().section_bounds(SectionId::WhoWeAre).unwrap().top;
        scene.recompute(top, now);

        let later = now + Duration::from_secs(2);
        let content = render(&scene, top, later);
        assert!(content.contains("WHY SMARTOTELS?"));
    }

    #[test]
    fn test_first_brand_card_holds_below_the_navbar() {
        let now = Instant::now();
        let mut scene = scene(80, 24);
        let card = scene
            .layout()
            .blocks()
            .iter()
            .find(|b| b.pin.is_some())
            .cloned()
            .unwrap();
        // Three rows past the point where the card reaches its pin
        let scroll_y = card.bounds.top - card.pin.unwrap().at * 24.0 + 3.0;
        scene.recompute(scroll_y, now);

        let mut page = PageComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let ctx = PageRenderContext {
                    scene: &scene,
                    scroll_y,
                    px_per_row: 16.0,
                    now: now + Duration::from_secs(2),
                };
                page.draw_with(frame, area, &ctx).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = (0..24u16).find(|&y| {
            let line: String = (0..80u16).map(|x| buffer[(x, y)].symbol().to_string()).collect();
            line.contains("Hospitality Technology")
        });
        // Pinned at 17% of 24 rows, title one row under the rule
        assert_eq!(row, Some(5));
    }

    #[test]
    fn test_footer_carries_year() {
        let now = Instant::now();
        let mut scene = scene(80, 24);
        let limit = scene.layout().scroll_limit();
        scene.recompute(limit, now);

        let content = render(&scene, limit, now + Duration::from_secs(2));
        assert!(content.contains("Copyright 2026. Smartotels LLC."));
        assert!(content.contains("info@smartotels.com"));
    }

    #[test]
    fn test_unrevealed_text_is_invisible() {
        let now = Instant::now();
        let scene = scene(80, 24);
        let top = scene.layout().section_bounds(SectionId::WhoWeAre).unwrap().top;

        // Never recomputed, so nothing has been revealed
        let content = render(&scene, top, now);
        assert!(!content.contains("WHY SMARTOTELS?"));
    }

    #[test]
    fn test_content_entrance() {
        let now = Instant::now();
        assert_eq!(
            content_entrance(None, now),
            ContentFrame {
                opacity: 0.0,
                dy: 20.0
            }
        );
        let settled = content_entrance(Some(now), now + Duration::from_secs(1));
        assert_eq!(settled.opacity, 1.0);
        assert_eq!(settled.dy, 0.0);
    }

    #[test]
    fn test_shifted_rect() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = Rect::new(0, 3, 80, 5);
        assert_eq!(shifted(rect, -20, area), Some(Rect::new(0, 3, 60, 5)));
        assert_eq!(shifted(rect, 10, area), Some(Rect::new(10, 3, 70, 5)));
        assert_eq!(shifted(rect, -80, area), None);
    }

    #[test]
    fn test_scroll_keys() {
        let mut page = PageComponent::new();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            page.handle_key_event(key(KeyCode::Char('j'))).unwrap(),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            page.handle_key_event(key(KeyCode::Char('G'))).unwrap(),
            Some(Action::ScrollBottom)
        );
        assert_eq!(
            page.handle_key_event(key(KeyCode::PageUp)).unwrap(),
            Some(Action::PageUp)
        );
    }
}
