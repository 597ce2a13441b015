//! Hero carousel component
//!
//! Full-viewport slide show: a crossfading backdrop, the slide caption,
//! two call-to-action buttons and one progress bar per slide.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{hit, Projection};
use crate::components::paint::{texture, Pen};
use crate::components::theme::{self, Rgb, NIGHT, SNOW};
use crate::model::carousel::Carousel;
use crate::model::site::{HERO_BUTTONS, SLIDES};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const INDICATOR_WIDTH: u16 = 6;
const INDICATOR_GAP: u16 = 2;

/// Darkening laid over the footage so captions stay legible
const OVERLAY: f64 = 0.3;

pub struct HeroRenderContext<'a> {
    pub carousel: &'a Carousel,
    pub now: Instant,
}

/// Hero carousel component
#[derive(Default)]
pub struct HeroComponent {
    /// Clickable indicators and buttons from the last draw
    targets: Vec<(Rect, Action)>,
}

impl HeroComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the hero block. `projection` is where the block landed on
    /// screen and `height` its full height in rows.
    pub fn draw_with(
        &mut self,
        frame: &mut Frame,
        projection: Projection,
        height: u16,
        ctx: &HeroRenderContext,
    ) -> Result<()> {
        self.targets.clear();
        let clip = projection.rect;
        let top = clip.y as i32 - projection.skipped as i32;
        let buf = frame.buffer_mut();

        // Backdrop
        let backdrop = ctx.carousel.background(ctx.now);
        let half = (clip.width as f64 / 2.0, height as f64 / 2.0);
        let clip = clip.intersection(buf.area);
        for y in clip.top()..clip.bottom() {
            let row = (y as i32 - top) as f64;
            for x in clip.left()..clip.right() {
                let column = (x - clip.x) as f64;
                let incoming =
                    footage(slide_tint(backdrop.slide), column, row, backdrop.scale, half);
                let under = match backdrop.previous {
                    Some((previous, opacity)) => theme::mix(
                        NIGHT,
                        footage(slide_tint(previous), column, row, 1.0, half),
                        opacity,
                    ),
                    None => NIGHT,
                };
                let color = theme::shade(theme::mix(under, incoming, backdrop.opacity), -OVERLAY);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.bg = theme::rgb(color);
                    cell.fg = theme::rgb(color);
                }
            }
        }

        // Caption, one masked row per line
        let caption = ctx.carousel.caption(ctx.now);
        let lines = SLIDES
            .get(caption.slide)
            .map(|slide| slide.lines)
            .unwrap_or_default();
        let caption_top = top + (height as i32 * 2 / 5) - lines.len() as i32 / 2;
        for (i, (text, line)) in lines.iter().zip(caption.lines.iter()).enumerate() {
            if line.offset.abs() >= 0.5 {
                continue;
            }
            let x = clip.x as i32 + (clip.width as i32 - text.width() as i32) / 2;
            Pen::new(SNOW)
                .bold()
                .opacity(line.opacity)
                .write(buf, x, caption_top + i as i32 * 2, text, clip);
        }

        // Call-to-action buttons
        let labels: Vec<String> = HERO_BUTTONS
            .iter()
            .map(|(label, _)| format!("[ {} ]", label))
            .collect();
        let total = labels.iter().map(|l| l.width() as i32).sum::<i32>() + 4;
        let mut x = clip.x as i32 + (clip.width as i32 - total) / 2;
        let y = top + height as i32 - 7;
        for (i, label) in labels.iter().enumerate() {
            let width = Pen::new(SNOW).write(buf, x, y, label, clip);
            if let Some(rect) = visible(x, y, width, clip) {
                self.targets.push((rect, Action::HeroButton(i)));
            }
            x += width as i32 + 4;
        }

        // Progress indicators
        let count = ctx.carousel.len() as u16;
        let total = count * INDICATOR_WIDTH + count.saturating_sub(1) * INDICATOR_GAP;
        let mut x = clip.x as i32 + (clip.width as i32 - total as i32) / 2;
        let y = top + height as i32 - 3;
        for i in 0..ctx.carousel.len() {
            let filled = if i == ctx.carousel.index() {
                ctx.carousel
                    .indicator_progress(ctx.carousel.key(), ctx.now)
                    .map(|p| (p * INDICATOR_WIDTH as f64).round() as usize)
                    .unwrap_or(0)
            } else {
                0
            };
            let bar = "━".repeat(INDICATOR_WIDTH as usize);
            Pen::new(SNOW).opacity(0.3).write(buf, x, y, &bar, clip);
            Pen::new(SNOW).write(buf, x, y, &"━".repeat(filled), clip);
            if let Some(rect) = visible(x, y, INDICATOR_WIDTH, clip) {
                self.targets.push((rect, Action::SelectSlide(i)));
            }
            x += (INDICATOR_WIDTH + INDICATOR_GAP) as i32;
        }
        Ok(())
    }
}

impl Component for HeroComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                (index < SLIDES.len()).then_some(Action::SelectSlide(index))
            }
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevSlide),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextSlide),
            KeyCode::Char('p') => Some(Action::HeroButton(0)),
            KeyCode::Char('b') => Some(Action::HeroButton(1)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .targets
            .iter()
            .find(|(rect, _)| hit(*rect, mouse.column, mouse.row))
            .map(|(_, action)| action.clone()))
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_with which takes the carousel
        Ok(())
    }
}

fn slide_tint(index: usize) -> Rgb {
    SLIDES.get(index).map(|slide| slide.tint).unwrap_or(NIGHT)
}

/// Slide footage zoomed by `scale` around the centre of the hero
fn footage(tint: Rgb, column: f64, row: f64, scale: f64, half: (f64, f64)) -> Rgb {
    let scale = if scale > 0.0 { scale } else { 1.0 };
    texture(tint, (column - half.0) / scale, (row - half.1) / scale, half)
}

/// On-screen rect of a one-row element at (`x`, `y`), if any of it is in `clip`
fn visible(x: i32, y: i32, width: u16, clip: Rect) -> Option<Rect> {
    if y < clip.top() as i32 || y >= clip.bottom() as i32 {
        return None;
    }
    let left = x.max(clip.left() as i32);
    let right = (x + width as i32).min(clip.right() as i32);
    (right > left).then(|| Rect::new(left as u16, y as u16, (right - left) as u16, 1))
}
