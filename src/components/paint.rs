//! Direct buffer painting
//!
//! The page draws into cells that already carry a background, so text is
//! written cell by cell and faded against whatever is underneath.

use crate::components::theme::{self, Rgb, NIGHT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthChar;

/// Paint `rect` a solid colour, clearing its symbols
pub fn fill(buf: &mut Buffer, rect: Rect, color: Rgb) {
    let rect = rect.intersection(buf.area);
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.bg = theme::rgb(color);
                cell.fg = theme::rgb(color);
            }
        }
    }
}

/// Blend every cell in `rect` toward `color` by `opacity`
pub fn veil(buf: &mut Buffer, rect: Rect, color: Rgb, opacity: f64) {
    let rect = rect.intersection(buf.area);
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let bg = theme::to_rgb(cell.bg, color);
                let fg = theme::to_rgb(cell.fg, color);
                cell.bg = theme::rgb(theme::mix(bg, color, opacity));
                cell.fg = theme::rgb(theme::mix(fg, color, opacity));
            }
        }
    }
}

/// Text written at a possibly off-screen position
#[derive(Debug, Clone, Copy)]
pub struct Pen {
    pub color: Rgb,
    pub opacity: f64,
    pub modifier: Modifier,
    /// Only write over blank cells
    pub behind: bool,
}

impl Pen {
    pub fn new(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
            modifier: Modifier::empty(),
            behind: false,
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn bold(mut self) -> Self {
        self.modifier |= Modifier::BOLD;
        self
    }

    pub fn italic(mut self) -> Self {
        self.modifier |= Modifier::ITALIC;
        self
    }

    pub fn underlined(mut self) -> Self {
        self.modifier |= Modifier::UNDERLINED;
        self
    }

    pub fn behind(mut self) -> Self {
        self.behind = true;
        self
    }

    /// Write `text` starting at (`x`, `y`), clipped to `clip`.
    /// Returns the columns the text spans, written or not.
    pub fn write(&self, buf: &mut Buffer, x: i32, y: i32, text: &str, clip: Rect) -> u16 {
        let clip = clip.intersection(buf.area);
        let mut column = x;
        if self.opacity <= 0.0 {
            return text.chars().filter_map(|c| c.width()).sum::<usize>() as u16;
        }
        let in_row = y >= clip.top() as i32 && y < clip.bottom() as i32;

        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as i32;
            if width == 0 {
                continue;
            }
            let fits = column >= clip.left() as i32 && column + width <= clip.right() as i32;
            if in_row && fits {
                if let Some(cell) = buf.cell_mut((column as u16, y as u16)) {
                    if !self.behind || cell.symbol() == " " {
                        let bg = theme::to_rgb(cell.bg, NIGHT);
                        cell.set_char(ch);
                        cell.set_style(
                            Style::default()
                                .fg(theme::fade(self.color, bg, self.opacity))
                                .add_modifier(self.modifier),
                        );
                    }
                }
            }
            column += width;
        }
        (column - x) as u16
    }
}

/// Procedural stand-in for photography: `tint` rippled and vignetted.
/// (`u`, `v`) is the offset from the picture's centre and `half` its
/// half-extents.
pub fn texture(tint: Rgb, u: f64, v: f64, half: (f64, f64)) -> Rgb {
    let ripple = ((u * 0.21).sin() * (v * 0.37).cos() + (u * 0.05 + v * 0.11).sin()) * 0.5;
    let falloff = ((u / half.0.max(1.0)).powi(2) + (v / half.1.max(1.0)).powi(2)).min(1.0);
    theme::shade(theme::shade(tint, ripple * 0.12), -0.35 * falloff)
}

/// An image band inside a block
#[derive(Debug, Clone, Copy)]
pub struct Picture {
    pub tint: Rgb,
    /// Content shift in rows, positive is down
    pub dy: f64,
    pub scale: f64,
    pub opacity: f64,
    /// What shows through while the picture fades in
    pub backdrop: Rgb,
}

impl Picture {
    /// Paint the picture into the `width` x `height` box at (`x`, `y`),
    /// clipped to `clip`
    pub fn draw(&self, buf: &mut Buffer, x: i32, y: i32, width: u16, height: u16, clip: Rect) {
        let clip = clip.intersection(buf.area);
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        let half = (width as f64 / 2.0, height as f64 / 2.0);

        for row in y.max(clip.top() as i32)..(y + height as i32).min(clip.bottom() as i32) {
            for column in x.max(clip.left() as i32)..(x + width as i32).min(clip.right() as i32) {
                let u = ((column - x) as f64 - half.0) / scale;
                let v = ((row - y) as f64 - half.1 - self.dy) / scale;
                let color = theme::mix(self.backdrop, texture(self.tint, u, v, half), self.opacity);
                if let Some(cell) = buf.cell_mut((column as u16, row as u16)) {
                    cell.reset();
                    cell.bg = theme::rgb(color);
                    cell.fg = theme::rgb(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::theme::{INK, PAPER};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_write_clips_both_edges() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        let width = Pen::new(INK).write(&mut buf, -2, 0, "abcdefghij", area);
        assert_eq!(width, 10);
        assert_eq!(row(&buf, 0), "cdefgh");
    }

    #[test]
    fn test_write_outside_rows_is_dropped() {
        let area = Rect::new(0, 0, 6, 2);
        let mut buf = Buffer::empty(area);
        Pen::new(INK).write(&mut buf, 0, 5, "abc", area);
        Pen::new(INK).write(&mut buf, 0, -1, "abc", area);
        assert_eq!(row(&buf, 0), "      ");
        assert_eq!(row(&buf, 1), "      ");
    }

    #[test]
    fn test_faded_text_blends_into_background() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        fill(&mut buf, area, PAPER);
        Pen::new(INK).opacity(0.0001).write(&mut buf, 0, 0, "ab", area);
        assert_eq!(buf[(0, 0)].fg, theme::rgb(PAPER));
    }

    #[test]
    fn test_behind_skips_occupied_cells() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        Pen::new(INK).write(&mut buf, 1, 0, "x", area);
        Pen::new(INK).behind().write(&mut buf, 0, 0, "abcd", area);
        assert_eq!(row(&buf, 0), "axcd");
    }

    #[test]
    fn test_picture_is_clipped() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        fill(&mut buf, area, PAPER);
        let picture = Picture {
            tint: (90, 70, 50),
            dy: 0.0,
            scale: 1.0,
            opacity: 1.0,
            backdrop: PAPER,
        };
        picture.draw(&mut buf, 6, -1, 8, 3, area);
        assert_eq!(buf[(5, 0)].bg, theme::rgb(PAPER));
        assert_ne!(buf[(6, 0)].bg, theme::rgb(PAPER));
        assert_ne!(buf[(9, 1)].bg, theme::rgb(PAPER));
        assert_eq!(buf[(6, 2)].bg, theme::rgb(PAPER));
    }

    #[test]
    fn test_veil_moves_toward_color() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        fill(&mut buf, area, (0, 0, 0));
        veil(&mut buf, area, (200, 100, 50), 0.5);
        assert_eq!(buf[(0, 0)].bg, theme::rgb((100, 50, 25)));
    }
}
