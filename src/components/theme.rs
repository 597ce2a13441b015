//! Colours
//!
//! Terminals have no alpha channel, so opacity is rendered by blending a
//! colour toward the background it sits on.

use crate::model::contrast::Background;
use ratatui::style::Color;

pub type Rgb = (u8, u8, u8);

pub const INK: Rgb = (17, 17, 17);
pub const PAPER: Rgb = (244, 241, 236);
pub const NIGHT: Rgb = (10, 10, 10);
pub const SNOW: Rgb = (250, 250, 250);
pub const BRASS: Rgb = (176, 141, 87);
pub const MUTED_DARK: Rgb = (150, 150, 150);
pub const MUTED_LIGHT: Rgb = (110, 105, 98);
/// Preloader backdrop
pub const TEAL: Rgb = (47, 78, 84);

/// Linear blend from `from` (t = 0) to `to` (t = 1)
pub fn mix(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

/// `fg` drawn at `opacity` over `bg`
pub fn fade(fg: Rgb, bg: Rgb, opacity: f64) -> Color {
    rgb(mix(bg, fg, opacity))
}

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Components of an RGB colour; named colours fall back to `fallback`
pub fn to_rgb(color: Color, fallback: Rgb) -> Rgb {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::White => (255, 255, 255),
        _ => fallback,
    }
}

/// Surface colour of a section
pub fn surface(background: Background) -> Rgb {
    match background {
        Background::Dark => NIGHT,
        Background::Light => PAPER,
    }
}

/// Primary text colour on a section
pub fn ink(background: Background) -> Rgb {
    match background {
        Background::Dark => SNOW,
        Background::Light => INK,
    }
}

/// Secondary text colour on a section
pub fn muted(background: Background) -> Rgb {
    match background {
        Background::Dark => MUTED_DARK,
        Background::Light => MUTED_LIGHT,
    }
}

/// Lighten or darken a colour by `amount` (-1..1)
pub fn shade(color: Rgb, amount: f64) -> Rgb {
    if amount >= 0.0 {
        mix(color, (255, 255, 255), amount)
    } else {
        mix(color, (0, 0, 0), -amount)
    }
}
