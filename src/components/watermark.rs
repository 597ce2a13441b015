//! Section watermark
//!
//! Oversized, faint section name pinned to the middle of the viewport.
//! Written only into blank cells so it reads as sitting behind the page.

use crate::component::Component;
use crate::components::paint::Pen;
use crate::components::theme::BRASS;
use crate::model::watermark::WatermarkFrame;
use anyhow::Result;
use ratatui::{layout::Rect, Frame};
use unicode_width::UnicodeWidthStr;

/// Peak opacity of the label against the page
const STRENGTH: f64 = 0.35;

#[derive(Default)]
pub struct WatermarkComponent;

impl WatermarkComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn draw_with(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        watermark: Option<WatermarkFrame>,
        px_per_row: f64,
    ) -> Result<()> {
        let Some(watermark) = watermark else {
            return Ok(());
        };
        let label = banner(watermark.label);
        let x = area.x as i32 + (area.width as i32 - label.width() as i32) / 2;
        let y = area.y as i32 + area.height as i32 / 2 + (watermark.dy / px_per_row).round() as i32;
        Pen::new(BRASS)
            .bold()
            .behind()
            .opacity(STRENGTH * watermark.opacity)
            .write(frame.buffer_mut(), x, y, &label, area);
        Ok(())
    }
}

impl Component for WatermarkComponent {
    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_with which takes the scene's frame
        Ok(())
    }
}

/// Upper-cased with letters spread out
fn banner(label: &str) -> String {
    label
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
