//! Layout calculations for the UI

use crate::motion::ElementBounds;
use ratatui::layout::Rect;

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Where a document element lands on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Visible part of the element
    pub rect: Rect,
    /// Element rows cut off above the top of the area
    pub skipped: u16,
}

/// Project `bounds` (document rows) into `area` scrolled to `scroll_y`.
///
/// Returns `None` when nothing of the element is visible.
pub fn project(bounds: ElementBounds, scroll_y: f64, area: Rect) -> Option<Projection> {
    let top = (bounds.top - scroll_y).round() as i64;
    let bottom = (bounds.bottom() - scroll_y).round() as i64;
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(area.height as i64);
    if visible_bottom <= visible_top || area.width == 0 {
        return None;
    }

    Some(Projection {
        rect: Rect::new(
            area.x,
            area.y + visible_top as u16,
            area.width,
            (visible_bottom - visible_top) as u16,
        ),
        skipped: (visible_top - top) as u16,
    })
}

/// Whether the cell at (`column`, `row`) is inside `rect`
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
