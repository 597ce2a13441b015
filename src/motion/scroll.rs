//! Scroll progress
//!
//! Converts a viewport position and a tracked element's bounds into a
//! normalized progress value. All positions are document rows.

/// Vertical extent of an element in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `[top, bottom)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// The visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Document row at the top edge of the screen
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }

    /// Whether any part of `bounds` is visible, shrinking the viewport by
    /// `margin` rows on each side (negative margins grow it)
    pub fn intersects(&self, bounds: ElementBounds, margin: f64) -> bool {
        let top = self.scroll_y + margin;
        let bottom = self.bottom() - margin;
        bounds.bottom() > top && bounds.top < bottom
    }
}

/// A point on the element lined up with a point on the viewport.
///
/// Both are fractions: 0.0 is the top edge, 1.0 the bottom edge. `start end`
/// is `Intersection { element: 0.0, viewport: 1.0 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll position at which the two points line up
    fn scroll_position(&self, bounds: ElementBounds, viewport_height: f64) -> f64 {
        bounds.top + self.element * bounds.height - self.viewport * viewport_height
    }
}

/// Pair of boundaries mapped to progress 0 and 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollRange {
    /// Leading edge enters the bottom until trailing edge leaves the top
    pub const ACROSS: ScrollRange = ScrollRange {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(1.0, 0.0),
    };

    pub const fn new(start: Intersection, end: Intersection) -> Self {
        Self { start, end }
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::ACROSS
    }
}

/// Normalized scroll progress of `target` through `range`.
///
/// A missing target (not laid out yet) reports 0 instead of failing.
pub fn scroll_progress(target: Option<ElementBounds>, viewport: Viewport, range: ScrollRange) -> f64 {
    let Some(bounds) = target else {
        return 0.0;
    };
    let start = range.start.scroll_position(bounds, viewport.height);
    let end = range.end.scroll_position(bounds, viewport.height);

    if end - start <= f64::EPSILON {
        return if viewport.scroll_y >= end { 1.0 } else { 0.0 };
    }
    ((viewport.scroll_y - start) / (end - start)).clamp(0.0, 1.0)
}

/// Collapses bursts of scroll/resize signals into one recompute per frame
#[derive(Debug)]
pub struct FrameCoalescer {
    pending: bool,
    requests: u64,
    frames: u64,
}

impl Default for FrameCoalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self {
            // Compute once on the very first frame
            pending: true,
            requests: 0,
            frames: 0,
        }
    }

    /// Note that derived values are stale
    pub fn request(&mut self) {
        self.requests += 1;
        self.pending = true;
    }

    /// Called once per frame. True when a recompute is due; clears the flag.
    pub fn take(&mut self) -> bool {
        if self.pending {
            self.pending = false;
            self.frames += 1;
            true
        } else {
            false
        }
    }

    /// (signals received, recomputes performed)
    pub fn stats(&self) -> (u64, u64) {
        (self.requests, self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_across_viewport() {
        let bounds = Some(ElementBounds::new(100.0, 20.0));
        let progress = |scroll_y| scroll_progress(bounds, Viewport::new(scroll_y, 40.0), ScrollRange::ACROSS);

        // Enters at scroll 60 (top meets bottom edge), leaves at 120
        assert_eq!(progress(0.0), 0.0);
        assert_eq!(progress(60.0), 0.0);
        assert!((progress(90.0) - 0.5).abs() < 1e-9);
        assert_eq!(progress(120.0), 1.0);
        assert_eq!(progress(500.0), 1.0);
    }

    #[test]
    fn test_missing_target_is_neutral() {
        let viewport = Viewport::new(250.0, 40.0);
        assert_eq!(scroll_progress(None, viewport, ScrollRange::ACROSS), 0.0);
    }

    #[test]
    fn test_custom_range() {
        let bounds = Some(ElementBounds::new(100.0, 20.0));
        let range = ScrollRange::new(Intersection::new(0.0, 0.0), Intersection::new(1.0, 1.0));
        // Top at top edge (scroll 100) to bottom at bottom edge (scroll 80): empty span
        assert_eq!(scroll_progress(bounds, Viewport::new(79.0, 40.0), range), 0.0);
        assert_eq!(scroll_progress(bounds, Viewport::new(100.0, 40.0), range), 1.0);
    }

    #[test]
    fn test_intersects_with_margin() {
        let viewport = Viewport::new(0.0, 40.0);
        let bounds = ElementBounds::new(38.0, 10.0);
        assert!(viewport.intersects(bounds, 0.0));
        assert!(!viewport.intersects(bounds, 3.0));
        assert!(viewport.intersects(ElementBounds::new(42.0, 5.0), -3.0));
    }

    #[test]
    fn test_bounds_are_half_open() {
        let bounds = ElementBounds::new(10.0, 5.0);
        assert!(bounds.contains(10.0));
        assert!(bounds.contains(14.9));
        assert!(!bounds.contains(15.0));
    }

    #[test]
    fn test_coalescer_runs_once_per_frame() {
        let mut coalescer = FrameCoalescer::new();
        assert!(coalescer.take());
        assert!(!coalescer.take());

        coalescer.request();
        coalescer.request();
        coalescer.request();
        assert!(coalescer.take());
        assert!(!coalescer.take());
        assert_eq!(coalescer.stats(), (3, 2));
    }

    #[test]
    fn test_default_coalescer_computes_first_frame() {
        let mut coalescer = FrameCoalescer::default();
        assert!(coalescer.take());
        assert!(!coalescer.take());
    }
}
