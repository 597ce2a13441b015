//! Navbar background contrast
//!
//! Samples the page at a fixed row near the top of the viewport, finds the
//! tagged section under that row and classifies it as dark or light so the
//! navigation bar can pick a contrasting colour.

use crate::model::site::SectionId;
use crate::motion::ElementBounds;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Background under the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Dark,
    Light,
}

/// A tagged section and how deeply it is nested
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedRegion {
    pub id: SectionId,
    pub bounds: ElementBounds,
    /// 0 for top-level sections, 1 for sections nested in those, ...
    pub depth: usize,
}

/// Tagged section enclosing document row `y`.
///
/// The nearest enclosing (deepest) region wins. Regions are half-open, so
/// two adjacent sections never both claim a row; if equally deep regions
/// overlap, the later one in document order wins since it paints on top.
pub fn section_at(regions: &[TaggedRegion], y: f64) -> Option<SectionId> {
    regions
        .iter()
        .enumerate()
        .filter(|(_, region)| region.bounds.contains(y))
        .max_by_key(|(order, region)| (region.depth, *order))
        .map(|(_, region)| region.id)
}

/// Dark/light classifier with a sticky fallback
#[derive(Debug, Clone)]
pub struct ContrastSwitch {
    dark_sections: HashSet<String>,
    current: Background,
    /// Used when nothing tagged is under the sample point; `None` keeps the
    /// previous classification
    page_default: Option<Background>,
}

impl ContrastSwitch {
    pub fn new<I, S>(dark_sections: I, initial: Background) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dark_sections: dark_sections.into_iter().map(Into::into).collect(),
            current: initial,
            page_default: None,
        }
    }

    pub fn with_page_default(mut self, background: Background) -> Self {
        self.page_default = Some(background);
        self
    }

    pub fn current(&self) -> Background {
        self.current
    }

    pub fn classify(&self, section: SectionId) -> Background {
        if self.dark_sections.contains(section.tag()) {
            Background::Dark
        } else {
            Background::Light
        }
    }

    /// Re-evaluate from the section under the sample point
    pub fn update(&mut self, sampled: Option<SectionId>) -> Background {
        let next = match (sampled, self.page_default) {
            (Some(section), _) => self.classify(section),
            (None, Some(default)) => default,
            (None, None) => self.current,
        };
        if next != self.current {
            debug!(?sampled, ?next, "navbar contrast changed");
        }
        self.current = next;
        next
    }

    /// Sample `regions` at `y` and update
    pub fn sample(&mut self, regions: &[TaggedRegion], y: f64) -> Background {
        self.update(section_at(regions, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> Vec<TaggedRegion> {
        vec![
            TaggedRegion {
                id: SectionId::Hero,
                bounds: ElementBounds::new(0.0, 40.0),
                depth: 0,
            },
            TaggedRegion {
                id: SectionId::WhoWeAre,
                bounds: ElementBounds::new(40.0, 100.0),
                depth: 0,
            },
            TaggedRegion {
                id: SectionId::Founder,
                bounds: ElementBounds::new(100.0, 30.0),
                depth: 1,
            },
            // Gap between 140 and 150 has no tag
            TaggedRegion {
                id: SectionId::Footer,
                bounds: ElementBounds::new(150.0, 30.0),
                depth: 0,
            },
        ]
    }

    fn switch() -> ContrastSwitch {
        ContrastSwitch::new(
            ["section-hero", "section-footer", "section-founder"],
            Background::Dark,
        )
    }

    #[test]
    fn test_dark_section_is_dark() {
        let mut contrast = switch();
        assert_eq!(contrast.sample(&regions(), 10.0), Background::Dark);
        assert_eq!(contrast.sample(&regions(), 160.0), Background::Dark);
    }

    #[test]
    fn test_other_section_is_light() {
        let mut contrast = switch();
        assert_eq!(contrast.sample(&regions(), 50.0), Background::Light);
    }

    #[test]
    fn test_nested_section_wins() {
        let mut contrast = switch();
        assert_eq!(section_at(&regions(), 110.0), Some(SectionId::Founder));
        assert_eq!(contrast.sample(&regions(), 110.0), Background::Dark);
    }

    #[test]
    fn test_boundary_belongs_to_next_section() {
        assert_eq!(section_at(&regions(), 40.0), Some(SectionId::WhoWeAre));
        assert_eq!(section_at(&regions(), 39.99), Some(SectionId::Hero));
    }

    #[test]
    fn test_untagged_point_keeps_previous() {
        let mut contrast = switch();
        contrast.sample(&regions(), 50.0);
        assert_eq!(contrast.sample(&regions(), 145.0), Background::Light);

        contrast.sample(&regions(), 10.0);
        assert_eq!(contrast.sample(&regions(), 145.0), Background::Dark);
    }

    #[test]
    fn test_page_default_overrides_untagged() {
        let mut contrast = switch().with_page_default(Background::Dark);
        contrast.sample(&regions(), 50.0);
        assert_eq!(contrast.sample(&regions(), 145.0), Background::Dark);
    }

    #[test]
    fn test_equal_depth_overlap_prefers_later() {
        let overlapping = vec![
            TaggedRegion {
                id: SectionId::WhatWeDo,
                bounds: ElementBounds::new(0.0, 20.0),
                depth: 0,
            },
            TaggedRegion {
                id: SectionId::BrandExperience,
                bounds: ElementBounds::new(10.0, 20.0),
                depth: 0,
            },
        ];
        assert_eq!(section_at(&overlapping, 15.0), Some(SectionId::BrandExperience));
    }
}
