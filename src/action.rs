//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::site::SectionId;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Frame tick: advance timers and animations
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    /// Scroll up by the configured step
    ScrollUp,
    /// Scroll down by the configured step
    ScrollDown,
    /// Scroll up one viewport
    PageUp,
    /// Scroll down one viewport
    PageDown,
    /// Scroll to the top of the page
    ScrollTop,
    /// Scroll to the bottom of the page
    ScrollBottom,
    /// Smooth-scroll to a section
    JumpTo(SectionId),

    // ─────────────────────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────────────────────
    /// Show a specific slide
    SelectSlide(usize),
    NextSlide,
    PrevSlide,
    /// Hero call-to-action button: scroll to and slide in its section
    HeroButton(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open or close the navigation menu
    ToggleMenu,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal selection
    ConfirmModal,
    /// Navigate up in modal
    ModalUp,
    /// Navigate down in modal
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ScrollTop => write!(f, "ScrollTop"),
            Action::ScrollBottom => write!(f, "ScrollBottom"),
            Action::JumpTo(section) => write!(f, "JumpTo({})", section),
            Action::SelectSlide(index) => write!(f, "SelectSlide({})", index),
            Action::NextSlide => write!(f, "NextSlide"),
            Action::PrevSlide => write!(f, "PrevSlide"),
            Action::HeroButton(index) => write!(f, "HeroButton({})", index),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::ToggleMenu => write!(f, "ToggleMenu"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(Action::Resize(80, 24).to_string(), "Resize(80, 24)");
        assert_eq!(Action::SelectSlide(2).to_string(), "SelectSlide(2)");
        assert_eq!(
            Action::JumpTo(SectionId::WhatWeDo).to_string(),
            "JumpTo(section-what-we-do)"
        );
    }
}
