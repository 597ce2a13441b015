//! Model layer - page state and choreography
//!
//! This module contains all state-related types:
//! - `LoadingContext` / `BootSequence` - Timed splash -> nav -> content gating
//! - `Carousel` - Hero slide rotation with per-slide progress
//! - `Scene` - Scroll-derived state (contrast, watermark, reveals, parallax)
//! - `ModalStack` - Modal overlay management

pub mod boot;
pub mod carousel;
pub mod contrast;
pub mod modal;
pub mod page;
pub mod parallax;
pub mod scene;
pub mod site;
pub mod watermark;

// Re-export commonly used types
pub use boot::{BootSequence, LoadingContext};
pub use carousel::Carousel;
pub use modal::{Modal, ModalStack};
pub use page::PageLayout;
pub use parallax::ParallaxSet;
pub use scene::Scene;
