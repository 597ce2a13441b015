//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod help_dialog;
pub mod hero;
pub mod layout;
pub mod navbar;
pub mod page;
pub mod paint;
pub mod quit_dialog;
pub mod splash;
pub mod theme;
pub mod watermark;

pub use help_dialog::HelpDialog;
pub use hero::{HeroComponent, HeroRenderContext};
pub use layout::project;
pub use navbar::{NavbarComponent, NavbarRenderContext};
pub use page::{content_entrance, PageComponent, PageRenderContext};
pub use quit_dialog::QuitDialog;
pub use splash::SplashComponent;
pub use watermark::WatermarkComponent;
