//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the boot sequence, the carousel, the scroll position and the
//! scroll-derived scene, and advances all of them on every frame tick.

use crate::action::Action;
use crate::component::Component;
use crate::components::paint::veil;
use crate::components::theme::NIGHT;
use crate::components::{
    content_entrance, project, HelpDialog, HeroComponent, HeroRenderContext, NavbarComponent,
    NavbarRenderContext, PageComponent, PageRenderContext, QuitDialog, SplashComponent,
    WatermarkComponent,
};
use crate::config::Config;
use crate::model::page::BlockKind;
use crate::model::site::{HERO_BUTTONS, MENU, SLIDES};
use crate::model::{
    BootSequence, Carousel, LoadingContext, Modal, ModalStack, PageLayout, ParallaxSet, Scene,
};
use crate::motion::{Easing, FrameCoalescer, SmoothScroll};
use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Programmatic scrolls (menu, buttons, top/bottom)
const JUMP_DURATION: Duration = Duration::from_millis(1500);

/// Rows kept from the previous screen when paging
const PAGE_OVERLAP: f64 = 3.0;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    config: Config,

    /// Boot phases shared with the splash, navbar and content
    pub loading: LoadingContext,
    boot: BootSequence,
    carousel: Carousel,

    /// Page scroll, in rows
    scroll: SmoothScroll,
    coalescer: FrameCoalescer,
    scene: Scene,
    year: i32,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub splash: SplashComponent,
    pub navbar: NavbarComponent,
    pub hero: HeroComponent,
    pub page: PageComponent,
    pub watermark: WatermarkComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create the app for a `width` x `height` terminal
    pub fn new(config: Config, width: u16, height: u16) -> Result<App> {
        let year = Local::now().year();
        let layout = PageLayout::compute(width, height, year);
        let parallax = ParallaxSet::new(config.px_per_row)?;
        let scene = Scene::new(
            layout,
            parallax,
            config.contrast_switch(),
            config.contrast_sample_row as f64,
        );

        let mut scroll = SmoothScroll::new(config.smooth_scroll_lerp);
        scroll.set_limit(scene.layout().scroll_limit());

        let carousel = Carousel::new(
            SLIDES.iter().map(|slide| slide.lines.len()).collect(),
            config.slide_interval(),
        );

        Ok(App {
            loading: LoadingContext::new(),
            boot: BootSequence::new(config.boot_timings()),
            carousel,
            scroll,
            coalescer: FrameCoalescer::new(),
            scene,
            year,
            modals: ModalStack::new(),
            should_quit: false,
            splash: SplashComponent::new(),
            navbar: NavbarComponent::new(),
            hero: HeroComponent::new(),
            page: PageComponent::new(),
            watermark: WatermarkComponent::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
            config,
        })
    }

    /// Start every clock at `now`
    pub fn mount(&mut self, now: Instant) {
        self.boot.mount(now);
        self.carousel.mount(now);
        self.splash.mount(now);
        info!(slides = self.carousel.len(), "page mounted");
    }

    /// Apply `action` as of `now`
    pub fn update_at(&mut self, action: Action, now: Instant) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(%action, "update");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.tick(now),
            Action::Resize(width, height) => self.resize(width, height),
            Action::ForceQuit => {
                self.modals.clear();
                self.teardown();
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp => self.scroll_by(-(self.config.scroll_step as f64)),
            Action::ScrollDown => self.scroll_by(self.config.scroll_step as f64),
            Action::PageUp => self.scroll_by(-self.page_height()),
            Action::PageDown => self.scroll_by(self.page_height()),
            Action::ScrollTop => self.scroll_to(0.0, now),
            Action::ScrollBottom => self.scroll_to(self.scroll.limit(), now),
            Action::JumpTo(section) => {
                if matches!(self.modals.top(), Some(Modal::Menu { .. })) {
                    self.modals.pop();
                }
                if let Some(top) = self.scene.layout().section_top(section) {
                    debug!(%section, top, "jumping to section");
                    self.scroll_to(top, now);
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Carousel
            // ─────────────────────────────────────────────────────────────────
            Action::SelectSlide(index) => {
                self.carousel.select(index, now);
            }
            Action::NextSlide => {
                self.carousel.next(now);
            }
            Action::PrevSlide => {
                self.carousel.previous(now);
            }
            Action::HeroButton(index) => {
                if let Some((_, section)) = HERO_BUTTONS.get(index) {
                    self.scene.slide_in(*section, now);
                    return Ok(Some(Action::JumpTo(*section)));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(&Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::ToggleMenu => {
                if matches!(self.modals.top(), Some(Modal::Menu { .. })) {
                    self.modals.pop();
                } else {
                    self.modals.push(Modal::Menu { selected_index: 0 });
                }
            }
            Action::OpenHelp => {
                if matches!(self.modals.top(), Some(Modal::Help { .. })) {
                    self.modals.pop();
                } else {
                    self.modals.push(Modal::Help { scroll_offset: 0 });
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => match self.modals.top().cloned() {
                Some(Modal::QuitConfirm) => return Ok(Some(Action::ForceQuit)),
                Some(Modal::Menu { selected_index }) => {
                    self.modals.pop();
                    if let Some(item) = MENU.get(selected_index) {
                        return Ok(Some(Action::JumpTo(item.target)));
                    }
                }
                Some(Modal::Help { .. }) => {
                    self.modals.pop();
                }
                None => {}
            },
            Action::ModalUp => match self.modals.top_mut() {
                Some(Modal::Menu { selected_index }) => {
                    *selected_index = (*selected_index + MENU.len() - 1) % MENU.len();
                }
                Some(Modal::Help { scroll_offset }) => {
                    *scroll_offset = scroll_offset.saturating_sub(1);
                }
                _ => {}
            },
            Action::ModalDown => match self.modals.top_mut() {
                Some(Modal::Menu { selected_index }) => {
                    *selected_index = (*selected_index + 1) % MENU.len();
                }
                Some(Modal::Help { scroll_offset }) => {
                    *scroll_offset = scroll_offset.saturating_add(1);
                }
                _ => {}
            },
        }
        Ok(None)
    }

    /// Draw everything as of `now`, back to front
    pub fn draw_at(&mut self, frame: &mut Frame, area: Rect, now: Instant) -> Result<()> {
        let px_per_row = self.config.px_per_row;
        let content = content_entrance(self.loading.content_shown_at(), now);
        let scroll_y = self.scene.scroll_y() - content.dy / px_per_row;

        let ctx = PageRenderContext {
            scene: &self.scene,
            scroll_y,
            px_per_row,
            now,
        };
        self.page.draw_with(frame, area, &ctx)?;

        let hero = self
            .scene
            .blocks()
            .find(|(_, block)| block.kind == BlockKind::Hero)
            .map(|(_, block)| block.bounds);
        if let Some(bounds) = hero {
            if let Some(projection) = project(bounds, scroll_y, area) {
                let ctx = HeroRenderContext {
                    carousel: &self.carousel,
                    now,
                };
                self.hero
                    .draw_with(frame, projection, bounds.height as u16, &ctx)?;
            }
        }

        self.watermark
            .draw_with(frame, area, self.scene.watermark().frame(now), px_per_row)?;

        if content.opacity < 1.0 {
            veil(frame.buffer_mut(), area, NIGHT, 1.0 - content.opacity);
        }

        let ctx = NavbarRenderContext {
            shown_at: self.loading.nav_shown_at(),
            background: self.scene.background(),
            menu_open: matches!(self.modals.top(), Some(Modal::Menu { .. })),
            now,
        };
        self.navbar.draw_with(frame, area, &ctx)?;

        self.draw_modal(frame, area)?;

        self.splash.draw_with(frame, area, &self.loading, now)?;
        Ok(())
    }

    fn tick(&mut self, now: Instant) {
        if !self.boot.is_complete(&self.loading) {
            self.boot.advance(&mut self.loading, now);
        }
        self.carousel.advance(now);

        if self.scroll.step(now) {
            self.coalescer.request();
        }
        if self.coalescer.take() {
            self.scene.recompute(self.scroll.position(), now);
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        let layout = PageLayout::compute(width, height, self.year);
        self.scroll.set_limit(layout.scroll_limit());
        self.scene.relayout(layout);
        self.coalescer.request();
        debug!(width, height, limit = self.scroll.limit(), "relaid out");
    }

    fn scroll_by(&mut self, delta: f64) {
        self.scroll.scroll_by(delta);
        self.coalescer.request();
    }

    fn scroll_to(&mut self, position: f64, now: Instant) {
        self.scroll
            .scroll_to(position, now, JUMP_DURATION, Easing::ExpoOut);
        self.coalescer.request();
    }

    /// Rows moved by a page up/down
    fn page_height(&self) -> f64 {
        (self.scene.layout().viewport_height() - PAGE_OVERLAP).max(1.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.mount(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }
        if self.loading.state().splash_visible {
            return self.splash.handle_key_event(key);
        }
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::OpenQuitDialog)),
            KeyCode::Char('?') => return Ok(Some(Action::OpenHelp)),
            _ => {}
        }
        if let Some(action) = self.page.handle_key_event(key)? {
            return Ok(Some(action));
        }
        if let Some(action) = self.navbar.handle_key_event(key)? {
            return Ok(Some(action));
        }
        self.hero.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.loading.state().splash_visible {
            return Ok(None);
        }
        match self.modals.top() {
            Some(Modal::Menu { .. }) => return self.navbar.handle_mouse_event(mouse),
            Some(_) => return Ok(None),
            None => {}
        }

        if let Some(action) = self.navbar.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        if let Some(action) = self.hero.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        self.page.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        self.update_at(action, Instant::now())
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_at(frame, area, Instant::now())
    }

    fn teardown(&mut self) {
        self.boot.teardown();
        self.carousel.teardown();
        self.splash.teardown();
        let (requests, frames) = self.coalescer.stats();
        info!(requests, frames, "page torn down");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help { .. } => self.help_dialog.handle_key_event(key),
            Modal::Menu { .. } => {
                let action = match key.code {
                    KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
                    KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
                    KeyCode::Enter => Some(Action::ConfirmModal),
                    KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
                    _ => return self.navbar.handle_key_event(key),
                };
                Ok(action)
            }
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let background = self.scene.background();
        match self.modals.top_mut() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Menu { selected_index }) => {
                self.navbar
                    .draw_menu(frame, area, *selected_index, background)?;
            }
            Some(Modal::Help { scroll_offset }) => {
                self.help_dialog.draw_with(frame, area, scroll_offset)?;
            }
            None => {}
        }
        Ok(())
    }
}
