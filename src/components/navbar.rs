//! Navigation bar component
//!
//! Fixed over the top of the page. Slides down once the boot sequence
//! reveals it and recolours itself against whatever section is underneath.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::hit;
use crate::components::theme::{self, BRASS, INK, PAPER};
use crate::model::contrast::Background;
use crate::model::site::{SectionId, MENU};
use crate::motion::easing::SOFT_LANDING;
use crate::motion::Tween;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const ENTRANCE: Duration = Duration::from_millis(800);

/// Rows the bar occupies, including padding
pub const HEIGHT: u16 = 3;

/// Narrower terminals get the hamburger instead of inline items
const INLINE_MENU_MIN_WIDTH: u16 = 72;

/// What the navbar needs from the rest of the app to draw itself
pub struct NavbarRenderContext {
    /// When the boot sequence revealed the navbar
    pub shown_at: Option<Instant>,
    pub background: Background,
    pub menu_open: bool,
    pub now: Instant,
}

/// Navigation bar component
#[derive(Default)]
pub struct NavbarComponent {
    /// Clickable menu entries from the last draw
    targets: Vec<(Rect, SectionId)>,
    toggle: Option<Rect>,
}

impl NavbarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertical offset in rows and opacity of the entrance at `now`
    pub fn entrance(shown_at: Option<Instant>, now: Instant) -> (i32, f64) {
        let Some(shown_at) = shown_at else {
            return (-(HEIGHT as i32), 0.0);
        };
        let p = Tween::new(0.0, 1.0, ENTRANCE)
            .with_easing(SOFT_LANDING)
            .value(now.saturating_duration_since(shown_at));
        let offset = (-(HEIGHT as f64) * (1.0 - p)).round() as i32;
        (offset, p)
    }

    pub fn draw_with(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &NavbarRenderContext,
    ) -> Result<()> {
        self.targets.clear();
        self.toggle = None;

        let (offset, opacity) = Self::entrance(ctx.shown_at, ctx.now);
        let row = area.y as i32 + 1 + offset;
        if opacity <= 0.0 || row < area.y as i32 || row >= area.bottom() as i32 {
            return Ok(());
        }
        let row = row as u16;

        let surface = theme::surface(ctx.background);
        let ink = theme::ink(ctx.background);

        // Logo
        let logo = Line::from(vec![
            Span::styled(
                "SMART",
                Style::default()
                    .fg(theme::fade(ink, surface, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "OTELS",
                Style::default()
                    .fg(theme::fade(BRASS, surface, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(logo),
            Rect::new(area.x + 2, row, 10.min(area.width.saturating_sub(2)), 1),
        );

        if area.width >= INLINE_MENU_MIN_WIDTH {
            // Pills, right-aligned
            let pill_style = Style::default()
                .fg(theme::fade(INK, surface, opacity))
                .bg(theme::fade(PAPER, surface, opacity * 0.8))
                .add_modifier(Modifier::BOLD);
            let labels: Vec<String> = MENU
                .iter()
                .map(|item| format!(" {} ", item.label.to_uppercase()))
                .collect();
            let total: u16 = labels.iter().map(|l| l.width() as u16 + 1).sum();
            let mut x = (area.x + area.width).saturating_sub(total + 1);
            for (item, label) in MENU.iter().zip(labels) {
                let rect = Rect::new(x, row, label.width() as u16, 1);
                frame.render_widget(Paragraph::new(Span::styled(label, pill_style)), rect);
                self.targets.push((rect, item.target));
                x += rect.width + 1;
            }
        } else {
            let icon = if ctx.menu_open { "✕" } else { "☰" };
            let rect = Rect::new((area.x + area.width).saturating_sub(3), row, 1, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    icon,
                    Style::default().fg(theme::fade(ink, surface, opacity)),
                )),
                rect,
            );
            self.toggle = Some(rect);
        }
        Ok(())
    }

    /// Dropdown menu under the bar; `selected` is highlighted
    pub fn draw_menu(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        selected: usize,
        background: Background,
    ) -> Result<()> {
        let width = MENU
            .iter()
            .map(|item| item.label.width() as u16 + 8)
            .max()
            .unwrap_or(20)
            .min(area.width);
        let height = (MENU.len() as u16 + 2).min(area.height.saturating_sub(HEIGHT));
        let menu_area = Rect::new(
            (area.x + area.width).saturating_sub(width + 1),
            area.y + HEIGHT,
            width,
            height,
        );

        let surface = theme::surface(background);
        let ink = theme::ink(background);

        let lines: Vec<Line> = MENU
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == selected {
                    Style::default()
                        .fg(theme::rgb(surface))
                        .bg(theme::rgb(ink))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::rgb(ink))
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", item.key), Style::default().fg(theme::rgb(BRASS))),
                    Span::styled(format!(" {} ", item.label.to_uppercase()), style),
                ])
            })
            .collect();

        frame.render_widget(Clear, menu_area);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::rgb(BRASS)))
                    .style(Style::default().bg(theme::rgb(surface))),
            ),
            menu_area,
        );

        let inner = menu_area.inner(ratatui::layout::Margin {
            vertical: 1,
            horizontal: 1,
        });
        for (i, item) in MENU.iter().enumerate() {
            let y = inner.y + i as u16;
            if y < inner.bottom() {
                self.targets
                    .push((Rect::new(inner.x, y, inner.width, 1), item.target));
            }
        }
        Ok(())
    }
}

impl Component for NavbarComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('m') => Some(Action::ToggleMenu),
            KeyCode::Char(c) => MENU
                .iter()
                .find(|item| item.key == c)
                .map(|item| Action::JumpTo(item.target)),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if let Some((_, target)) = self
            .targets
            .iter()
            .rev()
            .find(|(rect, _)| hit(*rect, mouse.column, mouse.row))
        {
            return Ok(Some(Action::JumpTo(*target)));
        }
        if let Some(toggle) = self.toggle {
            if hit(toggle, mouse.column, mouse.row) {
                return Ok(Some(Action::ToggleMenu));
            }
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_with which takes the scroll context
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(width: u16, ctx: &NavbarRenderContext) -> (NavbarComponent, String) {
        let mut navbar = NavbarComponent::new();
        let mut terminal = Terminal::new(TestBackend::new(width, 10)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                navbar.draw_with(frame, area, ctx).unwrap();
            })
            .unwrap();
        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        (navbar, content)
    }

    fn ctx(shown_at: Option<Instant>, now: Instant) -> NavbarRenderContext {
        NavbarRenderContext {
            shown_at,
            background: Background::Dark,
            menu_open: false,
            now,
        }
    }

    #[test]
    fn test_hidden_until_revealed() {
        let now = Instant::now();
        let (_, content) = render(100, &ctx(None, now));
        assert!(!content.contains("SMART"));
    }

    #[test]
    fn test_entrance_slides_down() {
        let now = Instant::now();
        assert_eq!(NavbarComponent::entrance(Some(now), now), (-3, 0.0));
        let (offset, opacity) =
            NavbarComponent::entrance(Some(now), now + Duration::from_secs(1));
        assert_eq!(offset, 0);
        assert_eq!(opacity, 1.0);
    }

    #[test]
    fn test_wide_terminal_shows_inline_items() {
        let now = Instant::now();
        let (_, content) = render(100, &ctx(Some(now - ENTRANCE), now));
        assert!(content.contains("SMARTOTELS"));
        assert!(content.contains("WHO WE ARE"));
        assert!(!content.contains("THE VAULT"));
    }

    #[test]
    fn test_narrow_terminal_shows_hamburger() {
        let now = Instant::now();
        let (mut navbar, content) = render(40, &ctx(Some(now - ENTRANCE), now));
        assert!(content.contains("☰"));

        let toggle = navbar.toggle.unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: toggle.x,
            row: toggle.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            navbar.handle_mouse_event(click).unwrap(),
            Some(Action::ToggleMenu)
        );
    }

    #[test]
    fn test_clicking_item_jumps() {
        let now = Instant::now();
        let (mut navbar, _) = render(100, &ctx(Some(now - ENTRANCE), now));
        let (rect, target) = navbar.targets[1];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(target, SectionId::WhatWeDo);
        assert_eq!(
            navbar.handle_mouse_event(click).unwrap(),
            Some(Action::JumpTo(SectionId::WhatWeDo))
        );
    }

    #[test]
    fn test_menu_keys() {
        let mut navbar = NavbarComponent::new();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(
            navbar.handle_key_event(key('c')).unwrap(),
            Some(Action::JumpTo(SectionId::Footer))
        );
        assert_eq!(
            navbar.handle_key_event(key('m')).unwrap(),
            Some(Action::ToggleMenu)
        );
        assert_eq!(navbar.handle_key_event(key('z')).unwrap(), None);
    }
}
