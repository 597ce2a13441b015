//! Splash screen component
//!
//! Full-screen preloader with a pulsing logo. It sits on top of the page
//! until the boot sequence dismisses it, then fades the page in from under
//! itself.

use crate::action::Action;
use crate::component::Component;
use crate::components::paint::veil;
use crate::components::theme::{self, SNOW, TEAL};
use crate::model::boot::LoadingContext;
use crate::motion::{Easing, KeyframeTween, Tween};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::{Duration, Instant};

const LOGO: &str = "SMARTOTELS";
const PULSE: Duration = Duration::from_millis(2500);
const EXIT: Duration = Duration::from_millis(800);

/// Splash screen component
pub struct SplashComponent {
    mounted_at: Option<Instant>,
    pulse: KeyframeTween,
    fade_in: Tween,
    exit: Tween,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            mounted_at: None,
            pulse: KeyframeTween::new(
                vec![0.9, 1.1, 1.0],
                vec![0.0, 0.6, 1.0],
                PULSE,
                Easing::EaseOut,
            ),
            fade_in: Tween::new(0.0, 1.0, PULSE).with_easing(Easing::EaseOut),
            exit: Tween::new(1.0, 0.0, EXIT).with_easing(Easing::EaseInOut),
        }
    }

    pub fn mount(&mut self, now: Instant) {
        self.mounted_at.get_or_insert(now);
    }

    /// Logo scale and opacity at `now`
    pub fn logo(&self, now: Instant) -> (f64, f64) {
        let elapsed = self
            .mounted_at
            .map(|at| now.saturating_duration_since(at))
            .unwrap_or_default();
        (self.pulse.value(elapsed), self.fade_in.value(elapsed))
    }

    /// Opacity of the whole overlay; 0 once the exit fade has finished
    pub fn overlay_opacity(&self, ctx: &LoadingContext, now: Instant) -> f64 {
        match ctx.splash_hidden_at() {
            None => 1.0,
            Some(hidden_at) => self.exit.value(now.saturating_duration_since(hidden_at)),
        }
    }

    /// Draw the overlay on top of whatever is already in the frame
    pub fn draw_with(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &LoadingContext,
        now: Instant,
    ) -> Result<()> {
        let opacity = self.overlay_opacity(ctx, now);
        if opacity <= 0.0 {
            return Ok(());
        }

        let (scale, logo_opacity) = self.logo(now);
        veil(frame.buffer_mut(), area, TEAL, opacity);

        let ink = theme::mix(TEAL, SNOW, logo_opacity * opacity);
        let logo = spaced(LOGO, letter_spacing(scale));
        let width = logo.chars().count() as u16;
        let rule_width = ((width as f64) * scale).round() as u16;

        let y = area.y + area.height / 2;
        let logo_rect = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            y.saturating_sub(1),
            width.min(area.width),
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                logo,
                Style::default()
                    .fg(theme::rgb(ink))
                    .add_modifier(Modifier::BOLD),
            ))),
            logo_rect,
        );

        if area.height > 2 {
            let rule_rect = Rect::new(
                area.x + area.width.saturating_sub(rule_width) / 2,
                y + 1,
                rule_width.min(area.width),
                1,
            );
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "─".repeat(rule_rect.width as usize),
                    Style::default().fg(theme::rgb(theme::mix(TEAL, ink, 0.5))),
                )),
                rule_rect,
            );
        }
        Ok(())
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.mount(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // The splash cannot be skipped, only quit
        let action = match key.code {
            KeyCode::Char('q') => Some(Action::ForceQuit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = LoadingContext::new();
        self.draw_with(frame, area, &ctx, Instant::now())
    }
}

/// Gap between logo letters for a pulse scale of 0.9..1.1
fn letter_spacing(scale: f64) -> usize {
    ((scale - 0.9) * 10.0).round().clamp(0.0, 2.0) as usize
}

fn spaced(text: &str, gap: usize) -> String {
    let separator = " ".repeat(gap);
    text.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(&separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_pulse_keyframes() {
        let start = Instant::now();
        let mut splash = SplashComponent::new();
        splash.mount(start);

        let (scale, opacity) = splash.logo(start);
        assert!((scale - 0.9).abs() < 1e-9);
        assert_eq!(opacity, 0.0);

        let (scale, opacity) = splash.logo(start + ms(3000));
        assert!((scale - 1.0).abs() < 1e-9);
        assert_eq!(opacity, 1.0);
    }

    #[test]
    fn test_overlay_fades_after_dismissal() {
        let start = Instant::now();
        let splash = SplashComponent::new();
        let mut ctx = LoadingContext::new();
        assert_eq!(splash.overlay_opacity(&ctx, start), 1.0);

        ctx.dismiss_splash(start);
        assert!(splash.overlay_opacity(&ctx, start + ms(400)) < 1.0);
        assert_eq!(splash.overlay_opacity(&ctx, start + ms(800)), 0.0);
    }

    #[test]
    fn test_exit_fade_eases_in_and_out() {
        let start = Instant::now();
        let splash = SplashComponent::new();
        let mut ctx = LoadingContext::new();
        ctx.dismiss_splash(start);

        assert!(splash.overlay_opacity(&ctx, start + ms(200)) > 0.85);
        assert!((splash.overlay_opacity(&ctx, start + ms(400)) - 0.5).abs() < 1e-3);
        assert!(splash.overlay_opacity(&ctx, start + ms(600)) < 0.15);
    }

    #[test]
    fn test_any_key_does_not_skip() {
        let mut splash = SplashComponent::new();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(splash.handle_key_event(enter).unwrap(), None);
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(splash.handle_key_event(quit).unwrap(), Some(Action::ForceQuit));
    }

    #[test]
    fn test_letter_spacing_follows_scale() {
        assert_eq!(letter_spacing(0.9), 0);
        assert_eq!(letter_spacing(1.0), 1);
        assert_eq!(letter_spacing(1.1), 2);
        assert_eq!(spaced("ABC", 1), "A B C");
    }

    #[test]
    fn test_renders_logo() {
        let start = Instant::now();
        let mut splash = SplashComponent::new();
        splash.mount(start);
        let ctx = LoadingContext::new();

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                splash
                    .draw_with(frame, area, &ctx, start + ms(2500))
                    .unwrap();
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(content.contains("S M A R T O T E L S"));
    }
}
