//! Help dialog component
//!
//! Displays every keyboard and mouse shortcut of the page.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::components::theme::{self, BRASS, MUTED_DARK, NIGHT, SNOW};
use crate::model::site::{MENU, SLIDES};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    /// Draw the dialog scrolled to `scroll_offset`, clamping it to the content
    pub fn draw_with(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        scroll_offset: &mut usize,
    ) -> Result<()> {
        let dialog_area = centered_popup(
            area,
            60.min(area.width.saturating_sub(4)),
            area.height.saturating_sub(4),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if *scroll_offset > max_scroll {
            *scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(
                        Style::default()
                            .fg(theme::rgb(BRASS))
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(theme::rgb(BRASS)))
                    .style(Style::default().bg(theme::rgb(NIGHT))),
            )
            .scroll((*scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(*scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ModalDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ModalUp),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.draw_with(frame, area, &mut 0)
    }
}

/// Build the help content with all shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(theme::rgb(BRASS))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(theme::rgb(MUTED_DARK)),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(theme::rgb(BRASS)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(theme::rgb(SNOW))),
        ]));
    };

    add_section(&mut lines, "Scrolling");
    add_shortcut(&mut lines, "j / ↓ / wheel", "Scroll down");
    add_shortcut(&mut lines, "k / ↑ / wheel", "Scroll up");
    add_shortcut(&mut lines, "Space / PgDn", "Down one screen");
    add_shortcut(&mut lines, "PgUp", "Up one screen");
    add_shortcut(&mut lines, "g / Home", "Back to the top");
    add_shortcut(&mut lines, "G / End", "Down to the footer");

    add_section(&mut lines, "Sections");
    for item in &MENU {
        add_shortcut(&mut lines, &item.key.to_string(), item.label);
    }
    add_shortcut(&mut lines, "m", "Open the menu");

    add_section(&mut lines, "Hero");
    add_shortcut(&mut lines, &format!("1 - {}", SLIDES.len()), "Show slide");
    add_shortcut(&mut lines, "h / ←", "Previous slide");
    add_shortcut(&mut lines, "l / →", "Next slide");
    add_shortcut(&mut lines, "p", "Performance + Intelligence");
    add_shortcut(&mut lines, "b", "Brand + Experience");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(theme::rgb(MUTED_DARK)),
    )));

    lines
}
