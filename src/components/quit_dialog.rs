//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::components::theme::{self, BRASS, MUTED_DARK, NIGHT, SNOW};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 40, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Leave Smartotels?",
                Style::default()
                    .fg(theme::rgb(SNOW))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default()
                        .fg(theme::rgb(BRASS))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Quit  ", Style::default().fg(theme::rgb(SNOW))),
                Span::styled(
                    " n/Esc ",
                    Style::default()
                        .fg(theme::rgb(MUTED_DARK))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Stay", Style::default().fg(theme::rgb(SNOW))),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::rgb(BRASS)))
                    .style(Style::default().bg(theme::rgb(NIGHT)))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(theme::rgb(BRASS))
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
