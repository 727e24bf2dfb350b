//! Loading screen shown while the diagnosis is being generated

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingWidget<'a> {
    state: &'a TuiState,
}

impl<'a> LoadingWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for LoadingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        let frame = SPINNER[self.state.spinner_frame % SPINNER.len()];
        let mut lines = vec![
            Line::from(Span::styled(
                frame,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Analisando suas respostas...",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "O assistente está aplicando a Equação da Procrastinação ao seu caso.",
                Style::default().fg(Color::Gray),
            )),
        ];
        if !self.state.model_name.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("Modelo: {}", self.state.model_name),
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(center, buf);
    }
}
