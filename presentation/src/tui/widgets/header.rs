//! Header widget: brand, current screen context and model

use crate::tui::keymap::Screen;
use crate::tui::state::TuiState;
use equacao_domain::WizardPhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn context(&self) -> Vec<Span<'static>> {
        let wizard = &self.state.wizard;
        match self.state.screen() {
            Screen::Landing => vec![Span::styled(
                "Baseado em ciência",
                Style::default().fg(Color::Gray),
            )],
            Screen::Question => {
                let step = wizard.step().unwrap_or(0);
                let total = wizard.question_count();
                let dots: String = (0..total)
                    .map(|i| if i <= step { '●' } else { '○' })
                    .collect();
                vec![
                    Span::styled(
                        format!("{}/{} ", step + 1, total),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(dots, Style::default().fg(Color::Magenta)),
                ]
            }
            Screen::Submitting => vec![Span::styled(
                "Analisando...",
                Style::default().fg(Color::Yellow),
            )],
            Screen::Result => match wizard.phase() {
                WizardPhase::Failed { .. } => {
                    vec![Span::styled("Erro", Style::default().fg(Color::Red))]
                }
                _ => vec![Span::styled(
                    "Diagnóstico pronto",
                    Style::default().fg(Color::Green),
                )],
            },
        }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                "EquaçãoPro",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
        ];
        spans.extend(self.context());
        if !self.state.model_name.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.state.model_name.clone(),
                Style::default().fg(Color::White),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Equação da Procrastinação ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
