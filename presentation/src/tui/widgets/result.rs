//! Result screen: rendered diagnosis or the failure message

use super::max_scroll;
use crate::tui::state::TuiState;
use equacao_domain::WizardPhase;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultWidget<'a> {
    state: &'a TuiState,
}

struct ResultLayout {
    back: Rect,
    title: Rect,
    subtitle: Rect,
    content: Rect,
    footer: Rect,
}

impl<'a> ResultWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn layout(area: Rect) -> ResultLayout {
        let area = area.inner(Margin::new(2, 0));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // back
                Constraint::Length(1), // title
                Constraint::Length(1), // subtitle
                Constraint::Min(3),    // content
                Constraint::Length(1), // footer
            ])
            .split(area);
        ResultLayout {
            back: chunks[0],
            title: chunks[1],
            subtitle: chunks[2],
            content: chunks[3],
            footer: chunks[4],
        }
    }

    /// Largest scroll offset for the diagnosis in a body area
    pub fn max_scroll(lines: &[Line<'static>], area: Rect) -> u16 {
        let content = Self::layout(area).content;
        max_scroll(lines, Block::default().borders(Borders::ALL).inner(content))
    }
}

impl<'a> Widget for ResultWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Self::layout(area);

        Paragraph::new(Line::from(vec![
            Span::styled("← Voltar ao Início", Style::default().fg(Color::Gray)),
            Span::styled(" b", Style::default().fg(Color::DarkGray)),
        ]))
        .render(layout.back, buf);

        Paragraph::new(Line::from(Span::styled(
            "Seu Diagnóstico Científico",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .render(layout.title, buf);

        Paragraph::new(Line::from(Span::styled(
            "Aqui está a análise da sua procrastinação e um plano de ação concreto.",
            Style::default().fg(Color::Gray),
        )))
        .render(layout.subtitle, buf);

        match self.state.wizard.phase() {
            WizardPhase::Failed { message } => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .title(" Erro ")
                    .border_style(Style::default().fg(Color::Red));
                Paragraph::new(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Red),
                )))
                .block(block)
                .wrap(Wrap { trim: true })
                .render(layout.content, buf);
            }
            _ => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray));
                Paragraph::new(self.state.result_lines.clone())
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((self.state.result_scroll, 0))
                    .render(layout.content, buf);
            }
        }

        Paragraph::new(Line::from(vec![
            Span::styled(
                " Começar Novo Diagnóstico ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" n", Style::default().fg(Color::DarkGray)),
        ]))
        .render(layout.footer, buf);
    }
}
