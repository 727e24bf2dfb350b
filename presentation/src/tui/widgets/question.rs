//! Question screen: one step of the wizard with its answer editor

use super::{variable_color, wrapped_height};
use crate::tui::state::{EMPTY_ANSWER_HINT, TuiState};
use equacao_domain::Question;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const HONESTY_HINT: &str = "Seja honesto e específico. Quanto mais detalhes, melhor o diagnóstico.";
const GENERAL_INFO: &str = "Cada pergunta mapeia uma variável da Equação da Procrastinação de \
                            Piers Steel. Com suas respostas, identificaremos qual variável está \
                            causando sua procrastinação e forneceremos ações concretas e \
                            personalizadas.";

pub struct QuestionWidget<'a> {
    state: &'a TuiState,
}

impl<'a> QuestionWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn info_line(question: &Question) -> Line<'static> {
        match question.key.variable() {
            Some(variable) => Line::from(vec![
                Span::styled("ⓘ ", Style::default().fg(Color::Cyan)),
                Span::raw("Esta pergunta mede "),
                Span::styled(
                    variable.name(),
                    Style::default()
                        .fg(variable_color(variable))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    ": {} ({})",
                    variable.description(),
                    variable.effect().label()
                )),
            ]),
            None => Line::from(vec![
                Span::styled("ⓘ ", Style::default().fg(Color::Cyan)),
                Span::styled(GENERAL_INFO, Style::default().fg(Color::Gray)),
            ]),
        }
    }

    fn buttons_line(&self) -> Line<'static> {
        let wizard = &self.state.wizard;
        let back_style = if wizard.can_retreat() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let next_label = if wizard.is_last_step() {
            " Gerar Diagnóstico ▶ "
        } else {
            " Próxima ▶ "
        };
        let next_style = if wizard.can_advance() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        };

        Line::from(vec![
            Span::styled("◀ Anterior", back_style),
            Span::styled(" Shift+Tab", Style::default().fg(Color::DarkGray)),
            Span::raw("    "),
            Span::styled(next_label, next_style),
            Span::styled(" Enter", Style::default().fg(Color::DarkGray)),
        ])
    }
}

impl<'a> Widget for QuestionWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(question) = self.state.wizard.current_question() else {
            return;
        };
        let area = area.inner(Margin::new(2, 1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // title
                Constraint::Length(2), // subtitle
                Constraint::Min(5),    // editor
                Constraint::Length(1), // hint
                Constraint::Length(1), // buttons
                Constraint::Length(1), // spacer
                Constraint::Length(3), // info
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            question.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            question.subtitle,
            Style::default().fg(Color::Gray),
        )))
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);

        let answer = self.state.wizard.current_answer();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Sua resposta ")
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(chunks[2]);
        block.render(chunks[2], buf);

        let lines = if answer.is_empty() {
            placeholder_lines(question.placeholder)
        } else {
            editor_lines(answer, self.state.cursor)
        };
        // Keep the cursor row visible
        let cursor_row = if answer.is_empty() {
            0
        } else {
            let before = editor_lines(answer.get(..self.state.cursor).unwrap_or(answer), usize::MAX);
            wrapped_height(&before, inner.width).saturating_sub(1)
        };
        let scroll = cursor_row.saturating_sub(inner.height.saturating_sub(1));
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(inner, buf);

        let hint = if answer.trim().is_empty() {
            let style = Style::default().fg(Color::Red);
            Line::from(vec![
                Span::styled("🔥 ", style),
                Span::styled(EMPTY_ANSWER_HINT, style),
            ])
        } else {
            Line::from(Span::styled(
                HONESTY_HINT,
                Style::default().fg(Color::DarkGray),
            ))
        };
        Paragraph::new(hint).render(chunks[3], buf);

        Paragraph::new(self.buttons_line()).render(chunks[4], buf);

        Paragraph::new(Self::info_line(question))
            .wrap(Wrap { trim: true })
            .render(chunks[6], buf);
    }
}

fn cursor_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

fn placeholder_lines(placeholder: &'static str) -> Vec<Line<'static>> {
    vec![Line::from(vec![
        Span::styled(" ", cursor_style()),
        Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ])]
}

/// Answer text split into lines, with the cell under `cursor` (a byte
/// offset) drawn reversed. `usize::MAX` draws no cursor.
fn editor_lines(text: &str, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut start = 0;
    for segment in text.split('\n') {
        let end = start + segment.len();
        if (start..=end).contains(&cursor) && segment.is_char_boundary(cursor - start) {
            let at = cursor - start;
            let (before, rest) = segment.split_at(at);
            let mut chars = rest.chars();
            let under = chars.next().map_or(" ".to_string(), |c| c.to_string());
            lines.push(Line::from(vec![
                Span::raw(before.to_string()),
                Span::styled(under, cursor_style()),
                Span::raw(chars.as_str().to_string()),
            ]));
        } else {
            lines.push(Line::from(segment.to_string()));
        }
        start = end + 1;
    }
    lines
}
