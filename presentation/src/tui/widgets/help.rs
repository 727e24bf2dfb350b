//! Help overlay widget

use crate::tui::keymap::Screen;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Widget for rendering help overlay
pub struct HelpWidget {
    screen: Screen,
}

impl HelpWidget {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn key(key: &'static str, description: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
            Span::raw(description),
        ])
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn build_help_text(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Self::section("Atalhos de teclado"), Line::from("")];

        match self.screen {
            Screen::Landing => {
                lines.push(Self::key("Enter / s", "Começar diagnóstico"));
                lines.push(Self::key("c", "Ir para \"Como Funciona\""));
                lines.push(Self::key("j / k", "Rolar para baixo / cima"));
                lines.push(Self::key("g / G", "Topo / fim"));
                lines.push(Self::key("q", "Sair"));
            }
            Screen::Question => {
                lines.push(Self::key("Enter", "Próxima pergunta / gerar diagnóstico"));
                lines.push(Self::key("Alt+Enter", "Nova linha na resposta"));
                lines.push(Self::key("Shift+Tab", "Pergunta anterior (também Ctrl+P)"));
                lines.push(Self::key("← → Home End", "Mover o cursor"));
                lines.push(Self::key("Esc", "Voltar ao início"));
            }
            Screen::Submitting => {
                lines.push(Self::key("Ctrl+C / q", "Sair"));
            }
            Screen::Result => {
                lines.push(Self::key("n / Enter", "Começar novo diagnóstico"));
                lines.push(Self::key("b / Esc", "Voltar ao início"));
                lines.push(Self::key("j / k", "Rolar para baixo / cima"));
                lines.push(Self::key("q", "Sair"));
            }
        }

        lines.push(Line::from(""));
        lines.push(Self::key("F1", "Mostrar / esconder esta ajuda"));
        lines.push(Self::key("Ctrl+C", "Sair"));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Pressione ?, F1 ou Esc para fechar",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Ajuda ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(self.build_help_text())
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
