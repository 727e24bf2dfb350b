//! Landing page: the equation, its variables and the four-step method

use super::{max_scroll, variable_color, wrapped_height};
use crate::tui::state::TuiState;
use equacao_domain::{EquationVariable, ResponseSection};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct LandingWidget<'a> {
    state: &'a TuiState,
}

impl<'a> LandingWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn content_area(area: Rect) -> Rect {
        area.inner(Margin::new(2, 0))
    }

    /// (max scroll, row of the "Como Funciona" heading) for a body area
    pub fn metrics(area: Rect) -> (u16, u16) {
        let content = Self::content_area(area);
        let (lines, anchor) = landing_lines();
        let anchor_row = wrapped_height(&lines[..anchor], content.width);
        (max_scroll(&lines, content), anchor_row)
    }
}

impl<'a> Widget for LandingWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (lines, _) = landing_lines();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.state.landing_scroll, 0))
            .render(Self::content_area(area), buf);
    }
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn dim(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

/// The equation with each variable in its accent color
pub fn equation_line() -> Line<'static> {
    let var = |v: EquationVariable| {
        Span::styled(
            v.name(),
            Style::default()
                .fg(variable_color(v))
                .add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        Span::styled(
            "Procrastinação",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" = "),
        var(EquationVariable::Impulsividade),
        Span::raw(" ÷ ["),
        var(EquationVariable::Expectativa),
        Span::raw(" × "),
        var(EquationVariable::Valor),
        Span::raw(" × (1 ÷ "),
        var(EquationVariable::Tempo),
        Span::raw(")]"),
    ])
}

/// Landing text and the index of the "Como Funciona" heading line
pub fn landing_lines() -> (Vec<Line<'static>>, usize) {
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("Supere a ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "Procrastinação",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        dim("A Equação da Procrastinação"),
        equation_line(),
        Line::default(),
        Line::from(
            "Um assistente científico que diagnostica e resolve seu problema de \
             procrastinação usando dados concretos, não motivação genérica.",
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " Começar Diagnóstico → ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Enter", Style::default().fg(Color::DarkGray)),
            Span::raw("    "),
            Span::styled(" Como Funciona ", Style::default().fg(Color::Cyan)),
            Span::styled(" c", Style::default().fg(Color::DarkGray)),
        ]),
        Line::default(),
    ];

    let check = Style::default().fg(Color::Green);
    lines.push(Line::from(vec![
        Span::styled("✓ ", check),
        Span::raw("Método científico validado   "),
        Span::styled("✓ ", check),
        Span::raw("Sem jargão motivacional   "),
        Span::styled("✓ ", check),
        Span::raw("Ações práticas e mensuráveis"),
    ]));
    lines.push(Line::default());

    lines.push(heading("Entenda as Variáveis"));
    lines.push(dim(
        "A procrastinação não é preguiça. É uma equação matemática que você pode controlar.",
    ));
    lines.push(Line::default());

    for variable in EquationVariable::ALL {
        let color = variable_color(variable);
        lines.push(Line::from(Span::styled(
            format!("● {}", variable.name()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  {}", variable.description())));
        lines.push(Line::from(Span::styled(
            format!("  {}", variable.effect().label()),
            Style::default().fg(color),
        )));
        lines.push(Line::default());
    }

    lines.push(Line::from(vec![
        Span::styled("A chave: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(
            "Aumentar Expectativa e Valor, reduzir Impulsividade, e criar urgência \
             saudável diminuindo o Tempo percebido.",
        ),
    ]));
    lines.push(Line::default());

    let anchor = lines.len();
    lines.push(heading("Como Funciona"));
    lines.push(dim(
        "Quatro passos baseados em ciência comportamental, não em motivação superficial.",
    ));
    lines.push(Line::default());

    for (i, section) in ResponseSection::ALL.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:02}  ", i + 1),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(section.title(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(format!("    {}", section.summary())));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "\"A procrastinação é uma equação. Mude as variáveis e você muda o resultado.\"",
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(dim("— Piers Steel, PhD"));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::styled("EquaçãoPro", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" | Baseado na pesquisa científica de Piers Steel"),
    ]));
    lines.push(dim(
        "© 2024 EquaçãoPro Assistant. MVP 1.0 - Diagnóstico Científico de Procrastinação.",
    ));

    (lines, anchor)
}
