//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex): landing | question | loading | result
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod help;
pub mod landing;
pub mod loading;
pub mod question;
pub mod result;
pub mod status_bar;

use equacao_domain::EquationVariable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Paragraph, Wrap},
};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }

    /// Create a centered overlay rect (for modals)
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

/// Accent color of each equation variable, shared by every screen
pub fn variable_color(variable: EquationVariable) -> Color {
    match variable {
        EquationVariable::Impulsividade => Color::Red,
        EquationVariable::Expectativa => Color::Green,
        EquationVariable::Valor => Color::Yellow,
        EquationVariable::Tempo => Color::Blue,
    }
}

/// Rows `lines` occupy when wrapped to `width`
pub(crate) fn wrapped_height(lines: &[Line<'static>], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let count = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(count).unwrap_or(u16::MAX)
}

/// Largest useful scroll offset for `lines` shown in `area`
pub(crate) fn max_scroll(lines: &[Line<'static>], area: Rect) -> u16 {
    wrapped_height(lines, area.width).saturating_sub(area.height)
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::buffer::Buffer;

    /// All symbols of a buffer, row by row
    pub fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
