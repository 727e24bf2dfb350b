//! Status bar widget: screen indicator + key hints + flash messages

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let screen = self.state.screen();

        // Left: screen indicator
        let indicator = screen.indicator();
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(screen.color())
            .add_modifier(Modifier::BOLD);
        let indicator_line = Line::from(Span::styled(format!(" {} ", indicator), indicator_style));
        let indicator_width = indicator.chars().count() as u16 + 2;
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Right: flash message, else key hints
        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None if self.state.show_hints => screen.hints().to_string(),
            None => return,
        };
        let right_style = if self.state.flash_message.is_some() {
            Style::default().fg(Color::Yellow).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(right_text, right_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::keymap::Screen;
    use crate::tui::widgets::test_util::buffer_text;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_indicator_and_hints() {
        let state = TuiState::new();
        let text = render(&state);
        assert!(text.contains("INÍCIO"));
        assert!(text.contains(Screen::Landing.hints()));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new();
        state.set_flash("Escreva algo");
        let text = render(&state);
        assert!(text.contains("Escreva algo"));
        assert!(!text.contains("começar"));
    }

    #[test]
    fn test_hints_can_be_hidden() {
        let mut state = TuiState::new();
        state.show_hints = false;
        let text = render(&state);
        assert!(text.contains("INÍCIO"));
        assert!(!text.contains("começar"));
    }
}
