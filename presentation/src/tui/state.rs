//! TUI state
//!
//! Owns the root view selector and the wizard of the current diagnostic
//! run, plus presentation-only details: answer cursor, scroll offsets,
//! help overlay, flash message and spinner frame.

use super::event::TuiCommand;
use super::html_view::html_to_lines;
use super::keymap::{KeyAction, Screen};
use equacao_application::UiEvent;
use equacao_domain::{AnswerSet, Advance, Wizard, WizardPhase};
use ratatui::text::Line;
use std::time::{Duration, Instant};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: u16 = 10;

pub const EMPTY_ANSWER_HINT: &str = "Escreva pelo menos uma frase completa para continuar.";

/// Which top-level screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Diagnostic,
}

/// Scroll bounds measured against the current terminal size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub landing_max: u16,
    pub result_max: u16,
    /// Row of the "Como Funciona" heading in the wrapped landing text
    pub how_it_works: u16,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            landing_max: u16::MAX,
            result_max: u16::MAX,
            how_it_works: 0,
        }
    }
}

/// Complete TUI state
pub struct TuiState {
    pub view: View,
    pub wizard: Wizard,
    /// Byte offset of the editing cursor in the current answer
    pub cursor: usize,
    pub landing_scroll: u16,
    pub result_scroll: u16,
    pub metrics: ScrollMetrics,
    /// Styled lines of the successful diagnosis (converted once per result)
    pub result_lines: Vec<Line<'static>>,
    pub model_name: String,
    pub show_help: bool,
    pub show_hints: bool,
    pub flash_message: Option<(String, Instant)>,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            view: View::Landing,
            wizard: Wizard::new(),
            cursor: 0,
            landing_scroll: 0,
            result_scroll: 0,
            metrics: ScrollMetrics::default(),
            result_lines: Vec::new(),
            model_name: String::new(),
            show_help: false,
            show_hints: true,
            flash_message: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen derived from the view and the wizard phase
    pub fn screen(&self) -> Screen {
        match self.view {
            View::Landing => Screen::Landing,
            View::Diagnostic => match self.wizard.phase() {
                WizardPhase::Collecting { .. } => Screen::Question,
                WizardPhase::Submitting => Screen::Submitting,
                WizardPhase::Succeeded(_) | WizardPhase::Failed { .. } => Screen::Result,
            },
        }
    }

    /// Apply a key action. Returns the command to send to the controller, if any.
    pub fn apply(&mut self, action: KeyAction) -> Option<TuiCommand> {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleHelp => self.show_help = !self.show_help,

            KeyAction::StartDiagnostic => self.start_diagnostic(),
            KeyAction::JumpToHowItWorks => {
                self.landing_scroll = self.metrics.how_it_works.min(self.metrics.landing_max);
            }

            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::PageUp => self.scroll_by(-(PAGE_SIZE as i32)),
            KeyAction::PageDown => self.scroll_by(PAGE_SIZE as i32),
            KeyAction::ScrollToTop => self.scroll_by(i32::MIN),
            KeyAction::ScrollToBottom => self.scroll_by(i32::MAX),

            KeyAction::InsertChar(c) => self.insert_char(c),
            KeyAction::InsertNewline => self.insert_char('\n'),
            KeyAction::DeleteChar => self.delete_char(),
            KeyAction::DeleteCharForward => self.delete_char_forward(),
            KeyAction::CursorLeft => self.cursor_left(),
            KeyAction::CursorRight => self.cursor_right(),
            KeyAction::CursorHome => self.cursor_home(),
            KeyAction::CursorEnd => self.cursor_end(),

            KeyAction::Advance => return self.advance().map(TuiCommand::Submit),
            KeyAction::Back => self.retreat(),
            KeyAction::BackToLanding => self.back_to_landing(),
            KeyAction::Restart => self.restart(),
        }
        None
    }

    /// Apply an event coming back from the controller task
    pub fn apply_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::DiagnosisStarted => {
                self.spinner_frame = 0;
            }
            UiEvent::DiagnosisReady(diagnosis) => {
                let lines = html_to_lines(diagnosis.html());
                if self.wizard.complete(Ok(diagnosis)) {
                    self.result_lines = lines;
                    self.result_scroll = 0;
                }
            }
            UiEvent::DiagnosisFailed { message } => {
                if self.wizard.complete(Err(message)) {
                    self.result_lines.clear();
                    self.result_scroll = 0;
                }
            }
        }
    }

    // ==================== View navigation ====================

    /// Enter the diagnostic view with a fresh wizard
    pub fn start_diagnostic(&mut self) {
        self.view = View::Diagnostic;
        self.wizard = Wizard::new();
        self.cursor = 0;
        self.result_lines.clear();
        self.result_scroll = 0;
    }

    /// Back to the landing page (refused while a submission is in flight)
    pub fn back_to_landing(&mut self) {
        if self.wizard.phase().is_submitting() {
            return;
        }
        self.view = View::Landing;
    }

    // ==================== Wizard ====================

    /// Advance the wizard; `Some(answers)` exactly once per submission
    pub fn advance(&mut self) -> Option<AnswerSet> {
        match self.wizard.advance() {
            Advance::Moved { .. } => {
                self.cursor = self.wizard.current_answer().len();
                None
            }
            Advance::Submit(answers) => Some(answers),
            Advance::Ignored => {
                if self.screen() == Screen::Question {
                    self.set_flash(EMPTY_ANSWER_HINT);
                }
                None
            }
        }
    }

    pub fn retreat(&mut self) {
        if self.wizard.retreat() {
            self.cursor = self.wizard.current_answer().len();
        }
    }

    pub fn restart(&mut self) {
        if self.wizard.restart() {
            self.cursor = 0;
            self.result_lines.clear();
            self.result_scroll = 0;
        }
    }

    // ==================== Answer editing ====================

    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(buffer) = self.wizard.answer_buffer_mut() {
            let at = floor_boundary(buffer, cursor);
            buffer.insert(at, c);
            self.cursor = at + c.len_utf8();
        }
    }

    /// Insert pasted text; CRLF is normalized to LF
    pub fn insert_str(&mut self, text: &str) {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let cursor = self.cursor;
        if let Some(buffer) = self.wizard.answer_buffer_mut() {
            let at = floor_boundary(buffer, cursor);
            buffer.insert_str(at, &text);
            self.cursor = at + text.len();
        }
    }

    pub fn delete_char(&mut self) {
        let cursor = self.cursor;
        if let Some(buffer) = self.wizard.answer_buffer_mut() {
            let at = floor_boundary(buffer, cursor);
            if let Some((prev, _)) = buffer[..at].char_indices().next_back() {
                buffer.remove(prev);
                self.cursor = prev;
            }
        }
    }

    pub fn delete_char_forward(&mut self) {
        let cursor = self.cursor;
        if let Some(buffer) = self.wizard.answer_buffer_mut() {
            let at = floor_boundary(buffer, cursor);
            if at < buffer.len() {
                buffer.remove(at);
            }
        }
    }

    pub fn cursor_left(&mut self) {
        let answer = self.wizard.current_answer();
        let at = floor_boundary(answer, self.cursor);
        self.cursor = answer[..at]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
    }

    pub fn cursor_right(&mut self) {
        let answer = self.wizard.current_answer();
        let at = floor_boundary(answer, self.cursor);
        self.cursor = answer[at..]
            .chars()
            .next()
            .map_or(at, |c| at + c.len_utf8());
    }

    /// Start of the current line
    pub fn cursor_home(&mut self) {
        let answer = self.wizard.current_answer();
        let at = floor_boundary(answer, self.cursor);
        self.cursor = answer[..at].rfind('\n').map_or(0, |i| i + 1);
    }

    /// End of the current line
    pub fn cursor_end(&mut self) {
        let answer = self.wizard.current_answer();
        let at = floor_boundary(answer, self.cursor);
        self.cursor = answer[at..].find('\n').map_or(answer.len(), |i| at + i);
    }

    // ==================== Scrolling ====================

    fn scroll_by(&mut self, delta: i32) {
        let (offset, max) = match self.screen() {
            Screen::Landing => (&mut self.landing_scroll, self.metrics.landing_max),
            Screen::Result => (&mut self.result_scroll, self.metrics.result_max),
            Screen::Question | Screen::Submitting => return,
        };
        let next = (*offset as i64 + delta as i64).clamp(0, max as i64);
        *offset = next as u16;
    }

    /// Record fresh scroll bounds and pull offsets back inside them
    pub fn set_metrics(&mut self, metrics: ScrollMetrics) {
        self.metrics = metrics;
        self.landing_scroll = self.landing_scroll.min(metrics.landing_max);
        self.result_scroll = self.result_scroll.min(metrics.result_max);
    }

    // ==================== Flash / tick ====================

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
        self.expire_flash(Duration::from_secs(4));
    }
}

/// Largest char boundary not after `index`
fn floor_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use equacao_domain::{Diagnosis, LAST_STEP, QuestionKey, USER_FAILURE_MESSAGE};

    fn type_text(state: &mut TuiState, text: &str) {
        for c in text.chars() {
            state.apply(KeyAction::InsertChar(c));
        }
    }

    /// Fill every answer and press Enter on the last question
    fn submit_all(state: &mut TuiState) -> Option<TuiCommand> {
        state.apply(KeyAction::StartDiagnostic);
        for step in 0..LAST_STEP {
            type_text(state, &format!("resposta {}", step));
            assert!(state.apply(KeyAction::Advance).is_none());
        }
        type_text(state, "Celular");
        state.apply(KeyAction::Advance)
    }

    #[test]
    fn test_initial_state() {
        let state = TuiState::new();
        assert_eq!(state.view, View::Landing);
        assert_eq!(state.screen(), Screen::Landing);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_start_diagnostic_opens_first_question() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        assert_eq!(state.screen(), Screen::Question);
        assert_eq!(state.wizard.step(), Some(0));
    }

    #[test]
    fn test_typing_edits_current_answer() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        type_text(&mut state, "Enviar relatório");
        assert_eq!(state.wizard.current_answer(), "Enviar relatório");

        state.apply(KeyAction::DeleteChar);
        assert_eq!(state.wizard.current_answer(), "Enviar relatóri");
        assert_eq!(state.cursor, "Enviar relatóri".len());
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        type_text(&mut state, "ação");

        state.apply(KeyAction::CursorLeft);
        state.apply(KeyAction::CursorLeft);
        assert_eq!(state.cursor, "a".len() + "ç".len());
        state.apply(KeyAction::InsertChar('X'));
        assert_eq!(state.wizard.current_answer(), "açXão");

        state.apply(KeyAction::CursorHome);
        state.apply(KeyAction::DeleteCharForward);
        assert_eq!(state.wizard.current_answer(), "çXão");
        state.apply(KeyAction::CursorEnd);
        assert_eq!(state.cursor, "çXão".len());
    }

    #[test]
    fn test_newline_and_line_home_end() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        type_text(&mut state, "um");
        state.apply(KeyAction::InsertNewline);
        type_text(&mut state, "dois");
        assert_eq!(state.wizard.current_answer(), "um\ndois");

        state.apply(KeyAction::CursorHome);
        assert_eq!(state.cursor, 3);
        state.apply(KeyAction::CursorLeft);
        state.apply(KeyAction::CursorHome);
        assert_eq!(state.cursor, 0);
        state.apply(KeyAction::CursorEnd);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        state.insert_str("a\r\nb");
        assert_eq!(state.wizard.current_answer(), "a\nb");
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_advance_with_empty_answer_is_ignored() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        type_text(&mut state, "   ");

        assert!(state.apply(KeyAction::Advance).is_none());
        assert_eq!(state.wizard.step(), Some(0));
        assert_eq!(
            state.flash_message.as_ref().map(|(m, _)| m.as_str()),
            Some(EMPTY_ANSWER_HINT)
        );
    }

    #[test]
    fn test_back_keeps_answers_and_moves_cursor_to_end() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        type_text(&mut state, "tarefa");
        state.apply(KeyAction::Advance);
        type_text(&mut state, "7/10");

        state.apply(KeyAction::Back);
        assert_eq!(state.wizard.step(), Some(0));
        assert_eq!(state.wizard.current_answer(), "tarefa");
        assert_eq!(state.cursor, "tarefa".len());
        assert_eq!(
            state.wizard.answers().get(QuestionKey::Expectativa),
            Some("7/10")
        );
    }

    #[test]
    fn test_last_advance_submits_once() {
        let mut state = TuiState::new();
        let command = submit_all(&mut state);

        match command {
            Some(TuiCommand::Submit(answers)) => assert!(answers.is_complete()),
            other => panic!("expected submit, got {:?}", other),
        }
        assert_eq!(state.screen(), Screen::Submitting);

        // A second Enter while submitting must not produce another command
        assert!(state.apply(KeyAction::Advance).is_none());
        assert!(state.apply(KeyAction::Restart).is_none());
        assert_eq!(state.screen(), Screen::Submitting);
    }

    #[test]
    fn test_cannot_leave_while_submitting() {
        let mut state = TuiState::new();
        submit_all(&mut state);

        state.apply(KeyAction::BackToLanding);
        assert_eq!(state.view, View::Diagnostic);
        assert_eq!(state.screen(), Screen::Submitting);
    }

    #[test]
    fn test_diagnosis_ready_shows_result() {
        let mut state = TuiState::new();
        submit_all(&mut state);

        state.apply_ui_event(UiEvent::DiagnosisStarted);
        state.apply_ui_event(UiEvent::DiagnosisReady(Diagnosis::new(
            "### **[DIAGNÓSTICO]**\nX",
            "<h3><strong>[DIAGNÓSTICO]</strong></h3>\n<p>X</p>\n",
        )));

        assert_eq!(state.screen(), Screen::Result);
        assert!(matches!(state.wizard.phase(), WizardPhase::Succeeded(_)));
        assert_eq!(state.result_lines.len(), 3);
    }

    #[test]
    fn test_diagnosis_failed_shows_message() {
        let mut state = TuiState::new();
        submit_all(&mut state);

        state.apply_ui_event(UiEvent::DiagnosisFailed {
            message: USER_FAILURE_MESSAGE.to_string(),
        });

        assert_eq!(state.screen(), Screen::Result);
        match state.wizard.phase() {
            WizardPhase::Failed { message } => assert_eq!(message, USER_FAILURE_MESSAGE),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(state.result_lines.is_empty());
    }

    #[test]
    fn test_result_event_without_submission_is_ignored() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);

        state.apply_ui_event(UiEvent::DiagnosisReady(Diagnosis::new("x", "<p>x</p>")));
        assert_eq!(state.screen(), Screen::Question);
        assert!(state.result_lines.is_empty());
    }

    #[test]
    fn test_restart_from_result() {
        let mut state = TuiState::new();
        submit_all(&mut state);
        state.apply_ui_event(UiEvent::DiagnosisFailed {
            message: "falhou".to_string(),
        });

        state.apply(KeyAction::Restart);
        assert_eq!(state.screen(), Screen::Question);
        assert_eq!(state.wizard.step(), Some(0));
        assert!(state.wizard.answers().is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_back_to_landing_then_start_is_fresh() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        type_text(&mut state, "algo");
        state.apply(KeyAction::Advance);

        state.apply(KeyAction::BackToLanding);
        assert_eq!(state.screen(), Screen::Landing);

        state.apply(KeyAction::StartDiagnostic);
        assert_eq!(state.wizard.step(), Some(0));
        assert!(state.wizard.answers().is_empty());
    }

    #[test]
    fn test_scroll_is_clamped_to_metrics() {
        let mut state = TuiState::new();
        state.set_metrics(ScrollMetrics {
            landing_max: 5,
            result_max: 0,
            how_it_works: 12,
        });

        state.apply(KeyAction::ScrollUp);
        assert_eq!(state.landing_scroll, 0);
        state.apply(KeyAction::PageDown);
        assert_eq!(state.landing_scroll, 5);
        state.apply(KeyAction::ScrollToTop);
        assert_eq!(state.landing_scroll, 0);

        // Anchor past the end is clamped too
        state.apply(KeyAction::JumpToHowItWorks);
        assert_eq!(state.landing_scroll, 5);
    }

    #[test]
    fn test_jump_to_how_it_works() {
        let mut state = TuiState::new();
        state.set_metrics(ScrollMetrics {
            landing_max: 40,
            result_max: 0,
            how_it_works: 21,
        });
        state.apply(KeyAction::JumpToHowItWorks);
        assert_eq!(state.landing_scroll, 21);
    }

    #[test]
    fn test_toggle_help_and_quit() {
        let mut state = TuiState::new();
        state.apply(KeyAction::ToggleHelp);
        assert!(state.show_help);
        state.apply(KeyAction::ToggleHelp);
        assert!(!state.show_help);

        state.apply(KeyAction::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_flash_message() {
        let mut state = TuiState::new();
        state.set_flash("test");
        assert!(state.flash_message.is_some());

        // Should not expire immediately
        state.expire_flash(Duration::from_secs(5));
        assert!(state.flash_message.is_some());

        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
