//! Key bindings per screen
//!
//! Maps raw crossterm key events to semantic [`KeyAction`]s. The mapping
//! depends only on the active [`Screen`]; state changes happen elsewhere.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Question,
    Submitting,
    Result,
}

impl Screen {
    /// Short label for the status bar
    pub fn indicator(&self) -> &'static str {
        match self {
            Screen::Landing => "INÍCIO",
            Screen::Question => "PERGUNTA",
            Screen::Submitting => "ANALISANDO",
            Screen::Result => "RESULTADO",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Screen::Landing => Color::Blue,
            Screen::Question => Color::Green,
            Screen::Submitting => Color::Yellow,
            Screen::Result => Color::Magenta,
        }
    }

    /// Key hints shown in the status bar
    pub fn hints(&self) -> &'static str {
        match self {
            Screen::Landing => "Enter:começar  c:como funciona  j/k:rolar  ?:ajuda  q:sair",
            Screen::Question => "Enter:próxima  Alt+Enter:nova linha  Shift+Tab:anterior  Esc:início",
            Screen::Submitting => "Ctrl+C:sair",
            Screen::Result => "n:novo diagnóstico  b:início  j/k:rolar  ?:ajuda  q:sair",
        }
    }
}

/// Semantic action produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    ToggleHelp,

    // Landing
    StartDiagnostic,
    JumpToHowItWorks,

    // Scrolling (landing and result)
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // Answer editing
    InsertChar(char),
    InsertNewline,
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Wizard navigation
    Advance,
    Back,
    BackToLanding,
    Restart,
}

/// Map a key event to an action for the given screen
pub fn handle_key_event(screen: Screen, key: KeyEvent) -> KeyAction {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    if key.code == KeyCode::F(1) && screen != Screen::Submitting {
        return KeyAction::ToggleHelp;
    }

    match screen {
        Screen::Landing => handle_landing(key),
        Screen::Question => handle_question(key),
        Screen::Submitting => handle_submitting(key),
        Screen::Result => handle_result(key),
    }
}

fn handle_scroll(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::PageDown | KeyCode::Char(' ') => KeyAction::PageDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::ScrollToTop,
        KeyCode::Char('G') | KeyCode::End => KeyAction::ScrollToBottom,
        _ => KeyAction::None,
    }
}

fn handle_landing(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') => KeyAction::StartDiagnostic,
        KeyCode::Char('c') => KeyAction::JumpToHowItWorks,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        _ => handle_scroll(key),
    }
}

fn handle_question(key: KeyEvent) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Alt+Enter (and Shift+Enter where the terminal reports it) → newline
        KeyCode::Enter if alt || shift => KeyAction::InsertNewline,
        KeyCode::Char('j') if ctrl => KeyAction::InsertNewline,
        KeyCode::Enter => KeyAction::Advance,
        KeyCode::BackTab => KeyAction::Back,
        KeyCode::Char('p') if ctrl => KeyAction::Back,
        KeyCode::Char('n') if ctrl => KeyAction::Advance,
        KeyCode::Esc => KeyAction::BackToLanding,
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Delete => KeyAction::DeleteCharForward,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        KeyCode::Char('a') if ctrl => KeyAction::CursorHome,
        KeyCode::Char('e') if ctrl => KeyAction::CursorEnd,
        KeyCode::Char(c) if !ctrl && !alt => KeyAction::InsertChar(c),
        _ => KeyAction::None,
    }
}

fn handle_submitting(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn handle_result(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('n') | KeyCode::Enter => KeyAction::Restart,
        KeyCode::Esc | KeyCode::Char('b') => KeyAction::BackToLanding,
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        _ => handle_scroll(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for screen in [
            Screen::Landing,
            Screen::Question,
            Screen::Submitting,
            Screen::Result,
        ] {
            assert_eq!(
                handle_key_event(screen, key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
                KeyAction::Quit
            );
        }
    }

    #[test]
    fn test_landing_keys() {
        assert_eq!(
            handle_key_event(Screen::Landing, key(KeyCode::Enter)),
            KeyAction::StartDiagnostic
        );
        assert_eq!(
            handle_key_event(Screen::Landing, key(KeyCode::Char('s'))),
            KeyAction::StartDiagnostic
        );
        assert_eq!(
            handle_key_event(Screen::Landing, key(KeyCode::Char('c'))),
            KeyAction::JumpToHowItWorks
        );
        assert_eq!(
            handle_key_event(Screen::Landing, key(KeyCode::Char('j'))),
            KeyAction::ScrollDown
        );
        assert_eq!(
            handle_key_event(Screen::Landing, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_question_typing_is_not_shadowed() {
        // Letters bound elsewhere must type text while answering
        for c in ['q', 'j', 'k', 'n', 'b', '?', 's', 'c'] {
            assert_eq!(
                handle_key_event(Screen::Question, key(KeyCode::Char(c))),
                KeyAction::InsertChar(c)
            );
        }
        assert_eq!(
            handle_key_event(
                Screen::Question,
                key_with(KeyCode::Char('Ç'), KeyModifiers::SHIFT)
            ),
            KeyAction::InsertChar('Ç')
        );
    }

    #[test]
    fn test_question_navigation() {
        assert_eq!(
            handle_key_event(Screen::Question, key(KeyCode::Enter)),
            KeyAction::Advance
        );
        assert_eq!(
            handle_key_event(Screen::Question, key_with(KeyCode::Enter, KeyModifiers::ALT)),
            KeyAction::InsertNewline
        );
        assert_eq!(
            handle_key_event(Screen::Question, key_with(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyAction::Back
        );
        assert_eq!(
            handle_key_event(
                Screen::Question,
                key_with(KeyCode::Char('p'), KeyModifiers::CONTROL)
            ),
            KeyAction::Back
        );
        assert_eq!(
            handle_key_event(Screen::Question, key(KeyCode::Esc)),
            KeyAction::BackToLanding
        );
    }

    #[test]
    fn test_submitting_accepts_only_quit() {
        assert_eq!(
            handle_key_event(Screen::Submitting, key(KeyCode::Enter)),
            KeyAction::None
        );
        assert_eq!(
            handle_key_event(Screen::Submitting, key(KeyCode::Esc)),
            KeyAction::None
        );
        assert_eq!(
            handle_key_event(Screen::Submitting, key(KeyCode::F(1))),
            KeyAction::None
        );
        assert_eq!(
            handle_key_event(Screen::Submitting, key(KeyCode::Char('q'))),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_result_keys() {
        assert_eq!(
            handle_key_event(Screen::Result, key(KeyCode::Char('n'))),
            KeyAction::Restart
        );
        assert_eq!(
            handle_key_event(Screen::Result, key(KeyCode::Enter)),
            KeyAction::Restart
        );
        assert_eq!(
            handle_key_event(Screen::Result, key(KeyCode::Char('b'))),
            KeyAction::BackToLanding
        );
        assert_eq!(
            handle_key_event(Screen::Result, key(KeyCode::Char('k'))),
            KeyAction::ScrollUp
        );
    }

    #[test]
    fn test_help_toggle() {
        assert_eq!(
            handle_key_event(Screen::Landing, key(KeyCode::Char('?'))),
            KeyAction::ToggleHelp
        );
        assert_eq!(
            handle_key_event(Screen::Question, key(KeyCode::F(1))),
            KeyAction::ToggleHelp
        );
    }
}
