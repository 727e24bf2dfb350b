//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 controller_task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)    └─ controller.submit()
//!   └─ tick_interval
//!        └── cmd_tx ──────────────────>──┘
//! ```

use super::event::TuiCommand;
use super::keymap::{self, Screen};
use super::state::{ScrollMetrics, TuiState};
use super::widgets::{
    MainLayout, header::HeaderWidget, help::HelpWidget, landing::LandingWidget,
    loading::LoadingWidget, question::QuestionWidget, result::ResultWidget,
    status_bar::StatusBarWidget,
};
use crate::config::TuiConfig;
use crossterm::{
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use equacao_application::{DiagnosticController, LlmGateway, MarkdownRenderer, UiEvent};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,

    config: TuiConfig,
    model_name: String,

    // -- Controller task handle --
    controller_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller
    pub fn new<G, R>(gateway: Arc<G>, renderer: Arc<R>, config: TuiConfig) -> Self
    where
        G: LlmGateway + 'static,
        R: MarkdownRenderer + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        let controller = DiagnosticController::new(gateway, renderer, ui_tx);
        let controller_handle = tokio::spawn(controller_task(controller, cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            config,
            model_name: String::new(),
            controller_handle,
        }
    }

    /// Model name shown in the header and on the loading screen
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Run the TUI main loop until the user quits
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Stop the controller whatever the loop returned
        let _ = self.cmd_tx.send(TuiCommand::Quit);
        self.controller_handle.abort();

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new();
        state.model_name = self.model_name.clone();
        state.show_hints = self.config.show_hints;

        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.config.tick_rate());

        info!("TUI started");

        loop {
            let size = terminal.size()?;
            state.set_metrics(measure(&state, Rect::new(0, 0, size.width, size.height)));

            // Render
            terminal.draw(|frame| render(frame, &state))?;

            if state.should_quit {
                break;
            }

            // select! on all event sources
            tokio::select! {
                // Terminal events (keyboard, paste, resize)
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(term_event)) => self.handle_terminal_event(&mut state, term_event),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                // UiEvents from the controller
                Some(ui_event) = self.ui_rx.recv() => {
                    debug!("UI event: {:?}", ui_event);
                    state.apply_ui_event(ui_event);
                }

                // Tick for flash expiry and spinner animation
                _ = tick.tick() => {
                    state.on_tick();
                }
            }
        }

        info!("TUI stopped");
        Ok(())
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&self, state: &mut TuiState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if state.show_help && closes_help(key) {
                    state.show_help = false;
                    return;
                }

                let action = keymap::handle_key_event(state.screen(), key);
                if let Some(cmd) = state.apply(action) {
                    debug!("Sending command to controller: {:?}", cmd);
                    let _ = self.cmd_tx.send(cmd);
                }
            }
            Event::Paste(text) => {
                if state.screen() == Screen::Question {
                    state.insert_str(&text);
                }
            }
            // Terminal auto-resizes on next draw
            _ => {}
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        self.controller_handle.abort();
    }
}

fn closes_help(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1))
}

/// Scroll bounds of the scrollable screens for a terminal of size `area`
fn measure(state: &TuiState, area: Rect) -> ScrollMetrics {
    let body = MainLayout::compute(area).body;
    let (landing_max, how_it_works) = LandingWidget::metrics(body);
    ScrollMetrics {
        landing_max,
        result_max: ResultWidget::max_scroll(&state.result_lines, body),
        how_it_works,
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());
    let screen = state.screen();

    frame.render_widget(HeaderWidget::new(state), layout.header);
    match screen {
        Screen::Landing => frame.render_widget(LandingWidget::new(state), layout.body),
        Screen::Question => frame.render_widget(QuestionWidget::new(state), layout.body),
        Screen::Submitting => frame.render_widget(LoadingWidget::new(state), layout.body),
        Screen::Result => frame.render_widget(ResultWidget::new(state), layout.body),
    }
    frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

    // Help overlay
    if state.show_help {
        let help_area = MainLayout::centered_overlay(70, 70, frame.area());
        frame.render_widget(ratatui::widgets::Clear, help_area);
        frame.render_widget(HelpWidget::new(screen), help_area);
    }
}

/// Background controller task (Actor)
///
/// Owns the DiagnosticController and processes commands from the TUI event
/// loop. Stops on [`TuiCommand::Quit`] or when the sender is dropped.
async fn controller_task<G: LlmGateway + 'static, R: MarkdownRenderer + 'static>(
    controller: DiagnosticController<G, R>,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            TuiCommand::Submit(answers) => {
                controller.submit(&answers).await;
            }
            TuiCommand::Quit => {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::keymap::KeyAction;
    use async_trait::async_trait;
    use equacao_application::GatewayError;
    use equacao_domain::{AnswerSet, LAST_STEP, QuestionKey};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmGateway for CountingGateway {
        async fn generate(
            &self,
            _prompt: &str,
            _system_instruction: &str,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("### **[DIAGNÓSTICO]**\nTudo certo.".to_string())
        }
    }

    struct PlainRenderer;

    impl MarkdownRenderer for PlainRenderer {
        fn render(&self, markdown: &str) -> String {
            format!("<p>{}</p>", markdown)
        }
    }

    fn answers() -> AnswerSet {
        QuestionKey::ALL
            .into_iter()
            .map(|k| (k, format!("resposta {}", k)))
            .collect()
    }

    #[tokio::test]
    async fn test_controller_task_submits_and_stops_on_quit() {
        let gateway = Arc::new(CountingGateway {
            calls: AtomicUsize::new(0),
        });
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let controller = DiagnosticController::new(gateway.clone(), Arc::new(PlainRenderer), ui_tx);
        let handle = tokio::spawn(controller_task(controller, cmd_rx));

        cmd_tx.send(TuiCommand::Submit(answers())).unwrap();
        assert_eq!(ui_rx.recv().await, Some(UiEvent::DiagnosisStarted));
        match ui_rx.recv().await {
            Some(UiEvent::DiagnosisReady(d)) => assert!(d.html().starts_with("<p>")),
            other => panic!("unexpected event {:?}", other),
        }

        cmd_tx.send(TuiCommand::Quit).unwrap();
        handle.await.unwrap();
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_controller_task_stops_when_sender_dropped() {
        let gateway = Arc::new(CountingGateway {
            calls: AtomicUsize::new(0),
        });
        let (ui_tx, _ui_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let controller = DiagnosticController::new(gateway, Arc::new(PlainRenderer), ui_tx);
        let handle = tokio::spawn(controller_task(controller, cmd_rx));

        drop(cmd_tx);
        handle.await.unwrap();
    }

    #[test]
    fn test_measure_result_scroll_follows_lines() {
        let mut state = TuiState::new();
        state.apply(KeyAction::StartDiagnostic);
        for _ in 0..=LAST_STEP {
            state.apply(KeyAction::InsertChar('x'));
            state.apply(KeyAction::Advance);
        }
        let html: String = (0..60).map(|i| format!("<p>linha {}</p>", i)).collect();
        state.apply_ui_event(UiEvent::DiagnosisReady(equacao_domain::Diagnosis::new(
            "md", html,
        )));

        let metrics = measure(&state, Rect::new(0, 0, 80, 24));
        assert!(metrics.result_max > 0);
        assert!(metrics.landing_max > 0);
        assert!(metrics.how_it_works > 0);
    }

    #[test]
    fn test_closes_help_keys() {
        use crossterm::event::KeyModifiers;
        assert!(closes_help(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(closes_help(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)));
        assert!(!closes_help(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
    }
}
