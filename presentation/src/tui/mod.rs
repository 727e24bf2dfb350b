//! TUI (Text User Interface) module for equacao-pro
//!
//! Landing page and the five-question diagnostic wizard, rendered with
//! ratatui. The network call runs in a background controller task.

mod app;
mod event;
mod html_view;
mod keymap;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiCommand;
pub use html_view::html_to_lines;
pub use keymap::{KeyAction, Screen, handle_key_event};
pub use state::{ScrollMetrics, TuiState, View};
