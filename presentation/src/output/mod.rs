//! Plain console output (used before the TUI starts)

pub mod console;
