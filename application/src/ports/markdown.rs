//! Markdown rendering port

/// Converts markdown into HTML.
///
/// Must be pure: the same input always yields the same output.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}
