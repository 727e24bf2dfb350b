use equacao_application::MarkdownRenderer;
use pulldown_cmark::{Options, Parser, html};

/// [`MarkdownRenderer`] backed by `pulldown-cmark`.
///
/// Raw HTML in the input passes through untouched; the output is only ever
/// shown in the terminal, never in a browser.
#[derive(Debug, Clone)]
pub struct PulldownMarkdownRenderer {
    options: Options,
}

impl PulldownMarkdownRenderer {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }
}

impl Default for PulldownMarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
