//! Markdown → HTML rendering (CommonMark with GFM tables and strikethrough)

mod pulldown;

pub use pulldown::PulldownMarkdownRenderer;
