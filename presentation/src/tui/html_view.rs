//! Rendered diagnosis HTML → styled terminal lines
//!
//! Walks the HTML produced by the markdown renderer and emits ratatui
//! [`Line`]s: headings, paragraphs, lists, block quotes, code, rules and
//! tables become line structure; `strong`/`em`/`code`/`del`/`a` become span
//! styles. Unknown tags are transparent (their text is kept).

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use scraper::{ElementRef, Html, Node};

/// Tags whose entire subtree is ignored
const SKIP_TAGS: [&str; 4] = ["script", "style", "noscript", "svg"];

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy)]
enum ListKind {
    Bullet,
    Ordered(u64),
}

/// Convert an HTML fragment into styled lines.
pub fn html_to_lines(html: &str) -> Vec<Line<'static>> {
    let fragment = Html::parse_fragment(html);
    let mut builder = LineBuilder::default();
    builder.walk(fragment.root_element());
    builder.finish()
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    styles: Vec<Style>,
    lists: Vec<ListKind>,
    /// Marker for the next line of a list item ("• ", "2. ")
    pending_marker: Option<String>,
    quote_depth: usize,
    in_pre: bool,
    /// Cells of the table row being built
    row: Option<Vec<Vec<Span<'static>>>>,
}

impl LineBuilder {
    fn style(&self) -> Style {
        self.styles
            .iter()
            .fold(Style::default(), |acc, style| acc.patch(*style))
    }

    fn walk(&mut self, element: ElementRef<'_>) {
        let tag = element.value().name();
        if SKIP_TAGS.contains(&tag) {
            return;
        }

        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                self.flush();
                self.blank();
                self.with_style(heading_style(tag), |b| b.walk_children(element));
                self.flush();
                self.blank();
            }
            "p" => {
                self.flush();
                self.walk_children(element);
                self.flush();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            "ul" | "ol" => {
                self.flush();
                let kind = if tag == "ol" {
                    let start = element
                        .value()
                        .attr("start")
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(1);
                    ListKind::Ordered(start)
                } else {
                    ListKind::Bullet
                };
                self.lists.push(kind);
                self.walk_children(element);
                self.lists.pop();
                self.flush();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            "li" => {
                self.flush();
                self.pending_marker = Some(self.next_marker());
                self.walk_children(element);
                self.flush();
                self.pending_marker = None;
            }
            "blockquote" => {
                self.flush();
                self.quote_depth += 1;
                self.with_style(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                    |b| b.walk_children(element),
                );
                self.flush();
                self.quote_depth -= 1;
                self.blank();
            }
            "pre" => {
                self.flush();
                self.in_pre = true;
                self.with_style(Style::default().fg(Color::Yellow), |b| {
                    b.walk_children(element)
                });
                self.in_pre = false;
                self.flush();
                self.blank();
            }
            "hr" => {
                self.flush();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(RULE_WIDTH),
                    Style::default().fg(Color::DarkGray),
                )));
                self.blank();
            }
            "br" => self.flush(),
            "table" => {
                self.flush();
                self.walk_children(element);
                self.flush();
                self.blank();
            }
            "tr" => {
                self.flush();
                self.row = Some(Vec::new());
                self.walk_children(element);
                if let Some(cells) = self.row.take() {
                    self.push_row(cells);
                }
            }
            "th" | "td" => {
                let outer = std::mem::take(&mut self.spans);
                let style = if tag == "th" {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                self.with_style(style, |b| b.walk_children(element));
                let cell = std::mem::replace(&mut self.spans, outer);
                if let Some(row) = self.row.as_mut() {
                    row.push(cell);
                }
            }
            "strong" | "b" => self.with_style(
                Style::default().add_modifier(Modifier::BOLD),
                |b| b.walk_children(element),
            ),
            "em" | "i" => self.with_style(
                Style::default().add_modifier(Modifier::ITALIC),
                |b| b.walk_children(element),
            ),
            "del" | "s" => self.with_style(
                Style::default().add_modifier(Modifier::CROSSED_OUT),
                |b| b.walk_children(element),
            ),
            "code" => self.with_style(Style::default().fg(Color::Yellow), |b| {
                b.walk_children(element)
            }),
            "a" => self.with_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
                |b| b.walk_children(element),
            ),
            _ => self.walk_children(element),
        }
    }

    fn walk_children(&mut self, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => self.push_text(text),
                Node::Element(_) => {
                    if let Some(child_el) = ElementRef::wrap(child) {
                        self.walk(child_el);
                    }
                }
                _ => {}
            }
        }
    }

    fn with_style(&mut self, style: Style, f: impl FnOnce(&mut Self)) {
        self.styles.push(style);
        f(self);
        self.styles.pop();
    }

    fn next_marker(&mut self) -> String {
        let indent = "  ".repeat(self.lists.len().saturating_sub(1));
        match self.lists.last_mut() {
            Some(ListKind::Ordered(n)) => {
                let marker = format!("{}{}. ", indent, n);
                *n += 1;
                marker
            }
            Some(ListKind::Bullet) | None => format!("{}• ", indent),
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.in_pre {
            let mut pieces = text.split('\n').peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    self.push_span(piece.to_string());
                }
                if pieces.peek().is_some() {
                    self.flush();
                }
            }
            return;
        }

        let mut collapsed = String::with_capacity(text.len());
        let mut prev_was_whitespace = false;
        for ch in text.chars() {
            if ch.is_whitespace() {
                if !prev_was_whitespace {
                    collapsed.push(' ');
                }
                prev_was_whitespace = true;
            } else {
                collapsed.push(ch);
                prev_was_whitespace = false;
            }
        }

        let content = if self.spans.is_empty() {
            collapsed.trim_start()
        } else {
            collapsed.as_str()
        };
        if !content.is_empty() {
            self.push_span(content.to_string());
        }
    }

    fn push_span(&mut self, content: String) {
        if self.spans.is_empty() && self.row.is_none() {
            self.push_line_prefix();
        }
        let style = self.style();
        self.spans.push(Span::styled(content, style));
    }

    /// Quote bars and list markers/indentation for a fresh line
    fn push_line_prefix(&mut self) {
        for _ in 0..self.quote_depth {
            self.spans
                .push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));
        }
        if let Some(marker) = self.pending_marker.take() {
            self.spans
                .push(Span::styled(marker, Style::default().fg(Color::Cyan)));
        } else if !self.lists.is_empty() {
            self.spans.push(Span::raw("  ".repeat(self.lists.len())));
        }
    }

    fn push_row(&mut self, cells: Vec<Vec<Span<'static>>>) {
        let mut spans = Vec::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.extend(cell);
        }
        self.lines.push(Line::from(spans));
    }

    fn flush(&mut self) {
        if !self.spans.is_empty() && self.row.is_none() {
            self.lines.push(Line::from(std::mem::take(&mut self.spans)));
        }
    }

    /// Push one empty separator line (never two in a row, never leading)
    fn blank(&mut self) {
        if self.lines.last().is_some_and(|l| l.width() > 0) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|l| l.width() == 0) {
            self.lines.pop();
        }
        self.lines
    }
}

fn heading_style(tag: &str) -> Style {
    let color = match tag {
        "h1" | "h2" => Color::Cyan,
        "h3" => Color::Yellow,
        _ => Color::White,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_section_heading_and_paragraph() {
        let lines = html_to_lines("<h3><strong>[DIAGNÓSTICO]</strong></h3>\n<p>X</p>\n");
        assert_eq!(texts(&lines), vec!["[DIAGNÓSTICO]", "", "X"]);

        let heading = &lines[0].spans[0];
        assert!(heading.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(heading.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_inline_styles() {
        let lines = html_to_lines("<p>Sua <strong>Expectativa</strong> está <em>baixa</em>.</p>");
        assert_eq!(texts(&lines), vec!["Sua Expectativa está baixa."]);

        let bold = lines[0]
            .spans
            .iter()
            .find(|s| s.content == "Expectativa")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        let italic = lines[0].spans.iter().find(|s| s.content == "baixa").unwrap();
        assert!(italic.style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_bullet_and_ordered_lists() {
        let html = "<ul>\n<li>um</li>\n<li><strong>dois</strong> itens</li>\n</ul>\n<ol start=\"3\">\n<li>três</li>\n<li>quatro</li>\n</ol>\n";
        let lines = html_to_lines(html);
        assert_eq!(
            texts(&lines),
            vec!["• um", "• dois itens", "", "3. três", "4. quatro"]
        );
    }

    #[test]
    fn test_nested_list_is_indented() {
        let html = "<ul><li>pai<ul><li>filho</li></ul></li></ul>";
        assert_eq!(texts(&html_to_lines(html)), vec!["• pai", "  • filho"]);
    }

    #[test]
    fn test_loose_list_paragraphs_stay_tight() {
        let html = "<ul>\n<li>\n<p>primeiro</p>\n</li>\n<li>\n<p>segundo</p>\n</li>\n</ul>\n";
        assert_eq!(
            texts(&html_to_lines(html)),
            vec!["• primeiro", "• segundo"]
        );
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let lines = html_to_lines("<p>muito    espaço\n   aqui</p>");
        assert_eq!(texts(&lines), vec!["muito espaço aqui"]);
    }

    #[test]
    fn test_pre_keeps_line_breaks() {
        let lines = html_to_lines("<pre><code>linha 1\nlinha 2\n</code></pre>");
        assert_eq!(texts(&lines), vec!["linha 1", "linha 2"]);
    }

    #[test]
    fn test_blockquote_prefix() {
        let lines = html_to_lines("<blockquote>\n<p>Mude as variáveis</p>\n</blockquote>");
        assert_eq!(texts(&lines), vec!["│ Mude as variáveis"]);
    }

    #[test]
    fn test_table_rows() {
        let html = "<table><thead><tr><th>Variável</th><th>Nota</th></tr></thead>\
                    <tbody><tr><td>Valor</td><td>8</td></tr></tbody></table>";
        assert_eq!(
            texts(&html_to_lines(html)),
            vec!["Variável │ Nota", "Valor │ 8"]
        );
    }

    #[test]
    fn test_script_is_skipped() {
        let lines = html_to_lines("<p>ok</p><script>alert(1)</script>");
        assert_eq!(texts(&lines), vec!["ok"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(html_to_lines("").is_empty());
    }
}
