//! Markdown → ratatui `Text` for internship and idea detail bodies.
//!
//! Covers what the portfolio copy actually uses: headings, paragraphs,
//! bullet and numbered lists, emphasis, inline and fenced code, quotes
//! and links. Anything else is dropped.

use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Bullet used for unordered list items.
const BULLET: &str = "▸ ";

pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut w = Writer::new(base_fg);
    for event in Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH) {
        w.handle(event);
    }
    w.text
}

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    /// Composed inline styles; the top is the effective one.
    styles: Vec<Style>,
    /// Quote and code-block gutters, outermost first.
    gutters: Vec<Span<'static>>,
    /// `None` for bullets, `Some(n)` for the next ordinal.
    lists: Vec<Option<u64>>,
    in_code_block: bool,
    link_url: Option<String>,
    needs_blank: bool,
}

impl Writer {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base_fg,
            styles: Vec::new(),
            gutters: Vec::new(),
            lists: Vec::new(),
            in_code_block: false,
            link_url: None,
            needs_blank: false,
        }
    }

    fn style(&self) -> Style {
        self.styles
            .last()
            .copied()
            .unwrap_or_else(|| Style::default().fg(self.base_fg))
    }

    fn push_style(&mut self, overlay: Style) {
        self.styles.push(self.style().patch(overlay));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn new_line(&mut self, spans: Vec<Span<'static>>) {
        let mut all = self.gutters.clone();
        all.extend(spans);
        self.text.lines.push(Line::from(all));
    }

    fn push_span(&mut self, span: Span<'static>) {
        match self.text.lines.last_mut() {
            Some(line) => line.push_span(span),
            None => self.new_line(vec![span]),
        }
    }

    fn separate_block(&mut self) {
        if self.needs_blank {
            self.text.lines.push(Line::default());
            self.needs_blank = false;
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(t) => self.text(t),
            Event::Code(c) => self.push_span(Span::styled(
                c.to_string(),
                Style::default().fg(Color::Yellow),
            )),
            Event::SoftBreak => self.push_span(Span::raw(" ")),
            Event::HardBreak => self.new_line(Vec::new()),
            Event::Rule => {
                self.separate_block();
                self.new_line(vec![Span::styled(
                    "─".repeat(32),
                    Style::default().fg(Color::DarkGray),
                )]);
                self.needs_blank = true;
            }
            _ => {}
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                // A paragraph directly inside a list item continues the item's line.
                if self.lists.is_empty() {
                    self.separate_block();
                    self.new_line(Vec::new());
                }
            }
            Tag::Heading { level, .. } => {
                self.separate_block();
                self.new_line(Vec::new());
                self.push_style(heading_style(level));
            }
            Tag::BlockQuote(_) => {
                self.separate_block();
                self.gutters
                    .push(Span::styled("┃ ", Style::default().fg(Color::DarkGray)));
                self.push_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(_) => {
                self.separate_block();
                self.gutters
                    .push(Span::styled("  │ ", Style::default().fg(Color::DarkGray)));
                self.in_code_block = true;
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.separate_block();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}{BULLET}"),
                };
                self.new_line(vec![Span::styled(marker, Style::default().fg(Color::Cyan))]);
            }
            Tag::Emphasis => self.push_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.push_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link_url = Some(dest_url.to_string());
                self.push_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if self.lists.is_empty() {
                    self.needs_blank = true;
                }
            }
            TagEnd::Heading(_) => {
                self.pop_style();
                self.needs_blank = true;
            }
            TagEnd::BlockQuote(_) => {
                self.gutters.pop();
                self.pop_style();
                self.needs_blank = true;
            }
            TagEnd::CodeBlock => {
                self.gutters.pop();
                self.in_code_block = false;
                self.needs_blank = true;
            }
            TagEnd::List(_) => {
                self.lists.pop();
                if self.lists.is_empty() {
                    self.needs_blank = true;
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(url) = self.link_url.take() {
                    self.push_span(Span::styled(
                        format!(" <{url}>"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            _ => {}
        }
    }

    fn text(&mut self, cow: CowStr<'_>) {
        // ratatui renders tabs as zero width.
        let text = cow.replace('\t', "    ");
        if self.in_code_block {
            let style = Style::default().fg(Color::Gray);
            for line in text.lines() {
                self.new_line(vec![Span::styled(line.to_owned(), style)]);
            }
            return;
        }
        let style = self.style();
        self.push_span(Span::styled(text, style));
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        HeadingLevel::H2 => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    }
}

/// Plain text of each rendered line, for assertions.
#[cfg(test)]
pub(crate) fn plain_lines(text: &Text<'_>) -> Vec<String> {
    text.lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_is_bold_without_hash_prefix() {
        let text = render("## About the Role", Color::White);
        let span = &text.lines[0].spans[0];
        assert_eq!(span.content, "About the Role");
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(span.style.fg, Some(Color::Magenta));
    }

    #[test]
    fn bullets_get_one_line_each() {
        let text = render("- Built pipelines\n- Shipped **evals**", Color::White);
        let lines = plain_lines(&text);
        assert_eq!(lines, vec!["▸ Built pipelines", "▸ Shipped evals"]);
        let bold = text.lines[1]
            .spans
            .iter()
            .find(|s| s.content == "evals")
            .unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn ordered_list_counts_up() {
        let lines = plain_lines(&render("3. three\n4. four", Color::White));
        assert_eq!(lines, vec!["3. three", "4. four"]);
    }

    #[test]
    fn paragraphs_are_separated_by_blank_line() {
        let lines = plain_lines(&render("first\n\nsecond", Color::White));
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn code_block_lines_carry_gutter() {
        let lines = plain_lines(&render("```\na\n\tb\n```", Color::White));
        assert_eq!(lines, vec!["  │ a", "  │     b"]);
    }

    #[test]
    fn link_url_follows_text() {
        let lines = plain_lines(&render("[site](https://x.dev)", Color::White));
        assert_eq!(lines, vec!["site <https://x.dev>"]);
    }

    #[test]
    fn body_text_uses_base_color() {
        let text = render("hello", Color::Green);
        assert_eq!(text.lines[0].spans[0].style.fg, Some(Color::Green));
    }
}
