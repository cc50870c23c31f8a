//! # Prompt Component
//!
//! The shell line at the bottom of the portfolio:
//!
//! ```text
//! ╭──────────────────────────────────────────────────────────╮
//! │ tarushgupta@tarush's_macbook_pro:~/podcast$ cd i|nternships │
//! │ try: cd internships  (Tab to accept, ←/→ for more)  Esc: cd .. │
//! ╰──────────────────────────────────────────────────────────╯
//! ```
//!
//! The input buffer lives in the router, so this component is props-only.
//! Ghost text is drawn dimmed after the caret and is never part of the
//! input value.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::intro::{PROMPT_HOST, PROMPT_USER};
use crate::tui::component::Component;

/// Borders plus the prompt line and the hint line.
pub const PROMPT_HEIGHT: u16 = 4;

pub struct Prompt<'a> {
    pub path: &'a str,
    pub input: &'a str,
    pub ghost: Option<&'a str>,
    /// The cycled suggestion, shown while the input is empty.
    pub hint: Option<&'a str>,
    pub show_back: bool,
}

/// `user@host:path$ `, split into styled spans.
pub fn prompt_spans(path: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("{PROMPT_USER}@{PROMPT_HOST}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(":"),
        Span::styled(
            path.to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("$ "),
    ]
}

impl Prompt<'_> {
    fn prompt_line(&self) -> Line<'static> {
        let mut spans = prompt_spans(self.path);
        spans.push(Span::styled(
            self.input.to_string(),
            Style::default().fg(Color::White),
        ));
        if let Some(ghost) = self.ghost {
            spans.push(Span::styled(
                ghost.to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            ));
        }
        Line::from(spans)
    }

    fn hint_line(&self) -> Line<'static> {
        let key = Style::default().fg(Color::Cyan);
        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = Vec::new();
        if let Some(hint) = self.hint {
            spans.push(Span::styled("try: ", dim));
            spans.push(Span::styled(hint.to_string(), key));
            spans.push(Span::styled("  (Tab to accept, ←/→ for more)", dim));
        }
        if self.show_back {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled("Esc", key));
            spans.push(Span::styled(": cd ..", dim));
        }
        Line::from(spans)
    }

    /// Caret column relative to the inner area.
    fn caret_offset(&self) -> u16 {
        let prefix = format!("{PROMPT_USER}@{PROMPT_HOST}:{}$ ", self.path);
        (prefix.width() + self.input.width()) as u16
    }
}

impl Component for Prompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let paragraph = Paragraph::new(vec![self.prompt_line(), self.hint_line()]).block(block);
        frame.render_widget(paragraph, area);

        if inner.width > 0 && inner.height > 0 {
            let x = inner.x + self.caret_offset().min(inner.width - 1);
            frame.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(prompt: &mut Prompt<'_>, width: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, PROMPT_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| prompt.render(f, f.area())).unwrap();
        terminal
    }

    fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_prompt_and_ghost_text() {
        let mut prompt = Prompt {
            path: "~",
            input: "cd i",
            ghost: Some("nternships"),
            hint: None,
            show_back: false,
        };
        let terminal = draw(&mut prompt, 80);
        let line = row(&terminal, 1);
        assert!(line.contains("tarushgupta@tarush's_macbook_pro:~$ cd internships"));

        let buffer = terminal.backend().buffer();
        let ghost_x = 1 + "tarushgupta@tarush's_macbook_pro:~$ cd i".len() as u16;
        assert_eq!(buffer[(ghost_x, 1)].symbol(), "n");
        assert_eq!(buffer[(ghost_x, 1)].fg, Color::DarkGray);
    }

    #[test]
    fn test_hint_and_back_affordance() {
        let mut prompt = Prompt {
            path: "~/podcast",
            input: "",
            ghost: Some("cd internships"),
            hint: Some("cd internships"),
            show_back: true,
        };
        let terminal = draw(&mut prompt, 100);
        let hint = row(&terminal, 2);
        assert!(hint.contains("try: cd internships"));
        assert!(hint.contains("Esc: cd .."));
    }

    #[test]
    fn test_caret_follows_input() {
        let mut prompt = Prompt {
            path: "~",
            input: "ls",
            ghost: None,
            hint: None,
            show_back: false,
        };
        let mut terminal = draw(&mut prompt, 80);
        let expected = 1 + "tarushgupta@tarush's_macbook_pro:~$ ls".len() as u16;
        let pos = terminal.get_cursor_position().unwrap();
        assert_eq!(pos.x, expected);
        assert_eq!(pos.y, 1);
    }

    #[test]
    fn test_caret_clamped_on_narrow_terminal() {
        let mut prompt = Prompt {
            path: "~/internships/proshort",
            input: "cd something-long",
            ghost: None,
            hint: None,
            show_back: false,
        };
        let mut terminal = draw(&mut prompt, 20);
        assert_eq!(terminal.get_cursor_position().unwrap().x, 18);
    }
}
