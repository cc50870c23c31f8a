//! Collapsible list of previously submitted commands, newest first.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::history::MAX_HISTORY;
use crate::tui::component::Component;

/// Rows used when collapsed: the two borders only.
const COLLAPSED_HEIGHT: u16 = 2;

pub struct HistoryPanel<'a> {
    pub entries: Vec<&'a str>,
    pub expanded: bool,
    /// Index of the entry currently recalled into the prompt.
    pub cursor: Option<usize>,
}

impl HistoryPanel<'_> {
    /// Height the panel wants, given the room available.
    pub fn height(&self, max: u16) -> u16 {
        if !self.expanded {
            return COLLAPSED_HEIGHT.min(max);
        }
        let rows = self.entries.len().max(1) as u16;
        (rows + 2).min(max)
    }
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let arrow = if self.expanded { "▾" } else { "▸" };
        let title = format!(
            " {arrow} history ({}/{MAX_HISTORY})  Ctrl+R ",
            self.entries.len()
        );
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        if !self.expanded {
            frame.render_widget(block, area);
            return;
        }

        let lines: Vec<Line> = if self.entries.is_empty() {
            vec![Line::styled(
                "no commands yet",
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            self.entries
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let style = if self.cursor == Some(i) {
                        Style::default().fg(Color::Black).bg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("{:>2} ", i + 1),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::styled(entry.to_string(), style),
                    ])
                })
                .collect()
        };
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn text_of(panel: &mut HistoryPanel<'_>, height: u16) -> String {
        let backend = TestBackend::new(50, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| panel.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_collapsed_shows_count_only() {
        let mut panel = HistoryPanel {
            entries: vec!["cd podcast", "cd ~"],
            expanded: false,
            cursor: None,
        };
        assert_eq!(panel.height(10), 2);
        let text = text_of(&mut panel, 2);
        assert!(text.contains("history (2/20)"));
        assert!(!text.contains("cd podcast"));
    }

    #[test]
    fn test_expanded_lists_newest_first() {
        let mut panel = HistoryPanel {
            entries: vec!["cd github", "cd podcast"],
            expanded: true,
            cursor: Some(1),
        };
        assert_eq!(panel.height(10), 4);
        let text = text_of(&mut panel, 4);
        let first = text.find("cd github").unwrap();
        let second = text.find("cd podcast").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_expanded_empty_placeholder() {
        let mut panel = HistoryPanel {
            entries: vec![],
            expanded: true,
            cursor: None,
        };
        assert!(text_of(&mut panel, 3).contains("no commands yet"));
        assert_eq!(panel.height(2), 2);
    }
}
