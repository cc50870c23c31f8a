//! # NavBar Component
//!
//! Tab strip shown in navbar mode, with the active page highlighted.
//! Digits 1–6 and Left/Right switch pages; the digit shown next to each
//! tab is its shortcut.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Tabs};

use crate::core::page::Page;
use crate::tui::component::Component;

pub const NAV_BAR_HEIGHT: u16 = 3;

pub struct NavBar {
    pub active: Page,
}

/// Maps a digit key to the page it selects.
pub fn page_for_digit(c: char) -> Option<Page> {
    let n = c.to_digit(10)? as usize;
    n.checked_sub(1).and_then(|i| Page::ALL.get(i).copied())
}

impl Component for NavBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Page::ALL
            .iter()
            .enumerate()
            .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())));

        let tabs = Tabs::new(titles)
            .select(self.active.index())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" ←/→ 1-6  Enter: open  F2: terminal "),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("│");
        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_digits_map_to_pages() {
        assert_eq!(page_for_digit('1'), Some(Page::Home));
        assert_eq!(page_for_digit('4'), Some(Page::Internships));
        assert_eq!(page_for_digit('6'), Some(Page::Github));
        assert_eq!(page_for_digit('0'), None);
        assert_eq!(page_for_digit('7'), None);
        assert_eq!(page_for_digit('x'), None);
    }

    #[test]
    fn test_active_tab_is_highlighted() {
        let backend = TestBackend::new(100, NAV_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = NavBar {
            active: Page::Podcast,
        };
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let symbols: Vec<&str> = (0..100).map(|x| buffer[(x, 1)].symbol()).collect();
        // Column where `word` starts; borders are multi-byte so byte offsets won't do.
        let column = |word: &str| -> u16 {
            (0..symbols.len())
                .find(|&x| symbols[x..].concat().starts_with(word))
                .unwrap() as u16
        };
        for page in Page::ALL {
            column(page.title());
        }

        let x = column("Podcast");
        assert!(buffer[(x, 1)].modifier.contains(Modifier::REVERSED));
        let home_x = column("Home");
        assert!(!buffer[(home_x, 1)].modifier.contains(Modifier::REVERSED));
    }
}
