//! # PathBar Component
//!
//! Top status line: the virtual path, where the content came from, and
//! the current notice if one is showing.
//!
//! ```text
//!  citadel  ~/internships/turing                    ! Content API unavailable...
//! ```
//!
//! Purely presentational. Every field is a prop copied out of `App` each
//! frame, so the bar never disagrees with the router.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::content::ContentOrigin;
use crate::core::router::NavMode;
use crate::core::state::NoticeLevel;
use crate::tui::component::Component;

pub struct PathBar {
    pub path: String,
    pub mode: NavMode,
    pub origin: ContentOrigin,
    pub notice: Option<(String, NoticeLevel)>,
}

impl PathBar {
    pub fn new(
        path: String,
        mode: NavMode,
        origin: ContentOrigin,
        notice: Option<(String, NoticeLevel)>,
    ) -> Self {
        Self {
            path,
            mode,
            origin,
            notice,
        }
    }

    fn origin_span(&self) -> Span<'static> {
        match self.origin {
            ContentOrigin::Remote => Span::styled("● live", Style::default().fg(Color::Green)),
            ContentOrigin::Partial => Span::styled("◐ partial", Style::default().fg(Color::Yellow)),
            ContentOrigin::Builtin => {
                Span::styled("○ built-in", Style::default().fg(Color::DarkGray))
            }
        }
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            NavMode::Terminal => "terminal",
            NavMode::Navbar => "navbar",
        }
    }
}

impl Component for PathBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = Line::from(vec![
            Span::styled(
                " citadel ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.path.clone(), Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            self.origin_span(),
            Span::styled(
                format!("  [{}]", self.mode_label()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let right = match &self.notice {
            Some((text, level)) => {
                let (marker, color) = match level {
                    NoticeLevel::Info => ("i ", Color::Cyan),
                    NoticeLevel::Warning => ("! ", Color::Yellow),
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(text.clone(), Style::default().fg(color)),
                ])
                .right_aligned()
            }
            None => Line::default(),
        };

        let left_width = left.width() as u16;
        let [left_area, right_area] =
            Layout::horizontal([Constraint::Length(left_width), Constraint::Min(0)]).areas(area);
        frame.render_widget(Paragraph::new(left), left_area);
        frame.render_widget(Paragraph::new(right), right_area);
    }
}
