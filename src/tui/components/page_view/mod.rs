//! # PageView Component
//!
//! Scrollable body for whatever the router is showing: a page's copy, its
//! list of cards, or a detail overlay.
//!
//! ## Architecture
//!
//! Same split as the other stateful components. `PageView` is rebuilt each
//! frame from the router (props) and a `&mut PageViewState` (persistent
//! scroll offset and card selection). The render pass records where each
//! selectable card landed so keyboard selection can scroll to it later.
//!
//! Scroll position and selection reset whenever the virtual path changes;
//! landing on a new page always starts at the top.

mod sections;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::router::Router;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use sections::Section;

const SELECTED_MARKER: &str = "▶ ";

/// Where a selectable card sits in the scroll canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardSpan {
    top: u16,
    height: u16,
}

/// Scroll and selection state, persisted in `TuiState`.
pub struct PageViewState {
    pub scroll_state: ScrollViewState,
    /// Index into the current view's selectable cards.
    pub selected: Option<usize>,
    targets: Vec<Action>,
    cards: Vec<CardSpan>,
    viewport_height: u16,
    content_height: u16,
    shown_path: String,
}

impl Default for PageViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: None,
            targets: Vec::new(),
            cards: Vec::new(),
            viewport_height: 0,
            content_height: 0,
            shown_path: String::new(),
        }
    }

    /// Drops scroll and selection when the view changed since the last frame.
    fn sync_path(&mut self, path: &str) {
        if self.shown_path != path {
            self.shown_path = path.to_string();
            self.scroll_state.scroll_to_top();
            self.selected = None;
        }
    }

    /// The action Enter would trigger right now.
    pub fn selected_target(&self) -> Option<&Action> {
        self.selected.and_then(|i| self.targets.get(i))
    }

    fn select_next(&mut self) {
        if self.targets.is_empty() {
            return;
        }
        let last = self.targets.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
        self.scroll_to_selected();
    }

    fn select_prev(&mut self) {
        if self.targets.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        self.scroll_to_selected();
    }

    /// Scrolls just enough to bring the selected card fully on screen.
    fn scroll_to_selected(&mut self) {
        let Some(card) = self.selected.and_then(|i| self.cards.get(i)).copied() else {
            return;
        };
        let offset = self.scroll_state.offset().y;
        let bottom = card.top + card.height;
        let y = if card.top < offset {
            card.top
        } else if bottom > offset + self.viewport_height {
            bottom.saturating_sub(self.viewport_height)
        } else {
            return;
        };
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Up/Down move the card selection, Enter emits the selected card's action,
/// wheel and PageUp/PageDown scroll.
impl EventHandler for PageViewState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            TuiEvent::Down => self.select_next(),
            TuiEvent::Up => self.select_prev(),
            TuiEvent::Enter => return self.selected_target().cloned(),
            _ => {}
        }
        None
    }
}

pub struct PageView<'a> {
    pub state: &'a mut PageViewState,
    pub router: &'a Router,
    /// Draw the selection marker (navbar mode only).
    pub show_selection: bool,
}

impl<'a> PageView<'a> {
    pub fn new(state: &'a mut PageViewState, router: &'a Router, show_selection: bool) -> Self {
        Self {
            state,
            router,
            show_selection,
        }
    }
}

fn section_paragraph(section: &Section, selected: bool) -> Paragraph<'static> {
    let mut lines = section.lines.clone();
    if selected && let Some(first) = lines.first_mut() {
        let marker = Span::styled(
            SELECTED_MARKER,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        );
        match first.spans.first_mut() {
            Some(span) => *span = marker,
            None => first.spans.push(marker),
        }
    }
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    if selected {
        paragraph.style(Style::default().bg(Color::Indexed(236)))
    } else {
        paragraph
    }
}

impl Component for PageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.sync_path(&self.router.path());

        // One column for the scrollbar, one for breathing room on the left.
        let content_width = area.width.saturating_sub(2);
        let sections = sections::build(self.router, content_width);

        let mut targets = Vec::new();
        let mut cards = Vec::new();
        let mut placed = Vec::with_capacity(sections.len());
        let mut y: u16 = 0;
        for section in &sections {
            let is_selected = self.show_selection
                && section.target.is_some()
                && self.state.selected == Some(targets.len());
            let paragraph = section_paragraph(section, is_selected);
            let height = paragraph.line_count(content_width) as u16;
            if let Some(target) = &section.target {
                targets.push(target.clone());
                cards.push(CardSpan { top: y, height });
            }
            placed.push((paragraph, Rect::new(1, y, content_width, height)));
            y = y.saturating_add(height);
        }

        self.state.targets = targets;
        self.state.cards = cards;
        self.state.content_height = y;
        self.state.viewport_height = area.height;
        if let Some(i) = self.state.selected
            && i >= self.state.targets.len()
        {
            self.state.selected = None;
        }
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width + 1, y))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        for (paragraph, rect) in placed {
            scroll_view.render_widget(paragraph, rect);
        }
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
