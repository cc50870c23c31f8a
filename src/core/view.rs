//! # View State
//!
//! What the visitor is looking at: one page, plus at most one detail
//! overlay belonging to that page.
//!
//! ```text
//! ViewState
//! ├── page: Page                      // home, podcast, ...
//! └── overlay: Option<Overlay>        // internship / idea / episode detail
//! ```
//!
//! The virtual path is derived from this struct rather than stored next
//! to it, so the prompt label can never disagree with the visible view.

use crate::core::page::Page;

/// A detail view layered over its page's list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Internship detail, by slug.
    Internship(String),
    /// Idea detail, by slug.
    Idea(String),
    /// Podcast episode detail, by zero-based index into the episode list.
    Episode(usize),
}

impl Overlay {
    /// The page this overlay lives under.
    pub fn owner(&self) -> Page {
        match self {
            Overlay::Internship(_) => Page::Internships,
            Overlay::Idea(_) => Page::Ideas,
            Overlay::Episode(_) => Page::Podcast,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Overlay::Internship(id) => format!("~/internships/{id}"),
            Overlay::Idea(id) => format!("~/ideas/{id}"),
            Overlay::Episode(index) => format!("~/podcast/{}", index + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    page: Page,
    overlay: Option<Overlay>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Switches page. Any overlay is dropped, even when the page is unchanged.
    pub fn set_page(&mut self, page: Page) {
        self.page = page;
        self.overlay = None;
    }

    /// Opens an overlay, moving to its owning page and replacing any other overlay.
    pub fn open(&mut self, overlay: Overlay) {
        self.page = overlay.owner();
        self.overlay = Some(overlay);
    }

    /// Closes the overlay if it matches `pred`. Returns whether anything closed.
    pub fn close_if(&mut self, pred: impl Fn(&Overlay) -> bool) -> bool {
        if self.overlay.as_ref().is_some_and(pred) {
            self.overlay = None;
            true
        } else {
            false
        }
    }

    pub fn path(&self) -> String {
        match &self.overlay {
            Some(overlay) => overlay.path(),
            None => self.page.path().to_string(),
        }
    }
}

/// Identifies one renderable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Page(Page),
    InternshipList,
    InternshipDetail,
    IdeaList,
    IdeaDetail,
    EpisodeList,
    EpisodeDetail,
}

/// Maps a view state to the panes that should be visible.
///
/// The first element is always the active page. Pages with a list/detail
/// pair contribute exactly one of the two.
pub fn visible_views(state: &ViewState) -> Vec<ViewId> {
    let page = state.page();
    let mut views = vec![ViewId::Page(page)];
    let overlay = state.overlay();
    match page {
        Page::Internships => views.push(match overlay {
            Some(Overlay::Internship(_)) => ViewId::InternshipDetail,
            _ => ViewId::InternshipList,
        }),
        Page::Ideas => views.push(match overlay {
            Some(Overlay::Idea(_)) => ViewId::IdeaDetail,
            _ => ViewId::IdeaList,
        }),
        Page::Podcast => views.push(match overlay {
            Some(Overlay::Episode(_)) => ViewId::EpisodeDetail,
            _ => ViewId::EpisodeList,
        }),
        Page::Home | Page::Vericare | Page::Github => {}
    }
    views
}
