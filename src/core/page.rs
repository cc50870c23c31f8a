//! # Pages
//!
//! The static set of top-level pages. Every page has a virtual path
//! (what the prompt shows) and a view identifier (which pane is active).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Podcast,
    Vericare,
    Internships,
    Ideas,
    Github,
}

impl Page {
    /// All pages in navbar order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Podcast,
        Page::Vericare,
        Page::Internships,
        Page::Ideas,
        Page::Github,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Podcast => "podcast",
            Page::Vericare => "vericare",
            Page::Internships => "internships",
            Page::Ideas => "ideas",
            Page::Github => "github",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "~",
            Page::Podcast => "~/podcast",
            Page::Vericare => "~/vericare",
            Page::Internships => "~/internships",
            Page::Ideas => "~/ideas",
            Page::Github => "~/github",
        }
    }

    pub fn view_id(self) -> &'static str {
        match self {
            Page::Home => "page-home",
            Page::Podcast => "page-podcast",
            Page::Vericare => "page-vericare",
            Page::Internships => "page-internships",
            Page::Ideas => "page-ideas",
            Page::Github => "page-github",
        }
    }

    /// Label used in the navbar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Podcast => "Podcast",
            Page::Vericare => "VeriCare",
            Page::Internships => "Internships",
            Page::Ideas => "Ideas",
            Page::Github => "GitHub",
        }
    }

    /// Looks a page up by its key. Keys are matched exactly (callers lowercase first).
    pub fn from_key(key: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.key() == key)
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The neighbouring page in navbar order, wrapping at both ends.
    pub fn step(self, delta: isize) -> Page {
        let len = Page::ALL.len() as isize;
        let idx = (self.index() as isize + delta).rem_euclid(len);
        Page::ALL[idx as usize]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
