//! # Content Catalog
//!
//! Read-only reference data the router navigates over: internships,
//! ideas and podcast episodes. The catalog starts as the built-in set
//! and may be replaced collection-by-collection with data from the
//! content API (see `api::load_catalog`).

mod builtin;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub cc: Option<String>,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub slug: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    /// Markdown body shown under "About the Role".
    pub details: String,
    pub tags: Vec<String>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub slug: String,
    pub title: String,
    pub status: String,
    pub summary: String,
    pub tags: Vec<String>,
    /// Markdown body.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub description: String,
    pub url: String,
    pub notes: String,
    pub slug: Option<String>,
}

/// Where the current catalog's collections came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentOrigin {
    /// Nothing was fetched; everything is built-in.
    #[default]
    Builtin,
    /// Some collections came from the API, the rest are built-in.
    Partial,
    /// Every fetched collection came from the API.
    Remote,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub internships: Vec<Internship>,
    pub ideas: Vec<Idea>,
    /// Newest first. Display numbers count down from `len()`.
    pub episodes: Vec<Episode>,
}

impl Catalog {
    /// The static fallback content shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            internships: builtin::internships(),
            ideas: builtin::ideas(),
            episodes: builtin::episodes(),
        }
    }

    pub fn internship(&self, slug: &str) -> Option<&Internship> {
        self.internships.iter().find(|i| i.slug == slug)
    }

    pub fn idea(&self, slug: &str) -> Option<&Idea> {
        self.ideas.iter().find(|i| i.slug == slug)
    }

    pub fn episode(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// The number shown on an episode card: the newest episode has the highest number.
    pub fn episode_number(&self, index: usize) -> usize {
        self.episodes.len().saturating_sub(index)
    }

    /// Replaces built-in collections with non-empty remote ones.
    ///
    /// Returns how many collections were replaced (0, 1 or 2).
    pub fn merge_remote(
        &mut self,
        episodes: Option<Vec<Episode>>,
        internships: Option<Vec<Internship>>,
    ) -> usize {
        let mut replaced = 0;
        if let Some(episodes) = episodes.filter(|e| !e.is_empty()) {
            self.episodes = episodes;
            replaced += 1;
        }
        if let Some(internships) = internships.filter(|i| !i.is_empty()) {
            self.internships = internships;
            replaced += 1;
        }
        replaced
    }
}
