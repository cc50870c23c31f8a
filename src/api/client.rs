use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{EpisodesEnvelope, INTERNSHIP_KIND, ProjectsEnvelope};
use super::{ApiError, check_status, endpoint};
use crate::content::{Catalog, ContentOrigin, Episode, Internship};

/// Anything that can supply remote portfolio content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Published podcast episodes, newest first.
    async fn episodes(&self) -> Result<Vec<Episode>, ApiError>;

    /// Published internship-type projects, in display order.
    async fn projects(&self) -> Result<Vec<Internship>, ApiError>;
}

/// Read-only client for the public content endpoints.
pub struct ContentClient {
    base_url: String,
    client: reqwest::Client,
}

impl ContentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = endpoint(&self.base_url, path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn episodes(&self) -> Result<Vec<Episode>, ApiError> {
        let envelope: EpisodesEnvelope = self
            .get("/api/podcast/episodes")
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(envelope
            .episodes
            .into_iter()
            .filter(|record| record.published)
            .map(Episode::from)
            .collect())
    }

    async fn projects(&self) -> Result<Vec<Internship>, ApiError> {
        let envelope: ProjectsEnvelope = self
            .get(&format!("/api/projects?type={INTERNSHIP_KIND}"))
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        // Older servers ignore the filter.
        Ok(envelope
            .projects
            .into_iter()
            .filter(|record| record.published && record.kind == INTERNSHIP_KIND)
            .map(Internship::from)
            .collect())
    }
}

/// Result of [`load_catalog`]: never an error, since every failure falls back.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub origin: ContentOrigin,
}

/// Fetches both collections concurrently and merges them over `fallback`.
///
/// A failed or empty collection keeps the fallback's version. The origin is
/// `Remote` when both collections came from the API, `Builtin` when neither
/// did, and `Partial` otherwise.
pub async fn load_catalog(source: &dyn ContentSource, fallback: Catalog) -> CatalogLoad {
    let (episodes, projects) = futures::join!(source.episodes(), source.projects());

    let episodes = episodes
        .inspect_err(|e| warn!("Failed to fetch episodes, using built-in data: {}", e))
        .ok();
    let projects = projects
        .inspect_err(|e| warn!("Failed to fetch projects, using built-in data: {}", e))
        .ok();

    let mut catalog = fallback;
    let replaced = catalog.merge_remote(episodes, projects);
    let origin = match replaced {
        2 => ContentOrigin::Remote,
        0 => ContentOrigin::Builtin,
        _ => ContentOrigin::Partial,
    };
    info!(
        "Catalog ready: {} episodes, {} internships ({:?})",
        catalog.episodes.len(),
        catalog.internships.len(),
        origin
    );
    CatalogLoad { catalog, origin }
}
