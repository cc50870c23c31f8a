//! Admin CRUD client.
//!
//! Every request carries the shared secret in [`ADMIN_TOKEN_HEADER`]. Drafts
//! are validated before anything is sent, so a missing field never costs a
//! round trip.

use std::path::Path;

use log::{debug, info};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AnalyticsOverview, EpisodeDraft, EpisodePatch, EpisodeRecord, EpisodesEnvelope, ImageRecord,
    ImagesEnvelope, MutationResponse, OrderEntry, ProjectDraft, ProjectPatch, ProjectRecord,
    ProjectsEnvelope, ReorderRequest,
};
use super::{ADMIN_TOKEN_HEADER, ApiError, check_status, endpoint};

/// File extensions the upload endpoint accepts.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "svg"];

pub struct AdminClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl AdminClient {
    /// Fails with [`ApiError::Config`] when the token is blank.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ApiError::Config(
                "admin token not set (use CITADEL_ADMIN_TOKEN, ADMIN_TOKEN or [api].admin_token)"
                    .to_string(),
            ));
        }
        Ok(Self {
            base_url: base_url.into(),
            token,
            client: reqwest::Client::new(),
        })
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = endpoint(&self.base_url, path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(ADMIN_TOKEN_HEADER, &self.token)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<MutationResponse, ApiError> {
        self.send(self.request(method, path).json(body)).await
    }

    // ── Episodes ────────────────────────────────────────────────────────

    /// All episodes, including unpublished ones.
    pub async fn list_episodes(&self) -> Result<Vec<EpisodeRecord>, ApiError> {
        let envelope: EpisodesEnvelope = self
            .send(self.request(Method::GET, "/api/podcast/episodes?published_only=false"))
            .await?;
        Ok(envelope.episodes)
    }

    pub async fn create_episode(&self, draft: &EpisodeDraft) -> Result<MutationResponse, ApiError> {
        require_fields(&draft.missing_fields())?;
        let response = self
            .send_json(Method::POST, "/api/admin/podcast/episodes", draft)
            .await?;
        info!("Created episode '{}'", draft.slug);
        Ok(response)
    }

    pub async fn update_episode(
        &self,
        id: i64,
        patch: &EpisodePatch,
    ) -> Result<MutationResponse, ApiError> {
        if patch.is_empty() {
            return Err(ApiError::Validation("No fields to update".to_string()));
        }
        self.send_json(Method::PUT, &format!("/api/admin/podcast/episodes/{id}"), patch)
            .await
    }

    pub async fn delete_episode(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.send(self.request(Method::DELETE, &format!("/api/admin/podcast/episodes/{id}")))
            .await
    }

    /// Sets `order_index` for each listed episode. Higher sorts first.
    pub async fn reorder_episodes(
        &self,
        order: &[OrderEntry],
    ) -> Result<MutationResponse, ApiError> {
        self.send_json(
            Method::POST,
            "/api/admin/podcast/reorder",
            &ReorderRequest { episodes: order },
        )
        .await
    }

    // ── Projects ────────────────────────────────────────────────────────

    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        let envelope: ProjectsEnvelope = self
            .send(self.request(Method::GET, "/api/projects?published_only=false"))
            .await?;
        Ok(envelope.projects)
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<MutationResponse, ApiError> {
        require_fields(&draft.missing_fields())?;
        let response = self.send_json(Method::POST, "/api/admin/projects", draft).await?;
        info!("Created project '{}'", draft.slug);
        Ok(response)
    }

    pub async fn update_project(
        &self,
        id: i64,
        patch: &ProjectPatch,
    ) -> Result<MutationResponse, ApiError> {
        if patch.is_empty() {
            return Err(ApiError::Validation("No fields to update".to_string()));
        }
        self.send_json(Method::PUT, &format!("/api/admin/projects/{id}"), patch)
            .await
    }

    pub async fn delete_project(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.send(self.request(Method::DELETE, &format!("/api/admin/projects/{id}")))
            .await
    }

    // ── Analytics ───────────────────────────────────────────────────────

    /// Visitor count and published/total content counts.
    pub async fn analytics_overview(&self) -> Result<AnalyticsOverview, ApiError> {
        self.send(self.request(Method::GET, "/api/admin/analytics/overview"))
            .await
    }

    // ── Images ──────────────────────────────────────────────────────────

    pub async fn list_images(&self) -> Result<Vec<ImageRecord>, ApiError> {
        let envelope: ImagesEnvelope = self.send(self.request(Method::GET, "/api/images")).await?;
        Ok(envelope.images)
    }

    /// Uploads a local image file as multipart `file` with optional `alt_text`.
    pub async fn upload_image(
        &self,
        path: &Path,
        alt_text: &str,
    ) -> Result<MutationResponse, ApiError> {
        let file_name = image_file_name(path)?;
        let bytes = tokio::fs::read(path).await?;
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.clone()))
            .text("alt_text", alt_text.to_string());
        let response: MutationResponse = self
            .send(self.request(Method::POST, "/api/admin/images/upload").multipart(form))
            .await?;
        info!("Uploaded image '{}'", file_name);
        Ok(response)
    }

    pub async fn delete_image(&self, id: i64) -> Result<MutationResponse, ApiError> {
        self.send(self.request(Method::DELETE, &format!("/api/admin/images/{id}")))
            .await
    }
}

fn require_fields(missing: &[&str]) -> Result<(), ApiError> {
    match missing.first() {
        Some(field) => Err(ApiError::Validation(format!("Missing required field: {field}"))),
        None => Ok(()),
    }
}

/// The upload name for `path`, if its extension is one the server accepts.
fn image_file_name(path: &Path) -> Result<String, ApiError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::Validation("No file selected".to_string()))?;
    let allowed = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| ALLOWED_IMAGE_EXTENSIONS.contains(&e.as_str()));
    if !allowed {
        return Err(ApiError::Validation("File type not allowed".to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_config_error() {
        assert!(matches!(AdminClient::new("http://x", "  "), Err(ApiError::Config(_))));
        assert!(AdminClient::new("http://x", "secret").is_ok());
    }

    #[test]
    fn test_image_extension_rules() {
        assert_eq!(image_file_name(Path::new("/tmp/a.PNG")).unwrap(), "a.PNG");
        assert!(image_file_name(Path::new("/tmp/a.webp")).is_ok());
        assert!(matches!(
            image_file_name(Path::new("/tmp/a.exe")),
            Err(ApiError::Validation(msg)) if msg == "File type not allowed"
        ));
        assert!(image_file_name(Path::new("/tmp/noext")).is_err());
    }

    #[test]
    fn test_create_episode_validates_before_sending() {
        // Unroutable base URL: reaching the network would be a Network error.
        let client = AdminClient::new("http://127.0.0.1:9", "secret").unwrap();
        let draft = EpisodeDraft {
            title: "T".into(),
            description: "D".into(),
            youtube_url: "https://youtube.com/embed/x".into(),
            ..Default::default()
        };
        let result = tokio_test::block_on(client.create_episode(&draft));
        assert!(matches!(
            result,
            Err(ApiError::Validation(msg)) if msg == "Missing required field: slug"
        ));
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        let client = AdminClient::new("http://127.0.0.1:9", "secret").unwrap();
        let result = tokio_test::block_on(client.update_project(1, &ProjectPatch::default()));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
