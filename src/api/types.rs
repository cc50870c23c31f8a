use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::content::{Contact, Episode, Internship};

// ============================================================================
// Read records
// ============================================================================

/// A podcast episode as stored by the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub youtube_url: String,
    pub slug: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// A project row. Internships are projects with `type = "internship"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub details: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub slug: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_subject: Option<String>,
    #[serde(default)]
    pub order_index: i64,
    #[serde(default = "default_published")]
    pub published: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub original_name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
}

/// `type` value of the projects the portfolio lists as internships.
pub const INTERNSHIP_KIND: &str = "internship";

fn default_published() -> bool {
    true
}

#[derive(Deserialize, Debug)]
pub struct EpisodesEnvelope {
    pub episodes: Vec<EpisodeRecord>,
}

#[derive(Deserialize, Debug)]
pub struct ProjectsEnvelope {
    pub projects: Vec<ProjectRecord>,
}

#[derive(Deserialize, Debug)]
pub struct ImagesEnvelope {
    pub images: Vec<ImageRecord>,
}

/// `{error, details?}` body sent with non-2xx statuses.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Reply to a create/update/delete/reorder call.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// The affected record's id and name, when the server echoes one back.
    #[serde(default, alias = "episode", alias = "project", alias = "image")]
    pub record: Option<RecordRef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RecordRef {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Dashboard counts from `GET /api/admin/analytics/overview`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AnalyticsOverview {
    #[serde(default)]
    pub visitor_count: u64,
    pub podcasts: PublishedCount,
    pub projects: PublishedCount,
    #[serde(default)]
    pub images: u64,
    #[serde(default)]
    pub recent_podcasts: Vec<RecentEpisode>,
    #[serde(default)]
    pub recent_projects: Vec<RecentProject>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedCount {
    pub published: u64,
    pub total: u64,
}

impl PublishedCount {
    pub fn drafts(&self) -> u64 {
        self.total.saturating_sub(self.published)
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RecentEpisode {
    pub title: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RecentProject {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

// ============================================================================
// Write payloads
// ============================================================================

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct EpisodeDraft {
    pub title: String,
    pub description: String,
    pub youtube_url: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Partial update; only `Some` fields are sent.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct EpisodePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    #[serde(rename = "type")]
    pub kind: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub details: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// One entry of a reorder request.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderEntry {
    pub id: i64,
    pub order_index: i64,
}

#[derive(Serialize, Debug)]
pub struct ReorderRequest<'a> {
    pub episodes: &'a [OrderEntry],
}

impl EpisodeDraft {
    /// Names of required fields that are blank, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("youtube_url", &self.youtube_url),
            ("slug", &self.slug),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl ProjectDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("type", &self.kind),
            ("company", &self.company),
            ("role", &self.role),
            ("period", &self.period),
            ("description", &self.description),
            ("details", &self.details),
            ("slug", &self.slug),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl EpisodePatch {
    pub fn is_empty(&self) -> bool {
        *self == EpisodePatch::default()
    }
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }
}

// ============================================================================
// Mapping onto content types
// ============================================================================

impl From<EpisodeRecord> for Episode {
    fn from(record: EpisodeRecord) -> Self {
        Episode {
            title: record.title,
            description: record.description,
            url: record.youtube_url,
            notes: record.notes.unwrap_or_default(),
            slug: Some(record.slug),
        }
    }
}

impl From<ProjectRecord> for Internship {
    fn from(record: ProjectRecord) -> Self {
        let contact = record
            .contact_email
            .filter(|email| !email.trim().is_empty())
            .map(|email| Contact {
                email,
                cc: None,
                subject: record.contact_subject.unwrap_or_default(),
            });
        Internship {
            slug: record.slug,
            company: record.company,
            role: record.role,
            period: record.period,
            description: record.description,
            details: record.details,
            tags: record.tags.unwrap_or_default(),
            contact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_record_maps_youtube_url() {
        let json = r#"{
            "id": 3, "title": "T", "description": "D",
            "youtube_url": "https://www.youtube.com/embed/abc", "slug": "t",
            "notes": null, "order_index": 2, "published": true,
            "created_at": "2025-01-02T03:04:05.123456"
        }"#;
        let record: EpisodeRecord = serde_json::from_str(json).unwrap();
        assert!(record.created_at.is_some());
        let episode = Episode::from(record);
        assert_eq!(episode.url, "https://www.youtube.com/embed/abc");
        assert_eq!(episode.notes, "");
        assert_eq!(episode.slug.as_deref(), Some("t"));
    }

    #[test]
    fn test_project_record_maps_contact_and_tags() {
        let json = r#"{
            "id": 1, "type": "internship", "company": "Turing", "role": "R",
            "period": "2025", "description": "d", "details": "- a",
            "tags": null, "slug": "turing",
            "contact_email": "a@b.c", "contact_subject": "Turing: ",
            "order_index": 0, "published": true
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "internship");
        let internship = Internship::from(record);
        assert!(internship.tags.is_empty());
        let contact = internship.contact.unwrap();
        assert_eq!(contact.email, "a@b.c");
        assert_eq!(contact.subject, "Turing: ");
    }

    #[test]
    fn test_blank_contact_email_means_no_contact() {
        let json = r#"{
            "type": "project", "company": "C", "role": "R", "period": "P",
            "description": "d", "details": "x", "slug": "c", "contact_email": ""
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert!(record.published);
        assert!(Internship::from(record).contact.is_none());
    }

    #[test]
    fn test_missing_fields_are_listed_in_order() {
        let draft = EpisodeDraft {
            title: "T".into(),
            description: " ".into(),
            ..Default::default()
        };
        assert_eq!(draft.missing_fields(), vec!["description", "youtube_url", "slug"]);
        assert_eq!(ProjectDraft::default().missing_fields()[0], "type");
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = EpisodePatch {
            published: Some(false),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"published":false}"#);
        assert!(EpisodePatch::default().is_empty());
    }

    #[test]
    fn test_mutation_response_accepts_any_record_key() {
        let json = r#"{"success":true,"message":"Image uploaded successfully",
            "image":{"id":9,"filename":"f.png","url":"/uploads/f.png"}}"#;
        let response: MutationResponse = serde_json::from_str(json).unwrap();
        let record = response.record.unwrap();
        assert_eq!(record.id, 9);
        assert_eq!(record.url.as_deref(), Some("/uploads/f.png"));

        let body = r#"{"success":true,"message":"Episode deleted successfully"}"#;
        let bare: MutationResponse = serde_json::from_str(body).unwrap();
        assert!(bare.record.is_none());
    }
}
