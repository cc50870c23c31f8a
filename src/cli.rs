//! # Command Line
//!
//! `citadel` with no subcommand runs the portfolio TUI. `citadel admin ...`
//! talks to the content API's admin endpoints and prints the result.
//!
//! ```text
//! citadel [--api-url URL] [--skip-intro] [--offline]
//! citadel admin episodes  list | add | edit <id> | remove <id> | reorder <id:index>...
//! citadel admin projects  list | add | edit <id> | remove <id>
//! citadel admin images    list | upload <path> | remove <id>
//! citadel admin stats
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;

use crate::api::types::{
    AnalyticsOverview, EpisodeDraft, EpisodePatch, EpisodeRecord, INTERNSHIP_KIND, ImageRecord,
    MutationResponse, OrderEntry, ProjectDraft, ProjectPatch, ProjectRecord,
};
use crate::api::{AdminClient, ApiError};
use crate::core::config::{CliOverrides, ResolvedConfig};

#[derive(Parser, Debug)]
#[command(name = "citadel", about = "Terminal portfolio", version)]
pub struct Args {
    /// Content API base URL
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Go straight to the portfolio
    #[arg(long)]
    pub skip_intro: bool,

    /// Use built-in content only; never contact the API
    #[arg(long)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            skip_intro: self.skip_intro,
            offline: self.offline,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage published content (needs an admin token)
    Admin {
        #[command(subcommand)]
        resource: Resource,
    },
}

#[derive(Subcommand, Debug)]
pub enum Resource {
    /// Podcast episodes
    Episodes {
        #[command(subcommand)]
        action: EpisodeAction,
    },
    /// Projects (internships and others)
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Uploaded images
    Images {
        #[command(subcommand)]
        action: ImageAction,
    },
    /// Visitor count and content totals
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum EpisodeAction {
    List,
    Add(EpisodeFields),
    Edit {
        id: i64,
        #[command(flatten)]
        fields: EpisodeFields,
    },
    Remove {
        id: i64,
    },
    /// Set display order, e.g. `reorder 3:10 5:9`. Higher sorts first.
    Reorder {
        #[arg(value_name = "ID:INDEX", required = true, value_parser = parse_order_entry)]
        entries: Vec<OrderEntry>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    List,
    Add(ProjectFields),
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ProjectFields,
    },
    Remove {
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImageAction {
    List,
    Upload {
        path: PathBuf,
        #[arg(long, default_value = "")]
        alt: String,
    },
    Remove {
        id: i64,
    },
}

/// Episode fields. All optional here: `add` validates required ones
/// client-side, `edit` sends only what was given.
#[derive(ClapArgs, Debug, Default, Clone)]
pub struct EpisodeFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub youtube_url: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    #[arg(long)]
    pub order_index: Option<i64>,
    #[arg(long)]
    pub published: Option<bool>,
}

impl EpisodeFields {
    fn into_draft(self) -> EpisodeDraft {
        EpisodeDraft {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            youtube_url: self.youtube_url.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            notes: self.notes,
            order_index: self.order_index,
            published: self.published,
        }
    }

    fn into_patch(self) -> EpisodePatch {
        EpisodePatch {
            title: self.title,
            description: self.description,
            youtube_url: self.youtube_url,
            slug: self.slug,
            notes: self.notes,
            order_index: self.order_index,
            published: self.published,
        }
    }
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct ProjectFields {
    /// Project type; the portfolio lists `internship` projects
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub period: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Markdown body shown on the detail view
    #[arg(long)]
    pub details: Option<String>,
    #[arg(long)]
    pub slug: Option<String>,
    /// Repeat for several tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub contact_email: Option<String>,
    #[arg(long)]
    pub contact_subject: Option<String>,
    #[arg(long)]
    pub order_index: Option<i64>,
    #[arg(long)]
    pub published: Option<bool>,
}

impl ProjectFields {
    fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            kind: self.kind.unwrap_or_else(|| INTERNSHIP_KIND.to_string()),
            company: self.company.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            period: self.period.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            details: self.details.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            tags: self.tags,
            contact_email: self.contact_email,
            contact_subject: self.contact_subject,
            order_index: self.order_index,
            published: self.published,
        }
    }

    fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            kind: self.kind,
            company: self.company,
            role: self.role,
            period: self.period,
            description: self.description,
            details: self.details,
            slug: self.slug,
            tags: (!self.tags.is_empty()).then_some(self.tags),
            contact_email: self.contact_email,
            contact_subject: self.contact_subject,
            order_index: self.order_index,
            published: self.published,
        }
    }
}

fn parse_order_entry(raw: &str) -> Result<OrderEntry, String> {
    let (id, index) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected ID:INDEX, got '{raw}'"))?;
    let id = id.trim().parse().map_err(|_| format!("bad id in '{raw}'"))?;
    let order_index = index
        .trim()
        .parse()
        .map_err(|_| format!("bad index in '{raw}'"))?;
    Ok(OrderEntry { id, order_index })
}

// ============================================================================
// Running admin commands
// ============================================================================

/// Runs one admin command and returns the lines to print.
pub async fn run_admin(
    resource: Resource,
    config: &ResolvedConfig,
) -> Result<Vec<String>, ApiError> {
    let token = config.admin_token.clone().unwrap_or_default();
    let client = AdminClient::new(config.api_base_url.clone(), token)?;
    info!("Admin command against {}: {:?}", config.api_base_url, resource);

    match resource {
        Resource::Episodes { action } => match action {
            EpisodeAction::List => {
                let episodes = client.list_episodes().await?;
                Ok(episodes.iter().map(episode_line).collect())
            }
            EpisodeAction::Add(fields) => {
                confirm(client.create_episode(&fields.into_draft()).await)
            }
            EpisodeAction::Edit { id, fields } => {
                confirm(client.update_episode(id, &fields.into_patch()).await)
            }
            EpisodeAction::Remove { id } => confirm(client.delete_episode(id).await),
            EpisodeAction::Reorder { entries } => {
                confirm(client.reorder_episodes(&entries).await)
            }
        },
        Resource::Projects { action } => match action {
            ProjectAction::List => {
                let projects = client.list_projects().await?;
                Ok(projects.iter().map(project_line).collect())
            }
            ProjectAction::Add(fields) => {
                confirm(client.create_project(&fields.into_draft()).await)
            }
            ProjectAction::Edit { id, fields } => {
                confirm(client.update_project(id, &fields.into_patch()).await)
            }
            ProjectAction::Remove { id } => confirm(client.delete_project(id).await),
        },
        Resource::Images { action } => match action {
            ImageAction::List => {
                let images = client.list_images().await?;
                Ok(images.iter().map(image_line).collect())
            }
            ImageAction::Upload { path, alt } => {
                confirm(client.upload_image(&path, &alt).await)
            }
            ImageAction::Remove { id } => confirm(client.delete_image(id).await),
        },
        Resource::Stats => Ok(stats_lines(&client.analytics_overview().await?)),
    }
}

fn confirm(result: Result<MutationResponse, ApiError>) -> Result<Vec<String>, ApiError> {
    result.map(|response| vec![mutation_line(&response)])
}

fn id_column(id: Option<i64>) -> String {
    id.map_or_else(|| "-".to_string(), |id| id.to_string())
}

fn draft_marker(published: bool) -> &'static str {
    if published { "" } else { "  (draft)" }
}

fn episode_line(episode: &EpisodeRecord) -> String {
    format!(
        "{:>4}  [{:>3}]  {:<24} {}{}",
        id_column(episode.id),
        episode.order_index,
        episode.slug,
        episode.title,
        draft_marker(episode.published)
    )
}

fn project_line(project: &ProjectRecord) -> String {
    format!(
        "{:>4}  {:<12} {} - {} ({})  {}{}",
        id_column(project.id),
        project.kind,
        project.company,
        project.role,
        project.period,
        project.slug,
        draft_marker(project.published)
    )
}

fn image_line(image: &ImageRecord) -> String {
    format!("{:>4}  {:<32} {}", image.id, image.filename, image.url)
}

fn stats_lines(overview: &AnalyticsOverview) -> Vec<String> {
    let mut lines = vec![
        format!("visitors  {}", overview.visitor_count),
        format!(
            "episodes  {} published / {} total ({} drafts)",
            overview.podcasts.published,
            overview.podcasts.total,
            overview.podcasts.drafts()
        ),
        format!(
            "projects  {} published / {} total ({} drafts)",
            overview.projects.published,
            overview.projects.total,
            overview.projects.drafts()
        ),
        format!("images    {}", overview.images),
    ];
    if !overview.recent_podcasts.is_empty() {
        lines.push("recent episodes:".to_string());
        lines.extend(
            overview
                .recent_podcasts
                .iter()
                .map(|episode| format!("  {}", episode.title)),
        );
    }
    if !overview.recent_projects.is_empty() {
        lines.push("recent projects:".to_string());
        lines.extend(
            overview
                .recent_projects
                .iter()
                .map(|project| format!("  {} - {}", project.company, project.role)),
        );
    }
    lines
}

fn mutation_line(response: &MutationResponse) -> String {
    let message = if response.message.is_empty() {
        "Done"
    } else {
        response.message.as_str()
    };
    match &response.record {
        Some(record) => format!("{message} (id {})", record.id),
        None => message.to_string(),
    }
}
