//! Builds the blocks of text a page is made of.
//!
//! A page is a list of [`Section`]s stacked vertically. Cards in a list
//! view carry the [`Action`] that opens them, which is what makes them
//! selectable in navbar mode.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{Catalog, Episode, Idea, Internship};
use crate::core::action::Action;
use crate::core::page::Page;
use crate::core::router::Router;
use crate::core::view::ViewId;
use crate::tui::markdown;

/// Left gutter on every card title line; replaced by a marker when selected.
pub(super) const GUTTER: &str = "  ";

const HOME_COPY: &str = "\
# Tarush Gupta

Builder, founder, developer. Personal citadel showcasing my work in AI, startups, and research.

This is a terminal. Type `cd <section>` and press Enter to move around, or press F2 for tabs.

- `cd podcast`: the Neural Bridge podcast
- `cd vericare`: VeriCare AI
- `cd internships`: where I've worked
- `cd ideas`: startup ideas up for grabs
- `cd github`: code";

const VERICARE_COPY: &str = "\
# VeriCare AI

**Patient advocacy, augmented with AI.**

The first fully AI patient advocacy engine, built to dispute, negotiate, and reduce medical bills.

[tarush.ai/vericare](https://www.tarush.ai/vericare)";

const GITHUB_COPY: &str = "\
# GitHub

Open-source work, experiments and the source of this site.

[github.com/tarushgupta](https://github.com/tarushgupta)";

const PODCAST_TAGLINE: &str =
    "Neural Bridge: connecting younger generations to current professionals through discussions on AI.";

pub struct Section {
    pub lines: Vec<Line<'static>>,
    /// What Enter does when this section is selected.
    pub target: Option<Action>,
}

impl Section {
    fn plain(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            target: None,
        }
    }
}

/// Everything visible for the router's current view, at `width` columns.
pub fn build(router: &Router, width: u16) -> Vec<Section> {
    let catalog = router.catalog();
    let mut sections = Vec::new();
    for view in router.visible_views() {
        match view {
            ViewId::Page(page) => sections.extend(page_sections(page)),
            ViewId::InternshipList => sections.extend(
                catalog
                    .internships
                    .iter()
                    .map(|i| internship_card(i, width)),
            ),
            ViewId::InternshipDetail => {
                if let Some(internship) =
                    router.current_internship().and_then(|s| catalog.internship(s))
                {
                    sections.push(internship_detail(internship));
                }
            }
            ViewId::IdeaList => {
                sections.extend(catalog.ideas.iter().map(|i| idea_card(i, width)))
            }
            ViewId::IdeaDetail => {
                if let Some(idea) = router.current_idea().and_then(|s| catalog.idea(s)) {
                    sections.push(idea_detail(idea));
                }
            }
            ViewId::EpisodeList => sections.extend(
                catalog
                    .episodes
                    .iter()
                    .enumerate()
                    .map(|(index, e)| episode_card(catalog, index, e, width)),
            ),
            ViewId::EpisodeDetail => {
                if let Some(index) = router.current_episode()
                    && let Some(episode) = catalog.episode(index)
                {
                    sections.push(episode_detail(catalog, index, episode));
                }
            }
        }
    }
    sections
}

fn page_sections(page: Page) -> Vec<Section> {
    let copy = match page {
        Page::Home => HOME_COPY,
        Page::Vericare => VERICARE_COPY,
        Page::Github => GITHUB_COPY,
        Page::Podcast => {
            return vec![Section::plain(vec![
                heading("Podcast"),
                Line::styled(PODCAST_TAGLINE, Style::default().fg(Color::Gray)),
                Line::default(),
            ])];
        }
        Page::Internships => {
            return vec![Section::plain(vec![heading("Internships"), Line::default()])];
        }
        Page::Ideas => {
            return vec![Section::plain(vec![
                heading("Ideas"),
                Line::styled(
                    "Startup ideas I'd love to see built. Take one.",
                    Style::default().fg(Color::Gray),
                ),
                Line::default(),
            ])];
        }
    };
    vec![Section::plain(markdown::render(copy, Color::White).lines)]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )
}

/// Body text wrapped under a card title with a hanging indent.
fn wrapped(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(usize::from(width.max(8)))
        .initial_indent(GUTTER)
        .subsequent_indent(GUTTER);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| Line::styled(line.into_owned(), style))
        .collect()
}

fn tag_line(tags: &[String]) -> Line<'static> {
    let mut spans = vec![Span::raw(GUTTER)];
    for tag in tags {
        spans.push(Span::styled(
            format!("#{tag} "),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

fn title_line(title: String, meta: Option<String>) -> Line<'static> {
    let mut spans = vec![
        Span::raw(GUTTER),
        Span::styled(
            title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(meta) = meta {
        spans.push(Span::styled(
            format!("  {meta}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn card(mut lines: Vec<Line<'static>>, target: Action) -> Section {
    lines.push(Line::default());
    Section {
        lines,
        target: Some(target),
    }
}

fn internship_card(internship: &Internship, width: u16) -> Section {
    let mut lines = vec![title_line(
        internship.company.clone(),
        Some(format!("{} · {}", internship.role, internship.period)),
    )];
    lines.extend(wrapped(
        &internship.description,
        width,
        Style::default().fg(Color::Gray),
    ));
    if !internship.tags.is_empty() {
        lines.push(tag_line(&internship.tags));
    }
    card(lines, Action::Navigate(format!("internship-{}", internship.slug)))
}

fn idea_card(idea: &Idea, width: u16) -> Section {
    let mut lines = vec![title_line(idea.title.clone(), Some(format!("[{}]", idea.status)))];
    lines.extend(wrapped(&idea.summary, width, Style::default().fg(Color::Gray)));
    if !idea.tags.is_empty() {
        lines.push(tag_line(&idea.tags));
    }
    card(lines, Action::Navigate(format!("idea-{}", idea.slug)))
}

fn episode_card(catalog: &Catalog, index: usize, episode: &Episode, width: u16) -> Section {
    let mut lines = vec![title_line(
        format!("#{} {}", catalog.episode_number(index), episode.title),
        None,
    )];
    lines.extend(wrapped(
        &episode.description,
        width,
        Style::default().fg(Color::Gray),
    ));
    card(lines, Action::OpenEpisode(index))
}

fn back_hint(parent: &str) -> Line<'static> {
    Line::styled(
        format!("Esc or `cd ..` to return to {parent}"),
        Style::default().fg(Color::DarkGray),
    )
}

fn internship_detail(internship: &Internship) -> Section {
    let mut lines = vec![
        Line::styled(
            internship.company.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Line::from(vec![
            Span::styled(internship.role.clone(), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}", internship.period),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];
    if !internship.tags.is_empty() {
        let mut tags = tag_line(&internship.tags);
        tags.spans.remove(0);
        lines.push(tags);
    }
    lines.push(Line::default());
    lines.extend(markdown::render("## About the Role", Color::White).lines);
    lines.extend(markdown::render(&internship.details, Color::White).lines);

    if let Some(contact) = &internship.contact {
        let mut mailto = format!("mailto:{}?subject={}", contact.email, contact.subject);
        if let Some(cc) = &contact.cc {
            mailto.push_str(&format!("&cc={cc}"));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("contact  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                mailto,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(back_hint("internships"));
    Section::plain(lines)
}

fn idea_detail(idea: &Idea) -> Section {
    let mut lines = vec![
        Line::styled(
            idea.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
        Line::styled(
            format!("status: {}", idea.status),
            Style::default().fg(Color::Green),
        ),
        Line::default(),
    ];
    lines.extend(markdown::render(&idea.details, Color::White).lines);
    lines.push(Line::default());
    lines.push(back_hint("ideas"));
    Section::plain(lines)
}

fn episode_detail(catalog: &Catalog, index: usize, episode: &Episode) -> Section {
    let mut lines = vec![
        Line::styled(
            format!("Episode #{}", catalog.episode_number(index)),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            episode.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled("▶ watch  ", Style::default().fg(Color::Red)),
            Span::styled(
                episode.url.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::default(),
    ];
    lines.extend(markdown::render(&episode.notes, Color::White).lines);
    lines.push(Line::default());
    lines.push(back_hint("podcast"));
    Section::plain(lines)
}
