//! # Portfolio Router
//!
//! Owns the view state, the command input field, command history and the
//! suggestion cycle. Every visitor action funnels through one of two entry
//! points: [`Router::execute_command`] for typed lines and
//! [`Router::navigate_to`] for buttons and the navbar.
//!
//! ```text
//! Router
//! ├── view: ViewState               // page + at most one overlay
//! ├── input: String                 // command field contents
//! ├── history: CommandHistory       // newest-first, max 20
//! ├── history_expanded: bool        // history panel open?
//! ├── suggestions: SuggestionCycle  // hint + 5s timer
//! ├── mode: NavMode                 // terminal prompt or navbar
//! └── catalog: Catalog              // what overlays can point at
//! ```
//!
//! Each operation runs to completion before returning, so two commands can
//! never interleave. Unrecognised commands and targets are silently ignored.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::content::Catalog;
use crate::core::command::{self, CdTarget, Command};
use crate::core::history::CommandHistory;
use crate::core::page::Page;
use crate::core::suggest::{self, SuggestionCycle};
use crate::core::view::{Overlay, ViewId, ViewState, visible_views};

/// How the visitor navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMode {
    /// Typed `cd` commands at the bottom prompt.
    #[default]
    Terminal,
    /// A conventional tab bar.
    Navbar,
}

/// A `navigate_to` target as given by UI buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Page(Page),
    Internship(String),
    Idea(String),
}

impl NavTarget {
    /// Parses `"<page>"`, `"internship-<slug>"` or `"idea-<slug>"`.
    pub fn parse(target: &str) -> Option<NavTarget> {
        if let Some(slug) = target.strip_prefix("internship-") {
            return Some(NavTarget::Internship(slug.to_string()));
        }
        if let Some(slug) = target.strip_prefix("idea-") {
            return Some(NavTarget::Idea(slug.to_string()));
        }
        Page::from_key(target).map(NavTarget::Page)
    }
}

pub struct Router {
    view: ViewState,
    input: String,
    history: CommandHistory,
    history_expanded: bool,
    suggestions: SuggestionCycle,
    mode: NavMode,
    active: bool,
    catalog: Catalog,
}

impl Router {
    pub fn new(catalog: Catalog, suggestion_period: Duration) -> Self {
        Self {
            view: ViewState::new(),
            input: String::new(),
            history: CommandHistory::new(),
            history_expanded: false,
            suggestions: SuggestionCycle::new(suggestion_period),
            mode: NavMode::Terminal,
            active: false,
            catalog,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn current_page(&self) -> Page {
        self.view.page()
    }

    pub fn current_internship(&self) -> Option<&str> {
        match self.view.overlay() {
            Some(Overlay::Internship(slug)) => Some(slug),
            _ => None,
        }
    }

    pub fn current_idea(&self) -> Option<&str> {
        match self.view.overlay() {
            Some(Overlay::Idea(slug)) => Some(slug),
            _ => None,
        }
    }

    pub fn current_episode(&self) -> Option<usize> {
        match self.view.overlay() {
            Some(Overlay::Episode(index)) => Some(*index),
            _ => None,
        }
    }

    /// The `~/...` label for the prompt.
    pub fn path(&self) -> String {
        self.view.path()
    }

    pub fn visible_views(&self) -> Vec<ViewId> {
        visible_views(&self.view)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_expanded(&self) -> bool {
        self.history_expanded
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn suggestion(&self) -> &'static str {
        self.suggestions.current()
    }

    pub fn suggestions_running(&self) -> bool {
        self.suggestions.is_running()
    }

    /// The cycling hint is shown only in terminal mode with an empty field.
    pub fn hint_visible(&self) -> bool {
        self.mode == NavMode::Terminal && self.input.is_empty()
    }

    pub fn ghost_text(&self) -> Option<&'static str> {
        suggest::ghost_text(&self.input, self.suggestions.current())
    }

    /// The "back home" affordance: terminal mode, away from home.
    pub fn back_visible(&self) -> bool {
        self.mode == NavMode::Terminal && self.view.page() != Page::Home
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Hand-off from the intro: start the suggestion cycle.
    pub fn activate(&mut self, now: Instant) {
        if self.active {
            return;
        }
        self.active = true;
        if self.mode == NavMode::Terminal {
            self.suggestions.start(now);
        }
        info!("Router activated at {}", self.path());
    }

    /// Advances timers. Returns whether anything visible changed.
    ///
    /// The suggestion timer keeps running while the visitor types; only the
    /// hint is hidden. Stopping it would shift when cycling resumes.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.suggestions.tick(now)
    }

    /// Swaps in freshly loaded content. An overlay pointing at something
    /// that no longer exists is closed.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        let stale = match self.view.overlay() {
            Some(Overlay::Internship(slug)) => self.catalog.internship(slug).is_none(),
            Some(Overlay::Idea(slug)) => self.catalog.idea(slug).is_none(),
            Some(Overlay::Episode(index)) => self.catalog.episode(*index).is_none(),
            None => false,
        };
        if stale {
            debug!("Closing stale overlay after catalog refresh");
            self.view.close_if(|_| true);
        }
    }

    /// Switches between terminal and navbar presentation.
    ///
    /// The suggestion timer only runs in terminal mode; it is re-armed on
    /// the way back so there is never more than one running.
    pub fn toggle_mode(&mut self, now: Instant) {
        self.mode = match self.mode {
            NavMode::Terminal => {
                self.suggestions.stop();
                NavMode::Navbar
            }
            NavMode::Navbar => {
                if self.active {
                    self.suggestions.start(now);
                }
                NavMode::Terminal
            }
        };
        info!("Navigation mode: {:?}", self.mode);
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Button entry point: a page key, `internship-<slug>` or `idea-<slug>`.
    /// Unknown targets are ignored.
    pub fn navigate_to(&mut self, target: &str) {
        match NavTarget::parse(target) {
            Some(NavTarget::Page(page)) => self.navigate(page),
            Some(NavTarget::Internship(slug)) => {
                self.show_internship_detail(&slug);
            }
            Some(NavTarget::Idea(slug)) => {
                if self.catalog.idea(&slug).is_some() {
                    self.navigate(Page::Ideas);
                    self.show_idea_detail(&slug);
                }
            }
            None => debug!("navigate_to: unknown target '{}'", target),
        }
    }

    /// Activates a page, closing any overlay and clearing the input field.
    pub fn navigate(&mut self, page: Page) {
        self.view.set_page(page);
        self.input.clear();
        debug!("Navigated to {}", self.path());
    }

    pub fn show_internship_detail(&mut self, slug: &str) -> bool {
        if self.catalog.internship(slug).is_none() {
            return false;
        }
        self.view.open(Overlay::Internship(slug.to_string()));
        true
    }

    pub fn hide_internship_detail(&mut self) {
        self.view.close_if(|o| matches!(o, Overlay::Internship(_)));
    }

    pub fn show_idea_detail(&mut self, slug: &str) -> bool {
        if self.catalog.idea(slug).is_none() {
            return false;
        }
        self.view.open(Overlay::Idea(slug.to_string()));
        true
    }

    pub fn hide_idea_detail(&mut self) {
        self.view.close_if(|o| matches!(o, Overlay::Idea(_)));
    }

    pub fn show_podcast_detail(&mut self, index: usize) -> bool {
        if self.catalog.episode(index).is_none() {
            return false;
        }
        self.view.open(Overlay::Episode(index));
        true
    }

    pub fn hide_podcast_detail(&mut self) {
        self.view.close_if(|o| matches!(o, Overlay::Episode(_)));
    }

    /// `cd ..`: close the open overlay, else go home.
    pub fn go_up(&mut self) {
        match self.view.overlay() {
            Some(Overlay::Internship(_)) => self.hide_internship_detail(),
            Some(Overlay::Idea(_)) => self.hide_idea_detail(),
            Some(Overlay::Episode(_)) => self.hide_podcast_detail(),
            None => self.navigate(Page::Home),
        }
    }

    // ── Commands ────────────────────────────────────────────────────────

    /// Records, clears the field, then runs one typed line.
    pub fn execute_command(&mut self, raw: &str) -> Command {
        self.history.push(raw);
        self.history.reset_cursor();
        self.input.clear();

        let command = command::parse(raw, &self.catalog);
        debug!("Command '{}' parsed as {:?}", raw.trim(), command);
        match &command {
            Command::Cd(target) => self.cd(target),
            Command::Clear => self.history.clear(),
            Command::History => self.history_expanded = true,
            Command::Unrecognized => {}
        }
        command
    }

    fn cd(&mut self, target: &CdTarget) {
        match target {
            CdTarget::Parent => self.go_up(),
            CdTarget::Page(page) => self.navigate(*page),
            CdTarget::Internship(slug) => {
                self.navigate(Page::Internships);
                self.show_internship_detail(slug);
            }
            CdTarget::Idea(slug) => {
                self.navigate(Page::Ideas);
                self.show_idea_detail(slug);
            }
            CdTarget::Episode(index) => {
                self.navigate(Page::Podcast);
                self.show_podcast_detail(*index);
            }
            CdTarget::Unresolved(_) => {}
        }
    }

    // ── Input field ─────────────────────────────────────────────────────

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Enter: runs whatever is in the field.
    pub fn submit(&mut self) -> Command {
        let line = std::mem::take(&mut self.input);
        self.execute_command(&line)
    }

    /// Tab: complete to the current suggestion when the field is empty or a prefix of it.
    pub fn accept_suggestion(&mut self) -> bool {
        match suggest::accept(&self.input, self.suggestions.current()) {
            Some(full) => {
                self.input = full;
                true
            }
            None => false,
        }
    }

    pub fn next_suggestion(&mut self) {
        self.suggestions.next();
    }

    pub fn prev_suggestion(&mut self) {
        self.suggestions.prev();
    }

    /// Up arrow.
    pub fn recall_older(&mut self) {
        if let Some(entry) = self.history.older() {
            self.input = entry.to_string();
        }
    }

    /// Down arrow.
    pub fn recall_newer(&mut self) {
        self.input = self.history.newer().to_string();
    }

    pub fn toggle_history_panel(&mut self) {
        self.history_expanded = !self.history_expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_router;

    #[test]
    fn test_initial_state() {
        let router = test_router();
        assert_eq!(router.current_page(), Page::Home);
        assert_eq!(router.path(), "~");
        assert!(router.view().overlay().is_none());
        assert!(!router.is_active());
    }

    #[test]
    fn test_cd_section_is_idempotent() {
        let mut router = test_router();
        for page in Page::ALL {
            router.execute_command(&format!("cd {}", page.key()));
            assert_eq!(router.path(), page.path());
            let before = router.view().clone();
            router.execute_command(&format!("cd {}", page.key()));
            assert_eq!(router.view(), &before);
        }
    }

    #[test]
    fn test_cd_internship_opens_overlay() {
        let mut router = test_router();
        router.execute_command("cd internships/turing");
        assert_eq!(router.current_page(), Page::Internships);
        assert_eq!(router.current_internship(), Some("turing"));
        assert_eq!(router.path(), "~/internships/turing");
        let company = router
            .catalog()
            .internship("turing")
            .map(|i| i.company.clone());
        assert_eq!(company.as_deref(), Some("Turing"));
        assert_eq!(
            router.visible_views(),
            vec![ViewId::Page(Page::Internships), ViewId::InternshipDetail]
        );
    }

    #[test]
    fn test_opening_overlay_closes_previous() {
        let mut router = test_router();
        router.execute_command("cd internships/turing");
        router.execute_command("cd ideas/resume-tailor");
        assert_eq!(router.current_internship(), None);
        assert_eq!(router.current_idea(), Some("resume-tailor"));
        assert_eq!(router.current_page(), Page::Ideas);
    }

    #[test]
    fn test_cd_home_from_overlay_returns_to_list() {
        let mut router = test_router();
        router.execute_command("cd internships/turing");
        router.execute_command("cd ~");
        assert_eq!(router.current_page(), Page::Internships);
        assert_eq!(router.path(), "~/internships");

        router.execute_command("cd ~");
        assert_eq!(router.current_page(), Page::Home);
        assert_eq!(router.path(), "~");
    }

    #[test]
    fn test_cd_up_closes_idea_and_episode() {
        let mut router = test_router();
        router.navigate_to("idea-meeting-cost");
        router.execute_command("cd ..");
        assert_eq!(router.path(), "~/ideas");

        router.execute_command("cd podcast/2");
        assert_eq!(router.path(), "~/podcast/2");
        router.execute_command("cd ../");
        assert_eq!(router.path(), "~/podcast");
    }

    #[test]
    fn test_unknown_cd_is_silent() {
        let mut router = test_router();
        router.execute_command("cd podcast");
        router.set_input("cd nope");
        let command = router.submit();
        assert_eq!(command, Command::Cd(CdTarget::Unresolved("nope".into())));
        assert_eq!(router.current_page(), Page::Podcast);
        assert_eq!(router.input(), "");
        assert_eq!(router.history().get(0), Some("cd nope"));
    }

    #[test]
    fn test_stray_slashes_do_not_navigate() {
        let mut router = test_router();
        router.execute_command("cd podcast");
        router.execute_command("cd /");
        assert_eq!(router.path(), "~/podcast");

        router.execute_command("cd internships/turing");
        router.execute_command("cd ///");
        assert_eq!(router.path(), "~/internships/turing");

        router.execute_command("cd ..");
        router.execute_command("cd ~/humanx");
        assert_eq!(router.path(), "~/internships");
        assert_eq!(router.current_internship(), None);
    }

    #[test]
    fn test_unrecognized_command_still_recorded() {
        let mut router = test_router();
        router.execute_command("  whoami  ");
        assert_eq!(router.history().get(0), Some("whoami"));
        assert_eq!(router.current_page(), Page::Home);
    }

    #[test]
    fn test_empty_command_not_recorded() {
        let mut router = test_router();
        router.execute_command("   ");
        assert!(router.history().is_empty());
    }

    #[test]
    fn test_history_bounded_newest_first() {
        let mut router = test_router();
        for i in 0..21 {
            router.execute_command(&format!("echo {i}"));
        }
        assert_eq!(router.history().len(), 20);
        assert_eq!(router.history().get(0), Some("echo 20"));
    }

    #[test]
    fn test_clear_then_up_arrow_does_nothing() {
        let mut router = test_router();
        router.execute_command("cd podcast");
        router.execute_command("clear");
        assert!(router.history().is_empty());
        router.set_input("typed");
        router.recall_older();
        assert_eq!(router.input(), "typed");
    }

    #[test]
    fn test_history_recall_walk() {
        let mut router = test_router();
        router.execute_command("cd podcast");
        router.execute_command("cd ideas");
        router.recall_older();
        assert_eq!(router.input(), "cd ideas");
        router.recall_older();
        assert_eq!(router.input(), "cd podcast");
        router.recall_older();
        assert_eq!(router.input(), "cd podcast");
        router.recall_newer();
        assert_eq!(router.input(), "cd ideas");
        router.recall_newer();
        assert_eq!(router.input(), "");
    }

    #[test]
    fn test_history_command_expands_panel_idempotently() {
        let mut router = test_router();
        router.execute_command("history");
        assert!(router.history_expanded());
        router.execute_command("history");
        assert!(router.history_expanded());
    }

    #[test]
    fn test_ghost_text_and_tab() {
        let mut router = test_router();
        router.next_suggestion();
        router.next_suggestion();
        assert_eq!(router.suggestion(), "cd internships");
        router.set_input("cd i");
        assert_eq!(router.ghost_text(), Some("nternships"));
        assert!(!router.hint_visible());
        assert!(router.accept_suggestion());
        assert_eq!(router.input(), "cd internships");
        assert_eq!(router.ghost_text(), None);
    }

    #[test]
    fn test_tab_with_non_matching_input_is_noop() {
        let mut router = test_router();
        router.set_input("ls");
        assert!(!router.accept_suggestion());
        assert_eq!(router.input(), "ls");
    }

    #[test]
    fn test_navigate_to_unknown_page_is_noop() {
        let mut router = test_router();
        router.execute_command("cd github");
        router.navigate_to("blog");
        router.navigate_to("internship-nope");
        router.navigate_to("idea-nope");
        assert_eq!(router.current_page(), Page::Github);
        assert!(router.view().overlay().is_none());
    }

    #[test]
    fn test_navigate_to_clears_overlay_and_input() {
        let mut router = test_router();
        router.navigate_to("internship-ema");
        router.set_input("cd ");
        router.navigate_to("vericare");
        assert_eq!(router.current_page(), Page::Vericare);
        assert_eq!(router.current_internship(), None);
        assert_eq!(router.input(), "");
    }

    #[test]
    fn test_internship_round_trip_for_every_slug() {
        let mut router = test_router();
        let slugs: Vec<String> = router
            .catalog()
            .internships
            .iter()
            .map(|i| i.slug.clone())
            .collect();
        for slug in slugs {
            router.navigate_to(&format!("internship-{slug}"));
            assert_eq!(router.current_internship(), Some(slug.as_str()));
            router.hide_internship_detail();
            assert_eq!(router.current_internship(), None);
            assert!(router.visible_views().contains(&ViewId::InternshipList));
        }
    }

    #[test]
    fn test_overlay_operations_idempotent() {
        let mut router = test_router();
        router.show_podcast_detail(0);
        router.show_podcast_detail(0);
        assert_eq!(router.current_episode(), Some(0));
        router.hide_podcast_detail();
        router.hide_podcast_detail();
        assert_eq!(router.current_episode(), None);
        assert_eq!(router.current_page(), Page::Podcast);
        assert!(!router.show_podcast_detail(99));
    }

    #[test]
    fn test_activate_starts_suggestions_once() {
        let mut router = test_router();
        let now = Instant::now();
        assert!(!router.suggestions_running());
        router.activate(now);
        router.activate(now);
        assert!(router.is_active());
        assert!(router.suggestions_running());
        assert!(router.tick(now + Duration::from_secs(5)));
        assert_eq!(router.suggestion(), "cd vericare");
    }

    #[test]
    fn test_timer_keeps_running_while_typing() {
        let mut router = test_router();
        let now = Instant::now();
        router.activate(now);
        router.set_input("cd");
        assert!(router.tick(now + Duration::from_secs(5)));
        assert!(!router.hint_visible());
    }

    #[test]
    fn test_toggle_mode_disarms_and_rearms_timer() {
        let mut router = test_router();
        let now = Instant::now();
        router.activate(now);
        router.toggle_mode(now);
        assert_eq!(router.mode(), NavMode::Navbar);
        assert!(!router.suggestions_running());
        assert!(!router.tick(now + Duration::from_secs(30)));
        assert!(!router.hint_visible());

        router.toggle_mode(now + Duration::from_secs(30));
        assert_eq!(router.mode(), NavMode::Terminal);
        assert!(router.suggestions_running());
        assert!(!router.tick(now + Duration::from_secs(34)));
        assert!(router.tick(now + Duration::from_secs(35)));
    }

    #[test]
    fn test_back_visible_only_in_terminal_mode_away_from_home() {
        let mut router = test_router();
        assert!(!router.back_visible());
        router.execute_command("cd podcast");
        assert!(router.back_visible());
        router.toggle_mode(Instant::now());
        assert!(!router.back_visible());
    }

    #[test]
    fn test_set_catalog_closes_stale_overlay() {
        let mut router = test_router();
        router.execute_command("cd podcast/9");
        assert_eq!(router.current_episode(), Some(8));
        let mut catalog = Catalog::builtin();
        catalog.episodes.truncate(3);
        router.set_catalog(catalog);
        assert_eq!(router.current_episode(), None);
        assert_eq!(router.current_page(), Page::Podcast);
    }
}
