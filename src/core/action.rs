//! # Actions
//!
//! Everything that can happen in Citadel becomes an `Action`.
//! Visitor presses Enter at the prompt? That's `Action::Submit`.
//! Content API responds? That's `Action::CatalogLoaded`.
//!
//! The `update()` function applies an action to the state and returns an
//! [`Effect`] telling the adapter what I/O, if any, to perform next.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::content::{Catalog, ContentOrigin};
use crate::core::intro::IntroSignal;
use crate::core::page::Page;
use crate::core::state::{App, NoticeLevel, Phase};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Timer pulse from the event loop.
    Tick,

    // Intro
    ConfirmIntro,
    SkipIntro,

    // Prompt editing
    InputChar(char),
    Backspace,
    Submit,
    AcceptSuggestion,
    HistoryOlder,
    HistoryNewer,
    NextSuggestion,
    PrevSuggestion,
    ToggleHistoryPanel,

    // Navigation
    ToggleMode,
    /// Same targets as `Router::navigate_to`.
    Navigate(String),
    /// Step through pages in tab order (navbar Left/Right).
    NavigateAdjacent(isize),
    OpenEpisode(usize),
    /// `cd ..` without typing it.
    Back,

    CatalogLoaded {
        catalog: Catalog,
        origin: ContentOrigin,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Something visible changed.
    Redraw,
    /// Fetch content from the API and report back with `CatalogLoaded`.
    LoadCatalog,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    if !matches!(action, Action::Tick) {
        debug!("update: {:?}", action);
    }
    match action {
        Action::Quit => Effect::Quit,
        Action::Tick => tick(app),
        Action::CatalogLoaded { catalog, origin } => {
            catalog_loaded(app, catalog, origin);
            Effect::Redraw
        }
        Action::ConfirmIntro | Action::SkipIntro => intro_action(app, action),
        _ if app.phase == Phase::Intro => Effect::None,
        action => portfolio_action(app, action),
    }
}

fn tick(app: &mut App) -> Effect {
    let now = app.now();
    match app.phase {
        Phase::Intro => {
            if let Some(IntroSignal::Activate) = app.intro.tick(now) {
                return activate(app);
            }
            // The intro is always animating.
            Effect::Redraw
        }
        Phase::Portfolio => {
            let mut changed = app.router.tick(now);
            if app.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
                app.notice = None;
                changed = true;
            }
            if changed { Effect::Redraw } else { Effect::None }
        }
    }
}

fn intro_action(app: &mut App, action: Action) -> Effect {
    if app.phase != Phase::Intro {
        return Effect::None;
    }
    let now = app.now();
    let changed = match action {
        Action::ConfirmIntro => app.intro.confirm(now),
        Action::SkipIntro => app.intro.skip(now),
        _ => false,
    };
    if changed { Effect::Redraw } else { Effect::None }
}

fn activate(app: &mut App) -> Effect {
    info!("Intro finished, showing portfolio");
    app.enter_portfolio();
    if app.offline {
        Effect::Redraw
    } else {
        Effect::LoadCatalog
    }
}

fn catalog_loaded(app: &mut App, catalog: Catalog, origin: ContentOrigin) {
    info!("Catalog loaded ({:?})", origin);
    app.router.set_catalog(catalog);
    app.content_origin = origin;
    match origin {
        ContentOrigin::Remote => {}
        ContentOrigin::Partial => app.show_notice(
            "Some content could not be loaded. Showing built-in data where missing.",
            NoticeLevel::Warning,
        ),
        ContentOrigin::Builtin => app.show_notice(
            "Content API unavailable. Showing built-in content.",
            NoticeLevel::Warning,
        ),
    }
}

fn portfolio_action(app: &mut App, action: Action) -> Effect {
    let now = app.now();
    let router = &mut app.router;
    match action {
        Action::InputChar(c) => router.insert_char(c),
        Action::Backspace => router.backspace(),
        Action::Submit => {
            router.submit();
        }
        Action::AcceptSuggestion => {
            router.accept_suggestion();
        }
        Action::HistoryOlder => router.recall_older(),
        Action::HistoryNewer => router.recall_newer(),
        Action::NextSuggestion => router.next_suggestion(),
        Action::PrevSuggestion => router.prev_suggestion(),
        Action::ToggleHistoryPanel => router.toggle_history_panel(),
        Action::ToggleMode => router.toggle_mode(now),
        Action::Navigate(target) => router.navigate_to(&target),
        Action::NavigateAdjacent(delta) => {
            let page = router.current_page().step(delta);
            router.navigate(page);
        }
        Action::OpenEpisode(index) => {
            if router.catalog().episode(index).is_some() {
                router.navigate(Page::Podcast);
                router.show_podcast_detail(index);
            }
        }
        Action::Back => router.go_up(),
        Action::Tick
        | Action::ConfirmIntro
        | Action::SkipIntro
        | Action::CatalogLoaded { .. }
        | Action::Quit => return Effect::None,
    }
    Effect::Redraw
}
