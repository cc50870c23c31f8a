//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders `App`, and turns
//! key presses into `core::Action` values. Nothing outside this module
//! knows about ratatui or crossterm.
//!
//! ## Event loop
//!
//! Every iteration sends `Action::Tick` so the intro and the suggestion
//! timer can catch up on deadlines, draws if anything changed, then waits
//! for input. The wait is short while the intro is animating (until its
//! next deadline) and longer once the portfolio is idle.
//!
//! Content loading runs on a tokio task and reports back over an
//! `mpsc` channel as `Action::CatalogLoaded`, the same path keyboard
//! actions take.

mod component;
mod components;
mod event;
pub mod markdown;
mod ui;

use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use log::{debug, info, warn};

use crate::api::{ContentClient, load_catalog};
use crate::content::Catalog;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::router::NavMode;
use crate::core::state::{App, Phase};
use crate::tui::component::EventHandler;
use crate::tui::components::{PageViewState, page_for_digit};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Upper bound on how long the loop sleeps waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Lower bound, so a deadline in the past doesn't spin the loop.
const MIN_POLL: Duration = Duration::from_millis(5);

/// Presentation state that is not part of the core.
pub struct TuiState {
    pub page_view: PageViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            page_view: PageViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            // Non-blinking: every draw resets the blink timer.
            SetCursorStyle::SteadyBlock,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let (tx, rx) = mpsc::channel();

    // --skip-intro hands off before the loop starts, so nothing else asks
    // for content.
    if app.phase == Phase::Portfolio && !app.offline {
        spawn_catalog_load(&config.api_base_url, tx.clone());
    }

    let result = event_loop(&mut terminal, &mut app, &mut tui, &config, &tx, &rx);
    ratatui::restore();
    info!("Terminal restored");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> io::Result<()> {
    let mut needs_redraw = true;

    loop {
        match apply(app, Action::Tick, config, tx) {
            Effect::Quit => return Ok(()),
            Effect::None => {}
            _ => needs_redraw = true,
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(poll_timeout(app))?;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            for action in dispatch(app, tui, event) {
                if apply(app, action, config, tx) == Effect::Quit {
                    return Ok(());
                }
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received background action");
            if apply(app, action, config, tx) == Effect::Quit {
                return Ok(());
            }
        }
    }
}

/// Runs one action through the core and performs its effect.
fn apply(
    app: &mut App,
    action: Action,
    config: &ResolvedConfig,
    tx: &mpsc::Sender<Action>,
) -> Effect {
    let effect = update(app, action);
    if effect == Effect::LoadCatalog {
        spawn_catalog_load(&config.api_base_url, tx.clone());
    }
    effect
}

/// Sleep until the intro's next step, or idle between timer checks.
fn poll_timeout(app: &App) -> Duration {
    if app.phase == Phase::Intro
        && let Some(deadline) = app.intro.next_deadline()
    {
        return deadline
            .saturating_duration_since(app.now())
            .clamp(MIN_POLL, IDLE_POLL);
    }
    IDLE_POLL
}

/// Maps one terminal event to the core actions it stands for.
///
/// Scrolling and card selection are handled here against `TuiState`
/// and never reach the core.
fn dispatch(app: &App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    if event == TuiEvent::ForceQuit {
        return vec![Action::Quit];
    }
    if app.phase == Phase::Intro {
        return match event {
            TuiEvent::Enter | TuiEvent::Click => vec![Action::ConfirmIntro],
            TuiEvent::Tab => vec![Action::SkipIntro],
            _ => vec![],
        };
    }

    match event {
        TuiEvent::ToggleMode => return vec![Action::ToggleMode],
        TuiEvent::ToggleHistory => return vec![Action::ToggleHistoryPanel],
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.page_view.handle_event(&event);
            return vec![];
        }
        _ => {}
    }

    match app.router.mode() {
        NavMode::Terminal => terminal_keys(app, event),
        NavMode::Navbar => navbar_keys(tui, event),
    }
}

fn terminal_keys(app: &App, event: TuiEvent) -> Vec<Action> {
    let input_empty = app.router.input().is_empty();
    let action = match event {
        TuiEvent::InputChar(c) => Action::InputChar(c),
        TuiEvent::Paste(text) => {
            return text
                .chars()
                .filter(|c| !c.is_control())
                .map(Action::InputChar)
                .collect();
        }
        TuiEvent::Backspace => Action::Backspace,
        TuiEvent::Enter => Action::Submit,
        TuiEvent::Tab => Action::AcceptSuggestion,
        TuiEvent::Up => Action::HistoryOlder,
        TuiEvent::Down => Action::HistoryNewer,
        TuiEvent::Left if input_empty => Action::PrevSuggestion,
        TuiEvent::Right if input_empty => Action::NextSuggestion,
        TuiEvent::Escape => Action::Back,
        _ => return vec![],
    };
    vec![action]
}

fn navbar_keys(tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    let action = match event {
        TuiEvent::InputChar('q') => Action::Quit,
        TuiEvent::InputChar(c) => match page_for_digit(c) {
            Some(page) => Action::Navigate(page.key().to_string()),
            None => return vec![],
        },
        TuiEvent::Left => Action::NavigateAdjacent(-1),
        TuiEvent::Right => Action::NavigateAdjacent(1),
        TuiEvent::Escape | TuiEvent::Backspace => Action::Back,
        TuiEvent::Up | TuiEvent::Down | TuiEvent::Enter => {
            return tui.page_view.handle_event(&event).into_iter().collect();
        }
        _ => return vec![],
    };
    vec![action]
}

fn spawn_catalog_load(base_url: &str, tx: mpsc::Sender<Action>) {
    let base_url = base_url.to_string();
    info!("Loading content from {}", base_url);
    tokio::spawn(async move {
        let client = ContentClient::new(base_url);
        let load = load_catalog(&client, Catalog::builtin()).await;
        let action = Action::CatalogLoaded {
            catalog: load.catalog,
            origin: load.origin,
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver catalog: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::Page;
    use crate::test_support::{portfolio_app, test_app};

    #[test]
    fn test_intro_keys() {
        let (app, _clock) = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Enter), vec![Action::ConfirmIntro]);
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Tab), vec![Action::SkipIntro]);
        assert!(dispatch(&app, &mut tui, TuiEvent::InputChar('c')).is_empty());
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::ForceQuit), vec![Action::Quit]);
    }

    #[test]
    fn test_click_confirms_intro_only() {
        let (app, _clock) = test_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Click), vec![Action::ConfirmIntro]);

        let (app, _clock) = portfolio_app();
        assert!(dispatch(&app, &mut tui, TuiEvent::Click).is_empty());
    }

    #[test]
    fn test_terminal_tab_accepts_suggestion_after_intro() {
        let (app, _clock) = portfolio_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Tab), vec![Action::AcceptSuggestion]);
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Up), vec![Action::HistoryOlder]);
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Escape), vec![Action::Back]);
    }

    #[test]
    fn test_arrows_cycle_suggestions_only_when_input_empty() {
        let (mut app, _clock) = portfolio_app();
        let mut tui = TuiState::new();
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Right), vec![Action::NextSuggestion]);
        update(&mut app, Action::InputChar('c'));
        assert!(dispatch(&app, &mut tui, TuiEvent::Right).is_empty());
    }

    #[test]
    fn test_paste_types_each_char() {
        let (app, _clock) = portfolio_app();
        let mut tui = TuiState::new();
        let actions = dispatch(&app, &mut tui, TuiEvent::Paste("cd ~\n".into()));
        assert_eq!(
            actions,
            vec![
                Action::InputChar('c'),
                Action::InputChar('d'),
                Action::InputChar(' '),
                Action::InputChar('~'),
            ]
        );
    }

    #[test]
    fn test_navbar_keys() {
        let (mut app, _clock) = portfolio_app();
        update(&mut app, Action::ToggleMode);
        let mut tui = TuiState::new();
        assert_eq!(
            dispatch(&app, &mut tui, TuiEvent::InputChar('2')),
            vec![Action::Navigate(Page::Podcast.key().to_string())]
        );
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::Left), vec![Action::NavigateAdjacent(-1)]);
        assert_eq!(dispatch(&app, &mut tui, TuiEvent::InputChar('q')), vec![Action::Quit]);
        // Nothing rendered yet, so there is no card to open.
        assert!(dispatch(&app, &mut tui, TuiEvent::Enter).is_empty());
    }

    #[test]
    fn test_poll_timeout_tracks_intro_deadline() {
        let (app, clock) = test_app();
        // First boot line is 500ms out, beyond the idle cap.
        assert_eq!(poll_timeout(&app), IDLE_POLL);
        clock.advance(Duration::from_millis(400));
        assert_eq!(poll_timeout(&app), Duration::from_millis(100));
        clock.advance(Duration::from_millis(200));
        assert_eq!(poll_timeout(&app), MIN_POLL);

        let (app, _clock) = portfolio_app();
        assert_eq!(poll_timeout(&app), IDLE_POLL);
    }
}
