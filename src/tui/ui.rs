use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::router::NavMode;
use crate::core::state::{App, Phase};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    HistoryPanel, IntroView, NAV_BAR_HEIGHT, NavBar, PROMPT_HEIGHT, PageView, PathBar, Prompt,
};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    match app.phase {
        Phase::Intro => IntroView::new(&app.intro).render(frame, frame.area()),
        Phase::Portfolio => draw_portfolio(frame, app, tui),
    }
}

fn draw_portfolio(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let router = &app.router;
    let area = frame.area();

    let mut path_bar = PathBar::new(
        router.path(),
        router.mode(),
        app.content_origin,
        app.notice.as_ref().map(|n| (n.text.clone(), n.level)),
    );

    match router.mode() {
        NavMode::Terminal => {
            let mut history = HistoryPanel {
                entries: router.history().iter().collect(),
                expanded: router.history_expanded(),
                cursor: router.history().cursor(),
            };
            let history_height = history.height(area.height / 3);
            let [bar_area, body_area, history_area, prompt_area] = Layout::vertical([
                Length(1),
                Min(0),
                Length(history_height),
                Length(PROMPT_HEIGHT),
            ])
            .areas(area);

            path_bar.render(frame, bar_area);
            draw_body(frame, app, tui, body_area, false);
            history.render(frame, history_area);

            let path = router.path();
            let mut prompt = Prompt {
                path: &path,
                input: router.input(),
                ghost: router.ghost_text(),
                hint: router.hint_visible().then(|| router.suggestion()),
                show_back: router.back_visible(),
            };
            prompt.render(frame, prompt_area);
        }
        NavMode::Navbar => {
            let [bar_area, nav_area, body_area] =
                Layout::vertical([Length(1), Length(NAV_BAR_HEIGHT), Min(0)]).areas(area);
            path_bar.render(frame, bar_area);
            NavBar {
                active: router.current_page(),
            }
            .render(frame, nav_area);
            draw_body(frame, app, tui, body_area, true);
        }
    }
}

fn draw_body(frame: &mut Frame, app: &App, tui: &mut TuiState, area: Rect, selection: bool) {
    PageView::new(&mut tui.page_view, &app.router, selection).render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::intro::BOOT_MESSAGES;
    use crate::core::state::NoticeLevel;
    use crate::test_support::{portfolio_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn screen(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_intro_phase_draws_boot_sequence() {
        let (mut app, clock) = test_app();
        clock.advance(Duration::from_millis(500));
        update(&mut app, Action::Tick);
        let text = screen(&app, &mut TuiState::new());
        assert!(text.contains(BOOT_MESSAGES[0]));
    }

    #[test]
    fn test_terminal_mode_layout() {
        let (mut app, _clock) = portfolio_app();
        update(&mut app, Action::Navigate("podcast".into()));
        app.show_notice("Showing built-in content.", NoticeLevel::Warning);
        let text = screen(&app, &mut TuiState::new());
        assert!(text.contains("~/podcast"));
        assert!(text.contains("Showing built-in content."));
        assert!(text.contains("history (0/20)"));
        assert!(text.contains("tarushgupta@tarush's_macbook_pro:~/podcast$"));
        assert!(text.contains("Esc: cd .."));
    }

    #[test]
    fn test_navbar_mode_replaces_prompt_with_tabs() {
        let (mut app, _clock) = portfolio_app();
        update(&mut app, Action::ToggleMode);
        let text = screen(&app, &mut TuiState::new());
        assert!(text.contains("1 Home"));
        assert!(text.contains("6 GitHub"));
        assert!(!text.contains("tarushgupta@"));
        assert!(!text.contains("history ("));
    }
}
