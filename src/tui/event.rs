use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Terminal input, already stripped of crossterm detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C. Quits from any phase.
    ForceQuit,
    InputChar(char),
    /// Bracketed paste. Newlines are dropped by the prompt.
    Paste(String),
    Backspace,
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    /// F2 or Ctrl+T: switch between terminal and navbar mode.
    ToggleMode,
    /// Ctrl+R: expand or collapse the history panel.
    ToggleHistory,
    /// Left mouse button press; the tap that confirms an intro command.
    Click,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    Resize,
}

/// Poll for an event without blocking.
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO).ok().flatten()
}

/// Waits up to `timeout` for one event. Unmapped events yield `Ok(None)`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(event::read()?))
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) => {
            // Kitty protocol reports releases too.
            if key.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleMode),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::ToggleHistory),
                (KeyModifiers::CONTROL, _) => None,
                (_, KeyCode::F(2)) => Some(TuiEvent::ToggleMode),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::Up),
                (_, KeyCode::Down) => Some(TuiEvent::Down),
                (_, KeyCode::Left) => Some(TuiEvent::Left),
                (_, KeyCode::Right) => Some(TuiEvent::Right),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            MouseEventKind::Down(MouseButton::Left) => Some(TuiEvent::Click),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
        assert_eq!(
            map_event(key(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ToggleMode)
        );
        // Other control chords must not type letters into the prompt.
        assert_eq!(map_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_plain_and_shifted_chars() {
        assert_eq!(
            map_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('a'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('~'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('~'))
        );
        assert_eq!(map_event(key(KeyCode::F(2), KeyModifiers::NONE)), Some(TuiEvent::ToggleMode));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(release), None);
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_left_click_and_wheel() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(TuiEvent::Click)
        );
        assert_eq!(map_event(mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(map_event(mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(map_event(mouse(MouseEventKind::ScrollUp)), Some(TuiEvent::ScrollUp));
    }

    #[test]
    fn test_resize_and_paste() {
        assert_eq!(map_event(Event::Resize(80, 24)), Some(TuiEvent::Resize));
        assert_eq!(
            map_event(Event::Paste("cd podcast".into())),
            Some(TuiEvent::Paste("cd podcast".into()))
        );
    }
}
